//! SVG renderer
use crate::scene::{Group, Node, PathNode, RectNode, Scene, TextAnchor, TextNode};

use super::Renderer;

/// Renders a [`Scene`] into a standalone SVG document.
///
/// An empty scene renders into an empty string. If the scene has a viewport, the document is
/// sized to the viewport and the canvas is scaled into it using the `viewBox`.
#[derive(Clone, Debug, Default)]
pub struct SvgRenderer {
    output: String,
}

impl SvgRenderer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the document of the last render.
    #[inline]
    pub fn output(&self) -> &str {
        &self.output
    }

    #[inline]
    pub fn into_output(self) -> String {
        self.output
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, scene: &Scene) {
        let mut dst = String::new();

        if !scene.is_empty() {
            let (width, height) = match scene.viewport() {
                Some(viewport) => (viewport.width, viewport.height),
                None => (scene.width(), scene.height()),
            };

            dst.push_str(&format!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
                width,
                height,
                scene.width(),
                scene.height()
            ));

            for node in scene.nodes() {
                render_node(&mut dst, node);
            }

            dst.push_str("</svg>");
        }

        self.output = dst;
    }
}

fn render_node(dst: &mut String, node: &Node) {
    match node {
        Node::Group(group) => render_group(dst, group),
        Node::Rect(rect) => render_rect(dst, rect),
        Node::Path(path) => render_path(dst, path),
        Node::Text(text) => render_text(dst, text),
    }
}

fn render_group(dst: &mut String, group: &Group) {
    dst.push_str("<g class=\"");
    dst.push_str(group.class);
    dst.push('"');

    if let Some(id) = group.match_id {
        dst.push_str(&format!(" data-match-id=\"{}\"", id));
    }

    dst.push('>');

    for node in &group.children {
        render_node(dst, node);
    }

    dst.push_str("</g>");
}

fn render_rect(dst: &mut String, node: &RectNode) {
    dst.push_str(&format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
        node.rect.x, node.rect.y, node.rect.width, node.rect.height
    ));

    if node.radius > 0.0 {
        dst.push_str(&format!(" rx=\"{}\"", node.radius));
    }

    dst.push_str(" fill=\"");
    escape(dst, &node.fill);
    dst.push('"');

    if let Some(stroke) = &node.stroke {
        dst.push_str(" stroke=\"");
        escape(dst, stroke);
        dst.push('"');
    }

    dst.push_str("/>");
}

fn render_path(dst: &mut String, node: &PathNode) {
    dst.push_str("<path d=\"");
    escape(dst, &node.d);
    dst.push_str("\" fill=\"none\" stroke=\"");
    escape(dst, &node.stroke);
    dst.push_str(&format!("\" stroke-width=\"{}\"", node.stroke_width));

    if node.animate {
        // Normalized length, so the dash covers the whole path regardless of its length.
        dst.push_str(" pathLength=\"1\" stroke-dasharray=\"1\" stroke-dashoffset=\"1\">");
        dst.push_str(
            "<animate attributeName=\"stroke-dashoffset\" from=\"1\" to=\"0\" dur=\"0.6s\" fill=\"freeze\"/>",
        );
        dst.push_str("</path>");
    } else {
        dst.push_str("/>");
    }
}

fn render_text(dst: &mut String, node: &TextNode) {
    let anchor = match node.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };

    dst.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" text-anchor=\"{}\" font-family=\"",
        node.x, node.y, anchor
    ));
    escape(dst, &node.font_family);
    dst.push_str(&format!("\" font-size=\"{}\" fill=\"", node.font_size));
    escape(dst, &node.fill);
    dst.push('"');

    if node.bold {
        dst.push_str(" font-weight=\"bold\"");
    }

    dst.push('>');
    escape(dst, &node.content);
    dst.push_str("</text>");
}

/// Writes `text` into `dst`, escaping all XML special characters.
fn escape(dst: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => dst.push_str("&amp;"),
            '<' => dst.push_str("&lt;"),
            '>' => dst.push_str("&gt;"),
            '"' => dst.push_str("&quot;"),
            '\'' => dst.push_str("&apos;"),
            c => dst.push(c),
        }
    }
}
