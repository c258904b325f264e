use std::env;
use std::io;
use std::path::Path;

use eto_bracket::RenderOptions;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

macro_rules! from_environment {
    ($config:expr, $($key:expr, $name:tt),*$(,)?) => {{
        $(
            {
                if let Ok(value) = env::var($key) {
                    match value.parse() {
                        Ok(value) => $config.$name = value,
                        Err(_) => log::warn!("Ignoring invalid value for {}: {:?}", $key, value),
                    }
                }
            }
        )*
    }};
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub loglevel: LevelFilter,
    pub render: RenderOptions,
}

impl Config {
    pub async fn from_file<P>(path: P) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
    {
        let mut file = File::open(path).await?;

        let mut buf = Vec::new();
        file.read_to_end(&mut buf).await?;

        Ok(toml::from_slice(&buf)?)
    }

    /// Loads the config from `path`. Without a path the default config is used.
    pub async fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path).await,
            None => Ok(Self::default()),
        }
    }

    /// Overwrites all fields with the values from `ETO_*` environment variables. Variables that
    /// are not set or fail to parse are skipped.
    pub fn with_environment(mut self) -> Self {
        from_environment!(self, "ETO_LOGLEVEL", loglevel);
        from_environment!(
            self.render,
            "ETO_BOX_WIDTH",
            box_width,
            "ETO_BOX_HEIGHT",
            box_height,
            "ETO_H_GAP",
            h_gap,
            "ETO_V_GAP",
            v_gap,
            "ETO_LINE_COLOR",
            line_color,
            "ETO_FONT_FAMILY",
            font_family,
        );

        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            loglevel: LevelFilter::Info,
            render: RenderOptions::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use std::env;

    use eto_bracket::RenderOptions;
    use log::LevelFilter;

    use super::Config;

    #[test]
    fn test_config_toml() {
        let input = r#"
            loglevel = "debug"

            [render]
            box_width = 150.0
            line_color = "red"
            show_round_titles = false
        "#;

        let config: Config = toml::from_str(input).unwrap();
        assert_eq!(config.loglevel, LevelFilter::Debug);
        assert_eq!(config.render.box_width, 150.0);
        assert_eq!(config.render.line_color, "red");
        assert!(!config.render.show_round_titles);
        assert_eq!(config.render.box_height, RenderOptions::default().box_height);

        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_environment() {
        env::set_var("ETO_LOGLEVEL", "trace");
        env::set_var("ETO_BOX_HEIGHT", "48");
        env::set_var("ETO_H_GAP", "not a number");
        env::set_var("ETO_FONT_FAMILY", "monospace");

        let config = Config::default().with_environment();

        env::remove_var("ETO_LOGLEVEL");
        env::remove_var("ETO_BOX_HEIGHT");
        env::remove_var("ETO_H_GAP");
        env::remove_var("ETO_FONT_FAMILY");

        assert_eq!(config.loglevel, LevelFilter::Trace);
        assert_eq!(config.render.box_height, 48.0);
        assert_eq!(config.render.h_gap, RenderOptions::default().h_gap);
        assert_eq!(config.render.font_family, "monospace");
    }
}
