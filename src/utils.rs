pub trait NumExt {
    /// Returns the base 2 logarithm of the number, rounding up to the next integer. Returns `0`
    /// for `0` and `1`.
    fn ilog2_ceil(self) -> Self;
}

impl NumExt for u32 {
    #[inline]
    fn ilog2_ceil(self) -> Self {
        if self <= 1 {
            0
        } else {
            (self - 1).ilog2() + 1
        }
    }
}
