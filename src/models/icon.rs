/// One rasterized output file, in generation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub filename: String,
    /// Actual pixel dimension of the PNG (square).
    pub pixel_size: u32,
    pub is_retina: bool,
}

impl GeneratedFile {
    /// Standard-resolution output for base size `size`.
    pub fn standard(size: u32) -> Self {
        Self {
            filename: format!("icon_{size}x{size}.png"),
            pixel_size: size,
            is_retina: false,
        }
    }

    /// `@2x` output for base size `size`, rendered at twice the dimension.
    ///
    /// Sizes are bounded by [`crate::models::MAX_ICON_SIZE`] before planning; the
    /// saturating multiply only keeps unchecked callers from overflowing.
    pub fn retina(size: u32) -> Self {
        Self {
            filename: format!("icon_{size}x{size}@2x.png"),
            pixel_size: size.saturating_mul(2),
            is_retina: true,
        }
    }

    /// The non-retina dimension this file represents.
    pub fn base_size(&self) -> u32 {
        if self.is_retina {
            self.pixel_size / 2
        } else {
            self.pixel_size
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_file_naming() {
        let file = GeneratedFile::standard(128);
        assert_eq!(file.filename, "icon_128x128.png");
        assert_eq!(file.pixel_size, 128);
        assert_eq!(file.base_size(), 128);
    }

    #[test]
    fn test_retina_file_naming() {
        let file = GeneratedFile::retina(512);
        assert_eq!(file.filename, "icon_512x512@2x.png");
        assert_eq!(file.pixel_size, 1024);
        assert_eq!(file.base_size(), 512);
    }

    #[test]
    fn test_retina_of_huge_size_does_not_overflow() {
        let file = GeneratedFile::retina(3_000_000_000);
        assert_eq!(file.pixel_size, u32::MAX);
    }
}
