use serde::{Deserialize, Serialize};

/// Base sizes rendered when no configuration file overrides them.
pub const DEFAULT_ICON_SIZES: [u32; 5] = [16, 32, 128, 256, 512];

/// Largest accepted base size. Its `@2x` variant is 16384px.
pub const MAX_ICON_SIZE: u32 = 8192;

/// Icon configuration from `tools/config.json`
///
/// Each field falls back to its own default when absent, so a file containing
/// only `{"generate_retina": false}` still renders the default size list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconConfig {
    #[serde(default = "default_icon_sizes")]
    pub icon_sizes: Vec<u32>,

    #[serde(default = "default_generate_retina")]
    pub generate_retina: bool,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            icon_sizes: default_icon_sizes(),
            generate_retina: default_generate_retina(),
        }
    }
}

fn default_icon_sizes() -> Vec<u32> {
    DEFAULT_ICON_SIZES.to_vec()
}

fn default_generate_retina() -> bool {
    true
}

impl IconConfig {
    /// Number of PNG files a run with this configuration produces.
    pub fn expected_file_count(&self) -> usize {
        let per_size = if self.generate_retina { 2 } else { 1 };
        self.icon_sizes.len() * per_size
    }

    /// First configured size that is zero or above [`MAX_ICON_SIZE`], if any.
    pub fn invalid_size(&self) -> Option<u32> {
        self.icon_sizes
            .iter()
            .copied()
            .find(|&size| size == 0 || size > MAX_ICON_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_config_defaults() {
        let config = IconConfig::default();
        assert_eq!(config.icon_sizes, vec![16, 32, 128, 256, 512]);
        assert!(config.generate_retina);
        assert_eq!(config.expected_file_count(), 10);
    }

    #[test]
    fn test_partial_config_fills_missing_fields() {
        let config: IconConfig = serde_json::from_str(r#"{"generate_retina": false}"#).unwrap();
        assert_eq!(config.icon_sizes, DEFAULT_ICON_SIZES.to_vec());
        assert!(!config.generate_retina);
        assert_eq!(config.expected_file_count(), 5);

        let config: IconConfig = serde_json::from_str(r#"{"icon_sizes": [64]}"#).unwrap();
        assert_eq!(config.icon_sizes, vec![64]);
        assert!(config.generate_retina);
    }

    #[test]
    fn test_invalid_size_detection() {
        assert_eq!(IconConfig::default().invalid_size(), None);

        let config: IconConfig = serde_json::from_str(r#"{"icon_sizes": [16, 0]}"#).unwrap();
        assert_eq!(config.invalid_size(), Some(0));

        let config: IconConfig =
            serde_json::from_str(r#"{"icon_sizes": [3000000000, 16]}"#).unwrap();
        assert_eq!(config.invalid_size(), Some(3_000_000_000));

        let config = IconConfig {
            icon_sizes: vec![MAX_ICON_SIZE],
            generate_retina: true,
        };
        assert_eq!(config.invalid_size(), None);
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let result = serde_json::from_str::<IconConfig>(r#"{"icon_sizes": "16,32"}"#);
        assert!(result.is_err());
    }
}
