//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Prefix for CSS class names (e.g., "octicon" for
    /// `class="octicon octicon-file"`)
    pub class_prefix: Option<String>,

    /// Output height in pixels; width is derived from the icon's viewBox
    /// aspect ratio. None renders at the icon's natural size.
    pub height: Option<u32>,

    /// Whether to mark the icon as hidden from assistive technology
    pub aria_hidden: bool,

    /// Accessible label; when set, the icon is emitted with `role="img"`
    /// instead of `aria-hidden`
    pub aria_label: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            class_prefix: Some("octicon".to_string()),
            height: None,
            aria_hidden: true,
            aria_label: None,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Set the output height
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set an accessible label
    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Set whether the icon is hidden from assistive technology
    pub fn with_aria_hidden(mut self, hidden: bool) -> Self {
        self.aria_hidden = hidden;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SvgConfig::default();
        assert_eq!(config.class_prefix, Some("octicon".to_string()));
        assert_eq!(config.height, None);
        assert!(config.aria_hidden);
        assert_eq!(config.aria_label, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SvgConfig::new()
            .with_class_prefix("icon")
            .with_height(32)
            .with_aria_label("A file");

        assert_eq!(config.class_prefix, Some("icon".to_string()));
        assert_eq!(config.height, Some(32));
        assert_eq!(config.aria_label, Some("A file".to_string()));
    }

    #[test]
    fn test_without_class_prefix() {
        let config = SvgConfig::new().without_class_prefix();
        assert_eq!(config.class_prefix, None);
    }
}
