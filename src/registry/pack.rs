//! Icon pack loading
//!
//! An icon pack is a TOML file that adds icons to the registry or
//! re-skins built-in ones. Pack entries win over built-ins of the same
//! name, so a deployment can swap artwork without recompiling.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::IconDefinition;

/// Errors that can occur when loading or parsing icon packs
#[derive(Error, Debug)]
pub enum PackError {
    #[error("Failed to read icon pack file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse icon pack TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid icon '{name}' in pack: {reason}")]
    InvalidIcon { name: String, reason: String },
}

/// A parsed icon pack
#[derive(Debug, Clone)]
pub struct IconPack {
    /// Optional name for the pack
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    icons: Vec<IconDefinition>,
}

/// TOML structure for deserializing icon packs
#[derive(Deserialize)]
struct TomlPack {
    metadata: Option<TomlMetadata>,
    icons: HashMap<String, TomlIcon>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct TomlIcon {
    width: u32,
    height: u32,
    body: String,
}

impl IconPack {
    /// Load an icon pack from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, PackError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load an icon pack from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, PackError> {
        let parsed: TomlPack = toml::from_str(content)?;

        let mut icons = Vec::with_capacity(parsed.icons.len());
        for (name, icon) in parsed.icons {
            if icon.width == 0 || icon.height == 0 {
                return Err(PackError::InvalidIcon {
                    name,
                    reason: "width and height must be positive".to_string(),
                });
            }
            if icon.body.trim().is_empty() {
                return Err(PackError::InvalidIcon {
                    name,
                    reason: "body is empty".to_string(),
                });
            }
            icons.push(IconDefinition::new(name, icon.width, icon.height, icon.body));
        }
        // TOML tables deserialize through a HashMap, so order the icons by
        // name to keep merge results reproducible.
        icons.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(IconPack {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            icons,
        })
    }

    /// Icons carried by this pack, ordered by name
    pub fn icons(&self) -> &[IconDefinition] {
        &self.icons
    }

    /// Consume the pack, yielding its icons
    pub fn into_icons(self) -> Vec<IconDefinition> {
        self.icons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pack_with_metadata() {
        let toml_str = r##"
[metadata]
name = "Test Pack"
description = "A test pack"

[icons.dot]
width = 16
height = 16
body = '<circle cx="8" cy="8" r="4"/>'
"##;
        let pack = IconPack::from_toml_str(toml_str).expect("Should parse");
        assert_eq!(pack.name, Some("Test Pack".to_string()));
        assert_eq!(pack.description, Some("A test pack".to_string()));
        assert_eq!(pack.icons().len(), 1);
        assert_eq!(pack.icons()[0].name, "dot");
    }

    #[test]
    fn test_parse_pack_without_metadata() {
        let toml_str = r##"
[icons.dot]
width = 16
height = 16
body = '<circle cx="8" cy="8" r="4"/>'
"##;
        let pack = IconPack::from_toml_str(toml_str).expect("Should parse");
        assert_eq!(pack.name, None);
        assert_eq!(pack.icons().len(), 1);
    }

    #[test]
    fn test_pack_icons_sorted_by_name() {
        let toml_str = r##"
[icons.zebra]
width = 16
height = 16
body = '<path d="M0 0h16v16H0z"/>'

[icons.ant]
width = 16
height = 16
body = '<path d="M0 0h16v16H0z"/>'
"##;
        let pack = IconPack::from_toml_str(toml_str).expect("Should parse");
        let names: Vec<&str> = pack.icons().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["ant", "zebra"]);
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = IconPack::from_toml_str(invalid);
        assert!(matches!(result, Err(PackError::ParseError(_))));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let toml_str = r##"
[icons.flat]
width = 0
height = 16
body = '<path d="M0 0h16"/>'
"##;
        let result = IconPack::from_toml_str(toml_str);
        assert!(matches!(result, Err(PackError::InvalidIcon { .. })));
    }

    #[test]
    fn test_empty_body_rejected() {
        let toml_str = r##"
[icons.ghost]
width = 16
height = 16
body = "   "
"##;
        let result = IconPack::from_toml_str(toml_str);
        assert!(matches!(
            result,
            Err(PackError::InvalidIcon { ref name, .. }) if name == "ghost"
        ));
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let toml_str = r##"
[icons.partial]
width = 16
"##;
        let result = IconPack::from_toml_str(toml_str);
        assert!(matches!(result, Err(PackError::ParseError(_))));
    }
}
