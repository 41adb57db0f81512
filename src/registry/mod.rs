//! Icon registry for storing and retrieving icon definitions

use std::collections::HashMap;

use thiserror::Error;

mod builtin;
pub mod pack;

pub use pack::IconPack;

/// Errors that can occur during registry operations
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Duplicate icon registration
    #[error("duplicate icon definition: {name}")]
    Duplicate { name: String },
}

/// A renderable icon: a name, a natural viewBox size, and the inner SVG
/// markup (everything between the `<svg>` tags).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDefinition {
    /// Icon name, as used for lookup and in the emitted CSS class
    pub name: String,
    /// Natural viewBox width
    pub width: u32,
    /// Natural viewBox height
    pub height: u32,
    /// Inner SVG markup
    pub body: String,
}

impl IconDefinition {
    /// Create a new icon definition
    pub fn new(
        name: impl Into<String>,
        width: u32,
        height: u32,
        body: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            body: body.into(),
        }
    }
}

/// Registry mapping icon names to their definitions
#[derive(Debug, Default)]
pub struct IconRegistry {
    icons: HashMap<String, IconDefinition>,
}

impl IconRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry preloaded with the built-in icon set
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for icon in builtin::BUILTIN_ICONS {
            registry
                .register(IconDefinition::new(
                    icon.name,
                    icon.width,
                    icon.height,
                    icon.body,
                ))
                .expect("Built-in icon set should have unique names");
        }
        registry
    }

    /// Register an icon definition
    pub fn register(&mut self, def: IconDefinition) -> Result<(), RegistryError> {
        if self.icons.contains_key(&def.name) {
            return Err(RegistryError::Duplicate {
                name: def.name.clone(),
            });
        }
        self.icons.insert(def.name.clone(), def);
        Ok(())
    }

    /// Get an icon by name
    pub fn get(&self, name: &str) -> Option<&IconDefinition> {
        self.icons.get(name)
    }

    /// Check if an icon exists
    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    /// Names of all registered icons, sorted for stable output
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.icons.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered icons
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Whether the registry holds no icons
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Absorb an icon pack. Pack entries override existing definitions of
    /// the same name.
    pub fn merge_pack(&mut self, pack: IconPack) {
        for icon in pack.into_icons() {
            self.icons.insert(icon.name.clone(), icon);
        }
    }
}
