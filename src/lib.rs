//! Icon Exporter - renders named vector icons to static SVG assets
//!
//! This library provides an icon registry, an SVG renderer, and the fixed
//! export plan that writes the registry's icons to asset files on disk.
//!
//! # Example
//!
//! ```rust
//! use icon_exporter::render_named;
//!
//! let svg = render_named("file").unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod error;
pub mod export;
pub mod registry;
pub mod renderer;

pub use error::ExportError;
pub use export::{default_plan, run_plan, ExportTask};
pub use registry::{IconDefinition, IconPack, IconRegistry, RegistryError};
pub use renderer::{render_data_uri, render_icon, SvgConfig};

use std::path::{Path, PathBuf};

/// Render a built-in icon by name with the default configuration.
///
/// # Example
///
/// ```rust
/// use icon_exporter::render_named;
///
/// let svg = render_named("file-directory-fill").unwrap();
/// assert!(svg.contains("octicon-file-directory-fill"));
/// ```
pub fn render_named(name: &str) -> Result<String, ExportError> {
    let registry = IconRegistry::builtin();
    let icon = registry.get(name).ok_or_else(|| ExportError::UnknownIcon {
        name: name.to_string(),
    })?;
    Ok(render_icon(icon, &SvgConfig::default()))
}

/// Run the default export plan against `root` with the built-in registry.
///
/// Returns the paths written. The destination directory (`root/static`)
/// must already exist.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
///
/// let written = icon_exporter::export_defaults(Path::new(".")).unwrap();
/// assert_eq!(written.len(), 2);
/// ```
pub fn export_defaults(root: &Path) -> Result<Vec<PathBuf>, ExportError> {
    run_plan(
        &IconRegistry::builtin(),
        &SvgConfig::default(),
        root,
        &default_plan(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_named_file() {
        let svg = render_named("file").unwrap();
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"class="octicon octicon-file""#));
    }

    #[test]
    fn test_render_named_directory_fill() {
        let svg = render_named("file-directory-fill").unwrap();
        assert!(svg.contains(r#"viewBox="0 0 16 16""#));
        assert!(svg.contains("<path"));
    }

    #[test]
    fn test_render_named_unknown() {
        let result = render_named("no-such-icon");
        assert!(matches!(
            result,
            Err(ExportError::UnknownIcon { ref name }) if name == "no-such-icon"
        ));
    }
}
