//! The export plan: look up, render, write
//!
//! An export task pairs an icon name with a relative destination path.
//! The default plan is fixed at authoring time and matches the static
//! assets the wiki frontend serves.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::registry::IconRegistry;
use crate::renderer::{render_icon, SvgConfig};

/// One export: an icon name paired with a relative destination path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTask {
    /// Name to look up in the registry
    pub icon: String,
    /// Destination path, resolved against the export root
    pub destination: PathBuf,
}

impl ExportTask {
    /// Create a new export task
    pub fn new(icon: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            icon: icon.into(),
            destination: destination.into(),
        }
    }
}

/// The fixed export plan: the two icons the directory listing pages use.
pub fn default_plan() -> Vec<ExportTask> {
    vec![
        ExportTask::new("file", "static/file.svg"),
        ExportTask::new("file-directory-fill", "static/file_directory.svg"),
    ]
}

/// Run an export plan sequentially, returning the paths written.
///
/// Each task looks up its icon, renders it, and writes the result to
/// `root`-relative destination, creating the file if absent and
/// truncating it if present. The destination directory is never created;
/// a missing or unwritable directory aborts the run. Execution stops at
/// the first failure, leaving earlier outputs in place.
pub fn run_plan(
    registry: &IconRegistry,
    config: &SvgConfig,
    root: &Path,
    plan: &[ExportTask],
) -> Result<Vec<PathBuf>, ExportError> {
    let mut written = Vec::with_capacity(plan.len());
    for task in plan {
        let icon = registry
            .get(&task.icon)
            .ok_or_else(|| ExportError::UnknownIcon {
                name: task.icon.clone(),
            })?;
        let svg = render_icon(icon, config);
        let path = root.join(&task.destination);
        fs::write(&path, svg).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_tasks() {
        let plan = default_plan();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0], ExportTask::new("file", "static/file.svg"));
        assert_eq!(
            plan[1],
            ExportTask::new("file-directory-fill", "static/file_directory.svg")
        );
    }

    #[test]
    fn test_default_plan_destinations_distinct() {
        let plan = default_plan();
        assert_ne!(plan[0].destination, plan[1].destination);
    }

    #[test]
    fn test_default_plan_icons_are_builtin() {
        let registry = IconRegistry::builtin();
        for task in default_plan() {
            assert!(registry.contains(&task.icon), "missing {}", task.icon);
        }
    }

    #[test]
    fn test_unknown_icon_error() {
        let registry = IconRegistry::new();
        let plan = vec![ExportTask::new("ghost", "static/ghost.svg")];
        let result = run_plan(&registry, &SvgConfig::default(), Path::new("."), &plan);
        assert!(matches!(
            result,
            Err(ExportError::UnknownIcon { ref name }) if name == "ghost"
        ));
    }
}
