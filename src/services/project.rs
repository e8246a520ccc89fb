//! Project resolution from the working directory.
//!
//! Two strategies are tried in order:
//! - **Direct**: the start directory sits at `<root>/logos/<name>/`, so both root and name are known
//! - **Ancestor**: walk upward to the first directory containing a `logos/` subdirectory; the
//!   name must then come from the caller
//!
//! # Examples
//!
//! ```ignore
//! use macos_icons::services::project::resolve_project_context;
//! use camino::Utf8Path;
//!
//! let context = resolve_project_context(Utf8Path::new("/work/app/logos/SafarAI"), None)?;
//! assert_eq!(context.name, "SafarAI");
//! ```

use crate::error::GenerateError;
use crate::models::{LOGOS_DIR, ProjectContext, ProjectMatch};
use camino::Utf8Path;

/// Locates the project root starting from `start`.
///
/// `start` should already be absolute and canonical; the direct strategy compares
/// the literal name of its parent directory.
pub fn find_project(start: &Utf8Path) -> ProjectMatch {
    if let Some(parent) = start.parent() {
        if parent.file_name() == Some(LOGOS_DIR) {
            if let (Some(root), Some(name)) = (parent.parent(), start.file_name()) {
                if root.exists() {
                    tracing::debug!("Direct project match: root={}, name={}", root, name);
                    return ProjectMatch::Direct {
                        root: root.to_path_buf(),
                        name: name.to_string(),
                    };
                }
            }
        }
    }

    // The filesystem root itself is never treated as a project root
    for dir in start.ancestors().filter(|dir| dir.parent().is_some()) {
        if dir.join(LOGOS_DIR).is_dir() {
            tracing::debug!("Ancestor project match: root={}", dir);
            return ProjectMatch::Ancestor {
                root: dir.to_path_buf(),
            };
        }
    }

    tracing::debug!("No project found above {}", start);
    ProjectMatch::NotFound
}

/// Resolves the project context, letting `explicit_name` override any inferred name.
///
/// # Errors
///
/// - [`GenerateError::ProjectNotFound`] if neither strategy matches
/// - [`GenerateError::ProjectNameMissing`] if the ancestor strategy matched and no name was given
pub fn resolve_project_context(
    start: &Utf8Path,
    explicit_name: Option<&str>,
) -> Result<ProjectContext, GenerateError> {
    let (root, inferred_name) = match find_project(start) {
        ProjectMatch::Direct { root, name } => (root, Some(name)),
        ProjectMatch::Ancestor { root } => (root, None),
        ProjectMatch::NotFound => {
            return Err(GenerateError::ProjectNotFound {
                start: start.to_path_buf(),
            });
        }
    };

    let name = explicit_name
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .or(inferred_name)
        .ok_or(GenerateError::ProjectNameMissing)?;

    tracing::info!("Resolved project {} at {}", name, root);
    Ok(ProjectContext { root, name })
}
