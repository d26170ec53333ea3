/*
 * This module provides utility functions for path handling: resolving and
 * ensuring the existence of the application's configuration directory, the
 * default categories root under the user's home directory, and formatting a
 * local path as a file-scheme URL for the display surface.
 */
use directories::{ProjectDirs, UserDirs};
use std::fs;
use std::path::{Path, PathBuf};

// Directory created under the user's home when no categories root is configured.
pub const DEFAULT_CATEGORIES_DIR_NAME: &str = "MHTML_Categories";

/*
 * Retrieves the application's local configuration directory, creating it if
 * necessary. The path is derived without an organization qualifier, placing
 * it directly under the user's local application data structure.
 *
 * Returns `None` if the directory could not be determined or created.
 */
pub fn get_base_app_config_local_dir(app_name: &str) -> Option<PathBuf> {
    log::trace!("PathUtils: Resolving base app config local dir for '{app_name}'");
    ProjectDirs::from("", "", app_name).and_then(|proj_dirs| {
        let config_path = proj_dirs.config_local_dir();
        if !config_path.exists() {
            if let Err(e) = fs::create_dir_all(config_path) {
                log::error!(
                    "PathUtils: Failed to create base app config directory {config_path:?}: {e}"
                );
                return None;
            }
            log::debug!("PathUtils: Created base app config directory: {config_path:?}");
        }
        Some(config_path.to_path_buf())
    })
}

/*
 * Computes the default categories root: `<home>/MHTML_Categories`.
 * Returns `None` when the home directory cannot be determined. The directory
 * is not created here; `CategoryStoreOperations::ensure_root` does that.
 */
pub fn default_categories_root() -> Option<PathBuf> {
    UserDirs::new().map(|dirs| dirs.home_dir().join(DEFAULT_CATEGORIES_DIR_NAME))
}

/*
 * Formats a local path as a file-scheme URL string for the display surface.
 * Backslashes are normalized to forward slashes so Windows paths produce
 * well-formed URLs. Spaces are percent-encoded; other characters are left
 * as-is, which the display surface accepts for local files.
 */
pub fn to_file_url(path: &Path) -> String {
    let text = path.to_string_lossy().replace('\\', "/");
    let text = text.replace(' ', "%20");
    if text.starts_with('/') {
        format!("file://{text}")
    } else {
        format!("file:///{text}")
    }
}
