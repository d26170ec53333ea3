/*
 * Manages the two persisted application settings: the source folder being
 * triaged and the categories root folder. They are stored as a flat JSON
 * object (keys `sourceFolder` and `categoriesRootFolder`) in a file inside
 * the platform config directory; an absent file or absent key means the
 * documented default applies (no source folder, home-directory categories
 * subfolder).
 *
 * A trait-based approach (`SettingsStoreOperations`) allows different
 * storage backends or mock implementations for testing. The concrete
 * implementation (`CoreSettingsStore`) resolves its directory through the
 * shared path utility.
 */
use crate::core::path_utils;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

const SETTINGS_FILENAME: &str = "settings.json";

#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Serde(serde_json::Error),
    NoConfigDirectory,
}

impl From<io::Error> for SettingsError {
    fn from(err: io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Serde(err)
    }
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "Settings I/O error: {e}"),
            SettingsError::Serde(e) => write!(f, "Settings serialization error: {e}"),
            SettingsError::NoConfigDirectory => {
                write!(f, "Could not determine configuration directory for settings")
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Serde(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SettingsError>;

/*
 * The persisted key/value pairs. Key names are fixed by the storage format;
 * anything else found in the file is ignored on load.
 */
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "sourceFolder", skip_serializing_if = "Option::is_none", default)]
    pub source_folder: Option<PathBuf>,
    #[serde(
        rename = "categoriesRootFolder",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub categories_root_folder: Option<PathBuf>,
}

pub trait SettingsStoreOperations: Send + Sync {
    // Absent settings file yields the defaults, not an error.
    fn load(&self, app_name: &str) -> Result<Settings>;
    fn save(&self, app_name: &str, settings: &Settings) -> Result<()>;
}

pub struct CoreSettingsStore {}

impl CoreSettingsStore {
    pub fn new() -> Self {
        CoreSettingsStore {}
    }

    fn settings_file_path(app_name: &str) -> Result<PathBuf> {
        let config_dir = path_utils::get_base_app_config_local_dir(app_name)
            .ok_or(SettingsError::NoConfigDirectory)?;
        Ok(config_dir.join(SETTINGS_FILENAME))
    }
}

impl Default for CoreSettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

// Shared by the concrete store and the tempdir-backed store used in tests.
pub(crate) fn load_settings_from(file_path: &Path) -> Result<Settings> {
    if !file_path.exists() {
        log::debug!("SettingsStore: Settings file {file_path:?} does not exist; using defaults.");
        return Ok(Settings::default());
    }
    let file = File::open(file_path)?;
    let reader = BufReader::new(file);
    let settings = serde_json::from_reader(reader)?;
    log::debug!("SettingsStore: Loaded settings from {file_path:?}: {settings:?}");
    Ok(settings)
}

pub(crate) fn save_settings_to(file_path: &Path, settings: &Settings) -> Result<()> {
    let file = File::create(file_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, settings)?;
    log::debug!("SettingsStore: Saved settings to {file_path:?}: {settings:?}");
    Ok(())
}

impl SettingsStoreOperations for CoreSettingsStore {
    fn load(&self, app_name: &str) -> Result<Settings> {
        log::trace!("SettingsStore: Loading settings for app '{app_name}'");
        let file_path = Self::settings_file_path(app_name)?;
        load_settings_from(&file_path)
    }

    fn save(&self, app_name: &str, settings: &Settings) -> Result<()> {
        log::trace!("SettingsStore: Saving settings for app '{app_name}'");
        let file_path = Self::settings_file_path(app_name)?;
        save_settings_to(&file_path, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    // Settings store that reads and writes inside a caller-supplied directory
    // instead of the real platform config directory.
    struct TestSettingsStore {
        mock_config_dir: PathBuf,
    }

    impl TestSettingsStore {
        fn new(mock_config_dir: PathBuf) -> Self {
            if !mock_config_dir.exists() {
                fs::create_dir_all(&mock_config_dir)
                    .expect("Failed to create mock config dir for test");
            }
            TestSettingsStore { mock_config_dir }
        }

        fn file_path(&self) -> PathBuf {
            self.mock_config_dir.join(SETTINGS_FILENAME)
        }
    }

    impl SettingsStoreOperations for TestSettingsStore {
        fn load(&self, _app_name: &str) -> Result<Settings> {
            load_settings_from(&self.file_path())
        }

        fn save(&self, _app_name: &str, settings: &Settings) -> Result<()> {
            save_settings_to(&self.file_path(), settings)
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        // Arrange
        let dir = tempdir().unwrap();
        let store = TestSettingsStore::new(dir.path().to_path_buf());
        let settings = Settings {
            source_folder: Some(PathBuf::from("/tmp/inbox")),
            categories_root_folder: Some(PathBuf::from("/tmp/categories")),
        };

        // Act
        store.save("AnyApp", &settings).unwrap();
        let loaded = store.load("AnyApp").unwrap();

        // Assert
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_returns_defaults_when_file_missing() {
        let dir = tempdir().unwrap();
        let store = TestSettingsStore::new(dir.path().to_path_buf());
        let loaded = store.load("AnyApp").unwrap();
        assert_eq!(loaded, Settings::default());
        assert!(loaded.source_folder.is_none());
        assert!(loaded.categories_root_folder.is_none());
    }

    #[test]
    fn test_settings_file_uses_documented_key_names() {
        // Arrange
        let dir = tempdir().unwrap();
        let store = TestSettingsStore::new(dir.path().to_path_buf());
        let settings = Settings {
            source_folder: Some(PathBuf::from("/tmp/inbox")),
            categories_root_folder: Some(PathBuf::from("/tmp/categories")),
        };

        // Act
        store.save("AnyApp", &settings).unwrap();
        let raw = fs::read_to_string(store.file_path()).unwrap();

        // Assert: the on-disk format is part of the external contract.
        assert!(raw.contains("\"sourceFolder\""), "Raw file was: {raw}");
        assert!(raw.contains("\"categoriesRootFolder\""), "Raw file was: {raw}");
    }

    #[test]
    fn test_load_tolerates_partial_settings_object() {
        // Arrange: only one of the two keys present.
        let dir = tempdir().unwrap();
        let store = TestSettingsStore::new(dir.path().to_path_buf());
        fs::write(store.file_path(), r#"{ "sourceFolder": "/tmp/inbox" }"#).unwrap();

        // Act
        let loaded = store.load("AnyApp").unwrap();

        // Assert
        assert_eq!(loaded.source_folder, Some(PathBuf::from("/tmp/inbox")));
        assert!(loaded.categories_root_folder.is_none());
    }

    #[test]
    fn test_save_overwrites_previous_settings() {
        let dir = tempdir().unwrap();
        let store = TestSettingsStore::new(dir.path().to_path_buf());
        let first = Settings {
            source_folder: Some(PathBuf::from("/tmp/one")),
            categories_root_folder: None,
        };
        let second = Settings {
            source_folder: Some(PathBuf::from("/tmp/two")),
            categories_root_folder: Some(PathBuf::from("/tmp/cats")),
        };

        store.save("AnyApp", &first).unwrap();
        store.save("AnyApp", &second).unwrap();

        assert_eq!(store.load("AnyApp").unwrap(), second);
    }
}
