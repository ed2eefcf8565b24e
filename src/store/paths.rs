use directories::ProjectDirs;
use std::path::PathBuf;

/// Default location of the catalog data file: the platform data directory,
/// falling back to the working directory when platform directories are
/// unavailable.
pub fn default_data_file() -> PathBuf {
    match ProjectDirs::from("", "", "stockroom") {
        Some(dirs) => dirs.data_dir().join("items.txt"),
        None => PathBuf::from("items.txt"),
    }
}
