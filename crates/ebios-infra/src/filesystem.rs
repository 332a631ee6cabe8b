//! Data-directory layout.
//!
//! The data directory holds `config.toml` and the terminal client's
//! `client-storage.json`.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "EBIOS_DATA_DIR";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `EBIOS_DATA_DIR` environment variable
/// 2. `~/.ebios`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".ebios");
    }

    PathBuf::from(".ebios")
}

/// `{data_dir}/config.toml`
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

/// `{data_dir}/client-storage.json`
pub fn client_storage_path(data_dir: &Path) -> PathBuf {
    data_dir.join("client-storage.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_paths() {
        let data_dir = PathBuf::from("/home/user/.ebios");
        assert_eq!(
            config_path(&data_dir),
            PathBuf::from("/home/user/.ebios/config.toml")
        );
        assert_eq!(
            client_storage_path(&data_dir),
            PathBuf::from("/home/user/.ebios/client-storage.json")
        );
    }

    #[test]
    fn test_resolve_data_dir_from_env() {
        // SAFETY: This is the only test in the crate touching EBIOS_DATA_DIR,
        // and it restores the variable immediately.
        unsafe {
            std::env::set_var(DATA_DIR_ENV, "/tmp/test-ebios");
        }
        let dir = resolve_data_dir();
        assert_eq!(dir, PathBuf::from("/tmp/test-ebios"));
        unsafe {
            std::env::remove_var(DATA_DIR_ENV);
        }
    }
}
