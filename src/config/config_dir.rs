use std::path::{Path, PathBuf};

use super::error::{ConfigError, ConfigResult};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Per-user config location: `$HOME/.config/lms-admin/config.toml` on unix,
/// `%APPDATA%\lms-admin\config.toml` on windows.
fn user_config_file() -> Option<PathBuf> {
    #[cfg(unix)]
    let base = std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"));
    #[cfg(windows)]
    let base = std::env::var_os("APPDATA").map(PathBuf::from);
    #[cfg(not(any(unix, windows)))]
    let base: Option<PathBuf> = None;

    base.map(|dir| dir.join(crate::APPLICATION_NAME).join(CONFIG_FILE_NAME))
}

/// Working-directory `config.toml` for local runs, otherwise the per-user file
/// when it exists.
pub fn find_config_file(use_local: bool) -> PathBuf {
    let local = PathBuf::from(".").join(CONFIG_FILE_NAME);
    if use_local {
        return local;
    }

    user_config_file()
        .filter(|path| path.exists())
        .unwrap_or(local)
}

pub fn read_config(use_local: bool) -> ConfigResult<Vec<u8>> {
    read_config_from(&find_config_file(use_local))
}

pub fn read_config_from(path: &Path) -> ConfigResult<Vec<u8>> {
    tracing::trace!("looking for config at: {}", path.display());
    if !path.is_file() {
        return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path)?;
    tracing::debug!("loaded {} bytes of configuration from {}", bytes.len(), path.display());
    Ok(bytes)
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::*;

    #[test]
    fn local_lookup_uses_working_directory() {
        assert_eq!(find_config_file(true), PathBuf::from("./config.toml"));
    }

    #[test]
    fn user_config_is_preferred_when_present() {
        let temp_dir = tempfile::tempdir().unwrap();
        let app_dir = temp_dir
            .path()
            .join(".config")
            .join(crate::APPLICATION_NAME);
        fs::create_dir_all(&app_dir).unwrap();
        let config_file = app_dir.join("config.toml");
        fs::write(&config_file, "[host]\nbindto = '0.0.0.0:80'").unwrap();

        #[cfg(unix)]
        unsafe {
            std::env::set_var("HOME", temp_dir.path());
        }

        #[cfg(windows)]
        unsafe {
            std::env::set_var("APPDATA", temp_dir.path().join(".config"));
        }

        assert_eq!(find_config_file(false), config_file);
    }

    #[test]
    fn reads_file_bytes() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("config.toml");
        fs::write(&file_path, b"foo = 'bar'").unwrap();

        assert_eq!(read_config_from(&file_path).unwrap(), b"foo = 'bar'");
    }

    #[test]
    fn missing_file_reports_its_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let absent = temp_dir.path().join("absent.toml");

        let err = read_config_from(&absent).unwrap_err();
        assert!(matches!(&err, ConfigError::ConfigNotFound(path) if *path == absent));
        assert!(err.to_string().contains("absent.toml"));

        // a directory is not a config file
        assert!(matches!(
            read_config_from(temp_dir.path()),
            Err(ConfigError::ConfigNotFound(_))
        ));
    }
}
