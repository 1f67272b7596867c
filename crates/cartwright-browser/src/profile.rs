use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Chrome user-data directory for one session.
///
/// Ephemeral profiles are removed on drop; named profiles live under
/// `~/.cartwright/profiles/<name>` and survive across runs (useful when a
/// scenario needs an already signed-in storefront account).
#[derive(Debug)]
pub enum BrowserProfile {
    Ephemeral(PathBuf),
    Persistent(PathBuf),
}

impl BrowserProfile {
    pub fn ephemeral() -> Result<Self> {
        let dir = tempfile::tempdir().map_err(Error::Io)?;
        Ok(Self::Ephemeral(dir.keep()))
    }

    pub fn named(name: &str) -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Browser("Could not determine home directory".to_string()))?;
        let path = home.join(".cartwright").join("profiles").join(name);
        if !path.exists() {
            std::fs::create_dir_all(&path).map_err(Error::Io)?;
        }
        Ok(Self::Persistent(path))
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Ephemeral(path) | Self::Persistent(path) => path,
        }
    }
}

impl Drop for BrowserProfile {
    fn drop(&mut self) {
        if let Self::Ephemeral(path) = self {
            if path.exists() {
                let _ = std::fs::remove_dir_all(&path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ephemeral_profile_removed_on_drop() {
        let profile = BrowserProfile::ephemeral().unwrap();
        let path = profile.path().to_path_buf();
        assert!(path.is_dir());

        drop(profile);
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_named_profile_creates_directory_and_survives_drop() {
        // Redirect HOME so the test does not touch the real profile store.
        let fake_home = tempfile::tempdir().unwrap();
        unsafe { std::env::set_var("HOME", fake_home.path()) };

        let profile = BrowserProfile::named("test-profile").unwrap();
        let path = profile.path().to_path_buf();
        assert!(path.is_dir());
        assert!(path.ends_with(".cartwright/profiles/test-profile"));

        drop(profile);
        assert!(path.exists());
    }
}
