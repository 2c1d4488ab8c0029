use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crate::config;
use crate::platform::PlatformPolicy;

pub const LOCALE_DIR: &str = "locale";
pub const CONFIG_DIR: &str = "config";
pub const SAMPLE_DIR: &str = "sample";

/// Substring that shields an installation-root entry from the purge.
/// Matched against the entry name, not the full path.
pub const CONFIG_MARKER: &str = "config";

/// Source bundle location: env override for development, otherwise the
/// process working directory.
pub fn bundle_root() -> Result<PathBuf> {
    if let Ok(dev_root) = std::env::var("STORYGRID_BUNDLE") {
        return Ok(PathBuf::from(dev_root));
    }
    std::env::current_dir().context("current_dir")
}

pub fn default_install_root(app_name: &str) -> Result<PathBuf> {
    if app_name.is_empty() {
        bail!("app_name is empty");
    }
    let custom = config::INSTALL_DIR.trim();
    if !custom.is_empty() {
        let base = PathBuf::from(custom);
        if base.is_absolute() {
            return Ok(base.join(app_name));
        }
        let home = dirs::home_dir().context("home directory not found")?;
        return Ok(home.join(vendor_dir_name()).join(base).join(app_name));
    }
    let home = dirs::home_dir().context("home directory not found")?;
    Ok(home.join(vendor_dir_name()).join(app_name))
}

fn vendor_dir_name() -> String {
    let company = config::COMPANY.trim();
    if company.is_empty() {
        format!(".{}", config::NAME.trim())
    } else {
        format!(".{}", company.to_lowercase())
    }
}

pub fn config_dir(install_root: &Path) -> PathBuf {
    install_root.join(CONFIG_DIR)
}

pub fn locale_dir(install_root: &Path) -> PathBuf {
    install_root.join(LOCALE_DIR)
}

pub fn startup_script_path(install_root: &Path, policy: PlatformPolicy) -> PathBuf {
    install_root.join(policy.startup_script_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn bundle_root_prefers_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let prior = std::env::var("STORYGRID_BUNDLE").ok();

        std::env::set_var("STORYGRID_BUNDLE", "/tmp/storygrid-bundle");
        let root = bundle_root().unwrap();
        assert_eq!(root, PathBuf::from("/tmp/storygrid-bundle"));

        if let Some(v) = prior {
            std::env::set_var("STORYGRID_BUNDLE", v);
        } else {
            std::env::remove_var("STORYGRID_BUNDLE");
        }
    }

    #[cfg(unix)]
    #[test]
    fn default_install_root_under_home() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let prior = std::env::var("HOME").ok();

        let tmp = tempfile::tempdir().unwrap();
        std::env::set_var("HOME", tmp.path());

        let root = default_install_root("MyApp").unwrap();
        assert_eq!(root, tmp.path().join(".quillworks").join("MyApp"));

        if let Some(v) = prior {
            std::env::set_var("HOME", v);
        } else {
            std::env::remove_var("HOME");
        }
    }

    #[test]
    fn default_install_root_rejects_empty_name() {
        let err = default_install_root("").unwrap_err();
        assert!(err.to_string().contains("app_name is empty"));
    }

    #[test]
    fn derived_paths_are_rooted() {
        let root = PathBuf::from("/home/u/.quillworks/storygrid");
        assert_eq!(config_dir(&root), root.join("config"));
        assert_eq!(locale_dir(&root), root.join("locale"));
        assert_eq!(
            startup_script_path(&root, PlatformPolicy::Unix),
            root.join("run.py")
        );
        assert_eq!(
            startup_script_path(&root, PlatformPolicy::Windows),
            root.join("run.pyw")
        );
    }
}
