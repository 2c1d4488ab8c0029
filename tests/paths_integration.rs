#[path = "../src/config.rs"]
mod config;
#[path = "../src/paths.rs"]
mod paths;
#[path = "../src/platform.rs"]
mod platform;

use platform::PlatformPolicy;
use std::path::PathBuf;

#[test]
fn derived_paths_use_fixed_names() {
    let root = PathBuf::from("/home/u/.quillworks/storygrid");
    assert_eq!(paths::config_dir(&root), root.join("config"));
    assert_eq!(paths::locale_dir(&root), root.join("locale"));
}

#[test]
fn startup_script_follows_policy() {
    let root = PathBuf::from("/home/u/.quillworks/storygrid");
    assert_eq!(
        paths::startup_script_path(&root, PlatformPolicy::Unix),
        root.join("run.py")
    );
    assert_eq!(
        paths::startup_script_path(&root, PlatformPolicy::Windows),
        root.join("run.pyw")
    );
}

#[test]
fn install_root_requires_app_name() {
    assert!(paths::default_install_root("").is_err());
}
