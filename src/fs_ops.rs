use anyhow::{Context, Result};
use std::{fs, io, path::Path};

pub fn copy_file(src: &Path, dest: &Path) -> Result<()> {
    fs::copy(src, dest)
        .with_context(|| format!("copy {} -> {}", src.display(), dest.display()))?;
    Ok(())
}

/// Copy a directory tree to a target that must not exist yet.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    let entries = fs::read_dir(src).with_context(|| format!("read_dir {}", src.display()))?;
    fs::create_dir(dest).with_context(|| format!("create {}", dest.display()))?;
    copy_entries(entries, dest)
}

fn copy_entries(entries: fs::ReadDir, dest: &Path) -> Result<()> {
    for entry in entries {
        let entry = entry?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            let nested =
                fs::read_dir(&from).with_context(|| format!("read_dir {}", from.display()))?;
            fs::create_dir_all(&to).with_context(|| format!("create {}", to.display()))?;
            copy_entries(nested, &to)?;
        } else {
            fs::copy(&from, &to)
                .with_context(|| format!("copy {} -> {}", from.display(), to.display()))?;
        }
    }
    Ok(())
}

/// Best-effort subtree removal; absence and removal errors are tolerated.
pub fn remove_tree_best_effort(path: &Path) {
    if path.exists() {
        let _ = fs::remove_dir_all(path);
    }
}

/// Remove a single directory entry. Fails on subdirectories, which the
/// caller records as a skip.
pub fn remove_entry(path: &Path) -> io::Result<()> {
    fs::remove_file(path)
}

/// OR the owner-execute bit into the file's existing mode.
#[cfg(unix)]
pub fn add_execute_permission(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let meta = fs::metadata(path).with_context(|| format!("metadata {}", path.display()))?;
    let mut perms = meta.permissions();
    perms.set_mode(perms.mode() | 0o100);
    fs::set_permissions(path, perms)
        .with_context(|| format!("set permissions on {}", path.display()))?;
    Ok(())
}

#[cfg(not(unix))]
pub fn add_execute_permission(_path: &Path) -> Result<()> {
    Ok(())
}
