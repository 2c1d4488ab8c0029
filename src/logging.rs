use anyhow::{Context, Result};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

/// Pick a fresh, nonce-named log path in the OS temp dir.
pub fn default_log_path(app_name: &str) -> PathBuf {
    let nonce = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir().join(format!("{app_name}-setup-{nonce}.log"))
}

pub fn init(path: &Path) -> Result<()> {
    fs::write(path, "installer log start\n")
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn append(path: &Path, line: &str) -> Result<()> {
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))?;
    writeln!(file, "{line}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_then_append_keeps_line_order() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("setup.log");

        init(&path).unwrap();
        append(&path, "first").unwrap();
        append(&path, "second").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "installer log start\nfirst\nsecond\n");
    }

    #[test]
    fn default_log_path_names_the_app() {
        let path = default_log_path("storygrid");
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("storygrid-setup-"));
        assert!(name.ends_with(".log"));
    }
}
