use std::path::Path;

/// Ordered, append-only progress line consumer. The surrounding shell joins
/// the lines with newlines for display.
pub trait ProgressSink {
    fn output(&mut self, text: &str);
}

#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ProgressSink for ConsoleSink {
    fn output(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Reveal a folder in the host file manager, best-effort.
pub fn open_folder(path: &Path) {
    #[cfg(target_os = "windows")]
    {
        if let Err(err) = std::process::Command::new("explorer").arg(path).spawn() {
            eprintln!("warning: failed to open {}: {err}", path.display());
        }
    }
    #[cfg(target_os = "macos")]
    {
        if let Err(err) = std::process::Command::new("open").arg(path).spawn() {
            eprintln!("warning: failed to open {}: {err}", path.display());
        }
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        if let Err(err) = std::process::Command::new("xdg-open").arg(path).spawn() {
            eprintln!("warning: failed to open {}: {err}", path.display());
        }
    }
}
