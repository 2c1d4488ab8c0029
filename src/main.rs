#![cfg_attr(windows, windows_subsystem = "windows")]

mod config;
mod fs_ops;
mod installer;
mod logging;
mod paths;
mod platform;
mod report;
mod ui;

use anyhow::Result;
use std::path::Path;

use crate::installer::InstallJob;
use crate::platform::PlatformPolicy;
use crate::report::Mode;
use crate::ui::ProgressSink;

fn main() -> Result<()> {
    let policy = PlatformPolicy::host();
    let bundle_root = paths::bundle_root()?;
    let install_root = paths::default_install_root(config::NAME)?;
    let job = InstallJob {
        bundle_root,
        install_root: install_root.clone(),
        program_name: config::PROGRAM.to_string(),
        entry_module: config::ENTRY_POINT.to_string(),
    };

    let log_path = logging::default_log_path(config::NAME);
    let _ = logging::init(&log_path);

    let mut sink = ui::ConsoleSink;
    emit(
        &mut sink,
        &log_path,
        &format!("{} {} setup", config::PRODUCT_NAME, config::VERSION),
    );

    let report = installer::run(&job, policy);
    for line in report.lines() {
        emit(&mut sink, &log_path, &line);
    }

    if report.succeeded() {
        match report.mode {
            Mode::FreshInstall => emit(
                &mut sink,
                &log_path,
                &format!(
                    "{} is installed. Start it with {}",
                    config::PRODUCT_NAME,
                    paths::startup_script_path(&install_root, policy).display()
                ),
            ),
            Mode::Update => emit(&mut sink, &log_path, "Update finished."),
        }
        ui::open_folder(&install_root);
    }

    // The trace is the sole error surface; the exit code stays zero.
    Ok(())
}

fn emit(sink: &mut dyn ProgressSink, log_path: &Path, text: &str) {
    sink.output(text);
    let _ = logging::append(log_path, text);
}
