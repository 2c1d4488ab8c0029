use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    fs_ops, paths,
    platform::PlatformPolicy,
    report::{InstallReport, Mode, TraceEntry},
};

/// Everything one installer run needs to know.
#[derive(Debug, Clone)]
pub struct InstallJob {
    pub bundle_root: PathBuf,
    pub install_root: PathBuf,
    pub program_name: String,
    pub entry_module: String,
}

/// Run the install sequence to completion. The returned report is the only
/// outcome; a fatal step appends its message as the final entry.
pub fn run(job: &InstallJob, policy: PlatformPolicy) -> InstallReport {
    let mode = detect_mode(&job.install_root, &job.program_name);
    let mut report = InstallReport::new(mode);
    if let Err(err) = install_sequence(job, policy, &mut report) {
        report.push(TraceEntry::Failed(format!("{err:#}")));
    }
    report
}

/// `Update` when the program file is already present, `FreshInstall`
/// otherwise. The classification never changes which files are written.
pub fn detect_mode(install_root: &Path, program_name: &str) -> Mode {
    if install_root.join(program_name).is_file() {
        Mode::Update
    } else {
        Mode::FreshInstall
    }
}

fn install_sequence(
    job: &InstallJob,
    policy: PlatformPolicy,
    report: &mut InstallReport,
) -> Result<()> {
    prepare_directories(&job.install_root)?;
    purge_stale_entries(&job.install_root, report)?;
    install_program(job, report)?;
    install_locale(job, report)?;
    mark_executable(job, policy, report);
    seed_config(job, report)?;
    write_startup_script(job, policy, report)?;
    Ok(())
}

fn prepare_directories(install_root: &Path) -> Result<()> {
    let config_dir = paths::config_dir(install_root);
    fs::create_dir_all(&config_dir)
        .with_context(|| format!("create {}", config_dir.display()))?;
    Ok(())
}

/// Drop the previous version while retaining configuration: the locale tree
/// goes first, then every direct entry whose name lacks the config marker.
fn purge_stale_entries(install_root: &Path, report: &mut InstallReport) -> Result<()> {
    fs_ops::remove_tree_best_effort(&paths::locale_dir(install_root));

    let entries = fs::read_dir(install_root)
        .with_context(|| format!("read_dir {}", install_root.display()))?;
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.contains(paths::CONFIG_MARKER) {
            continue;
        }
        match fs_ops::remove_entry(&entry.path()) {
            Ok(()) => report.push(TraceEntry::Removed(name)),
            Err(err) => report.push(TraceEntry::Skipped {
                name,
                reason: err.to_string(),
            }),
        }
    }
    Ok(())
}

fn install_program(job: &InstallJob, report: &mut InstallReport) -> Result<()> {
    let src = job.bundle_root.join(&job.program_name);
    let dest = job.install_root.join(&job.program_name);
    fs_ops::copy_file(&src, &dest)?;
    report.push(TraceEntry::Copied(job.program_name.clone()));
    Ok(())
}

fn install_locale(job: &InstallJob, report: &mut InstallReport) -> Result<()> {
    let src = job.bundle_root.join(paths::LOCALE_DIR);
    let dest = paths::locale_dir(&job.install_root);
    fs_ops::copy_tree(&src, &dest)?;
    report.push(TraceEntry::Copied(paths::LOCALE_DIR.to_string()));
    Ok(())
}

fn mark_executable(job: &InstallJob, policy: PlatformPolicy, report: &mut InstallReport) {
    if !policy.supports_execute_bit() {
        return;
    }
    let program = job.install_root.join(&job.program_name);
    if let Err(err) = fs_ops::add_execute_permission(&program) {
        report.push(TraceEntry::Skipped {
            name: job.program_name.clone(),
            reason: format!("{err:#}"),
        });
    }
}

/// Additive-only: a sample file is copied only when no file of that name
/// exists in the config directory yet.
fn seed_config(job: &InstallJob, report: &mut InstallReport) -> Result<()> {
    let sample_dir = job.bundle_root.join(paths::SAMPLE_DIR);
    let entries = match fs::read_dir(&sample_dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(()),
    };

    let config_dir = paths::config_dir(&job.install_root);
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        let dest = config_dir.join(&name);
        if dest.is_file() {
            report.push(TraceEntry::Kept(name));
        } else if let Err(err) = fs_ops::copy_file(&entry.path(), &dest) {
            report.push(TraceEntry::Skipped {
                name,
                reason: format!("{err:#}"),
            });
        } else {
            report.push(TraceEntry::Copied(name));
        }
    }
    Ok(())
}

fn write_startup_script(
    job: &InstallJob,
    policy: PlatformPolicy,
    report: &mut InstallReport,
) -> Result<()> {
    let script_path = paths::startup_script_path(&job.install_root, policy);
    fs::write(&script_path, startup_script_text(&job.entry_module, policy))
        .with_context(|| format!("write {}", script_path.display()))?;
    report.push(TraceEntry::Written(policy.startup_script_name().to_string()));
    Ok(())
}

/// Interpreter marker (non-Windows only), then import and invoke the entry
/// module.
fn startup_script_text(entry_module: &str, policy: PlatformPolicy) -> String {
    format!(
        "{}import {entry_module}\n{entry_module}.main()\n",
        policy.startup_script_prefix()
    )
}
