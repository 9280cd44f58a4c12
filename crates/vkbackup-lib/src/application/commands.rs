//! Command execution
//!
//! Collects the run values from the user, wires the live clients into the
//! orchestrator and reports the outcome.

use crate::api::disk::{FolderStatus, LiveDiskClient};
use crate::api::vk::LiveVkClient;
use crate::application::AppConfig;
use crate::backup::manifest::{read_manifest, render_manifest};
use crate::backup::request::{
    BackupRequest, RequestError, parse_quantity, validate_identifier, validate_token,
};
use crate::backup::selection::SkippedPhoto;
use crate::backup::{
    BackupError, BackupOrchestrator, BackupReport, BackupSettings, RunOutcome, TerminalState,
};
use crate::display::interactive::InteractiveDisplay;
use crate::display::{BarTracker, Display, ProgressTracker};
use crate::logger::Logger;
use crate::networking::{NetworkingConfig, NetworkingManager};
use crate::primitives::LoggerError;
use anyhow::{Context, Result};
use std::io::BufRead;
use std::sync::Arc;
use tracing::{debug, info};

const IDENTIFIER_PROMPT: &str = "VK profile identifier";
const TOKEN_PROMPT: &str = "Yandex Disk token";
const QUANTITY_PROMPT: &str = "Number of photos to copy (default 5)";

/// Execute a full backup: prompt, run, report
pub async fn execute_command(config: AppConfig) -> Result<()> {
    match Logger::init(config.to_logger_config()) {
        Ok(_) | Err(LoggerError::AlreadyInitialized) => {}
        Err(e) => return Err(e).context("Failed to initialize logging"),
    }

    let display = Display::new(config.color.resolve());

    let request = match read_request(&display) {
        Ok(request) => request,
        Err(error) => {
            // Validation failures end the run quietly; I/O failures propagate
            let error = error.downcast::<RequestError>()?;
            display.status().error("Invalid input", &error.to_string());
            return Ok(());
        }
    };

    run_backup(&config, &request, &display).await?;
    Ok(())
}

/// Obtain the three run values, prompting when stdin is a terminal
fn read_request(display: &Display) -> Result<BackupRequest> {
    if InteractiveDisplay::is_interactive() {
        let prompt = display.prompt();
        let identifier = prompt.ask_validated(IDENTIFIER_PROMPT, true, validate_identifier)?;
        let token = prompt.ask_validated(TOKEN_PROMPT, true, validate_token)?;
        let quantity = prompt.ask_validated(QUANTITY_PROMPT, true, parse_quantity)?;
        Ok(BackupRequest::from_input(&identifier, &token, &quantity)?)
    } else {
        let stdin = std::io::stdin();
        Ok(request_from_reader(stdin.lock())?)
    }
}

/// Read identifier, token and quantity from consecutive lines.
///
/// Missing lines count as blank answers.
pub fn request_from_reader<R: BufRead>(reader: R) -> Result<BackupRequest> {
    let mut lines = reader.lines();
    let mut next_line = || -> Result<String> {
        Ok(lines
            .next()
            .transpose()
            .context("Failed to read from stdin")?
            .unwrap_or_default())
    };

    let identifier = next_line()?;
    let token = next_line()?;
    let quantity = next_line()?;

    Ok(BackupRequest::from_input(&identifier, &token, &quantity)?)
}

/// Run one backup with live clients and report it through `display`.
///
/// Fatal run errors are reported and mapped to their terminal state rather
/// than returned; only setup failures surface as `Err`.
pub async fn run_backup(
    config: &AppConfig,
    request: &BackupRequest,
    display: &Display,
) -> Result<TerminalState> {
    debug!(?request, "Starting backup");

    let Some(source_token) = config.source_token() else {
        return Ok(report_error(display, BackupError::MissingSourceToken));
    };

    let networking = Arc::new(
        NetworkingManager::new(NetworkingConfig {
            timeout_seconds: config.net_timeout,
            ..NetworkingConfig::default()
        })
        .context("Failed to set up HTTP client")?,
    );

    let source = LiveVkClient::with_base_url(
        networking.clone(),
        config.vk_api_url.clone(),
        source_token.to_string(),
        config.vk_api_version.clone(),
    );
    let target = LiveDiskClient::with_base_url(
        networking,
        config.disk_api_url.clone(),
        request.disk_token().to_string(),
    );

    let orchestrator = BackupOrchestrator::new(
        source,
        target,
        BackupSettings {
            folder_name: config.folder_name.clone(),
            manifest_path: config.manifest_path(),
            naming: config.naming,
        },
    );

    let progress = if InteractiveDisplay::is_interactive() {
        display
            .progress()
            .bar("Uploading photos", request.quantity() as u64)
    } else {
        BarTracker::hidden(request.quantity() as u64)
    };

    match orchestrator.run(request, &progress).await {
        Ok(RunOutcome::Completed(report)) => {
            progress.finish("Upload finished");
            report_completion(config, display, &report)?;
            Ok(TerminalState::Completed)
        }
        Ok(RunOutcome::NothingToUpload { skipped }) => {
            progress.finish("Nothing to upload");
            report_skipped(display, &skipped);
            display.status().info("No images to upload.");
            Ok(TerminalState::NothingToUpload)
        }
        Err(error) => {
            progress.abandon("Backup aborted");
            Ok(report_error(display, error))
        }
    }
}

fn report_error(display: &Display, error: BackupError) -> TerminalState {
    let state = error.terminal_state();
    info!(?state, %error, "Backup aborted");
    display.status().error("Backup aborted", &error.to_string());
    state
}

fn report_skipped(display: &Display, skipped: &[SkippedPhoto]) {
    let status = display.status();
    for photo in skipped {
        status.warning(&format!("Skipped photo #{}: {}", photo.index + 1, photo.error));
    }
}

fn report_completion(config: &AppConfig, display: &Display, report: &BackupReport) -> Result<()> {
    let status = display.status();

    if report.folder_status == FolderStatus::AlreadyExists {
        status.subtle(&format!("Folder {} already existed", config.folder_name));
    }

    report_skipped(display, &report.skipped);
    for failure in &report.failures {
        status.warning(&format!(
            "Upload of {} failed: {}",
            failure.source_url, failure.message
        ));
    }

    // Echo what actually landed on disk
    let records = read_manifest(&report.manifest_path)
        .with_context(|| format!("Failed to re-read {}", report.manifest_path.display()))?;
    status.message(&render_manifest(&records).context("Failed to render manifest")?);

    let summary = report.summary();
    if summary.is_success() {
        status.success("Uploaded", &format!("{} photo(s)", summary.successful));
    } else if summary.is_failure() {
        status.error("Nothing uploaded", &summary.to_string());
    } else {
        status.warning(&format!("Completed with issues: {}", summary));
    }

    status.emphasis(&format!("Photos added at {}", config.destination_link()));
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
