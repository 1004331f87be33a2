//! Platform shortcuts.
//!
//! Renaming files in protected folders (on macOS, anything outside the
//! user's home without Full Disk Access) fails with permission errors.
//! `open_privacy_settings` jumps to the OS page where access is granted.

use std::io;
use std::process::Command;

use thiserror::Error;

/// Errors from launching platform settings.
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Opening privacy settings is not supported on {0}")]
    Unsupported(&'static str),

    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with status {status}")]
    Exit { program: String, status: String },
}

/// Program and arguments that open the privacy settings page, if known.
pub fn privacy_settings_command() -> Option<(&'static str, Vec<&'static str>)> {
    if cfg!(target_os = "macos") {
        Some((
            "open",
            vec!["x-apple.systempreferences:com.apple.preference.security?Privacy_AllFiles"],
        ))
    } else if cfg!(target_os = "windows") {
        Some(("explorer", vec!["ms-settings:privacy"]))
    } else {
        None
    }
}

/// Best-effort launch of the OS privacy / file access settings.
///
/// Failures are logged and returned; they never panic.
pub fn open_privacy_settings() -> Result<(), PlatformError> {
    let Some((program, args)) = privacy_settings_command() else {
        let err = PlatformError::Unsupported(std::env::consts::OS);
        tracing::warn!("{}", err);
        return Err(err);
    };

    tracing::debug!("$ {} {}", program, args.join(" "));

    let status = Command::new(program).args(&args).status().map_err(|source| {
        let err = PlatformError::Launch {
            program: program.to_string(),
            source,
        };
        tracing::warn!("{}", err);
        err
    })?;

    // explorer.exe reports 1 even when it opened the page
    if status.success() || cfg!(target_os = "windows") {
        tracing::info!("Opened privacy settings");
        Ok(())
    } else {
        let err = PlatformError::Exit {
            program: program.to_string(),
            status: status.to_string(),
        };
        tracing::warn!("{}", err);
        Err(err)
    }
}
