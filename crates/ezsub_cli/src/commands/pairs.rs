//! `preview`, `sync` and `privacy-settings` subcommands.

use std::process::ExitCode;

use anyhow::{Context, Result};

use ezsub_core::config::Settings;
use ezsub_core::files::CollectOutcome;
use ezsub_core::models::{display_name, MediaKind};
use ezsub_core::platform::open_privacy_settings;
use ezsub_core::session::SyncSession;
use ezsub_core::sync::{PlannedAction, PlannedRename, SyncError};

use super::ListArgs;

/// Fill a session from the command line lists.
fn build_session(settings: &Settings, lists: &ListArgs) -> SyncSession {
    let mut session = SyncSession::from_settings(settings);
    if lists.no_sort {
        session.set_sort_on_drop(false);
    }

    let outcome = session.drop_paths(MediaKind::Video, lists.video_paths());
    report_skipped(MediaKind::Video, &outcome);
    let outcome = session.drop_paths(MediaKind::Subtitle, lists.subtitle_paths());
    report_skipped(MediaKind::Subtitle, &outcome);

    session
}

fn report_skipped(kind: MediaKind, outcome: &CollectOutcome) {
    for skipped in &outcome.skipped {
        eprintln!("warning: {} list: {}", kind, skipped.reason);
    }
    if outcome.filtered > 0 {
        eprintln!(
            "note: {} file(s) ignored by the {} extension filter",
            outcome.filtered, kind
        );
    }
}

fn print_lists(session: &SyncSession) {
    for kind in [MediaKind::Video, MediaKind::Subtitle] {
        let list = session.list(kind);
        println!("{} ({}):", kind.title(), list.len());
        for (idx, name) in list.display_names().iter().enumerate() {
            println!("  {:>3}. {}", idx + 1, name);
        }
    }
}

fn print_plan(plan: &[PlannedRename]) {
    for planned in plan {
        let pair = &planned.pair;
        println!(
            "  {:>3}. {}  <-  {}  =>  {}  [{}]",
            pair.index + 1,
            display_name(&pair.video),
            display_name(&pair.subtitle),
            pair.target_name(),
            planned.action
        );
    }
}

/// Exit code for a dry run: failure when any pair would be skipped or fail.
fn plan_exit_code(plan: &[PlannedRename]) -> ExitCode {
    let blocked = plan
        .iter()
        .filter(|p| {
            matches!(
                p.action,
                PlannedAction::Conflict | PlannedAction::MissingSource
            )
        })
        .count();
    if blocked == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn warn_mismatch(err: &SyncError) -> ExitCode {
    eprintln!("warning: {}", err);
    ExitCode::FAILURE
}

/// Print the pairing and the predicted outcome.
pub fn preview(settings: &Settings, lists: &ListArgs) -> Result<ExitCode> {
    let session = build_session(settings, lists);

    match session.preview() {
        Ok(plan) => {
            println!("Pairs ({}):", plan.len());
            print_plan(&plan);
            Ok(plan_exit_code(&plan))
        }
        Err(e) => {
            print_lists(&session);
            Ok(warn_mismatch(&e))
        }
    }
}

/// Run the rename and print the summary (or JSON report).
pub fn sync(settings: &Settings, lists: &ListArgs, dry_run: bool, json: bool) -> Result<ExitCode> {
    if dry_run {
        let session = build_session(settings, lists);
        return match session.preview() {
            Ok(plan) if json => {
                let out = serde_json::to_string_pretty(&plan).context("Failed to encode plan")?;
                println!("{}", out);
                Ok(plan_exit_code(&plan))
            }
            Ok(plan) => {
                println!("Dry run, nothing renamed:");
                print_plan(&plan);
                Ok(plan_exit_code(&plan))
            }
            Err(e) => Ok(warn_mismatch(&e)),
        };
    }

    let mut session = build_session(settings, lists);
    let report = match session.sync() {
        Ok(report) => report,
        Err(e) => return Ok(warn_mismatch(&e)),
    };

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{}", out);
    } else {
        println!("{}", report.summary());
    }

    Ok(if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Open the OS privacy settings; failure is reported but not fatal.
pub fn privacy_settings() -> Result<ExitCode> {
    match open_privacy_settings() {
        Ok(()) => println!("Opened privacy settings."),
        Err(e) => eprintln!("warning: {}", e),
    }
    Ok(ExitCode::SUCCESS)
}
