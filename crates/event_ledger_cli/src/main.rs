//! Event ledger CLI.
//!
//! # Responsibility
//! - Run an interactive capture session against a fresh in-memory ledger.
//! - Keep `ping`/`version` probes to verify `event_ledger_core` linkage.

mod session;

use event_ledger_core::{default_log_level, init_logging, EventLedger};
use log::{info, warn};
use session::{run_session, SessionConfig};
use std::process::ExitCode;

const LOG_LEVEL_ENV: &str = "EVENT_LEDGER_LOG_LEVEL";
const LOG_DIR_ENV: &str = "EVENT_LEDGER_LOG_DIR";
const DEFAULT_YEAR_ENV: &str = "EVENT_LEDGER_DEFAULT_YEAR";

fn main() -> ExitCode {
    match std::env::args().nth(1).as_deref() {
        Some("ping") => {
            println!("event_ledger_core ping={}", event_ledger_core::ping());
            return ExitCode::SUCCESS;
        }
        Some("version") => {
            println!("event_ledger_core version={}", event_ledger_core::core_version());
            return ExitCode::SUCCESS;
        }
        Some(other) => {
            eprintln!("unknown argument `{other}`; expected `ping`, `version`, or none");
            return ExitCode::FAILURE;
        }
        None => {}
    }

    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let config = match session_config_from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let ledger = EventLedger::new();
    let stdin = std::io::stdin();
    match run_session(&ledger, &config, stdin.lock(), std::io::stdout()) {
        Ok(summary) => {
            info!(
                "event=session_end module=cli status=ok recorded={} rejected={}",
                summary.recorded, summary.rejected
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            warn!("event=session_end module=cli status=error error={err}");
            eprintln!("session aborted: {err}");
            ExitCode::FAILURE
        }
    }
}

fn session_config_from_env() -> Result<SessionConfig, String> {
    let default_year = match std::env::var(DEFAULT_YEAR_ENV) {
        Ok(raw) => Some(raw.trim().parse::<i64>().map_err(|err| {
            format!("{DEFAULT_YEAR_ENV} must be a whole number, got `{raw}`: {err}")
        })?),
        Err(_) => None,
    };
    Ok(SessionConfig { default_year })
}
