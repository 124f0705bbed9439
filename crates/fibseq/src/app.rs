//! Application entry point and dispatch.

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::CommandFactory;
use tracing::debug;

use fibseq_cli::presenter::{CliPresenter, JsonPresenter};
use fibseq_cli::prompt::ConsolePrompt;
use fibseq_cli::{completion, drive, ui};
use fibseq_core::constants::exit_codes;
use fibseq_orchestration::coordinator::{Coordinator, StartOutcome};
use fibseq_orchestration::interfaces::{AlwaysConfirm, ConfirmationGate, EventPresenter};

use crate::config::{AppConfig, Command};
use crate::errors::{exit_code_for, handle_error};

/// Run the application and return the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    if let Some(shell) = config.completion {
        let mut cmd = AppConfig::command();
        completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    let Some(command) = &config.command else {
        AppConfig::command().write_help(&mut io::stderr())?;
        return Ok(exit_codes::ERROR_GENERIC);
    };

    let options = config.engine_options();
    let interval = options.poll_interval;
    let coordinator = Arc::new(Coordinator::new(options));
    install_stop_handler(&coordinator)?;

    let presenter: Box<dyn EventPresenter> = match *command {
        Command::Sequence { quantity, yes } => {
            let gate: &dyn ConfirmationGate = if yes { &AlwaysConfirm } else { &ConsolePrompt };
            match coordinator.start_sequence(quantity, gate) {
                Ok(StartOutcome::Started) => {}
                Ok(StartOutcome::Declined) => {
                    ui::print_warning("Generation cancelled.");
                    return Ok(exit_codes::SUCCESS);
                }
                Err(e) => {
                    ui::print_error(&e.to_string());
                    return Ok(handle_error(&e));
                }
            }
            make_presenter(config, || {
                CliPresenter::for_sequence(quantity.unsigned_abs(), config.quiet)
            })
        }
        Command::Find { position } => {
            if let Err(e) = coordinator.start_point(position) {
                ui::print_error(&e.to_string());
                return Ok(handle_error(&e));
            }
            make_presenter(config, || {
                CliPresenter::for_point(position.unsigned_abs(), config.quiet)
            })
        }
    };

    let code = match drive(&coordinator, presenter.as_ref(), interval) {
        Some(terminal) => exit_code_for(&terminal),
        None => exit_codes::ERROR_GENERIC,
    };
    debug!(code, "Run finished");
    Ok(code)
}

fn make_presenter(
    config: &AppConfig,
    text: impl FnOnce() -> CliPresenter,
) -> Box<dyn EventPresenter> {
    if config.json {
        Box::new(JsonPresenter)
    } else {
        Box::new(text())
    }
}

/// Ctrl+C stops a running sequence; with nothing to stop, it exits.
fn install_stop_handler(coordinator: &Arc<Coordinator>) -> Result<()> {
    let coordinator = Arc::downgrade(coordinator);
    ctrlc::set_handler(move || {
        let stopped = coordinator.upgrade().is_some_and(|c| c.stop());
        if !stopped {
            std::process::exit(exit_codes::ERROR_CANCELED);
        }
    })
    .context("failed to install Ctrl+C handler")
}
