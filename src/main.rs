//! Passive browsers CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use passive_browsers::cli::{Cli, CommandDispatcher};
use passive_browsers::config::{load_config_file, partition_cli_args, ConfigSources};
use passive_browsers::ui::{OutputMode, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so command output stays parseable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("passive_browsers=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("passive_browsers=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().collect();
    let (rest, option_args) = partition_cli_args(&argv);

    let cli = Cli::parse_from(rest);
    init_tracing(cli.debug);

    tracing::debug!("passive-browsers starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = TerminalUI::new(output_mode);

    let options = match cli.config.as_deref().map(load_config_file).transpose() {
        Ok(options) => options,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    let sources = ConfigSources {
        options,
        env: std::env::vars().collect(),
        argv: option_args,
    };
    let dispatcher = CommandDispatcher::new(sources);

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
