//! go-compat CLI entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use go_compat::cli::{Cli, CommandDispatcher, Streams};
use go_compat::shell::SystemInvoker;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, keeping stderr for diagnostics
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("go_compat=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("go_compat=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("go-compat starting with args: {:?}", cli);

    let invoker = SystemInvoker;
    let dispatcher = CommandDispatcher::new(&invoker);

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let result = dispatcher.dispatch(&cli, &mut Streams::new(&mut stdout, &mut stderr));
    drop(stderr);

    match result {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            // Toolchain stderr can span lines; the failure is reported on one.
            let message = e.to_string();
            tracing::debug!("full error: {}", message);
            eprintln!("go-compat: {}", message.lines().next().unwrap_or_default());
            ExitCode::from(1)
        }
    }
}
