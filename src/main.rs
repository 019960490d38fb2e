//! ndx CLI entry point.

use std::process::ExitCode;

use ndx::cli::{Cli, CommandDispatcher};
use ndx::collaborators::NodeToolkit;
use ndx::host::SystemHost;
use ndx::shell::is_ci;
use ndx::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `NDX_DEBUG` sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("ndx=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ndx=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::from_env_args();
    let project_root = std::env::current_dir().unwrap_or_default();
    let settings = cli.settings(project_root);
    init_tracing(settings.debug);

    tracing::debug!("ndx starting with args: {:?}", cli.args);

    let mut ui = create_ui(!is_ci());
    let mut host = SystemHost::new(&settings.project_root);
    let toolkit = NodeToolkit::new(&settings);

    let dispatcher = CommandDispatcher::new(cli.args);

    match dispatcher.dispatch(ui.as_mut(), &mut host, &toolkit) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            ui.error(&format!("Error: {:#}", e));
            ExitCode::from(1)
        }
    }
}
