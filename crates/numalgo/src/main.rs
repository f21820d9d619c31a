//! numalgo — validate every numeric algorithm variant against its fixtures.

use std::process::ExitCode;

use numalgo_lib::{app, config, errors};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    // Initialize tracing
    let default_level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match app::run(&config) {
        Ok(code) => errors::to_exit_code(code),
        Err(err) => {
            numalgo_cli::ui::print_error(&format!("{err:#}"));
            errors::to_exit_code(errors::handle_error(&err))
        }
    }
}
