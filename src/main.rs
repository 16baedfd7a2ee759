use sentinel::cli::{commands, output::Output, Cli};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before parsing so clap's `env` fallbacks see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    match commands::run(cli, output).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output.error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
