mod exit_code;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use exit_code::ExitCode;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "introspection-to-sdl")]
#[command(about = "Convert introspection JSON to GraphQL schema.", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the introspection JSON file
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    init_tracing();
    configure_colors();

    let code = match run(&cli) {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::for_error(&err)
        }
    };

    tracing::debug!(%code, "Exiting");
    code.exit()
}

fn run(cli: &Cli) -> Result<()> {
    let sdl = graphql_introspect::file_to_sdl(&cli.file)
        .with_context(|| format!("Failed to convert {}", cli.file.display()))?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(sdl.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write SDL to stdout")?;
    Ok(())
}

/// Initialize tracing on stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Disable colored error output when `NO_COLOR` is set or stderr is not a TTY.
///
/// See: <https://no-color.org/>
fn configure_colors() {
    if std::env::var_os("NO_COLOR").is_some() || !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }
}
