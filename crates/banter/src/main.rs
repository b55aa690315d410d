//! Stages a conversation between two personas in the terminal.

#[macro_use]
extern crate tracing;

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use banter::{Config, Session, report_error};
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    debug!("starting with {config:?}");

    let stdout = io::stdout();
    let interactive = stdout.is_terminal();
    let mut session = Session::new(
        config.model_client(),
        BufReader::new(tokio::io::stdin()),
        stdout,
    )
    .with_colors(interactive)
    .with_progress(interactive);

    if let Err(err) = session.run().await {
        let mut stderr = io::stderr().lock();
        writeln!(stderr).ok();
        report_error(&err, &mut stderr).ok();
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
