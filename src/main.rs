mod cli;
mod daemon;
mod report;

use crate::cli::{Action, Invocation};
use crate::daemon::DaemonConnection;
use anyhow::{Context, Result};
use log::{LevelFilter, debug, trace};
use std::io::Write;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let invocation = cli::resolve(std::env::args_os());
    pretty_env_logger::env_logger::Builder::new()
        .format_timestamp(None)
        .filter_level(if invocation.verbose { LevelFilter::Trace } else { LevelFilter::Warn })
        .init();

    trace!("Invocation: {:#?}", invocation);

    if let Err(e) = run(&invocation).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(invocation: &Invocation) -> Result<()> {
    match invocation.action {
        Action::List => {
            let mut connection = DaemonConnection::connect(&invocation.endpoint)?;
            debug!("Listing containers from {}", connection.endpoint());
            let records = connection.list_containers().await;
            connection.close();
            let records = records?;
            debug!("Rendering {} container(s)", records.len());

            let mut stdout = std::io::stdout().lock();
            stdout.write_all(report::render(&records).as_bytes()).context("failed to write report")?;
            stdout.flush().context("failed to write report")?;
        }
    }
    Ok(())
}
