//! Command-line DQ report for a start.gg event.
//!
//! Prints the event name, slug, ID, total players, and disqualification count.
//! Exits with status 2 on usage or configuration errors.

use anyhow::{Context, Result};
use dq_cli::{
    EXIT_USAGE,
    args::{Command, HELP, parse_args},
    config::client_config,
    report::render_report,
};
use dq_counter::export::write_csv;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();

    let args = match parse_args(std::env::args_os().skip(1).collect()) {
        Ok(Command::Help) => {
            print!("{HELP}");
            std::process::exit(0);
        }
        Ok(Command::Run(args)) => args,
        Err(e) => {
            eprintln!("error: {e}\n\n{HELP}");
            std::process::exit(EXIT_USAGE);
        }
    };

    let config = match client_config(&args, |key| std::env::var(key).ok()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(EXIT_USAGE);
        }
    };

    log::info!("Counting DQs for {} via {}", args.event, config.endpoint);

    let summary = dq_counter::count_disqualifications(&config, &args.event)
        .await
        .with_context(|| format!("Failed to count disqualifications for {}", args.event))?;

    print!("{}", render_report(&summary));

    if let Some(path) = &args.csv {
        write_csv(path, &summary.dq_rows)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Wrote {} row(s) to {}", summary.dq_rows.len(), path.display());
    }

    Ok(())
}
