//! ansible-setup - configure clusters with Ansible playbooks

use ansible_setup::cli::Cli;
use ansible_setup::output::json::{error_code, format_error};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    // RUST_LOG wins over -v/-q when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(cli.log_level().into()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    if let Err(e) = cli.run(LevelFilter::current()).await {
        if json {
            match format_error(&format!("{e:#}"), error_code(&e)) {
                Ok(obj) => println!("{obj}"),
                Err(_) => eprintln!("Error: {e:#}"),
            }
        } else {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(1);
    }
}
