use clap::Parser;
use tracing_subscriber::EnvFilter;
use ya::Cli;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for listings and JSON.
    let default_level = if cli.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = ya::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
