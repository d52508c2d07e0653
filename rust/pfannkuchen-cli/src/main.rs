use pfannkuchen_cli::{run, Stage, LOG_ENV};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(std::env::args_os()) {
        Ok(report) => {
            println!("{}", report);
            tracing::debug!(stage = ?Stage::Done, "driver");
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}
