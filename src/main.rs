//! `fedi` 바이너리 진입점.

use fedicli::interface::cli::Cli;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let action = match Cli::parse_action() {
        Ok(action) => action,
        Err(err) => err.exit(),
    };

    if let Err(err) = fedicli::run(action).await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
