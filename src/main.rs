//! shortlist - Entry point for the matching CLI

use shortlist::App;

#[tokio::main]
async fn main() {
    // Initialize logging; logs go to stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = App::run().await {
        tracing::error!("Application error: {}", e);
        std::process::exit(1);
    }
}
