use clap::Parser;
use prompt_relay::{app, config::Config, relay};

#[tokio::main]
async fn main() {
    let config = Config::parse();
    app::logging::init(&config);

    if let Err(err) = relay::serve(config).await {
        tracing::error!("relay exited: {err}");
        eprintln!("prompt-relay: {err}");
        std::process::exit(1);
    }
}
