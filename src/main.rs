use clap::Parser;

use brightloop_gateway::{
    app_state::AppState,
    config::{ConfigValidator, GatewayConfig},
    server,
};

#[derive(Parser, Debug)]
#[command(name = "brightloop-gateway")]
#[command(about = "Bright Loop Media site backend - lead inquiry pipeline and HelloFlint chat proxy")]
struct CliArgs {
    /// Host address to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port number to bind (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Env file loaded before reading configuration
    #[arg(long, default_value = ".env")]
    env_file: String,
}

fn main() -> anyhow::Result<()> {
    let cli_args = CliArgs::parse();

    // A missing env file is fine; deployed environments set variables directly.
    let _ = dotenvy::from_filename(&cli_args.env_file);

    let mut config = GatewayConfig::from_env()?;
    if let Some(host) = cli_args.host {
        config.host = host;
    }
    if let Some(port) = cli_args.port {
        config.port = port;
    }
    ConfigValidator::validate(&config)?;

    println!("Bright Loop gateway starting...");
    println!("Host: {}:{}", config.host, config.port);
    println!("Persistence: {:?}", config.persistence_backend);
    println!(
        "Chat mode: {}",
        if config.gemini.is_live() { "live" } else { "degraded" }
    );

    actix_web::rt::System::new().block_on(async move {
        let app_state = AppState::from_config(config).await?;
        tokio::select! {
            res = server::startup(app_state) => {
                res?;
            }
            _ = tokio::signal::ctrl_c() => {
                println!("Received Ctrl+C, shutting down");
            }
        }
        Ok(())
    })
}
