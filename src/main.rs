use argh::FromArgs;
use craftcopy::{
    GeminiClient, GeminiConfig,
    config::{DEFAULT_ENDPOINT, DEFAULT_MODEL},
    server::{DEFAULT_MAX_UPLOAD_MB, megabytes},
};
use std::sync::Arc;

// defaults for the server
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

#[derive(FromArgs)]
/// craftcopy writes product listings and marketing ideas for artisans.
struct CraftcopyArgs {
    /// the host to run the server on
    #[argh(option, short = 'h', default = "DEFAULT_HOST.to_string()")]
    host: String,

    /// the port to run the server on
    #[argh(option, short = 'p', default = "DEFAULT_PORT")]
    port: u16,

    /// the Gemini model to call
    #[argh(option, default = "DEFAULT_MODEL.to_string()")]
    model: String,

    /// base URL of the Gemini API
    #[argh(option, default = "DEFAULT_ENDPOINT.to_string()")]
    endpoint: String,

    /// largest accepted request body, in megabytes
    #[argh(option, default = "DEFAULT_MAX_UPLOAD_MB")]
    max_upload_mb: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let args: CraftcopyArgs = argh::from_env();

    let config = GeminiConfig::from_env(args.model, args.endpoint).inspect_err(|e| {
        log::error!("{e}");
    })?;
    let model = Arc::new(GeminiClient::new(config));
    log::info!("Using model {}", model.model());

    let app = craftcopy::router(model, megabytes(args.max_upload_mb));

    // format the host and port
    let addr = format!("{}:{}", args.host, args.port);

    log::info!("🚀 Starting the server");
    log::info!("🔥 Listening on: {}", addr);
    log::info!("🔧 Press Ctrl+C to stop the server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
