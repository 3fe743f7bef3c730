use argh::FromArgs;
use craftcopy::messages::SuggestionsRequest;
use reqwest::multipart::{Form, Part};
use std::path::PathBuf;

// defaults for the client
const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5000;

#[derive(FromArgs)]
/// craftcopy client for generating listings and marketing ideas
struct ClientArgs {
    /// the host to connect to
    #[argh(option, short = 'h', default = "DEFAULT_HOST.to_string()")]
    host: String,

    /// the port to connect to
    #[argh(option, short = 'p', default = "DEFAULT_PORT")]
    port: u16,

    /// command to execute: "product" or "suggestions"
    #[argh(subcommand)]
    command: ClientCommands,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum ClientCommands {
    Product(ProductCommand),
    Suggestions(SuggestionsCommand),
}

#[derive(FromArgs)]
/// Generate listing copy from a product photo
#[argh(subcommand, name = "product")]
struct ProductCommand {
    /// the path to the image
    #[argh(option, short = 'i')]
    image_path: PathBuf,
}

#[derive(FromArgs)]
/// Generate marketing suggestions from a description
#[argh(subcommand, name = "suggestions")]
struct SuggestionsCommand {
    /// the product description
    #[argh(option, short = 'd')]
    description: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: ClientArgs = argh::from_env();

    let client = reqwest::Client::new();

    // format the host and port
    let addr = format!("{}:{}", args.host, args.port);

    let response = match args.command {
        ClientCommands::Product(product_command) => {
            let file_name = product_command
                .image_path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("image")
                .to_string();
            let bytes = tokio::fs::read(&product_command.image_path).await?;
            let form = Form::new().part("image", Part::bytes(bytes).file_name(file_name));

            client
                .post(format!("http://{}/generate", addr))
                .multipart(form)
                .send()
                .await?
        }
        ClientCommands::Suggestions(suggestions_command) => {
            client
                .post(format!("http://{}/generate-suggestions", addr))
                .json(&SuggestionsRequest {
                    description: suggestions_command.description,
                })
                .send()
                .await?
        }
    };

    let status = response.status();
    let result = response.json::<serde_json::Value>().await?;
    println!("Status: {status}");
    println!("Result: {}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
