use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reqwest::multipart::{Form, Part};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "room-cli")]
#[command(about = "Command line client for the room inventory service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:8083")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every room class
    List,
    /// Show one room class
    Get { id: String },
    /// Reserve rooms of a class
    Reserve { id: String, count: i64 },
    /// Delete a room class
    Delete { id: String },
    /// Upload a room image
    Upload { path: PathBuf },
    /// Check service status
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::List => client.get(format!("{}/rooms", base)).send().await?,
        Commands::Get { id } => client.get(format!("{}/rooms/{}", base, id)).send().await?,
        Commands::Reserve { id, count } => {
            client
                .post(format!("{}/reserve/{}", base, id))
                .json(&json!({ "roomreserved": count }))
                .send()
                .await?
        }
        Commands::Delete { id } => {
            client
                .delete(format!("{}/rooms/{}", base, id))
                .send()
                .await?
        }
        Commands::Upload { path } => {
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or("upload path has no file name")?
                .to_string();
            let contents = tokio::fs::read(&path).await?;
            let form = Form::new().part("file", Part::bytes(contents).file_name(file_name));
            client
                .post(format!("{}/uploads-room", base))
                .multipart(form)
                .send()
                .await?
        }
        Commands::Health => client.get(format!("{}/health", base)).send().await?,
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let json: Value = res.json().await?;

    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
    }
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
