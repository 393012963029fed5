//! One-shot client for the homelab backend.
//!
//! Requests go to `VITE_API_BASE + path`, resolved against `--origin` when
//! the base is relative or unset.

use argh::FromArgs;
use homelab_web::{api::ApiClient, config};
use serde_json::Value;
use std::error::Error;
use tracing_subscriber::EnvFilter;

/// Call the homelab backend and print the JSON answer
#[derive(FromArgs)]
struct Cli {
    /// origin relative base URLs resolve against (default: 'http://127.0.0.1:1337')
    #[argh(option, default = "config::DEFAULT_ORIGIN.to_string()")]
    origin: String,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Get(Get),
    Post(Post),
}

/// issue a GET request
#[derive(FromArgs)]
#[argh(subcommand, name = "get")]
struct Get {
    /// request path, e.g. '/api/health'
    #[argh(positional)]
    path: String,
}

/// issue a POST request
#[derive(FromArgs)]
#[argh(subcommand, name = "post")]
struct Post {
    /// request path, e.g. '/api/docker/containers/web/restart'
    #[argh(positional)]
    path: String,

    /// JSON body; without it the request carries no body
    #[argh(option)]
    body: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = argh::from_env();
    let client = ApiClient::new(&cli.origin);

    let answer: Value = match cli.command {
        Command::Get(get) => client.get(&get.path).await?,
        Command::Post(post) => {
            let body = parse_body(post.body.as_deref())?;
            client.post(&post.path, body.as_ref()).await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&answer)?);
    Ok(())
}

/// `--body` as JSON; absent stays absent rather than becoming `null`.
fn parse_body(raw: Option<&str>) -> Result<Option<Value>, serde_json::Error> {
    raw.map(|body| serde_json::from_str::<Value>(body)).transpose()
}
