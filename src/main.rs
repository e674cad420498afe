mod cli;
mod ui;

use clap::Parser;
use mistral_ai::api::response::{delta_content, message_content, model_ids};
use mistral_ai::{Client, Config, ParsedEvent, RawChunk};
use serde_json::{json, Value};
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};
use ui::output::{
    display_content, display_delta, display_error, display_json, display_models,
    display_stream_summary,
};

const DEFAULT_CHAT_MODEL: &str = "mistral-small-latest";
const DEFAULT_EMBED_MODEL: &str = "mistral-embed";
const MODEL_ENV: &str = "MISTRAL_MODEL";
const LOG_ENV: &str = "MISTRAL_LOG";

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args).await {
        display_error(&format!("{:#}", e));
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "mistral_ai=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args) -> anyhow::Result<()> {
    // CLI args > env vars > config file > defaults
    let mut config = Config::load()?.with_env_overrides();
    if let Some(address) = args.address {
        config = config.address(address);
    }

    let client = mistral_ai::new(config)?;

    match args.command {
        Command::Chat {
            model,
            no_stream,
            prompt,
        } => {
            let model = resolve_model(model, DEFAULT_CHAT_MODEL);
            chat(&client, model, !no_stream, &prompt.join(" ")).await
        }
        Command::Models => {
            let body = client.models(None).await?.into_value();
            let ids = model_ids(&body);
            if ids.is_empty() {
                display_json(&body);
            } else {
                display_models(&ids);
            }
            Ok(())
        }
        Command::Embed { model, text } => {
            let payload = json!({
                "model": resolve_model(model, DEFAULT_EMBED_MODEL),
                "input": [text.join(" ")]
            });
            let body = client.embeddings(&payload, None).await?.into_value();
            display_json(&body);
            Ok(())
        }
    }
}

fn resolve_model(model: Option<String>, default: &str) -> String {
    model
        .or_else(|| env::var(MODEL_ENV).ok())
        .unwrap_or_else(|| default.to_string())
}

async fn chat(client: &Client, model: String, stream: bool, prompt: &str) -> anyhow::Result<()> {
    let payload = json!({
        "model": model,
        "stream": stream,
        "messages": [{ "role": "user", "content": prompt }]
    });

    if stream {
        let mut on_event = |event: &Value, _parsed: &ParsedEvent, _raw: &RawChunk| {
            if let Some(content) = delta_content(event) {
                // stdout going away mid-stream is not worth aborting the request
                let _ = display_delta(content);
            }
        };

        let response = client
            .chat_completions(&payload, Some(true), Some(&mut on_event))
            .await?;

        let content: String = response
            .events()
            .unwrap_or_default()
            .iter()
            .filter_map(delta_content)
            .collect();
        display_stream_summary(&content);
    } else {
        let body = client
            .chat_completions(&payload, Some(false), None)
            .await?
            .into_value();

        match message_content(&body) {
            Some(content) => display_content(content),
            None => display_json(&body),
        }
    }

    Ok(())
}
