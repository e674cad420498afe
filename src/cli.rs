use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mistral")]
#[command(about = "Interact with Mistral AI from the command line", long_about = None)]
pub struct Args {
    #[arg(
        long = "address",
        global = true,
        help = "Custom API base URL (e.g., http://localhost:8080)"
    )]
    pub address: Option<String>,

    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        help = "Log requests and stream progress to stderr"
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send a chat completion request
    Chat {
        #[arg(short = 'm', long = "model", help = "Model to use")]
        model: Option<String>,

        #[arg(long = "no-stream", help = "Wait for the full response instead of streaming")]
        no_stream: bool,

        #[arg(required = true, help = "Prompt to send")]
        prompt: Vec<String>,
    },
    /// List the models available to this key
    Models,
    /// Compute embeddings for a text
    Embed {
        #[arg(short = 'm', long = "model", help = "Embedding model to use")]
        model: Option<String>,

        #[arg(required = true, help = "Text to embed")]
        text: Vec<String>,
    },
}
