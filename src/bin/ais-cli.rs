use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

#[derive(Parser)]
#[command(name = "ais-cli")]
#[command(about = "Query an Agent Inventory Service", long_about = None)]
struct Cli {
    /// Service URL including the mount prefix.
    #[arg(short, long, default_value = "http://localhost:8080/aisv3")]
    url: String,

    /// Acting agent id, sent in the agent header.
    #[arg(short, long)]
    agent: Option<String>,

    /// Name of the agent header.
    #[arg(long, default_value = "x-agent-id")]
    agent_header: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a folder by system keyword or id
    Category {
        token: String,
        /// Traversal depth, or `*` for unbounded
        #[arg(short, long)]
        depth: Option<String>,
    },
    /// Fetch an item by id
    Item { id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/llsd+xml"));
    if let Some(agent) = &cli.agent {
        headers.insert(
            reqwest::header::HeaderName::from_bytes(cli.agent_header.as_bytes())?,
            HeaderValue::from_str(agent)?,
        );
    }

    let url = match &cli.command {
        Commands::Category { token, depth } => match depth {
            Some(depth) => format!("{}/category/{}?depth={}", cli.url, token, depth),
            None => format!("{}/category/{}", cli.url, token),
        },
        Commands::Item { id } => format!("{}/item/{}", cli.url, id),
    };

    let res = client.get(url).headers(headers).send().await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let body = res.text().await?;
    if status.is_success() {
        println!("{}", body);
    } else {
        eprintln!("Error: service returned status {}", status);
        eprintln!("Response: {}", body);
    }
    Ok(())
}
