use anyhow::anyhow;
use clap::{Parser, Subcommand};
use std::time::Duration;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;
use depview::render::{render_edge, render_listing, render_node};
use depview_client::{ClientConfig, GraphClient, HttpGraphClient, PagedListNavigator, DEFAULT_API_URL, DEFAULT_PAGE_SIZE};

/// Browse a dependency graph served over REST
#[derive(Parser, Debug)]
#[command(name = "depview")]
#[command(about = "Browse a remote dependency graph", long_about = None)]
struct Args {
    /// Base URL of the graph REST API
    #[arg(long, env = "DEPVIEW_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the graph summary
    Info,

    /// Show a node with its properties and relations
    Node {
        /// Fully qualified node name
        name: String,
    },

    /// Show the dependency between two nodes
    Edge {
        from: String,
        to: String,

        /// Levels of base dependencies to show
        #[arg(long, default_value_t = 1)]
        depth: usize,
    },

    /// List nodes, one page at a time
    Nodes {
        /// Filter passed to the server; empty lists all nodes
        #[arg(short, long, default_value = "")]
        query: String,

        /// Page number, starting at 1
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Nodes per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
        size: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ClientConfig::new(args.api_url).with_timeout(Duration::from_secs(args.timeout_secs));
    let client = HttpGraphClient::new(config)?;
    debug!("Graph API: {}", client.base_url());

    match args.command {
        Command::Info => {
            let info = client.fetch_graph_info().await?;
            println!("{info}");
        }
        Command::Node { name } => {
            let node = client.fetch_node(&name).await?;
            print!("{}", render_node(&node));
        }
        Command::Edge { from, to, depth } => {
            let edge = client.fetch_edge(&from, &to).await?;
            print!("{}", render_edge(&edge, depth));
        }
        Command::Nodes { query, page, size } => {
            let mut navigator = PagedListNavigator::new(client);
            navigator.set_query(query);
            navigator.load(page - 1, size).await;

            if let Some(message) = navigator.error_message() {
                return Err(anyhow!("{message}"));
            }
            if let Some(result) = navigator.current_page() {
                print!("{}", render_listing(result));
            }
        }
    }

    Ok(())
}
