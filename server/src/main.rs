use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};
use recommender_server::{build_app, load_corpus, DEFAULT_QUERY};
use tokio::net::TcpListener;

#[derive(Parser)]
struct Args {
    /// Corpus file (.csv, .json or .jsonl)
    #[arg(long, default_value = "./data/articles.csv")]
    corpus: String,
    /// Phrase used when the query is blank
    #[arg(long, default_value = DEFAULT_QUERY)]
    default_query: String,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let corpus = load_corpus(&args.corpus)?;
    let app = build_app(corpus, args.default_query);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
