use anyhow::Result;
use clap::{Parser, ValueEnum};
use recommender_core::{effective_query, recommend, Recommendation, DEFAULT_QUERY, DEFAULT_RESULTS};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt};

mod input;

use input::load_corpus;

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "recommender-cli")]
#[command(about = "Recommend the articles whose titles best match a query", long_about = None)]
struct Cli {
    /// Corpus file (.csv, .json or .jsonl)
    #[arg(long)]
    corpus: String,
    /// Free-text query; blank falls back to the default phrase
    #[arg(long, default_value = "")]
    query: String,
    /// Number of recommendations (1-20)
    #[arg(long, default_value_t = DEFAULT_RESULTS)]
    num: usize,
    #[arg(long, default_value = DEFAULT_QUERY)]
    default_query: String,
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Serialize)]
struct Output<'a> {
    utterance: &'a str,
    articles: &'a [Recommendation],
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let corpus = load_corpus(&cli.corpus)?;
    let utterance = effective_query(&cli.query, &cli.default_query);
    tracing::info!(%utterance, num = cli.num, "recommending");
    let articles = recommend(&corpus, utterance, cli.num)?;

    match cli.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&Output { utterance, articles: &articles })?),
        Format::Table => print!("{}", render_table(&articles)),
    }
    Ok(())
}

fn render_table(articles: &[Recommendation]) -> String {
    let mut out = String::new();
    for a in articles {
        out.push_str(&format!("{:>2}. {:.4}  {}  {}\n", a.rank, a.score, a.title, a.link));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_one_article_per_line() {
        let articles = vec![
            Recommendation { rank: 1, title: "Car Maintenance Tips".into(), link: "https://x/3".into(), score: 0.5 },
            Recommendation { rank: 2, title: "Auto Insurance Basics".into(), link: "https://x/1".into(), score: 0.25 },
        ];
        let table = render_table(&articles);
        assert_eq!(table, " 1. 0.5000  Car Maintenance Tips  https://x/3\n 2. 0.2500  Auto Insurance Basics  https://x/1\n");
    }
}
