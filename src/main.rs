//! ecotour-rag - tourism knowledge engine host
//!
//! Answers free-text questions from a curated sustainable-tourism corpus,
//! either one-shot from the command line or as an HTTP service for a dashboard.
//!
//! # Usage
//!
//! ```bash
//! # Intent-shaped answer from the ranked corpus
//! ecotour-rag ask "green marketing strategy for eco resorts"
//!
//! # Lightweight topic lookup
//! ecotour-rag ask --lightweight "waste recycling"
//!
//! # Filtered search, printed as JSON
//! ecotour-rag --json search "carbon" --category environment --min-relevance 9
//!
//! # HTTP API on the configured address
//! ecotour-rag serve --addr 0.0.0.0:8080
//! ```
//!
//! # Environment Variables
//!
//! - `ECOTOUR_RAG_CONFIG`: Path to a TOML config file (default: ./rag_config.toml)
//! - `ECOTOUR_RAG_CORS_ORIGINS`: Comma-separated origins allowed by the HTTP API
//! - `RUST_LOG`: Logging level (default: info)

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use ecotour_rag::api::{create_app, ApiState};
use ecotour_rag::composer::classify_intent;
use ecotour_rag::config::EngineConfig;
use ecotour_rag::context::KnowledgeResponder;
use ecotour_rag::types::{Category, SearchFilters};
use ecotour_rag::RagEngine;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "ecotour-rag")]
#[command(about = "Retrieval-augmented answers from a sustainable-tourism knowledge base")]
#[command(version)]
struct CliArgs {
    /// Config file (overrides ECOTOUR_RAG_CONFIG and ./rag_config.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print structured results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer a question from the ranked corpus
    Ask {
        query: String,
        /// Use the lightweight topic lookup instead of ranked retrieval
        #[arg(long)]
        lightweight: bool,
    },

    /// Lightweight topic lookup
    Lookup { query: String },

    /// Rank documents, optionally filtered
    Search {
        query: String,
        /// Keep only these categories (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,
        /// Minimum editorial relevance score
        #[arg(long)]
        min_relevance: Option<f64>,
        /// Keep only these sources (repeatable)
        #[arg(long = "source")]
        sources: Vec<String>,
        /// Show scores for the top K instead of filtering the search pool
        #[arg(long, value_name = "K")]
        scored: Option<usize>,
    },

    /// Corpus statistics
    Stats,

    /// Regulations mentioning any query word
    Regulations { query: String },

    /// Market trends, optionally filtered by query words
    Trends { query: Option<String> },

    /// Detail view of one document
    Summary { id: String },

    /// Context block handed to an external completion API
    Context { query: String },

    /// Validate a config file and report problems
    CheckConfig { path: PathBuf },

    /// Serve the HTTP API
    Serve {
        /// Override the server address (default from config: "127.0.0.1:8080")
        #[arg(short, long)]
        addr: Option<String>,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig> {
    match path {
        Some(p) => EngineConfig::load_from_file(p)
            .with_context(|| format!("Failed to load config from {}", p.display())),
        None => Ok(EngineConfig::load()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ============================================================================
// Server
// ============================================================================

async fn serve(engine: Arc<RagEngine>, addr: String) -> Result<()> {
    let app = create_app(ApiState::new(engine));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Received shutdown signal");
        })
        .await
        .context("HTTP server error")?;

    info!("Graceful shutdown complete");
    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    if let Command::CheckConfig { path } = &args.command {
        let config = EngineConfig::load_from_file(path)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        println!("{} is valid", path.display());
        if args.json {
            print_json(&config)?;
        }
        return Ok(());
    }

    let config = load_config(args.config.as_ref())?;
    let server_addr = config.server.addr.clone();
    let engine = Arc::new(RagEngine::new(config));

    match args.command {
        Command::Ask { query, lightweight } => {
            let response = if lightweight {
                engine.query_knowledge(&query)
            } else {
                engine.compose(&query)
            };
            if args.json {
                print_json(&serde_json::json!({
                    "query": &query,
                    "intent": (!lightweight).then(|| classify_intent(&query)),
                    "responder": if lightweight { "TopicLookup" } else { engine.responder_name() },
                    "response": response,
                }))?;
            } else {
                println!("{response}");
            }
        }
        Command::Lookup { query } => {
            println!("{}", engine.query_knowledge(&query));
        }
        Command::Search {
            query,
            categories,
            min_relevance,
            sources,
            scored,
        } => {
            if let Some(k) = scored {
                let rows = engine.retrieve_scored(&query, k);
                if args.json {
                    print_json(&rows)?;
                } else {
                    for (i, row) in rows.iter().enumerate() {
                        println!(
                            "{:>2}. {} {:<45} score={:.4} cosine={:.4} boost={:.1}",
                            i + 1,
                            row.document.id,
                            row.document.title,
                            row.similarity,
                            row.base_similarity,
                            row.category_boost
                        );
                    }
                }
                return Ok(());
            }

            let filters = SearchFilters {
                categories: (!categories.is_empty())
                    .then(|| categories.iter().map(|c| Category::parse(c)).collect()),
                min_relevance,
                sources: (!sources.is_empty()).then_some(sources),
            };
            let docs = engine.semantic_search(&query, &filters);
            if args.json {
                print_json(&docs)?;
            } else if docs.is_empty() {
                println!("No documents matched.");
            } else {
                for doc in &docs {
                    println!(
                        "{} [{}] {} ({}, {:.1})",
                        doc.id, doc.category, doc.title, doc.source, doc.relevance_score
                    );
                }
            }
        }
        Command::Stats => {
            let stats = engine.stats();
            if args.json {
                print_json(&stats)?;
            } else {
                println!("Documents:   {}", stats.total_documents);
                println!("Regulations: {}", stats.total_regulations);
                println!("Trends:      {}", stats.total_trends);
                println!("Avg relevance: {:.2}", stats.average_relevance);
                if let Some(date) = stats.last_update {
                    println!("Last update: {date}");
                }
                println!("Categories:");
                for (name, count) in &stats.categories {
                    println!("  {name:<16} {count}");
                }
            }
        }
        Command::Regulations { query } => {
            let regs = engine.search_regulations(&query);
            if args.json {
                print_json(&regs)?;
            } else if regs.is_empty() {
                println!("No regulations matched.");
            } else {
                for reg in &regs {
                    println!(
                        "{} {} ({:?}, {:?}, effective {})\n  {}",
                        reg.id,
                        reg.title,
                        reg.jurisdiction,
                        reg.compliance_level,
                        reg.effective_date,
                        reg.content
                    );
                }
            }
        }
        Command::Trends { query } => {
            let analysis = engine.trend_analysis(query.as_deref().unwrap_or(""));
            if args.json {
                print_json(&analysis)?;
            } else {
                println!("{}", analysis.summary);
            }
        }
        Command::Summary { id } => {
            let summary = engine.document_summary(&id)?;
            if args.json {
                print_json(&summary)?;
            } else {
                println!("{} - {}", summary.id, summary.title);
                println!("Category: {} | Source: {}", summary.category, summary.source);
                println!(
                    "Relevance: {:.1}/10 | Updated: {} | Words: {}",
                    summary.relevance_score, summary.last_updated, summary.word_count
                );
                println!("Key topics: {}", summary.key_topics.join(", "));
                println!("\n{}", summary.content_preview);
            }
        }
        Command::Context { query } => {
            println!("{}", engine.build_context(&query));
        }
        Command::Serve { addr } => {
            serve(engine, addr.unwrap_or(server_addr)).await?;
        }
        Command::CheckConfig { .. } => {}
    }

    Ok(())
}
