//! CLI administration tool for docdrop.
//!
//! Runs the same use cases as the HTTP API directly against the configured
//! storage backend.
//!
//! # Usage
//!
//! ```bash
//! # Store a document (prompts for missing fields)
//! cargo run --bin docdrop-admin -- document create --title "Notes" --expires-in 3600
//!
//! # Read a document through its access code
//! cargo run --bin docdrop-admin -- document show Xq3v9Kp2aB-_
//!
//! # List access codes, never-expiring first, then by expiry
//! cargo run --bin docdrop-admin -- codes list
//!
//! # Check storage connectivity
//! cargo run --bin docdrop-admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `STORAGE_BACKEND`, `DATABASE_URL` or `DB_*`.
//! With the in-memory backend nothing outlives the command.

use docdrop::application::use_cases::CreateDocumentInput;
use docdrop::config::{self, StorageBackend};
use docdrop::domain::entities::AccessCode;
use docdrop::infrastructure::persistence::Repositories;
use docdrop::state::AppState;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};

/// CLI tool for managing docdrop.
#[derive(Parser)]
#[command(name = "docdrop-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Create and read documents
    Document {
        #[command(subcommand)]
        action: DocumentAction,
    },

    /// Inspect access codes
    Codes {
        #[command(subcommand)]
        action: CodesAction,
    },

    /// Storage operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Document subcommands.
#[derive(Subcommand)]
enum DocumentAction {
    /// Store a document and issue an access code
    Create {
        /// Document title
        #[arg(short, long)]
        title: Option<String>,

        /// Document body
        #[arg(short, long)]
        content: Option<String>,

        /// Access code lifetime in seconds (never expires if omitted)
        #[arg(short, long)]
        expires_in: Option<i64>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Redeem an access code and print the document
    Show {
        /// Access code
        code: String,
    },
}

/// Access code subcommands.
#[derive(Subcommand)]
enum CodesAction {
    /// List access codes ordered by expiry
    List {
        /// Only codes for this document id
        #[arg(short, long)]
        document: Option<String>,

        /// Evaluate expiry at this RFC 3339 instant instead of now
        #[arg(long)]
        at: Option<String>,
    },
}

/// Storage subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check storage connection and show record counts
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let repositories = Repositories::connect(&config).await?;

    if repositories.backend == StorageBackend::Memory {
        eprintln!(
            "{}",
            "Warning: in-memory backend, changes are discarded when this command exits".yellow()
        );
    }

    match cli.command {
        Commands::Document { action } => handle_document_action(action, repositories).await?,
        Commands::Codes { action } => handle_codes_action(action, &repositories).await?,
        Commands::Db { action } => handle_db_action(action, &repositories).await?,
    }

    Ok(())
}

/// Dispatches document commands through the use cases.
async fn handle_document_action(action: DocumentAction, repositories: Repositories) -> Result<()> {
    let state = AppState::with_system_ports(repositories);

    match action {
        DocumentAction::Create {
            title,
            content,
            expires_in,
            yes,
        } => {
            let title = match title {
                Some(t) => t,
                None => Input::new()
                    .with_prompt("Title")
                    .interact_text()
                    .context("Failed to read title")?,
            };
            let content = match content {
                Some(c) => c,
                None => Input::new()
                    .with_prompt("Content")
                    .interact_text()
                    .context("Failed to read content")?,
            };

            if !yes {
                let expiry = expires_in
                    .map(|s| format!("expires in {s}s"))
                    .unwrap_or_else(|| "never expires".to_string());
                let confirmed = Confirm::new()
                    .with_prompt(format!("Create document '{}' ({})?", title, expiry))
                    .default(true)
                    .interact()?;
                if !confirmed {
                    println!("{}", "Cancelled".yellow());
                    return Ok(());
                }
            }

            let output = state
                .create_document
                .execute(CreateDocumentInput {
                    title,
                    content,
                    expires_in,
                })
                .await?;

            println!("{}", "✓ Document created".green().bold());
            println!("  {} {}", "ID:".bold(), output.id);
            println!("  {} {}", "Access code:".bold(), output.access_code.cyan());
        }
        DocumentAction::Show { code } => {
            let document = state.redeem_code.execute(&code).await?;

            println!("{}", document.title.bold());
            println!("{}", format!("created {}", document.created_at).dimmed());
            println!();
            println!("{}", document.content);
        }
    }

    Ok(())
}

/// Lists access codes with their expiry state.
async fn handle_codes_action(action: CodesAction, repositories: &Repositories) -> Result<()> {
    match action {
        CodesAction::List { document, at } => {
            let now: DateTime<Utc> = match at {
                Some(raw) => AccessCode::parse_expires_at(&raw)?,
                None => Utc::now(),
            };

            let codes = match document {
                Some(ref id) => repositories.access_codes.find_by_document_id(id).await?,
                None => repositories.access_codes.find_all().await?,
            };

            if codes.is_empty() {
                println!("{}", "No access codes found".yellow());
                return Ok(());
            }

            println!(
                "{:<16} {:<38} {:<28} {}",
                "CODE".bold(),
                "DOCUMENT".bold(),
                "EXPIRES AT".bold(),
                "STATE".bold()
            );
            for code in codes {
                let expires = code
                    .expires_at()
                    .map(|e| e.to_rfc3339())
                    .unwrap_or_else(|| "never".to_string());
                let state = if code.is_expired(now) {
                    "expired".red()
                } else {
                    "active".green()
                };
                println!(
                    "{:<16} {:<38} {:<28} {}",
                    code.code(),
                    code.document_id(),
                    expires,
                    state
                );
            }
        }
    }

    Ok(())
}

/// Dispatches storage commands.
async fn handle_db_action(action: DbAction, repositories: &Repositories) -> Result<()> {
    match action {
        DbAction::Check => {
            let documents = repositories.documents.count().await?;
            let codes = repositories.access_codes.count().await?;

            println!(
                "{} {}",
                "✓ Storage reachable:".green().bold(),
                repositories.backend
            );
            println!("  {} {}", "Documents:".bold(), documents);
            println!("  {} {}", "Access codes:".bold(), codes);
        }
    }

    Ok(())
}
