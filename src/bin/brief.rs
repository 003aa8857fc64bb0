//! Command-line access to CRM briefings.
//!
//! Runs the same aggregation as the HTTP service without starting a server.
//!
//! # Usage
//!
//! ```bash
//! # Print a briefing (prompts for missing arguments)
//! cargo run --bin brief -- fetch --email jane@example.com --domain example.com
//!
//! # Raw JSON, as served by GET /brief
//! cargo run --bin brief -- fetch -e jane@example.com -d example.com --json
//!
//! # LLM summary (requires OPENAI_API_KEY)
//! cargo run --bin brief -- summarize --email jane@example.com
//!
//! # Check CRM connectivity and token
//! cargo run --bin brief -- check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `crm_briefing::config`. `HUBSPOT_TOKEN` is required.

use crm_briefing::application::services::{BriefingService, SummaryService};
use crm_briefing::config::{self, Config};
use crm_briefing::domain::entities::Briefing;
use crm_briefing::domain::repositories::CrmRepository;
use crm_briefing::infrastructure::crm::HubSpotRepository;
use crm_briefing::infrastructure::summarizer::{NullSummarizer, OpenAiSummarizer, Summarizer};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::sync::Arc;

/// CLI tool for CRM briefings.
#[derive(Parser)]
#[command(name = "brief")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a briefing for a contact and company
    Fetch {
        /// Contact email address
        #[arg(short, long)]
        email: Option<String>,

        /// Company website domain
        #[arg(short, long)]
        domain: Option<String>,

        /// Print the raw JSON briefing
        #[arg(long)]
        json: bool,
    },

    /// Summarize a contact with the configured LLM
    Summarize {
        /// Contact email address
        #[arg(short, long)]
        email: Option<String>,

        /// Company website domain (defaults to the email's domain)
        #[arg(short, long)]
        domain: Option<String>,
    },

    /// Check CRM connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Invalid configuration")?;

    let crm: Arc<HubSpotRepository> = Arc::new(
        HubSpotRepository::new(config.hubspot_options())
            .context("Failed to initialize CRM client")?,
    );

    match cli.command {
        Commands::Fetch {
            email,
            domain,
            json,
        } => fetch(crm, email, domain, json).await?,
        Commands::Summarize { email, domain } => summarize(crm, &config, email, domain).await?,
        Commands::Check => check(crm.as_ref()).await?,
    }

    Ok(())
}

/// Returns the argument or asks for it interactively.
fn arg_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new().with_prompt(prompt).interact_text()?),
    }
}

async fn fetch(
    crm: Arc<HubSpotRepository>,
    email: Option<String>,
    domain: Option<String>,
    json: bool,
) -> Result<()> {
    let email = arg_or_prompt(email, "Contact email")?;
    let domain = arg_or_prompt(domain, "Company domain")?;

    let service = BriefingService::new(crm);
    let briefing = service.get_brief(&email, &domain).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&briefing)?);
    } else {
        print_briefing(&briefing);
    }

    Ok(())
}

async fn summarize(
    crm: Arc<HubSpotRepository>,
    config: &Config,
    email: Option<String>,
    domain: Option<String>,
) -> Result<()> {
    let summarizer: Arc<dyn Summarizer> = match config.openai_options() {
        Some(options) => Arc::new(OpenAiSummarizer::new(options)?),
        None => Arc::new(NullSummarizer::new()),
    };

    let email = arg_or_prompt(email, "Contact email")?;

    let service = SummaryService::new(Arc::new(BriefingService::new(crm)), summarizer);
    let summary = service.summarize(&email, domain.as_deref()).await?;

    println!("{}", "📝 Summary".bright_blue().bold());
    println!();
    println!("{}", summary);
    println!();

    Ok(())
}

async fn check(crm: &HubSpotRepository) -> Result<()> {
    println!("{}", "🔍 Checking CRM connection...".bright_blue());

    if crm.health_check().await {
        println!("{}", "✅ CRM reachable and token accepted".green().bold());
        Ok(())
    } else {
        println!("{}", "❌ CRM unreachable or token rejected".red().bold());
        anyhow::bail!("CRM health check failed")
    }
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// Prints a briefing as a short report.
///
/// # Output Format
///
/// ```text
/// 👤 Jane Doe <jane@example.com>
///    VP Operations · customer
///
/// 🏢 Example Inc (example.com)
///    Logistics · 250 employees
///
/// 💼 Deals (2)
///   Renewal 2026                   contractsent         12000      2026-03-31
///
/// 📅 Engagements (5)
///   2026-02-01  call      Kickoff
/// ```
fn print_briefing(briefing: &Briefing) {
    let contact = &briefing.contact;
    let name = contact.full_name().unwrap_or_else(|| "(no name)".to_string());

    println!(
        "👤 {} <{}>",
        name.bright_white().bold(),
        contact.email.cyan()
    );
    println!(
        "   {} · {}",
        or_dash(contact.job_title.as_deref()),
        or_dash(contact.lifecycle_stage.as_deref()).bright_black()
    );
    println!();

    match &briefing.company {
        Some(company) => {
            println!(
                "🏢 {} ({})",
                or_dash(company.name.as_deref()).bright_white().bold(),
                or_dash(company.domain.as_deref()).cyan()
            );
            let employees = company
                .number_of_employees
                .map(|n| format!("{n} employees"))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "   {} · {}",
                or_dash(company.industry.as_deref()),
                employees.bright_black()
            );
        }
        None => println!("{}", "🏢 No company record for this domain".yellow()),
    }
    println!();

    println!(
        "{}",
        format!("💼 Deals ({})", briefing.deals.len())
            .bright_blue()
            .bold()
    );
    for deal in &briefing.deals {
        let close = deal
            .close_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<30} {:<20} {:<10} {}",
            or_dash(deal.name.as_deref()).cyan(),
            or_dash(deal.stage.as_deref()),
            or_dash(deal.amount.as_deref()).bright_yellow(),
            close.bright_black()
        );
    }
    println!();

    println!(
        "{}",
        format!("📅 Engagements ({})", briefing.engagements.len())
            .bright_blue()
            .bold()
    );
    for engagement in &briefing.engagements {
        let when = engagement
            .occurred_at
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "undated".to_string());
        let text = engagement
            .subject
            .as_deref()
            .or(engagement.body.as_deref())
            .map(|t| t.chars().take(60).collect::<String>())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<10}  {:<8}  {}",
            when.bright_black(),
            engagement.kind.to_string().green(),
            text
        );
    }
}
