#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the Dreizeer site generators.
//!
//! Prints landing page bundles, JSON-LD, contact links, and crawler files,
//! or exports all of them to a directory. The base URL comes from
//! `SITE_URL` unless `--site-url` is given; the date defaults to today.

use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dreizeer_contact::{ChatMessage, build_chat_link};
use dreizeer_pricing::current_monthly_offer;
use dreizeer_pricing::offer::offer_deadline_label;
use dreizeer_pricing_models::MonthlyOffer;
use dreizeer_schema::SchemaDocument;
use dreizeer_site::config::SiteConfig;
use dreizeer_site::export::export_all;
use dreizeer_site::landing::LandingPage;
use dreizeer_site::pages::{PageBundle, StaticPage};
use dreizeer_site::{manifest, parse_date, render_schemas, robots, sitemap};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "dreizeer_site", about = "Dreizeer site content generator")]
struct Cli {
    /// Public site host; overrides `SITE_URL`
    #[arg(long, global = true)]
    site_url: Option<String>,

    /// Render as of this date (`YYYY-MM-DD`) instead of today
    #[arg(long, global = true)]
    date: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the bundle for a neighborhood landing page
    Landing {
        /// City URL segment (e.g. `madrid`)
        city: String,
        /// Neighborhood URL segment (e.g. `retiro`)
        neighborhood: String,
    },
    /// Print this month's promotion
    Offer,
    /// Print a WhatsApp link
    ChatLink {
        /// Use a fixed template (e.g. `pricing_group`)
        #[arg(long)]
        template: Option<String>,
        /// Free-text message, joined with spaces
        message: Vec<String>,
    },
    /// Print the JSON-LD of a static page, or of a request file
    Schema {
        /// Page name (`home`, `sobre-mi`, `tercera-edad`, `online-coaching`)
        page: Option<String>,
        /// JSON file holding a tagged document request
        #[arg(long, conflicts_with = "page")]
        input: Option<PathBuf>,
    },
    /// Print `sitemap.xml`
    Sitemap,
    /// Print `robots.txt`
    Robots,
    /// Print the web app manifest
    Manifest,
    /// Write every artifact to a directory
    Export {
        /// Output directory
        #[arg(long, default_value = "dist")]
        out: PathBuf,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OfferOutput {
    #[serde(flatten)]
    offer: MonthlyOffer,
    deadline_label: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let config = match cli.site_url.as_deref() {
        Some(url) => SiteConfig::from_site_url(Some(url)),
        None => SiteConfig::from_env(),
    };
    let today: NaiveDate = match cli.date.as_deref() {
        Some(date) => parse_date(date)?,
        None => chrono::Local::now().date_naive(),
    };

    log::debug!("Base URL {} as of {today}", config.base_url);

    match cli.command {
        Commands::Landing { city, neighborhood } => {
            let page = LandingPage::build(&city, &neighborhood, today, &config)?;
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        Commands::Offer => {
            let offer = current_monthly_offer(today);
            let deadline_label = offer_deadline_label(&offer.valid_through);
            let output = OfferOutput {
                offer,
                deadline_label,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::ChatLink { template, message } => {
            let link = match template {
                Some(name) => ChatMessage::from_str(&name)
                    .map_err(|_| format!("Unknown message template: {name}"))?
                    .link(),
                None => build_chat_link(&message.join(" ")),
            };
            println!("{link}");
        }
        Commands::Schema { page, input } => {
            let schemas = if let Some(path) = input {
                let request: SchemaDocument =
                    serde_json::from_str(&std::fs::read_to_string(&path)?)?;
                render_schemas(&[request])?
            } else {
                let page = StaticPage::parse(page.as_deref().unwrap_or("home"))?;
                PageBundle::build(page, &config)?.schemas
            };
            for schema in schemas {
                println!("{}", schema.json);
            }
        }
        Commands::Sitemap => {
            print!(
                "{}",
                sitemap::render_xml(&sitemap::entries(&config.base_url, today))
            );
        }
        Commands::Robots => print!("{}", robots::render(&config.base_url)),
        Commands::Manifest => println!("{}", manifest::render()?),
        Commands::Export { out } => {
            let stats = export_all(&out, &config, today)?;
            println!("Wrote {} files to {}", stats.files.len(), out.display());
        }
    }

    Ok(())
}
