#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod platform;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use collectives_core::{GiftCardBatch, SiteConfig};
use dioxus::desktop::{Config, WindowBuilder};

/// Startup settings, set once from the command line
static STARTUP: OnceLock<Startup> = OnceLock::new();

/// Everything the app needs before the first render.
#[derive(Debug, Clone)]
pub struct Startup {
    pub site: SiteConfig,
    pub gift_cards: Option<GiftCardBatch>,
    pub start_route: Option<String>,
}

/// Get the startup settings (command line or defaults)
pub fn startup() -> Startup {
    STARTUP.get().cloned().unwrap_or_else(|| Startup {
        site: SiteConfig::default(),
        gift_cards: None,
        start_route: None,
    })
}

/// Collectives - search, memberships and gift cards
#[derive(Parser, Debug)]
#[command(name = "collectives-desktop")]
#[command(about = "Collectives - search collectives, embed memberships, hand out gift cards")]
struct Args {
    /// Public website origin used for redeem and pledge links
    #[arg(long, env = "WEBSITE_URL", default_value = collectives_core::config::DEFAULT_WEBSITE_URL)]
    website_url: String,

    /// API origin; GraphQL requests go to <API_URL>/graphql
    #[arg(long, env = "API_URL", default_value = collectives_core::config::DEFAULT_API_URL)]
    api_url: String,

    /// JSON file describing freshly created gift cards to confirm
    #[arg(long)]
    gift_cards: Option<PathBuf>,

    /// Route to open first (e.g. "/search?q=open+source")
    #[arg(long)]
    start: Option<String>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log: String,
}

fn load_gift_cards(path: &PathBuf) -> anyhow::Result<GiftCardBatch> {
    GiftCardBatch::load(path)
        .with_context(|| format!("Failed to load gift cards from {}", path.display()))
}

fn main() {
    let args = Args::parse();
    collectives_core::logging::init(&args.log);

    let site = SiteConfig::new(args.website_url, args.api_url);

    let gift_cards = args.gift_cards.as_ref().and_then(|path| {
        load_gift_cards(path)
            .map_err(|e| tracing::error!("{:#}", e))
            .ok()
    });

    // A gift card batch opens on its confirmation screen unless told otherwise
    let start_route = args.start.or_else(|| {
        gift_cards
            .as_ref()
            .map(|batch| format!("/{}/gift-cards/created", batch.collective_slug))
    });

    tracing::info!(
        website = %site.website_url,
        api = %site.graphql_endpoint(),
        "Starting collectives"
    );

    let _ = STARTUP.set(Startup {
        site,
        gift_cards,
        start_route,
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Collectives")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
