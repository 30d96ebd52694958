//! Command-line interface parsing and dispatch

use std::error::Error;
use std::time::Duration;

use clap::Parser;
use reqwest::Client;
use tracing::info;

use crate::core::card::Card;
use crate::core::config::Config;
use crate::core::constants::MIN_DISPLAY_DELAY_MS;
use crate::core::endpoint::derive_endpoint;
use crate::core::loader::load_card;
use crate::ui::run_card;

#[derive(Parser, Debug)]
#[command(name = "octocard")]
#[command(about = "A terminal viewer for GitHub user profile cards")]
#[command(
    long_about = "Octocard fetches a public GitHub user profile and renders it as a card \
in a full-screen terminal interface.\n\n\
The target username is read out of the address argument: everything after the \
first '=' is the username (e.g. 'https://site/?user=octocat'). An address \
without a usable token falls back to the default username.\n\n\
Controls:\n\
  q / Esc / Ctrl+C  Quit\n\n\
Configuration (optional, TOML in the platform config directory):\n\
  default_username  Username used when the address carries no '=' token\n\
  api_base_url      Override for the users endpoint base URL"
)]
pub struct Args {
    /// Address to read the target username from (the substring after the
    /// first '=')
    pub address: Option<String>,

    /// Print the card to stdout instead of opening the full-screen
    /// interface
    #[arg(long)]
    pub plain: bool,

    /// Minimum time the loading indicator stays visible, in milliseconds
    #[arg(long, default_value_t = MIN_DISPLAY_DELAY_MS)]
    pub delay_ms: u64,
}

pub async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;

    let address = args.address.unwrap_or_default();
    let endpoint = derive_endpoint(
        config.api_base_url(),
        &address,
        config.default_username(),
    );
    info!(%endpoint, "derived profile endpoint");

    let client = Client::builder()
        .user_agent(concat!("octocard/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let delay = Duration::from_millis(args.delay_ms);

    if args.plain {
        run_plain(&client, &endpoint, delay).await
    } else {
        run_card(client, endpoint, delay).await
    }
}

/// TUI-less path: wait out the same flow, then print the card fields.
async fn run_plain(
    client: &Client,
    endpoint: &str,
    delay: Duration,
) -> Result<(), Box<dyn Error>> {
    match load_card(client, endpoint, delay).await {
        Ok(data) => {
            let mut card = Card::new();
            card.set_date(data.date);
            card.apply_profile(&data.profile);

            println!("Date:    {}", card.date);
            println!("Name:    {}", card.name);
            println!("Bio:     {}", card.bio);
            println!("Profile: {}", card.link);
            println!("Avatar:  {}", card.avatar);
            Ok(())
        }
        Err(err) => {
            eprintln!("❌ {}", err);
            std::process::exit(1);
        }
    }
}
