//! The card load flow: minimum-delay timer, then the profile fetch
//!
//! The two stages are strictly sequential — the fetch is only issued after
//! the timer resolves, so there is no race between them. Neither stage can
//! be cancelled once started, and no stage retries: every failure
//! propagates to the caller as a [`CardError`].

use std::time::Duration;

use chrono::Local;
use reqwest::Client;
use tracing::debug;

use crate::api::{fetch_profile, Profile};
use crate::core::constants::DATE_FORMAT;
use crate::core::error::CardError;

/// Everything a successful load produces: the date captured when the run
/// started and the profile the endpoint returned.
#[derive(Debug)]
pub struct CardData {
    pub date: String,
    pub profile: Profile,
}

/// Hold the loading indicator on screen for at least `delay`, then resolve
/// with the date string captured at the start of the run.
///
/// An empty captured date fails with a fixed message and aborts the rest
/// of the flow — the fetch never runs. With the date coming from the
/// system clock this branch is unreachable in practice, but the behavior
/// is part of the flow's contract.
pub async fn wait_minimum_delay(delay: Duration, date: String) -> Result<String, CardError> {
    tokio::time::sleep(delay).await;
    if date.is_empty() {
        return Err(CardError::EmptyDate);
    }
    Ok(date)
}

/// Run the full load flow against an already-derived endpoint.
pub async fn load_card(
    client: &Client,
    endpoint: &str,
    delay: Duration,
) -> Result<CardData, CardError> {
    let captured = Local::now().format(DATE_FORMAT).to_string();
    let date = wait_minimum_delay(delay, captured).await?;
    debug!(endpoint, "minimum delay elapsed");

    let profile = fetch_profile(client, endpoint).await?;
    Ok(CardData { date, profile })
}
