// ESPN stats client: a fixed-priority fallback chain over the public
// endpoints, with the built-in sample dataset as the terminal fallback.
//
// The chain is intentionally dumb: each endpoint gets one attempt with a
// bounded timeout, the first non-empty extraction wins, and every failure
// mode (connect error, non-success status, malformed body, zero usable
// entries) just moves on to the next source. No retries, no backoff, no
// merging across sources. All errors are caught at this boundary; callers
// always receive a non-failing outcome.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use serde_json::Value;
use tracing::{info, warn};

use crate::espn::extract::{self, RawPlayer};
use crate::stats::sample;

// ---------------------------------------------------------------------------
// Endpoint priority list
// ---------------------------------------------------------------------------

/// Candidate endpoints for a season, in fixed priority order:
/// 1. the fantasy player-info endpoint,
/// 2. the sports-core athletes listing,
/// 3. the athletes listing with statistics.
pub fn endpoints_for_season(season: u16) -> Vec<String> {
    vec![
        format!(
            "https://fantasy.espn.com/apis/v3/games/fba/seasons/{season}/segments/0/leagues/standard?view=kona_player_info&scoringPeriodId=0"
        ),
        format!(
            "https://sports.core.api.espn.com/v2/sports/basketball/leagues/nba/seasons/{season}/athletes?limit=1000"
        ),
        format!(
            "https://sports.core.api.espn.com/v2/sports/basketball/leagues/nba/seasons/{season}/athletes?limit=1000&statistics=true"
        ),
    ]
}

// ---------------------------------------------------------------------------
// Outcome types
// ---------------------------------------------------------------------------

/// Which source ultimately produced the player list.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// A provider endpoint responded with usable entries.
    Live { endpoint: String },
    /// Every endpoint failed; the built-in sample dataset was used.
    Sample,
}

/// The result of a fetch: a qualitative source status plus the raw entries.
/// Never an error; failures degrade to the sample set.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub source: DataSource,
    pub players: Vec<RawPlayer>,
}

// ---------------------------------------------------------------------------
// StatsClient
// ---------------------------------------------------------------------------

/// HTTP client over the candidate provider endpoints.
pub struct StatsClient {
    http: reqwest::Client,
    endpoints: Vec<String>,
    timeout: Duration,
}

impl StatsClient {
    /// Create a client targeting the default endpoints for a season.
    pub fn new(season: u16, timeout: Duration) -> Self {
        Self::with_endpoints(endpoints_for_season(season), timeout)
    }

    /// Create a client with an explicit endpoint list. Used by tests to
    /// point the fallback chain at local mock servers.
    pub fn with_endpoints(endpoints: Vec<String>, timeout: Duration) -> Self {
        StatsClient {
            http: build_http_client(),
            endpoints,
            timeout,
        }
    }

    /// The configured endpoint list, in priority order.
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    /// Try each endpoint in priority order and return the first non-empty
    /// extraction; fall back to the built-in sample set when the chain is
    /// exhausted. Infallible by contract.
    pub async fn fetch_players(&self) -> FetchOutcome {
        for endpoint in &self.endpoints {
            match self.try_endpoint(endpoint).await {
                Ok(players) if !players.is_empty() => {
                    info!(%endpoint, count = players.len(), "fetched live player data");
                    return FetchOutcome {
                        source: DataSource::Live {
                            endpoint: endpoint.clone(),
                        },
                        players,
                    };
                }
                Ok(_) => {
                    warn!(%endpoint, "endpoint returned no usable player entries");
                }
                Err(e) => {
                    warn!(%endpoint, "endpoint failed: {e:#}");
                }
            }
        }

        warn!("all provider endpoints failed, falling back to built-in sample data");
        FetchOutcome {
            source: DataSource::Sample,
            players: sample::sample_players(),
        }
    }

    async fn try_endpoint(&self, endpoint: &str) -> anyhow::Result<Vec<RawPlayer>> {
        let response = self
            .http
            .get(endpoint)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;
        Ok(extract::extract_players(&body))
    }
}

/// Build the underlying reqwest client with browser-like default headers.
/// The public endpoints reject requests without a plausible User-Agent.
fn build_http_client() -> reqwest::Client {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
        ),
    );
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

    match reqwest::Client::builder().default_headers(headers).build() {
        Ok(client) => client,
        Err(e) => {
            warn!("failed to build configured HTTP client, using defaults: {e}");
            reqwest::Client::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
