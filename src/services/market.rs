use crate::types::*;
use anyhow::{Context, Result};
use chrono::Local;
use log::{debug, warn};
use reqwest::Client;
use std::time::Duration;

const RETRY_DELAY: Duration = Duration::from_millis(500);

#[derive(Clone)]
pub struct MarketService {
    client: Client,
    config: Config,
}

impl MarketService {
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Fetches quotes for every coin id in one batch request. Coins the
    /// provider leaves out of the response become rows without a quote;
    /// only a failure of the whole request is an error.
    pub async fn fetch_quotes(&self, coin_ids: &[String]) -> Result<QuoteBoard> {
        anyhow::ensure!(!coin_ids.is_empty(), "at least one coin id is required");

        let body = match self.request_prices(coin_ids).await {
            Ok(body) => body,
            Err(err) if is_transient(&err) => {
                warn!("transient network error, retrying once: {err:#}");
                tokio::time::sleep(RETRY_DELAY).await;
                self.request_prices(coin_ids).await?
            }
            Err(err) => return Err(err),
        };

        let prices = parse_price_response(&body)?;
        debug!("received {} of {} requested quotes", prices.len(), coin_ids.len());

        Ok(build_board(coin_ids, &prices))
    }

    async fn request_prices(&self, coin_ids: &[String]) -> Result<String> {
        let ids = coin_ids.join(",");
        let response = self
            .client
            .get(self.config.price_endpoint())
            .query(&[
                ("ids", ids.as_str()),
                ("vs_currencies", "usd"),
                ("include_24hr_change", "true"),
            ])
            .send()
            .await
            .context("Failed to send price request")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read price response body")?;

        if !status.is_success() {
            anyhow::bail!("price request failed with HTTP {status}");
        }

        Ok(body)
    }
}

/// Parses a `simple/price` body. An empty body counts as a total failure
/// even under a success status.
pub fn parse_price_response(body: &str) -> Result<SimplePriceResponse> {
    if body.trim().is_empty() {
        anyhow::bail!("price service returned an empty body");
    }
    serde_json::from_str(body).context("Failed to parse price response")
}

/// Maps the response onto the requested ids, preserving request order. An id
/// missing from the response, or present without a usd price, yields a row
/// with no quote. A missing 24h change defaults to 0.
pub fn build_board(coin_ids: &[String], prices: &SimplePriceResponse) -> QuoteBoard {
    let rows = coin_ids
        .iter()
        .map(|id| {
            let quote = prices.get(id).and_then(|entry| {
                entry.usd.map(|price| Quote {
                    symbol: id.clone(),
                    price,
                    change_24h: entry.usd_24h_change.unwrap_or(0.0),
                })
            });
            QuoteRow {
                symbol: id.clone(),
                quote,
            }
        })
        .collect();

    QuoteBoard {
        rows,
        fetched_at: Local::now(),
    }
}

fn is_transient(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<reqwest::Error>())
        .any(|e| e.is_timeout() || e.is_connect())
}
