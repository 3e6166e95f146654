// config loaded from the environment with fallback defaults
use crate::types::Config;
use anyhow::Result;
use std::env;

const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";
const DEFAULT_COINS: &str = "bitcoin,ethereum,dogecoin,cardano,solana";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            api_url: env::var("COINGECKO_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            request_timeout_secs: env::var("COINDASH_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            default_coins: parse_coin_list(
                &env::var("COINDASH_COINS").unwrap_or_else(|_| DEFAULT_COINS.to_string()),
            ),
        })
    }

    pub fn price_endpoint(&self) -> String {
        format!("{}/simple/price", self.api_url)
    }
}

/// Splits a comma-separated coin list, trimming whitespace and lowercasing
/// each id. Empty segments are dropped.
pub fn parse_coin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
