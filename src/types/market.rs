// display model for the price table
use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    pub change_24h: f64,
}

/// One table row per requested coin. `quote` is `None` when the provider
/// left the coin out of the batch response; the renderer marks such rows
/// as unavailable instead of dropping them.
#[derive(Debug, Clone)]
pub struct QuoteRow {
    pub symbol: String,
    pub quote: Option<Quote>,
}

#[derive(Debug, Clone)]
pub struct QuoteBoard {
    pub rows: Vec<QuoteRow>,
    pub fetched_at: DateTime<Local>,
}
