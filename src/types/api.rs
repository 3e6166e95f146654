use serde::Deserialize;
use std::collections::HashMap;

/// Body of a CoinGecko `simple/price` response: a JSON object keyed by coin
/// id, one entry per coin the provider actually knows about. Requested ids
/// the provider cannot price are simply absent from the map.
pub type SimplePriceResponse = HashMap<String, PriceEntry>;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PriceEntry {
    pub usd: Option<f64>,
    pub usd_24h_change: Option<f64>,
}
