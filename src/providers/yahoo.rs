use anyhow::{Result, anyhow};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use tracing::debug;

use crate::rate_provider::RateProvider;

/// Fetches spot rates from the Yahoo Finance chart endpoint.
///
/// A pair `(USD, EUR)` maps to the `USDEUR=X` symbol. No caching and no
/// retries; every lookup is a fresh request and any failure is reported to
/// the caller as-is.
pub struct YahooRateProvider {
    base_url: String,
}

impl YahooRateProvider {
    pub fn new(base_url: &str) -> Self {
        YahooRateProvider {
            base_url: base_url.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct YahooRateResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Vec<ChartItem>,
}

#[derive(Debug, Deserialize)]
struct ChartItem {
    meta: ChartMeta,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    #[serde(alias = "regularMarketPrice")]
    regular_market_price: serde_json::Number,
}

#[async_trait]
impl RateProvider for YahooRateProvider {
    async fn get_rate(&self, from: &str, to: &str) -> Result<Decimal> {
        let pair = format!("{from}{to}=X");
        let endpoint = format!("/v8/finance/chart/{pair}");
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("Requesting rate from {}", url);

        let client = reqwest::Client::builder().user_agent("fxhop/0.1").build()?;

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for pair: {}", e, pair))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for pair: {}",
                response.status(),
                pair
            ));
        }

        let text = response.text().await?;

        let data: YahooRateResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response for {}: {}", pair, e))?;

        let item = data
            .chart
            .result
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("No rate data found for pair: {}", pair))?;

        // Parse the quoted number from its textual form so no binary
        // floating point representation leaks into the rate.
        let raw = item.meta.regular_market_price;
        let rate = Decimal::from_str(&raw.to_string())
            .map_err(|e| anyhow!("Unparseable rate {} for pair {}: {}", raw, pair, e))?;

        if rate <= Decimal::ZERO {
            return Err(anyhow!("Non-positive rate {} for pair: {}", rate, pair));
        }

        Ok(rate)
    }
}
