//! Rate lookup abstraction consumed by the converter.

use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Source of exchange rates for an ordered symbol pair.
///
/// Implementations must return a strictly positive rate expressed in units
/// of `to` per unit of `from`, preserving at least 20 significant decimal
/// digits, or fail if the pair is unavailable. Lookups are independent; the
/// converter makes no caching or batching assumptions.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn get_rate(&self, from: &str, to: &str) -> Result<Decimal>;
}
