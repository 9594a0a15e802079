//! Fixed-route currency and crypto conversion.
//!
//! The crate converts an amount of one asset into another along a small,
//! closed allow-list of routes, either directly (`USD->EUR`) or through one
//! intermediate hop (`USD->BTC->GBP`). Exchange rates come from a
//! [`RateProvider`] supplied by the caller, so rate lookup stays a pluggable
//! seam: production code wires in [`providers::yahoo::YahooRateProvider`],
//! tests substitute a deterministic stub.
//!
//! Arithmetic is decimal end to end. The input amount is lifted out of
//! binary floating point at the boundary, intermediate hop values keep full
//! precision, and only the final result is rounded (8 fractional digits,
//! half-up) before being returned as `f64`.

pub mod converter;
pub mod providers;
pub mod rate_provider;

pub use converter::{ConvertError, Route, convert};
pub use rate_provider::RateProvider;
