//! Route validation and conversion arithmetic.
//!
//! All arithmetic runs on [`Decimal`] values; the caller's `f64` amount is
//! lifted out of binary floating point at the boundary and only the final,
//! rounded result is converted back.

use std::fmt::Display;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use crate::rate_provider::RateProvider;

/// Fractional digits kept in the final result.
const RESULT_SCALE: u32 = 8;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("amount must not be negative")]
    InvalidAmount,
    #[error("unsupported conversion")]
    UnsupportedRoute,
    /// A rate lookup failed. The provider's error is surfaced unchanged.
    #[error(transparent)]
    RateUnavailable(#[from] anyhow::Error),
}

/// The closed set of supported conversion paths.
///
/// Adding a route means adding a variant here, so the allow-list can only
/// grow through a reviewed change. Strings that are not an exact,
/// case-sensitive match for one of these routes are rejected uniformly,
/// whether or not they look like a plausible pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    UsdToEur,
    GbpToBtc,
    EurToEth,
    BtcToUsd,
    EthToGbp,
    UsdToBtcToGbp,
}

impl Route {
    /// Symbol sequence for this route, in hop order.
    pub fn symbols(&self) -> &'static [&'static str] {
        match self {
            Route::UsdToEur => &["USD", "EUR"],
            Route::GbpToBtc => &["GBP", "BTC"],
            Route::EurToEth => &["EUR", "ETH"],
            Route::BtcToUsd => &["BTC", "USD"],
            Route::EthToGbp => &["ETH", "GBP"],
            Route::UsdToBtcToGbp => &["USD", "BTC", "GBP"],
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbols().join("->"))
    }
}

impl FromStr for Route {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD->EUR" => Ok(Route::UsdToEur),
            "GBP->BTC" => Ok(Route::GbpToBtc),
            "EUR->ETH" => Ok(Route::EurToEth),
            "BTC->USD" => Ok(Route::BtcToUsd),
            "ETH->GBP" => Ok(Route::EthToGbp),
            "USD->BTC->GBP" => Ok(Route::UsdToBtcToGbp),
            _ => Err(ConvertError::UnsupportedRoute),
        }
    }
}

/// Converts `amount` along `route`, fetching each hop's rate from `rates`.
///
/// Validation happens before any rate lookup: a negative amount fails with
/// [`ConvertError::InvalidAmount`], a route outside the allow-list with
/// [`ConvertError::UnsupportedRoute`]. A failed lookup is propagated
/// unmodified as [`ConvertError::RateUnavailable`]; there is no retry and no
/// fallback rate.
///
/// The result is rounded to 8 fractional digits with half-up rounding. A
/// zero amount is valid and yields exactly `0.0`.
pub async fn convert(
    amount: f64,
    route: &str,
    rates: &dyn RateProvider,
) -> Result<f64, ConvertError> {
    if amount < 0.0 {
        return Err(ConvertError::InvalidAmount);
    }
    let route = Route::from_str(route)?;

    // Lift the amount into decimal via its shortest textual form. This keeps
    // the value the caller wrote rather than the f64 bit pattern's expansion.
    // NaN, infinities and values beyond Decimal's range fail here.
    let amount = Decimal::from_str(&amount.to_string()).map_err(|_| ConvertError::InvalidAmount)?;

    // Intermediate values stay at full decimal precision across hops; only
    // the final result is rounded. A product beyond Decimal's range is
    // rejected like an unrepresentable amount.
    let mut value = amount;
    for pair in route.symbols().windows(2) {
        let rate = rates.get_rate(pair[0], pair[1]).await?;
        value = value
            .checked_mul(rate)
            .ok_or(ConvertError::InvalidAmount)?;
    }

    // Decimal's span (96-bit mantissa, scale <= 28) is a strict subset of
    // f64's finite range, so this conversion is total; it can round a value
    // but never fail.
    Ok(value
        .round_dp_with_strategy(RESULT_SCALE, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0))
}
