//! Presentation formatting
//!
//! Two fixed US-dollar renderings of a price:
//! - display: cents precision, `$450.25`
//! - speech: whole dollars plus the exchange name, `$450 on Bitstamp`
//!
//! No thousands separators. Midpoints round half-to-even.

use crate::exchange::Exchange;
use rust_decimal::{Decimal, RoundingStrategy};

const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointNearestEven;

/// Two-decimal currency string for on-screen display
pub fn display_string(price: Decimal) -> String {
    dollars(price, 2)
}

/// Whole-dollar sentence for audio playback
pub fn speech_string(price: Decimal, exchange: Exchange) -> String {
    format!("{} on {}", dollars(price, 0), exchange)
}

fn dollars(price: Decimal, dp: u32) -> String {
    let mut rounded = price.round_dp_with_strategy(dp, ROUNDING);
    rounded.rescale(dp);

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${}", rounded.abs())
    } else {
        format!("${}", rounded.abs())
    }
}
