//! Shared numeric helpers

use core::fmt::Write;

/// Fits any finite `f64` printed with up to a few dozen decimals
const ROUND_BUFFER: usize = 384;

/// Round to `decimals` places, ties to even on the exact binary value
///
/// Float formatting rounds the exact decimal expansion, so `0.125` becomes
/// `0.12` while `2.675` (stored just below the tie) becomes `2.67`.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() || decimals < 0 {
        return value;
    }
    let mut buf: heapless::String<ROUND_BUFFER> = heapless::String::new();
    match write!(buf, "{:.*}", decimals as usize, value) {
        Ok(()) => buf.parse().unwrap_or(value),
        Err(_) => {
            let scale = libm::pow(10.0, decimals as f64);
            libm::round(value * scale) / scale
        }
    }
}

/// Logistic function 1 / (1 + e^-x)
pub(crate) fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + libm::exp(-x))
}
