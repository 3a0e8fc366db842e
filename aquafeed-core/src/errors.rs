//! Error Types for Feeding Requests and Species Profiles
//!
//! The calculator itself never fails: every reading, however extreme, is
//! absorbed by the clamped response curves and shows up as a lower feeding
//! tier. Errors only exist at the two edges where bad data can enter:
//!
//! - **Request validation** (`FeedingRequest::validate`): the service layer
//!   rejects a non-positive fish count, body weight or interval, and
//!   non-finite numbers, before the request reaches the calculator.
//! - **Profile registration** (`SpeciesTable::insert`): a profile whose
//!   temperature window does not bracket its optimum, or whose rates are not
//!   strictly positive, would break the curves' denominators.
//!
//! An unknown species key is *not* an error. It resolves to the `default`
//! profile.
//!
//! Variants only carry `Copy` data so errors can be returned and queued
//! without allocation.
//!
//! ```
//! use aquafeed_core::{FeedingError, FeedingRequest};
//!
//! let request = FeedingRequest::new(0, 0.5);
//! match request.validate() {
//!     Err(FeedingError::NonPositive { field, .. }) => assert_eq!(field, "fishCount"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for request validation and profile registration
pub type FeedingResult<T> = Result<T, FeedingError>;

/// Errors raised before a calculation runs
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FeedingError {
    /// A magnitude that must be strictly positive is zero or negative
    #[error("{field} must be greater than 0, got {value}")]
    NonPositive {
        /// Request field name as it appears on the wire
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// An integer input does not fit the request's field type
    #[error("{field} must be at most {max}, got {value}")]
    TooLarge {
        /// Request field name as it appears on the wire
        field: &'static str,
        /// Offending value
        value: i64,
        /// Largest accepted value
        max: u64,
    },

    /// A numeric input is NaN or infinite
    #[error("{field} is not a finite number")]
    NotFinite {
        /// Request field name as it appears on the wire
        field: &'static str,
    },

    /// A species profile breaks the profile invariants
    #[error("Invalid species profile: {reason}")]
    InvalidProfile {
        /// Which invariant was broken
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_field() {
        let err = FeedingError::NonPositive { field: "averageWeight", value: -1.0 };
        assert_eq!(err.to_string(), "averageWeight must be greater than 0, got -1");

        let err = FeedingError::NotFinite { field: "ph" };
        assert_eq!(err.to_string(), "ph is not a finite number");

        let err = FeedingError::TooLarge { field: "fishCount", value: 5_000_000_000, max: 4_294_967_295 };
        assert_eq!(err.to_string(), "fishCount must be at most 4294967295, got 5000000000");
    }
}
