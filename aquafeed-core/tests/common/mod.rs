//! Shared fixtures for the integration tests
//!
//! Reference scenarios with their expected outputs, plus float assertions.

#![allow(dead_code)]

use aquafeed_core::{EnvironmentReading, FeedingRequest, FeedingTier};

/// A request with its expected outcome
pub struct Scenario {
    pub name: &'static str,
    pub request: FeedingRequest,
    pub tier: FeedingTier,
    pub amount: f64,
    pub env_factor: f64,
}

/// Favourable water for tilapia
pub fn favourable_tilapia() -> Scenario {
    Scenario {
        name: "favourable tilapia",
        request: FeedingRequest::new(10_000, 0.5)
            .species("tilapia")
            .environment(EnvironmentReading::new(28.0, 5.0, 7.5)),
        tier: FeedingTier::Normal,
        amount: 215.76,
        env_factor: 0.876,
    }
}

/// Tilapia in water with almost no oxygen
pub fn hypoxic_tilapia() -> Scenario {
    Scenario {
        name: "hypoxic tilapia",
        request: FeedingRequest::new(10_000, 0.5)
            .species("tilapia")
            .environment(EnvironmentReading::new(28.0, 1.0, 7.5)),
        tier: FeedingTier::Suspended,
        amount: 23.9,
        env_factor: 0.097,
    }
}

/// Unknown species at the default readings
pub fn unknown_species() -> Scenario {
    Scenario {
        name: "unknown species",
        request: FeedingRequest::new(10_000, 0.5).species("unicorn-fish"),
        tier: FeedingTier::Normal,
        amount: 144.35,
        env_factor: 0.881,
    }
}

/// Grouper in alkaline water
pub fn alkaline_grouper() -> Scenario {
    Scenario {
        name: "alkaline grouper",
        request: FeedingRequest::new(2000, 1.2)
            .species("grouper")
            .environment(EnvironmentReading::new(26.0, 5.5, 9.5)),
        tier: FeedingTier::Suspended,
        amount: 26.57,
        env_factor: 0.394,
    }
}

/// Sea bass at its optimum over a two-day interval
pub fn sea_bass_two_days() -> Scenario {
    Scenario {
        name: "sea bass two days",
        request: FeedingRequest::new(5000, 0.8)
            .species("sea_bass")
            .environment(EnvironmentReading::new(25.0, 6.0, 7.5))
            .interval_days(2.0),
        tier: FeedingTier::Normal,
        amount: 303.69,
        env_factor: 0.924,
    }
}

/// Acidic water for yellow croaker
pub fn acidic_yellow_croaker() -> Scenario {
    Scenario {
        name: "acidic yellow croaker",
        request: FeedingRequest::new(1000, 1.0)
            .species("yellow_croaker")
            .environment(EnvironmentReading::new(22.0, 6.5, 6.0)),
        tier: FeedingTier::Suspended,
        amount: 11.96,
        env_factor: 0.365,
    }
}

/// Every reference scenario
pub fn all_scenarios() -> [Scenario; 6] {
    [
        favourable_tilapia(),
        hypoxic_tilapia(),
        unknown_species(),
        alkaline_grouper(),
        sea_bass_two_days(),
        acidic_yellow_croaker(),
    ]
}

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{}: expected {} ± {}, got {}",
        what,
        expected,
        tolerance,
        actual
    );
}
