//! Species Parameter Table
//!
//! ## Overview
//!
//! Each farmed species has a fixed set of biological constants that drive
//! every part of the calculation:
//!
//! | Constant | Used by |
//! |---|---|
//! | optimal temperature, tolerated window | temperature curve |
//! | optimal and minimum dissolved oxygen | oxygen curve |
//! | tolerated pH range | pH curve |
//! | base feeding rate (% body weight/day) | baseline estimator |
//! | FCR, energy need, feed energy density | energy-balance estimator |
//!
//! ## Reference Profiles
//!
//! Five profiles ship with the crate: four species plus `default`, which is
//! what any unknown key resolves to. Lookup never fails.
//!
//! ```text
//! key             T_opt  T window   DO_opt DO_min  pH range   rate  FCR  E_req  E_feed
//! yellow_croaker  22     16 - 28    6.5    4.0     7.5 - 8.5  2.5   1.5  100    1500
//! sea_bass        25     18 - 32    6.0    3.5     7.0 - 8.5  3.0   1.3  120    1600
//! grouper         26     20 - 30    5.5    4.0     7.5 - 8.2  2.0   1.6   90    1400
//! tilapia         28     22 - 35    5.0    3.0     6.5 - 8.5  4.0   1.2  110    1450
//! default         24     18 - 30    6.0    4.0     7.0 - 8.5  2.5   1.5  100    1500
//! ```
//!
//! ## Extending the Table
//!
//! [`BuiltinSpecies`] is the read-only static table. [`SpeciesTable`] starts
//! from the same five profiles and accepts more (or replacements) at startup,
//! without touching any calculation code:
//!
//! ```
//! use aquafeed_core::{SpeciesCatalog, SpeciesProfile, SpeciesTable, ToleranceRange};
//!
//! let mut table = SpeciesTable::builtin();
//! table.insert("rainbow_trout", SpeciesProfile {
//!     display_name: "Rainbow trout".into(),
//!     optimal_temp: 15.0,
//!     temp_range: ToleranceRange::new(10.0, 20.0),
//!     optimal_do: 8.0,
//!     min_do: 5.5,
//!     ph_range: ToleranceRange::new(6.5, 8.0),
//!     base_feeding_rate_percent: 1.8,
//!     feed_conversion_ratio: 1.1,
//!     energy_requirement_per_kg_per_day: 95.0,
//!     feed_energy_content_per_kg: 1700.0,
//! })?;
//!
//! assert_eq!(table.lookup("rainbow_trout").optimal_temp, 15.0);
//! assert_eq!(table.lookup("unicorn-fish").display_name, "Generic fish");
//! # Ok::<(), aquafeed_core::FeedingError>(())
//! ```

use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::DEFAULT_SPECIES_KEY,
    errors::{FeedingError, FeedingResult},
    traits::{SpeciesCatalog, Validatable},
};

/// Inclusive `[min, max]` window of a reading
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ToleranceRange {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl ToleranceRange {
    /// Create a window from its bounds
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check whether `value` lies inside the window (bounds included)
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Width of the window
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Biological constants of one species
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SpeciesProfile {
    /// Human-readable species name, reported in the recommendation details
    pub display_name: Cow<'static, str>,

    /// Temperature with the highest feeding response (°C)
    pub optimal_temp: f64,

    /// Temperature window the species tolerates (°C)
    pub temp_range: ToleranceRange,

    /// Dissolved oxygen with full feeding response (mg/L)
    #[cfg_attr(feature = "serde", serde(rename = "optimalDO"))]
    pub optimal_do: f64,

    /// Dissolved oxygen below which feeding collapses (mg/L)
    #[cfg_attr(feature = "serde", serde(rename = "minDO"))]
    pub min_do: f64,

    /// pH range with full feeding response
    pub ph_range: ToleranceRange,

    /// Daily feed as a percentage of biomass under ideal conditions
    pub base_feeding_rate_percent: f64,

    /// Feed mass needed per unit of biomass gain
    pub feed_conversion_ratio: f64,

    /// Energy need per kg of fish per day (kJ)
    pub energy_requirement_per_kg_per_day: f64,

    /// Energy density of the feed (kJ/kg)
    pub feed_energy_content_per_kg: f64,
}

impl SpeciesProfile {
    /// Check the profile invariants
    ///
    /// The curves divide by the temperature bounds, the minimum oxygen and the
    /// energy terms, so all of them must be strictly positive, and the
    /// temperature window must bracket the optimum.
    pub fn validate(&self) -> FeedingResult<()> {
        let numbers = [
            self.optimal_temp,
            self.temp_range.min,
            self.temp_range.max,
            self.optimal_do,
            self.min_do,
            self.ph_range.min,
            self.ph_range.max,
            self.base_feeding_rate_percent,
            self.feed_conversion_ratio,
            self.energy_requirement_per_kg_per_day,
            self.feed_energy_content_per_kg,
        ];
        if !numbers.iter().all(|n| n.is_valid()) {
            return Err(FeedingError::InvalidProfile {
                reason: "all constants must be finite",
            });
        }

        if !(self.temp_range.min < self.optimal_temp && self.optimal_temp < self.temp_range.max) {
            return Err(FeedingError::InvalidProfile {
                reason: "optimal temperature must lie strictly inside the temperature range",
            });
        }

        if self.temp_range.min <= 0.0 {
            return Err(FeedingError::InvalidProfile {
                reason: "temperature bounds must be positive",
            });
        }

        if self.min_do <= 0.0 || self.optimal_do <= 0.0 {
            return Err(FeedingError::InvalidProfile {
                reason: "dissolved oxygen levels must be positive",
            });
        }

        if self.ph_range.min > self.ph_range.max {
            return Err(FeedingError::InvalidProfile {
                reason: "pH range is inverted",
            });
        }

        if self.base_feeding_rate_percent <= 0.0
            || self.feed_conversion_ratio <= 0.0
            || self.energy_requirement_per_kg_per_day <= 0.0
            || self.feed_energy_content_per_kg <= 0.0
        {
            return Err(FeedingError::InvalidProfile {
                reason: "rates and energy contents must be positive",
            });
        }

        Ok(())
    }
}

/// The reference profiles, keyed by species identifier
pub static BUILTIN_PROFILES: [(&str, SpeciesProfile); 5] = [
    (
        "yellow_croaker",
        SpeciesProfile {
            display_name: Cow::Borrowed("Large yellow croaker"),
            optimal_temp: 22.0,
            temp_range: ToleranceRange::new(16.0, 28.0),
            optimal_do: 6.5,
            min_do: 4.0,
            ph_range: ToleranceRange::new(7.5, 8.5),
            base_feeding_rate_percent: 2.5,
            feed_conversion_ratio: 1.5,
            energy_requirement_per_kg_per_day: 100.0,
            feed_energy_content_per_kg: 1500.0,
        },
    ),
    (
        "sea_bass",
        SpeciesProfile {
            display_name: Cow::Borrowed("Sea bass"),
            optimal_temp: 25.0,
            temp_range: ToleranceRange::new(18.0, 32.0),
            optimal_do: 6.0,
            min_do: 3.5,
            ph_range: ToleranceRange::new(7.0, 8.5),
            base_feeding_rate_percent: 3.0,
            feed_conversion_ratio: 1.3,
            energy_requirement_per_kg_per_day: 120.0,
            feed_energy_content_per_kg: 1600.0,
        },
    ),
    (
        "grouper",
        SpeciesProfile {
            display_name: Cow::Borrowed("Grouper"),
            optimal_temp: 26.0,
            temp_range: ToleranceRange::new(20.0, 30.0),
            optimal_do: 5.5,
            min_do: 4.0,
            ph_range: ToleranceRange::new(7.5, 8.2),
            base_feeding_rate_percent: 2.0,
            feed_conversion_ratio: 1.6,
            energy_requirement_per_kg_per_day: 90.0,
            feed_energy_content_per_kg: 1400.0,
        },
    ),
    (
        "tilapia",
        SpeciesProfile {
            display_name: Cow::Borrowed("Tilapia"),
            optimal_temp: 28.0,
            temp_range: ToleranceRange::new(22.0, 35.0),
            optimal_do: 5.0,
            min_do: 3.0,
            ph_range: ToleranceRange::new(6.5, 8.5),
            base_feeding_rate_percent: 4.0,
            feed_conversion_ratio: 1.2,
            energy_requirement_per_kg_per_day: 110.0,
            feed_energy_content_per_kg: 1450.0,
        },
    ),
    (
        DEFAULT_SPECIES_KEY,
        SpeciesProfile {
            display_name: Cow::Borrowed("Generic fish"),
            optimal_temp: 24.0,
            temp_range: ToleranceRange::new(18.0, 30.0),
            optimal_do: 6.0,
            min_do: 4.0,
            ph_range: ToleranceRange::new(7.0, 8.5),
            base_feeding_rate_percent: 2.5,
            feed_conversion_ratio: 1.5,
            energy_requirement_per_kg_per_day: 100.0,
            feed_energy_content_per_kg: 1500.0,
        },
    ),
];

// Position of the default entry in BUILTIN_PROFILES
const BUILTIN_DEFAULT_INDEX: usize = 4;

/// Read-only catalog over [`BUILTIN_PROFILES`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSpecies;

impl BuiltinSpecies {
    /// Keys of the reference profiles, `default` last
    pub fn keys() -> impl Iterator<Item = &'static str> {
        BUILTIN_PROFILES.iter().map(|(key, _)| *key)
    }
}

impl SpeciesCatalog for BuiltinSpecies {
    fn profile(&self, key: &str) -> Option<&SpeciesProfile> {
        BUILTIN_PROFILES
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, profile)| profile)
    }

    fn default_profile(&self) -> &SpeciesProfile {
        &BUILTIN_PROFILES[BUILTIN_DEFAULT_INDEX].1
    }
}

/// Owned, extensible species catalog
///
/// Built once at startup, then only read. The fallback profile is stored
/// apart from the named entries so a table can never lose it.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesTable {
    profiles: BTreeMap<String, SpeciesProfile>,
    default: SpeciesProfile,
}

impl SpeciesTable {
    /// Table holding only a fallback profile
    pub fn with_default(default: SpeciesProfile) -> FeedingResult<Self> {
        default.validate()?;
        Ok(Self {
            profiles: BTreeMap::new(),
            default,
        })
    }

    /// Table seeded with the reference profiles
    pub fn builtin() -> Self {
        let mut profiles = BTreeMap::new();
        for (key, profile) in BUILTIN_PROFILES.iter() {
            if *key != DEFAULT_SPECIES_KEY {
                profiles.insert(String::from(*key), profile.clone());
            }
        }

        Self {
            profiles,
            default: BuiltinSpecies.default_profile().clone(),
        }
    }

    /// Register or replace a profile
    ///
    /// Registering under `default` replaces the fallback profile. Returns the
    /// profile previously stored under the key.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        profile: SpeciesProfile,
    ) -> FeedingResult<Option<SpeciesProfile>> {
        let key = key.into();
        if let Err(err) = profile.validate() {
            log_warn!("Rejected species profile '{}': {}", key, err);
            return Err(err);
        }

        if key == DEFAULT_SPECIES_KEY {
            Ok(Some(core::mem::replace(&mut self.default, profile)))
        } else {
            Ok(self.profiles.insert(key, profile))
        }
    }

    /// Number of profiles, the fallback included
    pub fn len(&self) -> usize {
        self.profiles.len() + 1
    }

    /// A table always holds its fallback profile
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All keys, `default` first, then the named species in key order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        core::iter::once(DEFAULT_SPECIES_KEY).chain(self.profiles.keys().map(String::as_str))
    }

    /// All `(key, profile)` pairs, `default` first
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpeciesProfile)> {
        core::iter::once((DEFAULT_SPECIES_KEY, &self.default))
            .chain(self.profiles.iter().map(|(key, profile)| (key.as_str(), profile)))
    }
}

impl Default for SpeciesTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SpeciesCatalog for SpeciesTable {
    fn profile(&self, key: &str) -> Option<&SpeciesProfile> {
        if key == DEFAULT_SPECIES_KEY {
            Some(&self.default)
        } else {
            self.profiles.get(key)
        }
    }

    fn default_profile(&self) -> &SpeciesProfile {
        &self.default
    }
}

impl<T: SpeciesCatalog + ?Sized> SpeciesCatalog for &T {
    fn profile(&self, key: &str) -> Option<&SpeciesProfile> {
        (**self).profile(key)
    }

    fn default_profile(&self) -> &SpeciesProfile {
        (**self).default_profile()
    }
}
