//! Zone categories and their noise limits
//!
//! Each land-use category carries a day and a night limit in dB(A). Values
//! follow TA Lärm 6.1 where the category exists there; school, care facility,
//! recreation and hospital-area are dashboard categories mapped onto the
//! nearest TA Lärm row.
//!
//! The table is built once and never mutated. Building it rejects any limit
//! that is zero, negative, or not finite, so a classifier can never be handed
//! a meaningless denominator.

use serde::{Deserialize, Serialize};

use crate::{
    errors::{ValidationError, ValidationResult},
    locale::{Locale, LocalizedText},
    traits::Validatable,
};

/// Land-use classification determining applicable limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZoneCategory {
    Residential,
    Mixed,
    Commercial,
    Industrial,
    Hospital,
    School,
    CareFacility,
    Recreation,
    HospitalArea,
}

impl ZoneCategory {
    pub const ALL: [ZoneCategory; 9] = [
        ZoneCategory::Residential,
        ZoneCategory::Mixed,
        ZoneCategory::Commercial,
        ZoneCategory::Industrial,
        ZoneCategory::Hospital,
        ZoneCategory::School,
        ZoneCategory::CareFacility,
        ZoneCategory::Recreation,
        ZoneCategory::HospitalArea,
    ];

    /// Stable identifier, same as the serialized form
    pub const fn id(&self) -> &'static str {
        match self {
            ZoneCategory::Residential => "residential",
            ZoneCategory::Mixed => "mixed",
            ZoneCategory::Commercial => "commercial",
            ZoneCategory::Industrial => "industrial",
            ZoneCategory::Hospital => "hospital",
            ZoneCategory::School => "school",
            ZoneCategory::CareFacility => "care-facility",
            ZoneCategory::Recreation => "recreation",
            ZoneCategory::HospitalArea => "hospital-area",
        }
    }

    const fn index(&self) -> usize {
        *self as usize
    }

    /// Default limits (day, night) in dB(A)
    const fn default_limits_db(&self) -> (f64, f64) {
        match self {
            ZoneCategory::Residential => (55.0, 40.0),
            ZoneCategory::Mixed => (60.0, 45.0),
            ZoneCategory::Commercial => (65.0, 50.0),
            ZoneCategory::Industrial => (70.0, 70.0),
            ZoneCategory::Hospital => (45.0, 35.0),
            ZoneCategory::School => (55.0, 40.0),
            ZoneCategory::CareFacility => (45.0, 35.0),
            ZoneCategory::Recreation => (55.0, 40.0),
            ZoneCategory::HospitalArea => (50.0, 35.0),
        }
    }

    const fn default_names(&self) -> (&'static str, &'static str) {
        match self {
            ZoneCategory::Residential => ("Wohngebiet", "Residential"),
            ZoneCategory::Mixed => ("Mischgebiet", "Mixed use"),
            ZoneCategory::Commercial => ("Gewerbegebiet", "Commercial"),
            ZoneCategory::Industrial => ("Industriegebiet", "Industrial"),
            ZoneCategory::Hospital => ("Krankenhaus", "Hospital"),
            ZoneCategory::School => ("Schule", "School"),
            ZoneCategory::CareFacility => ("Pflegeeinrichtung", "Care facility"),
            ZoneCategory::Recreation => ("Erholungsgebiet", "Recreation"),
            ZoneCategory::HospitalArea => ("Krankenhausumfeld", "Hospital area"),
        }
    }
}

/// Day and night limits in dB(A), both strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayNightLimits {
    day_db: f64,
    night_db: f64,
}

impl DayNightLimits {
    /// Validate limits for `zone`
    pub fn new(zone: ZoneCategory, day_db: f64, night_db: f64) -> ValidationResult<Self> {
        check_limit(zone, "day", day_db)?;
        check_limit(zone, "night", night_db)?;
        Ok(Self { day_db, night_db })
    }

    pub fn day_db(&self) -> f64 {
        self.day_db
    }

    pub fn night_db(&self) -> f64 {
        self.night_db
    }
}

fn check_limit(zone: ZoneCategory, period: &'static str, limit: f64) -> ValidationResult<()> {
    if limit.is_valid() && limit > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidLimit { zone: zone.id(), period, limit })
    }
}

/// Immutable reference record for one zone category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneLimit {
    pub category: ZoneCategory,
    pub limits: DayNightLimits,
    pub name: LocalizedText,
}

impl ZoneLimit {
    pub fn name(&self, locale: Locale) -> &str {
        self.name.get(locale)
    }
}

/// Lookup table from zone category to its limits
#[derive(Debug, Clone)]
pub struct ZoneLimitTable {
    entries: [ZoneLimit; 9],
}

impl ZoneLimitTable {
    /// Table with the default limits
    pub fn standard() -> Self {
        Self {
            entries: ZoneCategory::ALL.map(|category| {
                let (day_db, night_db) = category.default_limits_db();
                let (de, en) = category.default_names();
                ZoneLimit {
                    category,
                    limits: DayNightLimits { day_db, night_db },
                    name: LocalizedText::new(de, en),
                }
            }),
        }
    }

    /// Standard table with some limits replaced
    ///
    /// Fails on the first override that is not strictly positive; the table
    /// is never built with an unusable zone.
    pub fn with_overrides<I>(overrides: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = (ZoneCategory, f64, f64)>,
    {
        let mut table = Self::standard();
        for (category, day_db, night_db) in overrides {
            let limits = DayNightLimits::new(category, day_db, night_db)?;
            table.entries[category.index()].limits = limits;
        }
        Ok(table)
    }

    pub fn get(&self, category: ZoneCategory) -> &ZoneLimit {
        &self.entries[category.index()]
    }

    pub fn limits(&self, category: ZoneCategory) -> DayNightLimits {
        self.get(category).limits
    }

    pub fn iter(&self) -> impl Iterator<Item = &ZoneLimit> {
        self.entries.iter()
    }
}

impl Default for ZoneLimitTable {
    fn default() -> Self {
        Self::standard()
    }
}
