//! Day/night limit check
//!
//! Compares an assessed level against the limit that applies to the zone in
//! the given period and reports the margin. Unlike the dashboard status,
//! which looks at utilization of the day limit only, this check honours the
//! night limit between 22:00 and 06:00.

use serde::{Deserialize, Serialize};

use crate::{
    constants::time::{DAY_START_HOUR, NIGHT_START_HOUR},
    errors::{ValidationError, ValidationResult},
    time::{hour_of_day, Timestamp},
    traits::Validatable,
    zones::{DayNightLimits, ZoneCategory},
};

/// Assessment period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    /// 06:00 - 22:00
    Day,
    /// 22:00 - 06:00
    Night,
}

impl TimePeriod {
    /// Period containing `hour` (0..24)
    pub fn from_hour(hour: u8) -> Self {
        if (DAY_START_HOUR..NIGHT_START_HOUR).contains(&(hour % 24)) {
            TimePeriod::Day
        } else {
            TimePeriod::Night
        }
    }

    /// Period containing a wall-clock timestamp (UTC)
    pub fn at(timestamp: Timestamp) -> Self {
        Self::from_hour(hour_of_day(timestamp))
    }

    pub fn limit_db(&self, limits: &DayNightLimits) -> f64 {
        match self {
            TimePeriod::Day => limits.day_db(),
            TimePeriod::Night => limits.night_db(),
        }
    }
}

/// Result of a limit check
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComplianceCheck {
    pub zone: ZoneCategory,
    pub period: TimePeriod,
    pub level_dba: f64,
    pub limit_dba: f64,
    /// `limit - level`; negative when exceeded
    pub margin_db: f64,
    pub compliant: bool,
}

impl ComplianceCheck {
    /// Check `level_dba` against the `period` limit of `zone`
    pub fn evaluate(
        level_dba: f64,
        zone: ZoneCategory,
        limits: &DayNightLimits,
        period: TimePeriod,
    ) -> ValidationResult<Self> {
        if !level_dba.is_valid() {
            return Err(ValidationError::InvalidValue);
        }
        let limit_dba = period.limit_db(limits);
        let margin_db = limit_dba - level_dba;
        Ok(Self {
            zone,
            period,
            level_dba,
            limit_dba,
            margin_db,
            compliant: margin_db >= 0.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::ZoneLimitTable;

    #[test]
    fn period_boundaries() {
        assert_eq!(TimePeriod::from_hour(5), TimePeriod::Night);
        assert_eq!(TimePeriod::from_hour(6), TimePeriod::Day);
        assert_eq!(TimePeriod::from_hour(21), TimePeriod::Day);
        assert_eq!(TimePeriod::from_hour(22), TimePeriod::Night);
        assert_eq!(TimePeriod::from_hour(0), TimePeriod::Night);
    }

    #[test]
    fn period_from_timestamp() {
        let noon = 12 * 3_600_000;
        let late = 23 * 3_600_000;
        assert_eq!(TimePeriod::at(noon), TimePeriod::Day);
        assert_eq!(TimePeriod::at(late), TimePeriod::Night);
    }

    #[test]
    fn margin_and_verdict() {
        let table = ZoneLimitTable::standard();
        let limits = table.limits(ZoneCategory::Residential);

        let day = ComplianceCheck::evaluate(52.0, ZoneCategory::Residential, &limits, TimePeriod::Day)
            .unwrap();
        assert!(day.compliant);
        assert_eq!(day.limit_dba, 55.0);
        assert_eq!(day.margin_db, 3.0);

        let night =
            ComplianceCheck::evaluate(52.0, ZoneCategory::Residential, &limits, TimePeriod::Night)
                .unwrap();
        assert!(!night.compliant);
        assert_eq!(night.margin_db, -12.0);
    }

    #[test]
    fn exactly_at_limit_is_compliant() {
        let limits = ZoneLimitTable::standard().limits(ZoneCategory::Hospital);
        let check =
            ComplianceCheck::evaluate(45.0, ZoneCategory::Hospital, &limits, TimePeriod::Day).unwrap();
        assert!(check.compliant);
        assert_eq!(check.margin_db, 0.0);
    }

    #[test]
    fn rejects_non_finite_level() {
        let limits = ZoneLimitTable::standard().limits(ZoneCategory::Mixed);
        assert!(ComplianceCheck::evaluate(f64::NAN, ZoneCategory::Mixed, &limits, TimePeriod::Day)
            .is_err());
    }
}
