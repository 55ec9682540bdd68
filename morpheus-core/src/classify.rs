//! Threshold classifier
//!
//! Maps a level and a zone's day limit to a compliance status:
//!
//! ```text
//! utilization = level / day_limit
//!
//!   u <  0.9          compliant
//!   0.9 <= u < 1.0    warning
//!   u >= 1.0          critical
//! ```
//!
//! Both boundaries are inclusive on the upper status. The function is pure:
//! no memory of earlier calls, no hysteresis, so a point may flip between
//! statuses on consecutive updates.

use serde::{Deserialize, Serialize};

use crate::{
    constants::acoustics::{CRITICAL_UTILIZATION, WARNING_UTILIZATION},
    errors::{ValidationError, ValidationResult},
    locale::{LabelSet, Locale},
    traits::Validatable,
};

/// Compliance status of a measurement point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    Compliant,
    Warning,
    Critical,
}

impl ComplianceStatus {
    pub const fn name(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "compliant",
            ComplianceStatus::Warning => "warning",
            ComplianceStatus::Critical => "critical",
        }
    }

    /// Localized label for the status
    pub fn label(&self, locale: Locale) -> &'static str {
        let labels = LabelSet::for_locale(locale);
        match self {
            ComplianceStatus::Compliant => labels.status_compliant,
            ComplianceStatus::Warning => labels.status_warning,
            ComplianceStatus::Critical => labels.status_critical,
        }
    }
}

/// Status together with the utilization it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub status: ComplianceStatus,
    pub utilization: f64,
}

impl Classification {
    /// Utilization in percent, as shown in the dashboard table
    pub fn utilization_pct(&self) -> f64 {
        self.utilization * 100.0
    }
}

/// Classifier with configurable utilization thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdClassifier {
    warning_at: f64,
    critical_at: f64,
}

impl Default for ThresholdClassifier {
    fn default() -> Self {
        Self {
            warning_at: WARNING_UTILIZATION,
            critical_at: CRITICAL_UTILIZATION,
        }
    }
}

impl ThresholdClassifier {
    /// Create a classifier with custom thresholds
    pub fn new_with_thresholds(warning_at: f64, critical_at: f64) -> Self {
        let (warning_at, critical_at) = if warning_at > critical_at {
            (critical_at, warning_at)
        } else {
            (warning_at, critical_at)
        };
        Self { warning_at, critical_at }
    }

    /// Classify `level_db` against `day_limit_db`
    ///
    /// A limit of zero or below is a configuration error, never a status.
    pub fn classify(&self, level_db: f64, day_limit_db: f64) -> ValidationResult<Classification> {
        let utilization = utilization(level_db, day_limit_db)?;
        let status = if utilization >= self.critical_at {
            ComplianceStatus::Critical
        } else if utilization >= self.warning_at {
            ComplianceStatus::Warning
        } else {
            ComplianceStatus::Compliant
        };
        Ok(Classification { status, utilization })
    }
}

/// Ratio of `level_db` to `day_limit_db`
pub fn utilization(level_db: f64, day_limit_db: f64) -> ValidationResult<f64> {
    if !level_db.is_valid() {
        return Err(ValidationError::InvalidValue);
    }
    if !day_limit_db.is_valid() || day_limit_db <= 0.0 {
        return Err(ValidationError::InvalidLimit {
            zone: "unspecified",
            period: "day",
            limit: day_limit_db,
        });
    }
    Ok(level_db / day_limit_db)
}

/// Classify with the default thresholds
pub fn classify(level_db: f64, day_limit_db: f64) -> ValidationResult<ComplianceStatus> {
    ThresholdClassifier::default()
        .classify(level_db, day_limit_db)
        .map(|c| c.status)
}
