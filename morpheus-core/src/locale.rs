//! Locale-keyed label tables
//!
//! The dashboard ships German and English. Labels are looked up once per
//! snapshot through [`LabelSet::for_locale`] instead of branching on the
//! locale wherever text is needed.

use serde::{Deserialize, Serialize};

/// Supported display locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    De,
    En,
}

impl Locale {
    /// BCP 47 tag
    pub const fn tag(&self) -> &'static str {
        match self {
            Locale::De => "de",
            Locale::En => "en",
        }
    }
}

/// Text available in every supported locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub de: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(de: impl Into<String>, en: impl Into<String>) -> Self {
        Self { de: de.into(), en: en.into() }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::De => &self.de,
            Locale::En => &self.en,
        }
    }
}

/// Fixed UI labels for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelSet {
    pub title: &'static str,
    pub status_compliant: &'static str,
    pub status_warning: &'static str,
    pub status_critical: &'static str,
    pub current_level: &'static str,
    pub peak_level: &'static str,
    pub average_24h: &'static str,
    pub utilization: &'static str,
    pub day_limit: &'static str,
    pub night_limit: &'static str,
    pub route: &'static str,
    pub route_unavailable: &'static str,
    pub simulated_data: &'static str,
}

static LABELS_DE: LabelSet = LabelSet {
    title: "Lärmmonitoring Drohnenflüge",
    status_compliant: "Konform",
    status_warning: "Warnung",
    status_critical: "Kritisch",
    current_level: "Aktueller Pegel",
    peak_level: "Spitzenpegel",
    average_24h: "24h-Mittel",
    utilization: "Auslastung",
    day_limit: "Grenzwert Tag",
    night_limit: "Grenzwert Nacht",
    route: "Route",
    route_unavailable: "Route nicht darstellbar",
    simulated_data: "Simulierte Daten",
};

static LABELS_EN: LabelSet = LabelSet {
    title: "Drone Flight Noise Monitoring",
    status_compliant: "Compliant",
    status_warning: "Warning",
    status_critical: "Critical",
    current_level: "Current level",
    peak_level: "Peak level",
    average_24h: "24h average",
    utilization: "Utilization",
    day_limit: "Day limit",
    night_limit: "Night limit",
    route: "Route",
    route_unavailable: "Route unavailable",
    simulated_data: "Simulated data",
};

impl LabelSet {
    pub fn for_locale(locale: Locale) -> &'static LabelSet {
        match locale {
            Locale::De => &LABELS_DE,
            Locale::En => &LABELS_EN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_text_by_locale() {
        let name = LocalizedText::new("Klinikum", "Hospital");
        assert_eq!(name.get(Locale::De), "Klinikum");
        assert_eq!(name.get(Locale::En), "Hospital");
    }

    #[test]
    fn label_tables_differ() {
        assert_eq!(LabelSet::for_locale(Locale::De).status_warning, "Warnung");
        assert_eq!(LabelSet::for_locale(Locale::En).status_warning, "Warning");
        assert_eq!(Locale::default(), Locale::De);
    }
}
