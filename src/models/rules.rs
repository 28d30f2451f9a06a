use crate::utils::KtpError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Edit-distance tolerances and document constants used during extraction.
/// Every key is optional when loaded from JSON; missing ones keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionRules {
    /// Maximum distance between a line's label and a canonical schema label
    pub label_distance: usize,
    /// Maximum distance for anchor words such as "Gol", "Darah", "Agama", "Status"
    pub anchor_distance: usize,
    /// The longer "Perkawinan" anchor
    pub marriage_anchor_distance: usize,
    /// Header anchors "KOTA", "KABUPATEN" and "PROVINSI"
    pub city_anchor_distance: usize,
    pub regency_anchor_distance: usize,
    pub province_anchor_distance: usize,
    pub gender_distance: usize,
    /// Religion and marital status vocabularies
    pub category_distance: usize,
    pub occupation_distance: usize,
    pub nationality: String,
    pub valid_until: String,
}

impl Default for ExtractionRules {
    fn default() -> Self {
        ExtractionRules {
            label_distance: 4,
            anchor_distance: 2,
            marriage_anchor_distance: 3,
            city_anchor_distance: 1,
            regency_anchor_distance: 3,
            province_anchor_distance: 2,
            gender_distance: 3,
            category_distance: 3,
            occupation_distance: 2,
            nationality: "WNI".to_string(),
            valid_until: "SEUMUR HIDUP".to_string(),
        }
    }
}

impl ExtractionRules {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, KtpError> {
        let data = std::fs::read_to_string(path)?;
        let rules: ExtractionRules = serde_json::from_str(&data)?;
        Ok(rules)
    }
}
