//! Crop recommendation models

use serde::{Deserialize, Serialize};

use super::crop::{find_crop, reference_url, NOT_AVAILABLE};

/// Number of features the crop classifier expects
pub const FEATURE_COUNT: usize = 10;

/// Number of crops returned by a recommendation
pub const DEFAULT_TOP_K: usize = 3;

/// Soil texture classes, in classifier encoding order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    #[default]
    Sandy,
    Clay,
    Loamy,
    Peaty,
    Silty,
    Chalky,
}

impl SoilType {
    /// Numeric code the classifier was trained with
    pub fn code(&self) -> u8 {
        match self {
            SoilType::Sandy => 0,
            SoilType::Clay => 1,
            SoilType::Loamy => 2,
            SoilType::Peaty => 3,
            SoilType::Silty => 4,
            SoilType::Chalky => 5,
        }
    }
}

/// Soil and environment readings submitted for a recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SoilProfile {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub ph: f64,
    pub rainfall_mm: f64,
    pub soil_moisture_percent: f64,
    pub soil_type: SoilType,
    pub sunlight_hours: f64,
}

impl Default for SoilProfile {
    fn default() -> Self {
        Self {
            nitrogen: 50.0,
            phosphorus: 30.0,
            potassium: 40.0,
            temperature_celsius: 25.0,
            humidity_percent: 70.0,
            ph: 6.5,
            rainfall_mm: 200.0,
            soil_moisture_percent: 50.0,
            soil_type: SoilType::Sandy,
            sunlight_hours: 6.0,
        }
    }
}

impl SoilProfile {
    /// Feature vector in the order the classifier was trained on:
    /// N, P, K, temperature, humidity, pH, rainfall, soil moisture, soil type, sunlight
    pub fn features(&self) -> [f64; FEATURE_COUNT] {
        [
            self.nitrogen,
            self.phosphorus,
            self.potassium,
            self.temperature_celsius,
            self.humidity_percent,
            self.ph,
            self.rainfall_mm,
            self.soil_moisture_percent,
            f64::from(self.soil_type.code()),
            self.sunlight_hours,
        ]
    }
}

/// A recommended crop with its catalog details
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropRecommendation {
    pub rank: usize,
    pub crop: String,
    pub probability: f64,
    pub reference_url: String,
    pub best_season: String,
    pub required_nutrients: String,
    pub expected_yield: String,
}

/// Indices of the `k` highest probabilities, highest first.
///
/// Equal probabilities keep label order, so the lower index ranks first.
pub fn top_k_indices(probabilities: &[f64], k: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..probabilities.len()).collect();
    indices.sort_by(|&a, &b| probabilities[b].total_cmp(&probabilities[a]).then(a.cmp(&b)));
    indices.truncate(k);
    indices
}

/// Turn a probability distribution over `labels` into ranked recommendations
pub fn build_recommendations(
    labels: &[String],
    probabilities: &[f64],
    k: usize,
) -> Vec<CropRecommendation> {
    top_k_indices(probabilities, k)
        .into_iter()
        .filter_map(|idx| labels.get(idx).map(|label| (label, probabilities[idx])))
        .enumerate()
        .map(|(i, (label, probability))| {
            let (best_season, required_nutrients, expected_yield) = match find_crop(label) {
                Some(p) => (p.best_season, p.required_nutrients, p.expected_yield),
                None => (
                    NOT_AVAILABLE.to_string(),
                    NOT_AVAILABLE.to_string(),
                    NOT_AVAILABLE.to_string(),
                ),
            };
            CropRecommendation {
                rank: i + 1,
                crop: label.clone(),
                probability,
                reference_url: reference_url(label),
                best_season,
                required_nutrients,
                expected_yield,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_order() {
        let profile = SoilProfile {
            soil_type: SoilType::Loamy,
            ..SoilProfile::default()
        };
        assert_eq!(
            profile.features(),
            [50.0, 30.0, 40.0, 25.0, 70.0, 6.5, 200.0, 50.0, 2.0, 6.0]
        );
    }

    #[test]
    fn test_top_k_orders_by_probability() {
        let probs = [0.05, 0.40, 0.10, 0.30, 0.15];
        assert_eq!(top_k_indices(&probs, 3), vec![1, 3, 4]);
    }

    #[test]
    fn test_top_k_ties_prefer_lower_index() {
        let probs = [0.2, 0.3, 0.3, 0.2];
        assert_eq!(top_k_indices(&probs, 3), vec![1, 2, 0]);
    }

    #[test]
    fn test_top_k_shorter_than_k() {
        assert_eq!(top_k_indices(&[0.7, 0.3], 3), vec![0, 1]);
    }

    #[test]
    fn test_build_recommendations_uses_catalog() {
        let labels = vec!["Rice".to_string(), "Wheat".to_string(), "Kidney Beans".to_string()];
        let recs = build_recommendations(&labels, &[0.2, 0.5, 0.3], 3);

        assert_eq!(recs[0].rank, 1);
        assert_eq!(recs[0].crop, "Wheat");
        assert_eq!(recs[0].best_season, "Winter");
        assert_eq!(recs[1].crop, "Kidney Beans");
        assert_eq!(recs[1].best_season, NOT_AVAILABLE);
        assert_eq!(recs[1].reference_url, "https://en.wikipedia.org/wiki/Kidney_Beans");
        assert_eq!(recs[2].crop, "Rice");
    }
}
