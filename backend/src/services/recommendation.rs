//! Crop recommendation service

use std::sync::Arc;

use serde::Serialize;
use shared::{build_recommendations, validate_soil_profile, CropRecommendation, SoilProfile, DEFAULT_TOP_K};

use crate::error::{AppError, AppResult};
use crate::external::CropClassifier;

/// Crop recommendation service
#[derive(Clone)]
pub struct RecommendationService {
    classifier: Option<Arc<dyn CropClassifier>>,
}

/// Ranked crops for a soil profile
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub profile: SoilProfile,
    pub recommendations: Vec<CropRecommendation>,
}

impl RecommendationService {
    /// Create a new RecommendationService; `None` when the model failed to load
    pub fn new(classifier: Option<Arc<dyn CropClassifier>>) -> Self {
        Self { classifier }
    }

    /// Top crops for a soil profile
    pub fn recommend(&self, profile: SoilProfile) -> AppResult<RecommendationResponse> {
        validate_soil_profile(&profile).map_err(|(field, message)| AppError::invalid(field, message))?;

        let classifier = self
            .classifier
            .as_ref()
            .ok_or(AppError::ClassifierUnavailable)?;

        let probabilities = classifier.predict_proba(&profile.features());
        let recommendations =
            build_recommendations(classifier.labels(), &probabilities, DEFAULT_TOP_K);

        tracing::debug!(
            top = recommendations.first().map(|r| r.crop.as_str()).unwrap_or(""),
            "Recommended crops"
        );

        Ok(RecommendationResponse {
            profile,
            recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::FEATURE_COUNT;

    /// Classifier with fixed output
    struct Fixed {
        labels: Vec<String>,
        probabilities: Vec<f64>,
    }

    impl CropClassifier for Fixed {
        fn labels(&self) -> &[String] {
            &self.labels
        }

        fn predict_proba(&self, _features: &[f64; FEATURE_COUNT]) -> Vec<f64> {
            self.probabilities.clone()
        }
    }

    fn service() -> RecommendationService {
        let classifier = Fixed {
            labels: ["Rice", "Maize", "Chickpea", "Coffee"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            probabilities: vec![0.1, 0.4, 0.2, 0.3],
        };
        RecommendationService::new(Some(Arc::new(classifier)))
    }

    #[test]
    fn test_top_three_in_order() {
        let response = service().recommend(SoilProfile::default()).unwrap();
        let crops: Vec<&str> = response
            .recommendations
            .iter()
            .map(|r| r.crop.as_str())
            .collect();
        assert_eq!(crops, vec!["Maize", "Coffee", "Chickpea"]);
        assert_eq!(response.recommendations[2].best_season, "N/A");
    }

    #[test]
    fn test_missing_model_is_unavailable() {
        let service = RecommendationService::new(None);
        assert!(matches!(
            service.recommend(SoilProfile::default()),
            Err(AppError::ClassifierUnavailable)
        ));
    }

    #[test]
    fn test_invalid_profile_is_rejected_first() {
        let profile = SoilProfile {
            humidity_percent: 140.0,
            ..SoilProfile::default()
        };
        assert!(matches!(
            RecommendationService::new(None).recommend(profile),
            Err(AppError::Validation { .. })
        ));
    }
}
