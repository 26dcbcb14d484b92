//! Crop classifier
//!
//! The trained model is exported as a JSON artifact: a standard scaler
//! (per-feature mean and scale), a multinomial linear model (one row of
//! coefficients and one intercept per crop) and the crop labels in class order.

use std::path::Path;

use serde::Deserialize;
use shared::FEATURE_COUNT;

use crate::error::{AppError, AppResult};

/// Anything that turns a soil feature vector into a probability per crop label
pub trait CropClassifier: Send + Sync {
    /// Crop labels, in the order of `predict_proba`'s output
    fn labels(&self) -> &[String];

    /// Probability of each label; sums to 1
    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> Vec<f64>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Linear softmax classifier loaded from a model artifact
#[derive(Debug, Clone, Deserialize)]
pub struct LinearCropModel {
    pub labels: Vec<String>,
    pub scaler: StandardScaler,
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

impl LinearCropModel {
    /// Load and check a model artifact from disk
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!("Cannot read model {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        let model: LinearCropModel = serde_json::from_str(raw)
            .map_err(|e| AppError::Configuration(format!("Invalid model artifact: {}", e)))?;
        model.check_shape()?;
        Ok(model)
    }

    fn check_shape(&self) -> AppResult<()> {
        let classes = self.labels.len();
        if classes == 0 {
            return Err(AppError::Configuration("Model has no labels".into()));
        }
        if self.scaler.mean.len() != FEATURE_COUNT || self.scaler.scale.len() != FEATURE_COUNT {
            return Err(AppError::Configuration(format!(
                "Scaler must have {} features",
                FEATURE_COUNT
            )));
        }
        if self.intercepts.len() != classes || self.coefficients.len() != classes {
            return Err(AppError::Configuration(
                "Coefficients and intercepts must have one row per label".into(),
            ));
        }
        if self.coefficients.iter().any(|row| row.len() != FEATURE_COUNT) {
            return Err(AppError::Configuration(format!(
                "Each coefficient row must have {} features",
                FEATURE_COUNT
            )));
        }
        Ok(())
    }

    fn standardize(&self, features: &[f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        let mut scaled = [0.0; FEATURE_COUNT];
        for (i, value) in features.iter().enumerate() {
            // A zero scale marks a constant feature; it is centred but not divided
            let scale = match self.scaler.scale[i] {
                s if s == 0.0 => 1.0,
                s => s,
            };
            scaled[i] = (value - self.scaler.mean[i]) / scale;
        }
        scaled
    }
}

impl CropClassifier for LinearCropModel {
    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn predict_proba(&self, features: &[f64; FEATURE_COUNT]) -> Vec<f64> {
        let x = self.standardize(features);
        let logits: Vec<f64> = self
            .coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, b)| row.iter().zip(&x).map(|(w, v)| w * v).sum::<f64>() + b)
            .collect();
        softmax(&logits)
    }
}

/// Numerically stable softmax
pub fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}
