//! Plant-disease analysis results from the inference server.

use serde::{Deserialize, Serialize};

/// Latest analysis snapshot from the inference server.
///
/// Returned by `GET /latest_snapshot`. The record is read-only: the poller
/// replaces it wholesale and never writes back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    /// URL of the analyzed camera frame, if one was captured.
    #[serde(default)]
    pub image: Option<String>,
    /// The classifier's verdict and advisory text.
    #[serde(default)]
    pub prediction: Prediction,
}

/// Classifier output with free-text advisories.
///
/// Wire field names are the inference server's human-readable keys
/// (`"Disease Prediction"`, `"Treatment Plan"`, ...); the advisory fields
/// are optional because the server omits them for healthy plants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Disease label, e.g. `"Tomato - Healthy"` or `"Tomato - Early Blight"`.
    #[serde(rename = "Disease Prediction", default)]
    pub disease: String,
    /// When the frame was analyzed (server-formatted timestamp).
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Background on the detected condition.
    #[serde(rename = "About", default)]
    pub about: Option<String>,
    /// Likely causes.
    #[serde(rename = "Causes", default)]
    pub causes: Option<String>,
    /// Suggested treatment steps.
    #[serde(rename = "Treatment Plan", default)]
    pub treatment_plan: Option<String>,
}

impl AnalysisSnapshot {
    /// Whether the classifier considers the plant healthy.
    ///
    /// Matches on the label text; the server encodes the verdict in the
    /// label rather than a separate field.
    ///
    /// # Examples
    ///
    /// ```
    /// use farmsight_types::{AnalysisSnapshot, Prediction};
    ///
    /// let snapshot = AnalysisSnapshot {
    ///     image: None,
    ///     prediction: Prediction {
    ///         disease: "Tomato - Healthy".to_string(),
    ///         ..Default::default()
    ///     },
    /// };
    /// assert!(snapshot.is_healthy());
    /// ```
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.prediction.disease.contains("Healthy")
    }
}
