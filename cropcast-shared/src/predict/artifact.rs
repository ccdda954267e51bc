/// Serialized model building blocks
///
/// A model artifact is a JSON file holding the parameters learned offline:
/// per-feature affine transforms for the scaling steps and a weight matrix
/// plus intercepts for the classifier. Loading validates every dimension so
/// that prediction can index without checks.

use serde::Deserialize;
use std::path::Path;

/// Error type for model artifact loading
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    /// Artifact file could not be read
    #[error("Failed to read model artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Artifact file is not valid JSON for the expected shape
    #[error("Failed to parse model artifact {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Artifact parsed but its dimensions are inconsistent
    #[error("Malformed model artifact: {0}")]
    Malformed(String),
}

/// Reads and parses a JSON artifact file.
pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Per-feature affine transform: `y[i] = x[i] * scale[i] + offset[i]`.
///
/// Both the min-max scaling step and the standardizing step reduce to this
/// form, so one type covers both.
#[derive(Debug, Clone, Deserialize)]
pub struct AffineTransform {
    pub scale: Vec<f64>,
    pub offset: Vec<f64>,
}

impl AffineTransform {
    /// Number of features this transform expects.
    pub fn dim(&self) -> usize {
        self.scale.len()
    }

    /// Applies the transform element-wise. `features.len()` must equal
    /// `dim()`; load-time validation guarantees it for artifact-driven
    /// calls.
    pub fn transform(&self, features: &[f64]) -> Vec<f64> {
        debug_assert_eq!(features.len(), self.dim());
        features
            .iter()
            .zip(self.scale.iter().zip(self.offset.iter()))
            .map(|(x, (s, o))| x * s + o)
            .collect()
    }

    pub(crate) fn validate(&self, dim: usize, name: &str) -> Result<(), ArtifactError> {
        if self.scale.len() != dim || self.offset.len() != dim {
            return Err(ArtifactError::Malformed(format!(
                "{} transform expects {} features, artifact has scale={} offset={}",
                name,
                dim,
                self.scale.len(),
                self.offset.len()
            )));
        }
        Ok(())
    }
}

/// Linear multi-class classifier: scores = W·x + b, predicted class is the
/// argmax row.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearClassifier {
    /// One weight row per class
    pub weights: Vec<Vec<f64>>,

    /// One intercept per class
    pub intercepts: Vec<f64>,
}

impl LinearClassifier {
    /// Number of classes.
    pub fn n_classes(&self) -> usize {
        self.weights.len()
    }

    /// Scores every class and returns the index of the highest score.
    ///
    /// Ties resolve to the lowest index.
    pub fn predict(&self, features: &[f64]) -> usize {
        let mut best = 0usize;
        let mut best_score = f64::NEG_INFINITY;

        for (idx, (row, intercept)) in self.weights.iter().zip(self.intercepts.iter()).enumerate() {
            let score: f64 = row.iter().zip(features.iter()).map(|(w, x)| w * x).sum::<f64>()
                + intercept;
            if score > best_score {
                best = idx;
                best_score = score;
            }
        }

        best
    }

    pub(crate) fn validate(&self, dim: usize, name: &str) -> Result<(), ArtifactError> {
        if self.weights.is_empty() {
            return Err(ArtifactError::Malformed(format!(
                "{} classifier has no classes",
                name
            )));
        }
        if self.intercepts.len() != self.weights.len() {
            return Err(ArtifactError::Malformed(format!(
                "{} classifier has {} weight rows but {} intercepts",
                name,
                self.weights.len(),
                self.intercepts.len()
            )));
        }
        if let Some(row) = self.weights.iter().find(|row| row.len() != dim) {
            return Err(ArtifactError::Malformed(format!(
                "{} classifier weight row has {} features, expected {}",
                name,
                row.len(),
                dim
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affine_transform() {
        let t = AffineTransform {
            scale: vec![2.0, 0.5],
            offset: vec![1.0, -1.0],
        };

        assert_eq!(t.dim(), 2);
        assert_eq!(t.transform(&[3.0, 4.0]), vec![7.0, 1.0]);
    }

    #[test]
    fn test_affine_validate_dimension_mismatch() {
        let t = AffineTransform {
            scale: vec![1.0, 1.0],
            offset: vec![0.0],
        };

        assert!(t.validate(2, "test").is_err());
    }

    #[test]
    fn test_classifier_argmax() {
        let c = LinearClassifier {
            weights: vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![-1.0, -1.0]],
            intercepts: vec![0.0, 0.0, 0.0],
        };

        assert_eq!(c.predict(&[5.0, 1.0]), 0);
        assert_eq!(c.predict(&[1.0, 5.0]), 1);
        assert_eq!(c.predict(&[-10.0, -10.0]), 2);
    }

    #[test]
    fn test_classifier_tie_resolves_to_lowest_index() {
        let c = LinearClassifier {
            weights: vec![vec![1.0], vec![1.0]],
            intercepts: vec![0.0, 0.0],
        };

        assert_eq!(c.predict(&[1.0]), 0);
    }

    #[test]
    fn test_classifier_validate() {
        let empty = LinearClassifier {
            weights: vec![],
            intercepts: vec![],
        };
        assert!(empty.validate(2, "test").is_err());

        let ragged = LinearClassifier {
            weights: vec![vec![1.0, 2.0], vec![1.0]],
            intercepts: vec![0.0, 0.0],
        };
        assert!(ragged.validate(2, "test").is_err());

        let intercept_mismatch = LinearClassifier {
            weights: vec![vec![1.0, 2.0]],
            intercepts: vec![0.0, 1.0],
        };
        assert!(intercept_mismatch.validate(2, "test").is_err());
    }
}
