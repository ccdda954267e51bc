/// Fertilizer recommendation model
///
/// Maps 8 field measurements through a classifier to a fertilizer name.
/// Soil and crop types arrive as strings and are first translated through
/// the fixed code tables the model was trained with; unknown strings become
/// the `-1` sentinel and are fed to the classifier unchanged. Feature order
/// is fixed: temperature, humidity, moisture, soil code, crop code,
/// nitrogen, potassium, phosphorous.

use serde::Deserialize;
use std::path::Path;

use super::artifact::{read_json, ArtifactError, LinearClassifier};

/// Number of input features the fertilizer model consumes.
pub const FERTILIZER_FEATURE_COUNT: usize = 8;

/// Code for soil or crop strings the tables don't know.
pub const UNKNOWN_CODE: i64 = -1;

/// One fertilizer recommendation request.
#[derive(Debug, Clone)]
pub struct FertilizerInput {
    pub temperature: i64,
    pub humidity: i64,
    pub moisture: i64,
    pub soil: String,
    pub crop: String,
    pub nitrogen: i64,
    pub potassium: i64,
    pub phosphorous: i64,
}

impl FertilizerInput {
    /// Feature vector in training order, with soil and crop translated to
    /// their codes.
    pub fn to_vector(&self) -> [f64; FERTILIZER_FEATURE_COUNT] {
        [
            self.temperature as f64,
            self.humidity as f64,
            self.moisture as f64,
            soil_code(&self.soil) as f64,
            crop_code(&self.crop) as f64,
            self.nitrogen as f64,
            self.potassium as f64,
            self.phosphorous as f64,
        ]
    }
}

/// Soil type table the model was trained with. Unknown soils map to
/// [`UNKNOWN_CODE`].
pub fn soil_code(soil: &str) -> i64 {
    match soil {
        "Black" => 0,
        "Clayey" => 1,
        "Loamy" => 2,
        "Red" => 3,
        "Sandy" => 4,
        _ => UNKNOWN_CODE,
    }
}

/// Crop type table the model was trained with. Unknown crops map to
/// [`UNKNOWN_CODE`].
pub fn crop_code(crop: &str) -> i64 {
    match crop {
        "Barley" => 0,
        "Cotton" => 1,
        "Ground Nuts" => 2,
        "Maize" => 3,
        "Millets" => 4,
        "Oil Seeds" => 5,
        "Paddy" => 6,
        "Pulses" => 7,
        "Sugarcane" => 8,
        "Tobacco" => 9,
        "Wheat" => 10,
        "Rice" => 11,
        _ => UNKNOWN_CODE,
    }
}

/// On-disk shape of the fertilizer model artifact. `labels` is the label
/// encoder: class index into fertilizer name.
#[derive(Debug, Clone, Deserialize)]
struct FertilizerArtifact {
    classifier: LinearClassifier,
    labels: Vec<String>,
}

/// Loaded fertilizer recommendation model.
#[derive(Debug, Clone)]
pub struct FertilizerPredictor {
    classifier: LinearClassifier,
    labels: Vec<String>,
}

impl FertilizerPredictor {
    /// Loads and validates a fertilizer model artifact.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// classifier's dimensions don't line up with an 8-feature input and
    /// the label list.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let artifact: FertilizerArtifact = read_json(path.as_ref())?;

        artifact
            .classifier
            .validate(FERTILIZER_FEATURE_COUNT, "fertilizer")?;

        if artifact.labels.len() != artifact.classifier.n_classes() {
            return Err(ArtifactError::Malformed(format!(
                "fertilizer classifier has {} classes but {} labels",
                artifact.classifier.n_classes(),
                artifact.labels.len()
            )));
        }

        Ok(Self {
            classifier: artifact.classifier,
            labels: artifact.labels,
        })
    }

    /// Predicts the fertilizer name for one input.
    pub fn predict(&self, input: &FertilizerInput) -> &str {
        let class_index = self.classifier.predict(&input.to_vector());
        &self.labels[class_index]
    }

    /// Predicts and renders the recommendation message.
    pub fn recommend(&self, input: &FertilizerInput) -> String {
        format!("Predicted Fertilizer is {}", self.predict(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two-class model keyed entirely off the soil code: non-negative codes
    /// pick Urea, the unknown sentinel picks DAP.
    fn soil_keyed_predictor() -> FertilizerPredictor {
        FertilizerPredictor {
            classifier: LinearClassifier {
                weights: vec![
                    vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
                    vec![0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0],
                ],
                intercepts: vec![0.0, 0.0],
            },
            labels: vec!["Urea".to_string(), "DAP".to_string()],
        }
    }

    fn input(soil: &str, crop: &str) -> FertilizerInput {
        FertilizerInput {
            temperature: 26,
            humidity: 52,
            moisture: 38,
            soil: soil.to_string(),
            crop: crop.to_string(),
            nitrogen: 37,
            potassium: 0,
            phosphorous: 0,
        }
    }

    #[test]
    fn test_soil_code_table() {
        assert_eq!(soil_code("Black"), 0);
        assert_eq!(soil_code("Clayey"), 1);
        assert_eq!(soil_code("Loamy"), 2);
        assert_eq!(soil_code("Red"), 3);
        assert_eq!(soil_code("Sandy"), 4);
        assert_eq!(soil_code("Unknown"), UNKNOWN_CODE);
        assert_eq!(soil_code(""), UNKNOWN_CODE);
        // case sensitive, as trained
        assert_eq!(soil_code("sandy"), UNKNOWN_CODE);
    }

    #[test]
    fn test_crop_code_table() {
        assert_eq!(crop_code("Barley"), 0);
        assert_eq!(crop_code("Ground Nuts"), 2);
        assert_eq!(crop_code("Wheat"), 10);
        assert_eq!(crop_code("Rice"), 11);
        assert_eq!(crop_code("Quinoa"), UNKNOWN_CODE);
    }

    #[test]
    fn test_unknown_soil_feeds_sentinel_to_classifier() {
        let vector = input("Unknown", "Maize").to_vector();
        assert_eq!(vector[3], -1.0);
        assert_eq!(vector[4], 3.0);

        // The sentinel is not rejected: the classifier still produces a
        // recommendation, it just lands on the negative-soil class.
        let predictor = soil_keyed_predictor();
        assert_eq!(predictor.predict(&input("Unknown", "Maize")), "DAP");
    }

    #[test]
    fn test_recommend_message() {
        let predictor = soil_keyed_predictor();
        assert_eq!(
            predictor.recommend(&input("Sandy", "Maize")),
            "Predicted Fertilizer is Urea"
        );
    }

    #[test]
    fn test_feature_order() {
        let vector = input("Black", "Barley").to_vector();
        assert_eq!(vector, [26.0, 52.0, 38.0, 0.0, 0.0, 37.0, 0.0, 0.0]);
    }
}
