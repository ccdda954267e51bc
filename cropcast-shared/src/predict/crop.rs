/// Crop recommendation model
///
/// Maps a 7-feature soil/climate vector through two fixed-order scaling
/// transforms (min-max, then standardizing) and a classifier to an integer
/// label, then resolves the label to a crop name. Feature order is fixed:
/// N, P, K, temperature, humidity, pH, rainfall.

use serde::Deserialize;
use std::path::Path;

use super::artifact::{read_json, AffineTransform, ArtifactError, LinearClassifier};

/// Number of input features the crop model consumes.
pub const CROP_FEATURE_COUNT: usize = 7;

/// Soil and climate measurements for one field.
#[derive(Debug, Clone, Copy)]
pub struct CropFeatures {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
}

impl CropFeatures {
    /// Feature vector in the order the model was trained with.
    pub fn to_vector(self) -> [f64; CROP_FEATURE_COUNT] {
        [
            self.nitrogen,
            self.phosphorus,
            self.potassium,
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
        ]
    }
}

/// On-disk shape of the crop model artifact.
#[derive(Debug, Clone, Deserialize)]
struct CropArtifact {
    min_max: AffineTransform,
    standard: AffineTransform,
    classifier: LinearClassifier,
    class_labels: Vec<i64>,
}

/// Loaded crop recommendation model.
#[derive(Debug, Clone)]
pub struct CropPredictor {
    min_max: AffineTransform,
    standard: AffineTransform,
    classifier: LinearClassifier,
    class_labels: Vec<i64>,
}

impl CropPredictor {
    /// Loads and validates a crop model artifact.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if any
    /// dimension is inconsistent with a 7-feature pipeline.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let artifact: CropArtifact = read_json(path.as_ref())?;

        artifact.min_max.validate(CROP_FEATURE_COUNT, "crop min-max")?;
        artifact
            .standard
            .validate(CROP_FEATURE_COUNT, "crop standard")?;
        artifact
            .classifier
            .validate(CROP_FEATURE_COUNT, "crop")?;

        if artifact.class_labels.len() != artifact.classifier.n_classes() {
            return Err(ArtifactError::Malformed(format!(
                "crop classifier has {} classes but {} labels",
                artifact.classifier.n_classes(),
                artifact.class_labels.len()
            )));
        }

        Ok(Self {
            min_max: artifact.min_max,
            standard: artifact.standard,
            classifier: artifact.classifier,
            class_labels: artifact.class_labels,
        })
    }

    /// Runs the full pipeline and returns the predicted integer label.
    pub fn predict(&self, features: &CropFeatures) -> i64 {
        let scaled = self.min_max.transform(&features.to_vector());
        let standardized = self.standard.transform(&scaled);
        let class_index = self.classifier.predict(&standardized);
        self.class_labels[class_index]
    }

    /// Predicts and renders the recommendation message.
    ///
    /// A label outside the known crop table yields the fixed
    /// could-not-determine message.
    pub fn recommend(&self, features: &CropFeatures) -> String {
        match crop_name(self.predict(features)) {
            Some(crop) => format!("{} is the best crop to be cultivated right there.", crop),
            None => {
                "Sorry, we could not determine the best crop to be cultivated with the provided data."
                    .to_string()
            }
        }
    }
}

/// Fixed label-to-crop table the model was trained against.
pub fn crop_name(label: i64) -> Option<&'static str> {
    let name = match label {
        1 => "Rice",
        2 => "Maize",
        3 => "Jute",
        4 => "Cotton",
        5 => "Coconut",
        6 => "Papaya",
        7 => "Orange",
        8 => "Apple",
        9 => "Muskmelon",
        10 => "Watermelon",
        11 => "Grapes",
        12 => "Mango",
        13 => "Banana",
        14 => "Pomegranate",
        15 => "Lentil",
        16 => "Blackgram",
        17 => "Mungbean",
        18 => "Mothbeans",
        19 => "Pigeonpeas",
        20 => "Kidneybeans",
        21 => "Chickpea",
        22 => "Coffee",
        _ => return None,
    };
    Some(name)
}
