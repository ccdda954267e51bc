/// Pre-trained classification models
///
/// The two recommenders are opaque serialized models: fixed-order scaling
/// transforms and a linear classifier, stored as JSON artifacts and loaded
/// once at startup. Prediction itself is infallible — every dimension is
/// validated at load time.
///
/// # Modules
///
/// - [`artifact`]: serialized model building blocks (affine transforms,
///   linear classifier) and artifact loading errors
/// - [`crop`]: crop recommendation from a 7-feature soil/climate vector
/// - [`fertilizer`]: fertilizer recommendation from 8 field measurements

pub mod artifact;
pub mod crop;
pub mod fertilizer;

pub use artifact::{AffineTransform, ArtifactError, LinearClassifier};
pub use crop::{CropFeatures, CropPredictor};
pub use fertilizer::{FertilizerInput, FertilizerPredictor};
