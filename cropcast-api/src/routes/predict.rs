/// Crop and fertilizer recommendation endpoints
///
/// # Endpoints
///
/// - `POST /predict-crop` - recommend a crop for soil/climate measurements
/// - `POST /predict-fertilizer` - recommend a fertilizer for a field
///
/// Both wrap models loaded once at startup; prediction itself cannot fail,
/// so the handlers always answer `200 {result}`. Field names mirror what
/// the mobile client sends, including the capitalized crop keys.

use crate::app::AppState;
use axum::{extract::State, Json};
use cropcast_shared::predict::{CropFeatures, FertilizerInput};
use serde::{Deserialize, Serialize};

/// Crop prediction request
#[derive(Debug, Deserialize)]
pub struct CropPredictRequest {
    #[serde(rename = "Nitrogen")]
    pub nitrogen: f64,

    #[serde(rename = "Phosphorus")]
    pub phosphorus: f64,

    #[serde(rename = "Potassium")]
    pub potassium: f64,

    #[serde(rename = "Temperature")]
    pub temperature: f64,

    #[serde(rename = "Humidity")]
    pub humidity: f64,

    #[serde(rename = "pH")]
    pub ph: f64,

    #[serde(rename = "Rainfall")]
    pub rainfall: f64,
}

/// Fertilizer prediction request
#[derive(Debug, Deserialize)]
pub struct FertilizerPredictRequest {
    pub temp: i64,
    pub humid: i64,
    pub mois: i64,

    /// Soil type name, e.g. "Loamy"; unknown names are not rejected
    pub soil: String,

    /// Crop type name, e.g. "Maize"; unknown names are not rejected
    pub crop: String,

    pub nitro: i64,
    pub pota: i64,
    pub phos: i64,
}

/// Prediction response
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Human-readable recommendation
    pub result: String,
}

/// Crop recommendation handler
pub async fn predict_crop(
    State(state): State<AppState>,
    Json(req): Json<CropPredictRequest>,
) -> Json<PredictResponse> {
    let features = CropFeatures {
        nitrogen: req.nitrogen,
        phosphorus: req.phosphorus,
        potassium: req.potassium,
        temperature: req.temperature,
        humidity: req.humidity,
        ph: req.ph,
        rainfall: req.rainfall,
    };

    let result = state.crop.recommend(&features);
    tracing::debug!(%result, "Crop prediction served");

    Json(PredictResponse { result })
}

/// Fertilizer recommendation handler
pub async fn predict_fertilizer(
    State(state): State<AppState>,
    Json(req): Json<FertilizerPredictRequest>,
) -> Json<PredictResponse> {
    let input = FertilizerInput {
        temperature: req.temp,
        humidity: req.humid,
        moisture: req.mois,
        soil: req.soil,
        crop: req.crop,
        nitrogen: req.nitro,
        potassium: req.pota,
        phosphorous: req.phos,
    };

    let result = state.fertilizer.recommend(&input);
    tracing::debug!(%result, "Fertilizer prediction served");

    Json(PredictResponse { result })
}
