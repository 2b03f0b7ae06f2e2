use crate::common::models::{Gender, PredictResponse};

#[derive(Debug, Clone)]
pub enum Message {
    // Form input
    GenderSelected(Gender),
    UsiaChanged(String),
    TinggiChanged(String),
    // One submit action, one round trip
    Submit,
    PredictionSucceeded(PredictResponse),
    PredictionFailed { error: String },
    // Dialog and status bar
    CloseDialog,
    ClearLog,
}
