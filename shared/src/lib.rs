//! Types and rules shared by the LoRaWAN analysis front end: request and
//! response models for the analysis backend, form validation, and the state
//! of each workflow stage. Nothing in here touches the browser.

pub mod config;
pub mod error;
pub mod forms;
pub mod prediction;
pub mod requests;
pub mod results;
pub mod selection;
pub mod training;
pub mod vocab;
pub mod workflow;

pub use config::{ApiConfig, Endpoint};
pub use error::{ApiError, SelectionError, UploadError, ValidationError};
pub use prediction::{Candidate, PredictionOutcome, PredictionResult};
pub use results::{AnalysisResult, ImageRef, StatRow, ViewState};
pub use selection::{Selection, SelectionHandle};
pub use training::{TrainEvent, TrainingSession, TrainingStatus};
