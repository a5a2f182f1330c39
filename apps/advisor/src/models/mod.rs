pub mod job_fit;
pub mod prediction;
pub mod upload;

pub use job_fit::{JobFitRequest, JobFitResponse};
pub use prediction::{PredictRequest, PredictionResponse, RankedRole};
pub use upload::UploadResponse;
