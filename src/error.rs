use thiserror::Error;

use crate::input::InputError;
use crate::model::thresholds::FixedCutoffError;

#[derive(Debug, Error)]
pub enum CfpError {
    #[error("{0}")]
    Config(String),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    FixedCutoff(#[from] FixedCutoffError),
    #[error("failed to write {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}
