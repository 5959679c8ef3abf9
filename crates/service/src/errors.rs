use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("seed error: {0}")]
    Seed(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}
