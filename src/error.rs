//! Domain errors raised at the body-creation boundary.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error("radius must be a positive number, got {0}")]
    InvalidRadius(f64),
    #[error("mass must be a positive number, got {0}")]
    InvalidMass(f64),
    #[error("not a number: {0:?}")]
    InvalidNumber(String),
    #[error("no sphere placement is in progress")]
    NoPendingPlacement,
    #[error("non-finite {0}")]
    NonFinite(&'static str),
}

pub type SimResult<T> = Result<T, SimError>;
