pub mod canonical;
pub mod error;

pub use canonical::{
    models::CanonicalFormat,
    transformer::{CanonicalTransformer, ImportSummary},
    validator::{CanonicalValidator, ValidationReport},
};
pub use error::{ImporterError, Result};
