//! Value-level checks the type system cannot express.

use super::id::EntityId;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// First invariant violation found in a document.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelValidationError {
    EmptyId { collection: &'static str },
    NonPositiveCount {
        collection: &'static str,
        id: EntityId,
        field: &'static str,
    },
    InvalidWeight {
        collection: &'static str,
        id: EntityId,
        value: f64,
    },
    NonPositiveStepTarget,
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId { collection } => write!(f, "{collection} entry has an empty id"),
            Self::NonPositiveCount {
                collection,
                id,
                field,
            } => write!(f, "{collection} `{id}`: {field} must be > 0"),
            Self::InvalidWeight {
                collection,
                id,
                value,
            } => write!(
                f,
                "{collection} `{id}`: weight ({value}) must be a positive finite number"
            ),
            Self::NonPositiveStepTarget => write!(f, "settings: stepTarget must be > 0"),
        }
    }
}

impl Error for ModelValidationError {}

pub(crate) fn ensure_id(collection: &'static str, id: &str) -> Result<(), ModelValidationError> {
    if id.trim().is_empty() {
        return Err(ModelValidationError::EmptyId { collection });
    }
    Ok(())
}

pub(crate) fn ensure_positive(
    collection: &'static str,
    id: &str,
    field: &'static str,
    value: u32,
) -> Result<(), ModelValidationError> {
    if value == 0 {
        return Err(ModelValidationError::NonPositiveCount {
            collection,
            id: id.to_string(),
            field,
        });
    }
    Ok(())
}

pub(crate) fn ensure_weight(
    collection: &'static str,
    id: &str,
    value: f64,
) -> Result<(), ModelValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ModelValidationError::InvalidWeight {
            collection,
            id: id.to_string(),
            value,
        });
    }
    Ok(())
}
