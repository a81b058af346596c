//! Error type for basis construction.
//!
//! Every failure is raised before any allocation of the basis matrix, except
//! [`BasisError::NumericDomain`], which reports an intermediate value that
//! left the finite range despite valid-looking inputs.
use thiserror::Error;

/// Errors returned by the basis builder.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BasisError {
    /// A parameter is outside the domain the construction is defined on.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// An intermediate quantity is NaN/Inf or the grid cannot be indexed.
    #[error("numeric domain error in `{quantity}`: {reason}")]
    NumericDomain { quantity: &'static str, reason: String },
}

impl BasisError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        BasisError::InvalidArgument { name, reason: reason.into() }
    }

    pub(crate) fn domain(quantity: &'static str, reason: impl Into<String>) -> Self {
        BasisError::NumericDomain { quantity, reason: reason.into() }
    }

    /// `true` for [`BasisError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, BasisError::InvalidArgument { .. })
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, BasisError>;
