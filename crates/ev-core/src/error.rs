//! Base error type.
//!
//! Sub-crates define their own error enums and convert `EvError` into them
//! via `From` impls where a core value type can fail to construct.

use thiserror::Error;

/// The top-level error type for `ev-core` and a common base for sub-crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `ev-*` crates.
pub type EvResult<T> = Result<T, EvError>;
