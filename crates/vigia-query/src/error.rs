//! Query table error types.

use thiserror::Error;

/// Errors raised while compiling lookup tables into matchers.
///
/// Interpreting a query never fails; only building a matcher from
/// user-supplied tables can.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A keyword group has no usable keywords.
    #[error("keyword group '{category}' has no keywords")]
    EmptyKeywordGroup { category: String },

    /// An alias entry normalizes to the empty string.
    #[error("alias for comuna '{comuna}' is empty")]
    EmptyAlias { comuna: String },

    /// The compiled keyword pattern was rejected.
    #[error("invalid keyword pattern: {0}")]
    Regex(#[from] regex::Error),
}
