// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/// Reasons an encoded genome could not be decoded or analyzed.
///
/// Every variant carries the byte offset at which the problem was detected, counted from the
/// start of the genome being parsed. For errors inside a nested genome found by the
/// [`analysis`](crate::analysis) queries, that is the start of the nested genome's bytes, not
/// of the outermost buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The buffer ends in the middle of a field or section.
    #[error("truncated genome: {field} at byte {offset} needs {needed} bytes but only {available} remain")]
    Truncated {
        field: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A tag without a following length has a value this reader does not know, so the data
    /// after it cannot be skipped.
    #[error("unknown {field} tag {tag} at byte {offset}")]
    UnknownTag {
        field: &'static str,
        tag: u8,
        offset: usize,
    },

    /// A field is outside its legal domain.
    #[error("invalid {field} at byte {offset}: {reason}")]
    InvalidValue {
        field: &'static str,
        offset: usize,
        reason: String,
    },

    /// An embedded genome declares more bytes than remain in its enclosing payload.
    #[error("embedded genome at byte {offset} declares {declared} bytes but only {remaining} remain")]
    NestedLengthOverflow {
        offset: usize,
        declared: usize,
        remaining: usize,
    },

    #[error("genome format version {found} is not supported (this build reads version {supported})")]
    UnsupportedVersion { found: u8, supported: u8 },
}

pub type DecodeResult<T> = Result<T, DecodeError>;
