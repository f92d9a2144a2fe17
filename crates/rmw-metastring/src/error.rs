// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error type for metastring compilation.
//!
//! Callers at the rmw boundary only ever see an empty string; the variants
//! here exist so the cause can be logged and asserted on in tests.

use std::str;
use thiserror::Error;

/// Reasons a metastring could not be produced.
#[derive(Debug, Error)]
pub enum MetastringError {
    /// Type support or message members handle was null.
    #[error("null introspection handle")]
    NullHandle,
    /// Member array was null while the message declares members.
    #[error("message '{message}' declares {count} members but has no member table")]
    NullMembers {
        /// Message whose member table is missing.
        message: String,
        /// Declared member count.
        count: u32,
    },
    /// A member name pointer was null.
    #[error("member #{index} of '{message}' has no name")]
    NullMemberName {
        /// Message owning the member.
        message: String,
        /// Position in declaration order.
        index: usize,
    },
    /// A nested-message member carried no nested handle.
    #[error("nested message member '{member}' has no type support")]
    MissingNested {
        /// Offending member.
        member: String,
    },
    /// A nested type support chain leads back to a message already being walked.
    #[error("recursive type '{fqn}'")]
    RecursiveType {
        /// Fully-qualified name that closed the cycle.
        fqn: String,
    },
    /// The member's rosidl type id has no metastring code.
    #[error("member '{member}' has unsupported type id {type_id}")]
    UnsupportedType {
        /// Offending member.
        member: String,
        /// Raw rosidl type id.
        type_id: u8,
    },
    /// Type support identifier is not one of the two introspection flavors.
    #[error("unknown introspection flavor '{0}'")]
    UnknownFlavor(String),
    /// A C string in the metadata was not UTF-8.
    #[error("invalid UTF-8 in introspection metadata: {0}")]
    InvalidUtf8(#[from] str::Utf8Error),
    /// Descriptor file could not be read or parsed.
    #[cfg(feature = "loaders")]
    #[error("descriptor file: {0}")]
    Loader(String),
}
