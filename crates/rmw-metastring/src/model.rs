// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Canonical message descriptor model.
//!
//! Both introspection flavors are normalized into [`MessageDescriptor`]
//! before the walker runs. All strings are borrowed from the source
//! metadata; only the member list itself is allocated.

use crate::error::MetastringError;
use crate::rosidl::{self, RawTypeSupport};
use std::fmt;

/// Field kind as declared by rosidl introspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberTypeKind {
    Float,
    Double,
    LongDouble,
    Char,
    WChar,
    Boolean,
    Octet,
    UInt8,
    Int8,
    UInt16,
    Int16,
    UInt32,
    Int32,
    UInt64,
    Int64,
    String,
    WString,
    Message,
    /// Type id outside the rosidl table.
    Unknown(u8),
}

impl MemberTypeKind {
    pub const fn from_type_id(type_id: u8) -> Self {
        match type_id {
            rosidl::ROS_TYPE_FLOAT => Self::Float,
            rosidl::ROS_TYPE_DOUBLE => Self::Double,
            rosidl::ROS_TYPE_LONG_DOUBLE => Self::LongDouble,
            rosidl::ROS_TYPE_CHAR => Self::Char,
            rosidl::ROS_TYPE_WCHAR => Self::WChar,
            rosidl::ROS_TYPE_BOOLEAN => Self::Boolean,
            rosidl::ROS_TYPE_OCTET => Self::Octet,
            rosidl::ROS_TYPE_UINT8 => Self::UInt8,
            rosidl::ROS_TYPE_INT8 => Self::Int8,
            rosidl::ROS_TYPE_UINT16 => Self::UInt16,
            rosidl::ROS_TYPE_INT16 => Self::Int16,
            rosidl::ROS_TYPE_UINT32 => Self::UInt32,
            rosidl::ROS_TYPE_INT32 => Self::Int32,
            rosidl::ROS_TYPE_UINT64 => Self::UInt64,
            rosidl::ROS_TYPE_INT64 => Self::Int64,
            rosidl::ROS_TYPE_STRING => Self::String,
            rosidl::ROS_TYPE_WSTRING => Self::WString,
            rosidl::ROS_TYPE_MESSAGE => Self::Message,
            other => Self::Unknown(other),
        }
    }

    pub const fn type_id(self) -> u8 {
        match self {
            Self::Float => rosidl::ROS_TYPE_FLOAT,
            Self::Double => rosidl::ROS_TYPE_DOUBLE,
            Self::LongDouble => rosidl::ROS_TYPE_LONG_DOUBLE,
            Self::Char => rosidl::ROS_TYPE_CHAR,
            Self::WChar => rosidl::ROS_TYPE_WCHAR,
            Self::Boolean => rosidl::ROS_TYPE_BOOLEAN,
            Self::Octet => rosidl::ROS_TYPE_OCTET,
            Self::UInt8 => rosidl::ROS_TYPE_UINT8,
            Self::Int8 => rosidl::ROS_TYPE_INT8,
            Self::UInt16 => rosidl::ROS_TYPE_UINT16,
            Self::Int16 => rosidl::ROS_TYPE_INT16,
            Self::UInt32 => rosidl::ROS_TYPE_UINT32,
            Self::Int32 => rosidl::ROS_TYPE_INT32,
            Self::UInt64 => rosidl::ROS_TYPE_UINT64,
            Self::Int64 => rosidl::ROS_TYPE_INT64,
            Self::String => rosidl::ROS_TYPE_STRING,
            Self::WString => rosidl::ROS_TYPE_WSTRING,
            Self::Message => rosidl::ROS_TYPE_MESSAGE,
            Self::Unknown(other) => other,
        }
    }
}

/// Container shape of a member, derived from the rosidl array flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Container {
    /// Plain (non-array) member.
    Single,
    /// Fixed-size array of `n` elements.
    Array(usize),
    /// Sequence with a declared maximum.
    BoundedSequence(usize),
    /// Sequence without a declared maximum.
    UnboundedSequence,
}

/// Anything that can describe itself as a canonical [`MessageDescriptor`].
///
/// Implementations must not copy strings: the returned descriptor borrows from `self`.
pub trait MessageIntrospection: fmt::Debug {
    fn describe(&self) -> Result<MessageDescriptor<'_>, MetastringError>;
}

/// Reference to the metadata of a nested message.
#[derive(Clone, Copy, Debug)]
pub enum NestedMessage<'a> {
    /// Safe Rust-side metadata (canonical descriptors, descriptor files).
    Borrowed(&'a dyn MessageIntrospection),
    /// Raw rosidl type support, normalized on demand.
    TypeSupport(RawTypeSupport<'a>),
}

impl<'a> NestedMessage<'a> {
    /// Produce the canonical descriptor for this nested message.
    pub fn resolve(&self) -> Result<MessageDescriptor<'a>, MetastringError> {
        match *self {
            Self::Borrowed(source) => source.describe(),
            Self::TypeSupport(raw) => raw.normalize(),
        }
    }
}

/// Description of a single struct member.
#[derive(Clone, Debug)]
pub struct MessageMember<'a> {
    pub name: &'a str,
    pub kind: MemberTypeKind,
    pub is_array: bool,
    /// Element count (array) or maximum (bounded sequence); 0 means unbounded.
    pub array_size: usize,
    pub is_upper_bound: bool,
    /// Required when `kind` is [`MemberTypeKind::Message`].
    pub nested: Option<NestedMessage<'a>>,
}

impl<'a> MessageMember<'a> {
    /// Scalar or string member.
    pub fn scalar(name: &'a str, kind: MemberTypeKind) -> Self {
        Self {
            name,
            kind,
            is_array: false,
            array_size: 0,
            is_upper_bound: false,
            nested: None,
        }
    }

    /// Nested message member.
    pub fn message(name: &'a str, nested: &'a dyn MessageIntrospection) -> Self {
        Self {
            nested: Some(NestedMessage::Borrowed(nested)),
            ..Self::scalar(name, MemberTypeKind::Message)
        }
    }

    /// Turn the member into a fixed-size array of `size` elements.
    #[must_use]
    pub fn array(self, size: usize) -> Self {
        Self {
            is_array: true,
            array_size: size,
            is_upper_bound: false,
            ..self
        }
    }

    /// Turn the member into a sequence; `bound == None` is unbounded.
    #[must_use]
    pub fn sequence(self, bound: Option<usize>) -> Self {
        Self {
            is_array: true,
            array_size: bound.unwrap_or(0),
            is_upper_bound: bound.is_some(),
            ..self
        }
    }

    pub fn container(&self) -> Container {
        if !self.is_array {
            return Container::Single;
        }
        match (self.array_size, self.is_upper_bound) {
            (0, _) => Container::UnboundedSequence,
            (size, false) => Container::Array(size),
            (size, true) => Container::BoundedSequence(size),
        }
    }
}

/// Canonical description of a message type.
#[derive(Clone, Debug)]
pub struct MessageDescriptor<'a> {
    /// Namespace segments joined by `__` (C flavor) or `::` (C++ flavor).
    pub namespace: &'a str,
    pub name: &'a str,
    pub members: Vec<MessageMember<'a>>,
}

impl<'a> MessageDescriptor<'a> {
    pub fn new(namespace: &'a str, name: &'a str, members: Vec<MessageMember<'a>>) -> Self {
        Self {
            namespace,
            name,
            members,
        }
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Compute the fully-qualified name (`pkg::msg::Name`).
    pub fn fqn(&self) -> String {
        if self.namespace.is_empty() {
            self.name.to_string()
        } else {
            format!("{}::{}", self.namespace.replace("__", "::"), self.name)
        }
    }

    /// Re-normalize an already-canonical descriptor.
    pub fn normalize(&self) -> MessageDescriptor<'a> {
        self.clone()
    }
}

impl MessageIntrospection for MessageDescriptor<'_> {
    fn describe(&self) -> Result<MessageDescriptor<'_>, MetastringError> {
        Ok(self.normalize())
    }
}
