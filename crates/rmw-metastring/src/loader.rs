// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Descriptor files (YAML / JSON).
//!
//! Lets tools and tests describe message layouts without a rosidl build:
//!
//! ```yaml
//! namespace: geometry_msgs__msg
//! name: PoseArray
//! members:
//!   - name: poses
//!     type: message
//!     is_array: true
//!     message:
//!       namespace: geometry_msgs__msg
//!       name: Pose
//!       members:
//!         - { name: x, type: double }
//! ```

use crate::error::MetastringError;
use crate::model::{
    MemberTypeKind, MessageDescriptor, MessageIntrospection, MessageMember, NestedMessage,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Member kind names, following the rosidl type id table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKindSpec {
    #[serde(alias = "float32")]
    Float,
    #[serde(alias = "float64")]
    Double,
    LongDouble,
    Char,
    Wchar,
    #[serde(alias = "bool")]
    Boolean,
    #[serde(alias = "byte")]
    Octet,
    Uint8,
    Int8,
    Uint16,
    Int16,
    Uint32,
    Int32,
    Uint64,
    Int64,
    String,
    Wstring,
    Message,
}

impl From<MemberKindSpec> for MemberTypeKind {
    fn from(kind: MemberKindSpec) -> Self {
        match kind {
            MemberKindSpec::Float => Self::Float,
            MemberKindSpec::Double => Self::Double,
            MemberKindSpec::LongDouble => Self::LongDouble,
            MemberKindSpec::Char => Self::Char,
            MemberKindSpec::Wchar => Self::WChar,
            MemberKindSpec::Boolean => Self::Boolean,
            MemberKindSpec::Octet => Self::Octet,
            MemberKindSpec::Uint8 => Self::UInt8,
            MemberKindSpec::Int8 => Self::Int8,
            MemberKindSpec::Uint16 => Self::UInt16,
            MemberKindSpec::Int16 => Self::Int16,
            MemberKindSpec::Uint32 => Self::UInt32,
            MemberKindSpec::Int32 => Self::Int32,
            MemberKindSpec::Uint64 => Self::UInt64,
            MemberKindSpec::Int64 => Self::Int64,
            MemberKindSpec::String => Self::String,
            MemberKindSpec::Wstring => Self::WString,
            MemberKindSpec::Message => Self::Message,
        }
    }
}

/// Owned member description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MemberKindSpec,
    #[serde(default)]
    pub is_array: bool,
    #[serde(default)]
    pub array_size: usize,
    #[serde(default)]
    pub is_upper_bound: bool,
    /// Inline nested message; required for `type: message`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Box<MessageSpec>>,
}

/// Owned message description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSpec {
    #[serde(default)]
    pub namespace: String,
    pub name: String,
    #[serde(default)]
    pub members: Vec<MemberSpec>,
}

impl MessageSpec {
    pub fn from_yaml(yaml: &str) -> Result<Self, MetastringError> {
        serde_yaml::from_str(yaml).map_err(|e| MetastringError::Loader(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, MetastringError> {
        serde_json::from_str(json).map_err(|e| MetastringError::Loader(e.to_string()))
    }

    /// Load a descriptor file; `.json` is parsed as JSON, anything else as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MetastringError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| MetastringError::Loader(format!("{}: {e}", path.display())))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&text)
        } else {
            Self::from_yaml(&text)
        }
    }

    /// Borrow as a canonical descriptor.
    pub fn descriptor(&self) -> MessageDescriptor<'_> {
        let members = self
            .members
            .iter()
            .map(|member| MessageMember {
                name: &member.name,
                kind: member.kind.into(),
                is_array: member.is_array,
                array_size: member.array_size,
                is_upper_bound: member.is_upper_bound,
                nested: member
                    .message
                    .as_deref()
                    .map(|nested| NestedMessage::Borrowed(nested as &dyn MessageIntrospection)),
            })
            .collect();
        MessageDescriptor::new(&self.namespace, &self.name, members)
    }
}

impl MessageIntrospection for MessageSpec {
    fn describe(&self) -> Result<MessageDescriptor<'_>, MetastringError> {
        Ok(self.descriptor())
    }
}
