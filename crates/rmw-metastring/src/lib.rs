// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type-descriptor compiler for rmw layers.
//!
//! Converts ROS 2 introspection metadata (either the `rosidl_typesupport_introspection_c`
//! or the `rosidl_typesupport_introspection_cpp` flavor) into the compact metastring
//! grammar consumed by a dynamic-type facility, so arbitrary message types can be
//! published and subscribed without generated code.
//!
//! ```
//! use rmw_metastring::{compile_metastring, MemberTypeKind, MessageDescriptor, MessageMember};
//!
//! let point = MessageDescriptor::new(
//!     "geometry_msgs__msg",
//!     "Point",
//!     vec![
//!         MessageMember::scalar("x", MemberTypeKind::Double),
//!         MessageMember::scalar("y", MemberTypeKind::Double),
//!     ],
//! );
//! assert_eq!(
//!     compile_metastring(&point),
//!     "v1{(type=geometry_msgs::msg::dds_::Point_,member=2)d(name=x_)d(name=y_)"
//! );
//! ```
//!
//! Compilation is a pure function of its input: no shared state, no caching, safe to
//! run concurrently on distinct descriptors.

mod classify;
mod compiler;
pub mod env_config;
mod error;
#[cfg(feature = "loaders")]
pub mod loader;
mod mangle;
mod model;
pub mod rosidl;
mod walker;

pub use classify::type_code;
pub use compiler::{
    compile_members_metastring, compile_metastring, compile_type_support_metastring,
    MetastringCompiler, METASTRING_VERSION,
};
pub use env_config::{CompilerOptions, EnvConfig, DEFAULT_UNBOUNDED_SEQUENCE_MAXIMUM};
pub use error::MetastringError;
#[cfg(feature = "loaders")]
pub use loader::{MemberKindSpec, MemberSpec, MessageSpec};
pub use mangle::mangle_type_name;
pub use model::{
    Container, MemberTypeKind, MessageDescriptor, MessageIntrospection, MessageMember,
    NestedMessage,
};
pub use rosidl::{rosidl_message_type_support_t, IntrospectionFlavor};
