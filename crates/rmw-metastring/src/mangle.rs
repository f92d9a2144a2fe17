// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type name mangling into the DDS naming convention.
//!
//! `pkg__msg` + `Foo` becomes `pkg::msg::dds_::Foo_`.

/// Segment separator used by rosidl C namespaces.
pub const ROS_NAMESPACE_SEPARATOR: &str = "__";
/// Path separator of the target grammar.
pub const DDS_NAMESPACE_SEPARATOR: &str = "::";
/// Inserted between namespace and type name.
pub const DDS_TYPE_PREFIX: &str = "dds_::";
/// Appended to the bare type name.
pub const DDS_TYPE_SUFFIX: &str = "_";

/// Mangle a rosidl namespace and bare type name.
pub fn mangle_type_name(namespace: &str, name: &str) -> String {
    let mut out = String::with_capacity(namespace.len() + name.len() + 16);
    push_mangled_type_name(&mut out, namespace, name);
    out
}

pub(crate) fn push_mangled_type_name(out: &mut String, namespace: &str, name: &str) {
    if !namespace.is_empty() {
        out.push_str(&namespace.replace(ROS_NAMESPACE_SEPARATOR, DDS_NAMESPACE_SEPARATOR));
        out.push_str(DDS_NAMESPACE_SEPARATOR);
    }
    out.push_str(DDS_TYPE_PREFIX);
    out.push_str(name);
    out.push_str(DDS_TYPE_SUFFIX);
}
