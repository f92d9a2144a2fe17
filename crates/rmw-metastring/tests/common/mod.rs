// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Hand-built rosidl introspection fixtures for both flavors.
//!
//! Callers keep every returned struct in a local binding and never move it after
//! taking its address.

#![allow(dead_code)]

use rmw_metastring::rosidl::{c, cpp, rosidl_message_type_support_t, IntrospectionFlavor};
use std::ffi::CStr;
use std::os::raw::c_void;
use std::ptr;

pub const FLOAT: u8 = 1;
pub const DOUBLE: u8 = 2;
pub const BOOLEAN: u8 = 6;
pub const OCTET: u8 = 7;
pub const INT16: u8 = 11;
pub const UINT32: u8 = 12;
pub const INT32: u8 = 13;
pub const STRING: u8 = 16;
pub const WSTRING: u8 = 17;
pub const MESSAGE: u8 = 18;

/// Array flags shared by both member layouts.
#[derive(Clone, Copy)]
pub struct Shape {
    pub is_array: bool,
    pub array_size: usize,
    pub is_upper_bound: bool,
}

pub const SINGLE: Shape = Shape {
    is_array: false,
    array_size: 0,
    is_upper_bound: false,
};

pub const fn fixed(size: usize) -> Shape {
    Shape {
        is_array: true,
        array_size: size,
        is_upper_bound: false,
    }
}

pub const fn bounded(size: usize) -> Shape {
    Shape {
        is_array: true,
        array_size: size,
        is_upper_bound: true,
    }
}

pub const UNBOUNDED: Shape = Shape {
    is_array: true,
    array_size: 0,
    is_upper_bound: false,
};

pub fn c_member(
    name: &'static CStr,
    type_id: u8,
    shape: Shape,
    nested: *const rosidl_message_type_support_t,
) -> c::MessageMember {
    c::MessageMember {
        name_: name.as_ptr(),
        type_id_: type_id,
        string_upper_bound_: 0,
        members_: nested,
        is_array_: shape.is_array,
        array_size_: shape.array_size,
        is_upper_bound_: shape.is_upper_bound,
        offset_: 0,
        default_value_: ptr::null(),
        size_function: None,
        get_const_function: None,
        get_function: None,
        fetch_function: None,
        assign_function: None,
        resize_function: None,
    }
}

pub fn cpp_member(
    name: &'static CStr,
    type_id: u8,
    shape: Shape,
    nested: *const rosidl_message_type_support_t,
) -> cpp::MessageMember {
    cpp::MessageMember {
        name_: name.as_ptr(),
        type_id_: type_id,
        string_upper_bound_: 0,
        members_: nested,
        is_array_: shape.is_array,
        array_size_: shape.array_size,
        is_upper_bound_: shape.is_upper_bound,
        offset_: 0,
        default_value_: ptr::null(),
        size_function: None,
        get_const_function: None,
        get_function: None,
        fetch_function: None,
        assign_function: None,
        resize_function: None,
    }
}

pub fn c_members(
    namespace: &'static CStr,
    name: &'static CStr,
    members: &[c::MessageMember],
) -> c::MessageMembers {
    c::MessageMembers {
        message_namespace_: namespace.as_ptr(),
        message_name_: name.as_ptr(),
        member_count_: u32::try_from(members.len()).expect("member count fits in u32"),
        size_of_: 0,
        members_: if members.is_empty() {
            ptr::null()
        } else {
            members.as_ptr()
        },
        init_function: None,
        fini_function: None,
    }
}

pub fn cpp_members(
    namespace: &'static CStr,
    name: &'static CStr,
    members: &[cpp::MessageMember],
) -> cpp::MessageMembers {
    cpp::MessageMembers {
        message_namespace_: namespace.as_ptr(),
        message_name_: name.as_ptr(),
        member_count_: u32::try_from(members.len()).expect("member count fits in u32"),
        size_of_: 0,
        members_: if members.is_empty() {
            ptr::null()
        } else {
            members.as_ptr()
        },
        init_function: None,
        fini_function: None,
    }
}

pub fn type_support<T>(flavor: IntrospectionFlavor, members: &T) -> rosidl_message_type_support_t {
    type_support_with_identifier(flavor.identifier_cstr(), members)
}

pub fn type_support_with_identifier<T>(
    identifier: &'static CStr,
    members: &T,
) -> rosidl_message_type_support_t {
    rosidl_message_type_support_t {
        typesupport_identifier: identifier.as_ptr(),
        data: (members as *const T).cast::<c_void>(),
        func: None,
        get_type_hash_func: None,
        get_type_description_func: None,
        get_type_description_sources_func: None,
    }
}
