// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! `rosidl_typesupport_introspection_c` layouts.

use super::{rosidl_message_type_support_t, IntrospectionFlavor, MemberLayout, MembersLayout};
use std::os::raw::{c_char, c_void};

type RosSizeFunction = Option<unsafe extern "C" fn(*const c_void) -> usize>;
type RosGetConstFunction = Option<unsafe extern "C" fn(*const c_void, usize) -> *const c_void>;
type RosGetFunction = Option<unsafe extern "C" fn(*mut c_void, usize) -> *mut c_void>;
type RosFetchFunction = Option<unsafe extern "C" fn(*const c_void, usize, *mut c_void)>;
type RosAssignFunction = Option<unsafe extern "C" fn(*mut c_void, usize, *const c_void)>;
type RosResizeFunction = Option<unsafe extern "C" fn(*mut c_void, usize) -> bool>;

/// Initialization policy used by the C runtime when constructing messages.
pub type MessageInitialization = i32;

#[repr(C)]
/// Mirrors `rosidl_typesupport_introspection_c__MessageMember`.
pub struct MessageMember {
    pub name_: *const c_char,
    pub type_id_: u8,
    pub string_upper_bound_: usize,
    pub members_: *const rosidl_message_type_support_t,
    pub is_array_: bool,
    pub array_size_: usize,
    pub is_upper_bound_: bool,
    pub offset_: u32,
    pub default_value_: *const c_void,
    pub size_function: RosSizeFunction,
    pub get_const_function: RosGetConstFunction,
    pub get_function: RosGetFunction,
    pub fetch_function: RosFetchFunction,
    pub assign_function: RosAssignFunction,
    pub resize_function: RosResizeFunction,
}

#[repr(C)]
/// Mirrors `rosidl_typesupport_introspection_c__MessageMembers`.
pub struct MessageMembers {
    pub message_namespace_: *const c_char,
    pub message_name_: *const c_char,
    pub member_count_: u32,
    pub size_of_: usize,
    pub members_: *const MessageMember,
    pub init_function: Option<unsafe extern "C" fn(*mut c_void, MessageInitialization)>,
    pub fini_function: Option<unsafe extern "C" fn(*mut c_void)>,
}

impl MembersLayout for MessageMembers {
    type Member = MessageMember;
    const FLAVOR: IntrospectionFlavor = IntrospectionFlavor::C;

    fn namespace_ptr(&self) -> *const c_char {
        self.message_namespace_
    }

    fn name_ptr(&self) -> *const c_char {
        self.message_name_
    }

    fn member_count(&self) -> u32 {
        self.member_count_
    }

    fn members_ptr(&self) -> *const MessageMember {
        self.members_
    }
}

impl MemberLayout for MessageMember {
    fn name_ptr(&self) -> *const c_char {
        self.name_
    }

    fn type_id(&self) -> u8 {
        self.type_id_
    }

    fn nested_ptr(&self) -> *const rosidl_message_type_support_t {
        self.members_
    }

    fn is_array(&self) -> bool {
        self.is_array_
    }

    fn array_size(&self) -> usize {
        self.array_size_
    }

    fn is_upper_bound(&self) -> bool {
        self.is_upper_bound_
    }
}
