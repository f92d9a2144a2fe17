// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! ROS 2 introspection bindings for both type-support flavors.
//!
//! `rosidl_typesupport_introspection_c` and `rosidl_typesupport_introspection_cpp`
//! describe the same structural information with slightly different struct
//! layouts. Each flavor implements [`MembersLayout`]/[`MemberLayout`]; a single
//! generic normalizer turns either into the canonical
//! [`MessageDescriptor`](crate::model::MessageDescriptor).

pub mod c;
pub mod cpp;

use crate::error::MetastringError;
use crate::model::{MemberTypeKind, MessageDescriptor, MessageMember, NestedMessage};
use std::ffi::CStr;
use std::fmt;
use std::marker::PhantomData;
use std::os::raw::{c_char, c_void};
use std::ptr::NonNull;

pub const ROS_TYPE_FLOAT: u8 = 1;
pub const ROS_TYPE_DOUBLE: u8 = 2;
pub const ROS_TYPE_LONG_DOUBLE: u8 = 3;
pub const ROS_TYPE_CHAR: u8 = 4;
pub const ROS_TYPE_WCHAR: u8 = 5;
pub const ROS_TYPE_BOOLEAN: u8 = 6;
pub const ROS_TYPE_OCTET: u8 = 7;
pub const ROS_TYPE_UINT8: u8 = 8;
pub const ROS_TYPE_INT8: u8 = 9;
pub const ROS_TYPE_UINT16: u8 = 10;
pub const ROS_TYPE_INT16: u8 = 11;
pub const ROS_TYPE_UINT32: u8 = 12;
pub const ROS_TYPE_INT32: u8 = 13;
pub const ROS_TYPE_UINT64: u8 = 14;
pub const ROS_TYPE_INT64: u8 = 15;
pub const ROS_TYPE_STRING: u8 = 16;
pub const ROS_TYPE_WSTRING: u8 = 17;
pub const ROS_TYPE_MESSAGE: u8 = 18;

type RosMessageTypesupportHandleFunction = Option<
    unsafe extern "C" fn(
        *const rosidl_message_type_support_t,
        *const c_char,
    ) -> *const rosidl_message_type_support_t,
>;

type RosMessageTypesupportQueryFunction =
    Option<unsafe extern "C" fn(*const rosidl_message_type_support_t) -> *const c_void>;

#[repr(C)]
#[allow(non_camel_case_types)]
/// Type support entry point shared by both introspection flavors.
pub struct rosidl_message_type_support_t {
    pub typesupport_identifier: *const c_char,
    pub data: *const c_void,
    pub func: RosMessageTypesupportHandleFunction,
    pub get_type_hash_func: RosMessageTypesupportQueryFunction,
    pub get_type_description_func: RosMessageTypesupportQueryFunction,
    pub get_type_description_sources_func: RosMessageTypesupportQueryFunction,
}

/// The two recognized introspection flavors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntrospectionFlavor {
    /// `rosidl_typesupport_introspection_c`
    C,
    /// `rosidl_typesupport_introspection_cpp`
    Cpp,
}

impl IntrospectionFlavor {
    pub const C_IDENTIFIER: &'static CStr = c"rosidl_typesupport_introspection_c";
    pub const CPP_IDENTIFIER: &'static CStr = c"rosidl_typesupport_introspection_cpp";

    pub fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier.as_bytes() {
            id if id == Self::C_IDENTIFIER.to_bytes() => Some(Self::C),
            id if id == Self::CPP_IDENTIFIER.to_bytes() => Some(Self::Cpp),
            _ => None,
        }
    }

    pub const fn identifier_cstr(self) -> &'static CStr {
        match self {
            Self::C => Self::C_IDENTIFIER,
            Self::Cpp => Self::CPP_IDENTIFIER,
        }
    }

    pub fn identifier(self) -> &'static str {
        match self {
            Self::C => "rosidl_typesupport_introspection_c",
            Self::Cpp => "rosidl_typesupport_introspection_cpp",
        }
    }

    /// Normalize an untyped `MessageMembers` pointer of this flavor.
    ///
    /// # Safety
    ///
    /// `members` must be null or point to the flavor's `MessageMembers` struct. Every
    /// string, member table and nested type support reachable from it must stay valid
    /// and unmodified for `'a`.
    pub unsafe fn normalize<'a>(
        self,
        members: *const c_void,
    ) -> Result<MessageDescriptor<'a>, MetastringError> {
        match self {
            Self::C => normalize_layout(members.cast::<c::MessageMembers>()),
            Self::Cpp => normalize_layout(members.cast::<cpp::MessageMembers>()),
        }
    }
}

impl fmt::Display for IntrospectionFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Structural accessors common to both `MessageMembers` layouts.
pub trait MembersLayout {
    type Member: MemberLayout;
    const FLAVOR: IntrospectionFlavor;

    fn namespace_ptr(&self) -> *const c_char;
    fn name_ptr(&self) -> *const c_char;
    fn member_count(&self) -> u32;
    fn members_ptr(&self) -> *const Self::Member;
}

/// Structural accessors common to both `MessageMember` layouts.
pub trait MemberLayout {
    fn name_ptr(&self) -> *const c_char;
    fn type_id(&self) -> u8;
    fn nested_ptr(&self) -> *const rosidl_message_type_support_t;
    fn is_array(&self) -> bool;
    fn array_size(&self) -> usize;
    fn is_upper_bound(&self) -> bool;
}

/// Nested type support pointer captured during normalization.
///
/// Only [`normalize_layout`] creates these, under the safety contract of its caller,
/// which is what makes [`RawTypeSupport::normalize`] sound to expose safely.
#[derive(Clone, Copy)]
pub struct RawTypeSupport<'a> {
    handle: NonNull<rosidl_message_type_support_t>,
    flavor: IntrospectionFlavor,
    _marker: PhantomData<&'a rosidl_message_type_support_t>,
}

impl fmt::Debug for RawTypeSupport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawTypeSupport")
            .field("handle", &self.handle)
            .field("flavor", &self.flavor)
            .finish()
    }
}

impl<'a> RawTypeSupport<'a> {
    pub fn flavor(&self) -> IntrospectionFlavor {
        self.flavor
    }

    pub(crate) fn normalize(&self) -> Result<MessageDescriptor<'a>, MetastringError> {
        // SAFETY: the handle was taken from metadata whose validity for 'a was promised
        // by the caller of `normalize_layout`.
        unsafe {
            let handle = flavored_handle(self.handle.as_ptr(), self.flavor)?;
            self.flavor.normalize((*handle).data)
        }
    }
}

/// Return a handle carrying `flavor`'s identifier, asking the handle's lookup
/// function when the identifiers differ.
///
/// # Safety
///
/// `handle` must point to a valid type support.
pub(crate) unsafe fn flavored_handle(
    handle: *const rosidl_message_type_support_t,
    flavor: IntrospectionFlavor,
) -> Result<*const rosidl_message_type_support_t, MetastringError> {
    let identifier = c_str_or_empty((*handle).typesupport_identifier)?;
    if identifier == flavor.identifier() {
        return Ok(handle);
    }

    let resolved = match (*handle).func {
        Some(lookup) => lookup(handle, flavor.identifier_cstr().as_ptr()),
        None => std::ptr::null(),
    };
    if resolved.is_null() {
        return Err(MetastringError::UnknownFlavor(identifier.to_string()));
    }
    Ok(resolved)
}

/// Read a nullable C string, treating null as empty.
///
/// # Safety
///
/// `ptr` must be null or a valid NUL-terminated string living for `'a`.
pub(crate) unsafe fn c_str_or_empty<'a>(ptr: *const c_char) -> Result<&'a str, MetastringError> {
    if ptr.is_null() {
        return Ok("");
    }
    Ok(CStr::from_ptr(ptr).to_str()?)
}

/// Normalize one flavor's `MessageMembers` into the canonical descriptor.
///
/// # Safety
///
/// See [`IntrospectionFlavor::normalize`].
pub unsafe fn normalize_layout<'a, L: MembersLayout>(
    members: *const L,
) -> Result<MessageDescriptor<'a>, MetastringError> {
    let Some(layout) = members.as_ref() else {
        return Err(MetastringError::NullHandle);
    };

    let namespace = c_str_or_empty(layout.namespace_ptr())?;
    let name = c_str_or_empty(layout.name_ptr())?;
    let count = layout.member_count();
    let table = layout.members_ptr();

    let raw_members: &[L::Member] = if count == 0 {
        &[]
    } else if table.is_null() {
        return Err(MetastringError::NullMembers {
            message: name.to_string(),
            count,
        });
    } else {
        std::slice::from_raw_parts(table, count as usize)
    };

    let mut canonical = Vec::with_capacity(raw_members.len());
    for (index, member) in raw_members.iter().enumerate() {
        let name_ptr = member.name_ptr();
        if name_ptr.is_null() {
            return Err(MetastringError::NullMemberName {
                message: name.to_string(),
                index,
            });
        }
        let member_name: &'a str = CStr::from_ptr(name_ptr).to_str()?;
        let kind = MemberTypeKind::from_type_id(member.type_id());

        let nested = if kind == MemberTypeKind::Message {
            NonNull::new(member.nested_ptr().cast_mut()).map(|handle| {
                NestedMessage::TypeSupport(RawTypeSupport {
                    handle,
                    flavor: L::FLAVOR,
                    _marker: PhantomData,
                })
            })
        } else {
            None
        };

        canonical.push(MessageMember {
            name: member_name,
            kind,
            is_array: member.is_array(),
            array_size: member.array_size(),
            is_upper_bound: member.is_upper_bound(),
            nested,
        });
    }

    Ok(MessageDescriptor::new(namespace, name, canonical))
}
