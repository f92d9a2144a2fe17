// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Metastring assembly: flavor validation, normalization, envelope.
//!
//! Every entry point comes in two forms. `try_*` returns the failure cause;
//! the plain form returns an empty string on failure, which is what the rmw
//! layer hands to the type-registration path.

use crate::env_config::CompilerOptions;
use crate::error::MetastringError;
use crate::model::MessageIntrospection;
use crate::rosidl::{
    c_str_or_empty, flavored_handle, rosidl_message_type_support_t, IntrospectionFlavor,
};
use crate::walker::walk_struct;
use std::os::raw::c_void;

/// Version envelope prefixed to every metastring.
pub const METASTRING_VERSION: &str = "v1";

/// Stateless compiler bound to a set of [`CompilerOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MetastringCompiler {
    options: CompilerOptions,
}

impl MetastringCompiler {
    pub fn new(options: CompilerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Compile safe Rust-side metadata.
    pub fn try_compile(
        &self,
        source: &dyn MessageIntrospection,
    ) -> Result<String, MetastringError> {
        let descriptor = source.describe()?;
        let mut out = String::with_capacity(64 + descriptor.member_count() * 16);
        out.push_str(METASTRING_VERSION);
        walk_struct(&descriptor, None, &self.options, &mut Vec::new(), &mut out)?;
        log::trace!("metastring for {}: {}", descriptor.fqn(), out);
        Ok(out)
    }

    pub fn compile(&self, source: &dyn MessageIntrospection) -> String {
        self.try_compile(source)
            .unwrap_or_else(|err| discard("descriptor", &err))
    }

    /// Compile an untyped `MessageMembers` handle of the flavor named by `identifier`.
    ///
    /// # Safety
    ///
    /// `members` must be null or point to the `MessageMembers` struct of the flavor
    /// named by `identifier`, with all reachable metadata valid for the duration of
    /// the call.
    pub unsafe fn try_compile_members(
        &self,
        members: *const c_void,
        identifier: &str,
    ) -> Result<String, MetastringError> {
        let flavor = IntrospectionFlavor::from_identifier(identifier)
            .ok_or_else(|| MetastringError::UnknownFlavor(identifier.to_string()))?;
        if members.is_null() {
            return Err(MetastringError::NullHandle);
        }
        let descriptor = flavor.normalize(members)?;
        self.try_compile(&descriptor)
    }

    /// # Safety
    ///
    /// See [`MetastringCompiler::try_compile_members`].
    pub unsafe fn compile_members(&self, members: *const c_void, identifier: &str) -> String {
        self.try_compile_members(members, identifier)
            .unwrap_or_else(|err| discard(identifier, &err))
    }

    /// Compile a type support handle, taking the flavor from its identifier.
    ///
    /// A handle of another type support (such as the `rosidl_typesupport_c`
    /// dispatch handle) is resolved through its lookup function, C flavor first,
    /// the same way nested handles are.
    ///
    /// # Safety
    ///
    /// `type_support` must be null or point to a valid `rosidl_message_type_support_t`
    /// produced by one of the introspection type supports, with all reachable metadata
    /// valid for the duration of the call.
    pub unsafe fn try_compile_type_support(
        &self,
        type_support: *const rosidl_message_type_support_t,
    ) -> Result<String, MetastringError> {
        let Some(handle) = type_support.as_ref() else {
            return Err(MetastringError::NullHandle);
        };
        let identifier = c_str_or_empty(handle.typesupport_identifier)?;
        if IntrospectionFlavor::from_identifier(identifier).is_some() {
            return self.try_compile_members(handle.data, identifier);
        }

        for flavor in [IntrospectionFlavor::C, IntrospectionFlavor::Cpp] {
            if let Ok(resolved) = flavored_handle(type_support, flavor) {
                log::trace!("resolved '{identifier}' handle to {flavor}");
                return self.try_compile_members((*resolved).data, flavor.identifier());
            }
        }
        Err(MetastringError::UnknownFlavor(identifier.to_string()))
    }

    /// # Safety
    ///
    /// See [`MetastringCompiler::try_compile_type_support`].
    pub unsafe fn compile_type_support(
        &self,
        type_support: *const rosidl_message_type_support_t,
    ) -> String {
        self.try_compile_type_support(type_support)
            .unwrap_or_else(|err| discard("type support", &err))
    }
}

fn discard(context: &str, err: &MetastringError) -> String {
    log::debug!("metastring compilation failed ({context}): {err}");
    String::new()
}

/// Compile safe metadata with default options; empty on failure.
pub fn compile_metastring(source: &dyn MessageIntrospection) -> String {
    MetastringCompiler::default().compile(source)
}

/// Compile an untyped members handle with default options; empty on failure.
///
/// # Safety
///
/// See [`MetastringCompiler::try_compile_members`].
pub unsafe fn compile_members_metastring(members: *const c_void, identifier: &str) -> String {
    MetastringCompiler::default().compile_members(members, identifier)
}

/// Compile a type support handle with default options; empty on failure.
///
/// # Safety
///
/// See [`MetastringCompiler::try_compile_type_support`].
pub unsafe fn compile_type_support_metastring(
    type_support: *const rosidl_message_type_support_t,
) -> String {
    MetastringCompiler::default().compile_type_support(type_support)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MemberTypeKind, MessageDescriptor, MessageMember};
    use std::ptr;

    #[test]
    fn envelope_prefixes_struct_token() {
        let empty = MessageDescriptor::new("", "Foo", Vec::new());
        assert_eq!(compile_metastring(&empty), "v1{(type=dds_::Foo_,member=0)");
    }

    #[test]
    fn compile_is_deterministic() {
        let desc = MessageDescriptor::new(
            "std_msgs__msg",
            "Int32MultiArray",
            vec![MessageMember::scalar("data", MemberTypeKind::Int32).sequence(None)],
        );
        let first = compile_metastring(&desc);
        let second = compile_metastring(&desc);
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn failure_yields_empty_string() {
        let desc = MessageDescriptor::new(
            "pkg__msg",
            "Bad",
            vec![MessageMember::scalar("x", MemberTypeKind::Unknown(0))],
        );
        assert_eq!(compile_metastring(&desc), "");
        assert!(MetastringCompiler::default().try_compile(&desc).is_err());
    }

    #[test]
    fn unknown_flavor_is_rejected() {
        // flavor is checked before the handle is touched
        let dangling = ptr::NonNull::<c_void>::dangling().as_ptr().cast_const();
        let result = unsafe {
            MetastringCompiler::default()
                .try_compile_members(dangling, "rosidl_typesupport_fastrtps_c")
        };
        assert!(matches!(
            result,
            Err(MetastringError::UnknownFlavor(id)) if id == "rosidl_typesupport_fastrtps_c"
        ));
    }

    #[test]
    fn null_handles_yield_empty_string() {
        unsafe {
            assert_eq!(compile_type_support_metastring(ptr::null()), "");
            assert_eq!(
                compile_members_metastring(ptr::null(), "rosidl_typesupport_introspection_c"),
                ""
            );
        }
    }

    #[test]
    fn options_are_honored() {
        let desc = MessageDescriptor::new(
            "",
            "Blob",
            vec![MessageMember::scalar("data", MemberTypeKind::UInt8).sequence(None)],
        );
        let compiler = MetastringCompiler::new(CompilerOptions {
            unbounded_sequence_maximum: 16,
        });
        assert_eq!(
            compiler.compile(&desc),
            "v1{(type=dds_::Blob_,member=1)<(name=data_,maximum=16)B()"
        );
    }
}
