// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Primitive kind to metastring type code.

use crate::error::MetastringError;
use crate::model::{MemberTypeKind, MessageMember};

/// Single-character code for a leaf member kind.
///
/// Nested messages have no code (the walker emits a struct token instead) and
/// unknown kinds cannot be represented; both yield `None`.
// @audit-ok: dispatch table, one arm per rosidl type id
pub const fn type_code(kind: MemberTypeKind) -> Option<char> {
    match kind {
        MemberTypeKind::Float => Some('f'),
        MemberTypeKind::Double | MemberTypeKind::LongDouble => Some('d'),
        MemberTypeKind::Char
        | MemberTypeKind::Octet
        | MemberTypeKind::UInt8
        | MemberTypeKind::Int8 => Some('B'),
        MemberTypeKind::WChar => Some('w'),
        MemberTypeKind::Boolean => Some('z'),
        MemberTypeKind::UInt16 => Some('S'),
        MemberTypeKind::Int16 => Some('s'),
        MemberTypeKind::UInt32 => Some('I'),
        MemberTypeKind::Int32 => Some('i'),
        MemberTypeKind::UInt64 => Some('L'),
        MemberTypeKind::Int64 => Some('l'),
        MemberTypeKind::String => Some('\''),
        MemberTypeKind::WString => Some('W'),
        MemberTypeKind::Message | MemberTypeKind::Unknown(_) => None,
    }
}

/// Classify a leaf member, failing on kinds without a code.
pub(crate) fn classify(member: &MessageMember<'_>) -> Result<char, MetastringError> {
    type_code(member.kind).ok_or_else(|| MetastringError::UnsupportedType {
        member: member.name.to_string(),
        type_id: member.kind.type_id(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_table() {
        let table = [
            (MemberTypeKind::Float, 'f'),
            (MemberTypeKind::Double, 'd'),
            (MemberTypeKind::LongDouble, 'd'),
            (MemberTypeKind::Char, 'B'),
            (MemberTypeKind::Octet, 'B'),
            (MemberTypeKind::UInt8, 'B'),
            (MemberTypeKind::Int8, 'B'),
            (MemberTypeKind::WChar, 'w'),
            (MemberTypeKind::Boolean, 'z'),
            (MemberTypeKind::UInt16, 'S'),
            (MemberTypeKind::Int16, 's'),
            (MemberTypeKind::UInt32, 'I'),
            (MemberTypeKind::Int32, 'i'),
            (MemberTypeKind::UInt64, 'L'),
            (MemberTypeKind::Int64, 'l'),
            (MemberTypeKind::String, '\''),
            (MemberTypeKind::WString, 'W'),
        ];
        for (kind, code) in table {
            assert_eq!(type_code(kind), Some(code), "{kind:?}");
        }
    }

    #[test]
    fn message_has_no_code() {
        assert_eq!(type_code(MemberTypeKind::Message), None);
    }

    #[test]
    fn unknown_kind_fails_classification() {
        let member = MessageMember::scalar("weird", MemberTypeKind::Unknown(99));
        match classify(&member) {
            Err(MetastringError::UnsupportedType { member, type_id }) => {
                assert_eq!(member, "weird");
                assert_eq!(type_id, 99);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
