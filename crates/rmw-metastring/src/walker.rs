// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Recursive struct descriptor walker.
//!
//! Emits one struct-open token per message (top level, nested field, or array
//! element type) followed by its member tokens in declaration order:
//!
//! ```text
//! {(name=<label>_,type=<mangled>,member=<n>)      struct open (label optional)
//! [(name=<member>_,dimension=<n>)                 fixed array
//! <(name=<member>_,maximum=<n>)                   bounded / unbounded sequence
//! <code>(name=<member>_)                          leaf, name omitted inside a container
//! ```
//!
//! Struct tokens are never closed; the consumer relies on `member=` counts.
//! Messages currently being walked are tracked by fully-qualified name so a
//! type support chain that loops back on itself fails instead of recursing
//! forever.

use crate::classify::classify;
use crate::env_config::CompilerOptions;
use crate::error::MetastringError;
use crate::mangle::push_mangled_type_name;
use crate::model::{Container, MemberTypeKind, MessageDescriptor, MessageMember};

/// Append the tokens for `descriptor` to `out`.
///
/// `stack` holds the fully-qualified names of the enclosing messages.
/// On error `out` holds a partial walk and `stack` is left as is; callers
/// must discard both.
pub(crate) fn walk_struct(
    descriptor: &MessageDescriptor<'_>,
    label: Option<&str>,
    options: &CompilerOptions,
    stack: &mut Vec<String>,
    out: &mut String,
) -> Result<(), MetastringError> {
    let fqn = descriptor.fqn();
    if stack.iter().any(|entry| entry == &fqn) {
        return Err(MetastringError::RecursiveType { fqn });
    }

    out.push_str("{(");
    if let Some(label) = label {
        push_name_field(out, label);
        out.push(',');
    }
    out.push_str("type=");
    push_mangled_type_name(out, descriptor.namespace, descriptor.name);
    out.push_str(",member=");
    out.push_str(&descriptor.member_count().to_string());
    out.push(')');

    stack.push(fqn);
    for member in &descriptor.members {
        walk_member(member, options, stack, out)?;
    }
    stack.pop();
    Ok(())
}

fn walk_member(
    member: &MessageMember<'_>,
    options: &CompilerOptions,
    stack: &mut Vec<String>,
    out: &mut String,
) -> Result<(), MetastringError> {
    let container = member.container();
    push_container(out, member.name, container, options);
    let contained = container != Container::Single;

    if member.kind == MemberTypeKind::Message {
        let nested = member
            .nested
            .as_ref()
            .ok_or_else(|| MetastringError::MissingNested {
                member: member.name.to_string(),
            })?
            .resolve()?;
        // Inside a container the element type is anonymous.
        let label = (!contained).then_some(member.name);
        return walk_struct(&nested, label, options, stack, out);
    }

    out.push(classify(member)?);
    out.push('(');
    if !contained {
        push_name_field(out, member.name);
    }
    out.push(')');
    Ok(())
}

fn push_container(
    out: &mut String,
    name: &str,
    container: Container,
    options: &CompilerOptions,
) {
    let (open, field, size) = match container {
        Container::Single => return,
        Container::Array(size) => ('[', "dimension", size),
        Container::BoundedSequence(size) => ('<', "maximum", size),
        Container::UnboundedSequence => ('<', "maximum", options.unbounded_sequence_maximum),
    };
    out.push(open);
    out.push('(');
    push_name_field(out, name);
    out.push(',');
    out.push_str(field);
    out.push('=');
    out.push_str(&size.to_string());
    out.push(')');
}

fn push_name_field(out: &mut String, name: &str) {
    out.push_str("name=");
    out.push_str(name);
    out.push('_');
}
