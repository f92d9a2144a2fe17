// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Human-readable member tree.

use rmw_metastring::{
    mangle_type_name, type_code, Container, MemberTypeKind, MessageDescriptor, MetastringError,
};

pub fn render_tree(descriptor: &MessageDescriptor<'_>) -> Result<String, MetastringError> {
    let mut out = String::new();
    render_into(&mut out, descriptor, 0)?;
    Ok(out)
}

fn render_into(
    out: &mut String,
    descriptor: &MessageDescriptor<'_>,
    depth: usize,
) -> Result<(), MetastringError> {
    let indent = "  ".repeat(depth);
    out.push_str(&format!(
        "{indent}{} ({} members)\n",
        mangle_type_name(descriptor.namespace, descriptor.name),
        descriptor.member_count()
    ));

    for member in &descriptor.members {
        let container = match member.container() {
            Container::Single => String::new(),
            Container::Array(n) => format!("[{n}]"),
            Container::BoundedSequence(n) => format!("<={n}"),
            Container::UnboundedSequence => "[]".to_string(),
        };
        let code = match type_code(member.kind) {
            Some(code) => code.to_string(),
            None => "-".to_string(),
        };
        out.push_str(&format!(
            "{indent}  {}{container}: {:?} '{code}'\n",
            member.name, member.kind
        ));

        if member.kind == MemberTypeKind::Message {
            let nested = member
                .nested
                .as_ref()
                .ok_or_else(|| MetastringError::MissingNested {
                    member: member.name.to_string(),
                })?
                .resolve()?;
            render_into(out, &nested, depth + 2)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmw_metastring::MessageMember;

    #[test]
    fn renders_nested_tree() {
        let point = MessageDescriptor::new(
            "geometry_msgs__msg",
            "Point",
            vec![MessageMember::scalar("x", MemberTypeKind::Double)],
        );
        let path = MessageDescriptor::new(
            "nav_msgs__msg",
            "Path",
            vec![
                MessageMember::message("poses", &point).sequence(Some(4)),
                MessageMember::scalar("ids", MemberTypeKind::UInt32).sequence(None),
            ],
        );
        let tree = render_tree(&path).expect("render");
        let lines: Vec<&str> = tree.lines().collect();
        assert_eq!(lines[0], "nav_msgs::msg::dds_::Path_ (2 members)");
        assert_eq!(lines[1], "  poses<=4: Message '-'");
        assert_eq!(lines[2], "    geometry_msgs::msg::dds_::Point_ (1 members)");
        assert_eq!(lines[3], "      x: Double 'd'");
        assert_eq!(lines[4], "  ids[]: UInt32 'I'");
    }

    #[test]
    fn empty_message_renders_single_line() {
        let empty = MessageDescriptor::new("", "Foo", Vec::new());
        assert_eq!(render_tree(&empty).expect("render"), "dds_::Foo_ (0 members)\n");
    }

    #[test]
    fn missing_nested_is_an_error() {
        let broken = MessageDescriptor::new(
            "",
            "Broken",
            vec![MessageMember::scalar("child", MemberTypeKind::Message)],
        );
        assert!(render_tree(&broken).is_err());
    }
}
