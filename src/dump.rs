//! Human-readable dumper.
//!
//! Traverses the buffer exactly like [`Ast::skip_tree`], but emits indented
//! text instead of merely advancing a cursor. Output is a deterministic
//! function of the buffer contents: two byte-equal buffers
//! produce byte-equal dumps.

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::ast::{Ast, Offset};
use crate::catalog::{END_SKIP, Tag, display_name};

/// Writes the textual dump of the whole buffer (root at offset 0) to `out`.
pub fn dump<W: Write>(ast: &Ast, out: &mut W) -> io::Result<()> {
    let mut cursor = 0;
    dump_node(ast, &mut cursor, 0, out)
}

/// Convenience wrapper returning the dump as an owned `String`.
pub fn dump_to_string(ast: &Ast) -> String {
    let mut buf = Vec::new();
    dump(ast, &mut buf).expect("writing to a Vec<u8> cannot fail");
    String::from_utf8(buf).expect("dump output is always ASCII/UTF-8")
}

/// Same traversal as [`dump`], but tag names and skip-boundary comments are
/// colorized when `out` supports it (an optional ambient nicety; the plain
/// [`dump`] output is the wire format of record).
pub fn dump_colored<W: WriteColor>(ast: &Ast, out: &mut W) -> io::Result<()> {
    let mut cursor = 0;
    dump_node_colored(ast, &mut cursor, 0, out)
}

fn write_indent<W: Write>(out: &mut W, depth: usize) -> io::Result<()> {
    for _ in 0..depth {
        out.write_all(b"  ")?;
    }
    Ok(())
}

fn dump_node<W: Write>(ast: &Ast, cursor: &mut Offset, depth: usize, out: &mut W) -> io::Result<()> {
    let tag_byte = ast.as_bytes()[*cursor as usize];
    let tag = ast.fetch_tag(cursor);
    let def = tag.def();
    let skips = *cursor;

    write_indent(out, depth)?;
    write!(out, "{}", display_name(tag_byte))?;
    if def.has_inlined {
        let (_, text) = ast.get_inlined_data(skips);
        out.write_all(b" ")?;
        out.write_all(text)?;
    }
    out.write_all(b"\n")?;

    ast.move_to_children(cursor);
    for _ in 0..def.num_subtrees {
        dump_node(ast, cursor, depth + 1, out)?;
    }

    if def.num_skips >= 1 {
        let end = ast.get_skip(skips, END_SKIP);
        write_indent(out, depth + 1)?;
        writeln!(out, "/* [...] */")?;
        while *cursor < end {
            for which in (1..def.num_skips).rev() {
                if *cursor == ast.get_skip(skips, which) {
                    write_indent(out, depth + 1)?;
                    writeln!(out, "/* [{which} ->] */")?;
                    break;
                }
            }
            dump_node(ast, cursor, depth + 1, out)?;
        }
    }

    Ok(())
}

fn dump_node_colored<W: WriteColor>(
    ast: &Ast,
    cursor: &mut Offset,
    depth: usize,
    out: &mut W,
) -> io::Result<()> {
    let payload_off = *cursor + 1;
    let tag_byte = ast.as_bytes()[*cursor as usize];
    let tag = ast.fetch_tag(cursor);
    let def = tag.def();
    let skips = payload_off;

    write_indent(out, depth)?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(out, "{}", display_name(tag_byte))?;
    out.reset()?;
    if def.has_inlined {
        let (_, text) = ast.get_inlined_data(skips);
        out.write_all(b" ")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        out.write_all(text)?;
        out.reset()?;
    }
    out.write_all(b"\n")?;

    ast.move_to_children(cursor);
    for _ in 0..def.num_subtrees {
        dump_node_colored(ast, cursor, depth + 1, out)?;
    }

    if def.num_skips >= 1 {
        let end = ast.get_skip(skips, END_SKIP);
        write_indent(out, depth + 1)?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Black)).set_intense(true))?;
        writeln!(out, "/* [...] */")?;
        out.reset()?;
        while *cursor < end {
            for which in (1..def.num_skips).rev() {
                if *cursor == ast.get_skip(skips, which) {
                    write_indent(out, depth + 1)?;
                    out.set_color(ColorSpec::new().set_fg(Some(Color::Black)).set_intense(true))?;
                    writeln!(out, "/* [{which} ->] */")?;
                    out.reset()?;
                    break;
                }
            }
            dump_node_colored(ast, cursor, depth + 1, out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Ast;

    #[test]
    fn every_line_starts_with_a_tag_token() {
        let mut ast = Ast::new();
        let script_off = ast.add_node(Tag::Script);
        ast.add_inlined_node(Tag::Num, b"1");
        ast.set_skip(script_off, END_SKIP);

        let text = dump_to_string(&ast);
        for line in text.lines() {
            let trimmed = line.trim_start();
            let first_token = trimmed.split_whitespace().next().unwrap_or("");
            let is_comment = trimmed.starts_with("/*");
            let is_tag_name = first_token.chars().all(|c| c.is_ascii_uppercase() || c == '_')
                || first_token.starts_with("TAG_");
            assert!(
                is_comment || is_tag_name,
                "unexpected first token on line {line:?}"
            );
        }
    }

    #[test]
    fn dump_is_a_deterministic_function_of_bytes() {
        let mut ast = Ast::new();
        let script_off = ast.add_node(Tag::Script);
        ast.add_inlined_node(Tag::Num, b"1");
        ast.set_skip(script_off, END_SKIP);

        let first = dump_to_string(&ast);
        let second = dump_to_string(&Ast::from_bytes(ast.as_bytes().to_vec()));
        assert_eq!(first, second);
    }

    #[test]
    fn variable_sequence_opens_with_ellipsis_comment() {
        let mut ast = Ast::new();
        let script_off = ast.add_node(Tag::Script);
        ast.add_inlined_node(Tag::Num, b"1");
        ast.set_skip(script_off, END_SKIP);

        let text = dump_to_string(&ast);
        assert!(text.contains("/* [...] */"));
    }
}
