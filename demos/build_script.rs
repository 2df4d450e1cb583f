//! Demonstrates the writer lifecycle a real parser follows: emit nodes
//! while holding a stack of pending offsets, patch each node's `END` skip
//! when its variable sequence closes, trim, then hand the finished buffer
//! to a reader.
//!
//! `StaticVec` plays the role of the parser's pending-offset stack: small,
//! bounded by nesting depth, and never heap-allocated.
use packed_ast::ast::Ast;
use packed_ast::catalog::{END_SKIP, Tag};
use packed_ast::dump::dump_to_string;
use packed_ast::staticvec::StaticVec;

/// One entry of the parser's pending-offset stack: a node still being
/// filled in, identified by the payload offset `set_skip` needs to close it.
struct Pending {
    payload_off: u32,
    tag: Tag,
}

fn main() {
    // Build `function f(a){return a;}`.
    let mut ast = Ast::new();
    let mut stack: StaticVec<Pending, 8> = StaticVec::new();

    let script_off = ast.add_node(Tag::Script);
    stack.push(Pending {
        payload_off: script_off,
        tag: Tag::Script,
    });

    ast.add_inlined_node(Tag::FuncDecl, b"f");
    let func_off = ast.add_node(Tag::Func);
    stack.push(Pending {
        payload_off: func_off,
        tag: Tag::Func,
    });

    // Name child, then one parameter before the `body` skip.
    ast.add_inlined_node(Tag::Ident, b"f");
    ast.add_inlined_node(Tag::Ident, b"a");
    ast.set_skip(func_off, 2 /* body */);

    // Body: a single `return a;`.
    let return_off = ast.add_node(Tag::ValReturn);
    ast.add_inlined_node(Tag::Ident, b"a");
    let _ = return_off;

    // Close FUNC, then SCRIPT, popping the stack in LIFO order exactly as a
    // recursive-descent parser closes nested statements.
    let func = stack.pop().expect("func pending");
    ast.set_skip(func.payload_off, END_SKIP);
    assert_eq!(func.tag, Tag::Func);

    let script = stack.pop().expect("script pending");
    ast.set_skip(script.payload_off, END_SKIP);
    assert_eq!(script.tag, Tag::Script);
    assert!(stack.is_empty());

    ast.trim();

    let mut cursor = 0;
    ast.skip_tree(&mut cursor);
    assert_eq!(cursor as usize, ast.len());

    println!("{}", dump_to_string(&ast));
}
