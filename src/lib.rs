//! A packed, self-describing Abstract Syntax Tree for a compact JavaScript
//! front-end.
//!
//! The tree lives as one linear byte buffer rather than a graph of heap
//! nodes: each node is a tag byte, optional back-patchable 16-bit "skip"
//! offsets, an optional inline string payload, and its children in place.
//! A static [`catalog`] table fixes each tag's layout, so the reader and
//! writer never need per-node dynamic dispatch — the catalog row *is* the
//! node's behavior.
//!
//! This crate owns the encoding only. The JavaScript tokenizer, the
//! recursive-descent parser that emits nodes via the writer API, and the
//! tree-walking interpreter that consumes them via the reader API are all
//! external collaborators.
//!
//! Module map
//!  - [`buffer`]: the grow-only backing store, addressed by offset.
//!  - [`varint`]: the LEB128-style length prefix used by inline strings.
//!  - [`catalog`]: the per-tag layout table ([`catalog::Tag`], [`catalog::CATALOG`]).
//!  - [`ast`]: [`ast::Ast`], the writer and reader operating on one buffer.
//!  - [`dump`]: the human-readable, deterministic pretty-printer.
//!  - [`error`]: [`error::AstError`], the reader's one `format-corrupt` category.
//!
//! Example: building and dumping the AST for `var x=2;`
//! ```
//! use packed_ast::ast::Ast;
//! use packed_ast::catalog::{Tag, END_SKIP};
//! use packed_ast::dump::dump_to_string;
//!
//! let mut ast = Ast::new();
//! let script_off = ast.add_node(Tag::Script);
//! let var_off = ast.add_node(Tag::Var);
//! ast.add_inlined_node(Tag::VarDecl, b"x");
//! ast.add_inlined_node(Tag::Num, b"2");
//! ast.set_skip(var_off, END_SKIP);
//! ast.set_skip(script_off, END_SKIP);
//!
//! let mut cursor = 0;
//! ast.skip_tree(&mut cursor);
//! assert_eq!(cursor as usize, ast.len());
//!
//! println!("{}", dump_to_string(&ast));
//! ```

/// AST codec: the writer (emit/insert/patch) and reader (fetch/advance/skip)
/// that share one packed buffer.
pub mod ast;
/// Grow-only byte buffer backing a packed AST.
pub mod buffer;
/// The node-type catalog: one row per tag, fixing its wire layout.
pub mod catalog;
/// Human-readable, deterministic pretty-printer over a packed buffer.
pub mod dump;
/// The reader's single `format-corrupt` error category.
pub mod error;
/// Small fixed-capacity vector without heap allocation, for bounded stacks
/// such as a parser's pending-offset stack.
pub mod staticvec;
/// Unsigned LEB128-style variable-length integer codec.
pub mod varint;

pub mod prelude {
    //! Convenient re-exports for end users.
    pub use crate::ast::{Ast, Offset};
    pub use crate::catalog::{CATALOG, END_SKIP, NodeDef, Tag};
    pub use crate::dump::{dump, dump_colored, dump_to_string};
    pub use crate::error::{AstError, AstResult};
}
