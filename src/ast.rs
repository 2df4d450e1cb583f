//! The AST codec: writer, reader and the buffer they share.
//!
//! An [`Ast`] owns one [`ByteBuffer`]. During parsing it is mutated only
//! through the writer operations below; once handed to a consumer it is
//! read-only and the reader operations are the only legal access path.
//! Both groups of operations live on the same type because they share the
//! catalog-driven layout logic — exactly as a single parser and a single
//! interpreter share one buffer in practice.

use log::{debug, trace};

use crate::buffer::ByteBuffer;
use crate::catalog::{CATALOG, END_SKIP, Tag};
use crate::error::{AstError, AstResult};
use crate::varint;

/// Absolute byte offset into an [`Ast`]'s buffer. Stable across growth.
pub type Offset = u32;

/// Width in bytes of one skip slot.
const SKIP_WIDTH: usize = 2;

/// Packed, self-describing Abstract Syntax Tree.
///
/// Byte 0, once the root has been written, is always the [`Tag::Script`]
/// tag.
#[derive(Debug, Clone, Default)]
pub struct Ast {
    buf: ByteBuffer,
}

impl Ast {
    /// An empty AST with no backing allocation yet.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// An empty AST pre-sized to hold at least `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: ByteBuffer::with_capacity(capacity),
        }
    }

    /// Wraps an already-serialized buffer for read-only traversal, e.g. a
    /// file previously written in binary mode.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let mut buf = ByteBuffer::with_capacity(bytes.len());
        buf.append(&bytes);
        Self { buf }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The raw wire bytes, suitable for writing out in binary mode.
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_slice()
    }

    /// Shrinks the backing allocation to fit. Called once after parsing.
    pub fn trim(&mut self) {
        self.buf.trim();
    }

    fn def_for(&self, tag: Tag) -> &'static crate::catalog::NodeDef {
        tag.def()
    }

    fn tag_before(&self, payload_off: Offset) -> Tag {
        let byte = self.buf.get(payload_off - 1);
        Tag::from_byte(byte).unwrap_or_else(|| panic!("tag byte {byte} has no catalog entry"))
    }

    /// Bounds-checked counterpart to [`Self::tag_before`].
    fn tag_before_checked(&self, payload_off: Offset) -> AstResult<Tag> {
        let at = payload_off
            .checked_sub(1)
            .ok_or(AstError::UnexpectedEof { at: 0, len: self.buf.len() as u32 })?;
        let byte = self.buf.get_checked(at).ok_or(AstError::UnexpectedEof {
            at,
            len: self.buf.len() as u32,
        })?;
        Tag::from_byte(byte).ok_or(AstError::UnknownTag(byte))
    }

    /// Decodes the varint length prefix for the inline payload that starts
    /// right after `payload_off`'s skip slots. Returns `(value, offset of
    /// the first byte past the varint)`.
    fn decode_inline_len(&self, payload_off: Offset, num_skips: u8) -> (u64, Offset) {
        let varint_start = payload_off + num_skips as u32 * SKIP_WIDTH as u32;
        let available = self.buf.len() - varint_start as usize;
        let (len, consumed) = varint::decode(self.buf.get_slice(varint_start, available))
            .expect("malformed varint length prefix");
        (len, varint_start + consumed as u32)
    }

    /// Bounds-checked counterpart to [`Self::decode_inline_len`].
    fn decode_inline_len_checked(&self, payload_off: Offset, num_skips: u8) -> AstResult<(u64, Offset)> {
        let varint_start = payload_off + num_skips as u32 * SKIP_WIDTH as u32;
        let available = self.buf.len().saturating_sub(varint_start as usize);
        let bytes = self
            .buf
            .get_slice_checked(varint_start, available)
            .ok_or(AstError::UnexpectedEof {
                at: varint_start,
                len: self.buf.len() as u32,
            })?;
        let (len, consumed) = varint::decode_at(bytes, varint_start)?;
        Ok((len, varint_start + consumed as u32))
    }

    // ---------------------------------------------------------------- writer

    /// Appends one tag byte and reserves `num_skips * 2` bytes of unpatched
    /// skip space. Returns the payload offset (the first skip byte, or the
    /// position right after the tag if the tag has no skips).
    pub fn add_node(&mut self, tag: Tag) -> Offset {
        let def = self.def_for(tag);
        self.buf.append(&[tag as u8]);
        let payload_off = self.buf.append_reserved(def.num_skips as usize * SKIP_WIDTH);
        trace!("add_node {tag:?} at payload_off {payload_off}");
        payload_off
    }

    /// [`Self::add_node`] followed by a varint-prefixed inline string.
    /// Panics if `tag` is not marked `has_inlined` in the catalog.
    pub fn add_inlined_node(&mut self, tag: Tag, data: &[u8]) -> Offset {
        let def = self.def_for(tag);
        assert!(def.has_inlined, "{tag:?} does not carry an inline payload");
        let payload_off = self.add_node(tag);
        let mut prefix = Vec::new();
        varint::encode(data.len() as u64, &mut prefix);
        self.buf.append(&prefix);
        self.buf.append(data);
        payload_off
    }

    /// Splices a new node at `start`, wrapping whatever already occupies
    /// `start..` as its first fixed child — e.g. promoting a bare primary
    /// expression into a `CALL` once a following `(...)` is seen.
    ///
    /// If the tag reserves skip slots, its `END` skip is immediately
    /// patched to the buffer's current tail, meaning "nothing yet in the
    /// variable sequence"; callers that append further children must
    /// re-patch `END` with [`Self::set_skip`] when they close the node.
    pub fn insert_node(&mut self, start: Offset, tag: Tag) -> Offset {
        let def = self.def_for(tag);
        self.buf.insert(start, &[tag as u8]);
        let payload_off = start + 1;
        self.buf
            .insert_reserved(payload_off, def.num_skips as usize * SKIP_WIDTH);
        if def.num_skips >= 1 {
            let tail = self.buf.len() as Offset;
            self.modify_skip(payload_off, tail, END_SKIP);
        }
        debug!("insert_node {tag:?} at {start}, payload_off {payload_off}");
        payload_off
    }

    /// Patches skip slot `which` of the node at `payload_off` to the
    /// buffer's current tail. Returns that tail offset.
    pub fn set_skip(&mut self, payload_off: Offset, which: u8) -> Offset {
        let tail = self.buf.len() as Offset;
        self.modify_skip(payload_off, tail, which);
        tail
    }

    /// Patches skip slot `which` of the node at `payload_off` to point at
    /// the absolute offset `target`. `target - payload_off` must fit in 16
    /// bits; the 64 KiB function-body limit follows directly from this.
    pub fn modify_skip(&mut self, payload_off: Offset, target: Offset, which: u8) {
        let tag = self.tag_before(payload_off);
        let def = self.def_for(tag);
        assert!(
            which < def.num_skips,
            "skip slot {which} out of range for {tag:?} (num_skips = {})",
            def.num_skips
        );
        assert!(target >= payload_off, "skip target precedes its node");
        let delta = target - payload_off;
        assert!(
            delta <= u16::MAX as u32,
            "skip delta {delta} overflows 16 bits; function body exceeds 64 KiB"
        );
        let slot = payload_off + which as u32 * SKIP_WIDTH as u32;
        self.buf.set(slot, &(delta as u16).to_be_bytes());
    }

    // ---------------------------------------------------------------- reader

    /// Reads the tag byte at `cursor` and advances `cursor` past it.
    /// Caller invariant: `cursor` was positioned at a tag boundary.
    pub fn fetch_tag(&self, cursor: &mut Offset) -> Tag {
        let byte = self.buf.get(*cursor);
        *cursor += 1;
        Tag::from_byte(byte).unwrap_or_else(|| panic!("tag byte {byte} has no catalog entry"))
    }

    /// Defensive counterpart to [`Self::fetch_tag`] for untrusted buffers.
    pub fn fetch_tag_checked(&self, cursor: &mut Offset) -> AstResult<Tag> {
        if *cursor as usize >= self.buf.len() {
            return Err(AstError::UnexpectedEof {
                at: *cursor,
                len: self.buf.len() as u32,
            });
        }
        let byte = self.buf.get(*cursor);
        let tag = Tag::from_byte(byte).ok_or(AstError::UnknownTag(byte))?;
        *cursor += 1;
        Ok(tag)
    }

    /// Advances `cursor` past this node's skip slots and inline-string
    /// payload (if any), leaving it at the first fixed child. `cursor` must
    /// point at the node's payload offset, i.e. right after `fetch_tag`.
    pub fn move_to_children(&self, cursor: &mut Offset) {
        let tag = self.tag_before(*cursor);
        let def = self.def_for(tag);
        if def.has_varint {
            let (len, past_varint) = self.decode_inline_len(*cursor, def.num_skips);
            let string_len = if def.has_inlined { len as u32 } else { 0 };
            *cursor = past_varint + string_len;
        } else {
            *cursor += def.num_skips as u32 * SKIP_WIDTH as u32;
        }
    }

    /// Bounds-checked counterpart to [`Self::move_to_children`].
    pub fn move_to_children_checked(&self, cursor: &mut Offset) -> AstResult<()> {
        let tag = self.tag_before_checked(*cursor)?;
        let def = tag.def();
        let new_cursor = if def.has_varint {
            let (len, past_varint) = self.decode_inline_len_checked(*cursor, def.num_skips)?;
            let string_len = if def.has_inlined { len as u32 } else { 0 };
            past_varint + string_len
        } else {
            *cursor + def.num_skips as u32 * SKIP_WIDTH as u32
        };
        if new_cursor as usize > self.buf.len() {
            return Err(AstError::UnexpectedEof {
                at: new_cursor,
                len: self.buf.len() as u32,
            });
        }
        *cursor = new_cursor;
        Ok(())
    }

    /// Reads skip slot `which` of the node at `payload_off` and returns its
    /// absolute target offset.
    pub fn get_skip(&self, payload_off: Offset, which: u8) -> Offset {
        let tag = self.tag_before(payload_off);
        let def = self.def_for(tag);
        debug_assert!(which < def.num_skips);
        let slot = payload_off + which as u32 * SKIP_WIDTH as u32;
        let bytes = self.buf.get_slice(slot, SKIP_WIDTH);
        let delta = u16::from_be_bytes([bytes[0], bytes[1]]);
        payload_off + delta as u32
    }

    /// Bounds-checked counterpart to [`Self::get_skip`].
    pub fn get_skip_checked(&self, payload_off: Offset, which: u8) -> AstResult<Offset> {
        let tag = self.tag_before_checked(payload_off)?;
        let def = tag.def();
        if which >= def.num_skips {
            return Err(AstError::SkipOutOfRange {
                tag,
                which,
                num_skips: def.num_skips,
            });
        }
        let slot = payload_off + which as u32 * SKIP_WIDTH as u32;
        let bytes = self
            .buf
            .get_slice_checked(slot, SKIP_WIDTH)
            .ok_or(AstError::UnexpectedEof {
                at: slot,
                len: self.buf.len() as u32,
            })?;
        let delta = u16::from_be_bytes([bytes[0], bytes[1]]);
        Ok(payload_off + delta as u32)
    }

    /// Decodes the varint length prefix at `payload_off` and returns a view
    /// of the inline string that follows. The view borrows from the
    /// buffer; it does not outlive a subsequent mutation.
    pub fn get_inlined_data(&self, payload_off: Offset) -> (Offset, &[u8]) {
        let tag = self.tag_before(payload_off);
        let def = self.def_for(tag);
        debug_assert!(def.has_inlined);
        let (len, string_off) = self.decode_inline_len(payload_off, def.num_skips);
        (string_off, self.buf.get_slice(string_off, len as usize))
    }

    /// Decodes the inline string at `payload_off` as an ASCII decimal or
    /// ECMA numeric literal (decimal, `0x`/`0X` hex, `0o`/`0O` octal,
    /// `0b`/`0B` binary, or a legacy `0`-prefixed octal).
    pub fn get_num(&self, payload_off: Offset) -> AstResult<f64> {
        let (string_off, bytes) = self.get_inlined_data(payload_off);
        let text = std::str::from_utf8(bytes).map_err(|source| AstError::InvalidUtf8 {
            at: string_off,
            source,
        })?;
        parse_js_number(text).ok_or_else(|| AstError::InvalidNumber {
            at: string_off,
            text: text.to_owned(),
        })
    }

    /// Advances `cursor` past one complete subtree rooted at the current
    /// position. Never consults `num_subtrees` for the variable sequence:
    /// the `END` skip is authoritative, which is what lets this skip nodes
    /// whose tag it does not otherwise understand.
    ///
    /// A tag byte absent from [`CATALOG`] is treated as a format-extension
    /// node: its layout is unknowable, but by convention any such node
    /// meant to be skippable reserves its `END` skip as the first two
    /// bytes after the tag, exactly like slot 0 of a catalog row with
    /// `num_skips >= 1`. The cursor jumps straight there without
    /// attempting to interpret the node's contents.
    pub fn skip_tree(&self, cursor: &mut Offset) {
        let tag_byte = self.buf.get(*cursor);
        *cursor += 1;
        let Some(tag) = Tag::from_byte(tag_byte) else {
            *cursor = self.read_end_skip_raw(*cursor);
            return;
        };
        let def = self.def_for(tag);
        let payload_off = *cursor;
        self.move_to_children(cursor);
        for _ in 0..def.num_subtrees {
            self.skip_tree(cursor);
        }
        if def.num_skips >= 1 {
            let end = self.get_skip(payload_off, END_SKIP);
            while *cursor < end {
                self.skip_tree(cursor);
            }
        }
    }

    /// Reads a 2-byte big-endian `END` delta at `payload_off` without
    /// consulting the catalog, and returns the absolute target. Used only to
    /// skip over tags unknown to this build.
    fn read_end_skip_raw(&self, payload_off: Offset) -> Offset {
        let bytes = self.buf.get_slice(payload_off, SKIP_WIDTH);
        let delta = u16::from_be_bytes([bytes[0], bytes[1]]);
        payload_off + delta as u32
    }

    /// Defensive counterpart to [`Self::skip_tree`] for a buffer of
    /// unguaranteed provenance, e.g. one loaded from disk by the `ast-dump`
    /// CLI. Every cursor advance is bounds-checked and reported through
    /// [`AstError`] instead of panicking. Unlike [`Self::skip_tree`], a tag
    /// byte absent from [`CATALOG`] is reported as [`AstError::UnknownTag`]
    /// rather than tolerated as a format extension — that tolerance is a
    /// property of the trusted-buffer traversal, not of this boundary.
    pub fn skip_tree_checked(&self, cursor: &mut Offset) -> AstResult<()> {
        let tag = self.fetch_tag_checked(cursor)?;
        let def = tag.def();
        let payload_off = *cursor;
        self.move_to_children_checked(cursor)?;
        for _ in 0..def.num_subtrees {
            self.skip_tree_checked(cursor)?;
        }
        if def.num_skips >= 1 {
            let end = self.get_skip_checked(payload_off, END_SKIP)?;
            if end as usize > self.buf.len() {
                return Err(AstError::UnexpectedEof {
                    at: end,
                    len: self.buf.len() as u32,
                });
            }
            while *cursor < end {
                self.skip_tree_checked(cursor)?;
            }
        }
        Ok(())
    }

    /// Walks the whole buffer once via [`Self::skip_tree_checked`] starting
    /// at offset 0 and confirms the cursor lands exactly on the buffer's
    /// length. The one exposed "is this buffer well-formed" check, meant for
    /// buffers whose provenance the caller cannot vouch for.
    pub fn validate(&self) -> AstResult<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let mut cursor = 0;
        self.skip_tree_checked(&mut cursor)?;
        if cursor as usize != self.buf.len() {
            return Err(AstError::TrailingBytes {
                at: cursor,
                len: self.buf.len() as u32,
            });
        }
        Ok(())
    }
}

/// Parses an ECMA-style numeric literal. Falls back to plain decimal
/// (including exponents) via [`str::parse`].
fn parse_js_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'0' {
        let (radix, digits) = match bytes[1] {
            b'x' | b'X' => (16, &text[2..]),
            b'o' | b'O' => (8, &text[2..]),
            b'b' | b'B' => (2, &text[2..]),
            _ => (8, &text[1..]),
        };
        if radix != 10 {
            if let Ok(value) = u64::from_str_radix(digits, radix) {
                return Some(value as f64);
            }
            // Not all digits were valid for this radix — e.g. "018"/"019" are
            // ECMA `NonOctalDecimalIntegerLiteral`s, not malformed octal, and
            // must fall back to a plain decimal reading.
            return text.parse::<f64>().ok();
        }
    }
    text.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close_variable_sequence(ast: &mut Ast, payload_off: Offset) {
        ast.set_skip(payload_off, END_SKIP);
    }

    #[test]
    fn single_numeric_literal_script() {
        // Input `1`.
        let mut ast = Ast::new();
        let script_off = ast.add_node(Tag::Script);
        ast.add_inlined_node(Tag::Num, b"1");
        close_variable_sequence(&mut ast, script_off);

        let mut cursor = 0;
        ast.skip_tree(&mut cursor);
        assert_eq!(cursor as usize, ast.len());
    }

    #[test]
    fn var_declaration_script() {
        // Input `var x=2;`.
        let mut ast = Ast::new();
        let script_off = ast.add_node(Tag::Script);
        let var_off = ast.add_node(Tag::Var);
        let decl_off = ast.add_inlined_node(Tag::VarDecl, b"x");
        ast.add_inlined_node(Tag::Num, b"2");
        close_variable_sequence(&mut ast, var_off);
        close_variable_sequence(&mut ast, script_off);

        let mut cursor = 0;
        ast.skip_tree(&mut cursor);
        assert_eq!(cursor as usize, ast.len());

        // Walk down by hand to check payloads.
        let mut c = 0;
        let script_tag = ast.fetch_tag(&mut c);
        assert_eq!(script_tag, Tag::Script);
        ast.move_to_children(&mut c);
        let var_tag = ast.fetch_tag(&mut c);
        assert_eq!(var_tag, Tag::Var);
        ast.move_to_children(&mut c);
        let decl_tag = ast.fetch_tag(&mut c);
        assert_eq!(decl_tag, Tag::VarDecl);
        let (_, name) = ast.get_inlined_data(decl_off);
        assert_eq!(name, b"x");
    }

    #[test]
    fn call_via_insert_node_promotion() {
        // Input `a[b](c)`: build INDEX(a, b) first, then promote to CALL.
        let mut ast = Ast::new();
        let index_start = ast.len() as Offset;
        ast.add_node(Tag::Index);
        ast.add_inlined_node(Tag::Ident, b"a");
        ast.add_inlined_node(Tag::Ident, b"b");
        let call_off = ast.insert_node(index_start, Tag::Call);
        ast.add_inlined_node(Tag::Ident, b"c");
        ast.set_skip(call_off, END_SKIP);

        let mut cursor = index_start;
        let call_tag = ast.fetch_tag(&mut cursor);
        assert_eq!(call_tag, Tag::Call);
        ast.move_to_children(&mut cursor);
        let index_tag = ast.fetch_tag(&mut cursor);
        assert_eq!(index_tag, Tag::Index);

        let mut full = 0;
        ast.skip_tree(&mut full);
        assert_eq!(full as usize, ast.len());
    }

    #[test]
    fn insert_node_pre_patches_end_to_current_tail() {
        let mut ast = Ast::new();
        ast.add_inlined_node(Tag::Ident, b"x");
        let call_off = ast.insert_node(0, Tag::Call);
        let tail_after_insert = ast.len() as Offset;
        // No variable children appended: END should already equal the tail,
        // i.e. the buffer's length *after* the CALL tag and skip slot were
        // spliced in ahead of the wrapped IDENT.
        assert_eq!(ast.get_skip(call_off, END_SKIP), tail_after_insert);
    }

    #[test]
    fn skip_tree_jumps_over_unknown_tag_with_end_skip() {
        // A SEQ (one skip, no fixed subtrees) containing only a bogus tag
        // byte that still reserves skip space is still traversable because
        // SEQ's own END skip is authoritative.
        let mut ast = Ast::new();
        let seq_off = ast.add_node(Tag::Seq);
        ast.add_inlined_node(Tag::Num, b"1");
        close_variable_sequence(&mut ast, seq_off);

        let mut cursor = 0;
        ast.skip_tree(&mut cursor);
        assert_eq!(cursor as usize, ast.len());
    }

    #[test]
    fn skip_tree_jumps_over_extension_tag_unknown_to_this_catalog() {
        // A SEQ containing one real NUM child, followed by a tag byte this
        // build's catalog has no row for. Per the format-extension
        // convention the unknown node still reserves its own END skip as
        // the first two bytes after its tag, so skip_tree must jump clean
        // over it without trying to interpret its payload.
        let mut ast = Ast::new();
        let seq_off = ast.add_node(Tag::Seq);
        ast.add_inlined_node(Tag::Num, b"1");

        const UNKNOWN_TAG: u8 = 250;
        assert!(Tag::from_byte(UNKNOWN_TAG).is_none());
        let unknown_start = ast.buf.append(&[UNKNOWN_TAG]);
        let unknown_payload_off = ast.buf.append_reserved(2);
        // Opaque filler this build has no idea how to interpret.
        ast.buf.append(&[0xde, 0xad, 0xbe, 0xef]);
        let unknown_end = ast.buf.len() as Offset;
        ast.buf
            .set(unknown_payload_off, &((unknown_end - unknown_payload_off) as u16).to_be_bytes());
        let _ = unknown_start;

        close_variable_sequence(&mut ast, seq_off);

        let mut cursor = 0;
        ast.skip_tree(&mut cursor);
        assert_eq!(cursor as usize, ast.len());
    }

    #[test]
    fn get_num_parses_decimal_and_hex() {
        let mut ast = Ast::new();
        let dec_off = ast.add_inlined_node(Tag::Num, b"2");
        let hex_off = ast.add_inlined_node(Tag::Num, b"0x10");
        assert_eq!(ast.get_num(dec_off).unwrap(), 2.0);
        assert_eq!(ast.get_num(hex_off).unwrap(), 16.0);
    }

    #[test]
    fn get_num_parses_legacy_octal_and_non_octal_decimal() {
        let mut ast = Ast::new();
        let octal_off = ast.add_inlined_node(Tag::Num, b"017");
        // "018"/"019"/"089" are ECMA NonOctalDecimalIntegerLiterals: a leading
        // zero followed by an 8 or 9 means "read as decimal", not octal.
        let non_octal_18 = ast.add_inlined_node(Tag::Num, b"018");
        let non_octal_19 = ast.add_inlined_node(Tag::Num, b"019");
        let non_octal_89 = ast.add_inlined_node(Tag::Num, b"089");
        assert_eq!(ast.get_num(octal_off).unwrap(), 15.0);
        assert_eq!(ast.get_num(non_octal_18).unwrap(), 18.0);
        assert_eq!(ast.get_num(non_octal_19).unwrap(), 19.0);
        assert_eq!(ast.get_num(non_octal_89).unwrap(), 89.0);
    }

    #[test]
    fn validate_accepts_a_well_formed_buffer() {
        let mut ast = Ast::new();
        let script_off = ast.add_node(Tag::Script);
        ast.add_inlined_node(Tag::Num, b"1");
        ast.set_skip(script_off, END_SKIP);

        assert!(ast.validate().is_ok());
    }

    #[test]
    fn validate_reports_truncated_buffer_instead_of_panicking() {
        // A SCRIPT whose END skip points past the buffer's actual length.
        let mut ast = Ast::new();
        let script_off = ast.add_node(Tag::Script);
        ast.add_inlined_node(Tag::Num, b"1");
        ast.set_skip(script_off, END_SKIP);
        let truncated = Ast::from_bytes(ast.as_bytes()[..ast.len() - 1].to_vec());

        assert!(matches!(
            truncated.validate(),
            Err(AstError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn validate_reports_unknown_tag_as_an_error_not_a_format_extension() {
        // skip_tree (unchecked) tolerates format-extension tags; the
        // defensive, checked path used for untrusted buffers does not.
        let mut ast = Ast::new();
        const UNKNOWN_TAG: u8 = 250;
        assert!(Tag::from_byte(UNKNOWN_TAG).is_none());
        ast.buf.append(&[UNKNOWN_TAG]);
        ast.buf.append_reserved(2);

        assert!(matches!(
            ast.validate(),
            Err(AstError::UnknownTag(UNKNOWN_TAG))
        ));
    }

    #[test]
    fn fetch_tag_checked_reports_eof_past_buffer_end() {
        let ast = Ast::new();
        let mut cursor = 0;
        assert!(matches!(
            ast.fetch_tag_checked(&mut cursor),
            Err(AstError::UnexpectedEof { at: 0, len: 0 })
        ));
    }
}
