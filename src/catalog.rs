//! Static per-tag layout table — the schema for the packed format.
//!
//! Every reader and writer operation consults [`CATALOG`] to know how many
//! skip slots a node reserves, whether it carries an inline string, and how
//! many fixed children precede its variable sequence. The table itself is
//! the full tag list, transcribed in declaration order starting
//! at `NOP = 0`.

use strum::{EnumCount, EnumIter, FromRepr};

/// One-byte node-type discriminator, assigned in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter, FromRepr)]
#[repr(u8)]
pub enum Tag {
    Nop,
    Script,
    Var,
    VarDecl,
    FuncDecl,
    If,
    Func,
    Assign,
    RemAssign,
    MulAssign,
    DivAssign,
    XorAssign,
    PlusAssign,
    MinusAssign,
    OrAssign,
    AndAssign,
    LshiftAssign,
    RshiftAssign,
    UrshiftAssign,
    Num,
    Ident,
    String,
    Regex,
    Label,
    Seq,
    While,
    Dowhile,
    For,
    ForIn,
    Cond,
    Debugger,
    Break,
    LabBreak,
    Continue,
    LabContinue,
    Return,
    ValReturn,
    Throw,
    Try,
    Switch,
    Case,
    Default,
    With,
    LogOr,
    LogAnd,
    Or,
    Xor,
    And,
    Eq,
    EqEq,
    Ne,
    NeNe,
    Le,
    Lt,
    Ge,
    Gt,
    In,
    Instanceof,
    Lshift,
    Rshift,
    Urshift,
    Add,
    Sub,
    Rem,
    Mul,
    Div,
    Pos,
    Neg,
    Not,
    LogicalNot,
    Void,
    Delete,
    Typeof,
    Preinc,
    Predec,
    Postinc,
    Postdec,
    Member,
    Index,
    Call,
    New,
    Array,
    Object,
    Prop,
    Getter,
    Setter,
    This,
    True,
    False,
    Null,
    Undef,
    UseStrict,
}

impl Tag {
    /// The catalog row describing this tag's layout.
    pub fn def(self) -> &'static NodeDef {
        &CATALOG[self as usize]
    }

    /// Looks up a tag by its wire byte value.
    pub fn from_byte(byte: u8) -> Option<Tag> {
        Tag::from_repr(byte)
    }
}

/// The end-skip slot index, valid for any tag with `num_skips >= 1`.
pub const END_SKIP: u8 = 0;

/// A single catalog row: the five layout fields, one per tag.
#[derive(Debug, Clone, Copy)]
pub struct NodeDef {
    /// Display name used by the dumper. Compiled out unless the `tag-names`
    /// feature is enabled, mirroring the original `V7_DISABLE_AST_TAG_NAMES`.
    #[cfg(feature = "tag-names")]
    pub name: &'static str,
    pub has_varint: bool,
    pub has_inlined: bool,
    pub num_skips: u8,
    pub num_subtrees: u8,
}

macro_rules! node_def {
    ($name:literal, $has_varint:literal, $has_inlined:literal, $num_skips:literal, $num_subtrees:literal) => {
        NodeDef {
            #[cfg(feature = "tag-names")]
            name: $name,
            has_varint: $has_varint != 0,
            has_inlined: $has_inlined != 0,
            num_skips: $num_skips,
            num_subtrees: $num_subtrees,
        }
    };
}

/// The full tag catalog, indexed by [`Tag`] (i.e. by wire byte value).
pub static CATALOG: [NodeDef; Tag::COUNT] = [
    node_def!("NOP", 0, 0, 0, 0),
    node_def!("SCRIPT", 0, 0, 2, 0),
    node_def!("VAR", 0, 0, 2, 0),
    node_def!("VAR_DECL", 1, 1, 0, 1),
    node_def!("FUNC_DECL", 1, 1, 0, 1),
    node_def!("IF", 0, 0, 2, 1),
    node_def!("FUNC", 0, 0, 3, 1),
    node_def!("ASSIGN", 0, 0, 0, 2),
    node_def!("REM_ASSIGN", 0, 0, 0, 2),
    node_def!("MUL_ASSIGN", 0, 0, 0, 2),
    node_def!("DIV_ASSIGN", 0, 0, 0, 2),
    node_def!("XOR_ASSIGN", 0, 0, 0, 2),
    node_def!("PLUS_ASSIGN", 0, 0, 0, 2),
    node_def!("MINUS_ASSIGN", 0, 0, 0, 2),
    node_def!("OR_ASSIGN", 0, 0, 0, 2),
    node_def!("AND_ASSIGN", 0, 0, 0, 2),
    node_def!("LSHIFT_ASSIGN", 0, 0, 0, 2),
    node_def!("RSHIFT_ASSIGN", 0, 0, 0, 2),
    node_def!("URSHIFT_ASSIGN", 0, 0, 0, 2),
    node_def!("NUM", 1, 1, 0, 0),
    node_def!("IDENT", 1, 1, 0, 0),
    node_def!("STRING", 1, 1, 0, 0),
    node_def!("REGEX", 1, 1, 0, 0),
    node_def!("LABEL", 1, 1, 0, 0),
    node_def!("SEQ", 0, 0, 1, 0),
    node_def!("WHILE", 0, 0, 1, 1),
    node_def!("DOWHILE", 0, 0, 2, 0),
    node_def!("FOR", 0, 0, 2, 3),
    node_def!("FOR_IN", 0, 0, 2, 3),
    node_def!("COND", 0, 0, 0, 3),
    node_def!("DEBUGGER", 0, 0, 0, 0),
    node_def!("BREAK", 0, 0, 0, 0),
    node_def!("LAB_BREAK", 0, 0, 0, 1),
    node_def!("CONTINUE", 0, 0, 0, 0),
    node_def!("LAB_CONTINUE", 0, 0, 0, 1),
    node_def!("RETURN", 0, 0, 0, 0),
    node_def!("VAL_RETURN", 0, 0, 0, 1),
    node_def!("THROW", 0, 0, 0, 1),
    node_def!("TRY", 0, 0, 3, 1),
    node_def!("SWITCH", 0, 0, 2, 1),
    node_def!("CASE", 0, 0, 1, 1),
    node_def!("DEFAULT", 0, 0, 1, 0),
    node_def!("WITH", 0, 0, 1, 1),
    node_def!("LOG_OR", 0, 0, 0, 2),
    node_def!("LOG_AND", 0, 0, 0, 2),
    node_def!("OR", 0, 0, 0, 2),
    node_def!("XOR", 0, 0, 0, 2),
    node_def!("AND", 0, 0, 0, 2),
    node_def!("EQ", 0, 0, 0, 2),
    node_def!("EQ_EQ", 0, 0, 0, 2),
    node_def!("NE", 0, 0, 0, 2),
    node_def!("NE_NE", 0, 0, 0, 2),
    node_def!("LE", 0, 0, 0, 2),
    node_def!("LT", 0, 0, 0, 2),
    node_def!("GE", 0, 0, 0, 2),
    node_def!("GT", 0, 0, 0, 2),
    node_def!("IN", 0, 0, 0, 2),
    node_def!("INSTANCEOF", 0, 0, 0, 2),
    node_def!("LSHIFT", 0, 0, 0, 2),
    node_def!("RSHIFT", 0, 0, 0, 2),
    node_def!("URSHIFT", 0, 0, 0, 2),
    node_def!("ADD", 0, 0, 0, 2),
    node_def!("SUB", 0, 0, 0, 2),
    node_def!("REM", 0, 0, 0, 2),
    node_def!("MUL", 0, 0, 0, 2),
    node_def!("DIV", 0, 0, 0, 2),
    node_def!("POS", 0, 0, 0, 1),
    node_def!("NEG", 0, 0, 0, 1),
    node_def!("NOT", 0, 0, 0, 1),
    node_def!("LOGICAL_NOT", 0, 0, 0, 1),
    node_def!("VOID", 0, 0, 0, 1),
    node_def!("DELETE", 0, 0, 0, 1),
    node_def!("TYPEOF", 0, 0, 0, 1),
    node_def!("PREINC", 0, 0, 0, 1),
    node_def!("PREDEC", 0, 0, 0, 1),
    node_def!("POSTINC", 0, 0, 0, 1),
    node_def!("POSTDEC", 0, 0, 0, 1),
    node_def!("MEMBER", 1, 1, 0, 1),
    node_def!("INDEX", 0, 0, 0, 2),
    node_def!("CALL", 0, 0, 1, 1),
    node_def!("NEW", 0, 0, 1, 1),
    node_def!("ARRAY", 0, 0, 1, 0),
    node_def!("OBJECT", 0, 0, 1, 0),
    node_def!("PROP", 1, 1, 0, 1),
    node_def!("GETTER", 0, 0, 0, 1),
    node_def!("SETTER", 0, 0, 0, 1),
    node_def!("THIS", 0, 0, 0, 0),
    node_def!("TRUE", 0, 0, 0, 0),
    node_def!("FALSE", 0, 0, 0, 0),
    node_def!("NULL", 0, 0, 0, 0),
    node_def!("UNDEF", 0, 0, 0, 0),
    node_def!("USE_STRICT", 0, 0, 0, 0),
];

/// Display name for a tag, falling back to `TAG_<n>` in elided-name builds
/// or for a byte with no catalog entry at all.
pub fn display_name(tag_byte: u8) -> std::borrow::Cow<'static, str> {
    #[cfg(feature = "tag-names")]
    {
        if let Some(tag) = Tag::from_byte(tag_byte) {
            return std::borrow::Cow::Borrowed(tag.def().name);
        }
    }
    #[cfg(not(feature = "tag-names"))]
    {
        let _ = Tag::from_byte(tag_byte);
    }
    std::borrow::Cow::Owned(format!("TAG_{tag_byte}"))
}
