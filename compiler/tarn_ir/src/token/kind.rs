//! Token kinds.
//!
//! A token's kind says what it is; its payload (number, rune, interned text)
//! lives in the parallel value array of [`TokenList`](super::TokenList).

use std::fmt;

/// What a token is.
///
/// Punctuation kinds are always exactly one byte. Keyword kinds cover the
/// reserved words listed in [`TokenKind::KEYWORDS`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    /// End of one file's input. Zero length.
    Eof,
    /// A byte or scalar that cannot start any token.
    Invalid,

    // ─── Trivia ───
    /// A run of spaces and tabs.
    Spaces,
    /// `\n`, `\r\n`, or a lone `\r`.
    NewLine,
    /// `// ...` up to the end of the line.
    CommentSingleLine,
    /// `/// ...` up to the end of the line.
    CommentDocumentation,
    /// `/* ... */`, possibly nested.
    CommentMultiLine,

    // ─── Names ───
    Identifier,
    /// A run of one or more `_`: the discard name.
    Underscores,

    // ─── Literals ───
    Integer,
    Float,
    Rune,
    String,
    /// `$"...` up to the first interpolation region (or the whole literal).
    StringInterpolatedMacro,
    /// The `{` run that opens an interpolation region.
    StringInterpolatedBegin,
    /// The `}` run that closes an interpolation region.
    StringInterpolatedEnd,
    /// Literal text after a region, up to the next region or the closing quote.
    StringInterpolatedPart,

    // ─── Punctuation ───
    Exclamation,
    Hash,
    Dollar,
    Percent,
    Ampersand,
    OpenParen,
    CloseParen,
    Asterisk,
    Plus,
    Comma,
    Minus,
    Dot,
    Slash,
    Colon,
    Semicolon,
    LessThan,
    Equal,
    GreaterThan,
    Question,
    At,
    OpenBracket,
    Backslash,
    CloseBracket,
    Caret,
    Backtick,
    OpenBrace,
    Pipe,
    CloseBrace,
    Tilde,

    // ─── Keywords ───
    Abstract,
    Alias,
    And,
    As,
    Assert,
    Async,
    Attr,
    Await,
    Binary,
    Break,
    Case,
    Catch,
    Const,
    Constructor,
    Continue,
    Default,
    Destructor,
    Do,
    Else,
    Ensures,
    Enum,
    Extends,
    Extension,
    Extern,
    False,
    Fatal,
    Finally,
    For,
    Func,
    Get,
    If,
    Immutable,
    Implements,
    Import,
    In,
    Indirect,
    Inline,
    Interface,
    Internal,
    Is,
    Isolated,
    Let,
    Lifetime,
    Loop,
    Macro,
    Match,
    Module,
    Mutable,
    Namespace,
    New,
    Not,
    Null,
    Operator,
    Or,
    Out,
    Override,
    Partial,
    Permanent,
    Private,
    Protected,
    Public,
    Readable,
    Readonly,
    Ref,
    Requires,
    Retainable,
    Return,
    Sealed,
    Set,
    Shared,
    Sizeof,
    Static,
    Struct,
    Switch,
    Then,
    This,
    Throw,
    Trait,
    Transient,
    True,
    Try,
    Type,
    Typeof,
    Unary,
    Union,
    Unsafe,
    Until,
    Var,
    Virtual,
    Volatile,
    Where,
    While,
    With,
    Yield,
}

impl TokenKind {
    /// Every keyword kind, in alphabetical order of its spelling.
    pub const KEYWORDS: [TokenKind; 94] = [
        TokenKind::Abstract,
        TokenKind::Alias,
        TokenKind::And,
        TokenKind::As,
        TokenKind::Assert,
        TokenKind::Async,
        TokenKind::Attr,
        TokenKind::Await,
        TokenKind::Binary,
        TokenKind::Break,
        TokenKind::Case,
        TokenKind::Catch,
        TokenKind::Const,
        TokenKind::Constructor,
        TokenKind::Continue,
        TokenKind::Default,
        TokenKind::Destructor,
        TokenKind::Do,
        TokenKind::Else,
        TokenKind::Ensures,
        TokenKind::Enum,
        TokenKind::Extends,
        TokenKind::Extension,
        TokenKind::Extern,
        TokenKind::False,
        TokenKind::Fatal,
        TokenKind::Finally,
        TokenKind::For,
        TokenKind::Func,
        TokenKind::Get,
        TokenKind::If,
        TokenKind::Immutable,
        TokenKind::Implements,
        TokenKind::Import,
        TokenKind::In,
        TokenKind::Indirect,
        TokenKind::Inline,
        TokenKind::Interface,
        TokenKind::Internal,
        TokenKind::Is,
        TokenKind::Isolated,
        TokenKind::Let,
        TokenKind::Lifetime,
        TokenKind::Loop,
        TokenKind::Macro,
        TokenKind::Match,
        TokenKind::Module,
        TokenKind::Mutable,
        TokenKind::Namespace,
        TokenKind::New,
        TokenKind::Not,
        TokenKind::Null,
        TokenKind::Operator,
        TokenKind::Or,
        TokenKind::Out,
        TokenKind::Override,
        TokenKind::Partial,
        TokenKind::Permanent,
        TokenKind::Private,
        TokenKind::Protected,
        TokenKind::Public,
        TokenKind::Readable,
        TokenKind::Readonly,
        TokenKind::Ref,
        TokenKind::Requires,
        TokenKind::Retainable,
        TokenKind::Return,
        TokenKind::Sealed,
        TokenKind::Set,
        TokenKind::Shared,
        TokenKind::Sizeof,
        TokenKind::Static,
        TokenKind::Struct,
        TokenKind::Switch,
        TokenKind::Then,
        TokenKind::This,
        TokenKind::Throw,
        TokenKind::Trait,
        TokenKind::Transient,
        TokenKind::True,
        TokenKind::Try,
        TokenKind::Type,
        TokenKind::Typeof,
        TokenKind::Unary,
        TokenKind::Union,
        TokenKind::Unsafe,
        TokenKind::Until,
        TokenKind::Var,
        TokenKind::Virtual,
        TokenKind::Volatile,
        TokenKind::Where,
        TokenKind::While,
        TokenKind::With,
        TokenKind::Yield,
    ];

    /// Fixed source text of punctuation and keyword kinds.
    pub const fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            TokenKind::Exclamation => "!",
            TokenKind::Hash => "#",
            TokenKind::Dollar => "$",
            TokenKind::Percent => "%",
            TokenKind::Ampersand => "&",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Asterisk => "*",
            TokenKind::Plus => "+",
            TokenKind::Comma => ",",
            TokenKind::Minus => "-",
            TokenKind::Dot => ".",
            TokenKind::Slash => "/",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::LessThan => "<",
            TokenKind::Equal => "=",
            TokenKind::GreaterThan => ">",
            TokenKind::Question => "?",
            TokenKind::At => "@",
            TokenKind::OpenBracket => "[",
            TokenKind::Backslash => "\\",
            TokenKind::CloseBracket => "]",
            TokenKind::Caret => "^",
            TokenKind::Backtick => "`",
            TokenKind::OpenBrace => "{",
            TokenKind::Pipe => "|",
            TokenKind::CloseBrace => "}",
            TokenKind::Tilde => "~",
            TokenKind::Abstract => "abstract",
            TokenKind::Alias => "alias",
            TokenKind::And => "and",
            TokenKind::As => "as",
            TokenKind::Assert => "assert",
            TokenKind::Async => "async",
            TokenKind::Attr => "attr",
            TokenKind::Await => "await",
            TokenKind::Binary => "binary",
            TokenKind::Break => "break",
            TokenKind::Case => "case",
            TokenKind::Catch => "catch",
            TokenKind::Const => "const",
            TokenKind::Constructor => "constructor",
            TokenKind::Continue => "continue",
            TokenKind::Default => "default",
            TokenKind::Destructor => "destructor",
            TokenKind::Do => "do",
            TokenKind::Else => "else",
            TokenKind::Ensures => "ensures",
            TokenKind::Enum => "enum",
            TokenKind::Extends => "extends",
            TokenKind::Extension => "extension",
            TokenKind::Extern => "extern",
            TokenKind::False => "false",
            TokenKind::Fatal => "fatal",
            TokenKind::Finally => "finally",
            TokenKind::For => "for",
            TokenKind::Func => "func",
            TokenKind::Get => "get",
            TokenKind::If => "if",
            TokenKind::Immutable => "immutable",
            TokenKind::Implements => "implements",
            TokenKind::Import => "import",
            TokenKind::In => "in",
            TokenKind::Indirect => "indirect",
            TokenKind::Inline => "inline",
            TokenKind::Interface => "interface",
            TokenKind::Internal => "internal",
            TokenKind::Is => "is",
            TokenKind::Isolated => "isolated",
            TokenKind::Let => "let",
            TokenKind::Lifetime => "lifetime",
            TokenKind::Loop => "loop",
            TokenKind::Macro => "macro",
            TokenKind::Match => "match",
            TokenKind::Module => "module",
            TokenKind::Mutable => "mutable",
            TokenKind::Namespace => "namespace",
            TokenKind::New => "new",
            TokenKind::Not => "not",
            TokenKind::Null => "null",
            TokenKind::Operator => "operator",
            TokenKind::Or => "or",
            TokenKind::Out => "out",
            TokenKind::Override => "override",
            TokenKind::Partial => "partial",
            TokenKind::Permanent => "permanent",
            TokenKind::Private => "private",
            TokenKind::Protected => "protected",
            TokenKind::Public => "public",
            TokenKind::Readable => "readable",
            TokenKind::Readonly => "readonly",
            TokenKind::Ref => "ref",
            TokenKind::Requires => "requires",
            TokenKind::Retainable => "retainable",
            TokenKind::Return => "return",
            TokenKind::Sealed => "sealed",
            TokenKind::Set => "set",
            TokenKind::Shared => "shared",
            TokenKind::Sizeof => "sizeof",
            TokenKind::Static => "static",
            TokenKind::Struct => "struct",
            TokenKind::Switch => "switch",
            TokenKind::Then => "then",
            TokenKind::This => "this",
            TokenKind::Throw => "throw",
            TokenKind::Trait => "trait",
            TokenKind::Transient => "transient",
            TokenKind::True => "true",
            TokenKind::Try => "try",
            TokenKind::Type => "type",
            TokenKind::Typeof => "typeof",
            TokenKind::Unary => "unary",
            TokenKind::Union => "union",
            TokenKind::Unsafe => "unsafe",
            TokenKind::Until => "until",
            TokenKind::Var => "var",
            TokenKind::Virtual => "virtual",
            TokenKind::Volatile => "volatile",
            TokenKind::Where => "where",
            TokenKind::While => "while",
            TokenKind::With => "with",
            TokenKind::Yield => "yield",
            _ => return None,
        })
    }

    /// Whitespace, newlines, and comments.
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Spaces
                | TokenKind::NewLine
                | TokenKind::CommentSingleLine
                | TokenKind::CommentDocumentation
                | TokenKind::CommentMultiLine
        )
    }

    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            TokenKind::CommentSingleLine
                | TokenKind::CommentDocumentation
                | TokenKind::CommentMultiLine
        )
    }

    pub const fn is_keyword(self) -> bool {
        self as u8 >= TokenKind::Abstract as u8
    }

    pub const fn is_punctuation(self) -> bool {
        let tag = self as u8;
        tag >= TokenKind::Exclamation as u8 && tag <= TokenKind::Tilde as u8
    }

    /// Tokens whose value slot holds interned text.
    pub const fn carries_string(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::String
                | TokenKind::StringInterpolatedMacro
                | TokenKind::StringInterpolatedPart
        )
    }

    /// Human-readable name for dumps and messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "end of file",
            TokenKind::Invalid => "invalid",
            TokenKind::Spaces => "spaces",
            TokenKind::NewLine => "newline",
            TokenKind::CommentSingleLine => "comment",
            TokenKind::CommentDocumentation => "doc comment",
            TokenKind::CommentMultiLine => "block comment",
            TokenKind::Identifier => "identifier",
            TokenKind::Underscores => "discard",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::Rune => "rune",
            TokenKind::String => "string",
            TokenKind::StringInterpolatedMacro => "interpolated string",
            TokenKind::StringInterpolatedBegin => "interpolation begin",
            TokenKind::StringInterpolatedEnd => "interpolation end",
            TokenKind::StringInterpolatedPart => "interpolated string part",
            _ => match self.lexeme() {
                Some(text) => text,
                None => "token",
            },
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lexeme() {
            Some(text) => write!(f, "`{text}`"),
            None => f.write_str(self.display_name()),
        }
    }
}
