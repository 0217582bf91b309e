// src/frontend/token.rs

/// All token types in the declaration subset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Identifier,

    // Keywords
    KwUsing,
    KwNamespace,
    KwPublic,
    KwInterface,
    KwClass,
    KwVoid,
    KwThis,
    KwGet,
    KwSet,
    KwNew,
    KwReturn,
    KwRef,
    KwOut,
    KwParams,

    // Predefined type keywords
    KwBool,
    KwByte,
    KwSByte,
    KwChar,
    KwDecimal,
    KwDouble,
    KwFloat,
    KwInt,
    KwUInt,
    KwLong,
    KwULong,
    KwShort,
    KwUShort,
    KwObject,
    KwString,

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Lt,
    Gt,
    Comma,
    Dot,
    Semicolon,
    Colon,

    // Special
    Eof,
    Error,
}

impl TokenType {
    /// Get string representation for error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::KwUsing => "using",
            Self::KwNamespace => "namespace",
            Self::KwPublic => "public",
            Self::KwInterface => "interface",
            Self::KwClass => "class",
            Self::KwVoid => "void",
            Self::KwThis => "this",
            Self::KwGet => "get",
            Self::KwSet => "set",
            Self::KwNew => "new",
            Self::KwReturn => "return",
            Self::KwRef => "ref",
            Self::KwOut => "out",
            Self::KwParams => "params",
            Self::KwBool => "bool",
            Self::KwByte => "byte",
            Self::KwSByte => "sbyte",
            Self::KwChar => "char",
            Self::KwDecimal => "decimal",
            Self::KwDouble => "double",
            Self::KwFloat => "float",
            Self::KwInt => "int",
            Self::KwUInt => "uint",
            Self::KwLong => "long",
            Self::KwULong => "ulong",
            Self::KwShort => "short",
            Self::KwUShort => "ushort",
            Self::KwObject => "object",
            Self::KwString => "string",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Eof => "end of file",
            Self::Error => "error",
        }
    }
}

/// Source location span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,    // Byte offset
    pub end: usize,      // Byte offset (exclusive)
    pub line: u32,       // Start line (1-indexed)
    pub column: u32,     // Start column (1-indexed)
    pub end_line: u32,   // End line (1-indexed)
    pub end_column: u32, // End column (1-indexed, exclusive)
}

impl Span {
    /// Create a new span with explicit end position
    pub fn new_with_end(
        start: usize,
        end: usize,
        line: u32,
        column: u32,
        end_line: u32,
        end_column: u32,
    ) -> Self {
        Self {
            start,
            end,
            line,
            column,
            end_line,
            end_column,
        }
    }

    /// Create a new span, computing end position for single-line tokens
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        let length = end.saturating_sub(start);
        Self {
            start,
            end,
            line,
            column,
            end_line: line,
            end_column: column + length as u32,
        }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start,
            end: other.end,
            line: self.line,
            column: self.column,
            end_line: other.end_line,
            end_column: other.end_column,
        }
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.end - span.start).into()
    }
}

/// A token with its location in source code
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub ty: TokenType,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(ty: TokenType, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            ty,
            lexeme: lexeme.into(),
            span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_computes_end_column() {
        let span = Span::new(0, 9, 1, 1);
        assert_eq!(span.end_line, 1);
        assert_eq!(span.end_column, 10);
    }

    #[test]
    fn span_merge_keeps_both_ends() {
        let first = Span::new_with_end(0, 5, 1, 1, 1, 6);
        let second = Span::new_with_end(10, 15, 2, 3, 2, 8);
        let merged = first.merge(second);

        assert_eq!(merged.start, 0);
        assert_eq!(merged.line, 1);
        assert_eq!(merged.column, 1);
        assert_eq!(merged.end, 15);
        assert_eq!(merged.end_line, 2);
        assert_eq!(merged.end_column, 8);
    }

    #[test]
    fn span_into_source_span() {
        let span = Span::new(4, 10, 1, 5);
        let source_span: miette::SourceSpan = span.into();
        assert_eq!(source_span.offset(), 4);
        assert_eq!(source_span.len(), 6);
    }
}
