// src/frontend/lexer.rs

use crate::errors::LexerError;
use crate::frontend::{Span, Token, TokenType};

pub struct Lexer<'src> {
    source: &'src str,
    chars: std::iter::Peekable<std::str::CharIndices<'src>>,
    start: usize,
    current: usize,
    line: u32,
    column: u32,
    start_column: u32,
    start_line: u32,
    // Error collection
    errors: Vec<LexerError>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_column: 1,
            start_line: 1,
            errors: Vec::new(),
        }
    }

    /// Take all collected errors, leaving the internal list empty.
    pub fn take_errors(&mut self) -> Vec<LexerError> {
        std::mem::take(&mut self.errors)
    }

    /// Check if any errors have been collected.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the source string being lexed.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Get the next token from the source
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        self.start = self.current;
        self.start_column = self.column;
        self.start_line = self.line;

        let Some(c) = self.advance() else {
            return self.make_token(TokenType::Eof);
        };

        match c {
            '(' => self.make_token(TokenType::LParen),
            ')' => self.make_token(TokenType::RParen),
            '{' => self.make_token(TokenType::LBrace),
            '}' => self.make_token(TokenType::RBrace),
            '[' => self.make_token(TokenType::LBracket),
            ']' => self.make_token(TokenType::RBracket),
            '<' => self.make_token(TokenType::Lt),
            '>' => self.make_token(TokenType::Gt),
            ',' => self.make_token(TokenType::Comma),
            '.' => self.make_token(TokenType::Dot),
            ';' => self.make_token(TokenType::Semicolon),
            ':' => self.make_token(TokenType::Colon),

            // Comment or stray slash (the subset has no division)
            '/' => {
                if self.match_char('/') {
                    while self.peek() != Some('\n') && self.peek().is_some() {
                        self.advance();
                    }
                    self.next_token()
                } else if self.match_char('*') {
                    self.block_comment()
                } else {
                    self.error_unexpected_char('/')
                }
            }

            // Identifier or keyword
            c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),

            _ => self.error_unexpected_char(c),
        }
    }

    /// Skip whitespace including newlines, tracking line positions
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' | '\r' => {
                    self.advance();
                }
                '\n' => {
                    self.advance();
                    self.line += 1;
                    self.column = 1;
                }
                _ => break,
            }
        }
    }

    /// Advance to the next character and return it
    fn advance(&mut self) -> Option<char> {
        if let Some((idx, c)) = self.chars.next() {
            self.current = idx + c.len_utf8();
            self.column += 1;
            Some(c)
        } else {
            None
        }
    }

    /// Peek at the next character without consuming it
    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    /// Consume the next character if it matches the expected character
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Create a token from start to current position
    fn make_token(&self, ty: TokenType) -> Token {
        let lexeme = &self.source[self.start..self.current];
        Token::new(
            ty,
            lexeme,
            Span::new_with_end(
                self.start,
                self.current,
                self.start_line,
                self.start_column,
                self.line,
                self.column,
            ),
        )
    }

    /// Create an error token and collect an error for an unexpected character.
    fn error_unexpected_char(&mut self, c: char) -> Token {
        let span = Span::new_with_end(
            self.start,
            self.current,
            self.start_line,
            self.start_column,
            self.line,
            self.column,
        );
        let error = LexerError::UnexpectedCharacter {
            ch: c,
            span: span.into(),
        };
        let message = format!("unexpected character '{}'", c);
        self.errors.push(error);
        Token::new(TokenType::Error, message, span)
    }

    /// Skip a block comment, or produce an error token if it never closes.
    fn block_comment(&mut self) -> Token {
        loop {
            match self.advance() {
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    return self.next_token();
                }
                Some('\n') => {
                    self.line += 1;
                    self.column = 1;
                }
                Some(_) => {}
                None => {
                    let span = Span::new_with_end(
                        self.start,
                        self.current,
                        self.start_line,
                        self.start_column,
                        self.line,
                        self.column,
                    );
                    let error = LexerError::UnterminatedComment { span: span.into() };
                    self.errors.push(error);
                    return Token::new(TokenType::Error, "unterminated block comment", span);
                }
            }
        }
    }

    /// Scan an identifier or keyword
    fn identifier(&mut self) -> Token {
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let text = &self.source[self.start..self.current];
        let ty = Self::keyword_type(text).unwrap_or(TokenType::Identifier);
        self.make_token(ty)
    }

    /// Check if a string is a keyword and return its token type
    fn keyword_type(text: &str) -> Option<TokenType> {
        match text {
            "using" => Some(TokenType::KwUsing),
            "namespace" => Some(TokenType::KwNamespace),
            "public" => Some(TokenType::KwPublic),
            "interface" => Some(TokenType::KwInterface),
            "class" => Some(TokenType::KwClass),
            "void" => Some(TokenType::KwVoid),
            "this" => Some(TokenType::KwThis),
            "get" => Some(TokenType::KwGet),
            "set" => Some(TokenType::KwSet),
            "new" => Some(TokenType::KwNew),
            "return" => Some(TokenType::KwReturn),
            "ref" => Some(TokenType::KwRef),
            "out" => Some(TokenType::KwOut),
            "params" => Some(TokenType::KwParams),
            "bool" => Some(TokenType::KwBool),
            "byte" => Some(TokenType::KwByte),
            "sbyte" => Some(TokenType::KwSByte),
            "char" => Some(TokenType::KwChar),
            "decimal" => Some(TokenType::KwDecimal),
            "double" => Some(TokenType::KwDouble),
            "float" => Some(TokenType::KwFloat),
            "int" => Some(TokenType::KwInt),
            "uint" => Some(TokenType::KwUInt),
            "long" => Some(TokenType::KwLong),
            "ulong" => Some(TokenType::KwULong),
            "short" => Some(TokenType::KwShort),
            "ushort" => Some(TokenType::KwUShort),
            "object" => Some(TokenType::KwObject),
            "string" => Some(TokenType::KwString),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_types(source: &str) -> Vec<TokenType> {
        let mut lexer = Lexer::new(source);
        let mut types = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.ty == TokenType::Eof {
                break;
            }
            types.push(token.ty);
        }
        types
    }

    #[test]
    fn lex_using_directive() {
        assert_eq!(
            token_types("using System.Text;"),
            vec![
                TokenType::KwUsing,
                TokenType::Identifier,
                TokenType::Dot,
                TokenType::Identifier,
                TokenType::Semicolon,
            ]
        );
    }

    #[test]
    fn lex_interface_header() {
        assert_eq!(
            token_types("public interface IWidget {"),
            vec![
                TokenType::KwPublic,
                TokenType::KwInterface,
                TokenType::Identifier,
                TokenType::LBrace,
            ]
        );
    }

    #[test]
    fn lex_generic_type() {
        assert_eq!(
            token_types("List<int>"),
            vec![
                TokenType::Identifier,
                TokenType::Lt,
                TokenType::KwInt,
                TokenType::Gt,
            ]
        );
    }

    #[test]
    fn lex_accessor_keywords() {
        assert_eq!(
            token_types("{ get; set; }"),
            vec![
                TokenType::LBrace,
                TokenType::KwGet,
                TokenType::Semicolon,
                TokenType::KwSet,
                TokenType::Semicolon,
                TokenType::RBrace,
            ]
        );
    }

    #[test]
    fn lex_line_comment() {
        let mut lexer = Lexer::new("int // trailing comment\nstring");
        assert_eq!(lexer.next_token().ty, TokenType::KwInt);
        assert_eq!(lexer.next_token().ty, TokenType::KwString);
        assert_eq!(lexer.next_token().ty, TokenType::Eof);
    }

    #[test]
    fn lex_block_comment_spanning_lines() {
        let mut lexer = Lexer::new("int /* one\ntwo */ string");
        assert_eq!(lexer.next_token().ty, TokenType::KwInt);
        let token = lexer.next_token();
        assert_eq!(token.ty, TokenType::KwString);
        assert_eq!(token.span.line, 2);
    }

    #[test]
    fn lex_unterminated_block_comment() {
        let mut lexer = Lexer::new("/* never closed");
        assert_eq!(lexer.next_token().ty, TokenType::Error);
        assert!(lexer.has_errors());
    }

    #[test]
    fn lex_unexpected_character() {
        let mut lexer = Lexer::new("int $");
        assert_eq!(lexer.next_token().ty, TokenType::KwInt);
        assert_eq!(lexer.next_token().ty, TokenType::Error);
        let errors = lexer.take_errors();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0],
            LexerError::UnexpectedCharacter { ch: '$', .. }
        ));
    }

    #[test]
    fn newlines_advance_line_tracking() {
        let mut lexer = Lexer::new("int\nstring\nbool");
        assert_eq!(lexer.next_token().span.line, 1);
        assert_eq!(lexer.next_token().span.line, 2);
        assert_eq!(lexer.next_token().span.line, 3);
    }

    #[test]
    fn identifier_with_underscore() {
        let mut lexer = Lexer::new("_private_name");
        let token = lexer.next_token();
        assert_eq!(token.ty, TokenType::Identifier);
        assert_eq!(token.lexeme, "_private_name");
    }

    #[test]
    fn keywords_are_case_sensitive() {
        let mut lexer = Lexer::new("Using");
        assert_eq!(lexer.next_token().ty, TokenType::Identifier);
    }
}
