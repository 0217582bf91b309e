// src/frontend/parser.rs

use crate::errors::{LexerError, ParserError};
use crate::frontend::{Lexer, Span, Token, TokenType, ast::*};

pub struct Parser<'src> {
    pub(super) lexer: Lexer<'src>,
    pub(super) current: Token,
    pub(super) previous: Token,
}

/// A parse error wrapping a miette-enabled ParserError
#[derive(Debug)]
pub struct ParseError {
    pub error: ParserError,
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error
    pub fn new(error: ParserError, span: Span) -> Self {
        Self { error, span }
    }
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            previous: Token::new(TokenType::Eof, "", Span::default()),
        }
    }

    /// Parse a whole source file: usings, then namespaces or bare types
    pub fn parse_unit(&mut self) -> Result<CompilationUnit, ParseError> {
        let start_span = self.current.span;

        let mut usings = Vec::new();
        while self.check(TokenType::KwUsing) {
            usings.push(self.using_directive()?);
        }

        let mut namespaces = Vec::new();
        let mut types = Vec::new();
        while !self.check(TokenType::Eof) {
            if self.check(TokenType::KwNamespace) {
                namespaces.push(self.namespace_decl()?);
            } else {
                types.push(self.type_decl()?);
            }
        }

        let span = start_span.merge(self.previous.span);
        Ok(CompilationUnit {
            usings,
            namespaces,
            types,
            span,
        })
    }

    fn using_directive(&mut self) -> Result<UsingDirective, ParseError> {
        let start_span = self.current.span;
        self.advance(); // consume 'using'

        let path = self.qualified_name()?;
        self.consume(TokenType::Semicolon, "';' after using directive")?;

        let span = start_span.merge(self.previous.span);
        Ok(UsingDirective { path, span })
    }

    fn namespace_decl(&mut self) -> Result<NamespaceDecl, ParseError> {
        let start_span = self.current.span;
        self.advance(); // consume 'namespace'

        let name = self.qualified_name()?;
        self.consume(TokenType::LBrace, "'{' after namespace name")?;

        let mut types = Vec::new();
        while !self.check(TokenType::RBrace) && !self.check(TokenType::Eof) {
            types.push(self.type_decl()?);
        }

        self.consume(TokenType::RBrace, "'}' to close namespace")?;
        let span = start_span.merge(self.previous.span);
        Ok(NamespaceDecl { name, types, span })
    }

    /// Parse a dotted identifier path
    pub(super) fn qualified_name(&mut self) -> Result<QualifiedName, ParseError> {
        let mut segments = vec![self.identifier()?];
        while self.match_token(TokenType::Dot) {
            segments.push(self.identifier()?);
        }
        Ok(QualifiedName::new(segments))
    }

    /// Require an identifier token and return its lexeme
    pub(super) fn identifier(&mut self) -> Result<String, ParseError> {
        if self.check(TokenType::Identifier) {
            let name = self.current.lexeme.clone();
            self.advance();
            Ok(name)
        } else {
            Err(ParseError::new(
                ParserError::ExpectedIdentifier {
                    span: self.current.span.into(),
                },
                self.current.span,
            ))
        }
    }

    /// Take lexer errors (for diagnostic rendering)
    pub fn take_lexer_errors(&mut self) -> Vec<LexerError> {
        self.lexer.take_errors()
    }

    /// Advance to the next token
    pub(super) fn advance(&mut self) {
        self.previous = std::mem::replace(&mut self.current, self.lexer.next_token());
    }

    /// Check if the current token matches the given type
    pub(super) fn check(&self, ty: TokenType) -> bool {
        self.current.ty == ty
    }

    /// Consume the current token if it matches, otherwise return false
    pub(super) fn match_token(&mut self, ty: TokenType) -> bool {
        if self.check(ty) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Require a token of the given type, or return an error
    pub(super) fn consume(&mut self, ty: TokenType, msg: &str) -> Result<(), ParseError> {
        if self.check(ty) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::new(
                ParserError::ExpectedToken {
                    expected: msg.to_string(),
                    found: self.current.ty.as_str().to_string(),
                    span: self.current.span.into(),
                },
                self.current.span,
            ))
        }
    }

    /// Create an unexpected token error at the current position
    pub(super) fn unexpected_token_error(&self) -> ParseError {
        ParseError::new(
            ParserError::UnexpectedToken {
                token: self.current.ty.as_str().to_string(),
                span: self.current.span.into(),
            },
            self.current.span,
        )
    }
}
