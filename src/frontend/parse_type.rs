// src/frontend/parse_type.rs
//
// Type parsing: predefined types, qualified named types with generic
// arguments, array suffixes, and member parameters.

use super::TokenType;
use super::ast::{Param, PredefinedType, TypeExpr};
use super::parser::{ParseError, Parser};
use crate::errors::ParserError;

impl<'src> Parser<'src> {
    /// Parse a member return type, which may be `void`
    pub(super) fn parse_return_type(&mut self) -> Result<TypeExpr, ParseError> {
        if self.match_token(TokenType::KwVoid) {
            return Ok(TypeExpr::Void);
        }
        self.parse_type()
    }

    /// Parse a type expression
    pub(super) fn parse_type(&mut self) -> Result<TypeExpr, ParseError> {
        let mut ty = if let Some(predefined) = predefined_type(self.current.ty) {
            self.advance();
            TypeExpr::Predefined(predefined)
        } else if self.check(TokenType::Identifier) {
            let name = self.qualified_name()?;

            let type_args = if self.match_token(TokenType::Lt) {
                let mut args = Vec::new();
                loop {
                    args.push(self.parse_type()?);
                    if !self.match_token(TokenType::Comma) {
                        break;
                    }
                }
                self.consume(TokenType::Gt, "'>' to close type arguments")?;
                args
            } else {
                Vec::new()
            };

            TypeExpr::Named { name, type_args }
        } else {
            return Err(ParseError::new(
                ParserError::ExpectedType {
                    span: self.current.span.into(),
                },
                self.current.span,
            ));
        };

        // Array suffixes, innermost first: int[][] is array of int[]
        while self.check(TokenType::LBracket) {
            self.advance();
            self.consume(TokenType::RBracket, "']' in array type")?;
            ty = TypeExpr::Array(Box::new(ty));
        }

        Ok(ty)
    }

    /// Parse a single parameter: `Type name`
    pub(super) fn parse_param(&mut self) -> Result<Param, ParseError> {
        if matches!(
            self.current.ty,
            TokenType::KwRef | TokenType::KwOut | TokenType::KwParams
        ) {
            return Err(ParseError::new(
                ParserError::ParameterModifier {
                    modifier: self.current.lexeme.clone(),
                    span: self.current.span.into(),
                },
                self.current.span,
            ));
        }

        let start_span = self.current.span;
        let ty = self.parse_type()?;
        let name = self.identifier()?;
        let span = start_span.merge(self.previous.span);

        Ok(Param { name, ty, span })
    }
}

/// Map a type keyword token to its predefined type
fn predefined_type(ty: TokenType) -> Option<PredefinedType> {
    match ty {
        TokenType::KwBool => Some(PredefinedType::Bool),
        TokenType::KwByte => Some(PredefinedType::Byte),
        TokenType::KwSByte => Some(PredefinedType::SByte),
        TokenType::KwChar => Some(PredefinedType::Char),
        TokenType::KwDecimal => Some(PredefinedType::Decimal),
        TokenType::KwDouble => Some(PredefinedType::Double),
        TokenType::KwFloat => Some(PredefinedType::Float),
        TokenType::KwInt => Some(PredefinedType::Int),
        TokenType::KwUInt => Some(PredefinedType::UInt),
        TokenType::KwLong => Some(PredefinedType::Long),
        TokenType::KwULong => Some(PredefinedType::ULong),
        TokenType::KwShort => Some(PredefinedType::Short),
        TokenType::KwUShort => Some(PredefinedType::UShort),
        TokenType::KwObject => Some(PredefinedType::Object),
        TokenType::KwString => Some(PredefinedType::String),
        _ => None,
    }
}
