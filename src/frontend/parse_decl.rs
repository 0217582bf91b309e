// src/frontend/parse_decl.rs
//
// Declaration parsing: interfaces and their method, property and indexer members

use super::ast::*;
use super::parser::{ParseError, Parser};
use super::token::{Span, TokenType};
use crate::errors::ParserError;

impl<'src> Parser<'src> {
    pub(super) fn type_decl(&mut self) -> Result<TypeDecl, ParseError> {
        self.match_token(TokenType::KwPublic);

        if self.check(TokenType::KwInterface) {
            Ok(TypeDecl::Interface(self.interface_decl()?))
        } else {
            Err(self.unexpected_token_error())
        }
    }

    fn interface_decl(&mut self) -> Result<InterfaceDecl, ParseError> {
        let start_span = self.current.span;
        self.advance(); // consume 'interface'

        let name = self.identifier()?;

        if self.check(TokenType::Lt) {
            return Err(ParseError::new(
                ParserError::GenericInterface {
                    name,
                    span: self.current.span.into(),
                },
                self.current.span,
            ));
        }

        let mut bases = Vec::new();
        if self.match_token(TokenType::Colon) {
            loop {
                bases.push(self.parse_type()?);
                if !self.match_token(TokenType::Comma) {
                    break;
                }
            }
        }

        self.consume(TokenType::LBrace, "'{' after interface header")?;

        let mut members = Vec::new();
        while !self.check(TokenType::RBrace) && !self.check(TokenType::Eof) {
            members.push(self.member_decl()?);
        }

        self.consume(TokenType::RBrace, "'}' to close interface body")?;
        let span = start_span.merge(self.previous.span);

        Ok(InterfaceDecl {
            name,
            bases,
            members,
            span,
        })
    }

    fn member_decl(&mut self) -> Result<MemberDecl, ParseError> {
        let start_span = self.current.span;
        let ty = self.parse_return_type()?;

        if self.check(TokenType::KwThis) {
            if ty == TypeExpr::Void {
                return Err(ParseError::new(
                    ParserError::ExpectedType {
                        span: start_span.into(),
                    },
                    start_span,
                ));
            }
            self.advance(); // consume 'this'
            return self.indexer_rest(ty, start_span);
        }

        let name = self.identifier()?;

        if self.check(TokenType::LParen) {
            self.method_rest(name, ty, start_span)
        } else if self.check(TokenType::LBrace) {
            if ty == TypeExpr::Void {
                return Err(ParseError::new(
                    ParserError::ExpectedType {
                        span: start_span.into(),
                    },
                    start_span,
                ));
            }
            self.property_rest(name, ty, start_span)
        } else {
            Err(ParseError::new(
                ParserError::ExpectedToken {
                    expected: "'(' or '{' after member name".to_string(),
                    found: self.current.ty.as_str().to_string(),
                    span: self.current.span.into(),
                },
                self.current.span,
            ))
        }
    }

    fn method_rest(
        &mut self,
        name: String,
        return_type: TypeExpr,
        start_span: Span,
    ) -> Result<MemberDecl, ParseError> {
        self.advance(); // consume '('

        let mut params = Vec::new();
        if !self.check(TokenType::RParen) {
            loop {
                params.push(self.parse_param()?);
                if !self.match_token(TokenType::Comma) {
                    break;
                }
            }
        }

        self.consume(TokenType::RParen, "')' after parameters")?;

        if self.check(TokenType::LBrace) {
            return Err(ParseError::new(
                ParserError::DefaultMemberBody {
                    span: self.current.span.into(),
                },
                self.current.span,
            ));
        }
        self.consume(TokenType::Semicolon, "';' after method signature")?;

        let span = start_span.merge(self.previous.span);
        Ok(MemberDecl::Method(MethodDecl {
            name,
            public: false,
            return_type,
            params,
            explicit_interface: None,
            body: None,
            span,
        }))
    }

    fn property_rest(
        &mut self,
        name: String,
        ty: TypeExpr,
        start_span: Span,
    ) -> Result<MemberDecl, ParseError> {
        let (getter, setter) = self.accessor_list(&name, start_span)?;

        let span = start_span.merge(self.previous.span);
        Ok(MemberDecl::Property(PropertyDecl {
            name,
            ty,
            explicit_interface: None,
            getter,
            setter,
            span,
        }))
    }

    fn indexer_rest(&mut self, element_type: TypeExpr, start_span: Span) -> Result<MemberDecl, ParseError> {
        self.consume(TokenType::LBracket, "'[' after 'this'")?;

        let mut params = Vec::new();
        loop {
            params.push(self.parse_param()?);
            if !self.match_token(TokenType::Comma) {
                break;
            }
        }

        self.consume(TokenType::RBracket, "']' after index parameters")?;

        let (getter, setter) = self.accessor_list("this[]", start_span)?;

        let span = start_span.merge(self.previous.span);
        Ok(MemberDecl::Indexer(IndexerDecl {
            element_type,
            params,
            explicit_interface: None,
            getter,
            setter,
            span,
        }))
    }

    /// Parse `{ get; }` or `{ get; set; }`, requiring a getter
    fn accessor_list(
        &mut self,
        owner: &str,
        header_span: Span,
    ) -> Result<(Accessor, Option<Accessor>), ParseError> {
        self.consume(TokenType::LBrace, "'{' to open accessor list")?;

        if self.check(TokenType::RBrace) {
            return Err(ParseError::new(
                ParserError::ExpectedToken {
                    expected: "'get' accessor".to_string(),
                    found: self.current.ty.as_str().to_string(),
                    span: self.current.span.into(),
                },
                self.current.span,
            ));
        }

        let mut getter = None;
        let mut setter = None;
        loop {
            if self.check(TokenType::KwGet) {
                if getter.is_some() {
                    return Err(self.unexpected_token_error());
                }
                self.advance();
                self.reject_accessor_body()?;
                self.consume(TokenType::Semicolon, "';' after 'get'")?;
                getter = Some(Accessor { body: None });
            } else if self.check(TokenType::KwSet) {
                if setter.is_some() {
                    return Err(self.unexpected_token_error());
                }
                self.advance();
                self.reject_accessor_body()?;
                self.consume(TokenType::Semicolon, "';' after 'set'")?;
                setter = Some(Accessor { body: None });
            } else {
                break;
            }
        }

        self.consume(TokenType::RBrace, "'}' to close accessor list")?;

        let Some(getter) = getter else {
            return Err(ParseError::new(
                ParserError::SetOnlyProperty {
                    name: owner.to_string(),
                    span: header_span.into(),
                },
                header_span,
            ));
        };

        Ok((getter, setter))
    }

    fn reject_accessor_body(&mut self) -> Result<(), ParseError> {
        if self.check(TokenType::LBrace) {
            return Err(ParseError::new(
                ParserError::DefaultMemberBody {
                    span: self.current.span.into(),
                },
                self.current.span,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_interface(source: &str) -> InterfaceDecl {
        let mut parser = Parser::new(source);
        let unit = parser.parse_unit().expect("parse failed");
        match unit.types.into_iter().next() {
            Some(TypeDecl::Interface(iface)) => iface,
            other => panic!("expected interface, got {:?}", other),
        }
    }

    fn parse_error(source: &str) -> ParserError {
        let mut parser = Parser::new(source);
        parser.parse_unit().unwrap_err().error
    }

    #[test]
    fn parse_void_method() {
        let iface = parse_interface("public interface IWidget { void Frob(); }");
        assert_eq!(iface.name, "IWidget");
        assert_eq!(iface.members.len(), 1);

        let MemberDecl::Method(method) = &iface.members[0] else {
            panic!("expected method");
        };
        assert_eq!(method.name, "Frob");
        assert_eq!(method.return_type, TypeExpr::Void);
        assert!(method.params.is_empty());
        assert!(method.body.is_none());
        assert!(method.explicit_interface.is_none());
    }

    #[test]
    fn parse_method_with_params() {
        let iface =
            parse_interface("interface ICalc { int Add(int left, int right); }");
        let MemberDecl::Method(method) = &iface.members[0] else {
            panic!("expected method");
        };
        assert_eq!(method.params.len(), 2);
        assert_eq!(method.params[0].name, "left");
        assert_eq!(method.params[0].ty, TypeExpr::Predefined(PredefinedType::Int));
        assert_eq!(method.params[1].name, "right");
    }

    #[test]
    fn parse_getter_only_property() {
        let iface = parse_interface("interface INamed { string Name { get; } }");
        let MemberDecl::Property(prop) = &iface.members[0] else {
            panic!("expected property");
        };
        assert_eq!(prop.name, "Name");
        assert!(prop.setter.is_none());
    }

    #[test]
    fn parse_read_write_property() {
        let iface = parse_interface("interface INamed { string Name { get; set; } }");
        let MemberDecl::Property(prop) = &iface.members[0] else {
            panic!("expected property");
        };
        assert!(prop.setter.is_some());
    }

    #[test]
    fn parse_indexer() {
        let iface =
            parse_interface("interface IBag { string this[int index] { get; set; } }");
        let MemberDecl::Indexer(indexer) = &iface.members[0] else {
            panic!("expected indexer");
        };
        assert_eq!(
            indexer.element_type,
            TypeExpr::Predefined(PredefinedType::String)
        );
        assert_eq!(indexer.params.len(), 1);
        assert_eq!(indexer.params[0].name, "index");
        assert!(indexer.setter.is_some());
    }

    #[test]
    fn parse_interface_with_base_list() {
        let iface = parse_interface("interface IWidget : IDisposable, IGadget { }");
        assert_eq!(iface.bases.len(), 2);
    }

    #[test]
    fn reject_generic_interface() {
        let err = parse_error("interface IRepository<T> { }");
        assert!(matches!(
            err,
            ParserError::GenericInterface { ref name, .. } if name == "IRepository"
        ));
    }

    #[test]
    fn reject_set_only_property() {
        let err = parse_error("interface INamed { string Name { set; } }");
        assert!(matches!(
            err,
            ParserError::SetOnlyProperty { ref name, .. } if name == "Name"
        ));
    }

    #[test]
    fn reject_empty_accessor_list() {
        let err = parse_error("interface INamed { string Name { } }");
        assert!(matches!(err, ParserError::ExpectedToken { .. }));
    }

    #[test]
    fn reject_method_body() {
        let err = parse_error("interface IWidget { void Frob() { } }");
        assert!(matches!(err, ParserError::DefaultMemberBody { .. }));
    }

    #[test]
    fn reject_void_property() {
        let err = parse_error("interface IWidget { void Name { get; } }");
        assert!(matches!(err, ParserError::ExpectedType { .. }));
    }

    #[test]
    fn reject_class_declaration() {
        let err = parse_error("public class Widget { }");
        assert!(matches!(err, ParserError::UnexpectedToken { .. }));
    }

    #[test]
    fn set_then_get_still_counts_getter() {
        let iface = parse_interface("interface INamed { string Name { set; get; } }");
        let MemberDecl::Property(prop) = &iface.members[0] else {
            panic!("expected property");
        };
        assert!(prop.setter.is_some());
    }
}
