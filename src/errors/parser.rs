// src/errors/parser.rs
//! Parser errors (E1xxx).

#![allow(unused_assignments)] // False positives from thiserror derive

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum ParserError {
    #[error("expected '{expected}', found '{found}'")]
    #[diagnostic(code(E1001))]
    ExpectedToken {
        expected: String,
        found: String,
        #[label("unexpected token")]
        span: SourceSpan,
    },

    #[error("unexpected token '{token}'")]
    #[diagnostic(code(E1002))]
    UnexpectedToken {
        token: String,
        #[label("unexpected")]
        span: SourceSpan,
    },

    #[error("expected identifier")]
    #[diagnostic(code(E1003))]
    ExpectedIdentifier {
        #[label("expected identifier")]
        span: SourceSpan,
    },

    #[error("expected type")]
    #[diagnostic(code(E1004))]
    ExpectedType {
        #[label("expected type")]
        span: SourceSpan,
    },

    #[error("generic interface '{name}' cannot be mocked")]
    #[diagnostic(
        code(E1005),
        help("mock generation covers non-generic interface declarations only")
    )]
    GenericInterface {
        name: String,
        #[label("type parameter list here")]
        span: SourceSpan,
    },

    #[error("property '{name}' declares a setter but no getter")]
    #[diagnostic(code(E1006), help("declare 'get;' before 'set;'"))]
    SetOnlyProperty {
        name: String,
        #[label("missing getter")]
        span: SourceSpan,
    },

    #[error("parameter modifier '{modifier}' is not supported")]
    #[diagnostic(
        code(E1007),
        help("members with 'ref', 'out' or 'params' parameters cannot be forwarded")
    )]
    ParameterModifier {
        modifier: String,
        #[label("unsupported modifier")]
        span: SourceSpan,
    },

    #[error("interface member has a body")]
    #[diagnostic(
        code(E1008),
        help("default member implementations are not part of the declaration subset")
    )]
    DefaultMemberBody {
        #[label("body starts here")]
        span: SourceSpan,
    },
}
