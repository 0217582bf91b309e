// src/errors/transform.rs
//! Mock transformation errors (E2xxx).

#![allow(unused_assignments)] // False positives from thiserror derive

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum TransformError {
    #[error("compilation unit contains no interface declaration")]
    #[diagnostic(
        code(E2001),
        help("mock generation takes one unit per interface; pass the unit that declares it")
    )]
    MissingInterface {
        #[label("no interface in this unit")]
        span: SourceSpan,
    },

    #[error("compilation unit contains {count} interface declarations")]
    #[diagnostic(code(E2002), help("split the interfaces into one unit each"))]
    MultipleInterfaces {
        count: usize,
        #[label("second interface here")]
        span: SourceSpan,
    },

    #[error("compilation unit contains no namespace declaration")]
    #[diagnostic(code(E2003))]
    MissingNamespace {
        #[label("no namespace in this unit")]
        span: SourceSpan,
    },

    #[error("compilation unit contains {count} namespace declarations")]
    #[diagnostic(code(E2004))]
    MultipleNamespaces {
        count: usize,
        #[label("second namespace here")]
        span: SourceSpan,
    },

    #[error("blank identifier in {context}")]
    #[diagnostic(code(E2005), help("generated names are built from non-empty parts"))]
    BlankIdentifier { context: String },

    #[error("class '{class}' has no base interface")]
    #[diagnostic(
        code(E2006),
        help("generated mocks list the base class first and the mocked interface second")
    )]
    MissingBaseInterface {
        class: String,
        #[label("base list here")]
        span: SourceSpan,
    },

    #[error("no class declaration found in namespace '{namespace}'")]
    #[diagnostic(code(E2007))]
    MissingMockClass { namespace: String },

    #[error("namespace contains {count} class declarations, expected one mock class")]
    #[diagnostic(code(E2008))]
    MultipleMockClasses {
        count: usize,
        #[label("second class here")]
        span: SourceSpan,
    },

    #[error("namespace '{namespace}' does not end with the generated mocks segment")]
    #[diagnostic(
        code(E2009),
        help("registry entries are derived from units produced by the mock generator")
    )]
    MissingMocksSegment { namespace: String },
}
