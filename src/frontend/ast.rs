// src/frontend/ast.rs

use crate::frontend::Span;

/// A dotted identifier path like `System.Collections.Generic`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    pub segments: Vec<String>,
}

impl QualifiedName {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Build a path from a single segment
    pub fn single(segment: impl Into<String>) -> Self {
        Self {
            segments: vec![segment.into()],
        }
    }

    /// Split a dotted string into a path
    pub fn from_dotted(path: &str) -> Self {
        Self {
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    /// Last segment of the path
    pub fn last(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }
}

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// A single parsed or generated source file
#[derive(Debug, Clone)]
pub struct CompilationUnit {
    pub usings: Vec<UsingDirective>,
    pub namespaces: Vec<NamespaceDecl>,
    /// Types declared outside any namespace (the registry unit uses this)
    pub types: Vec<TypeDecl>,
    pub span: Span,
}

/// Import directive: `using Some.Namespace;`
#[derive(Debug, Clone)]
pub struct UsingDirective {
    pub path: QualifiedName,
    pub span: Span,
}

/// Block-scoped namespace declaration
#[derive(Debug, Clone)]
pub struct NamespaceDecl {
    pub name: QualifiedName,
    pub types: Vec<TypeDecl>,
    pub span: Span,
}

/// Type declarations
#[derive(Debug, Clone)]
pub enum TypeDecl {
    Interface(InterfaceDecl),
    Class(ClassDecl),
}

/// Interface declaration
#[derive(Debug, Clone)]
pub struct InterfaceDecl {
    pub name: String,
    pub bases: Vec<TypeExpr>,
    pub members: Vec<MemberDecl>,
    pub span: Span,
}

/// Class declaration. Generated mocks keep the base class in slot 0 and the
/// mocked interface in slot 1 of `bases`.
#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub name: String,
    pub public: bool,
    pub bases: Vec<TypeExpr>,
    pub members: Vec<MemberDecl>,
    pub span: Span,
}

/// Member declarations
#[derive(Debug, Clone)]
pub enum MemberDecl {
    Method(MethodDecl),
    Property(PropertyDecl),
    Indexer(IndexerDecl),
}

/// Method declaration or explicit interface implementation
#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub name: String,
    pub public: bool,
    pub return_type: TypeExpr,
    pub params: Vec<Param>,
    /// `IWidget.Frob` style qualification on implementations
    pub explicit_interface: Option<QualifiedName>,
    pub body: Option<Block>,
    pub span: Span,
}

/// Property declaration
#[derive(Debug, Clone)]
pub struct PropertyDecl {
    pub name: String,
    pub ty: TypeExpr,
    pub explicit_interface: Option<QualifiedName>,
    pub getter: Accessor,
    pub setter: Option<Accessor>,
    pub span: Span,
}

/// Indexer declaration: `T this[TIndex index]`
#[derive(Debug, Clone)]
pub struct IndexerDecl {
    pub element_type: TypeExpr,
    pub params: Vec<Param>,
    pub explicit_interface: Option<QualifiedName>,
    pub getter: Accessor,
    pub setter: Option<Accessor>,
    pub span: Span,
}

/// Property or indexer accessor; `body` is `None` for declarations
#[derive(Debug, Clone)]
pub struct Accessor {
    pub body: Option<Block>,
}

/// Method or indexer parameter
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: TypeExpr,
    pub span: Span,
}

/// Type expression
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    Void,
    Predefined(PredefinedType),
    Named {
        name: QualifiedName,
        type_args: Vec<TypeExpr>,
    },
    Array(Box<TypeExpr>),
}

impl TypeExpr {
    /// Build a named type with no type arguments
    pub fn named(name: QualifiedName) -> Self {
        Self::Named {
            name,
            type_args: Vec::new(),
        }
    }
}

/// Predefined C# type keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredefinedType {
    Bool,
    Byte,
    SByte,
    Char,
    Decimal,
    Double,
    Float,
    Int,
    UInt,
    Long,
    ULong,
    Short,
    UShort,
    Object,
    String,
}

impl PredefinedType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::SByte => "sbyte",
            Self::Char => "char",
            Self::Decimal => "decimal",
            Self::Double => "double",
            Self::Float => "float",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Long => "long",
            Self::ULong => "ulong",
            Self::Short => "short",
            Self::UShort => "ushort",
            Self::Object => "object",
            Self::String => "string",
        }
    }
}

/// Block of statements (generated member bodies)
#[derive(Debug, Clone)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

/// Statements
#[derive(Debug, Clone)]
pub enum Stmt {
    Expr(Expr),
    Return(Expr),
}

/// Expressions (the subset generated bodies need)
#[derive(Debug, Clone)]
pub enum Expr {
    Ident(String),
    Call(CallExpr),
    /// `new object[] { ... }`
    ObjectArray(Vec<Expr>),
}

/// Invocation of a member on a named receiver
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub receiver: String,
    pub method: String,
    pub type_args: Vec<TypeExpr>,
    pub args: Vec<Argument>,
}

/// Call argument with optional label: `arguments: new object[] { a }`
#[derive(Debug, Clone)]
pub struct Argument {
    pub label: Option<String>,
    pub value: Expr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_name_display_joins_segments() {
        let name = QualifiedName::from_dotted("Acme.Billing.Contracts");
        assert_eq!(name.to_string(), "Acme.Billing.Contracts");
        assert_eq!(name.segments.len(), 3);
        assert_eq!(name.last(), "Contracts");
    }

    #[test]
    fn qualified_name_single_segment() {
        let name = QualifiedName::single("IWidget");
        assert_eq!(name.to_string(), "IWidget");
        assert_eq!(name.last(), "IWidget");
    }
}
