// src/transform/registry.rs
//
// Registry derivation and emission. Maps generated mock units back to
// (interface, mock) pairs and emits the registration class that wires every
// pair into an injector.

use crate::convention;
use crate::errors::TransformError;
use crate::fmt;
use crate::frontend::Span;
use crate::frontend::ast::*;
use crate::transform::identifiers;

/// One interface-to-mock registration pair, both names fully qualified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub interface: QualifiedName,
    pub mock: QualifiedName,
}

/// Derive registration pairs from generated mock units, preserving input
/// order.
pub fn registry_entries(units: &[CompilationUnit]) -> Result<Vec<RegistryEntry>, TransformError> {
    let mut entries = Vec::with_capacity(units.len());
    for unit in units {
        entries.push(derive_entry(unit)?);
    }
    Ok(entries)
}

fn derive_entry(unit: &CompilationUnit) -> Result<RegistryEntry, TransformError> {
    let namespace = identifiers::single_namespace(unit)?;
    let class = identifiers::single_class(namespace)?;
    let base = identifiers::base_interface(class)?;

    // The mock namespace is the interface namespace plus the mocks segment;
    // stripping the segment recovers where the interface lives.
    let segments = &namespace.name.segments;
    if segments.last().map(String::as_str) != Some(convention::MOCKS_SEGMENT) {
        return Err(TransformError::MissingMocksSegment {
            namespace: namespace.name.to_string(),
        });
    }
    let interface_namespace = QualifiedName::new(segments[..segments.len() - 1].to_vec());

    let interface_name = match base {
        TypeExpr::Named { name, .. } => name.last().to_string(),
        _ => {
            return Err(TransformError::MissingBaseInterface {
                class: class.name.clone(),
                span: class.span.into(),
            });
        }
    };

    let interface = identifiers::append(&interface_namespace, &interface_name)?;
    let mock = identifiers::append(&namespace.name, &class.name)?;

    Ok(RegistryEntry { interface, mock })
}

/// Generate the registration unit: one `RegisterType` statement per mock
/// pair, in input order.
#[tracing::instrument(skip(units), fields(units = units.len()))]
pub fn generate_registry(units: &[CompilationUnit]) -> Result<CompilationUnit, TransformError> {
    let entries = registry_entries(units)?;
    tracing::debug!(entries = entries.len(), "generating registry");

    let dummy_span = Span::default();

    let stmts = entries
        .iter()
        .map(|entry| {
            Stmt::Expr(Expr::Call(CallExpr {
                receiver: convention::INJECTOR_PARAM.to_string(),
                method: convention::REGISTER_TYPE.to_string(),
                type_args: vec![
                    TypeExpr::named(entry.interface.clone()),
                    TypeExpr::named(entry.mock.clone()),
                ],
                args: Vec::new(),
            }))
        })
        .collect();

    let register = MethodDecl {
        name: convention::REGISTRY_METHOD.to_string(),
        public: true,
        return_type: TypeExpr::Void,
        params: vec![Param {
            name: convention::INJECTOR_PARAM.to_string(),
            ty: TypeExpr::named(QualifiedName::single(convention::INJECTOR_TYPE)),
            span: dummy_span,
        }],
        explicit_interface: None,
        body: Some(Block { stmts }),
        span: dummy_span,
    };

    let class = ClassDecl {
        name: convention::REGISTRY_CLASS.to_string(),
        public: true,
        bases: Vec::new(),
        members: vec![MemberDecl::Method(register)],
        span: dummy_span,
    };

    Ok(CompilationUnit {
        usings: vec![UsingDirective {
            path: QualifiedName::from_dotted(convention::RUNTIME_NAMESPACE),
            span: dummy_span,
        }],
        namespaces: Vec::new(),
        types: vec![TypeDecl::Class(class)],
        span: dummy_span,
    })
}

/// Generate the registration unit and render it to canonical source text.
pub fn generate_registry_source(units: &[CompilationUnit]) -> Result<String, TransformError> {
    let registry = generate_registry(units)?;
    Ok(fmt::render_unit(&registry))
}
