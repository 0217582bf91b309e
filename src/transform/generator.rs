// src/transform/generator.rs
//
// Interface-to-mock rewrite. Takes the compilation unit declaring one
// interface and produces the unit declaring its companion mock class, whose
// members forward every invocation to the substitution context.

use crate::convention;
use crate::errors::TransformError;
use crate::fmt;
use crate::frontend::Span;
use crate::frontend::ast::*;
use crate::transform::identifiers;

/// Configuration for mock generation. Defaults follow the shared convention
/// table.
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Suffix appended to the stripped interface name
    pub suffix: String,
    /// Namespace segment appended to the original namespace
    pub mocks_segment: String,
    /// Import that brings the routing runtime into scope
    pub runtime_import: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            suffix: convention::MOCK_SUFFIX.to_string(),
            mocks_segment: convention::MOCKS_SEGMENT.to_string(),
            runtime_import: convention::RUNTIME_NAMESPACE.to_string(),
        }
    }
}

/// Rewrites a parsed interface unit into its companion mock-class unit.
pub struct MockGenerator {
    config: MockConfig,
}

impl MockGenerator {
    /// Create a generator with the convention defaults.
    pub fn new() -> Self {
        Self {
            config: MockConfig::default(),
        }
    }

    /// Create a generator with explicit configuration. Blank name parts are
    /// rejected here so later generation cannot produce broken identifiers.
    pub fn with_config(config: MockConfig) -> Result<Self, TransformError> {
        if config.suffix.trim().is_empty() {
            return Err(TransformError::BlankIdentifier {
                context: "mock name suffix".to_string(),
            });
        }
        if config.mocks_segment.trim().is_empty() {
            return Err(TransformError::BlankIdentifier {
                context: "mocks namespace segment".to_string(),
            });
        }
        if config.runtime_import.trim().is_empty() {
            return Err(TransformError::BlankIdentifier {
                context: "runtime import path".to_string(),
            });
        }
        Ok(Self { config })
    }

    /// Generate the mock unit for the single interface declared in `unit`.
    #[tracing::instrument(skip(self, unit))]
    pub fn generate_mock(&self, unit: &CompilationUnit) -> Result<CompilationUnit, TransformError> {
        let namespace = identifiers::single_namespace(unit)?;
        let iface = identifiers::single_interface(unit)?;

        tracing::debug!(
            interface = %iface.name,
            namespace = %namespace.name,
            members = iface.members.len(),
            "generating mock"
        );

        let mock_namespace = identifiers::append(&namespace.name, &self.config.mocks_segment)?;
        let usings = self.create_usings(unit, &namespace.name)?;
        let class = self.create_mock_class(iface)?;

        let dummy_span = Span::default();
        Ok(CompilationUnit {
            usings,
            namespaces: vec![NamespaceDecl {
                name: mock_namespace,
                types: vec![TypeDecl::Class(class)],
                span: dummy_span,
            }],
            types: Vec::new(),
            span: dummy_span,
        })
    }

    /// Generate the mock unit and render it to canonical source text.
    pub fn generate_mock_source(&self, unit: &CompilationUnit) -> Result<String, TransformError> {
        let mock = self.generate_mock(unit)?;
        Ok(fmt::render_unit(&mock))
    }

    /// Carry the original usings and add the runtime import plus an import
    /// of the original namespace, skipping paths already present.
    fn create_usings(
        &self,
        unit: &CompilationUnit,
        original_namespace: &QualifiedName,
    ) -> Result<Vec<UsingDirective>, TransformError> {
        let dummy_span = Span::default();
        let mut usings = unit.usings.clone();

        let runtime = identifiers::qualified(&self.config.runtime_import)?;
        if !usings.iter().any(|using| using.path == runtime) {
            usings.push(UsingDirective {
                path: runtime,
                span: dummy_span,
            });
        }

        if !usings.iter().any(|using| using.path == *original_namespace) {
            usings.push(UsingDirective {
                path: original_namespace.clone(),
                span: dummy_span,
            });
        }

        Ok(usings)
    }

    fn create_mock_class(&self, iface: &InterfaceDecl) -> Result<ClassDecl, TransformError> {
        let name = identifiers::mock_name(&iface.name, &self.config.suffix)?;

        let members = iface
            .members
            .iter()
            .map(|member| self.create_member(member, &iface.name))
            .collect();

        let dummy_span = Span::default();
        Ok(ClassDecl {
            name,
            public: true,
            // Base order is load-bearing: slot 0 the base class, slot 1 the
            // mocked interface. Registry derivation reads slot 1 back.
            bases: vec![
                TypeExpr::named(QualifiedName::single(convention::MOCK_BASE)),
                TypeExpr::named(QualifiedName::single(iface.name.clone())),
            ],
            members,
            span: dummy_span,
        })
    }

    fn create_member(&self, member: &MemberDecl, interface: &str) -> MemberDecl {
        match member {
            MemberDecl::Method(method) => {
                MemberDecl::Method(self.create_method_impl(method, interface))
            }
            MemberDecl::Property(prop) => {
                MemberDecl::Property(self.create_property_impl(prop, interface))
            }
            MemberDecl::Indexer(indexer) => {
                MemberDecl::Indexer(self.create_indexer_impl(indexer, interface))
            }
        }
    }

    /// Method implementation: forward to `Method` (void) or `Method<T>`
    /// (value-returning), packing parameters into an `arguments` array.
    fn create_method_impl(&self, method: &MethodDecl, interface: &str) -> MethodDecl {
        let call = CallExpr {
            receiver: convention::SUBSTITUTION_CONTEXT.to_string(),
            method: convention::METHOD.to_string(),
            type_args: match &method.return_type {
                TypeExpr::Void => Vec::new(),
                ty => vec![ty.clone()],
            },
            args: method_arguments(&method.params),
        };

        let stmt = if method.return_type == TypeExpr::Void {
            Stmt::Expr(Expr::Call(call))
        } else {
            Stmt::Return(Expr::Call(call))
        };

        let dummy_span = Span::default();
        MethodDecl {
            name: method.name.clone(),
            public: false,
            return_type: method.return_type.clone(),
            params: method.params.clone(),
            explicit_interface: Some(QualifiedName::single(interface)),
            body: Some(Block { stmts: vec![stmt] }),
            span: dummy_span,
        }
    }

    /// Property implementation: getter returns `GetProperty<T>()`, setter
    /// (when the interface declares one) forwards `value` to
    /// `SetProperty<T>`.
    fn create_property_impl(&self, prop: &PropertyDecl, interface: &str) -> PropertyDecl {
        let getter = Accessor {
            body: Some(Block {
                stmts: vec![Stmt::Return(Expr::Call(CallExpr {
                    receiver: convention::SUBSTITUTION_CONTEXT.to_string(),
                    method: convention::GET_PROPERTY.to_string(),
                    type_args: vec![prop.ty.clone()],
                    args: Vec::new(),
                }))],
            }),
        };

        let setter = prop.setter.as_ref().map(|_| Accessor {
            body: Some(Block {
                stmts: vec![Stmt::Expr(Expr::Call(CallExpr {
                    receiver: convention::SUBSTITUTION_CONTEXT.to_string(),
                    method: convention::SET_PROPERTY.to_string(),
                    type_args: vec![prop.ty.clone()],
                    args: vec![Argument {
                        label: None,
                        value: Expr::Ident(convention::VALUE_IDENT.to_string()),
                    }],
                }))],
            }),
        });

        let dummy_span = Span::default();
        PropertyDecl {
            name: prop.name.clone(),
            ty: prop.ty.clone(),
            explicit_interface: Some(QualifiedName::single(interface)),
            getter,
            setter,
            span: dummy_span,
        }
    }

    /// Indexer implementation: reads go to `GetIndex<TReturn, TIndex>`,
    /// writes to `SetIndex<TIndex, TValue>`. The type-argument order flips
    /// between the two. Multi-parameter indexers forward the first
    /// parameter's type together with all index values.
    fn create_indexer_impl(&self, indexer: &IndexerDecl, interface: &str) -> IndexerDecl {
        // Parser guarantees at least one index parameter
        let index_type = indexer.params[0].ty.clone();
        let index_args: Vec<Argument> = indexer
            .params
            .iter()
            .map(|param| Argument {
                label: None,
                value: Expr::Ident(param.name.clone()),
            })
            .collect();

        let getter = Accessor {
            body: Some(Block {
                stmts: vec![Stmt::Return(Expr::Call(CallExpr {
                    receiver: convention::SUBSTITUTION_CONTEXT.to_string(),
                    method: convention::GET_INDEX.to_string(),
                    type_args: vec![indexer.element_type.clone(), index_type.clone()],
                    args: index_args.clone(),
                }))],
            }),
        };

        let setter = indexer.setter.as_ref().map(|_| {
            let mut args = index_args.clone();
            args.push(Argument {
                label: None,
                value: Expr::Ident(convention::VALUE_IDENT.to_string()),
            });
            Accessor {
                body: Some(Block {
                    stmts: vec![Stmt::Expr(Expr::Call(CallExpr {
                        receiver: convention::SUBSTITUTION_CONTEXT.to_string(),
                        method: convention::SET_INDEX.to_string(),
                        type_args: vec![index_type.clone(), indexer.element_type.clone()],
                        args,
                    }))],
                }),
            }
        });

        let dummy_span = Span::default();
        IndexerDecl {
            element_type: indexer.element_type.clone(),
            params: indexer.params.clone(),
            explicit_interface: Some(QualifiedName::single(interface)),
            getter,
            setter,
            span: dummy_span,
        }
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Pack forwarded parameters as `arguments: new object[] { ... }`, omitted
/// entirely for parameterless methods.
fn method_arguments(params: &[Param]) -> Vec<Argument> {
    if params.is_empty() {
        return Vec::new();
    }

    let values = params
        .iter()
        .map(|param| Expr::Ident(param.name.clone()))
        .collect();

    vec![Argument {
        label: Some(convention::ARGUMENTS_LABEL.to_string()),
        value: Expr::ObjectArray(values),
    }]
}
