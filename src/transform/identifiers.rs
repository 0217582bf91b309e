// src/transform/identifiers.rs
//
// Identifier and name utilities shared by the mock and registry generators:
// dotted-path construction, mock-name derivation, and exactly-one lookups
// over compilation units.

use crate::errors::TransformError;
use crate::frontend::ast::{
    ClassDecl, CompilationUnit, InterfaceDecl, NamespaceDecl, QualifiedName, TypeDecl, TypeExpr,
};

/// Build a qualified name from a dotted string, rejecting blank segments.
pub fn qualified(path: &str) -> Result<QualifiedName, TransformError> {
    let segments: Vec<String> = path.split('.').map(str::to_string).collect();
    for segment in &segments {
        if segment.trim().is_empty() {
            return Err(TransformError::BlankIdentifier {
                context: format!("path '{}'", path),
            });
        }
    }
    Ok(QualifiedName::new(segments))
}

/// Append one segment to a qualified name, rejecting a blank segment.
pub fn append(base: &QualifiedName, segment: &str) -> Result<QualifiedName, TransformError> {
    if segment.trim().is_empty() {
        return Err(TransformError::BlankIdentifier {
            context: format!("segment appended to '{}'", base),
        });
    }
    let mut segments = base.segments.clone();
    segments.push(segment.to_string());
    Ok(QualifiedName::new(segments))
}

/// Derive the mock class name from an interface name: strip the leading
/// marker character, append the suffix. `IWidget` becomes `WidgetMock`.
///
/// The first character is dropped unconditionally; inputs follow the
/// `I`-prefix convention by construction.
pub fn mock_name(interface_name: &str, suffix: &str) -> Result<String, TransformError> {
    if interface_name.trim().is_empty() {
        return Err(TransformError::BlankIdentifier {
            context: "interface name".to_string(),
        });
    }
    if suffix.trim().is_empty() {
        return Err(TransformError::BlankIdentifier {
            context: "mock name suffix".to_string(),
        });
    }

    let mut chars = interface_name.chars();
    chars.next();
    Ok(format!("{}{}", chars.as_str(), suffix))
}

/// Find the single namespace declaration of a unit.
pub fn single_namespace(unit: &CompilationUnit) -> Result<&NamespaceDecl, TransformError> {
    match unit.namespaces.len() {
        0 => Err(TransformError::MissingNamespace {
            span: unit.span.into(),
        }),
        1 => Ok(&unit.namespaces[0]),
        count => Err(TransformError::MultipleNamespaces {
            count,
            span: unit.namespaces[1].span.into(),
        }),
    }
}

/// Find the single interface declaration of a unit, looking through all
/// namespaces and bare types.
pub fn single_interface(unit: &CompilationUnit) -> Result<&InterfaceDecl, TransformError> {
    let mut interfaces = Vec::new();
    let namespaced = unit.namespaces.iter().flat_map(|ns| ns.types.iter());
    for ty in namespaced.chain(unit.types.iter()) {
        if let TypeDecl::Interface(iface) = ty {
            interfaces.push(iface);
        }
    }

    match interfaces.len() {
        0 => Err(TransformError::MissingInterface {
            span: unit.span.into(),
        }),
        1 => Ok(interfaces[0]),
        count => Err(TransformError::MultipleInterfaces {
            count,
            span: interfaces[1].span.into(),
        }),
    }
}

/// Find the single class declaration of a namespace.
pub fn single_class(namespace: &NamespaceDecl) -> Result<&ClassDecl, TransformError> {
    let mut classes = Vec::new();
    for ty in &namespace.types {
        if let TypeDecl::Class(class) = ty {
            classes.push(class);
        }
    }

    match classes.len() {
        0 => Err(TransformError::MissingMockClass {
            namespace: namespace.name.to_string(),
        }),
        1 => Ok(classes[0]),
        count => Err(TransformError::MultipleMockClasses {
            count,
            span: classes[1].span.into(),
        }),
    }
}

/// Recover the mocked interface from a generated class. Mocks list the base
/// class in slot 0 and the interface in slot 1.
pub fn base_interface(class: &ClassDecl) -> Result<&TypeExpr, TransformError> {
    class
        .bases
        .get(1)
        .ok_or_else(|| TransformError::MissingBaseInterface {
            class: class.name.clone(),
            span: class.span.into(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::Parser;

    fn parse(source: &str) -> CompilationUnit {
        let mut parser = Parser::new(source);
        parser.parse_unit().expect("parse failed")
    }

    #[test]
    fn qualified_splits_dotted_path() {
        let name = qualified("Acme.Devices.Contracts").unwrap();
        assert_eq!(name.segments, vec!["Acme", "Devices", "Contracts"]);
    }

    #[test]
    fn qualified_rejects_blank_segment() {
        assert!(matches!(
            qualified("Acme..Devices"),
            Err(TransformError::BlankIdentifier { .. })
        ));
        assert!(matches!(
            qualified(""),
            Err(TransformError::BlankIdentifier { .. })
        ));
    }

    #[test]
    fn append_matches_qualified_on_full_path() {
        let base = qualified("Acme.Devices").unwrap();
        let appended = append(&base, "Mocks").unwrap();
        assert_eq!(appended, qualified("Acme.Devices.Mocks").unwrap());
    }

    #[test]
    fn append_rejects_blank_segment() {
        let base = qualified("Acme").unwrap();
        assert!(matches!(
            append(&base, "  "),
            Err(TransformError::BlankIdentifier { .. })
        ));
    }

    #[test]
    fn mock_name_strips_marker_and_appends_suffix() {
        assert_eq!(mock_name("IWidget", "Mock").unwrap(), "WidgetMock");
        assert_eq!(mock_name("IAccountService", "Mock").unwrap(), "AccountServiceMock");
    }

    #[test]
    fn mock_name_strips_first_char_unconditionally() {
        // Names outside the marker convention lose their first character too
        assert_eq!(mock_name("Widget", "Mock").unwrap(), "idgetMock");
    }

    #[test]
    fn mock_name_rejects_blank_parts() {
        assert!(matches!(
            mock_name("", "Mock"),
            Err(TransformError::BlankIdentifier { .. })
        ));
        assert!(matches!(
            mock_name("IWidget", " "),
            Err(TransformError::BlankIdentifier { .. })
        ));
    }

    #[test]
    fn single_interface_found() {
        let unit = parse("namespace A { interface IWidget { } }");
        let iface = single_interface(&unit).unwrap();
        assert_eq!(iface.name, "IWidget");
    }

    #[test]
    fn single_interface_missing() {
        let unit = parse("namespace A { }");
        assert!(matches!(
            single_interface(&unit),
            Err(TransformError::MissingInterface { .. })
        ));
    }

    #[test]
    fn single_interface_rejects_two() {
        let unit = parse("namespace A { interface IFirst { } interface ISecond { } }");
        assert!(matches!(
            single_interface(&unit),
            Err(TransformError::MultipleInterfaces { count: 2, .. })
        ));
    }

    #[test]
    fn single_namespace_rejects_two() {
        let unit = parse("namespace A { } namespace B { }");
        assert!(matches!(
            single_namespace(&unit),
            Err(TransformError::MultipleNamespaces { count: 2, .. })
        ));
    }

    #[test]
    fn single_namespace_missing() {
        let unit = parse("");
        assert!(matches!(
            single_namespace(&unit),
            Err(TransformError::MissingNamespace { .. })
        ));
    }

    #[test]
    fn base_interface_reads_slot_one() {
        use crate::frontend::Span;

        let class = ClassDecl {
            name: "WidgetMock".to_string(),
            public: true,
            bases: vec![
                TypeExpr::named(QualifiedName::single("MockBase")),
                TypeExpr::named(QualifiedName::single("IWidget")),
            ],
            members: Vec::new(),
            span: Span::default(),
        };

        let base = base_interface(&class).unwrap();
        assert_eq!(base, &TypeExpr::named(QualifiedName::single("IWidget")));
    }

    #[test]
    fn base_interface_missing_when_base_list_short() {
        use crate::frontend::Span;

        let class = ClassDecl {
            name: "Bare".to_string(),
            public: true,
            bases: vec![TypeExpr::named(QualifiedName::single("MockBase"))],
            members: Vec::new(),
            span: Span::default(),
        };

        assert!(matches!(
            base_interface(&class),
            Err(TransformError::MissingBaseInterface { .. })
        ));
    }
}
