//! AST to pretty::Doc conversion for the C# renderer.

use pretty::{Arena, DocAllocator, DocBuilder};

use crate::frontend::ast::*;

/// Indent width for formatting (4 spaces)
const INDENT: isize = 4;

/// Pretty-print a compilation unit to a Doc.
pub fn print_unit<'a>(arena: &'a Arena<'a>, unit: &CompilationUnit) -> DocBuilder<'a, Arena<'a>> {
    let mut sections: Vec<DocBuilder<'a, Arena<'a>>> = Vec::new();

    if !unit.usings.is_empty() {
        let usings = arena.intersperse(
            unit.usings.iter().map(|using| print_using(arena, using)),
            arena.hardline(),
        );
        sections.push(usings);
    }

    for namespace in &unit.namespaces {
        sections.push(print_namespace(arena, namespace));
    }

    for ty in &unit.types {
        sections.push(print_type_decl(arena, ty));
    }

    if sections.is_empty() {
        return arena.nil();
    }

    // Blank line between the usings block, namespaces and bare types
    arena.intersperse(sections, arena.hardline().append(arena.hardline()))
}

/// Print a using directive.
fn print_using<'a>(arena: &'a Arena<'a>, using: &UsingDirective) -> DocBuilder<'a, Arena<'a>> {
    arena
        .text("using ")
        .append(arena.text(using.path.to_string()))
        .append(arena.text(";"))
}

/// Print a namespace declaration with its body.
fn print_namespace<'a>(
    arena: &'a Arena<'a>,
    namespace: &NamespaceDecl,
) -> DocBuilder<'a, Arena<'a>> {
    let header = arena
        .text("namespace ")
        .append(arena.text(namespace.name.to_string()));

    if namespace.types.is_empty() {
        return header
            .append(arena.hardline())
            .append(arena.text("{"))
            .append(arena.hardline())
            .append(arena.text("}"));
    }

    let types = arena.intersperse(
        namespace.types.iter().map(|ty| print_type_decl(arena, ty)),
        arena.hardline().append(arena.hardline()),
    );

    header
        .append(arena.hardline())
        .append(arena.text("{"))
        .append(arena.hardline().append(types).nest(INDENT))
        .append(arena.hardline())
        .append(arena.text("}"))
}

/// Print a type declaration.
fn print_type_decl<'a>(arena: &'a Arena<'a>, decl: &TypeDecl) -> DocBuilder<'a, Arena<'a>> {
    match decl {
        TypeDecl::Interface(iface) => print_interface(arena, iface),
        TypeDecl::Class(class) => print_class(arena, class),
    }
}

/// Print an interface declaration.
fn print_interface<'a>(arena: &'a Arena<'a>, iface: &InterfaceDecl) -> DocBuilder<'a, Arena<'a>> {
    let header = arena
        .text("public interface ")
        .append(arena.text(iface.name.clone()))
        .append(print_base_list(arena, &iface.bases));

    print_type_body(arena, header, &iface.members)
}

/// Print a class declaration.
fn print_class<'a>(arena: &'a Arena<'a>, class: &ClassDecl) -> DocBuilder<'a, Arena<'a>> {
    let keyword = if class.public {
        arena.text("public class ")
    } else {
        arena.text("class ")
    };
    let header = keyword
        .append(arena.text(class.name.clone()))
        .append(print_base_list(arena, &class.bases));

    print_type_body(arena, header, &class.members)
}

/// Print `: Base, IOther` or nothing.
fn print_base_list<'a>(arena: &'a Arena<'a>, bases: &[TypeExpr]) -> DocBuilder<'a, Arena<'a>> {
    if bases.is_empty() {
        return arena.nil();
    }

    let list = arena.intersperse(
        bases.iter().map(|base| print_type_expr(arena, base)),
        arena.text(", "),
    );
    arena.text(" : ").append(list)
}

/// Print a braced type body with members separated by blank lines.
fn print_type_body<'a>(
    arena: &'a Arena<'a>,
    header: DocBuilder<'a, Arena<'a>>,
    members: &[MemberDecl],
) -> DocBuilder<'a, Arena<'a>> {
    if members.is_empty() {
        return header
            .append(arena.hardline())
            .append(arena.text("{"))
            .append(arena.hardline())
            .append(arena.text("}"));
    }

    let body = arena.intersperse(
        members.iter().map(|member| print_member(arena, member)),
        arena.hardline().append(arena.hardline()),
    );

    header
        .append(arena.hardline())
        .append(arena.text("{"))
        .append(arena.hardline().append(body).nest(INDENT))
        .append(arena.hardline())
        .append(arena.text("}"))
}

/// Print a member declaration.
fn print_member<'a>(arena: &'a Arena<'a>, member: &MemberDecl) -> DocBuilder<'a, Arena<'a>> {
    match member {
        MemberDecl::Method(method) => print_method(arena, method),
        MemberDecl::Property(prop) => print_property(arena, prop),
        MemberDecl::Indexer(indexer) => print_indexer(arena, indexer),
    }
}

/// Print a method declaration or implementation.
fn print_method<'a>(arena: &'a Arena<'a>, method: &MethodDecl) -> DocBuilder<'a, Arena<'a>> {
    let mut doc = arena.nil();
    if method.public {
        doc = doc.append(arena.text("public "));
    }

    doc = doc
        .append(print_type_expr(arena, &method.return_type))
        .append(arena.text(" "))
        .append(print_explicit_interface(arena, &method.explicit_interface))
        .append(arena.text(method.name.clone()))
        .append(print_params(arena, &method.params));

    match &method.body {
        Some(body) => doc.append(arena.hardline()).append(print_block(arena, body)),
        None => doc.append(arena.text(";")),
    }
}

/// Print a property declaration or implementation.
fn print_property<'a>(arena: &'a Arena<'a>, prop: &PropertyDecl) -> DocBuilder<'a, Arena<'a>> {
    let header = print_type_expr(arena, &prop.ty)
        .append(arena.text(" "))
        .append(print_explicit_interface(arena, &prop.explicit_interface))
        .append(arena.text(prop.name.clone()));

    print_accessors(arena, header, &prop.getter, prop.setter.as_ref())
}

/// Print an indexer declaration or implementation.
fn print_indexer<'a>(arena: &'a Arena<'a>, indexer: &IndexerDecl) -> DocBuilder<'a, Arena<'a>> {
    let params = arena.intersperse(
        indexer.params.iter().map(|param| print_param(arena, param)),
        arena.text(", "),
    );

    let header = print_type_expr(arena, &indexer.element_type)
        .append(arena.text(" "))
        .append(print_explicit_interface(arena, &indexer.explicit_interface))
        .append(arena.text("this["))
        .append(params)
        .append(arena.text("]"));

    print_accessors(arena, header, &indexer.getter, indexer.setter.as_ref())
}

/// Print `IWidget.` qualification, or nothing.
fn print_explicit_interface<'a>(
    arena: &'a Arena<'a>,
    explicit: &Option<QualifiedName>,
) -> DocBuilder<'a, Arena<'a>> {
    match explicit {
        Some(name) => arena.text(name.to_string()).append(arena.text(".")),
        None => arena.nil(),
    }
}

/// Print an accessor list. Body-less accessors render compact on one line;
/// accessors with bodies render as Allman blocks.
fn print_accessors<'a>(
    arena: &'a Arena<'a>,
    header: DocBuilder<'a, Arena<'a>>,
    getter: &Accessor,
    setter: Option<&Accessor>,
) -> DocBuilder<'a, Arena<'a>> {
    let bodyless = getter.body.is_none() && setter.is_none_or(|s| s.body.is_none());

    if bodyless {
        let mut doc = header.append(arena.text(" { get;"));
        if setter.is_some() {
            doc = doc.append(arena.text(" set;"));
        }
        return doc.append(arena.text(" }"));
    }

    let mut accessors = vec![print_accessor(arena, "get", getter)];
    if let Some(setter) = setter {
        accessors.push(print_accessor(arena, "set", setter));
    }
    let body = arena.intersperse(accessors, arena.hardline());

    header
        .append(arena.hardline())
        .append(arena.text("{"))
        .append(arena.hardline().append(body).nest(INDENT))
        .append(arena.hardline())
        .append(arena.text("}"))
}

/// Print one accessor in expanded form.
fn print_accessor<'a>(
    arena: &'a Arena<'a>,
    keyword: &'static str,
    accessor: &Accessor,
) -> DocBuilder<'a, Arena<'a>> {
    match &accessor.body {
        Some(body) => arena
            .text(keyword)
            .append(arena.hardline())
            .append(print_block(arena, body)),
        None => arena.text(keyword).append(arena.text(";")),
    }
}

/// Print a parenthesized parameter list.
fn print_params<'a>(arena: &'a Arena<'a>, params: &[Param]) -> DocBuilder<'a, Arena<'a>> {
    if params.is_empty() {
        return arena.text("()");
    }

    let list = arena.intersperse(
        params.iter().map(|param| print_param(arena, param)),
        arena.text(", "),
    );
    arena.text("(").append(list).append(arena.text(")"))
}

/// Print a single parameter.
fn print_param<'a>(arena: &'a Arena<'a>, param: &Param) -> DocBuilder<'a, Arena<'a>> {
    print_type_expr(arena, &param.ty)
        .append(arena.text(" "))
        .append(arena.text(param.name.clone()))
}

/// Print a statement block as an Allman-brace body.
fn print_block<'a>(arena: &'a Arena<'a>, block: &Block) -> DocBuilder<'a, Arena<'a>> {
    if block.stmts.is_empty() {
        return arena
            .text("{")
            .append(arena.hardline())
            .append(arena.text("}"));
    }

    let stmts = arena.intersperse(
        block.stmts.iter().map(|stmt| print_stmt(arena, stmt)),
        arena.hardline(),
    );

    arena
        .text("{")
        .append(arena.hardline().append(stmts).nest(INDENT))
        .append(arena.hardline())
        .append(arena.text("}"))
}

/// Print a statement.
fn print_stmt<'a>(arena: &'a Arena<'a>, stmt: &Stmt) -> DocBuilder<'a, Arena<'a>> {
    match stmt {
        Stmt::Expr(expr) => print_expr(arena, expr).append(arena.text(";")),
        Stmt::Return(expr) => arena
            .text("return ")
            .append(print_expr(arena, expr))
            .append(arena.text(";")),
    }
}

/// Print an expression.
fn print_expr<'a>(arena: &'a Arena<'a>, expr: &Expr) -> DocBuilder<'a, Arena<'a>> {
    match expr {
        Expr::Ident(name) => arena.text(name.clone()),
        Expr::Call(call) => print_call(arena, call),
        Expr::ObjectArray(items) => print_object_array(arena, items),
    }
}

/// Print a member invocation on a named receiver.
fn print_call<'a>(arena: &'a Arena<'a>, call: &CallExpr) -> DocBuilder<'a, Arena<'a>> {
    let mut doc = arena
        .text(call.receiver.clone())
        .append(arena.text("."))
        .append(arena.text(call.method.clone()));

    if !call.type_args.is_empty() {
        let args = arena.intersperse(
            call.type_args.iter().map(|arg| print_type_expr(arena, arg)),
            arena.text(", "),
        );
        doc = doc.append(arena.text("<")).append(args).append(arena.text(">"));
    }

    let args = arena.intersperse(
        call.args.iter().map(|arg| print_argument(arena, arg)),
        arena.text(", "),
    );
    doc.append(arena.text("(")).append(args).append(arena.text(")"))
}

/// Print a call argument with its optional label.
fn print_argument<'a>(arena: &'a Arena<'a>, arg: &Argument) -> DocBuilder<'a, Arena<'a>> {
    let value = print_expr(arena, &arg.value);
    match &arg.label {
        Some(label) => arena
            .text(label.clone())
            .append(arena.text(": "))
            .append(value),
        None => value,
    }
}

/// Print `new object[] { ... }`.
fn print_object_array<'a>(arena: &'a Arena<'a>, items: &[Expr]) -> DocBuilder<'a, Arena<'a>> {
    if items.is_empty() {
        return arena.text("new object[] { }");
    }

    let list = arena.intersperse(
        items.iter().map(|item| print_expr(arena, item)),
        arena.text(", "),
    );
    arena
        .text("new object[] { ")
        .append(list)
        .append(arena.text(" }"))
}

/// Print a type expression.
fn print_type_expr<'a>(arena: &'a Arena<'a>, ty: &TypeExpr) -> DocBuilder<'a, Arena<'a>> {
    match ty {
        TypeExpr::Void => arena.text("void"),
        TypeExpr::Predefined(predefined) => arena.text(predefined.as_str()),
        TypeExpr::Named { name, type_args } => {
            let doc = arena.text(name.to_string());
            if type_args.is_empty() {
                return doc;
            }
            let args = arena.intersperse(
                type_args.iter().map(|arg| print_type_expr(arena, arg)),
                arena.text(", "),
            );
            doc.append(arena.text("<")).append(args).append(arena.text(">"))
        }
        TypeExpr::Array(inner) => print_type_expr(arena, inner).append(arena.text("[]")),
    }
}
