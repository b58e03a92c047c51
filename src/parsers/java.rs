//! Java parser using tree-sitter
//!
//! Builds the declaration model for one compilation unit: package, imports,
//! the root type declaration with its nested types, methods, parameters,
//! type variables and attached Javadoc. Method bodies are never visited, so
//! lambdas and anonymous classes do not contribute methods.

use super::SourceParser;
use crate::error::{ApiSigError, ApiSigResult};
use crate::javadoc::JavadocBlock;
use crate::models::{
    ClassNode, DeclarationKind, ImportScope, MethodNode, ParameterNode, TypeNode, TypeVariable,
    Visibility,
};
use std::sync::Arc;
use tracing::{debug, warn};
use tree_sitter::{Node, Parser, Query, QueryCursor, StreamingIterator};

/// Default syntax provider for `.java` sources
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaParser;

impl SourceParser for JavaParser {
    fn parse(&self, source: &str) -> ApiSigResult<ClassNode> {
        parse_source(source)
    }
}

/// Parse Java source and return its root type declaration.
///
/// The first public top-level declaration wins, otherwise the first one.
pub fn parse_source(source: &str) -> ApiSigResult<ClassNode> {
    let mut parser = Parser::new();
    let language = tree_sitter_java::LANGUAGE;
    parser
        .set_language(&language.into())
        .map_err(|e| ApiSigError::Language(e.to_string()))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ApiSigError::Syntax("parser produced no tree".to_string()))?;

    let root = tree.root_node();
    if root.has_error() {
        warn!("Java source contains syntax errors, continuing with a partial tree");
    }
    let source_bytes = source.as_bytes();

    let imports = Arc::new(ImportScope::new(
        extract_package(&root, source_bytes),
        extract_imports(&root, source_bytes)?,
    ));
    debug!(
        "Package {:?} with {} imports",
        imports.package,
        imports.imports.len()
    );

    let declarations: Vec<Node> = root
        .children(&mut root.walk())
        .filter(|n| declaration_kind(n).is_some())
        .collect();
    let node = declarations
        .iter()
        .find(|n| modifier_visibility(n, source_bytes) == Visibility::Public)
        .or_else(|| declarations.first())
        .ok_or_else(|| {
            ApiSigError::Syntax(
                "no class, interface, enum or record declaration found".to_string(),
            )
        })?;

    let ctx = Context {
        source: source_bytes,
        imports: &imports,
        type_vars: Vec::new(),
    };
    parse_declaration(node, &ctx, None).ok_or_else(|| {
        ApiSigError::Syntax("type declaration without a name".to_string())
    })
}

/// What a type reference is resolved against while walking the tree
#[derive(Clone)]
struct Context<'a> {
    source: &'a [u8],
    imports: &'a Arc<ImportScope>,
    /// Type variables visible at the current position, innermost last
    type_vars: Vec<TypeVariable>,
}

impl Context<'_> {
    fn text(&self, node: &Node) -> String {
        node.utf8_text(self.source).unwrap_or_default().to_string()
    }

    fn with_type_vars(&self, vars: &[TypeVariable]) -> Self {
        let mut ctx = self.clone();
        ctx.type_vars.extend(vars.iter().cloned());
        ctx
    }

    fn qualify(&self, name: &str) -> String {
        if self.type_vars.iter().any(|tv| tv.name == name) {
            return name.to_string();
        }
        match name.split_once('.') {
            // Outer.Inner: qualify the outer name, keep the rest
            Some((head, rest)) if head.starts_with(char::is_uppercase) => {
                format!("{}.{}", self.imports.resolve(head), rest)
            }
            Some(_) => name.to_string(),
            None => self.imports.resolve(name),
        }
    }
}

fn declaration_kind(node: &Node) -> Option<DeclarationKind> {
    match node.kind() {
        "class_declaration" => Some(DeclarationKind::Class),
        "interface_declaration" => Some(DeclarationKind::Interface),
        "enum_declaration" => Some(DeclarationKind::Enum),
        "record_declaration" => Some(DeclarationKind::Record),
        _ => None,
    }
}

fn extract_package(root: &Node, source: &[u8]) -> Option<String> {
    root.children(&mut root.walk())
        .find(|n| n.kind() == "package_declaration")
        .and_then(|pkg| {
            pkg.named_children(&mut pkg.walk())
                .find(|n| n.kind() == "scoped_identifier" || n.kind() == "identifier")
        })
        .and_then(|n| n.utf8_text(source).ok())
        .map(str::to_string)
}

/// Single-type imports. Static and on-demand imports are skipped.
fn extract_imports(root: &Node, source: &[u8]) -> ApiSigResult<Vec<String>> {
    let query_str = r#"
        (import_declaration
            (scoped_identifier) @import_path
        )
        (import_declaration
            (identifier) @import_path
        )
    "#;

    let language = tree_sitter_java::LANGUAGE;
    let query = Query::new(&language.into(), query_str)
        .map_err(|e| ApiSigError::Language(format!("Failed to create import query: {}", e)))?;

    let mut imports = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, *root, source);

    while let Some(m) = matches.next() {
        for capture in m.captures.iter() {
            let Some(decl) = capture.node.parent() else {
                continue;
            };
            let skipped = decl
                .children(&mut decl.walk())
                .any(|c| c.kind() == "static" || c.kind() == "asterisk");
            if skipped {
                continue;
            }
            if let Ok(text) = capture.node.utf8_text(source) {
                imports.push(text.to_string());
            }
        }
    }

    Ok(imports)
}

/// Build a declaration node, recursing into nested type declarations
fn parse_declaration(node: &Node, ctx: &Context, parent: Option<&str>) -> Option<ClassNode> {
    let kind = declaration_kind(node)?;
    let name = ctx.text(&node.child_by_field_name("name")?);

    let qualified_name = match parent {
        Some(parent) => format!("{}.{}", parent, name),
        None => match &ctx.imports.package {
            Some(pkg) if !pkg.is_empty() => format!("{}.{}", pkg, name),
            _ => name.clone(),
        },
    };

    // Static nested declarations cannot see the enclosing type variables
    let enclosing_type_variables = if parent.is_some() && is_inner(node, kind, ctx.source) {
        ctx.type_vars.clone()
    } else {
        Vec::new()
    };
    let ctx = Context {
        type_vars: enclosing_type_variables.clone(),
        ..ctx.clone()
    };
    let type_variables = extract_type_parameters(node, &ctx);
    let ctx = ctx.with_type_vars(&type_variables);

    let mut methods = Vec::new();
    let mut nested = Vec::new();
    for member in body_members(node) {
        match member.kind() {
            "method_declaration" => methods.extend(parse_method(&member, &ctx)),
            "constructor_declaration" | "compact_constructor_declaration" => {
                methods.push(parse_constructor(&member, &ctx, &name))
            }
            _ if declaration_kind(&member).is_some() => {
                nested.extend(parse_declaration(&member, &ctx, Some(&qualified_name)))
            }
            _ => {}
        }
    }

    debug!(
        "Parsed {} {} with {} methods and {} nested types",
        node.kind(),
        qualified_name,
        methods.len(),
        nested.len()
    );

    Some(ClassNode {
        name,
        qualified_name,
        kind,
        nested,
        type_variables,
        enclosing_type_variables,
        methods,
        javadoc: extract_doc_comment(node, ctx.source),
        imports: Arc::clone(ctx.imports),
    })
}

/// Direct members of a declaration body. Enum members live in a nested
/// `enum_body_declarations` node after the constants.
fn body_members<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let Some(body) = node.child_by_field_name("body") else {
        return vec![];
    };

    let mut members = Vec::new();
    for child in body.children(&mut body.walk()) {
        if child.kind() == "enum_body_declarations" {
            members.extend(child.children(&mut child.walk()));
        } else {
            members.push(child);
        }
    }
    members
}

fn parse_method(node: &Node, ctx: &Context) -> Option<MethodNode> {
    let name = ctx.text(&node.child_by_field_name("name")?);
    let type_variables = extract_type_parameters(node, ctx);
    let ctx = ctx.with_type_vars(&type_variables);

    let mut return_type = node
        .child_by_field_name("type")
        .map(|t| type_node(&t, &ctx))
        .unwrap_or_else(TypeNode::void);
    if let Some(dims) = node.child_by_field_name("dimensions") {
        return_type.array_dimensions += count_dimensions(&dims);
    }

    Some(MethodNode {
        name,
        return_type,
        parameters: extract_parameters(node.child_by_field_name("parameters"), &ctx),
        constructor: false,
        visibility: modifier_visibility(node, ctx.source),
        javadoc: extract_doc_comment(node, ctx.source),
        type_variables,
    })
}

fn parse_constructor(node: &Node, ctx: &Context, class_name: &str) -> MethodNode {
    let type_variables = extract_type_parameters(node, ctx);
    let ctx = ctx.with_type_vars(&type_variables);

    MethodNode {
        name: class_name.to_string(),
        return_type: TypeNode::default(),
        parameters: extract_parameters(node.child_by_field_name("parameters"), &ctx),
        constructor: true,
        visibility: modifier_visibility(node, ctx.source),
        javadoc: extract_doc_comment(node, ctx.source),
        type_variables,
    }
}

fn extract_parameters(params_node: Option<Node>, ctx: &Context) -> Vec<ParameterNode> {
    let Some(node) = params_node else {
        return vec![];
    };

    let mut params = Vec::new();
    for child in node.children(&mut node.walk()) {
        match child.kind() {
            "formal_parameter" => {
                let Some(name_node) = child.child_by_field_name("name") else {
                    continue;
                };
                let mut ty = child
                    .child_by_field_name("type")
                    .map(|t| type_node(&t, ctx))
                    .unwrap_or_default();
                // C-style `String args[]`
                if let Some(dims) = child.child_by_field_name("dimensions") {
                    ty.array_dimensions += count_dimensions(&dims);
                }
                params.push(ParameterNode {
                    name: ctx.text(&name_node),
                    type_node: ty,
                    varargs: false,
                });
            }
            "spread_parameter" => {
                let mut ty = None;
                let mut name = None;
                for part in child.named_children(&mut child.walk()) {
                    match part.kind() {
                        "modifiers" | "marker_annotation" | "annotation" => {}
                        "variable_declarator" => {
                            name = part.child_by_field_name("name").map(|n| ctx.text(&n));
                        }
                        _ if ty.is_none() => ty = Some(type_node(&part, ctx)),
                        _ => {}
                    }
                }
                if let (Some(ty), Some(name)) = (ty, name) {
                    params.push(ParameterNode {
                        name,
                        type_node: ty,
                        varargs: true,
                    });
                }
            }
            _ => {}
        }
    }

    params
}

/// Generic parameters declared on a type or method, with their bounds
fn extract_type_parameters(node: &Node, ctx: &Context) -> Vec<TypeVariable> {
    let Some(params) = node
        .children(&mut node.walk())
        .find(|c| c.kind() == "type_parameters")
    else {
        return vec![];
    };

    let mut vars = Vec::new();
    for param in params.named_children(&mut params.walk()) {
        if param.kind() != "type_parameter" {
            continue;
        }
        let mut var: Option<TypeVariable> = None;
        let mut bounds = Vec::new();
        for part in param.named_children(&mut param.walk()) {
            match part.kind() {
                "type_identifier" | "identifier" if var.is_none() => {
                    var = Some(TypeVariable::new(ctx.text(&part)));
                }
                "type_bound" => {
                    bounds.extend(
                        part.named_children(&mut part.walk())
                            .map(|b| type_node(&b, ctx)),
                    );
                }
                _ => {}
            }
        }
        vars.extend(var.map(|v| v.with_bounds(bounds)));
    }
    vars
}

/// Convert a type expression into a [`TypeNode`]
fn type_node(node: &Node, ctx: &Context) -> TypeNode {
    match node.kind() {
        "generic_type" => {
            let mut base = TypeNode::default();
            let mut arguments = Vec::new();
            for child in node.named_children(&mut node.walk()) {
                match child.kind() {
                    "type_arguments" => {
                        arguments = child
                            .named_children(&mut child.walk())
                            .filter(|a| !is_comment(a))
                            .map(|a| type_node(&a, ctx))
                            .collect();
                    }
                    _ => base = type_node(&child, ctx),
                }
            }
            base.with_arguments(arguments)
        }
        "array_type" => {
            let element = node
                .child_by_field_name("element")
                .map(|e| type_node(&e, ctx))
                .unwrap_or_default();
            let dims = node
                .child_by_field_name("dimensions")
                .map(|d| count_dimensions(&d))
                .unwrap_or(0);
            let total = element.array_dimensions + dims;
            element.with_dimensions(total)
        }
        "annotated_type" => node
            .named_children(&mut node.walk())
            .filter(|c| !matches!(c.kind(), "marker_annotation" | "annotation"))
            .last()
            .map(|c| type_node(&c, ctx))
            .unwrap_or_default(),
        "scoped_type_identifier" => {
            let name: String = ctx
                .text(node)
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            let qualified = ctx.qualify(&name);
            TypeNode::new(name, qualified)
        }
        "wildcard" => {
            let text = ctx.text(node);
            TypeNode::new(text.clone(), text)
        }
        _ => {
            let name = ctx.text(node);
            let qualified = ctx.qualify(&name);
            TypeNode::new(name, qualified)
        }
    }
}

fn count_dimensions(node: &Node) -> usize {
    node.children(&mut node.walk())
        .filter(|c| c.kind() == "[")
        .count()
}

fn is_comment(node: &Node) -> bool {
    matches!(node.kind(), "line_comment" | "block_comment")
}

/// A nested class without `static`. Interfaces, enums and records are
/// implicitly static.
fn is_inner(node: &Node, kind: DeclarationKind, source: &[u8]) -> bool {
    kind == DeclarationKind::Class
        && !node
            .children(&mut node.walk())
            .filter(|c| c.kind() == "modifiers")
            .any(|m| {
                m.children(&mut m.walk())
                    .any(|c| c.utf8_text(source) == Ok("static"))
            })
}

/// Declared access level from the `modifiers` child
fn modifier_visibility(node: &Node, source: &[u8]) -> Visibility {
    for child in node.children(&mut node.walk()) {
        if child.kind() == "modifiers" {
            for grandchild in child.children(&mut child.walk()) {
                match grandchild.utf8_text(source) {
                    Ok("public") => return Visibility::Public,
                    Ok("protected") => return Visibility::Protected,
                    Ok("private") => return Visibility::Private,
                    _ => {}
                }
            }
        }
    }
    Visibility::Package
}

/// Extract the Javadoc comment preceding a declaration node.
///
/// Javadoc comments are `/** ... */` block comments immediately before a
/// declaration, possibly ahead of its annotations. Regular `/* */` and `//`
/// comments are ignored. The comment text is kept verbatim.
fn extract_doc_comment(node: &Node, source: &[u8]) -> Option<JavadocBlock> {
    // A comment placed between annotations and keywords lands inside modifiers
    for child in node.children(&mut node.walk()) {
        if child.kind() == "modifiers" {
            if let Some(doc) = child
                .children(&mut child.walk())
                .find_map(|c| javadoc_text(&c, source))
            {
                return Some(JavadocBlock::parse(doc));
            }
        }
    }

    let mut sibling = node.prev_sibling();
    while let Some(sib) = sibling {
        match sib.kind() {
            "marker_annotation" | "annotation" | "modifiers" => {
                sibling = sib.prev_sibling();
            }
            "block_comment" => return javadoc_text(&sib, source).map(JavadocBlock::parse),
            _ => break,
        }
    }

    None
}

fn javadoc_text<'s>(node: &Node, source: &'s [u8]) -> Option<&'s str> {
    if node.kind() != "block_comment" {
        return None;
    }
    node.utf8_text(source)
        .ok()
        .filter(|text| text.starts_with("/**"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_class() {
        let source = r#"
package com.acme;

public class HelloWorld {
    public static void main(String[] args) {
        System.out.println("Hello, World!");
    }
}
"#;
        let class = parse_source(source).expect("should parse Java source");

        assert_eq!(class.name, "HelloWorld");
        assert_eq!(class.qualified_name, "com.acme.HelloWorld");
        assert_eq!(class.kind, DeclarationKind::Class);
        assert_eq!(class.methods.len(), 1);

        let main = &class.methods[0];
        assert_eq!(main.name, "main");
        assert_eq!(main.visibility, Visibility::Public);
        assert_eq!(main.return_type.name, "void");
        assert_eq!(main.parameters[0].name, "args");
        assert_eq!(main.parameters[0].type_node.name, "String");
        assert_eq!(main.parameters[0].type_node.qualified_name, "java.lang.String");
        assert_eq!(main.parameters[0].type_node.array_dimensions, 1);
    }

    #[test]
    fn test_parse_imports() {
        let source = r#"
package com.acme;

import java.util.List;
import java.util.Map;
import java.io.*;
import static java.lang.Math.PI;

public class Test {}
"#;
        let class = parse_source(source).expect("should parse Java source");

        assert_eq!(class.imports.package.as_deref(), Some("com.acme"));
        assert_eq!(class.imports.imports, vec!["java.util.List", "java.util.Map"]);
    }

    #[test]
    fn test_parse_interface_methods() {
        let source = r#"
public interface MyInterface {
    void doSomething();
    default String doDefault(int times) { return ""; }
}
"#;
        let iface = parse_source(source).expect("should parse Java source");

        assert_eq!(iface.kind, DeclarationKind::Interface);
        assert_eq!(iface.qualified_name, "MyInterface");
        let names: Vec<&str> = iface.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["doSomething", "doDefault"]);
        assert_eq!(iface.methods[0].visibility, Visibility::Package);
    }

    #[test]
    fn test_constructors_and_visibility() {
        let source = r#"
public class MyClass {
    public MyClass(String name) {}
    public void publicMethod() {}
    private void privateMethod() {}
    protected void protectedMethod() {}
    void packagePrivateMethod() {}
}
"#;
        let class = parse_source(source).expect("should parse Java source");

        let ctor = &class.methods[0];
        assert!(ctor.constructor);
        assert_eq!(ctor.name, "MyClass");
        assert_eq!(ctor.parameters.len(), 1);

        let vis: Vec<Visibility> = class.methods[1..].iter().map(|m| m.visibility).collect();
        assert_eq!(
            vis,
            vec![
                Visibility::Public,
                Visibility::Private,
                Visibility::Protected,
                Visibility::Package
            ]
        );
    }

    #[test]
    fn test_varargs_parameter() {
        let source = r#"
public class TestProxy {
    public String greetWildcard(String... wildcardNames) { return ""; }
}
"#;
        let class = parse_source(source).expect("should parse Java source");
        let param = &class.methods[0].parameters[0];

        assert_eq!(param.name, "wildcardNames");
        assert!(param.varargs);
        assert_eq!(param.type_node.name, "String");
        assert_eq!(param.type_node.array_dimensions, 0);
    }

    #[test]
    fn test_generic_types_and_type_parameters() {
        let source = r#"
package com.acme;

import java.util.List;
import java.util.Map;

public class Box<T extends Number> {
    public <K extends Comparable<K>> Map<K, List<T>> index(List<T> items, K key) { return null; }
}
"#;
        let class = parse_source(source).expect("should parse Java source");

        assert_eq!(class.type_variables.len(), 1);
        assert_eq!(class.type_variables[0].name, "T");
        assert_eq!(class.type_variables[0].bounds[0].qualified_name, "java.lang.Number");

        let method = &class.methods[0];
        assert_eq!(method.type_variables[0].name, "K");
        assert_eq!(method.type_variables[0].bounds[0].name, "Comparable");

        let ret = &method.return_type;
        assert_eq!(ret.qualified_name, "java.util.Map");
        assert_eq!(ret.type_arguments.len(), 2);
        assert_eq!(ret.type_arguments[0].qualified_name, "K");
        assert_eq!(ret.type_arguments[1].qualified_name, "java.util.List");
        assert_eq!(ret.type_arguments[1].type_arguments[0].qualified_name, "T");

        let items = &method.parameters[0].type_node;
        assert_eq!(items.qualified_name_with_generics(), "java.util.List<T>");
    }

    #[test]
    fn test_nested_declarations() {
        let source = r#"
package com.acme;

public class Outer {
    public static class Inner {
        public interface Deep {
            void ping();
        }
        public void run() {}
    }
    public enum Color {
        RED, GREEN;
        public String label() { return name(); }
    }
    public record Point(int x, int y) {
        public Point {
        }
        public int sum() { return x + y; }
    }
}
"#;
        let class = parse_source(source).expect("should parse Java source");

        let inner = class.nested_type("Inner").expect("Inner");
        assert_eq!(inner.qualified_name, "com.acme.Outer.Inner");
        assert_eq!(inner.methods[0].name, "run");

        let deep = class.find_nested("Inner$Deep").expect("Deep");
        assert_eq!(deep.kind, DeclarationKind::Interface);
        assert_eq!(deep.qualified_name, "com.acme.Outer.Inner.Deep");

        let color = class.nested_type("Color").expect("Color");
        assert_eq!(color.kind, DeclarationKind::Enum);
        assert_eq!(color.methods[0].name, "label");

        let point = class.nested_type("Point").expect("Point");
        assert_eq!(point.kind, DeclarationKind::Record);
        assert!(point.methods[0].constructor);
        assert_eq!(point.methods[1].name, "sum");
    }

    #[test]
    fn test_inner_class_sees_enclosing_type_variables() {
        let source = r#"
package com.acme;

public class Outer<T extends Number> {
    public class Inner {
        public T get() { return null; }
    }
    public static class Nested {
        public T get() { return null; }
    }
}
"#;
        let class = parse_source(source).expect("should parse Java source");

        let inner = class.nested_type("Inner").expect("Inner");
        assert_eq!(inner.enclosing_type_variables.len(), 1);
        assert_eq!(inner.methods[0].return_type.qualified_name, "T");
        let bound = inner.type_variable("T").expect("T visible in Inner");
        assert_eq!(bound.bounds[0].qualified_name, "java.lang.Number");

        let nested = class.nested_type("Nested").expect("Nested");
        assert!(nested.enclosing_type_variables.is_empty());
        assert_eq!(nested.methods[0].return_type.qualified_name, "com.acme.T");
    }

    #[test]
    fn test_scoped_type_reference() {
        let source = r#"
import java.util.Map;

public class Walker {
    public void visit(Map.Entry<String, Integer> entry) {}
}
"#;
        let class = parse_source(source).expect("should parse Java source");
        let ty = &class.methods[0].parameters[0].type_node;

        assert_eq!(ty.name, "Map.Entry");
        assert_eq!(ty.qualified_name, "java.util.Map.Entry");
        assert_eq!(ty.type_arguments.len(), 2);
    }

    #[test]
    fn test_method_count_excludes_lambdas_and_anonymous_classes() {
        let source = r#"
public class EventHandler {
    public void setup() {
        button.addListener(new ActionListener() {
            @Override
            public void actionPerformed(ActionEvent e) {
                handleClick();
            }
        });
        items.forEach(item -> callback.accept(item));
    }

    private void handleClick() {}
}
"#;
        let class = parse_source(source).expect("should parse Java source");
        let names: Vec<&str> = class.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["setup", "handleClick"]);
    }

    #[test]
    fn test_javadoc_extracted() {
        let source = r#"
/**
 * Calculates the sum of two numbers.
 */
public class Calculator {
    /**
     * Add two integers.
     * @param a first number
     * @param b second number
     */
    @Deprecated
    public int add(int a, int b) {
        return a + b;
    }

    // not javadoc
    public int twice(int a) { return a * 2; }
}
"#;
        let class = parse_source(source).expect("should parse Java source");

        let doc = class.javadoc.as_ref().expect("class should have Javadoc");
        assert!(doc.raw.contains("Calculates the sum"), "Got: {}", doc.raw);

        let add = &class.methods[0];
        let doc = add.javadoc.as_ref().expect("method should have Javadoc");
        assert!(doc.raw.starts_with("/**"));
        assert_eq!(add.param_tags(), vec!["a first number", "b second number"]);

        assert!(class.methods[1].javadoc.is_none());
    }

    #[test]
    fn test_public_top_level_declaration_preferred() {
        let source = r#"
class Helper {}

public class Main {
    public void run() {}
}
"#;
        let class = parse_source(source).expect("should parse Java source");
        assert_eq!(class.name, "Main");
    }

    #[test]
    fn test_no_declaration_is_syntax_error() {
        let err = parse_source("package com.acme;\n").expect_err("nothing to parse");
        assert!(matches!(err, ApiSigError::Syntax(_)));
    }
}
