//! Syntax node model consumed by the resolver and signature builder
//!
//! These types are what a syntax provider hands over after parsing one
//! compilation unit. Nothing here knows about tree-sitter: any parser that
//! can fill in these structs can drive the rest of the crate.

use crate::javadoc::JavadocBlock;
use std::sync::Arc;

/// Types every Java compilation unit sees without an import
const JAVA_LANG_TYPES: &[&str] = &[
    "AutoCloseable",
    "Boolean",
    "Byte",
    "CharSequence",
    "Character",
    "Class",
    "ClassLoader",
    "Cloneable",
    "Comparable",
    "Deprecated",
    "Double",
    "Enum",
    "Error",
    "Exception",
    "Float",
    "FunctionalInterface",
    "IllegalArgumentException",
    "IllegalStateException",
    "IndexOutOfBoundsException",
    "Integer",
    "InterruptedException",
    "Iterable",
    "Long",
    "Math",
    "NullPointerException",
    "Number",
    "Object",
    "Override",
    "Process",
    "Record",
    "Runnable",
    "Runtime",
    "RuntimeException",
    "SafeVarargs",
    "Short",
    "StackTraceElement",
    "String",
    "StringBuffer",
    "StringBuilder",
    "SuppressWarnings",
    "System",
    "Thread",
    "ThreadLocal",
    "Throwable",
    "UnsupportedOperationException",
    "Void",
];

const PRIMITIVE_TYPES: &[&str] = &[
    "boolean", "byte", "char", "short", "int", "long", "float", "double", "void", "var",
];

/// Package and single-type imports of one compilation unit
///
/// Shared by every class declared in the unit, nested ones included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportScope {
    pub package: Option<String>,
    pub imports: Vec<String>,
}

impl ImportScope {
    pub fn new(package: Option<String>, imports: Vec<String>) -> Self {
        Self { package, imports }
    }

    /// Resolve a bare type name to its fully qualified form.
    ///
    /// Order: primitives as-is, explicit imports, implicit `java.lang`, then
    /// the unit's own package. Already-qualified or non-identifier input is
    /// returned unchanged, and so is a name that nothing can qualify (no
    /// package declared). Wildcard imports are never expanded.
    pub fn resolve(&self, name: &str) -> String {
        if name.is_empty() || PRIMITIVE_TYPES.contains(&name) || !is_simple_identifier(name) {
            return name.to_string();
        }

        let suffix = format!(".{}", name);
        if let Some(import) = self.imports.iter().find(|i| i.ends_with(&suffix)) {
            return import.clone();
        }

        if JAVA_LANG_TYPES.contains(&name) {
            return format!("java.lang.{}", name);
        }

        match &self.package {
            Some(pkg) if !pkg.is_empty() => format!("{}.{}", pkg, name),
            _ => name.to_string(),
        }
    }
}

fn is_simple_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Kind of type declaration a class node came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeclarationKind {
    #[default]
    Class,
    Interface,
    Enum,
    Record,
}

impl DeclarationKind {
    pub fn is_interface(&self) -> bool {
        matches!(self, DeclarationKind::Interface)
    }
}

/// Declared access level of a method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Public,
    Protected,
    Private,
    #[default]
    Package,
}

/// A type reference as written in source, plus its import-resolved name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeNode {
    /// Name as written, without generics or array brackets (`List`, `Map.Entry`)
    pub name: String,
    /// Name resolved through the unit's imports, without generics
    pub qualified_name: String,
    pub type_arguments: Vec<TypeNode>,
    pub array_dimensions: usize,
    pub varargs: bool,
}

impl TypeNode {
    pub fn new(name: impl Into<String>, qualified_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qualified_name: qualified_name.into(),
            ..Default::default()
        }
    }

    pub fn void() -> Self {
        Self::new("void", "void")
    }

    pub fn with_arguments(mut self, arguments: Vec<TypeNode>) -> Self {
        self.type_arguments = arguments;
        self
    }

    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.array_dimensions = dimensions;
        self
    }

    pub fn is_array(&self) -> bool {
        self.array_dimensions > 0
    }

    pub fn is_parameterized(&self) -> bool {
        !self.type_arguments.is_empty()
    }

    /// `java.util.List<java.lang.String>` style rendering of the qualified name
    pub fn qualified_name_with_generics(&self) -> String {
        if self.type_arguments.is_empty() {
            return self.qualified_name.clone();
        }
        let args: Vec<String> = self
            .type_arguments
            .iter()
            .map(|arg| arg.qualified_name_with_generics() + &arg.array_suffix())
            .collect();
        format!("{}<{}>", self.qualified_name, args.join(", "))
    }

    /// One `[]` per declared dimension
    pub fn array_suffix(&self) -> String {
        "[]".repeat(self.array_dimensions)
    }
}

/// A generic placeholder such as `T extends Foo`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeVariable {
    pub name: String,
    pub bounds: Vec<TypeNode>,
}

impl TypeVariable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    pub fn with_bounds(mut self, bounds: Vec<TypeNode>) -> Self {
        self.bounds = bounds;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterNode {
    pub name: String,
    pub type_node: TypeNode,
    pub varargs: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MethodNode {
    pub name: String,
    /// Empty name for constructors
    pub return_type: TypeNode,
    pub parameters: Vec<ParameterNode>,
    pub constructor: bool,
    pub visibility: Visibility,
    pub javadoc: Option<JavadocBlock>,
    pub type_variables: Vec<TypeVariable>,
}

impl MethodNode {
    pub fn type_variable(&self, name: &str) -> Option<&TypeVariable> {
        self.type_variables.iter().find(|tv| tv.name == name)
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    /// All `@param` tag values in declaration order
    pub fn param_tags(&self) -> Vec<&str> {
        self.javadoc
            .as_ref()
            .map(|doc| doc.tag_values("@param"))
            .unwrap_or_default()
    }
}

/// A class, interface, enum or record declaration
#[derive(Debug, Clone, Default)]
pub struct ClassNode {
    pub name: String,
    /// Dotted form, nested declarations included (`com.acme.Outer.Inner`)
    pub qualified_name: String,
    pub kind: DeclarationKind,
    pub nested: Vec<ClassNode>,
    pub type_variables: Vec<TypeVariable>,
    /// Type variables of enclosing declarations, outermost first. Only inner
    /// (non-static) classes see them.
    pub enclosing_type_variables: Vec<TypeVariable>,
    pub methods: Vec<MethodNode>,
    pub javadoc: Option<JavadocBlock>,
    pub imports: Arc<ImportScope>,
}

impl ClassNode {
    pub fn is_interface(&self) -> bool {
        self.kind.is_interface()
    }

    /// Direct nested declaration by simple name
    pub fn nested_type(&self, name: &str) -> Option<&ClassNode> {
        self.nested.iter().find(|c| c.name == name)
    }

    /// Own type variables shadow those of enclosing declarations
    pub fn type_variable(&self, name: &str) -> Option<&TypeVariable> {
        self.type_variables
            .iter()
            .chain(self.enclosing_type_variables.iter().rev())
            .find(|tv| tv.name == name)
    }

    /// Resolve a bare name against this declaration's compilation unit
    pub fn resolve_type(&self, name: &str) -> String {
        self.imports.resolve(name)
    }

    /// Walk a `$`-delimited path of nested declarations.
    ///
    /// A leading segment naming this declaration itself is skipped, unless a
    /// nested type happens to share that name.
    pub fn find_nested(&self, path: &str) -> Option<&ClassNode> {
        let mut parts: Vec<&str> = path.split('$').filter(|p| !p.is_empty()).collect();
        if parts.len() > 1 && parts[0] == self.name && self.nested_type(parts[0]).is_none() {
            parts.remove(0);
        }
        if parts.is_empty() {
            return None;
        }

        let mut current = self;
        for part in parts {
            current = current.nested_type(part)?;
        }
        Some(current)
    }
}
