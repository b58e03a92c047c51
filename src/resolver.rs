//! Type reference resolution
//!
//! Turns a [`TypeNode`] into the display string used in generated method
//! signatures. Resolution happens in three scopes: the root declaration of
//! the compilation unit, the declaration the method lives in, and the method
//! itself (for method-level type variables).
//!
//! The rules are heuristics layered on import resolution, not type checking:
//!
//! 1. a type variable renders as its own name, or as its first bound when
//!    type variables are erased
//! 2. nested declarations are qualified with `$` (`com.acme.Outer$Inner`)
//! 3. everything else is qualified through the unit's imports
//! 4. generic arguments are kept only when every argument looks like a real
//!    qualified type; bounded type variables are replaced by their bound, and
//!    anything unresolvable drops the parameterization entirely
//! 5. array dimensions and varargs become trailing `[]`
//! 6. the implicit `java.lang.` prefix is removed

use crate::models::{ClassNode, MethodNode, TypeNode, TypeVariable};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Prefix of the implicitly imported package, stripped from rendered names
const DEFAULT_IMPORT_PREFIX: &str = "java.lang.";

/// Rendered for an erased type variable that has no usable bound
pub const DEFAULT_PLACEHOLDER: &str = "java.lang.Object";

/// How a bare type variable reference is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeVariableMode {
    /// Replace `T` by its first bound (or the placeholder)
    #[default]
    Erase,
    /// Keep `T` as written
    Keep,
}

/// The scopes a type reference is looked up in
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    pub root: &'a ClassNode,
    pub lexical: &'a ClassNode,
    pub method: &'a MethodNode,
}

impl<'a> Scope<'a> {
    pub fn new(root: &'a ClassNode, lexical: &'a ClassNode, method: &'a MethodNode) -> Self {
        Self {
            root,
            lexical,
            method,
        }
    }

    /// Method type variables shadow class type variables
    pub fn type_variable(&self, name: &str) -> Option<&'a TypeVariable> {
        self.method
            .type_variable(name)
            .or_else(|| self.lexical.type_variable(name))
    }

    fn has_bounds(&self, name: &str) -> bool {
        self.type_variable(name)
            .is_some_and(|tv| !tv.bounds.is_empty())
    }

    /// First bound that is not the variable itself. Only one level deep:
    /// a bound that is another type variable is returned as-is.
    fn bound_of(&self, name: &str) -> Option<&'a str> {
        self.type_variable(name)?
            .bounds
            .iter()
            .map(|b| b.qualified_name.as_str())
            .find(|bn| *bn != name)
    }
}

#[derive(Debug, Clone)]
pub struct TypeResolver {
    mode: TypeVariableMode,
    placeholder: String,
}

impl Default for TypeResolver {
    fn default() -> Self {
        Self::new(TypeVariableMode::default(), DEFAULT_PLACEHOLDER)
    }
}

impl TypeResolver {
    pub fn new(mode: TypeVariableMode, placeholder: impl Into<String>) -> Self {
        Self {
            mode,
            placeholder: placeholder.into(),
        }
    }

    pub fn mode(&self) -> TypeVariableMode {
        self.mode
    }

    /// Fully render a type reference for a signature
    pub fn resolve(&self, scope: Scope<'_>, ty: &TypeNode, varargs: bool) -> String {
        let mut answer = self.qualify(scope, ty);

        if ty.is_parameterized() {
            answer = self.resolve_arguments(scope, ty, answer);
        } else if self.mode == TypeVariableMode::Erase && scope.type_variable(&answer).is_some() {
            answer = scope
                .bound_of(&answer)
                .map(str::to_string)
                .unwrap_or_else(|| self.placeholder.clone());
        }

        answer.push_str(&ty.array_suffix());
        if varargs || ty.varargs {
            answer.push_str("[]");
        }

        answer.replace(DEFAULT_IMPORT_PREFIX, "")
    }

    /// Qualify a reference and render its generic arguments, leaving type
    /// variables untouched
    pub fn qualify(&self, scope: Scope<'_>, ty: &TypeNode) -> String {
        if scope.type_variable(&ty.name).is_some() {
            return ty.name.clone();
        }

        let answer = qualify_name(scope.root, scope.lexical, &ty.name);
        if !ty.is_parameterized() {
            return answer;
        }
        if ty.is_array() {
            return ty.qualified_name_with_generics();
        }

        let args: Vec<String> = ty
            .type_arguments
            .iter()
            .map(|arg| self.qualify(scope, arg) + &arg.array_suffix())
            .collect();
        format!("{}<{}>", answer, args.join(", "))
    }

    fn resolve_arguments(&self, scope: Scope<'_>, ty: &TypeNode, mut answer: String) -> String {
        let mut bounded = false;
        let mut found = false;

        for arg in &ty.type_arguments {
            if scope.has_bounds(&arg.name) {
                bounded = true;
                if let Some(bound) = scope.bound_of(&arg.name) {
                    answer = replace_identifier(&answer, &arg.name, bound);
                    found = true;
                }
            }
        }

        if !bounded && !ty.type_arguments.iter().all(is_qualified_argument) {
            bounded = true;
        }

        if bounded && !found {
            trace!("Dropping unresolvable generics of {}", answer);
            return ty.qualified_name.clone();
        }
        answer
    }
}

/// Name-level qualification: nested declarations first, then imports
fn qualify_name(root: &ClassNode, lexical: &ClassNode, name: &str) -> String {
    if name == "void" {
        return name.to_string();
    }

    if root.nested_type(name).is_some() {
        return format!("{}${}", root.qualified_name, name);
    }
    if lexical.nested_type(name).is_some() {
        return format!("{}${}", lexical.qualified_name, name);
    }

    if let Some((parent, child)) = name.split_once('.') {
        if name.starts_with(char::is_uppercase) {
            // Outer.Inner style reference to a nested type
            let joined = name.replace('.', "$");
            if root.nested_type(parent).is_some() {
                return format!("{}${}", root.qualified_name, joined);
            }
            if lexical.nested_type(parent).is_some() {
                return format!("{}${}", lexical.qualified_name, joined);
            }
            if parent == root.name {
                let joined = child.replace('.', "$");
                if root.nested_type(child).is_some() {
                    return format!("{}${}", root.qualified_name, joined);
                }
                if lexical.nested_type(child).is_some() {
                    return format!("{}${}", lexical.qualified_name, joined);
                }
            }
            return format!("{}${}", root.resolve_type(parent), child);
        }
    }

    let resolved = lexical.resolve_type(name);
    if resolved == name {
        root.resolve_type(name)
    } else {
        resolved
    }
}

/// Whether a type argument can be kept in a parameterized signature.
///
/// Anything from the `java` packages passes. Otherwise the argument needs a
/// dotted qualified name, and an all upper-case simple name is taken to be a
/// type variable even when no declaration says so.
fn is_qualified_argument(arg: &TypeNode) -> bool {
    if arg.qualified_name.starts_with("java") {
        return true;
    }
    !is_upper_case_only(&arg.name) && arg.qualified_name.contains('.')
}

pub fn is_upper_case_only(name: &str) -> bool {
    name.chars().all(char::is_uppercase)
}

/// Replace whole-identifier occurrences of `ident`
fn replace_identifier(text: &str, ident: &str, replacement: &str) -> String {
    let is_ident_char = |c: char| c.is_alphanumeric() || c == '_' || c == '$';
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for (idx, _) in text.match_indices(ident) {
        let before = text[..idx].chars().next_back();
        let after = text[idx + ident.len()..].chars().next();
        let standalone = !before.is_some_and(|c| is_ident_char(c) || c == '.')
            && !after.is_some_and(is_ident_char);
        if standalone {
            out.push_str(&text[last..idx]);
            out.push_str(replacement);
            last = idx + ident.len();
        }
    }
    out.push_str(&text[last..]);
    out
}
