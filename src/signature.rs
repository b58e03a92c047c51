//! Canonical method signature building
//!
//! A signature always renders as `public <return> <name>(<type> <param>, ...)`
//! with every type run through the [`TypeResolver`]. Parameter documentation
//! comes from the method's `@param` tags.

use crate::javadoc::JavadocSanitizer;
use crate::models::{ClassNode, DeclarationKind, MethodNode};
use crate::resolver::{Scope, TypeResolver};
use indexmap::IndexMap;
use tracing::{debug, trace};

impl DeclarationKind {
    /// Whether a method of this declaration kind becomes a signature.
    ///
    /// Constructors never do. Interface methods are implicitly public, every
    /// other declaration kind needs an explicit `public`.
    pub fn accepts(&self, method: &MethodNode) -> bool {
        if method.constructor {
            return false;
        }
        match self {
            DeclarationKind::Interface => true,
            DeclarationKind::Class | DeclarationKind::Enum | DeclarationKind::Record => {
                method.is_public()
            }
        }
    }
}

/// One rendered method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub method_name: String,
    pub text: String,
    /// Parameter name to sanitized `@param` description
    pub param_docs: IndexMap<String, String>,
    /// Parameter name to resolved type
    pub param_types: IndexMap<String, String>,
    /// One-line summary of the method javadoc, may be empty
    pub description: String,
}

pub struct SignatureBuilder<'a> {
    resolver: &'a TypeResolver,
    sanitizer: &'a JavadocSanitizer,
}

impl<'a> SignatureBuilder<'a> {
    pub fn new(resolver: &'a TypeResolver, sanitizer: &'a JavadocSanitizer) -> Self {
        Self {
            resolver,
            sanitizer,
        }
    }

    /// Build every accepted method of `class` in declaration order
    pub fn build_all(&self, root: &ClassNode, class: &ClassNode) -> Vec<MethodSignature> {
        class
            .methods
            .iter()
            .filter_map(|method| self.build(root, class, method))
            .collect()
    }

    /// Render one method, or `None` when the declaration kind rejects it.
    ///
    /// The return type is resolved with `class` as its own root; parameters
    /// see the unit's real root declaration.
    pub fn build(
        &self,
        root: &ClassNode,
        class: &ClassNode,
        method: &MethodNode,
    ) -> Option<MethodSignature> {
        debug!("Parsing method: {}", method.name);
        if !class.kind.accepts(method) {
            return None;
        }

        // The return type sees the target declaration as its root, so a type
        // nested in the real root renders without the `$` path that the
        // parameters below get.
        let mut return_type = self.resolver.resolve(
            Scope::new(class, class, method),
            &method.return_type,
            false,
        );
        if return_type.is_empty() {
            return_type = "void".to_string();
        }
        trace!("Parsed return type as: {}", return_type);

        let tags = method.param_tags();
        let param_scope = Scope::new(root, class, method);
        let mut param_docs = IndexMap::new();
        let mut param_types = IndexMap::new();
        let mut rendered = Vec::with_capacity(method.parameters.len());

        for (i, param) in method.parameters.iter().enumerate() {
            let ty = self
                .resolver
                .resolve(param_scope, &param.type_node, param.varargs);
            trace!("Parsing parameter #{} ({} {})", i, ty, param.name);

            rendered.push(format!("{} {}", ty, param.name));
            param_docs.insert(
                param.name.clone(),
                self.sanitizer.param_doc(&tags, &param.name),
            );
            param_types.insert(param.name.clone(), ty);
        }

        let text = format!(
            "public {} {}({})",
            return_type,
            method.name,
            rendered.join(", ")
        );

        let raw_doc = method.javadoc.as_ref().map(|d| d.raw.as_str());
        Some(MethodSignature {
            method_name: method.name.clone(),
            text,
            param_docs,
            param_types,
            description: self.sanitizer.summary(raw_doc),
        })
    }
}
