//! Parser session holding the results of one parse
//!
//! A session parses a compilation unit, optionally narrows it to a nested
//! declaration, and records signatures and documentation in a
//! [`ParseResult`]. Results of successive parses accumulate until
//! [`ParserSession::reset`] discards them.
//!
//! `parse` takes `&mut self`, so a session cannot be driven by two parses at
//! once. [`SharedSession`] wraps one in a mutex for callers that need to share
//! it across threads; concurrent `try_parse` calls are rejected.

use crate::config::ProjectConfig;
use crate::error::{ApiSigError, ApiSigResult};
use crate::javadoc::JavadocSanitizer;
use crate::models::ClassNode;
use crate::parsers::{JavaParser, SourceParser};
use crate::resolver::TypeResolver;
use crate::signature::{MethodSignature, SignatureBuilder};
use indexmap::IndexMap;
use serde::Serialize;
use std::io::Read;
use std::sync::{Arc, Mutex, TryLockError};
use tracing::{debug, warn};

/// Everything collected by a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    /// Qualified name of the parsed declaration
    pub class_name: Option<String>,
    /// Rendered signatures in declaration order, overloads included
    pub methods: Vec<String>,
    /// Method name to its last rendered signature
    pub method_text: IndexMap<String, String>,
    /// Method name to parameter docs, merged across overloads
    pub parameters: IndexMap<String, IndexMap<String, String>>,
    /// Signature to parameter types
    pub signature_arguments: IndexMap<String, IndexMap<String, String>>,
    /// One-line description of the declaration
    pub api_description: String,
    /// Method name to one-line description
    pub method_descriptions: IndexMap<String, String>,
    pub error_message: Option<String>,
}

impl ParseResult {
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
            && self.method_text.is_empty()
            && self.parameters.is_empty()
            && self.signature_arguments.is_empty()
            && self.method_descriptions.is_empty()
            && self.api_description.is_empty()
    }

    /// Record a built signature.
    ///
    /// Parameter docs of an overload only fill in names not seen before.
    pub fn record(&mut self, signature: MethodSignature) {
        let MethodSignature {
            method_name,
            text,
            param_docs,
            param_types,
            description,
        } = signature;

        let docs = self.parameters.entry(method_name.clone()).or_default();
        for (name, doc) in param_docs {
            docs.entry(name).or_insert(doc);
        }

        if !description.is_empty() {
            self.method_descriptions
                .insert(method_name.clone(), description);
        }

        self.methods.push(text.clone());
        self.signature_arguments.insert(text.clone(), param_types);
        self.method_text.insert(method_name, text);
    }

    fn not_found(path: &str, root: &ClassNode) -> Self {
        Self {
            error_message: Some(format!(
                "Cannot find inner class {} in class: {}",
                path, root.qualified_name
            )),
            ..Default::default()
        }
    }
}

pub struct ParserSession {
    parser: Box<dyn SourceParser>,
    resolver: TypeResolver,
    sanitizer: JavadocSanitizer,
    result: ParseResult,
}

impl std::fmt::Debug for ParserSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserSession")
            .field("resolver", &self.resolver)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}

impl Default for ParserSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserSession {
    pub fn new() -> Self {
        Self::with_parser(JavaParser)
    }

    /// Use a different syntax provider
    pub fn with_parser(parser: impl SourceParser + 'static) -> Self {
        Self {
            parser: Box::new(parser),
            resolver: TypeResolver::default(),
            sanitizer: JavadocSanitizer::default(),
            result: ParseResult::default(),
        }
    }

    /// Session with the resolver settings of an `apisig.toml`
    pub fn from_config(config: &ProjectConfig) -> Self {
        Self::new().with_resolver(config.resolver.to_resolver())
    }

    pub fn with_resolver(mut self, resolver: TypeResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_sanitizer(mut self, sanitizer: JavadocSanitizer) -> Self {
        self.sanitizer = sanitizer;
        self
    }

    pub fn result(&self) -> &ParseResult {
        &self.result
    }

    pub fn into_result(self) -> ParseResult {
        self.result
    }

    /// Discard everything collected so far
    pub fn reset(&mut self) {
        self.result = ParseResult::default();
    }

    /// Parse Java source text, optionally narrowed to a `$`-delimited nested path
    pub fn parse(&mut self, source: &str, inner: Option<&str>) -> ApiSigResult<&ParseResult> {
        let root = self.parser.parse(source)?;
        Ok(self.parse_unit(&root, inner))
    }

    pub fn parse_reader<R: Read>(
        &mut self,
        mut reader: R,
        inner: Option<&str>,
    ) -> ApiSigResult<&ParseResult> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        self.parse(&source, inner)
    }

    /// Collect signatures from an already parsed compilation unit
    pub fn parse_unit(&mut self, root: &ClassNode, inner: Option<&str>) -> &ParseResult {
        let target = match inner {
            Some(path) => match root.find_nested(path) {
                Some(nested) => nested,
                None => {
                    let failed = ParseResult::not_found(path, root);
                    warn!("{}", failed.error_message.as_deref().unwrap_or_default());
                    self.result = failed;
                    return &self.result;
                }
            },
            None => root,
        };

        debug!("Parsing class: {}", target.qualified_name);

        let mut description = self
            .sanitizer
            .summary(target.javadoc.as_ref().map(|d| d.raw.as_str()));
        if description.is_empty() {
            description = self
                .sanitizer
                .summary(root.javadoc.as_ref().map(|d| d.raw.as_str()));
        }

        let signatures =
            SignatureBuilder::new(&self.resolver, &self.sanitizer).build_all(root, target);
        debug!(
            "Built {} signatures for {}",
            signatures.len(),
            target.qualified_name
        );

        self.result.class_name = Some(target.qualified_name.clone());
        self.result.api_description = description;
        for signature in signatures {
            self.result.record(signature);
        }
        &self.result
    }
}

/// A session shared between threads
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<ParserSession>>,
}

impl SharedSession {
    pub fn new(session: ParserSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Parse, waiting for any parse already in progress
    pub fn parse(&self, source: &str, inner: Option<&str>) -> ApiSigResult<ParseResult> {
        let mut session = self.inner.lock().unwrap_or_else(|poison| poison.into_inner());
        session.parse(source, inner).cloned()
    }

    /// Parse, failing with [`ApiSigError::SessionBusy`] if another parse holds the session
    pub fn try_parse(&self, source: &str, inner: Option<&str>) -> ApiSigResult<ParseResult> {
        let mut session = match self.inner.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::WouldBlock) => return Err(ApiSigError::SessionBusy),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
        };
        session.parse(source, inner).cloned()
    }

    pub fn reset(&self) {
        self.inner
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .reset();
    }

    pub fn result(&self) -> ParseResult {
        self.inner
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .result()
            .clone()
    }
}
