//! Syntax providers
//!
//! A provider turns one compilation unit into the owned [`ClassNode`] model.
//! The crate ships a tree-sitter backed Java provider; anything else that can
//! fill in the model can be plugged into a session instead.

mod java;

pub use java::{parse_source, JavaParser};

use crate::error::ApiSigResult;
use crate::models::ClassNode;

/// Parses source text into the root declaration of a compilation unit
pub trait SourceParser: Send + Sync {
    fn parse(&self, source: &str) -> ApiSigResult<ClassNode>;
}
