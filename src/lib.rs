//! apisig - canonical method signatures from Java sources
//!
//! Parses one Java compilation unit at a time and produces the public method
//! signatures of a declaration, with every type resolved to its qualified
//! display form, plus one-line descriptions pulled from Javadoc.
//!
//! ```no_run
//! use apisig::ParserSession;
//!
//! let source = std::fs::read_to_string("DisputeGateway.java")?;
//! let mut session = ParserSession::new();
//! let result = session.parse(&source, None)?;
//! for signature in &result.methods {
//!     println!("{}", signature);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod javadoc;
pub mod models;
pub mod parsers;
pub mod reporters;
pub mod resolver;
pub mod session;
pub mod signature;

pub use error::{ApiSigError, ApiSigResult};
pub use javadoc::{JavadocSanitizer, MarkupNormalizer, TextNormalizer};
pub use parsers::{JavaParser, SourceParser};
pub use resolver::{TypeResolver, TypeVariableMode};
pub use session::{ParseResult, ParserSession, SharedSession};
pub use signature::{MethodSignature, SignatureBuilder};
