//! API model reporter
//!
//! Folds a parse result into the shape code generators consume: one API per
//! parsed declaration, one entry per method name with all of its overloads,
//! and the union of their parameters as options.

use super::ParsedSource;
use crate::session::ParseResult;
use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiModel {
    pub name: String,
    pub description: String,
    pub methods: Vec<ApiMethodModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiMethodModel {
    pub name: String,
    pub description: String,
    pub signatures: Vec<String>,
    pub options: Vec<ApiOptionModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiOptionModel {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
}

impl ApiModel {
    /// Build the model for one parse result. Failed parses yield no API.
    pub fn from_result(result: &ParseResult) -> Option<Self> {
        if result.error_message.is_some() {
            return None;
        }
        let class_name = result.class_name.as_deref()?;
        let simple_name = class_name.rsplit('.').next().unwrap_or(class_name);

        let mut by_name: IndexMap<&str, Vec<&str>> = IndexMap::new();
        for signature in &result.methods {
            by_name
                .entry(method_name_of(signature))
                .or_default()
                .push(signature.as_str());
        }

        let methods = by_name
            .into_iter()
            .map(|(name, signatures)| {
                let docs = result.parameters.get(name);
                let mut options: IndexMap<&str, ApiOptionModel> = IndexMap::new();
                for signature in &signatures {
                    let Some(args) = result.signature_arguments.get(*signature) else {
                        continue;
                    };
                    for (param, ty) in args {
                        options.entry(param.as_str()).or_insert_with(|| ApiOptionModel {
                            name: param.clone(),
                            type_name: ty.clone(),
                            description: docs
                                .and_then(|d| d.get(param))
                                .cloned()
                                .unwrap_or_default(),
                        });
                    }
                }

                ApiMethodModel {
                    name: name.to_string(),
                    description: result
                        .method_descriptions
                        .get(name)
                        .cloned()
                        .unwrap_or_default(),
                    signatures: signatures.into_iter().map(str::to_string).collect(),
                    options: options.into_values().collect(),
                }
            })
            .collect();

        Some(ApiModel {
            name: camel_case_to_dash(simple_name),
            description: result.api_description.clone(),
            methods,
        })
    }
}

/// `public String greet(String name)` -> `greet`
pub(super) fn method_name_of(signature: &str) -> &str {
    let head = signature.split('(').next().unwrap_or(signature);
    head.rsplit(' ').next().unwrap_or(head)
}

/// Convert `CamelCase` to `camel-case`.
///
/// A dash goes before an upper-case letter that follows a lower-case one, and
/// before the last letter of an upper-case run when a lower-case letter
/// follows it (`HTTPServer` -> `http-server`). Underscores become dashes.
pub fn camel_case_to_dash(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut answer = String::with_capacity(text.len() + 4);

    for (i, &ch) in chars.iter().enumerate() {
        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();

        if ch == '-' || ch == '_' {
            answer.push('-');
            continue;
        }

        if ch.is_uppercase() {
            if let Some(p) = prev {
                let boundary = !p.is_uppercase() || next.is_some_and(char::is_lowercase);
                if boundary && p != '-' && p != '_' {
                    answer.push('-');
                }
            }
        }
        answer.push(ch);
    }

    answer.to_lowercase()
}

/// Render the API models of every successfully parsed source as JSON
pub fn render(sources: &[ParsedSource]) -> Result<String> {
    let models: Vec<ApiModel> = sources
        .iter()
        .filter_map(|s| ApiModel::from_result(&s.result))
        .collect();
    Ok(serde_json::to_string_pretty(&models)?)
}
