// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Block file parsing
//!
//! ```hcl
//! kubernetes_job "prod" {
//!   namespace         = "prod"
//!   image             = "prefecthq/prefect:2-python3.9"
//!   image_pull_policy = "IfNotPresent"
//!   env = {
//!     EXTRA_PIP_PACKAGES    = "s3fs"
//!     PREFECT_LOGGING_LEVEL = "DEBUG"
//!   }
//! }
//!
//! process "local" {
//!   command = ["python", "flow.py"]
//! }
//! ```
//!
//! TOML and JSON use the same shape as nested tables:
//! `kind -> label -> fields`.

use indexmap::map::Entry;
use indexmap::IndexMap;
use kj_core::{BlockName, ConfigError, DockerContainer, Infrastructure, KubernetesJob, Process};
use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::marker::PhantomData;
use thiserror::Error;

/// Supported block file syntaxes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Hcl,
    Toml,
    Json,
}

/// Errors from parsing a single block file's content
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("HCL parse error: {0}")]
    Hcl(#[from] hcl::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidName(#[from] ConfigError),
    #[error("unknown block kind '{0}' (expected kubernetes_job, docker_container or process)")]
    UnknownKind(String),
    #[error("'{kind}' block needs exactly one label, found {count}")]
    Labels { kind: String, count: usize },
    #[error("block '{0}' is declared more than once")]
    DuplicateName(String),
    #[error("block '{name}': {source}")]
    Block { name: String, source: serde_json::Error },
}

/// A named block declared in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub name: BlockName,
    pub infrastructure: Infrastructure,
}

/// One `kind "label" { ... }` declaration before its body is decoded.
struct Declaration {
    kind: String,
    label: String,
    body: serde_json::Value,
}

/// Map entries in source order, repeated keys included.
struct Entries<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = Entries<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of labeled blocks")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

/// Parse block declarations from `content`, in declaration order.
pub fn parse_blocks(content: &str, format: Format) -> Result<Vec<Block>, ParseError> {
    let declarations = match format {
        Format::Hcl => hcl_declarations(content)?,
        Format::Toml => flatten(toml::from_str(content)?),
        Format::Json => flatten(serde_json::from_str(content)?),
    };

    let mut blocks: IndexMap<BlockName, Infrastructure> = IndexMap::new();
    for Declaration { kind, label, body } in declarations {
        let name = BlockName::parse(label)?;
        let infrastructure = decode(&kind, &name, body)?;
        match blocks.entry(name) {
            Entry::Occupied(entry) => {
                return Err(ParseError::DuplicateName(entry.key().to_string()));
            }
            Entry::Vacant(entry) => {
                entry.insert(infrastructure);
            }
        }
    }

    Ok(blocks.into_iter().map(|(name, infrastructure)| Block { name, infrastructure }).collect())
}

/// Walk the top-level HCL body so repeated blocks stay separate.
fn hcl_declarations(content: &str) -> Result<Vec<Declaration>, ParseError> {
    let body = hcl::parse(content)?;
    let mut declarations = Vec::new();
    for structure in body {
        let block = match structure {
            hcl::Structure::Block(block) => block,
            hcl::Structure::Attribute(attr) => {
                return Err(ParseError::UnknownKind(attr.key.to_string()));
            }
        };
        let kind = block.identifier.to_string();
        let label = match block.labels.as_slice() {
            [label] => label.as_str().to_string(),
            labels => return Err(ParseError::Labels { kind, count: labels.len() }),
        };
        let body = hcl::from_body(block.body)?;
        declarations.push(Declaration { kind, label, body });
    }
    Ok(declarations)
}

fn flatten(kinds: Entries<Entries<serde_json::Value>>) -> Vec<Declaration> {
    kinds
        .0
        .into_iter()
        .flat_map(|(kind, labeled)| {
            labeled.0.into_iter().map(move |(label, body)| Declaration {
                kind: kind.clone(),
                label,
                body,
            })
        })
        .collect()
}

fn decode(
    kind: &str,
    name: &BlockName,
    body: serde_json::Value,
) -> Result<Infrastructure, ParseError> {
    match kind {
        "kubernetes_job" => decode_as::<KubernetesJob>(name, body).map(Infrastructure::from),
        "docker_container" => decode_as::<DockerContainer>(name, body).map(Infrastructure::from),
        "process" => decode_as::<Process>(name, body).map(Infrastructure::from),
        other => Err(ParseError::UnknownKind(other.to_string())),
    }
}

fn decode_as<T: DeserializeOwned>(
    name: &BlockName,
    body: serde_json::Value,
) -> Result<T, ParseError> {
    serde_json::from_value(body)
        .map_err(|source| ParseError::Block { name: name.to_string(), source })
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
