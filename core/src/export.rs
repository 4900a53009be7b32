//! Registry export for external compiler/tooling integration.
//!
//! The document shape is a compatibility surface: field names and their
//! order are consumed by downstream tooling and must not change silently.
//! Struct declaration order below IS the wire order.

use crate::{error::LogicResult, registry::LogicRegistry, types::LogicId};
use serde::Serialize;

#[derive(Serialize)]
struct ExportDocument<'a> {
    #[serde(rename = "logicTypes")]
    logic_types: Vec<ExportEntry<'a>>,
}

/// One exported descriptor.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportEntry<'a> {
    name: &'a str,
    display_name: &'a str,
    description: &'a str,
    value: LogicId,
    hash: i32,
    data_type: &'a str,
    access: &'a str,
    category: &'a str,
}

fn document(registry: &LogicRegistry) -> ExportDocument<'_> {
    ExportDocument {
        logic_types: registry
            .iter()
            .map(|d| ExportEntry {
                name: &d.name,
                display_name: &d.display_name,
                description: &d.description,
                value: d.id,
                hash: d.hash,
                data_type: d.value_type.as_str(),
                access: d.access.as_str(),
                category: &d.category,
            })
            .collect(),
    }
}

/// Pretty-printed UTF-8 JSON, one element per descriptor in registration
/// order. Deterministic across runs for the same build.
pub fn to_json(registry: &LogicRegistry) -> LogicResult<String> {
    Ok(serde_json::to_string_pretty(&document(registry))?)
}

/// Single-line form of the same document.
pub fn to_json_compact(registry: &LogicRegistry) -> LogicResult<String> {
    Ok(serde_json::to_string(&document(registry))?)
}
