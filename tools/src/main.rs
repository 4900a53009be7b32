//! logictype-export: headless registry exporter.
//!
//! Writes the extended logic type registry as JSON for compiler and
//! documentation tooling.
//!
//! Usage:
//!   logictype-export --out logictypes.json
//!   logictype-export --out logictypes.json --compact

use anyhow::Result;
use extlogic_core::{export, runtime::LogicRuntime};
use std::collections::BTreeMap;
use std::env;
use std::fs;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let out = args
        .windows(2)
        .find(|w| w[0] == "--out")
        .map(|w| w[1].as_str())
        .unwrap_or("logictypes.json");
    let compact = args.iter().any(|a| a == "--compact");

    let runtime = LogicRuntime::init()?;
    let json = if compact {
        export::to_json_compact(runtime.registry())?
    } else {
        runtime.export_json()?
    };

    // Parse the document back before writing: a malformed export must fail
    // here, not in the downstream compiler.
    let doc: serde_json::Value = serde_json::from_str(&json)?;
    let entries = doc["logicTypes"]
        .as_array()
        .map(|a| a.len())
        .unwrap_or(0);

    fs::write(out, &json)?;
    log::info!("Wrote {} bytes to {out}", json.len());

    println!("logictype-export");
    println!("  out:     {out}");
    println!("  format:  {}", if compact { "compact" } else { "pretty" });
    println!("  entries: {entries}");
    println!();

    println!("=== CATEGORY SUMMARY ===");
    let mut categories: BTreeMap<&str, usize> = BTreeMap::new();
    for descriptor in runtime.registry().iter() {
        *categories.entry(descriptor.category.as_str()).or_default() += 1;
    }
    for (category, count) in categories {
        println!("  {category:<18} {count}");
    }

    Ok(())
}
