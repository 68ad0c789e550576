//! WASM bindings for browser-side match replay

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::archetype::{Archetype, ARCHETYPES};
use crate::game::run_match;

/// Parse an archetype from either a bare name (`Cyclic`) or its JSON
/// form (`"Cyclic"`).
fn parse_archetype(input: &str) -> Result<Archetype, String> {
    if let Ok(a) = serde_json::from_str::<Archetype>(input) {
        return Ok(a);
    }
    serde_json::from_str::<Archetype>(&format!("\"{}\"", input.trim()))
        .map_err(|_| format!("Unknown archetype: {}", input))
}

/// Replay a match against one archetype bot with round-by-round details
///
/// # Arguments
/// * `archetype` - Archetype name, bare or JSON-quoted
/// * `seed` - 32-byte randomness seed
/// * `stream` - Stream index separating matches that share a seed
/// * `rounds` - Number of rounds to play
///
/// # Returns
/// A `MatchSummary` as a JS object
#[wasm_bindgen]
pub fn replay_match(
    archetype: &str,
    seed: &[u8],
    stream: u32,
    rounds: u32,
) -> Result<JsValue, JsError> {
    let bot = parse_archetype(archetype).map_err(|e| JsError::new(&e))?;
    let seed_arr: [u8; 32] = seed
        .try_into()
        .map_err(|_| JsError::new("Seed must be exactly 32 bytes"))?;

    let summary = run_match(bot, rounds, &seed_arr, stream);

    serde_wasm_bindgen::to_value(&summary)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

#[derive(serde::Serialize)]
struct ArchetypeInfo {
    id: String,
    name: String,
    description: String,
}

/// Get all simulated opponent archetypes
#[wasm_bindgen]
pub fn list_archetypes() -> Result<JsValue, JsError> {
    let infos: Vec<ArchetypeInfo> = ARCHETYPES
        .iter()
        .map(|a| ArchetypeInfo {
            id: serde_json::to_string(a)
                .unwrap_or_default()
                .trim_matches('"')
                .to_string(),
            name: a.name().to_string(),
            description: a.describe().to_string(),
        })
        .collect();

    serde_wasm_bindgen::to_value(&infos)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Get a human-readable description of one archetype
#[wasm_bindgen]
pub fn describe_archetype(archetype: &str) -> Result<String, JsError> {
    let a = parse_archetype(archetype).map_err(|e| JsError::new(&e))?;
    Ok(a.describe().to_string())
}
