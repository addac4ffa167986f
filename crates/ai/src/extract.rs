//! Response-shape normalization.
//!
//! The generateContent endpoint has answered with several shapes over
//! time. Extraction runs an ordered list of matchers against the raw
//! JSON; the first one that produces text wins, and an unrecognized
//! shape falls back to its JSON serialization so the caller always gets
//! *some* string once the HTTP call succeeded.

use serde_json::Value;

type Extractor = fn(&Value) -> Option<String>;

/// Matchers in priority order: current candidate/parts shape first,
/// then the block-list and direct-text variants, then the legacy
/// `output` field.
const EXTRACTORS: &[Extractor] = &[
    candidate_parts,
    candidate_block_list,
    candidate_text,
    legacy_output,
];

/// Extract readable text from a generateContent response. Never fails.
pub fn extract_text(data: &Value) -> String {
    EXTRACTORS
        .iter()
        .find_map(|extract| extract(data))
        .unwrap_or_else(|| data.to_string())
}

fn first_candidate(data: &Value) -> Option<&Value> {
    data.get("candidates")?.get(0)
}

/// `candidates[0].content.parts[].text`, joined with blank lines.
fn candidate_parts(data: &Value) -> Option<String> {
    let content = first_candidate(data)?.get("content")?;
    join_texts(part_texts(content.get("parts")?))
}

/// `candidates[0].content` as a list of blocks, each holding `parts` or
/// a direct `text` field.
fn candidate_block_list(data: &Value) -> Option<String> {
    let blocks = first_candidate(data)?.get("content")?.as_array()?;
    join_texts(flatten_blocks(blocks))
}

/// `candidates[0].text` as a direct string.
fn candidate_text(data: &Value) -> Option<String> {
    first_candidate(data)?
        .get("text")?
        .as_str()
        .map(str::to_string)
}

/// Legacy `output` field: either the text itself or a list of blocks.
fn legacy_output(data: &Value) -> Option<String> {
    let output = data.get("output")?;
    if let Some(text) = output.as_str() {
        return Some(text.to_string());
    }
    join_texts(flatten_blocks(output.as_array()?))
}

fn part_texts(parts: &Value) -> Vec<String> {
    parts
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part.get("text").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn flatten_blocks(blocks: &[Value]) -> Vec<String> {
    blocks
        .iter()
        .flat_map(|block| {
            if let Some(parts) = block.get("parts") {
                part_texts(parts)
            } else if let Some(text) = block.get("text").and_then(Value::as_str) {
                vec![text.to_string()]
            } else {
                Vec::new()
            }
        })
        .collect()
}

fn join_texts(texts: Vec<String>) -> Option<String> {
    if texts.is_empty() {
        None
    } else {
        Some(texts.join("\n\n"))
    }
}
