use serde_json::Value;

use crate::{
    foundation::error::{BannerError, BannerResult},
    schema::text::{
        LegacyRecord, LegacySingle, LegacyStyle, SlateConfig, TextBlock, TextDocument, TextNode,
        TextRun,
    },
};

/// The three historical text encodings, newest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextEncoding {
    /// `{type: "slate", nodes: [...]}`.
    Slate,
    /// `[{style, children: [{style}]}]`.
    Records,
    /// `{style}`.
    Single,
}

/// Identify the encoding of a text config. Checked in order slate, records, single.
pub fn detect(config: &Value) -> Option<TextEncoding> {
    if config.get("type").and_then(Value::as_str) == Some("slate")
        && config.get("nodes").is_some_and(Value::is_array)
    {
        return Some(TextEncoding::Slate);
    }
    if let Some(records) = config.as_array()
        && records
            .iter()
            .all(|r| r.get("style").is_some() && r.get("children").is_some_and(Value::is_array))
    {
        return Some(TextEncoding::Records);
    }
    if config.is_object() && config.get("style").is_some() {
        return Some(TextEncoding::Single);
    }
    None
}

/// Adapt any supported encoding into the canonical tree.
///
/// `element_text` is the layer's own `text` attribute; it supplies run text where the
/// encoding does not carry it.
pub fn adapt(config: &Value, element_text: Option<&str>) -> BannerResult<TextDocument> {
    match detect(config) {
        Some(TextEncoding::Slate) => {
            let slate: SlateConfig = serde_json::from_value(config.clone())
                .map_err(|e| BannerError::from_decode("slate text config", e))?;
            Ok(TextDocument {
                nodes: slate.nodes,
                boundary: slate.boundary,
            })
        }
        Some(TextEncoding::Records) => {
            let records: Vec<LegacyRecord> = serde_json::from_value(config.clone())
                .map_err(|e| BannerError::from_decode("legacy text records", e))?;
            Ok(adapt_records(&records, element_text))
        }
        Some(TextEncoding::Single) => {
            let single: LegacySingle = serde_json::from_value(config.clone())
                .map_err(|e| BannerError::from_decode("legacy text style", e))?;
            Ok(adapt_single(&single.style, element_text))
        }
        None => Err(BannerError::schema_mismatch(
            "text config is neither a slate document, a list of style records nor a style record",
        )),
    }
}

/// One paragraph per record, one leaf per child.
///
/// When no child carries text of its own, `element_text` is spread over the leaves: line `i`
/// goes to record `i` (surplus lines stay with the last record), and within a record the line
/// is cut at whitespace, or between characters when it has fewer words than the record has
/// children. Concatenating the result gives back `element_text`. A leaf is left empty only
/// when there is nothing left to give it: the config mixes texted and textless children, or
/// the element text is absent or shorter than the leaf count.
pub fn adapt_records(records: &[LegacyRecord], element_text: Option<&str>) -> TextDocument {
    let any_child_text = records
        .iter()
        .flat_map(|r| &r.children)
        .any(|c| c.style.text.as_deref().is_some_and(|t| !t.is_empty()));
    let lines = match element_text {
        Some(text) if !any_child_text => record_lines(text, records.len()),
        _ => Vec::new(),
    };

    let nodes = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let mut pieces = lines
                .get(index)
                .map(|line| split_pieces(line, record.children.len()))
                .unwrap_or_default()
                .into_iter();
            let leaves = record
                .children
                .iter()
                .map(|child| {
                    let text = match child.style.text.as_deref() {
                        Some(t) if !t.is_empty() => t.to_string(),
                        _ => pieces.next().unwrap_or_default(),
                    };
                    TextNode::Run(TextRun {
                        text,
                        style: merged(&record.style, &child.style).run_style(),
                        feed_text: None,
                    })
                })
                .collect();
            TextNode::Block(TextBlock::paragraph(leaves))
        })
        .collect();

    TextDocument {
        nodes,
        boundary: None,
    }
}

// One entry per record at most; lines past the last record join it.
fn record_lines(text: &str, records: usize) -> Vec<String> {
    if records == 0 {
        return Vec::new();
    }
    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    if lines.len() > records {
        let rest = lines.split_off(records - 1).join("\n");
        lines.push(rest);
    }
    lines
}

// Cut `line` into at most `leaves` non-empty pieces whose concatenation is `line`.
fn split_pieces(line: &str, leaves: usize) -> Vec<String> {
    if leaves == 0 || line.is_empty() {
        return Vec::new();
    }
    let words: Vec<&str> = line.split_inclusive(char::is_whitespace).collect();
    let units: Vec<&str> = if words.len() >= leaves {
        words
    } else {
        line.split_inclusive(|_: char| true).collect()
    };
    if units.len() <= leaves {
        return units.into_iter().map(str::to_string).collect();
    }
    let mut pieces: Vec<String> = units[..leaves - 1].iter().map(|u| u.to_string()).collect();
    pieces.push(units[leaves - 1..].concat());
    pieces
}

/// A single style for the whole text.
pub fn adapt_single(style: &LegacyStyle, element_text: Option<&str>) -> TextDocument {
    let text = style
        .text
        .as_deref()
        .filter(|t| !t.is_empty())
        .or(element_text)
        .unwrap_or_default()
        .to_string();
    let run = TextRun {
        text,
        style: style.run_style(),
        feed_text: None,
    };
    TextDocument {
        nodes: vec![TextNode::Block(TextBlock::paragraph(vec![TextNode::Run(run)]))],
        boundary: None,
    }
}

// Child style wins; the record style fills what the child leaves out.
fn merged(record: &LegacyStyle, child: &LegacyStyle) -> LegacyStyle {
    LegacyStyle {
        font_family: child.font_family.clone().or_else(|| record.font_family.clone()),
        font_type: child.font_type.or(record.font_type),
        font_style: child.font_style.or(record.font_style),
        font_prefix: child.font_prefix.clone().or_else(|| record.font_prefix.clone()),
        font_weight: child.font_weight.or(record.font_weight),
        font_face_url: child.font_face_url.clone().or_else(|| record.font_face_url.clone()),
        font_url: child.font_url.clone().or_else(|| record.font_url.clone()),
        color: child.color.clone().or_else(|| record.color.clone()),
        text_decoration: child.text_decoration.or(record.text_decoration),
        text: child.text.clone(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/legacy.rs"]
mod tests;
