//! Owned projection of a parsed program
//!
//! The checker never touches the collaborator's AST types. Instead the
//! engine serializes the program and this module walks the serialized tree,
//! collecting the depth-first node-kind sequence plus whatever metadata the
//! parse options retain: position ranges under `loc`, original literal text
//! under `raw`.

use serde::Serialize;
use serde_json::Value;

use crate::retrip::options::ParseOptions;

/// Source position range of one node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub start: u64,
    pub end: u64,
}

/// Original text of one literal token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawLiteral {
    /// Node kind the literal text belongs to
    pub kind: String,
    /// The literal exactly as it appeared in the source
    pub raw: String,
}

/// Depth-first structural summary of a parsed program
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AstSummary {
    /// Node kinds in depth-first order
    pub kinds: Vec<String>,
    /// Position ranges aligned with `kinds`; retained only under `loc`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<Position>>,
    /// Literal token texts in depth-first order; retained only under `raw`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_literals: Option<Vec<RawLiteral>>,
}

impl AstSummary {
    /// Build a summary from a serialized program
    pub fn from_value(value: &Value, options: &ParseOptions) -> Self {
        let mut summary = AstSummary {
            kinds: Vec::new(),
            positions: options.loc.then(Vec::new),
            raw_literals: options.raw.then(Vec::new),
        };
        summary.walk(value);
        summary
    }

    /// Number of nodes in the summary
    pub fn node_count(&self) -> usize {
        self.kinds.len()
    }

    fn walk(&mut self, value: &Value) {
        match value {
            Value::Object(map) => {
                if let Some(kind) = map.get("type").and_then(Value::as_str) {
                    self.kinds.push(kind.to_string());
                    if let Some(positions) = self.positions.as_mut() {
                        // Nodes without a recorded span get a zero range so
                        // positions stay aligned with kinds.
                        positions.push(node_position(map).unwrap_or(Position { start: 0, end: 0 }));
                    }
                    if let Some(raws) = self.raw_literals.as_mut() {
                        if kind.ends_with("Literal") {
                            if let Some(raw) = map.get("raw").and_then(Value::as_str) {
                                raws.push(RawLiteral {
                                    kind: kind.to_string(),
                                    raw: raw.to_string(),
                                });
                            }
                        }
                    }
                }
                for (key, child) in map {
                    // Span objects carry no structure of their own
                    if key == "span" {
                        continue;
                    }
                    self.walk(child);
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.walk(item);
                }
            }
            _ => {}
        }
    }
}

/// Extract a node's position range, whether the span is flattened into the
/// node (`start`/`end` fields) or nested under a `span` object.
fn node_position(map: &serde_json::Map<String, Value>) -> Option<Position> {
    let from_fields = |m: &serde_json::Map<String, Value>| {
        let start = m.get("start")?.as_u64()?;
        let end = m.get("end")?.as_u64()?;
        Some(Position { start, end })
    };
    from_fields(map).or_else(|| map.get("span").and_then(Value::as_object).and_then(from_fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_tree() -> Value {
        json!({
            "type": "Program",
            "start": 0,
            "end": 12,
            "body": [
                {
                    "type": "ExpressionStatement",
                    "start": 0,
                    "end": 12,
                    "expression": {
                        "type": "NumericLiteral",
                        "span": { "start": 0, "end": 4 },
                        "value": 255.0,
                        "raw": "0xFF"
                    }
                }
            ]
        })
    }

    #[test]
    fn test_kinds_are_collected_depth_first() {
        let summary = AstSummary::from_value(&sample_tree(), &ParseOptions::new());
        assert_eq!(
            summary.kinds,
            vec!["Program", "ExpressionStatement", "NumericLiteral"]
        );
        assert_eq!(summary.node_count(), 3);
        assert!(summary.positions.is_none());
        assert!(summary.raw_literals.is_none());
    }

    #[test]
    fn test_loc_retains_positions_from_both_span_shapes() {
        let options = ParseOptions::new().with_loc(true);
        let summary = AstSummary::from_value(&sample_tree(), &options);
        let positions = summary.positions.unwrap();
        assert_eq!(
            positions,
            vec![
                Position { start: 0, end: 12 },
                Position { start: 0, end: 12 },
                Position { start: 0, end: 4 },
            ]
        );
    }

    #[test]
    fn test_raw_retains_literal_text() {
        let options = ParseOptions::new().with_raw(true);
        let summary = AstSummary::from_value(&sample_tree(), &options);
        assert_eq!(
            summary.raw_literals.unwrap(),
            vec![RawLiteral {
                kind: "NumericLiteral".to_string(),
                raw: "0xFF".to_string(),
            }]
        );
    }

    #[test]
    fn test_non_literal_raw_fields_are_ignored() {
        let options = ParseOptions::new().with_raw(true);
        let tree = json!({
            "type": "Directive",
            "raw": "use strict"
        });
        let summary = AstSummary::from_value(&tree, &options);
        assert!(summary.raw_literals.unwrap().is_empty());
    }
}
