//! Parsing of raw coordinate-ring strings into closed JSON rings.

use serde_json::Value;
use tracing::debug;

/// Parse a whitespace-separated string of `x,y` tokens into a closed ring of
/// JSON coordinate tuples.
///
/// Tokens that parse numerically become `[x, y]` tuples, with `z` appended
/// as a third component when given. The source format does not enforce
/// numeric coordinates, so a token that fails to parse passes through as its
/// original string components instead of failing the ring; such a tuple
/// never carries a z. The ring is closed by appending a copy of the first
/// vertex when the raw string does not already end where it starts.
pub fn format_ring(raw: &str, z: Option<f64>) -> Vec<Value> {
    let mut ring = Vec::new();
    for token in raw.split_whitespace() {
        let mut parts = token.splitn(3, ',');
        let (Some(x), Some(y)) = (parts.next(), parts.next()) else {
            debug!(token, "coordinate token is not an x,y pair; skipped");
            continue;
        };
        ring.push(vertex(x, y, z));
    }
    if let Some(first) = ring.first().cloned() {
        if Some(&first) != ring.last() {
            ring.push(first);
        }
    }
    ring
}

fn vertex(x: &str, y: &str, z: Option<f64>) -> Value {
    match (parse_coordinate(x), parse_coordinate(y)) {
        (Some(x), Some(y)) => {
            let mut tuple = vec![Value::from(x), Value::from(y)];
            if let Some(z) = z {
                tuple.push(Value::from(z));
            }
            Value::Array(tuple)
        }
        _ => Value::Array(vec![Value::from(x), Value::from(y)]),
    }
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    // JSON has no representation for non-finite numbers.
    value.is_finite().then_some(value)
}
