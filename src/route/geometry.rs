//! Parsing of the provider's `selection` coordinate strings
//!
//! Grammar accepted by [`parse_linestring`]:
//!
//! ```text
//! selection := "LINESTRING" [ tag ] "(" pair { "," pair } ")"
//! pair      := lon WS lat { WS token }
//! ```
//!
//! Surrounding whitespace is ignored, as is an optional alphabetic dimension
//! tag separated from the keyword by whitespace (`LINESTRING Z(...)`). Only
//! the first two tokens of a pair are read; pairs where those two tokens are
//! missing or not finite numbers are skipped.

use super::models::Coordinate;

const PREFIX: &str = "LINESTRING";

/// Decode a `LINESTRING(lon lat, ...)` selection into `[lon, lat]` pairs.
///
/// Never fails: input that does not follow the grammar yields fewer (or no)
/// coordinates.
pub fn parse_linestring(selection: &str) -> Vec<Coordinate> {
    let Some(rest) = selection.trim().strip_prefix(PREFIX) else {
        return Vec::new();
    };

    let Some(open) = rest.find('(') else {
        return Vec::new();
    };
    if !is_dimension_tag(&rest[..open]) {
        return Vec::new();
    }
    let body = &rest[open + 1..];
    let body = match body.rfind(')') {
        Some(close) => &body[..close],
        None => return Vec::new(),
    };

    body.split(',').filter_map(parse_pair).collect()
}

/// Text between the keyword and `(`: nothing, or whitespace then letters
fn is_dimension_tag(between: &str) -> bool {
    let tag = between.trim();
    tag.is_empty()
        || (between.starts_with(char::is_whitespace)
            && tag.chars().all(|c| c.is_ascii_alphabetic()))
}

fn parse_pair(pair: &str) -> Option<Coordinate> {
    let mut tokens = pair.split_whitespace();
    let lon = tokens.next()?.parse::<f64>().ok()?;
    let lat = tokens.next()?.parse::<f64>().ok()?;
    // `parse` accepts "NaN" and "inf", which have no JSON form
    Some([lon, lat]).filter(|c| c.iter().all(|v| v.is_finite()))
}
