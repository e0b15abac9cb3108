/// Tokens meaning "this activity has no predecessor".
const NO_PREDECESSOR: &[&str] = &["-", "\u{2014}"];

/// Parse a free-text predecessor field into upstream activity ids.
///
/// Splits on commas, trims each token and drops empty tokens, the
/// no-predecessor markers and repeated ids. Never fails.
pub fn parse_predecessors(raw: Option<&str>) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for token in raw.unwrap_or("").split(',') {
        let token = token.trim();
        if token.is_empty() || NO_PREDECESSOR.contains(&token) {
            continue;
        }
        if !ids.iter().any(|id| id == token) {
            ids.push(token.to_string());
        }
    }
    ids
}
