/// Strip one leading ```` ```json ```` or ```` ``` ```` fence and one
/// trailing ```` ``` ```` if present (case-insensitive), then trim. Anything
/// else malformed is left for the JSON parser to reject.
pub fn strip_fences(raw: &str) -> &str {
    let mut s = raw.trim();
    if s.get(..7).is_some_and(|p| p.eq_ignore_ascii_case("```json")) {
        s = &s[7..];
    } else if let Some(rest) = s.strip_prefix("```") {
        s = rest;
    }
    if let Some(rest) = s.strip_suffix("```") {
        s = rest;
    }
    s.trim()
}

#[cfg(test)]
mod sanitize_tests {
    use super::*;

    const PAYLOAD: &str = r#"{"items":[{"food_name":"toast"}]}"#;

    #[test]
    fn passes_unfenced_json_through() {
        assert_eq!(strip_fences(PAYLOAD), PAYLOAD);
    }

    #[test]
    fn strips_json_fences() {
        let fenced = format!("```json\n{PAYLOAD}\n```");
        assert_eq!(strip_fences(&fenced), PAYLOAD);
    }

    #[test]
    fn strips_bare_fences() {
        let fenced = format!("```\n{PAYLOAD}\n```");
        assert_eq!(strip_fences(&fenced), PAYLOAD);
    }

    #[test]
    fn fence_marker_is_case_insensitive() {
        let fenced = format!("```JSON\n{PAYLOAD}\n```");
        assert_eq!(strip_fences(&fenced), PAYLOAD);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let padded = format!("  \n{PAYLOAD}\n  ");
        assert_eq!(strip_fences(&padded), PAYLOAD);
    }

    #[test]
    fn round_trips_through_json_identically() {
        let fenced = format!("```json\n{PAYLOAD}\n```");
        let from_fenced: serde_json::Value =
            serde_json::from_str(strip_fences(&fenced)).unwrap();
        let from_plain: serde_json::Value = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(from_fenced, from_plain);
    }

    #[test]
    fn leaves_interior_fences_alone() {
        // Only one leading and one trailing marker are removed.
        let s = "```json\n{\"a\":\"```\"}\n```";
        assert_eq!(strip_fences(s), "{\"a\":\"```\"}");
    }
}
