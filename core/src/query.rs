/// Phrase substituted for a blank query.
pub const DEFAULT_QUERY: &str = "general insurance topics";

/// The query actually sent to the pipeline: blank input, or a literal `''`, becomes `default`.
pub fn effective_query<'a>(raw: &'a str, default: &'a str) -> &'a str {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "''" { default } else { raw }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_queries_fall_back() {
        assert_eq!(effective_query("", DEFAULT_QUERY), DEFAULT_QUERY);
        assert_eq!(effective_query("   ", DEFAULT_QUERY), DEFAULT_QUERY);
        assert_eq!(effective_query(" '' ", DEFAULT_QUERY), DEFAULT_QUERY);
        assert_eq!(effective_query("car insurance", DEFAULT_QUERY), "car insurance");
    }
}
