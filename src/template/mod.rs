//! Literal placeholder substitution
//!
//! Templates carry uppercase percent-delimited tokens (`%%TITLE%%`) plus a
//! single `%%CONTENT%%` token for the rendered markdown body. Substitution
//! is single-pass: metadata values are never re-scanned for tokens, and a
//! `%%CONTENT%%` occurring inside a metadata value is left verbatim.

use indexmap::IndexMap;

/// The token replaced with the rendered content fragment
pub const CONTENT_TOKEN: &str = "%%CONTENT%%";

/// Render a template with the given content fragment and metadata
///
/// Every occurrence of `%%KEY%%` (uppercased metadata key) is replaced for
/// all supplied keys; the template's first `%%CONTENT%%` token is replaced
/// exactly once with `content`. Unmatched tokens stay verbatim.
pub fn render(template: &str, content: &str, props: &IndexMap<String, String>) -> String {
    // Anchor on the template's own content token before metadata
    // substitution, so a token inside a metadata value is not expanded.
    match template.split_once(CONTENT_TOKEN) {
        Some((head, tail)) => {
            let mut out = substitute(head, props);
            out.push_str(content);
            out.push_str(&substitute(tail, props));
            out
        }
        None => substitute(template, props),
    }
}

/// Replace every `%%KEY%%` metadata token in `part`
fn substitute(part: &str, props: &IndexMap<String, String>) -> String {
    let mut result = part.to_string();
    for (name, value) in props {
        let token = format!("%%{}%%", name.to_uppercase());
        result = result.replace(&token, value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_replaces_every_matching_token() {
        let out = render(
            "<h1>%%TITLE%%</h1><p>%%TITLE%% on %%DATE%%</p>%%CONTENT%%",
            "<p>body</p>",
            &props(&[("title", "Hello"), ("date", "2024-01-01")]),
        );
        assert_eq!(out, "<h1>Hello</h1><p>Hello on 2024-01-01</p><p>body</p>");
    }

    #[test]
    fn test_tokens_are_matched_against_uppercased_keys() {
        let out = render("%%URL%%", "", &props(&[("URL", "https://a.example")]));
        assert_eq!(out, "https://a.example");
        let out = render("%%url%%", "", &props(&[("url", "x")]));
        // tokens are uppercase by convention; a lowercase token never matches
        assert_eq!(out, "%%url%%");
    }

    #[test]
    fn test_unmatched_tokens_left_verbatim() {
        let out = render(
            "%%TITLE%% %%UNKNOWN%%",
            "",
            &props(&[("title", "A")]),
        );
        assert_eq!(out, "A %%UNKNOWN%%");
    }

    #[test]
    fn test_content_replaced_exactly_once() {
        let out = render("a %%CONTENT%% b %%CONTENT%%", "X", &props(&[]));
        assert_eq!(out, "a X b %%CONTENT%%");
    }

    #[test]
    fn test_content_only_token() {
        assert_eq!(render("%%CONTENT%%", "X", &props(&[])), "X");
    }

    #[test]
    fn test_absent_content_token_is_a_noop() {
        assert_eq!(render("no tokens here", "X", &props(&[])), "no tokens here");
    }

    #[test]
    fn test_metadata_value_containing_content_token_is_not_expanded() {
        let out = render(
            "%%TITLE%% | %%CONTENT%%",
            "body",
            &props(&[("title", "sneaky %%CONTENT%%")]),
        );
        assert_eq!(out, "sneaky %%CONTENT%% | body");
    }

    #[test]
    fn test_tokens_inside_content_are_not_expanded() {
        let out = render(
            "%%CONTENT%%",
            "%%TITLE%%",
            &props(&[("title", "A")]),
        );
        assert_eq!(out, "%%TITLE%%");
    }
}
