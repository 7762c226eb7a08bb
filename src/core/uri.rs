use crate::core::{MatchUris, UriMatch};
use regex::Regex;
use std::sync::LazyLock;

/// Marker placed before escaped angle brackets; never part of a URI.
pub const ESCAPE_MARKER: char = '\u{2063}';

static URI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?x)
        (?:
            \b[A-Za-z][A-Za-z0-9+.\-]*://      # scheme://authority...
          | \b(?i:mailto|sips?|tel):           # opaque URIs
          | \bwww\.                            # bare host
        )
        [^\s<>"\x{2063}]*
        [^\s<>"\x{2063}.,;:!?)\]']
        "#,
    )
    .unwrap()
});

/// Default URI grammar: `scheme://...`, `mailto:`/`sip:`/`sips:`/`tel:`
/// URIs and bare `www.` hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct UriMatcher;

impl UriMatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn find_iter<'t>(&self, text: &'t str) -> impl Iterator<Item = UriMatch<'t>> + 't {
        URI_RE.find_iter(text).map(|m| UriMatch {
            start: m.start(),
            end: m.end(),
            text: m.as_str(),
        })
    }
}

impl MatchUris for UriMatcher {
    fn match_uris<'t>(&self, text: &'t str) -> Vec<UriMatch<'t>> {
        self.find_iter(text).collect()
    }
}
