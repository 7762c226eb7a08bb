use crate::core::uri::{UriMatcher, ESCAPE_MARKER};
use crate::core::{MarkupOptions, MatchUris};
use crate::utils::text::{get_extension, includes};
use std::borrow::Cow;

/// Extensions (case-sensitive) whose links also get an `<img>` preview.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "gif", "png", "svg"];

/// Neutralizes `<` and `>` so the text cannot inject tags.
///
/// Each bracket is prefixed with an invisible separator, which keeps it
/// distinguishable from the markup generated by the rewriter.
pub fn escape_angle_brackets(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => {
                escaped.push(ESCAPE_MARKER);
                escaped.push_str("&lt;");
            }
            '>' => {
                escaped.push(ESCAPE_MARKER);
                escaped.push_str("&gt;");
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Turns the URIs of a plain text into anchors, with an image block for
/// links pointing at pictures.
///
/// Output is `<div>images</div><p>text</p>`, the `<div>` being present only
/// when at least one image link was found. Images always come first, in
/// the order they appear in the text.
#[derive(Debug, Clone, Default)]
pub struct MarkupRewriter<M = UriMatcher> {
    matcher: M,
    options: MarkupOptions,
}

impl MarkupRewriter<UriMatcher> {
    pub fn new(options: MarkupOptions) -> Self {
        Self::with_matcher(UriMatcher::new(), options)
    }
}

impl<M: MatchUris> MarkupRewriter<M> {
    pub fn with_matcher(matcher: M, options: MarkupOptions) -> Self {
        Self { matcher, options }
    }

    pub fn rewrite(&self, text: &str) -> String {
        let escaped = escape_angle_brackets(text);
        let matches = self.matcher.match_uris(&escaped);

        let mut body = String::with_capacity(escaped.len());
        let mut images = String::new();
        let mut last = 0;

        for uri in &matches {
            if uri.start < last
                || uri.end < uri.start
                || !escaped.is_char_boundary(uri.start)
                || !escaped.is_char_boundary(uri.end)
            {
                tracing::warn!(
                    start = uri.start,
                    end = uri.end,
                    "skipping out-of-order or misaligned URI match"
                );
                continue;
            }

            body.push_str(&escaped[last..uri.start]);

            // www.xxx 沒有 scheme，連結目標補上 http://
            let target: Cow<'_, str> = if uri.text.starts_with("www.") {
                Cow::Owned(format!("http://{}", uri.text))
            } else {
                Cow::Borrowed(uri.text)
            };

            if includes(&IMAGE_EXTENSIONS, &get_extension(&target), None) {
                images.push_str(&self.image_anchor(&target));
            }

            body.push_str(&format!("<a href=\"{}\">{}</a>", target, uri.text));
            last = uri.end;
        }
        body.push_str(&escaped[last..]);

        tracing::debug!(
            links = matches.len(),
            has_images = !images.is_empty(),
            "rewrote text to markup"
        );

        let mut output = String::with_capacity(images.len() + body.len() + 18);
        if !images.is_empty() {
            output.push_str("<div>");
            output.push_str(&images);
            output.push_str("</div>");
        }
        output.push_str("<p>");
        output.push_str(&body);
        output.push_str("</p>");
        output
    }

    fn image_anchor(&self, target: &str) -> String {
        let mut img = String::from("<img");
        if let Some(width) = self.options.images_width {
            img.push_str(&format!(" width=\"{}\"", width));
        }
        if let Some(height) = self.options.images_height {
            img.push_str(&format!(" height=\"{}\"", height));
        }
        format!("<a href=\"{0}\">{1} src=\"{0}\" /></a>", target, img)
    }
}

/// Rewrites `text` with the default URI grammar.
pub fn encode_uris_to_markup(text: &str, options: &MarkupOptions) -> String {
    MarkupRewriter::new(*options).rewrite(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UriMatch;

    #[test]
    fn test_escape_angle_brackets() {
        assert_eq!(
            escape_angle_brackets("a<b>c"),
            "a\u{2063}&lt;b\u{2063}&gt;c"
        );
        assert_eq!(escape_angle_brackets("no brackets & co"), "no brackets & co");
    }

    #[test]
    fn test_plain_link_has_no_image_block() {
        let out = encode_uris_to_markup("read https://example.com/doc", &MarkupOptions::default());
        assert_eq!(
            out,
            "<p>read <a href=\"https://example.com/doc\">https://example.com/doc</a></p>"
        );
    }

    #[test]
    fn test_image_extension_is_case_sensitive() {
        let out = encode_uris_to_markup("http://x.org/A.PNG", &MarkupOptions::default());
        assert!(!out.starts_with("<div>"));
    }

    #[test]
    fn test_images_keep_match_order_and_precede_text() {
        let out = encode_uris_to_markup(
            "first http://a.io/1.gif then http://b.io/2.svg",
            &MarkupOptions::default(),
        );
        assert!(out.starts_with(
            "<div><a href=\"http://a.io/1.gif\"><img src=\"http://a.io/1.gif\" /></a>\
             <a href=\"http://b.io/2.svg\"><img src=\"http://b.io/2.svg\" /></a></div><p>first "
        ));
    }

    #[test]
    fn test_width_and_height_attributes() {
        let options = MarkupOptions {
            images_width: Some(100),
            images_height: Some(50),
        };
        let out = encode_uris_to_markup("http://a.io/x.jpeg", &options);
        assert!(out.contains("<img width=\"100\" height=\"50\" src=\"http://a.io/x.jpeg\" />"));
    }

    struct OnlyFirstWord;

    impl MatchUris for OnlyFirstWord {
        fn match_uris<'t>(&self, text: &'t str) -> Vec<UriMatch<'t>> {
            let end = text.find(' ').unwrap_or(text.len());
            vec![UriMatch {
                start: 0,
                end,
                text: &text[..end],
            }]
        }
    }

    /// 回傳倒序以及切在多位元組字元中間的結果
    struct Unruly;

    impl MatchUris for Unruly {
        fn match_uris<'t>(&self, text: &'t str) -> Vec<UriMatch<'t>> {
            vec![
                UriMatch {
                    start: 6,
                    end: 12,
                    text: &text[6..12],
                },
                UriMatch {
                    start: 0,
                    end: 5,
                    text: &text[0..5],
                },
                UriMatch {
                    start: 13,
                    end: 14,
                    text: "é",
                },
            ]
        }
    }

    #[test]
    fn test_bad_matches_are_skipped() {
        let rewriter = MarkupRewriter::with_matcher(Unruly, MarkupOptions::default());
        assert_eq!(
            rewriter.rewrite("first second é"),
            "<p>first <a href=\"second\">second</a> é</p>"
        );
    }

    #[test]
    fn test_custom_matcher() {
        let rewriter = MarkupRewriter::with_matcher(OnlyFirstWord, MarkupOptions::default());
        assert_eq!(
            rewriter.rewrite("logo.png rest"),
            "<div><a href=\"logo.png\"><img src=\"logo.png\" /></a></div>\
             <p><a href=\"logo.png\">logo.png</a> rest</p>"
        );
    }
}
