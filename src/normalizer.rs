use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
// U+FEFF is not Unicode White_Space but still counts as a blank here.
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s\x{FEFF}]+").unwrap());

/// Strips markup and collapses whitespace. Not an HTML parser: text inside
/// `<script>`/`<style>` survives, only the tags go.
pub fn normalize_html(html: &str) -> String {
    let without_tags = TAG.replace_all(html, " ");
    WHITESPACE.replace_all(&without_tags, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_collapses_whitespace() {
        let html = "<div class=\"a\">\n  <p>2026年2月</p>\t<span>額滿</span>\n</div>";
        assert_eq!(normalize_html(html), " 2026年2月 額滿 ");
    }

    #[test]
    fn keeps_script_content() {
        let html = "<script>var x = 1;</script><p>hi</p>";
        assert_eq!(normalize_html(html), " var x = 1; hi ");
    }

    #[test]
    fn collapses_unicode_whitespace() {
        assert_eq!(normalize_html("a\u{3000}\u{00a0} b"), "a b");
    }

    #[test]
    fn collapses_byte_order_mark() {
        assert_eq!(normalize_html("\u{feff}2026年2月\u{feff} 額滿"), " 2026年2月 額滿");
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(normalize_html("no markup here"), "no markup here");
    }
}
