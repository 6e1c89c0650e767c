use std::sync::LazyLock;

use regex::Regex;

/// `![alt](url)` image syntax anchored at the start of the line's content.
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!\[([^\]]*)\]\(([^)]*)\)").expect("valid image pattern"));

/// Single-line image block.
pub struct Image;

impl Image {
    /// Returns `(alt, url)` if the line starts with an image.
    ///
    /// Only the image itself is captured: text after the closing `)` on the
    /// same line is dropped.
    pub fn parse(line: &str) -> Option<(&str, &str)> {
        let caps = IMAGE.captures(line.trim())?;
        let alt = caps.get(1).map_or("", |m| m.as_str());
        let url = caps.get(2).map_or("", |m| m.as_str());
        Some((alt, url))
    }

    pub fn render(alt: &str, url: &str) -> String {
        format!("![{alt}]({url})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_alt_and_url() {
        assert_eq!(
            Image::parse("![Hero shot](https://cdn.example.com/hero.png)"),
            Some(("Hero shot", "https://cdn.example.com/hero.png"))
        );
    }

    #[test]
    fn empty_alt() {
        assert_eq!(Image::parse("![](/a.png)"), Some(("", "/a.png")));
    }

    #[test]
    fn indented_image() {
        assert_eq!(Image::parse("   ![a](/a.png)"), Some(("a", "/a.png")));
    }

    #[test]
    fn trailing_text_is_dropped() {
        assert_eq!(
            Image::parse("![a](/a.png) caption text"),
            Some(("a", "/a.png"))
        );
    }

    #[test]
    fn not_at_line_start() {
        assert_eq!(Image::parse("see ![a](/a.png)"), None);
        assert_eq!(Image::parse("[link](/a)"), None);
    }

    #[test]
    fn render_image() {
        assert_eq!(Image::render("Logo", "/logo.png"), "![Logo](/logo.png)");
    }
}
