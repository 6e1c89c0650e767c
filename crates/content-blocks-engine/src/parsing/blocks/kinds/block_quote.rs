/// Blockquote block type with owned delimiter constant.
///
/// All blockquote syntax knowledge lives here rather than in the classifier
/// or the serializer.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Prefix written in front of every body line when serializing.
    pub const RENDER_PREFIX: &'static str = "> ";

    /// Strips leading whitespace, the `>` and at most one following space.
    ///
    /// Returns `None` for lines that are not quote lines. Nested markers
    /// (`>> x`) keep their inner `>` in the stripped text.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = line.trim_start().strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }

    pub fn render(body: &str) -> String {
        body.split('\n')
            .map(|line| format!("{}{line}", Self::RENDER_PREFIX))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
