/// Backtick code fence syntax.
///
/// Fenced content is a raw zone: no other construct is recognized until a
/// closing fence, and an unclosed fence runs to the end of the document.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// If the line opens a fence, returns the info string (empty if none).
    pub fn open(line: &str) -> Option<&str> {
        line.trim()
            .strip_prefix(Self::BACKTICKS)
            .map(|info| info.trim())
    }

    /// True if the line closes an open fence.
    ///
    /// Any line whose trimmed content starts with a fence closes it,
    /// including one that carries trailing text.
    pub fn closes(line: &str) -> bool {
        line.trim().starts_with(Self::BACKTICKS)
    }

    /// Converts an info string into the block's language attribute.
    pub fn language(info: &str) -> Option<String> {
        (!info.is_empty()).then(|| info.to_string())
    }

    pub fn render(language: Option<&str>, body: &str) -> String {
        let fence = Self::BACKTICKS;
        format!("{fence}{}\n{body}\n{fence}", language.unwrap_or_default())
    }
}
