/// ATX heading syntax: one to six `#` then whitespace.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Returns `(level, text)` if the raw line opens a heading.
    ///
    /// The marker must start the line; indented `#` lines are not headings.
    /// The text is trimmed of surrounding whitespace.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let hashes = line.bytes().take_while(|&b| b == Self::MARKER as u8).count();
        if hashes == 0 || hashes > usize::from(Self::MAX_LEVEL) {
            return None;
        }
        let rest = &line[hashes..];
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some((hashes as u8, rest.trim()))
    }

    pub fn render(level: u8, body: &str) -> String {
        let level = level.clamp(1, Self::MAX_LEVEL);
        format!("{} {body}", "#".repeat(usize::from(level)))
    }
}
