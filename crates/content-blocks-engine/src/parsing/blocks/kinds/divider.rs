/// Thematic break made only of hyphens.
pub struct Divider;

impl Divider {
    /// Canonical serialized form and block body.
    pub const MARKER: &'static str = "---";

    const MIN_HYPHENS: usize = 3;

    /// True for a line of three or more `-` with optional surrounding whitespace.
    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        t.len() >= Self::MIN_HYPHENS && t.bytes().all(|b| b == b'-')
    }
}
