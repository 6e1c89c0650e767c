use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{BlockQuote, CodeFence, Divider, List, ListMarker},
    types::{Block, BlockKind},
};

/// The multi-line construct currently collecting lines, if any.
#[derive(Debug)]
enum LeafState {
    None,
    Paragraph {
        lines: Vec<String>,
    },
    Fence {
        language: Option<String>,
        opened_at: usize,
        lines: Vec<String>,
    },
    Quote {
        lines: Vec<String>,
    },
    List {
        ordered: bool,
        lines: Vec<String>,
    },
}

/// Builds blocks from lines pushed in document order.
///
/// Once a multi-line construct opens it keeps consuming lines by its own
/// continuation rule; only when that rule fails is the line classified
/// afresh by construct precedence.
pub struct BlockBuilder {
    classifier: MarkdownLineClassifier,
    leaf: LeafState,
    line_no: usize,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            leaf: LeafState::None,
            line_no: 0,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &str) {
        self.line_no += 1;

        if self.continue_leaf(line) {
            return;
        }

        match self.classifier.classify(line) {
            LineClass::Blank => {}
            LineClass::Divider => self.emit(BlockKind::Divider, Divider::MARKER.to_string()),
            LineClass::Heading { level, text } => {
                self.emit(BlockKind::Heading { level }, text.to_string())
            }
            LineClass::FenceOpen { info } => {
                self.leaf = LeafState::Fence {
                    language: CodeFence::language(info),
                    opened_at: self.line_no,
                    lines: vec![],
                }
            }
            LineClass::Quote { text } => {
                self.leaf = LeafState::Quote {
                    lines: vec![text.to_string()],
                }
            }
            LineClass::Image { alt, url } => self.emit(
                BlockKind::Image {
                    alt: alt.to_string(),
                },
                url.to_string(),
            ),
            LineClass::ListItem { marker } => {
                self.leaf = LeafState::List {
                    ordered: marker == ListMarker::Numbered,
                    lines: vec![line.to_string()],
                }
            }
            LineClass::Text => {
                self.leaf = LeafState::Paragraph {
                    lines: vec![line.to_string()],
                }
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        if let LeafState::Fence { opened_at, .. } = &self.leaf {
            log::debug!(
                "unterminated code fence opened at line {opened_at}; treating rest of document as code"
            );
        }
        self.flush();
        self.out
    }

    /// Feeds the line to the open construct. Returns false if the construct
    /// ended and the line still needs to be classified.
    fn continue_leaf(&mut self, line: &str) -> bool {
        match &mut self.leaf {
            LeafState::None => false,
            LeafState::Fence { lines, .. } => {
                if CodeFence::closes(line) {
                    self.flush();
                } else {
                    lines.push(line.to_string());
                }
                true
            }
            LeafState::Quote { lines } => match BlockQuote::strip_prefix(line) {
                Some(text) => {
                    lines.push(text.to_string());
                    true
                }
                None => {
                    self.flush();
                    false
                }
            },
            LeafState::List { lines, .. } => {
                if List::item(line).is_some() || List::is_continuation(line) {
                    lines.push(line.to_string());
                    true
                } else {
                    self.flush();
                    false
                }
            }
            LeafState::Paragraph { lines } => match self.classifier.classify(line) {
                LineClass::Text => {
                    lines.push(line.to_string());
                    true
                }
                LineClass::Blank => {
                    self.flush();
                    true
                }
                _ => {
                    self.flush();
                    false
                }
            },
        }
    }

    fn flush(&mut self) {
        let (kind, lines) = match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => return,
            LeafState::Paragraph { lines } => (BlockKind::Paragraph, lines),
            LeafState::Fence {
                language, lines, ..
            } => (BlockKind::Code { language }, lines),
            LeafState::Quote { lines } => (BlockKind::Blockquote, lines),
            LeafState::List { ordered, lines } => (BlockKind::List { ordered }, lines),
        };
        self.emit(kind, lines.join("\n"));
    }

    fn emit(&mut self, kind: BlockKind, body: String) {
        self.out.push(Block { kind, body });
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
