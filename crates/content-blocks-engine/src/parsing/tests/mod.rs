//! Behavior tests for the block parser and serializer.
//!
//! Every parse also runs the structural invariant checks from `snapshot`.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    blocks::{Block, BlockKind},
    blocks_to_markdown, parse_markdown_to_blocks, snapshot,
};

fn parse(md: &str) -> Vec<Block> {
    let blocks = parse_markdown_to_blocks(md);
    snapshot::invariants(md, &blocks);
    blocks
}

// Totality

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\n\n")]
#[case(" \t \n\r\n  ")]
fn blank_documents_have_no_blocks(#[case] md: &str) {
    assert!(parse(md).is_empty());
}

#[test]
fn missing_document_has_no_blocks() {
    assert!(parse_markdown_to_blocks(None::<&str>).is_empty());
}

#[rstest]
#[case(">")]
#[case("```")]
#[case("![](")]
#[case("#")]
#[case("- ")]
#[case("1.")]
#[case("> ```\n```\n>")]
#[case("\r")]
#[case("日本語のテキスト\n# 見出し")]
fn degenerate_input_does_not_panic(#[case] md: &str) {
    parse(md);
}

// Headings

#[rstest]
#[case("# One", 1, "One")]
#[case("## Two", 2, "Two")]
#[case("###### Six", 6, "Six")]
#[case("###    Spaced out   ", 3, "Spaced out")]
fn heading_levels(#[case] md: &str, #[case] level: u8, #[case] body: &str) {
    assert_eq!(parse(md), vec![Block::heading(level, body)]);
}

#[test]
fn seven_hashes_is_a_paragraph() {
    assert_eq!(
        parse("####### too many"),
        vec![Block::paragraph("####### too many")]
    );
}

// Code fences

#[test]
fn code_fence_captures_language() {
    assert_eq!(
        parse("```ts\nconst x = 1\n```"),
        vec![Block::code(Some("ts"), "const x = 1")]
    );
}

#[test]
fn code_fence_without_language() {
    assert_eq!(
        parse("```\nplain\n```"),
        vec![Block {
            kind: BlockKind::Code { language: None },
            body: "plain".to_string(),
        }]
    );
}

#[test]
fn unterminated_code_fence_runs_to_end() {
    assert_eq!(
        parse("```js\nconsole.log(1)"),
        vec![Block::code(Some("js"), "console.log(1)")]
    );
}

#[test]
fn unterminated_code_fence_swallows_later_constructs() {
    assert_eq!(
        parse("intro\n\n```\n# heading\n\n- item"),
        vec![
            Block::paragraph("intro"),
            Block::code(None, "# heading\n\n- item"),
        ]
    );
}

#[test]
fn code_fence_keeps_indentation_and_blank_lines() {
    assert_eq!(
        parse("```py\ndef f():\n\n    return 1\n```\nafter"),
        vec![
            Block::code(Some("py"), "def f():\n\n    return 1"),
            Block::paragraph("after"),
        ]
    );
}

// Lists

#[test]
fn ordered_list() {
    assert_eq!(
        parse("1. first\n2. second"),
        vec![Block::list(true, "1. first\n2. second")]
    );
}

#[test]
fn unordered_list() {
    assert_eq!(parse("- a\n- b"), vec![Block::list(false, "- a\n- b")]);
}

#[test]
fn nested_list_kept_verbatim() {
    let md = "* top\n  * nested\n    continued\n+ other";
    assert_eq!(parse(md), vec![Block::list(false, md)]);
}

#[test]
fn blank_line_splits_lists() {
    assert_eq!(
        parse("- a\n\n- b"),
        vec![Block::list(false, "- a"), Block::list(false, "- b")]
    );
}

// Blockquotes

#[test]
fn blockquote_lines_merge() {
    assert_eq!(
        parse("> line one\n> line two"),
        vec![Block::blockquote("line one\nline two")]
    );
}

#[test]
fn bare_quote_marker_is_empty_line() {
    assert_eq!(
        parse("> one\n>\n> two"),
        vec![Block::blockquote("one\n\ntwo")]
    );
}

#[test]
fn blockquote_ends_at_unprefixed_line() {
    assert_eq!(
        parse("> quoted\nnot quoted"),
        vec![Block::blockquote("quoted"), Block::paragraph("not quoted")]
    );
}

// Dividers

#[rstest]
#[case("---")]
#[case("-----")]
#[case("   ---   ")]
fn dividers(#[case] md: &str) {
    assert_eq!(parse(md), vec![Block::divider()]);
}

#[test]
fn two_hyphens_is_a_paragraph() {
    assert_eq!(parse("--"), vec![Block::paragraph("--")]);
}

#[test]
fn divider_directly_under_text_is_still_a_divider() {
    assert_eq!(
        parse("Some text\n---"),
        vec![Block::paragraph("Some text"), Block::divider()]
    );
}

// Images

#[test]
fn image_line() {
    assert_eq!(
        parse("![Team photo](https://cdn.example.com/team.jpg)"),
        vec![Block::image("Team photo", "https://cdn.example.com/team.jpg")]
    );
}

#[test]
fn image_trailing_text_is_dropped() {
    // Pins current behavior: text after the image on the same line is lost.
    assert_eq!(
        parse("![a](/a.png) photo credit: studio"),
        vec![Block::image("a", "/a.png")]
    );
}

#[test]
fn inline_image_stays_in_paragraph() {
    assert_eq!(
        parse("Look: ![a](/a.png)"),
        vec![Block::paragraph("Look: ![a](/a.png)")]
    );
}

// Paragraphs

#[test]
fn paragraph_lines_join_until_blank() {
    assert_eq!(
        parse("one\ntwo\n\nthree"),
        vec![Block::paragraph("one\ntwo"), Block::paragraph("three")]
    );
}

#[test]
fn paragraph_stops_at_list() {
    assert_eq!(
        parse("Steps:\n- a\n- b"),
        vec![Block::paragraph("Steps:"), Block::list(false, "- a\n- b")]
    );
}

#[test]
fn crlf_matches_lf() {
    assert_eq!(
        parse("# T\r\n\r\nbody\r\n> q\r\n"),
        parse("# T\n\nbody\n> q\n")
    );
}

// Ordering and content preservation

#[test]
fn full_document_in_order() {
    let md = "# Launch guide\n\
              \n\
              Intro paragraph\n\
              spanning lines.\n\
              \n\
              ## Steps\n\
              \n\
              1. Draft\n\
              2. Review\n\
              \n\
              ```bash\n\
              npm run publish\n\
              ```\n\
              \n\
              > Ship small.\n\
              \n\
              ![Flow](/flow.png)\n\
              \n\
              ---\n\
              \n\
              Thanks for reading.";
    assert_eq!(
        parse(md),
        vec![
            Block::heading(1, "Launch guide"),
            Block::paragraph("Intro paragraph\nspanning lines."),
            Block::heading(2, "Steps"),
            Block::list(true, "1. Draft\n2. Review"),
            Block::code(Some("bash"), "npm run publish"),
            Block::blockquote("Ship small."),
            Block::image("Flow", "/flow.png"),
            Block::divider(),
            Block::paragraph("Thanks for reading."),
        ]
    );
}

#[test]
fn no_content_loss_for_simple_blocks() {
    let md = "# Title\n\nFirst paragraph\nwith two lines\n\n> a quote\n> continues\n\n---\n\n### Closing";
    let blocks = parse(md);

    let recovered: Vec<String> = blocks
        .iter()
        .flat_map(|b| {
            b.to_markdown()
                .split('\n')
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();
    let original: Vec<&str> = md.lines().filter(|l| !l.trim().is_empty()).collect();

    assert_eq!(recovered, original);
}

// Serializer

#[test]
fn serializer_heading_default_level() {
    let block: Block =
        serde_json::from_str(r#"{"type": "heading", "body": "Title"}"#).unwrap();
    assert_eq!(blocks_to_markdown(&[block]), "# Title");
}

#[test]
fn serializer_normalizes_spacing() {
    assert_eq!(
        blocks_to_markdown(&parse("# A\n\n\n\nB\n---")),
        "# A\n\nB\n\n---"
    );
}

// Round trip

#[test]
fn stable_blocks_round_trip_exactly() {
    let md = "## Heading\n\n```rust\nlet x = 1;\n\nlet y = 2;\n```\n\n> quote one\n>\n>   indented\n\n![Alt text](/img.png)\n\n---";
    let blocks = parse(md);
    let reparsed = parse(&blocks_to_markdown(&blocks));
    assert_eq!(reparsed, blocks);
}

#[test]
fn round_trip_is_idempotent_after_first_pass() {
    let md = "Intro\n- a\n- b\ntext\n# H\n> q\n```\ncode\n```\n---";
    let first = blocks_to_markdown(&parse(md));
    let second = blocks_to_markdown(&parse(&first));
    assert_eq!(second, first);
}

#[test]
fn edited_paragraph_can_regroup() {
    // Accepted loss: a rewritten paragraph body that contains a heading line
    // re-parses as two blocks.
    let mut blocks = parse("Intro\n\nBody");
    blocks[1].body = "Body\n# Sneaky heading".to_string();
    let reparsed = parse(&blocks_to_markdown(&blocks));
    assert_eq!(
        reparsed,
        vec![
            Block::paragraph("Intro"),
            Block::paragraph("Body"),
            Block::heading(1, "Sneaky heading"),
        ]
    );
}
