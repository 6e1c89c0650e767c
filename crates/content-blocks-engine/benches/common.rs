// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some content.\nAnd a second line.\n\n- Bullet point\n  - Nested item\n- Another item\n\n> A quote\n> over two lines\n\n![Cover](https://cdn.example.com/cover.png)\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n---\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_long_code_fence(lines: usize) -> String {
    let mut content = String::from("```ts\n");
    for i in 0..lines {
        content.push_str(&format!("const value{i} = {i};\n"));
    }
    content.push_str("```\n");
    content
}
