//! Splits a document into slide sources on horizontal rules.

/// A horizontal rule: three or more `-`, optionally surrounded by whitespace.
pub fn is_rule_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 3 && trimmed.bytes().all(|b| b == b'-')
}

/// Split raw document text into slide sources.
///
/// Segments that are empty or whitespace-only are dropped. A document without
/// rules is a single slide.
pub fn split_slides(text: &str) -> Vec<String> {
    let mut slides = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if is_rule_line(line) {
            push_segment(&mut slides, &current);
            current.clear();
        } else {
            current.push(line);
        }
    }
    push_segment(&mut slides, &current);

    slides
}

fn push_segment(slides: &mut Vec<String>, lines: &[&str]) {
    if lines.iter().any(|l| !l.trim().is_empty()) {
        slides.push(lines.join("\n"));
    }
}
