//! Inline Markdown tokenizer.
//!
//! Splits one line into styled runs. The scan is left to right with no
//! state carried between lines, and every marker is matched with the
//! shortest valid closing delimiter. Anything that does not form a complete
//! pair is kept as literal text, so tokenizing never fails.
//!
//! Nesting is not supported: the outermost marker wins and the text inside a
//! matched run is taken as-is. `***text***` therefore becomes a bold run with
//! the text `*text*`.

/// Inline style of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStyle {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    ImageRef,
}

/// A span of text sharing one inline style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub style: RunStyle,
    /// URL of a link or path of an image reference.
    pub target: Option<String>,
}

impl StyledRun {
    pub fn new(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
            target: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, RunStyle::Plain)
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

/// Tokenize a line lazily. The iterator is `Clone`, so it can be restarted.
pub fn tokenize(line: &str) -> Tokenizer<'_> {
    Tokenizer { line, pos: 0 }
}

/// Tokenize a line into a vector of runs.
pub fn tokenize_line(line: &str) -> Vec<StyledRun> {
    tokenize(line).collect()
}

/// Concatenated text of a sequence of runs, as displayed (without markers).
pub fn runs_text(runs: &[StyledRun]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}

/// Iterator over the styled runs of one line.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    line: &'a str,
    pos: usize,
}

impl Iterator for Tokenizer<'_> {
    type Item = StyledRun;

    fn next(&mut self) -> Option<StyledRun> {
        let line = self.line;
        if self.pos >= line.len() {
            return None;
        }

        let start = self.pos;
        let mut i = start;
        while i < line.len() {
            match scan_marker(line, i) {
                Scan::Run(run, end) => {
                    if i > start {
                        // Flush pending text; the marker is matched again on the next call.
                        self.pos = i;
                        return Some(StyledRun::plain(&line[start..i]));
                    }
                    self.pos = end;
                    return Some(run);
                }
                Scan::Literal(len) => i += len,
            }
        }

        self.pos = line.len();
        Some(StyledRun::plain(&line[start..]))
    }
}

enum Scan {
    /// A complete run and the byte offset just past it.
    Run(StyledRun, usize),
    /// Bytes to keep as literal text before scanning again.
    Literal(usize),
}

fn scan_marker(line: &str, i: usize) -> Scan {
    let rest = &line[i..];

    if rest.starts_with("![") {
        return match link_parts(&rest[1..]) {
            Some((alt, path, len)) => Scan::Run(
                StyledRun::new(alt, RunStyle::ImageRef).with_target(path),
                i + 1 + len,
            ),
            None => Scan::Literal(2),
        };
    }

    if rest.starts_with('[') {
        return match link_parts(rest) {
            Some((label, url, len)) => {
                let text = if label.is_empty() { url } else { label };
                Scan::Run(
                    StyledRun::new(text, RunStyle::Link).with_target(url),
                    i + len,
                )
            }
            None => Scan::Literal(1),
        };
    }

    if rest.starts_with('`') {
        return match rest[1..].find('`') {
            Some(close) if close > 0 => Scan::Run(
                StyledRun::new(&rest[1..=close], RunStyle::Code),
                i + close + 2,
            ),
            _ => Scan::Literal(1),
        };
    }

    if rest.starts_with("**") {
        return match emphasis(rest, "**") {
            Some((text, len)) => Scan::Run(StyledRun::new(text, RunStyle::Bold), i + len),
            None => Scan::Literal(2),
        };
    }

    if rest.starts_with('*') {
        return match emphasis(rest, "*") {
            Some((text, len)) => Scan::Run(StyledRun::new(text, RunStyle::Italic), i + len),
            None => Scan::Literal(1),
        };
    }

    if rest.starts_with('_') {
        let inside_word = line[..i]
            .chars()
            .next_back()
            .is_some_and(char::is_alphanumeric);
        if !inside_word {
            if let Some((text, len)) = emphasis(rest, "_") {
                return Scan::Run(StyledRun::new(text, RunStyle::Italic), i + len);
            }
        }
        return Scan::Literal(1);
    }

    let step = rest.chars().next().map_or(1, char::len_utf8);
    Scan::Literal(step)
}

/// Match `[label](target)` at the start of `rest`.
///
/// Returns the label, the target and the byte length of the whole construct.
fn link_parts(rest: &str) -> Option<(&str, &str, usize)> {
    let close_bracket = rest.find(']')?;
    let label = &rest[1..close_bracket];
    let after = &rest[close_bracket + 1..];
    if !after.starts_with('(') {
        return None;
    }
    let close_paren = after.find(')')?;
    let target = after[1..close_paren].trim();
    Some((label, target, close_bracket + 1 + close_paren + 1))
}

/// Match an emphasis pair opened by `delim` at the start of `rest`.
///
/// The content must be non-empty and must not start or end with whitespace.
/// A `**` closer inside a longer run of asterisks is pushed to the end of the
/// run. A single `*` never closes on a star that belongs to a longer run, so
/// `*a **b** c*` stays one italic run. `_` may not close in front of a word
/// character.
fn emphasis(rest: &str, delim: &str) -> Option<(String, usize)> {
    let open = delim.len();
    let first = rest[open..].chars().next()?;
    if first.is_whitespace() {
        return None;
    }

    let delim_byte = delim.as_bytes()[0];
    let mut from = open + first.len_utf8();
    while let Some(offset) = rest[from..].find(delim) {
        let mut close = from + offset;
        if delim == "*" {
            let bytes = rest.as_bytes();
            let mut run_end = close;
            while bytes.get(run_end + 1) == Some(&b'*') {
                run_end += 1;
            }
            if run_end > close || bytes.get(close - 1) == Some(&b'*') {
                from = run_end + 1;
                continue;
            }
        }
        if open == 2 {
            while rest.as_bytes().get(close + open) == Some(&delim_byte) {
                close += 1;
            }
        }

        let last = rest[..close].chars().next_back()?;
        let followed_by_word = delim == "_"
            && rest[close + open..]
                .chars()
                .next()
                .is_some_and(char::is_alphanumeric);

        if !last.is_whitespace() && !followed_by_word {
            return Some((rest[open..close].to_string(), close + open));
        }
        from = close + 1;
    }
    None
}

/// Parse a whole string as a single image reference `![alt](path)`.
pub fn parse_image_ref(text: &str) -> Option<(String, String)> {
    let text = text.trim();
    let rest = text.strip_prefix('!')?;
    if !rest.starts_with('[') {
        return None;
    }
    let (alt, path, len) = link_parts(rest)?;
    if len != rest.len() || path.is_empty() {
        return None;
    }
    Some((alt.trim().to_string(), path.to_string()))
}
