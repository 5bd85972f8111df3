//! Block layout engine: classifies the lines of a content slide into blocks.

use super::inline::{tokenize_line, StyledRun};

/// Inline runs of one table cell.
pub type Cell = Vec<StyledRun>;

/// A structural unit of a content slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, runs: Vec<StyledRun> },
    Bullet { runs: Vec<StyledRun> },
    Quote { runs: Vec<StyledRun> },
    /// Fenced code, kept verbatim and never tokenized.
    CodeBlock {
        language: Option<String>,
        lines: Vec<String>,
    },
    Table(Table),
    Paragraph { runs: Vec<StyledRun> },
}

/// Discriminant of a [`Block`], used to decide spacing between blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    Bullet,
    Quote,
    CodeBlock,
    Table,
    Paragraph,
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Heading { .. } => BlockKind::Heading,
            Block::Bullet { .. } => BlockKind::Bullet,
            Block::Quote { .. } => BlockKind::Quote,
            Block::CodeBlock { .. } => BlockKind::CodeBlock,
            Block::Table(_) => BlockKind::Table,
            Block::Paragraph { .. } => BlockKind::Paragraph,
        }
    }
}

/// A table as written. Rows may have a different cell count than the
/// header; [`Table::cell`] pads missing cells and ignores extra ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<Cell>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Number of columns, defined by the header.
    pub fn columns(&self) -> usize {
        self.header.len()
    }

    /// Runs of a body cell; empty when the row is short.
    pub fn cell(&self, row: usize, col: usize) -> &[StyledRun] {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Scanner state. Fenced code switches the scanner into raw capture.
enum ScanState {
    Normal,
    InFence {
        fence_len: usize,
        language: Option<String>,
        lines: Vec<String>,
    },
}

/// Lay out the lines of a content slide as blocks.
pub fn layout_blocks(source: &str) -> Vec<Block> {
    let lines: Vec<&str> = source.lines().collect();
    let mut blocks = Vec::new();
    let mut state = ScanState::Normal;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        state = match state {
            ScanState::InFence {
                fence_len,
                language,
                lines: mut captured,
            } => {
                if is_closing_fence(line, fence_len) {
                    blocks.push(Block::CodeBlock {
                        language,
                        lines: captured,
                    });
                    ScanState::Normal
                } else {
                    captured.push(line.to_string());
                    ScanState::InFence {
                        fence_len,
                        language,
                        lines: captured,
                    }
                }
            }
            ScanState::Normal => {
                if let Some((fence_len, language)) = opening_fence(line) {
                    ScanState::InFence {
                        fence_len,
                        language,
                        lines: Vec::new(),
                    }
                } else if let Some((table, consumed)) = parse_table(&lines[i..]) {
                    blocks.push(Block::Table(table));
                    i += consumed - 1;
                    ScanState::Normal
                } else {
                    if let Some(block) = classify_line(line) {
                        blocks.push(block);
                    }
                    ScanState::Normal
                }
            }
        };
        i += 1;
    }

    // An unclosed fence keeps what it captured.
    if let ScanState::InFence {
        language, lines, ..
    } = state
    {
        blocks.push(Block::CodeBlock { language, lines });
    }

    blocks
}

/// Classify a single non-fence, non-table line.
fn classify_line(line: &str) -> Option<Block> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some((level, text)) = heading(trimmed) {
        return Some(Block::Heading {
            level,
            runs: tokenize_line(text),
        });
    }

    if let Some(text) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return Some(Block::Bullet {
            runs: tokenize_line(text.trim()),
        });
    }

    if let Some(text) = trimmed.strip_prefix('>') {
        let text = text.strip_prefix(' ').unwrap_or(text);
        return Some(Block::Quote {
            runs: tokenize_line(text.trim_end()),
        });
    }

    Some(Block::Paragraph {
        runs: tokenize_line(trimmed),
    })
}

/// `#`, `##` or `###` followed by a space. Deeper levels clamp to 3.
fn heading(trimmed: &str) -> Option<(u8, &str)> {
    let hashes = trimmed.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 {
        return None;
    }
    let text = trimmed[hashes..].strip_prefix(' ')?;
    Some((hashes.min(3) as u8, text.trim()))
}

/// A fence line: three or more backticks, optionally followed by a language.
fn opening_fence(line: &str) -> Option<(usize, Option<String>)> {
    let trimmed = line.trim();
    let ticks = trimmed.bytes().take_while(|&b| b == b'`').count();
    if ticks < 3 {
        return None;
    }
    let language = trimmed[ticks..].trim();
    let language = (!language.is_empty()).then(|| language.to_string());
    Some((ticks, language))
}

fn is_closing_fence(line: &str, fence_len: usize) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= fence_len && trimmed.bytes().all(|b| b == b'`')
}

/// A separator row: only `-`, `|`, `:` and whitespace, with at least one `-`.
fn is_table_separator(line: &str) -> bool {
    line.contains('-')
        && line
            .chars()
            .all(|c| matches!(c, '-' | '|' | ':') || c.is_whitespace())
}

/// Parse a table starting at `lines[0]`. Returns the table and the number of
/// lines consumed, or `None` if the lines do not start a table.
fn parse_table(lines: &[&str]) -> Option<(Table, usize)> {
    let header_line = lines.first()?;
    let separator = lines.get(1)?;
    if !header_line.contains('|') || !is_table_separator(separator) {
        return None;
    }

    let header = split_cells(header_line);
    let mut rows = Vec::new();
    let mut consumed = 2;
    for line in &lines[2..] {
        if line.trim().is_empty() || !line.contains('|') {
            break;
        }
        rows.push(split_cells(line));
        consumed += 1;
    }

    Some((Table { header, rows }, consumed))
}

/// Split a `|`-delimited row into tokenized cells.
fn split_cells(line: &str) -> Vec<Cell> {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('|').unwrap_or(trimmed);
    trimmed
        .split('|')
        .map(|cell| tokenize_line(cell.trim()))
        .collect()
}
