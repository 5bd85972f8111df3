//! Content slides: blocks laid out top to bottom inside the left margin.

use crate::figlet::FigletFont;
use crate::markdown::{runs_text, Block, BlockKind, RunStyle, StyledRun};
use crate::style::{sanitize, Color, Span, Style};

use super::layout::{spaces, wrap, Line};
use super::table::render_table;
use super::RenderSettings;

pub const HEADING_1: Style = Style::new().fg(Color::BRIGHT_YELLOW).bold();
pub const HEADING_2: Style = Style::new().fg(Color::BRIGHT_CYAN).bold();
pub const HEADING_3: Style = Style::new().fg(Color::BRIGHT_MAGENTA).bold();

const BOLD: Style = Style::new().fg(Color::RED).bold();
const ITALIC: Style = Style::new().fg(Color::YELLOW).italic();
const CODE: Style = Style::new().fg(Color::GREEN);
const LINK: Style = Style::new().fg(Color::BLUE).underline();
const TARGET: Style = Style::new().fg(Color::BLUE).dim();

const BULLET: Style = Style::new().fg(Color::CYAN);
const QUOTE: Style = Style::new().fg(Color::WHITE);
const CODE_BG: Color = Color::Indexed(236);
const CODE_BLOCK: Style = Style::new().fg(Color::GREEN).bg(CODE_BG);
const GUTTER: Style = Style::new().fg(Color::BRIGHT_BLACK).bg(CODE_BG);

/// Terminals narrower than this get no left margin.
pub const NARROW_WIDTH: usize = 40;

/// Columns code blocks are indented by, before the gutter.
const CODE_INDENT: usize = 2;

/// Left margin actually applied at `width` columns.
pub fn effective_margin(margin: usize, width: usize) -> usize {
    if width < NARROW_WIDTH || margin >= width {
        0
    } else {
        margin
    }
}

/// Style for a heading of `level`.
pub fn heading_style(level: u8) -> Style {
    match level {
        1 => HEADING_1,
        2 => HEADING_2,
        _ => HEADING_3,
    }
}

/// Styled spans for inline runs, layered over `base`.
pub fn run_spans(runs: &[StyledRun], base: Style) -> Vec<Span> {
    let mut spans = Vec::with_capacity(runs.len());
    for run in runs {
        let text = sanitize(&run.text);
        match run.style {
            RunStyle::Plain => spans.push(Span::styled(text, base)),
            RunStyle::Bold => spans.push(Span::styled(text, base.patch(BOLD))),
            RunStyle::Italic => spans.push(Span::styled(text, base.patch(ITALIC))),
            RunStyle::Code => spans.push(Span::styled(text, base.patch(CODE))),
            RunStyle::Link => {
                spans.push(Span::styled(text, base.patch(LINK)));
                if let Some(url) = &run.target {
                    spans.push(Span::styled(
                        format!(" ({})", sanitize(url)),
                        base.patch(TARGET),
                    ));
                }
            }
            RunStyle::ImageRef => {
                spans.push(Span::styled(format!("[image: {}]", text), base));
                if let Some(path) = &run.target {
                    spans.push(Span::styled(
                        format!(" ({})", sanitize(path)),
                        base.patch(TARGET),
                    ));
                }
            }
        }
    }
    spans
}

/// Lays out the blocks of one content slide.
pub struct ContentLayout<'a> {
    pub settings: &'a RenderSettings,
    pub font: &'a FigletFont,
    pub width: usize,
}

impl ContentLayout<'_> {
    /// All rows for `blocks`, with a blank row between blocks of different
    /// kinds. The caller truncates to the available height.
    pub fn render(&self, blocks: &[Block]) -> Vec<Line> {
        let mut rows = Vec::new();
        let mut previous: Option<BlockKind> = None;

        for block in blocks {
            let kind = block.kind();
            if previous.is_some_and(|p| p != kind) {
                rows.push(Vec::new());
            }
            rows.extend(self.render_block(block));
            previous = Some(kind);
        }

        rows
    }

    fn margin(&self) -> usize {
        effective_margin(self.settings.margin, self.width)
    }

    fn indent(&self) -> Vec<Span> {
        match self.margin() {
            0 => Vec::new(),
            n => vec![spaces(n)],
        }
    }

    fn render_block(&self, block: &Block) -> Vec<Line> {
        match block {
            Block::Heading { level, runs } => self.heading(*level, runs),
            Block::Bullet { runs } => {
                let mut first = self.indent();
                first.push(Span::styled("• ", BULLET));
                let mut rest = self.indent();
                rest.push(spaces(2));
                wrap(&first, &rest, &run_spans(runs, Style::default()), self.width)
            }
            Block::Quote { runs } => {
                let mut prefix = self.indent();
                prefix.push(Span::styled("│ ", QUOTE));
                wrap(&prefix, &prefix, &run_spans(runs, QUOTE), self.width)
            }
            Block::CodeBlock { lines, .. } => self.code(lines),
            Block::Table(table) => {
                let indent = self.indent();
                render_table(table, self.margin())
                    .into_iter()
                    .flat_map(|row| wrap(&[], &indent, &row, self.width))
                    .collect()
            }
            Block::Paragraph { runs } => {
                let indent = self.indent();
                wrap(&indent, &indent, &run_spans(runs, Style::default()), self.width)
            }
        }
    }

    fn heading(&self, level: u8, runs: &[StyledRun]) -> Vec<Line> {
        let style = heading_style(level);

        if level == 1 && self.settings.banner_headings {
            let text = sanitize(&runs_text(runs));
            let spacing = self.settings.figlet_spacing;
            let room = self.width.saturating_sub(self.margin());
            if !text.trim().is_empty() && self.font.width_of(&text, spacing) <= room {
                return self
                    .font
                    .render(&text, spacing)
                    .into_iter()
                    .map(|row| {
                        let mut line = self.indent();
                        line.push(Span::styled(row, style));
                        line
                    })
                    .collect();
            }
        }

        let indent = self.indent();
        wrap(&indent, &indent, &run_spans(runs, style), self.width)
    }

    fn code(&self, lines: &[String]) -> Vec<Line> {
        let mut prefix = self.indent();
        prefix.push(spaces(CODE_INDENT));
        prefix.push(Span::styled("│ ", GUTTER));

        lines
            .iter()
            .flat_map(|line| {
                let body = [Span::styled(sanitize(line), CODE_BLOCK)];
                wrap(&prefix, &prefix, &body, self.width)
            })
            .collect()
    }
}
