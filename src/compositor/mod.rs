//! Frame compositor.
//!
//! Turns one slide plus the viewport into a [`Frame`]: exactly `height` rows,
//! none wider than `width` columns. The compositor owns the banner font and
//! the image rasterizer; nothing here touches the terminal.

mod content;
mod layout;
mod table;

use std::path::Path;

use crate::ascii::{RasterOutcome, Rasterizer};
use crate::document::{Document, Slide};
use crate::figlet::{center, FigletFont, DEFAULT_SPACING};
use crate::markdown::tokenize_line;
use crate::navigator::ViewportState;
use crate::style::{sanitize, Span, Style};
use crate::terminal::CellPainter;

pub use content::{effective_margin, heading_style, run_spans, ContentLayout, NARROW_WIDTH};
pub use layout::{center_line, clip_line, line_width, plain_text, push_span, wrap, Line};
pub use table::render_table;

const RESET: &str = "\x1b[0m";
const STATUS: Style = Style::new().dim();
const NOTICE: Style = Style::new().dim();
const BANNER: Style = content::HEADING_1;

/// Rows between the bottom of a title banner and its subtitle.
const SUBTITLE_GAP: usize = 2;

/// Shown when the document has no slides.
pub const EMPTY_NOTICE: &str = "empty presentation: no slides to show";

/// Render options that do not change while presenting.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Left margin of content slides, in columns.
    pub margin: usize,
    /// Draw level-1 headings as banners when they fit.
    pub banner_headings: bool,
    /// Reserve the last row for the status line.
    pub status_bar: bool,
    /// Blank columns between banner glyphs.
    pub figlet_spacing: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            margin: 4,
            banner_headings: true,
            status_bar: true,
            figlet_spacing: DEFAULT_SPACING,
        }
    }
}

/// A fully composed screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    rows: Vec<Line>,
}

impl Frame {
    /// Build a frame of exactly `height` rows, clipping each to `width`.
    pub fn from_rows(width: u16, height: u16, mut rows: Vec<Line>) -> Self {
        let h = usize::from(height);
        rows.truncate(h);
        rows.resize(h, Vec::new());
        let rows = rows
            .into_iter()
            .map(|row| clip_line(row, usize::from(width)))
            .collect();
        Self {
            width,
            height,
            rows,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn rows(&self) -> &[Line] {
        &self.rows
    }

    /// Each row as text with SGR sequences, reset after every styled span.
    pub fn to_ansi_lines(&self, painter: &dyn CellPainter) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                let mut out = String::new();
                for span in row {
                    if span.style.is_plain() {
                        out.push_str(&span.text);
                    } else {
                        out.push_str(&span.style.sgr(painter));
                        out.push_str(&span.text);
                        out.push_str(RESET);
                    }
                }
                out
            })
            .collect()
    }

    /// Each row as unstyled text.
    pub fn plain_lines(&self) -> Vec<String> {
        self.rows.iter().map(|row| plain_text(row)).collect()
    }
}

/// Composes frames for slides.
pub struct Compositor {
    settings: RenderSettings,
    font: FigletFont,
    rasterizer: Rasterizer,
}

impl Compositor {
    pub fn new(settings: RenderSettings, font: FigletFont, rasterizer: Rasterizer) -> Self {
        Self {
            settings,
            font,
            rasterizer,
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Compose the current slide of `document`, or the empty notice.
    pub fn compose_document(
        &mut self,
        document: &Document,
        state: &ViewportState,
        painter: &dyn CellPainter,
    ) -> Frame {
        match document.get(state.current) {
            Some(slide) => self.compose(slide, state, document.len(), painter),
            None => self.compose_empty(state),
        }
    }

    /// Compose one slide.
    pub fn compose(
        &mut self,
        slide: &Slide,
        state: &ViewportState,
        slide_count: usize,
        painter: &dyn CellPainter,
    ) -> Frame {
        let width = usize::from(state.width);
        let avail = self.content_height(state);

        let mut rows = match slide {
            Slide::Title { headline, subtitle } => self.title_rows(headline, subtitle, width, avail),
            Slide::Content { blocks } => {
                let layout = ContentLayout {
                    settings: &self.settings,
                    font: &self.font,
                    width,
                };
                // one-row top margin
                std::iter::once(Vec::new())
                    .chain(layout.render(blocks))
                    .collect()
            }
            Slide::Image { path, .. } => self.image_rows(path, width, avail, painter),
        };

        rows.truncate(avail);
        if self.settings.status_bar && state.height > 0 {
            rows.resize(avail, Vec::new());
            let alt = match slide {
                Slide::Image { alt, .. } => Some(alt.as_str()),
                _ => None,
            };
            rows.push(status_line(state.current, slide_count, alt));
        }

        Frame::from_rows(state.width, state.height, rows)
    }

    /// Frame for a document without slides.
    pub fn compose_empty(&self, state: &ViewportState) -> Frame {
        let width = usize::from(state.width);
        let avail = self.content_height(state);

        let mut rows = vec![Vec::new(); avail / 2];
        rows.push(center_line(vec![Span::styled(EMPTY_NOTICE, NOTICE)], width));
        rows.truncate(avail);

        if self.settings.status_bar && state.height > 0 {
            rows.resize(avail, Vec::new());
            rows.push(vec![Span::styled("  q quit", STATUS)]);
        }

        Frame::from_rows(state.width, state.height, rows)
    }

    fn content_height(&self, state: &ViewportState) -> usize {
        let height = usize::from(state.height);
        if self.settings.status_bar {
            height.saturating_sub(1)
        } else {
            height
        }
    }

    fn title_rows(&self, headline: &str, subtitle: &str, width: usize, avail: usize) -> Vec<Line> {
        let banner = self
            .font
            .render(&sanitize(headline), self.settings.figlet_spacing);

        let mut block: Vec<Line> = center(&banner, width)
            .into_iter()
            .map(|row| vec![Span::styled(row, BANNER)])
            .collect();

        if !subtitle.is_empty() {
            block.extend(std::iter::repeat_with(Vec::new).take(SUBTITLE_GAP));
            let spans = run_spans(&tokenize_line(subtitle), Style::default());
            block.push(center_line(spans, width));
        }

        let top = avail.saturating_sub(block.len()) / 2;
        let mut rows = vec![Vec::new(); top];
        rows.extend(block);
        rows
    }

    fn image_rows(
        &mut self,
        path: &Path,
        width: usize,
        avail: usize,
        painter: &dyn CellPainter,
    ) -> Vec<Line> {
        let max_cols = u16::try_from(width).unwrap_or(u16::MAX);
        let max_rows = u16::try_from(avail).unwrap_or(u16::MAX);

        let block: Vec<Line> = match self.rasterizer.rasterize(path, max_cols, max_rows, painter) {
            RasterOutcome::Grid(grid) => grid
                .rows()
                .map(|cells| {
                    let mut line = Vec::new();
                    for cell in cells {
                        let span = painter.paint(cell);
                        push_span(&mut line, &span.text, span.style);
                    }
                    center_line(line, width)
                })
                .collect(),
            RasterOutcome::Placeholder(text) => {
                vec![center_line(vec![Span::styled(sanitize(&text), NOTICE)], width)]
            }
        };

        let top = avail.saturating_sub(block.len()) / 2;
        let mut rows = vec![Vec::new(); top];
        rows.extend(block);
        rows
    }
}

/// The navigation hint drawn on the last row.
pub fn status_line(current: usize, slide_count: usize, alt: Option<&str>) -> Line {
    let mut text = format!(
        "  Slide {}/{}  ←/→ navigate  q quit",
        current + 1,
        slide_count
    );
    if let Some(alt) = alt.filter(|a| !a.is_empty()) {
        text.push_str("  ");
        text.push_str(&sanitize(alt));
    }
    vec![Span::styled(text, STATUS)]
}
