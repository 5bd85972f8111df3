//! The presentation: document, compositor and painter, plus the blocking
//! event loop that drives them.
//!
//! The loop is single-threaded: it blocks on the next terminal event, applies
//! one navigator transition, composes one frame and writes it, then blocks
//! again. Image decoding happens inside that step.

use std::io::{self, Write};
use std::path::Path;

use crossterm::event;

use crate::ascii::Rasterizer;
use crate::compositor::{Compositor, Frame, RenderSettings};
use crate::config::Config;
use crate::document::Document;
use crate::error::AppError;
use crate::figlet::load_font;
use crate::input::map_event;
use crate::navigator::{transition, Step, ViewportState};
use crate::terminal::{draw_frame, painter_for, CellPainter, ColorDepth, RawModeGuard};

/// Render settings taken from the config.
pub fn render_settings(config: &Config) -> RenderSettings {
    RenderSettings {
        margin: config.render.margin,
        banner_headings: config.render.banner_headings,
        status_bar: config.ui.status_bar,
        figlet_spacing: config.figlet.spacing,
    }
}

/// A loaded document ready to present.
pub struct Presentation {
    document: Document,
    compositor: Compositor,
    painter: Box<dyn CellPainter>,
}

impl Presentation {
    /// Read and parse the document at `path`. Relative image paths resolve
    /// against the document's directory.
    pub fn load(path: &Path, config: &Config, depth: ColorDepth) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path).map_err(|source| AppError::ReadDocument {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().filter(|p| !p.as_os_str().is_empty());
        Ok(Self::from_source(&text, base_dir, config, depth))
    }

    /// Build a presentation from document text.
    pub fn from_source(
        text: &str,
        base_dir: Option<&Path>,
        config: &Config,
        depth: ColorDepth,
    ) -> Self {
        let document = Document::parse(text);
        log::info!("Parsed {} slides", document.len());

        let mut rasterizer = Rasterizer::new(config.render.char_aspect);
        if let Some(dir) = base_dir {
            rasterizer = rasterizer.with_base_dir(dir);
        }
        let font = load_font(config.figlet.font.as_deref());
        let compositor = Compositor::new(render_settings(config), font, rasterizer);

        Self {
            document,
            compositor,
            painter: painter_for(depth),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Compose the frame for `state`.
    pub fn frame(&mut self, state: &ViewportState) -> Frame {
        self.compositor
            .compose_document(&self.document, state, self.painter.as_ref())
    }

    fn draw<W: Write>(&mut self, out: &mut W, state: &ViewportState) -> io::Result<()> {
        let frame = self.frame(state);
        draw_frame(out, &frame, self.painter.as_ref())
    }

    /// Take over the terminal and present until the user quits.
    pub fn run(&mut self) -> Result<(), AppError> {
        let mut guard = RawModeGuard::enter()?;
        let mut stdout = io::stdout();

        let (width, height) = crossterm::terminal::size()?;
        let mut state = ViewportState::new(width, height);
        log::info!(
            "Presenting {} slides at {}x{} ({})",
            self.document.len(),
            width,
            height,
            self.painter.depth().name()
        );
        self.draw(&mut stdout, &state)?;

        loop {
            let event = event::read()?;
            let Some(nav) = map_event(&event) else {
                continue;
            };

            match transition(state, nav, self.document.len()) {
                Step::Quit => break,
                Step::Render(next) => {
                    log::debug!("{:?}: slide {} -> {}", nav, state.current, next.current);
                    state = next;
                    self.draw(&mut stdout, &state)?;
                }
            }
        }

        guard.exit()?;
        log::info!("Presentation closed on slide {}", state.current + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presentation(source: &str) -> Presentation {
        Presentation::from_source(source, None, &Config::default(), ColorDepth::TrueColor)
    }

    #[test]
    fn test_render_settings_from_config() {
        let mut config = Config::default();
        config.render.margin = 2;
        config.ui.status_bar = false;
        config.figlet.spacing = 0;
        let settings = render_settings(&config);
        assert_eq!(settings.margin, 2);
        assert!(!settings.status_bar);
        assert_eq!(settings.figlet_spacing, 0);
        assert!(settings.banner_headings);
    }

    #[test]
    fn test_frame_follows_state() {
        let mut p = presentation("Intro\n===\n---\n## Second");
        assert_eq!(p.document().len(), 2);

        let mut state = ViewportState::new(60, 12);
        let first = p.frame(&state);
        assert_eq!(first.rows().len(), 12);
        assert!(first.plain_lines()[11].contains("Slide 1/2"));

        state.current = 1;
        let second = p.frame(&state);
        assert!(second.plain_lines().iter().any(|l| l == "    Second"));
        assert!(second.plain_lines()[11].contains("Slide 2/2"));
    }

    #[test]
    fn test_draw_writes_whole_frame() {
        let mut p = presentation("# Hi");
        let mut out = Vec::new();
        p.draw(&mut out, &ViewportState::new(40, 6)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\x1b[2J"));
        assert!(text.contains("\x1b[6;1H"));
    }

    #[test]
    fn test_load_missing_document() {
        let err = Presentation::load(
            Path::new("/nonexistent/talk.md"),
            &Config::default(),
            ColorDepth::Ansi256,
        )
        .err()
        .unwrap();
        assert!(err.to_string().starts_with("failed to read /nonexistent/talk.md: "));
    }

    #[test]
    fn test_images_resolve_against_document_dir() {
        let dir = tempfile::tempdir().unwrap();
        let img = image::RgbImage::from_pixel(8, 8, image::Rgb([200, 10, 10]));
        img.save(dir.path().join("dot.png")).unwrap();
        let doc = dir.path().join("talk.md");
        std::fs::write(&doc, "![dot](dot.png)").unwrap();

        let mut p = Presentation::load(&doc, &Config::default(), ColorDepth::TrueColor).unwrap();
        let frame = p.frame(&ViewportState::new(20, 10));
        let lines = frame.plain_lines();
        assert!(lines.iter().any(|l| l.contains('█')));
        assert!(!lines.iter().any(|l| l.contains("image unavailable")));
    }
}
