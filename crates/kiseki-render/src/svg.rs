//! SVG drawing surface.
//!
//! Records every line drawn through [`LineSink`] and serializes the
//! result using the [`svg`] crate for document construction and XML
//! escaping.
//!
//! The document is sized to the device viewport: a viewport with
//! `x_max = 239, y_max = 319` produces a 240x320 document, matching the
//! pixel addressing of the target panel.
//!
//! This is a pure in-memory surface with no I/O -- [`SvgCanvas::to_svg`]
//! returns a `String`.

use svg::Document;
use svg::node::element::{Line, Title};

use kiseki_pipeline::{LineSink, Viewport};

/// A [`LineSink`] that collects lines and serializes them as SVG.
///
/// [`LineSink::begin`] discards any previously recorded lines, so a
/// canvas can be reused across trajectories.
///
/// # Examples
///
/// ```
/// use kiseki_pipeline::{LineSink, Viewport};
/// use kiseki_render::SvgCanvas;
///
/// let mut canvas = SvgCanvas::new(Viewport::new(0, 99, 0, 99));
/// canvas.begin();
/// canvas.draw_line(0, 99, 99, 0);
///
/// let svg = canvas.to_svg();
/// assert!(svg.contains(r#"viewBox="0 0 100 100""#));
/// assert!(svg.contains(r#"x1="0""#));
/// assert!(svg.contains(r#"y2="0""#));
/// ```
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    viewport: Viewport,
    title: Option<String>,
    lines: Vec<(i32, i32, i32, i32)>,
}

impl SvgCanvas {
    /// Create an empty canvas for the given viewport.
    #[must_use]
    pub const fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            title: None,
            lines: Vec::new(),
        }
    }

    /// Set the document `<title>` element.
    ///
    /// Typically the source log filename. The text is XML-escaped by
    /// the `svg` crate.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Number of lines recorded since the last [`LineSink::begin`].
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Serialize the recorded lines as an SVG document string.
    ///
    /// Each line becomes a `<line>` element stroked black at width 1.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let width = self.viewport.x_max.saturating_add(1);
        let height = self.viewport.y_max.saturating_add(1);
        let mut doc = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0, 0, width, height));

        if let Some(title) = &self.title {
            doc = doc.add(Title::new(title.as_str()));
        }

        for &(x1, y1, x2, y2) in &self.lines {
            let line = Line::new()
                .set("x1", x1)
                .set("y1", y1)
                .set("x2", x2)
                .set("y2", y2)
                .set("stroke", "black")
                .set("stroke-width", 1);
            doc = doc.add(line);
        }

        // The svg crate omits the XML declaration, so we prepend it.
        format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{doc}\n")
    }
}

impl LineSink for SvgCanvas {
    fn begin(&mut self) {
        self.lines.clear();
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.lines.push((x1, y1, x2, y2));
    }
}
