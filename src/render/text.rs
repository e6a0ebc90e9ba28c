use anyhow::Result;
use kurbo::{Point, Rect};

use crate::render::{Canvas, Font, Paint, Rgb, TextStyle};

/// Padding of a highlight box around its phrase.
const HIGHLIGHT_PADDING: f64 = 5.0;

/// Distance from the text baseline to the top of a highlight box.
const HIGHLIGHT_RISE: f64 = 32.0;

const HIGHLIGHT_HEIGHT: f64 = 46.0;

const HIGHLIGHT_ALPHA: f64 = 0.35;

/// A run of text written in one style.
#[derive(Clone, Debug, PartialEq)]
pub struct Phrase {
    text: String,
    bold: bool,
    highlight: bool,
    newline: bool,
}

impl Phrase {
    pub fn regular(text: impl Into<String>) -> Self {
        Self { text: text.into(), bold: false, highlight: false, newline: false }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self { bold: true, ..Self::regular(text) }
    }

    /// Draw a highlight box behind the phrase when `highlight` holds.
    pub fn highlighted(self, highlight: bool) -> Self { Self { highlight, ..self } }

    /// Start the phrase on a new line.
    pub fn on_new_line(self) -> Self { Self { newline: true, ..self } }

    #[inline] pub fn text(&self) -> &str { &self.text }

    #[inline] pub fn is_bold(&self) -> bool { self.bold }

    #[inline] pub fn is_highlighted(&self) -> bool { self.highlight }

    #[inline] pub fn starts_new_line(&self) -> bool { self.newline }
}

/// An ordered list of phrases, built once and written by a [`TextCursor`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sentence {
    phrases: Vec<Phrase>,
}

impl Sentence {
    pub fn new() -> Self { Self::default() }

    pub fn then(mut self, phrase: Phrase) -> Self {
        self.phrases.push(phrase);
        self
    }

    #[inline] pub fn phrases(&self) -> &[Phrase] { &self.phrases }

    /// The sentence as plain text, one string per line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();
        for (i, phrase) in self.phrases.iter().enumerate() {
            if phrase.newline && i > 0 {
                lines.push(std::mem::take(&mut current));
            }
            current.push_str(&phrase.text);
        }
        lines.push(current);
        lines
    }
}

/// Writes phrases left to right, wrapping only on explicit newlines.
#[derive(Clone, Debug)]
pub struct TextCursor {
    line_start: f64,
    position: Point,
    line_gap: f64,
    font_size: f64,
    text_color: Rgb,
    highlight_color: Rgb,
}

impl TextCursor {
    pub fn new(origin: Point, line_gap: f64, font_size: f64, text_color: Rgb, highlight_color: Rgb) -> Self {
        Self { line_start: origin.x, position: origin, line_gap, font_size, text_color, highlight_color }
    }

    #[inline] pub fn position(&self) -> Point { self.position }

    /// Write one phrase and advance past it.
    pub fn write(&mut self, canvas: &mut impl Canvas, phrase: &Phrase) -> Result<()> {
        if phrase.newline {
            self.position = Point::new(self.line_start, self.position.y + self.line_gap);
        }

        let font = if phrase.bold { Font::bold(self.font_size) } else { Font::regular(self.font_size) };
        let width = canvas.measure_text(&phrase.text, font)?;

        if phrase.highlight {
            let Point { x, y } = self.position;
            canvas.fill_rect(
                Rect::new(
                    x - HIGHLIGHT_PADDING,
                    y - HIGHLIGHT_RISE,
                    x + width + HIGHLIGHT_PADDING,
                    y - HIGHLIGHT_RISE + HIGHLIGHT_HEIGHT,
                ),
                Paint::solid(self.highlight_color).with_alpha(HIGHLIGHT_ALPHA),
            );
        }

        if !phrase.text.is_empty() {
            canvas.fill_text(&phrase.text, self.position, TextStyle::new(font), Paint::solid(self.text_color))?;
        }
        self.position.x += width;
        Ok(())
    }

    /// Write every phrase of `sentence` in order.
    pub fn write_sentence(&mut self, canvas: &mut impl Canvas, sentence: &Sentence) -> Result<()> {
        sentence.phrases().iter().try_for_each(|phrase| self.write(canvas, phrase))
    }
}
