mod canvas;
mod color;
mod raster;
mod recording;
mod scale;
mod text;

pub use canvas::{Canvas, Font, Paint, TextAlign, TextBaseline, TextStyle};
pub use color::Rgb;
pub use raster::{FontSet, RasterCanvas};
pub use recording::{DrawCommand, RecordingCanvas};
pub use scale::LinearScale;
pub use text::{Phrase, Sentence, TextCursor};
