#![doc = "Efficiency gap analytics and election infographics"]
mod config;
mod election;
mod error;
mod geom;
mod infographic;
mod ingest;
mod io;
mod render;
mod report;

#[doc(inline)]
pub use config::{Config, FontPaths};

#[doc(inline)]
pub use election::{Delegation, DelegationSummary, District, ElectionResults, Parties, Party, Side};

#[doc(inline)]
pub use error::{ReportError, ReportResult};

#[doc(inline)]
pub use geom::{AlbersProjection, DistrictBoundaries, FittedMap};

#[doc(inline)]
pub use infographic::{compose, render_infographic, HEIGHT, WIDTH};

#[doc(inline)]
pub use ingest::load_results;

#[doc(inline)]
pub use io::csv::write_summary;

#[doc(inline)]
pub use render::{
    Canvas, DrawCommand, Font, FontSet, LinearScale, Paint, Phrase, RasterCanvas, RecordingCanvas, Rgb,
    Sentence, TextAlign, TextBaseline, TextCursor, TextStyle,
};

#[doc(inline)]
pub use report::{report_delegation, run_report, ReportContext, ReportOutcome};
