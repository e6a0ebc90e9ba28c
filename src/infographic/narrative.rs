use anyhow::Result;
use kurbo::{Point, Rect};

use crate::{
    election::{Delegation, Parties},
    infographic::layout::*,
    render::{Canvas, Paint, Phrase, Rgb, Sentence, TextAlign, TextCursor, TextStyle},
};

const SENTENCE_LINE_GAP: f64 = 48.0;
const FOOTNOTE_LINE_GAP: f64 = 18.0;

/// Title bar across the top: translucent band, title on the left, faded subtitle on the right.
pub(crate) fn draw_title_bar(
    canvas: &mut impl Canvas,
    layout: &Layout,
    title: &str,
    subtitle: &str,
) -> Result<()> {
    canvas.fill_rect(
        Rect::new(0.0, 0.0, layout.width, layout.title_bar_height),
        Paint::solid(Rgb::BLACK).with_alpha(TITLE_ALPHA),
    );
    canvas.fill_text(
        title,
        Point::new(layout.left_margin, layout.grid),
        TextStyle::new(TITLE_FONT),
        Paint::solid(SENTENCE_FILL),
    )?;
    canvas.fill_text(
        subtitle,
        Point::new(layout.width - layout.left_margin, layout.grid),
        TextStyle::new(SUBTITLE_FONT).aligned(TextAlign::End),
        Paint::solid(SENTENCE_FILL).with_alpha(TITLE_ALPHA),
    )
}

/// The headline sentence naming the advantaged party, its gap, and the seats it was worth.
pub(crate) fn main_sentence(delegation: &Delegation, parties: &Parties) -> Sentence {
    let uncontested = delegation.has_uncontested_seats();
    let highlight = !uncontested && delegation.efficiency_gap_seats_imputation() != 0;

    let party = parties.get(delegation.advantage_side());
    let seats = delegation.efficiency_gap_seats();

    Sentence::new()
        .then(Phrase::regular("The "))
        .then(Phrase::bold(format!("{} Party", party.name())).highlighted(highlight))
        .then(Phrase::regular(" had a"))
        .then(Phrase::bold(format!("{} efficiency gap advantage*", delegation.efficiency_gap_percent()))
            .highlighted(highlight)
            .on_new_line())
        .then(Phrase::regular("worth ").on_new_line())
        .then(Phrase::bold(format!("{seats} extra {}", plural(seats, "seat"))).highlighted(highlight))
        .then(Phrase::regular(if uncontested { ", but some seats" } else { "." }))
        .then(Phrase::regular(if uncontested { "were left uncontested.**" } else { "" }).on_new_line())
}

/// Footnote defining the efficiency gap.
pub(crate) fn explanation() -> Sentence {
    Sentence::new()
        .then(Phrase::regular(" * The \"efficiency gap\" measures how effectively a party's votes "))
        .then(Phrase::regular("    are distributed among districts and reveals partisan bias.").on_new_line())
}

/// Footnote stating the vote share assumed for uncontested seats.
pub(crate) fn imputation_disclaimer() -> Sentence {
    Sentence::new()
        .then(Phrase::regular("** This efficiency gap score assumes an opponent would have won"))
        .then(Phrase::regular("    25% of the vote in uncontested seats.").on_new_line())
}

/// Main sentence plus footnotes. The imputation disclaimer only appears, and pushes the
/// explanation up, when some seat went uncontested.
pub(crate) fn draw_narrative(
    canvas: &mut impl Canvas,
    layout: &Layout,
    delegation: &Delegation,
    parties: &Parties,
) -> Result<()> {
    let highlight_color = parties.get(delegation.advantage_side()).color();
    TextCursor::new(layout.sentence_origin(), SENTENCE_LINE_GAP, SENTENCE_SIZE, SENTENCE_FILL, highlight_color)
        .write_sentence(canvas, &main_sentence(delegation, parties))?;

    let uncontested = delegation.has_uncontested_seats();
    let explanation_origin = if uncontested { layout.upper_footnote_origin() } else { layout.footnote_origin() };
    TextCursor::new(explanation_origin, FOOTNOTE_LINE_GAP, DISCLAIMER_SIZE, SENTENCE_FILL, ANNOTATION_COLOR)
        .write_sentence(canvas, &explanation())?;

    if uncontested {
        TextCursor::new(layout.footnote_origin(), FOOTNOTE_LINE_GAP, DISCLAIMER_SIZE, SENTENCE_FILL, ANNOTATION_COLOR)
            .write_sentence(canvas, &imputation_disclaimer())?;
    }
    Ok(())
}

/// `noun` with an `s` unless `count` is exactly one.
pub(crate) fn plural(count: usize, noun: &str) -> String {
    if count == 1 { noun.to_string() } else { format!("{noun}s") }
}
