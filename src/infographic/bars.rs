use anyhow::Result;
use kurbo::{BezPath, Point, Rect};

use crate::{
    election::{metrics::round_half_up, Delegation, Parties, Side},
    infographic::{layout::*, narrative::plural},
    render::{Canvas, LinearScale, Paint, Rgb, TextAlign, TextStyle},
};

/// Gap between neighbouring seat rectangles, and between the seat bar and the brackets below it.
const SEAT_MARGIN: f64 = 4.0;
const BRACKET_DEPTH: f64 = 15.0;
const BRACKET_LABEL_OFFSET: f64 = 20.0;
const BRACKET_LINE_WIDTH: f64 = 2.0;

/// Fill a bar segment three times: shadow one pixel left, highlight one pixel right, true color on top.
fn draw_segment(canvas: &mut impl Canvas, x: f64, y: f64, width: f64, height: f64, color: Rgb) {
    canvas.fill_rect(Rect::new(x - 1.0, y, x - 1.0 + width, y + height), Paint::solid(color.darker(1.0)));
    canvas.fill_rect(Rect::new(x + 1.0, y, x + 1.0 + width, y + height), Paint::solid(color.brighter(1.0)));
    canvas.fill_rect(Rect::new(x, y, x + width, y + height), Paint::solid(color));
}

/// Left or right label above a bar, in the party's color.
fn draw_label(canvas: &mut impl Canvas, layout: &Layout, side: Side, text: &str, baseline: f64, color: Rgb) -> Result<()> {
    let (x, align) = match side {
        Side::Left => (layout.graph_origin.x, TextAlign::Start),
        Side::Right => (layout.graph_origin.x + layout.graph_width, TextAlign::End),
    };
    canvas.fill_text(
        text,
        Point::new(x, baseline - ANNOTATION_MARGIN),
        TextStyle::new(ANNOTATION_FONT).aligned(align),
        Paint::solid(color),
    )
}

/// Two-way vote share bar, left party first, each segment labelled with its rounded percentage.
pub(crate) fn draw_vote_bar(canvas: &mut impl Canvas, layout: &Layout, delegation: &Delegation, parties: &Parties) -> Result<()> {
    let votes = delegation.vote_results();
    let total = delegation.votes() as f64;
    let scale = LinearScale::new((0.0, total), (0.0, layout.graph_width));
    let baseline = layout.vote_baseline();

    let left_width = scale.apply(votes[Side::Left] as f64);
    for side in Side::BOTH {
        let count = votes[side];
        if count < 1 { continue }

        let party = parties.get(side);
        let offset = match side {
            Side::Left => 2.0,
            Side::Right => left_width + 3.0,
        };
        draw_segment(
            canvas,
            layout.graph_origin.x + offset,
            baseline,
            scale.apply(count as f64) - SEAT_MARGIN,
            layout.rect_height,
            party.color(),
        );

        let percent = round_half_up(count as f64 / total * 100.0);
        let label = format!("{percent}% {} vote", party.name());
        draw_label(canvas, layout, side, &label, baseline, party.color())?;
    }
    Ok(())
}

/// Horizontal placement of seat rectangles.
struct SeatScale {
    scale: LinearScale,
    rect_width: f64,
}

impl SeatScale {
    fn new(layout: &Layout, seats: usize) -> Self {
        let slot = (layout.graph_width / seats as f64).floor();
        let origin = layout.graph_origin.x;
        Self {
            scale: LinearScale::new(
                (1.0, seats as f64),
                (origin + 2.0, origin + layout.graph_width - slot + SEAT_MARGIN),
            ),
            rect_width: slot - SEAT_MARGIN,
        }
    }

    /// Left edge of seat `seat` (1-based; fractional seats interpolate).
    fn x(&self, seat: f64) -> f64 { self.scale.apply(seat) }

    /// Horizontal center of seat `seat`.
    fn center(&self, seat: f64) -> f64 { self.x(seat) + self.rect_width / 2.0 }
}

/// One rectangle per seat, seats won by the left party first, with seat count labels.
pub(crate) fn draw_seat_bar(canvas: &mut impl Canvas, layout: &Layout, delegation: &Delegation, parties: &Parties) -> Result<()> {
    let seats = delegation.seats();
    let results = delegation.seat_results();
    let scale = SeatScale::new(layout, seats);
    let baseline = layout.seat_baseline();

    for seat in 1..=seats {
        let side = if seat <= results[Side::Left] { Side::Left } else { Side::Right };
        draw_segment(canvas, scale.x(seat as f64), baseline, scale.rect_width, layout.rect_height, parties.get(side).color());
    }

    for side in Side::BOTH {
        let count = results[side];
        if count < 1 { continue }

        let party = parties.get(side);
        let label = format!("{count} {} {}", party.name(), plural(count, "seat"));
        draw_label(canvas, layout, side, &label, baseline, party.color())?;
    }
    Ok(())
}

/// Brackets under the seat bar marking uncontested seats: seats the left party left open sit at
/// the right end of the bar, seats the right party left open at the left end.
pub(crate) fn draw_uncontested(canvas: &mut impl Canvas, layout: &Layout, delegation: &Delegation) -> Result<()> {
    let seats = delegation.seats() as f64;
    let uncontested = delegation.uncontested_seats();
    let scale = SeatScale::new(layout, delegation.seats());
    let top = layout.seat_baseline() + layout.rect_height + SEAT_MARGIN;
    let paint = Paint::solid(ANNOTATION_COLOR).with_alpha(UNCONTESTED_ALPHA);

    let spans = Side::BOTH.map(|side| {
        let count = uncontested[side] as f64;
        match side {
            Side::Left => (seats - count + 1.0, seats, seats - (count - 1.0) / 2.0),
            Side::Right => (1.0, count, 1.0 + (count - 1.0) / 2.0),
        }
    });

    for side in Side::BOTH {
        if uncontested[side] < 1 { continue }

        let (first, last, middle) = spans[side];
        let (x0, x1) = (scale.center(first), scale.center(last));
        let mut bracket = BezPath::new();
        bracket.move_to((x0, top));
        bracket.line_to((x0, top + BRACKET_DEPTH));
        bracket.line_to((x1, top + BRACKET_DEPTH));
        bracket.line_to((x1, top));
        canvas.stroke_path(&bracket, BRACKET_LINE_WIDTH, paint);

        canvas.fill_text(
            "uncontested",
            Point::new(scale.center(middle), top + BRACKET_LABEL_OFFSET),
            TextStyle::new(ANNOTATION_FONT).aligned(TextAlign::Center).hanging(),
            paint,
        )?;
    }
    Ok(())
}
