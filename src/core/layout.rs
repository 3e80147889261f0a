//! # Chart Layout
//!
//! Pure bar-chart arithmetic: turns a `Timings` collection and a presentation order
//! into rows, segment coordinates, labels and axis extents. Nothing here draws.

use crate::models::{PresentationOrder, Timings};

/// Gap between the end of a bar and the start of its label, in seconds.
pub const LABEL_GAP: f64 = 0.02;

/// Horizontal room reserved per label character, in seconds.
pub const LABEL_CHAR_WIDTH: f64 = 0.02;

/// Height of a bar as a fraction of its row.
pub const BAR_HEIGHT: f64 = 0.5;

/// A horizontal span on the time axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Left edge, in seconds.
    pub start: f64,
    /// Length, in seconds.
    pub width: f64,
}

impl Segment {
    /// Right edge, in seconds.
    pub fn end(&self) -> f64 {
        self.start + self.width
    }
}

/// One rendered target.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// The target's name.
    pub name: String,
    /// Zero-based row, counted from the top of the chart.
    pub row: usize,
    /// The whole build of the target.
    pub total: Segment,
    /// The part of the build after metadata was available. Always ends with `total`.
    pub metadata: Segment,
    /// The annotation text.
    pub label: String,
    /// Where the label starts on the time axis.
    pub label_x: f64,
}

/// Every bar of the chart plus the axis extents.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    /// Rendered bars, top row first.
    pub bars: Vec<Bar>,
    /// Running offset after the last tier.
    pub final_offset: f64,
    /// Upper bound of the time axis; always positive.
    pub x_max: f64,
}

impl ChartLayout {
    /// The number of rendered rows, which is the vertical extent of the chart.
    pub fn rows(&self) -> usize {
        self.bars.len()
    }

    /// The vertical center of `row` in chart coordinates, where y grows upwards
    /// and the top row sits just below `rows()`.
    pub fn row_center(&self, row: usize) -> f64 {
        let from_bottom = self.rows().saturating_sub(row + 1);
        from_bottom as f64 + 0.5
    }
}

/// The annotation printed next to a bar.
///
/// Durations always carry exactly two decimals (`3.00s`, never `3.0s`).
pub fn bar_label(name: &str, duration: f64) -> String {
    format!("{} {:.2}s", name, duration)
}

/// Lays out every target of `order` that has a timing.
///
/// Targets missing from `timings` are skipped and take no row. Each tier starts at the
/// running offset, which then advances by the longest duration in the tier.
pub fn compute(timings: &Timings, order: &PresentationOrder) -> ChartLayout {
    let mut bars = Vec::new();
    let mut offset = 0.0_f64;
    let mut longest_label = 0_usize;

    for tier in &order.tiers {
        let mut tier_span = 0.0_f64;
        for name in tier {
            let Some(record) = timings.get(name) else {
                log::debug!("No timing for '{}', skipping", name);
                continue;
            };

            let duration = record.duration();
            let metadata_duration = record.metadata_duration();
            let total = Segment {
                start: offset,
                width: duration,
            };
            let metadata = Segment {
                start: offset + metadata_duration,
                width: duration - metadata_duration,
            };
            let label = bar_label(name, duration);
            longest_label = longest_label.max(label.chars().count());

            bars.push(Bar {
                name: name.clone(),
                row: bars.len(),
                total,
                metadata,
                label_x: total.end() + LABEL_GAP,
                label,
            });
            tier_span = tier_span.max(duration);
        }
        offset += tier_span;
    }

    let x_max = offset + LABEL_CHAR_WIDTH * longest_label as f64;
    ChartLayout {
        bars,
        final_offset: offset,
        x_max: if x_max > 0.0 { x_max } else { 1.0 },
    }
}
