// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Serialize;
use slotboard_domain::{Weekday, WeekSchedule};

/// One batch's rendered table row: all five weekday cells, always
/// present, each an ordered list of slot labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRow {
    /// The raw batch key from the input, in input order.
    pub batch: String,
    /// Slot labels per weekday; an unscheduled day is an empty cell.
    pub week: WeekSchedule,
}

impl BatchRow {
    /// Returns the slot labels for one weekday cell.
    #[must_use]
    pub fn slots(&self, day: Weekday) -> &[String] {
        self.week.slots(day)
    }
}

/// A fully structured per-batch, per-weekday table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchTable {
    /// Rows in input key order, never sorted.
    pub rows: Vec<BatchRow>,
}

/// The tagged result of classifying an untrusted timetable value.
///
/// The variants form a graceful-degradation chain: a batch-shaped object
/// renders as a table, any other parsed value as a generic structured
/// dump, and everything else as literal text. There is no error variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ScheduleView {
    /// A batch-shaped mapping, table-rendered.
    BatchTable(BatchTable),
    /// Parsed JSON that is not batch-shaped, pretty-printed.
    Structured(String),
    /// Unparseable or non-structured input, shown literally.
    RawText(String),
}

impl std::fmt::Display for ScheduleView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::text::render_text(self))
    }
}
