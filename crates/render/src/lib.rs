// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Tolerant timetable rendering.
//!
//! Timetable drafts arrive as free text from an external completion
//! service, so their shape cannot be trusted: a draft may be a well-formed
//! batch-to-weekday mapping, some other JSON value, or plain prose. This
//! crate classifies any such value into a tagged [`ScheduleView`] and
//! renders it; every malformed input degrades to a less-structured but
//! still displayable form, and no input raises an error past this
//! boundary.

mod classify;
mod text;
mod view;

pub use classify::{classify_text, classify_value};
pub use text::render_text;
pub use view::{BatchRow, BatchTable, ScheduleView};
