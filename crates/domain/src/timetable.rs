// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timetable draft types.
//!
//! A draft maps batch ids to a per-weekday list of slot-label strings.
//! The wire format is a JSON object keyed by batch id, then by weekday
//! name; batch order in the object is meaningful and is preserved through
//! serialization in both directions.

use crate::types::{BatchId, Weekday};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Slot labels for one batch across the five scheduled weekdays.
///
/// A day with no scheduled slots is an empty list, never an absent entry;
/// deserialization fills in missing days as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    /// Monday slot labels, in scheduled order.
    #[serde(rename = "Monday", default)]
    pub monday: Vec<String>,
    /// Tuesday slot labels, in scheduled order.
    #[serde(rename = "Tuesday", default)]
    pub tuesday: Vec<String>,
    /// Wednesday slot labels, in scheduled order.
    #[serde(rename = "Wednesday", default)]
    pub wednesday: Vec<String>,
    /// Thursday slot labels, in scheduled order.
    #[serde(rename = "Thursday", default)]
    pub thursday: Vec<String>,
    /// Friday slot labels, in scheduled order.
    #[serde(rename = "Friday", default)]
    pub friday: Vec<String>,
}

impl WeekSchedule {
    /// Returns the slot labels for one weekday.
    #[must_use]
    pub fn slots(&self, day: Weekday) -> &[String] {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
        }
    }

    /// Returns a mutable reference to the slot labels for one weekday.
    pub const fn slots_mut(&mut self, day: Weekday) -> &mut Vec<String> {
        match day {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
        }
    }

    /// Returns true if no weekday has any scheduled slot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Weekday::ALL.iter().all(|day| self.slots(*day).is_empty())
    }
}

/// One batch's schedule within a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSchedule {
    /// The batch this schedule belongs to.
    pub batch: BatchId,
    /// The per-weekday slot labels.
    pub week: WeekSchedule,
}

/// One candidate full timetable: an ordered mapping batch id to week
/// schedule.
///
/// Drafts are produced by the generation flow (several candidates) or the
/// suggestion flow (one revised draft). This system never validates a
/// draft against scheduling constraints; whatever constraint awareness
/// exists lives in the external completion service's prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimetableDraft {
    /// Per-batch schedules, in wire order.
    pub batches: Vec<BatchSchedule>,
}

impl TimetableDraft {
    /// Creates an empty draft.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            batches: Vec::new(),
        }
    }

    /// Returns the schedule for one batch, if present.
    #[must_use]
    pub fn schedule_for(&self, batch: &BatchId) -> Option<&WeekSchedule> {
        self.batches
            .iter()
            .find(|entry| entry.batch == *batch)
            .map(|entry| &entry.week)
    }
}

impl Serialize for TimetableDraft {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.batches.len()))?;
        for entry in &self.batches {
            map.serialize_entry(entry.batch.value(), &entry.week)?;
        }
        map.end()
    }
}

struct DraftVisitor;

impl<'de> Visitor<'de> for DraftVisitor {
    type Value = TimetableDraft;

    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("a map of batch id to week schedule")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut batches: Vec<BatchSchedule> = Vec::new();
        while let Some((key, week)) = access.next_entry::<String, WeekSchedule>()? {
            let batch: BatchId = BatchId::new(&key).map_err(serde::de::Error::custom)?;
            batches.push(BatchSchedule { batch, week });
        }
        Ok(TimetableDraft { batches })
    }
}

impl<'de> Deserialize<'de> for TimetableDraft {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DraftVisitor)
    }
}
