//! Weekly routine schedule models.
//!
//! A schedule maps each day of the week to an ordered morning routine and
//! an ordered evening routine, authored per skin type. Schedules are
//! static input data in this system; the projector resolves and annotates
//! them (see [`crate::projector`]).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::SkinType;

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All days, Monday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One day's routine: ordered product lists for morning and evening.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRoutine {
    /// Products applied in the morning, in application order.
    pub morning: Vec<String>,
    /// Products applied in the evening, in application order.
    pub evening: Vec<String>,
}

impl DailyRoutine {
    /// Creates a routine from morning and evening product lists.
    pub fn new(morning: Vec<String>, evening: Vec<String>) -> Self {
        Self { morning, evening }
    }

    /// Whether the product appears in either slot.
    pub fn uses(&self, product: &str) -> bool {
        self.morning.iter().any(|p| p == product) || self.evening.iter().any(|p| p == product)
    }
}

/// A full week of routines for one skin type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    days: HashMap<DayOfWeek, DailyRoutine>,
}

impl WeeklySchedule {
    /// Creates an empty weekly schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the routine for a day.
    pub fn with_day(mut self, day: DayOfWeek, routine: DailyRoutine) -> Self {
        self.days.insert(day, routine);
        self
    }

    /// Routine for a day, if authored.
    pub fn day(&self, day: DayOfWeek) -> Option<&DailyRoutine> {
        self.days.get(&day)
    }

    /// Days with an authored routine, in week order.
    pub fn days(&self) -> impl Iterator<Item = (DayOfWeek, &DailyRoutine)> + '_ {
        DayOfWeek::ALL
            .iter()
            .filter_map(move |&d| self.days.get(&d).map(|r| (d, r)))
    }

    /// Whether every day of the week has a routine.
    pub fn is_complete(&self) -> bool {
        DayOfWeek::ALL.iter().all(|d| self.days.contains_key(d))
    }

    /// Distinct product names referenced anywhere in the week.
    pub fn referenced_products(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for (_, routine) in self.days() {
            for p in routine.morning.iter().chain(&routine.evening) {
                if !seen.contains(&p.as_str()) {
                    seen.push(p.as_str());
                }
            }
        }
        seen
    }
}

/// Schedules for all skin types.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleTable {
    schedules: HashMap<SkinType, WeeklySchedule>,
}

impl ScheduleTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a schedule for a skin type.
    pub fn with_schedule(mut self, skin_type: SkinType, schedule: WeeklySchedule) -> Self {
        self.schedules.insert(skin_type, schedule);
        self
    }

    /// Schedule for a skin type, if present.
    pub fn get(&self, skin_type: SkinType) -> Option<&WeeklySchedule> {
        self.schedules.get(&skin_type)
    }

    /// Number of skin types covered.
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }
}

/// A user-chosen schedule snapshot, as handed to durable storage.
///
/// The core stores `saved_at` opaquely; the collaborator that owns
/// persistence supplies it (e.g., an RFC 3339 timestamp).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSchedule {
    /// The skin type the user selected.
    pub skin_type: SkinType,
    /// Snapshot of the weekly schedule at save time.
    pub schedule: WeeklySchedule,
    /// Caller-supplied save timestamp.
    pub saved_at: String,
}

impl SavedSchedule {
    /// Creates a snapshot record.
    pub fn new(skin_type: SkinType, schedule: WeeklySchedule, saved_at: impl Into<String>) -> Self {
        Self {
            skin_type,
            schedule,
            saved_at: saved_at.into(),
        }
    }
}

/// Informational tag derived from a day's routine content.
///
/// Tags are recomputed from the resolved routine on every call — never
/// stored alongside the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoutineTag {
    /// A photoprotective product appears in the morning list.
    RequiresSunProtection,
    /// A night-only active appears in the evening list.
    NightTreatment,
    /// A mask product appears in either slot.
    MaskDay,
}

impl fmt::Display for RoutineTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoutineTag::RequiresSunProtection => "Requires sun protection",
            RoutineTag::NightTreatment => "Night treatment",
            RoutineTag::MaskDay => "Mask day",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routine(morning: &[&str], evening: &[&str]) -> DailyRoutine {
        DailyRoutine::new(
            morning.iter().map(|s| s.to_string()).collect(),
            evening.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_daily_routine_uses() {
        let r = routine(&["Cleanser", "Sunscreen"], &["Cleanser", "Retinol"]);
        assert!(r.uses("Sunscreen"));
        assert!(r.uses("Retinol"));
        assert!(!r.uses("Toner"));
    }

    #[test]
    fn test_weekly_schedule_week_order() {
        let s = WeeklySchedule::new()
            .with_day(DayOfWeek::Wednesday, routine(&["Toner"], &[]))
            .with_day(DayOfWeek::Monday, routine(&["Cleanser"], &[]));

        let days: Vec<_> = s.days().map(|(d, _)| d).collect();
        assert_eq!(days, vec![DayOfWeek::Monday, DayOfWeek::Wednesday]);
        assert!(!s.is_complete());
    }

    #[test]
    fn test_weekly_schedule_complete() {
        let mut s = WeeklySchedule::new();
        for d in DayOfWeek::ALL {
            s = s.with_day(d, routine(&["Cleanser"], &["Cleanser"]));
        }
        assert!(s.is_complete());
    }

    #[test]
    fn test_referenced_products_deduplicated() {
        let s = WeeklySchedule::new()
            .with_day(
                DayOfWeek::Monday,
                routine(&["Cleanser", "Toner"], &["Cleanser"]),
            )
            .with_day(DayOfWeek::Tuesday, routine(&["Cleanser"], &["Retinol"]));

        assert_eq!(
            s.referenced_products(),
            vec!["Cleanser", "Toner", "Retinol"]
        );
    }

    #[test]
    fn test_schedule_table_lookup() {
        let table = ScheduleTable::new().with_schedule(
            SkinType::Dry,
            WeeklySchedule::new().with_day(DayOfWeek::Monday, routine(&["Moisturizer"], &[])),
        );
        assert_eq!(table.len(), 1);
        assert!(table.get(SkinType::Dry).is_some());
        assert!(table.get(SkinType::Oily).is_none());
    }

    #[test]
    fn test_saved_schedule_snapshot() {
        let schedule =
            WeeklySchedule::new().with_day(DayOfWeek::Sunday, routine(&["Sunscreen"], &[]));
        let saved = SavedSchedule::new(SkinType::Normal, schedule.clone(), "2025-06-01T08:00:00Z");
        assert_eq!(saved.skin_type, SkinType::Normal);
        assert_eq!(saved.schedule, schedule);
        assert_eq!(saved.saved_at, "2025-06-01T08:00:00Z");
    }

    #[test]
    fn test_day_of_week_display() {
        assert_eq!(DayOfWeek::Monday.to_string(), "Monday");
        assert_eq!(DayOfWeek::ALL.len(), 7);
    }
}
