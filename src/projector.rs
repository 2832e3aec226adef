//! Schedule projection: skin-type lookup, derived tags, text export.
//!
//! Schedules are authored per skin type as static data (resolving one is
//! a lookup, not a computation), so the projector's work is resolution
//! plus formatting: pick the weekly schedule for a skin type, annotate
//! each day with informational tags recomputed from its content, group
//! color classes into usage slots, and render a plain-text export.
//!
//! A skin type with no authored schedule is a `NotFound` condition
//! surfaced to the caller — never a silent fallback to some default.

use crate::errors::ScheduleError;
use crate::models::{
    ColorAssignment, ConflictGraph, DailyRoutine, DayOfWeek, RoutineTag, SavedSchedule,
    ScheduleTable, SkinType, WeeklySchedule,
};

/// Product names that trigger derived routine tags.
const SUN_PROTECTION_PRODUCT: &str = "Sunscreen";
const NIGHT_ONLY_PRODUCT: &str = "Retinol";
const MASK_MARKER: &str = "Mask";

/// Resolves and annotates per-skin-type schedules.
#[derive(Debug, Clone, Default)]
pub struct ScheduleProjector {
    table: ScheduleTable,
}

impl ScheduleProjector {
    /// Creates a projector over a schedule table.
    pub fn new(table: ScheduleTable) -> Self {
        Self { table }
    }

    /// Resolves the weekly schedule for a skin type.
    pub fn resolve(&self, skin_type: SkinType) -> Result<&WeeklySchedule, ScheduleError> {
        self.table
            .get(skin_type)
            .ok_or(ScheduleError::SkinTypeNotFound(skin_type))
    }

    /// Checks every product referenced by a skin type's schedule against
    /// the graph's vertex set.
    ///
    /// Schedules are authored independently of the product list, so a
    /// typo surfaces here rather than as a missing tooltip downstream.
    pub fn validate_references(
        &self,
        skin_type: SkinType,
        graph: &ConflictGraph,
    ) -> Result<(), ScheduleError> {
        let schedule = self.resolve(skin_type)?;
        for product in schedule.referenced_products() {
            if !graph.contains(product) {
                return Err(ScheduleError::UnknownProduct {
                    skin_type,
                    product: product.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Informational tags for one day's routine.
    ///
    /// Derived, never stored: recomputed from the routine content on
    /// every call.
    pub fn tags(&self, routine: &DailyRoutine) -> Vec<RoutineTag> {
        let mut tags = Vec::new();
        if routine.morning.iter().any(|p| p == SUN_PROTECTION_PRODUCT) {
            tags.push(RoutineTag::RequiresSunProtection);
        }
        if routine.evening.iter().any(|p| p == NIGHT_ONLY_PRODUCT) {
            tags.push(RoutineTag::NightTreatment);
        }
        let is_mask = |p: &String| p.contains(MASK_MARKER);
        if routine.morning.iter().any(is_mask) || routine.evening.iter().any(is_mask) {
            tags.push(RoutineTag::MaskDay);
        }
        tags
    }

    /// Groups a coloring into usage slots: slot `i` holds the products
    /// of color class `i`.
    ///
    /// Same color ⇒ no conflict ⇒ same slot. This is the mechanical
    /// color-to-slot convention; the authored tables remain the source
    /// of truth for the weekly layout.
    pub fn color_slots(&self, assignment: &ColorAssignment) -> Vec<Vec<String>> {
        assignment.color_classes()
    }

    /// Snapshot record for durable storage, timestamp supplied by the
    /// caller.
    pub fn save(
        &self,
        skin_type: SkinType,
        saved_at: impl Into<String>,
    ) -> Result<SavedSchedule, ScheduleError> {
        let schedule = self.resolve(skin_type)?.clone();
        Ok(SavedSchedule::new(skin_type, schedule, saved_at))
    }

    /// Plain-text rendering of a skin type's weekly schedule, suitable
    /// for file download.
    pub fn export_text(&self, skin_type: SkinType) -> Result<String, ScheduleError> {
        let schedule = self.resolve(skin_type)?;

        let mut text = format!(
            "SKINCARE SCHEDULE - {} SKIN\n",
            skin_type.key().to_uppercase()
        );
        text.push_str(&"=".repeat(50));
        text.push_str("\n\n");

        for day in DayOfWeek::ALL {
            let Some(routine) = schedule.day(day) else {
                continue;
            };
            text.push_str(&day.name().to_uppercase());
            text.push('\n');
            text.push_str(&"-".repeat(20));
            text.push('\n');
            text.push_str(&format!("Morning: {}\n", routine.morning.join(", ")));
            text.push_str(&format!("Evening: {}\n\n", routine.evening.join(", ")));
        }

        text.push_str("\nNotes:\n");
        text.push_str("- Follow the schedule consistently for best results\n");
        text.push_str("- Adjust to your skin's condition\n");
        text.push_str("- Consult a dermatologist if needed\n");

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;
    use crate::models::Product;

    fn routine(morning: &[&str], evening: &[&str]) -> DailyRoutine {
        DailyRoutine::new(
            morning.iter().map(|s| s.to_string()).collect(),
            evening.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn projector() -> ScheduleProjector {
        let schedule = WeeklySchedule::new()
            .with_day(
                DayOfWeek::Monday,
                routine(
                    &["Cleanser", "Vitamin C", "Sunscreen"],
                    &["Cleanser", "Retinol", "Moisturizer"],
                ),
            )
            .with_day(
                DayOfWeek::Tuesday,
                routine(&["Cleanser", "Moisturizer"], &["Cleanser", "Clay Mask"]),
            );
        ScheduleProjector::new(ScheduleTable::new().with_schedule(SkinType::Normal, schedule))
    }

    #[test]
    fn test_resolve_known_skin_type() {
        let p = projector();
        let schedule = p.resolve(SkinType::Normal).unwrap();
        assert!(schedule.day(DayOfWeek::Monday).is_some());
    }

    #[test]
    fn test_resolve_missing_skin_type_is_not_found() {
        let p = projector();
        let err = p.resolve(SkinType::Oily).unwrap_err();
        assert_eq!(err, ScheduleError::SkinTypeNotFound(SkinType::Oily));
    }

    #[test]
    fn test_tags_sun_protection_and_night_treatment() {
        let p = projector();
        let monday = routine(
            &["Cleanser", "Sunscreen"],
            &["Cleanser", "Retinol"],
        );
        let tags = p.tags(&monday);
        assert!(tags.contains(&RoutineTag::RequiresSunProtection));
        assert!(tags.contains(&RoutineTag::NightTreatment));
        assert!(!tags.contains(&RoutineTag::MaskDay));
    }

    #[test]
    fn test_tags_mask_day_either_slot() {
        let p = projector();
        assert!(p
            .tags(&routine(&["Clay Mask"], &[]))
            .contains(&RoutineTag::MaskDay));
        assert!(p
            .tags(&routine(&[], &["Hydrating Mask"]))
            .contains(&RoutineTag::MaskDay));
    }

    #[test]
    fn test_tags_are_recomputed_not_positional() {
        let p = projector();
        // Sunscreen in the evening does not trigger the morning tag.
        let tags = p.tags(&routine(&[], &["Sunscreen"]));
        assert!(!tags.contains(&RoutineTag::RequiresSunProtection));
        // Retinol in the morning does not trigger the evening tag.
        let tags = p.tags(&routine(&["Retinol"], &[]));
        assert!(!tags.contains(&RoutineTag::NightTreatment));
    }

    #[test]
    fn test_color_slots_group_by_class() {
        let p = projector();
        let mut assignment = ColorAssignment::new();
        assignment.assign("AHA/BHA", 0);
        assignment.assign("Vitamin C", 1);
        assignment.assign("Retinol", 2);
        assignment.assign("Moisturizer", 0);

        let slots = p.color_slots(&assignment);
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0], vec!["AHA/BHA", "Moisturizer"]);
        assert_eq!(slots[1], vec!["Vitamin C"]);
        assert_eq!(slots[2], vec!["Retinol"]);
    }

    #[test]
    fn test_save_snapshot() {
        let p = projector();
        let saved = p.save(SkinType::Normal, "2025-06-01T08:00:00Z").unwrap();
        assert_eq!(saved.skin_type, SkinType::Normal);
        assert_eq!(saved.saved_at, "2025-06-01T08:00:00Z");
        assert_eq!(&saved.schedule, p.resolve(SkinType::Normal).unwrap());

        assert!(p.save(SkinType::Dry, "now").is_err());
    }

    #[test]
    fn test_export_text_format() {
        let p = projector();
        let text = p.export_text(SkinType::Normal).unwrap();

        assert!(text.starts_with("SKINCARE SCHEDULE - NORMAL SKIN\n"));
        assert!(text.contains(&"=".repeat(50)));
        assert!(text.contains("MONDAY\n"));
        assert!(text.contains(&"-".repeat(20)));
        assert!(text.contains("Morning: Cleanser, Vitamin C, Sunscreen\n"));
        assert!(text.contains("Evening: Cleanser, Retinol, Moisturizer\n"));
        // Days come out in week order.
        assert!(text.find("MONDAY").unwrap() < text.find("TUESDAY").unwrap());
        assert!(text.contains("Notes:"));
    }

    #[test]
    fn test_export_missing_skin_type() {
        let p = projector();
        assert!(matches!(
            p.export_text(SkinType::Sensitive),
            Err(ScheduleError::SkinTypeNotFound(SkinType::Sensitive))
        ));
    }

    #[test]
    fn test_validate_references() {
        let p = projector();
        let graph = GraphBuilder::new()
            .with_products(
                [
                    "Cleanser",
                    "Vitamin C",
                    "Sunscreen",
                    "Retinol",
                    "Moisturizer",
                    "Clay Mask",
                ]
                .iter()
                .map(|n| Product::new(*n)),
            )
            .build()
            .unwrap();
        assert!(p.validate_references(SkinType::Normal, &graph).is_ok());

        let smaller = GraphBuilder::new()
            .with_product(Product::new("Cleanser"))
            .build()
            .unwrap();
        let err = p
            .validate_references(SkinType::Normal, &smaller)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::UnknownProduct { .. }));
    }
}
