//! Static input dataset.
//!
//! The system runs over a fixed dataset: product records, pairwise
//! conflict records, and hand-authored weekly schedules per skin type.
//! [`Dataset`] carries all three and knows how to assemble the conflict
//! graph; [`Dataset::builtin`] provides the standard ten-product
//! skincare dataset.
//!
//! Schedules are authored data, not derived from the coloring at
//! runtime — the built-in tables are written so that no single time
//! slot ever contains two conflicting products.

use serde::{Deserialize, Serialize};

use crate::builder::GraphBuilder;
use crate::errors::BuildError;
use crate::models::{
    Conflict, ConflictGraph, DailyRoutine, DayOfWeek, Product, ScheduleTable, Severity, SkinType,
    WeeklySchedule,
};
use crate::projector::ScheduleProjector;

/// A complete input dataset: products, conflicts, and schedules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Product records (graph vertices).
    pub products: Vec<Product>,
    /// Conflict records (graph edges).
    pub conflicts: Vec<Conflict>,
    /// Per-skin-type weekly schedules.
    pub schedules: ScheduleTable,
}

impl Dataset {
    /// Product identifiers, in dataset order.
    pub fn vertex_ids(&self) -> Vec<&str> {
        self.products.iter().map(|p| p.name.as_str()).collect()
    }

    /// Conflict endpoint pairs, in dataset order.
    pub fn edge_pairs(&self) -> Vec<(&str, &str)> {
        self.conflicts
            .iter()
            .map(|c| (c.product_a.as_str(), c.product_b.as_str()))
            .collect()
    }

    /// Builds the conflict graph from this dataset.
    pub fn graph(&self) -> Result<ConflictGraph, Vec<BuildError>> {
        GraphBuilder::new()
            .with_products(self.products.iter().cloned())
            .with_conflicts(self.conflicts.iter().cloned())
            .build()
    }

    /// Projector over this dataset's schedule table.
    pub fn projector(&self) -> ScheduleProjector {
        ScheduleProjector::new(self.schedules.clone())
    }

    /// The standard ten-product skincare dataset.
    pub fn builtin() -> Self {
        Self {
            products: builtin_products(),
            conflicts: builtin_conflicts(),
            schedules: builtin_schedules(),
        }
    }
}

fn builtin_products() -> Vec<Product> {
    vec![
        Product::new("Cleanser")
            .with_ingredient("Gentle surfactants")
            .with_function("Cleansing")
            .with_frequency("2x daily")
            .for_all_skin_types(),
        Product::new("Toner")
            .with_ingredient("Witch hazel")
            .with_ingredient("Panthenol")
            .with_function("pH balancing")
            .with_frequency("2x daily")
            .for_all_skin_types(),
        Product::new("Vitamin C")
            .with_ingredient("L-Ascorbic Acid")
            .with_function("Brightening, antioxidant")
            .with_frequency("1x daily (morning)")
            .with_skin_type(SkinType::Normal)
            .with_skin_type(SkinType::Dry)
            .with_skin_type(SkinType::Combination),
        Product::new("Niacinamide")
            .with_ingredient("Niacinamide 10%")
            .with_ingredient("Zinc")
            .with_function("Oil control, pore care")
            .with_frequency("1-2x daily")
            .with_skin_type(SkinType::Normal)
            .with_skin_type(SkinType::Oily)
            .with_skin_type(SkinType::Combination),
        Product::new("Retinol")
            .with_ingredient("Retinol 0.5%")
            .with_function("Anti-aging, cell turnover")
            .with_frequency("2-3x weekly (evening)")
            .with_skin_type(SkinType::Normal)
            .with_skin_type(SkinType::Dry)
            .with_skin_type(SkinType::Combination),
        Product::new("AHA/BHA")
            .with_ingredient("Glycolic Acid")
            .with_ingredient("Salicylic Acid")
            .with_function("Chemical exfoliation")
            .with_frequency("1-2x weekly")
            .with_skin_type(SkinType::Normal)
            .with_skin_type(SkinType::Oily)
            .with_skin_type(SkinType::Combination),
        Product::new("Moisturizer")
            .with_ingredient("Ceramides")
            .with_ingredient("Hyaluronic Acid")
            .with_function("Hydration, barrier repair")
            .with_frequency("2x daily")
            .for_all_skin_types(),
        Product::new("Sunscreen")
            .with_ingredient("Zinc Oxide SPF 50")
            .with_function("UV protection")
            .with_frequency("Every morning")
            .for_all_skin_types(),
        Product::new("Clay Mask")
            .with_ingredient("Kaolin")
            .with_ingredient("Bentonite")
            .with_function("Deep cleansing")
            .with_frequency("1x weekly")
            .with_skin_type(SkinType::Oily)
            .with_skin_type(SkinType::Combination),
        Product::new("Hydrating Mask")
            .with_ingredient("Hyaluronic Acid")
            .with_ingredient("Aloe vera")
            .with_function("Intensive hydration")
            .with_frequency("1-2x weekly")
            .with_skin_type(SkinType::Normal)
            .with_skin_type(SkinType::Dry)
            .with_skin_type(SkinType::Sensitive),
    ]
}

fn builtin_conflicts() -> Vec<Conflict> {
    vec![
        Conflict::new("Vitamin C", "Retinol", Severity::High),
        Conflict::new("Vitamin C", "AHA/BHA", Severity::High),
        Conflict::new("Retinol", "AHA/BHA", Severity::High),
        Conflict::new("Vitamin C", "Niacinamide", Severity::Medium),
        Conflict::new("Retinol", "Clay Mask", Severity::Medium),
        Conflict::new("AHA/BHA", "Clay Mask", Severity::Medium),
        Conflict::new("Niacinamide", "AHA/BHA", Severity::Low),
        Conflict::new("Clay Mask", "Hydrating Mask", Severity::Low),
    ]
}

fn routine(morning: &[&str], evening: &[&str]) -> DailyRoutine {
    DailyRoutine::new(
        morning.iter().map(|s| s.to_string()).collect(),
        evening.iter().map(|s| s.to_string()).collect(),
    )
}

fn week(days: [(&[&str], &[&str]); 7]) -> WeeklySchedule {
    DayOfWeek::ALL
        .iter()
        .zip(days)
        .fold(WeeklySchedule::new(), |schedule, (&day, (m, e))| {
            schedule.with_day(day, routine(m, e))
        })
}

fn builtin_schedules() -> ScheduleTable {
    let normal = week([
        (
            &["Cleanser", "Toner", "Vitamin C", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Toner", "Moisturizer"],
        ),
        (
            &["Cleanser", "Toner", "Niacinamide", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Retinol", "Moisturizer"],
        ),
        (
            &["Cleanser", "Toner", "Vitamin C", "Moisturizer", "Sunscreen"],
            &["Cleanser", "AHA/BHA", "Moisturizer"],
        ),
        (
            &["Cleanser", "Toner", "Niacinamide", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Toner", "Moisturizer"],
        ),
        (
            &["Cleanser", "Toner", "Vitamin C", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Retinol", "Moisturizer"],
        ),
        (
            &["Cleanser", "Toner", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Hydrating Mask", "Moisturizer"],
        ),
        (
            &["Cleanser", "Toner", "Vitamin C", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Toner", "Moisturizer"],
        ),
    ]);

    let oily = week([
        (
            &["Cleanser", "Toner", "Niacinamide", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Toner", "Moisturizer"],
        ),
        (
            &["Cleanser", "Niacinamide", "Moisturizer", "Sunscreen"],
            &["Cleanser", "AHA/BHA", "Moisturizer"],
        ),
        (
            &["Cleanser", "Toner", "Niacinamide", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Toner", "Moisturizer"],
        ),
        (
            &["Cleanser", "Niacinamide", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Clay Mask", "Moisturizer"],
        ),
        (
            &["Cleanser", "Toner", "Niacinamide", "Moisturizer", "Sunscreen"],
            &["Cleanser", "AHA/BHA", "Moisturizer"],
        ),
        (
            &["Cleanser", "Toner", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Clay Mask", "Moisturizer"],
        ),
        (
            &["Cleanser", "Niacinamide", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Toner", "Moisturizer"],
        ),
    ]);

    let dry = week([
        (
            &["Cleanser", "Toner", "Vitamin C", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Hydrating Mask", "Moisturizer"],
        ),
        (
            &["Cleanser", "Toner", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Retinol", "Moisturizer"],
        ),
        (
            &["Cleanser", "Toner", "Vitamin C", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Toner", "Moisturizer"],
        ),
        (
            &["Cleanser", "Toner", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Hydrating Mask", "Moisturizer"],
        ),
        (
            &["Cleanser", "Toner", "Vitamin C", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Retinol", "Moisturizer"],
        ),
        (
            &["Cleanser", "Toner", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Hydrating Mask", "Moisturizer"],
        ),
        (
            &["Cleanser", "Toner", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Toner", "Moisturizer"],
        ),
    ]);

    let sensitive = week([
        (
            &["Cleanser", "Toner", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Toner", "Moisturizer"],
        ),
        (
            &["Cleanser", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Moisturizer"],
        ),
        (
            &["Cleanser", "Toner", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Hydrating Mask", "Moisturizer"],
        ),
        (
            &["Cleanser", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Toner", "Moisturizer"],
        ),
        (
            &["Cleanser", "Toner", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Moisturizer"],
        ),
        (
            &["Cleanser", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Hydrating Mask", "Moisturizer"],
        ),
        (
            &["Cleanser", "Toner", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Toner", "Moisturizer"],
        ),
    ]);

    let combination = week([
        (
            &["Cleanser", "Toner", "Vitamin C", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Niacinamide", "Moisturizer"],
        ),
        (
            &["Cleanser", "Niacinamide", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Retinol", "Moisturizer"],
        ),
        (
            &["Cleanser", "Toner", "Vitamin C", "Moisturizer", "Sunscreen"],
            &["Cleanser", "AHA/BHA", "Moisturizer"],
        ),
        (
            &["Cleanser", "Toner", "Niacinamide", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Clay Mask", "Moisturizer"],
        ),
        (
            &["Cleanser", "Toner", "Vitamin C", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Retinol", "Moisturizer"],
        ),
        (
            &["Cleanser", "Toner", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Hydrating Mask", "Moisturizer"],
        ),
        (
            &["Cleanser", "Niacinamide", "Moisturizer", "Sunscreen"],
            &["Cleanser", "Toner", "Moisturizer"],
        ),
    ]);

    ScheduleTable::new()
        .with_schedule(SkinType::Normal, normal)
        .with_schedule(SkinType::Oily, oily)
        .with_schedule(SkinType::Dry, dry)
        .with_schedule(SkinType::Sensitive, sensitive)
        .with_schedule(SkinType::Combination, combination)
}
