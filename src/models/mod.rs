//! Conflict-graph domain models.
//!
//! Provides the core data types for representing skincare products, their
//! pairwise ingredient conflicts, the resulting conflict graph, coloring
//! results, and weekly routine schedules.
//!
//! # Domain Mapping
//!
//! | Graph term | Skincare term |
//! |------------|---------------|
//! | Vertex | Product |
//! | Edge | Ingredient conflict |
//! | Color class | Usage time slot |
//! | Proper coloring | Conflict-free routine |

mod coloring;
mod conflict;
mod graph;
mod product;
mod schedule;

pub use coloring::{ColorAssignment, ColoringStep, ColoringTrace};
pub use conflict::{Conflict, Severity};
pub use graph::ConflictGraph;
pub use product::{Product, SkinType, UnknownSkinType};
pub use schedule::{
    DailyRoutine, DayOfWeek, RoutineTag, SavedSchedule, ScheduleTable, WeeklySchedule,
};
