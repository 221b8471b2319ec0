//! The timetable grid engine.
//!
//! A pure, synchronous pipeline over in-memory inputs for one
//! (salon, date) pair: business-hours resolution, time-slot generation,
//! staff column resolution, appointment placement, grid assembly. No I/O
//! and no shared mutable state; identical inputs yield byte-identical
//! grids.

pub mod business_hours;
pub mod columns;
pub mod grid;
pub mod placer;
pub mod slots;

pub use business_hours::resolve as resolve_business_hours;
pub use columns::resolve_columns;
pub use grid::{assemble, grid_fingerprint, GridOutcome};
pub use placer::{place_appointments, PlacementReport};
pub use slots::generate_slots;
