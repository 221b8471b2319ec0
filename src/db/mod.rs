//! Storage layer: trait contracts, the in-memory implementation and the
//! service functions the HTTP handlers call.
//!
//! Layered so each concern stays swappable:
//!
//! ```text
//! HTTP handlers
//!      |
//!   services      orchestration, degradation policy, logging
//!      |
//!  repository     trait contracts (SalonRepository, AppointmentRepository)
//!      |
//! repositories    implementations (in-memory LocalRepository)
//! ```

pub mod models;
pub mod repositories;
pub mod repository;
pub mod services;

pub use repositories::LocalRepository;
pub use repository::{
    AppointmentRepository, ErrorContext, FullRepository, RepositoryError, RepositoryResult,
    SalonRepository,
};
pub use services::{build_timetable, health_check, list_salons};
