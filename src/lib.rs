//! # Salon Timetable Backend
//!
//! Appointment timetable grid engine for a multi-tenant salon system.
//!
//! This crate turns one salon's raw day data (business hours, staff
//! appointments, slot settings) into a fully-resolved timetable grid:
//! time rows by staff columns, with each appointment placed at an anchor
//! row with a vertical span. The backend exposes a REST API via Axum for
//! the calendar frontend.
//!
//! ## Features
//!
//! - **Business-hours resolution**: per-weekday windows with defaults for
//!   missing or closed configuration
//! - **Slot generation**: interval-stepped row labels, including the
//!   pre-opening row for fine-grained intervals
//! - **Placement**: column and anchor-row lookup, ceiling row spans, and
//!   classification of non-renderable appointments
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) shared across layers
//! - [`db`]: Repository pattern, storage models and service layer
//! - [`services`]: The pure grid-engine pipeline
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`routes`]: Route-specific data types
//! - [`models`]: Core value types and seed-file parsing

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
