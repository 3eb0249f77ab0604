//! Quiz scoring, archetype classification, and result persistence for the
//! kink profile test, plus the service's ambient concerns: configuration,
//! telemetry, web-vitals bookkeeping, and the static article registry.

pub mod config;
pub mod content;
pub mod error;
pub mod presentation;
pub mod quiz;
pub mod store;
pub mod telemetry;
pub mod vitals;
