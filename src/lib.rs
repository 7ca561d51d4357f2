//! Communication Toolkit - Team communication tracking and analytics
//!
//! This crate implements the scoring and aggregation core of a team
//! communication toolkit: tracked messages, decisions, conflicts,
//! feedback, and tasks held in an in-memory workspace store, with pure
//! analysis functions feeding the dashboard, report, and timeline views.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
