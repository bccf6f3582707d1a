//! Core data types for Curbside pricing

pub mod booking;
pub mod breakdown;
pub mod rate_schedule;
