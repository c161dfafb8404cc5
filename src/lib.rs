//! Temperature dashboard core - the state machine behind a sensor chart.
//!
//! This library exposes the layered modules for embedding and testing.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
