//! Shared types and pure logic for the back-office frontend.
//!
//! Everything here is platform independent so it can be unit-tested natively;
//! the `frontend` crate only adds rendering and browser glue on top.

pub mod dashboards;
pub mod usecases;
