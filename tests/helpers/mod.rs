// Test helpers shared by the unit and integration suites.
//
// Included per test target with `#[path = "../helpers/mod.rs"] mod helpers;`.

#![allow(dead_code)]

#[macro_use]
pub mod test_app;

pub use test_app::*;
pub use test_data::*;
