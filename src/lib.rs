//! Library entry for Atelier exposing the storefront core for the CLI and integration tests.

pub mod catalog;
pub mod error;
pub mod home;
pub mod i18n;
pub mod locale;
pub mod logic;
pub mod platform;
pub mod settings;
pub mod sources;
pub mod state;
pub mod ui;
pub mod util;

#[cfg(test)]
mod test_utils;
