//! Turn an employee directory into probable corporate usernames.
//!
//! Raw display names are cleaned ([`names::normalize`]), split into name
//! parts ([`names::split`]) and expanded into username guesses
//! ([`names::mutate`]). [`segments::plan`] divides one company search into
//! slices that each stay under the directory's result cap, and
//! [`harvest::Harvester`] drives any [`harvest::DirectorySource`] over such a
//! plan.

pub mod config;
pub mod error;
pub mod harvest;
pub mod names;
pub mod segments;
pub mod telemetry;
