//! Data loading and static tables
//!
//! This module holds the stat groupings and category sets property
//! derivation is driven by, loadable from external RON files.

pub mod loader;
pub mod tables;

pub use loader::{TableLoader, DataError, export_default_tables, user_tables_path, TABLES_FILE};
pub use tables::{PropertyTables, PropertyTablesDef, default_property_tables, DEFAULT_TABLES};
