//! Reusable view components for the admin panel.

pub mod data_table;
