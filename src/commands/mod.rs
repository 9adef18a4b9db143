//! Command implementations for pylaunch CLI

pub mod check;
pub mod clean;
pub mod completions;
pub mod helpers;
pub mod run;
pub mod show_config;
pub mod version;
