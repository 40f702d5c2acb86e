pub mod add;
pub mod config;
pub mod projects;
pub mod totals;
