pub mod add;
pub mod duration;
pub mod entry;
pub mod ledger;
pub mod project;
pub mod totals;
