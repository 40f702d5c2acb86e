pub mod entry;

pub use entry::LedgerRow;
