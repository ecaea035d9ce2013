pub mod history;

// Re-export
pub use history::{HistoryRepository, MemoryHistoryRepository};
