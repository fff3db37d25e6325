pub mod file;
pub mod traits;

#[cfg(test)]
mod file_test;

// Re-export
pub use file::FileRecordRepository;
pub use traits::RecordRepository;
