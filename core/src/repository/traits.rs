use crate::error::StoreError;

/// Storage for encoded weekly-record lines, newest first.
pub trait RecordRepository {
    /// Returns the first `limit` lines in stored order, or every line when
    /// `limit` is 0. Fewer lines than asked for is not an error.
    fn fetch(&self, limit: usize) -> Result<Vec<String>, StoreError>;

    /// Places `lines` ahead of everything already stored, keeping their order.
    fn prepend(&self, lines: &[String]) -> Result<(), StoreError>;
}
