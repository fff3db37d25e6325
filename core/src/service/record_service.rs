use tracing::{info, warn};

use crate::codec;
use crate::error::{CodecError, StoreError};
use crate::model::employee::Employee;
use crate::model::record::WeeklyRecord;
use crate::repository::RecordRepository;

/// Stored lines split into the ones that decode and the ones that do not.
#[derive(Debug, Default)]
pub struct DecodedRecords {
    pub records: Vec<WeeklyRecord>,
    pub corrupt: Vec<(String, CodecError)>,
}

pub struct RecordService<R: RecordRepository> {
    repo: R,
}

impl<R: RecordRepository> RecordService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Encodes one batch under `week` and puts it ahead of the stored
    /// records. Returns how many lines were written.
    pub fn write_records(
        &self,
        employees: &[Employee],
        week: i32,
        day_labels: &[String],
    ) -> Result<usize, StoreError> {
        let lines = employees
            .iter()
            .map(|emp| {
                if emp.hours_worked().len() != day_labels.len() {
                    return Err(StoreError::DayCountMismatch {
                        id: emp.id(),
                        expected: day_labels.len(),
                        actual: emp.hours_worked().len(),
                    });
                }
                Ok(codec::encode(&WeeklyRecord::from_employee(week, emp)))
            })
            .collect::<Result<Vec<String>, StoreError>>()?;

        self.repo.prepend(&lines)?;
        info!(week, count = lines.len(), "weekly report saved");
        Ok(lines.len())
    }

    /// Raw lines, newest first. `limit == 0` means all of them.
    pub fn fetch(&self, limit: usize) -> Result<Vec<String>, StoreError> {
        self.repo.fetch(limit)
    }

    pub fn fetch_decoded(
        &self,
        limit: usize,
        expected_days: Option<usize>,
    ) -> Result<DecodedRecords, StoreError> {
        let mut decoded = DecodedRecords::default();
        for line in self.repo.fetch(limit)? {
            match codec::decode(&line, expected_days) {
                Ok(record) => decoded.records.push(record),
                Err(e) => {
                    warn!(error = %e, line = %line, "skipping corrupt record line");
                    decoded.corrupt.push((line, e));
                }
            }
        }
        Ok(decoded)
    }
}
