use crate::service::report;

/// One person's hours for a single submission round.
///
/// Built once per employee per batch and never mutated afterwards; the
/// batch is discarded after it has been written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: u32,
    name: String,
    hours_worked: Vec<u8>,
}

impl Employee {
    pub fn new(id: u32, name: impl Into<String>, hours_worked: Vec<u8>) -> Self {
        Self {
            id,
            name: name.into(),
            hours_worked,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hours_worked(&self) -> &[u8] {
        &self.hours_worked
    }

    pub fn total_hours(&self) -> u32 {
        report::sum(&self.hours_worked)
    }
}
