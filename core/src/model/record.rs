use crate::model::employee::Employee;

/// The persisted unit: one employee's hours for one week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyRecord {
    pub week: i32,
    pub id: u32,
    pub name: String,
    pub hours: Vec<u8>,
}

impl WeeklyRecord {
    pub fn from_employee(week: i32, employee: &Employee) -> Self {
        Self {
            week,
            id: employee.id(),
            name: employee.name().to_string(),
            hours: employee.hours_worked().to_vec(),
        }
    }

    pub fn total_hours(&self) -> u32 {
        crate::service::report::sum(&self.hours)
    }
}
