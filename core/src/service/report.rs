use crate::model::employee::Employee;

pub const MAX_DAILY_HOURS: u8 = 24;

// Thresholds
const LOW_WEEKLY_HOURS: u32 = 30;
const HIGH_WEEKLY_HOURS: u32 = 40;
const NEAR_CAPACITY_HOURS: u32 = 37;
const LOW_DAILY_HOURS: u8 = 4;
const HIGH_DAILY_HOURS: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeeklyClass {
    Low,
    Normal,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayClass {
    Insufficient,
    Acceptable,
    Excessive,
}

pub fn sum(hours: &[u8]) -> u32 {
    hours.iter().map(|&h| u32::from(h)).sum()
}

pub fn classify(total: u32) -> WeeklyClass {
    if total < LOW_WEEKLY_HOURS {
        WeeklyClass::Low
    } else if total > HIGH_WEEKLY_HOURS {
        WeeklyClass::High
    } else {
        WeeklyClass::Normal
    }
}

/// 37 to 40 hours inclusive. A sub-bucket of [`WeeklyClass::Normal`] used
/// only for batch counts.
pub fn is_near_capacity(total: u32) -> bool {
    (NEAR_CAPACITY_HOURS..=HIGH_WEEKLY_HOURS).contains(&total)
}

pub fn classify_day(hours: u8) -> DayClass {
    if hours < LOW_DAILY_HOURS {
        DayClass::Insufficient
    } else if hours > HIGH_DAILY_HOURS {
        DayClass::Excessive
    } else {
        DayClass::Acceptable
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub employees: usize,
    pub low: usize,
    pub high: usize,
    pub near_capacity: usize,
}

pub fn summarize(totals: &[u32]) -> BatchSummary {
    let mut summary = BatchSummary {
        employees: totals.len(),
        ..Default::default()
    };
    for &total in totals {
        match classify(total) {
            WeeklyClass::Low => summary.low += 1,
            WeeklyClass::High => summary.high += 1,
            WeeklyClass::Normal => {
                if is_near_capacity(total) {
                    summary.near_capacity += 1;
                }
            }
        }
    }
    summary
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayWarning {
    pub day: String,
    pub hours: u8,
    pub class: DayClass,
}

/// What gets printed under "Summary for Employee N".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeReport {
    pub id: u32,
    pub name: String,
    pub total: u32,
    pub class: WeeklyClass,
    pub warnings: Vec<DayWarning>,
}

impl EmployeeReport {
    pub fn build(employee: &Employee, day_labels: &[String]) -> Self {
        let warnings = employee
            .hours_worked()
            .iter()
            .zip(day_labels)
            .filter_map(|(&hours, day)| match classify_day(hours) {
                DayClass::Acceptable => None,
                class => Some(DayWarning {
                    day: day.clone(),
                    hours,
                    class,
                }),
            })
            .collect();
        let total = employee.total_hours();

        Self {
            id: employee.id(),
            name: employee.name().to_string(),
            total,
            class: classify(total),
            warnings,
        }
    }
}
