use std::io::{self, Write};

use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use wfh_core::{BatchSummary, DayClass, DecodedRecords, EmployeeReport, WeeklyClass};

const RULE: &str = "**************************************";
const WIDE_RULE: &str = "****************************************************************";

pub fn print_menu<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "Work From Home Tracker")?;
    writeln!(w)?;
    writeln!(w, "[1] Enter weekly report")?;
    writeln!(w, "[2] Fetch records from weekly report")?;
    writeln!(w, "[3] Exit")
}

pub fn print_employee_report<W: Write>(
    w: &mut W,
    index: usize,
    week: i32,
    report: &EmployeeReport,
) -> io::Result<()> {
    writeln!(w, "{}", RULE)?;
    writeln!(w, "Summary for Employee {}", index)?;
    for warning in &report.warnings {
        match warning.class {
            DayClass::Insufficient => writeln!(w, "Insufficient hours worked on {}", warning.day)?,
            DayClass::Excessive => writeln!(w, "Too many hours worked on {}", warning.day)?,
            DayClass::Acceptable => {}
        }
    }
    match report.class {
        WeeklyClass::Low => writeln!(w, "You didn't do enough work this week")?,
        WeeklyClass::High => writeln!(w, "You are working too hard!!")?,
        WeeklyClass::Normal => {}
    }
    writeln!(w, "Total hours worked for week {}: {} hours", week, report.total)?;
    writeln!(w)
}

pub fn print_batch_summary<W: Write>(w: &mut W, title: &str, summary: &BatchSummary) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", WIDE_RULE)?;
    writeln!(w)?;
    writeln!(w, "          * * * {} * * *", title)?;
    writeln!(w, "Employees in report: {}", summary.employees)?;
    writeln!(w, "Number of employees who worked less than 30 hours: {}", summary.low)?;
    writeln!(w, "Number of employees who worked more than 40 hours: {}", summary.high)?;
    writeln!(w, "Number of employees who worked between 37-40 hours: {}", summary.near_capacity)?;
    writeln!(w)
}

pub fn print_lines<W: Write>(w: &mut W, lines: &[String]) -> io::Result<()> {
    if lines.is_empty() {
        return writeln!(w, "No records found.");
    }
    writeln!(w, "Fetched records: ")?;
    for line in lines {
        writeln!(w, "{}", line)?;
    }
    Ok(())
}

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Week")]
    week: i32,
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Hours")]
    hours: String,
    #[tabled(rename = "Total")]
    total: u32,
    #[tabled(rename = "Status")]
    status: String,
}

pub fn records_table(decoded: &DecodedRecords) -> String {
    let rows: Vec<RecordRow> = decoded
        .records
        .iter()
        .map(|rec| {
            let total = rec.total_hours();
            RecordRow {
                week: rec.week,
                id: rec.id,
                name: rec.name.clone(),
                hours: rec
                    .hours
                    .iter()
                    .map(|h| h.to_string())
                    .collect::<Vec<_>>()
                    .join(" "),
                total,
                status: format!("{:?}", wfh_core::service::report::classify(total)),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table.to_string()
}
