use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::warn;
use wfh_core::input::{parse_count, parse_int, parse_week};
use wfh_core::service::report;
use wfh_core::{Config, EmployeeReport, InputError, Prompter, RecordRepository, RecordService, StoreError};

use crate::view;

#[derive(Debug, Clone, Copy, PartialEq)]
enum MenuOption {
    EnterReport,
    Fetch,
    Exit,
}

impl MenuOption {
    fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuOption::EnterReport),
            2 => Some(MenuOption::Fetch),
            3 => Some(MenuOption::Exit),
            _ => None,
        }
    }
}

/// Interactive loop. Returns when the user picks Exit or input ends.
pub fn run<R, W, S>(prompter: &mut Prompter<R, W>, service: &RecordService<S>, config: &Config) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: RecordRepository,
{
    view::print_menu(prompter.writer())?;

    loop {
        let answer = match prompter.ask("Enter your option: ") {
            Ok(answer) => Some(answer),
            Err(InputError::Eof) => break,
            Err(e) if e.is_recoverable() => None,
            Err(e) => return Err(e.into()),
        };
        writeln!(prompter.writer())?;

        let option = answer
            .as_deref()
            .and_then(|a| parse_int(a).ok())
            .and_then(MenuOption::from_number);
        let outcome = match option {
            Some(MenuOption::EnterReport) => enter_weekly_report(prompter, service, config),
            Some(MenuOption::Fetch) => fetch_records(prompter, service),
            Some(MenuOption::Exit) => {
                writeln!(prompter.writer(), "Thank you.")?;
                break;
            }
            None => {
                writeln!(prompter.writer(), "Invalid input. Please try again")?;
                Ok(())
            }
        };

        match outcome {
            Ok(()) => {}
            Err(InputError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

fn enter_weekly_report<R, W, S>(
    prompter: &mut Prompter<R, W>,
    service: &RecordService<S>,
    config: &Config,
) -> Result<(), InputError>
where
    R: BufRead,
    W: Write,
    S: RecordRepository,
{
    writeln!(prompter.writer(), "          * * * Add employee working hours * * *")?;
    writeln!(prompter.writer())?;
    let week = prompter.ask_until("Enter current working week: ", parse_week)?;
    writeln!(prompter.writer())?;

    let mut employees = Vec::new();
    let mut totals = Vec::new();
    for index in 1..=config.roster_size {
        let employee = prompter.read_employee(index, &config.business_days)?;
        let employee_report = EmployeeReport::build(&employee, &config.business_days);
        view::print_employee_report(prompter.writer(), index, week, &employee_report)?;
        totals.push(employee_report.total);
        employees.push(employee);
    }

    view::print_batch_summary(prompter.writer(), "Weekly Employee Report", &report::summarize(&totals))?;

    match service.write_records(&employees, week, &config.business_days) {
        Ok(count) => writeln!(prompter.writer(), "Saved {} records for week {}.", count, week)?,
        Err(e) => {
            warn!(error = %e, "weekly report not saved");
            writeln!(prompter.writer(), "Could not save weekly report: {}", e)?;
        }
    }
    Ok(())
}

fn fetch_records<R, W, S>(prompter: &mut Prompter<R, W>, service: &RecordService<S>) -> Result<(), InputError>
where
    R: BufRead,
    W: Write,
    S: RecordRepository,
{
    let count = prompter.ask_until(
        "Enter number of records to fetch (or 0 to fetch all records): ",
        parse_count,
    )?;

    match service.fetch(count) {
        Ok(lines) => view::print_lines(prompter.writer(), &lines)?,
        Err(StoreError::NotFound(path)) => {
            writeln!(prompter.writer(), "No records found ({} does not exist).", path.display())?
        }
        Err(e) => {
            warn!(error = %e, "fetch failed");
            writeln!(prompter.writer(), "Could not read records: {}", e)?
        }
    }
    Ok(())
}
