use std::io::{BufRead, Write};

use crate::error::InputError;
use crate::model::employee::Employee;
use crate::service::report::MAX_DAILY_HOURS;

pub fn parse_int(input: &str) -> Result<i64, InputError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| InputError::Parse(trimmed.to_string()))
}

pub fn parse_in_range(input: &str, min: i64, max: i64) -> Result<i64, InputError> {
    let value = parse_int(input)?;
    if value < min || value > max {
        return Err(InputError::Range { value, min, max });
    }
    Ok(value)
}

pub fn parse_hours(input: &str) -> Result<u8, InputError> {
    parse_in_range(input, 0, i64::from(MAX_DAILY_HOURS)).map(|v| v as u8)
}

pub fn parse_id(input: &str) -> Result<u32, InputError> {
    parse_in_range(input, 0, i64::from(u32::MAX)).map(|v| v as u32)
}

pub fn parse_week(input: &str) -> Result<i32, InputError> {
    parse_in_range(input, i64::from(i32::MIN), i64::from(i32::MAX)).map(|v| v as i32)
}

pub fn parse_count(input: &str) -> Result<usize, InputError> {
    parse_in_range(input, 0, i64::from(u32::MAX)).map(|v| v as usize)
}

/// Line-oriented question/answer over any reader and writer.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Prints `prompt` and returns the answer without its line terminator.
    /// An answer that is not valid UTF-8 is an [`InputError::Encoding`].
    pub fn ask(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            return Err(InputError::Eof);
        }
        while matches!(raw.last(), Some(b'\n' | b'\r')) {
            raw.pop();
        }
        String::from_utf8(raw).map_err(|e| {
            InputError::Encoding(String::from_utf8_lossy(e.as_bytes()).into_owned())
        })
    }

    /// Asks until `validate` accepts the answer. Parse and range failures
    /// are reported and asked again with no retry limit; end of input and
    /// I/O errors are returned.
    pub fn ask_until<T, F>(&mut self, prompt: &str, mut validate: F) -> Result<T, InputError>
    where
        F: FnMut(&str) -> Result<T, InputError>,
    {
        loop {
            match self.ask(prompt).and_then(|answer| validate(&answer)) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_recoverable() => {
                    writeln!(self.writer, "Invalid input ({}). Please try again", e)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn read_employee(&mut self, index: usize, day_labels: &[String]) -> Result<Employee, InputError> {
        writeln!(self.writer, "[Employee {}]", index)?;
        let id = self.ask_until(&format!("Enter employee {} id: ", index), parse_id)?;
        let name = self.ask_until(&format!("Enter employee {} name: ", index), |answer| {
            Ok(answer.trim().to_string())
        })?;

        let hours = day_labels
            .iter()
            .map(|day| self.ask_until(&format!("Enter hours worked for {}: ", day), parse_hours))
            .collect::<Result<Vec<u8>, InputError>>()?;

        Ok(Employee::new(id, name, hours))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int(" 42 ").unwrap(), 42);
        assert_eq!(parse_int("-7").unwrap(), -7);
        assert!(matches!(parse_int("4.5"), Err(InputError::Parse(_))));
        assert!(matches!(parse_int(""), Err(InputError::Parse(_))));
    }

    #[test]
    fn test_parse_hours_range() {
        assert_eq!(parse_hours("0").unwrap(), 0);
        assert_eq!(parse_hours("24").unwrap(), 24);
        assert!(matches!(parse_hours("25"), Err(InputError::Range { value: 25, .. })));
        assert!(matches!(parse_hours("-1"), Err(InputError::Range { value: -1, .. })));
        assert!(matches!(parse_hours("eight"), Err(InputError::Parse(_))));
    }

    #[test]
    fn test_parse_id_rejects_negative() {
        assert_eq!(parse_id("17").unwrap(), 17);
        assert!(parse_id("-1").is_err());
    }

    #[test]
    fn test_ask_until_reprompts() {
        let mut p = prompter("abc\n99\n8\n");
        let value = p.ask_until("Hours: ", parse_hours).unwrap();
        assert_eq!(value, 8);

        let out = String::from_utf8(p.writer().clone()).unwrap();
        assert_eq!(out.matches("Hours: ").count(), 3);
        assert_eq!(out.matches("Please try again").count(), 2);
    }

    #[test]
    fn test_ask_until_stops_at_eof() {
        let mut p = prompter("nope\n");
        assert!(matches!(p.ask_until("Id: ", parse_id), Err(InputError::Eof)));
    }

    #[test]
    fn test_ask_until_reprompts_on_invalid_utf8() {
        let mut p = Prompter::new(Cursor::new(b"\xff\n7\n".to_vec()), Vec::new());
        assert_eq!(p.ask_until("Hours: ", parse_hours).unwrap(), 7);

        let out = String::from_utf8(p.writer().clone()).unwrap();
        assert_eq!(out.matches("Please try again").count(), 1);
    }

    #[test]
    fn test_ask_reports_invalid_utf8_as_encoding_error() {
        let mut p = Prompter::new(Cursor::new(b"ab\xe9\r\n".to_vec()), Vec::new());
        let err = p.ask("Name: ").unwrap_err();
        assert!(matches!(err, InputError::Encoding(ref s) if s == "ab\u{FFFD}"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_read_employee_reprompts_invalid_name() {
        let days = vec!["Mon".to_string()];
        let mut p = Prompter::new(Cursor::new(b"4\nJos\xe9\nJose\n8\n".to_vec()), Vec::new());
        let emp = p.read_employee(1, &days).unwrap();
        assert_eq!(emp, Employee::new(4, "Jose", vec![8]));
    }

    #[test]
    fn test_read_employee() {
        let days = vec!["Mon".to_string(), "Tue".to_string()];
        let mut p = prompter("x\n12\n Dana Scully \n8\n30\n9\n");

        let emp = p.read_employee(1, &days).unwrap();
        assert_eq!(emp, Employee::new(12, "Dana Scully", vec![8, 9]));

        let out = String::from_utf8(p.writer().clone()).unwrap();
        assert!(out.contains("[Employee 1]"));
        assert!(out.contains("Enter hours worked for Tue: "));
    }
}
