//! Line format of the record file.
//!
//! Each record is one line: `week <week>, <id>, <name>, <h1>, ..., <hn>`.
//! Fields are joined with `", "` and nothing is quoted, so a name that
//! itself contains `", "` cannot be decoded back; such lines come out as
//! [`CodecError::FieldCount`] instead of being silently misread.

use crate::error::CodecError;
use crate::model::record::WeeklyRecord;
use crate::service::report::MAX_DAILY_HOURS;

pub const FIELD_SEPARATOR: &str = ", ";
const WEEK_PREFIX: &str = "week ";
// week, id, name
const FIXED_FIELDS: usize = 3;

pub fn encode(record: &WeeklyRecord) -> String {
    let mut fields = Vec::with_capacity(FIXED_FIELDS + record.hours.len());
    fields.push(format!("{}{}", WEEK_PREFIX, record.week));
    fields.push(record.id.to_string());
    fields.push(record.name.clone());
    fields.extend(record.hours.iter().map(|h| h.to_string()));
    fields.join(FIELD_SEPARATOR)
}

/// Parses one stored line.
///
/// `expected_days` pins the number of hour fields; with `None` any count of
/// at least one is accepted, since the business-day list may have changed
/// between writes.
pub fn decode(line: &str, expected_days: Option<usize>) -> Result<WeeklyRecord, CodecError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();

    match expected_days {
        Some(days) if fields.len() != FIXED_FIELDS + days => {
            return Err(CodecError::FieldCount {
                expected: FIXED_FIELDS + days,
                actual: fields.len(),
            });
        }
        None if fields.len() <= FIXED_FIELDS => {
            return Err(CodecError::FieldCount {
                expected: FIXED_FIELDS + 1,
                actual: fields.len(),
            });
        }
        _ => {}
    }

    let week_str = fields[0]
        .strip_prefix(WEEK_PREFIX)
        .ok_or_else(|| CodecError::MissingWeek(fields[0].to_string()))?;
    let week = week_str
        .parse::<i32>()
        .map_err(|_| CodecError::InvalidNumber {
            field: "week",
            value: week_str.to_string(),
        })?;
    let id = fields[1]
        .parse::<u32>()
        .map_err(|_| CodecError::InvalidNumber {
            field: "id",
            value: fields[1].to_string(),
        })?;
    let name = fields[2].to_string();

    let hours = fields[FIXED_FIELDS..]
        .iter()
        .map(|raw| {
            let value = raw.parse::<u32>().map_err(|_| CodecError::InvalidNumber {
                field: "hours",
                value: raw.to_string(),
            })?;
            if value > u32::from(MAX_DAILY_HOURS) {
                return Err(CodecError::HourOutOfRange(value));
            }
            Ok(value as u8)
        })
        .collect::<Result<Vec<u8>, CodecError>>()?;

    Ok(WeeklyRecord {
        week,
        id,
        name,
        hours,
    })
}
