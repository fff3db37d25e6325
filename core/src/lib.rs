pub mod codec;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;

pub use config::Config;
pub use error::{CodecError, ConfigError, InputError, StoreError};
pub use input::Prompter;
pub use model::employee::Employee;
pub use model::record::WeeklyRecord;
pub use repository::{FileRecordRepository, RecordRepository};
pub use service::record_service::{DecodedRecords, RecordService};
pub use service::report::{BatchSummary, DayClass, EmployeeReport, WeeklyClass};
