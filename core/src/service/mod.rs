pub mod record_service;
pub mod report;
