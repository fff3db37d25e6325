use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::repository::traits::RecordRepository;

pub const DEFAULT_REPORT_PATH: &str = "reports/master_employee_wfh_report.csv";

/// Flat text file holding one encoded record per line.
///
/// Every write rewrites the whole file, which is fine for the small files
/// an interactive tracker produces. Nothing locks the file: another process
/// writing it between our read and our rename loses its changes.
///
/// The rewrite lands as a new file renamed over the old one. Permissions are
/// carried over, but a symlink at the record path is replaced by a regular
/// file rather than followed.
///
/// Stored bytes are never reinterpreted: prior content is carried forward
/// byte for byte, and lines that are not valid UTF-8 are fetched lossily.
#[derive(Clone, Debug)]
pub struct FileRecordRepository {
    file_path: PathBuf,
}

impl FileRecordRepository {
    /// Creates the parent directory if needed. The file itself is left
    /// alone until the first write.
    pub fn new(file_path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let file_path = file_path.into();
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }
        Ok(Self { file_path })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Whole prior content, or `None` when the file does not exist yet.
    fn read_existing(&self) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(&self.file_path, e)),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .file_path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("records"));
        name.push(".tmp");
        self.file_path.with_file_name(name)
    }

    fn write_content(&self, content: &[u8]) -> Result<(), StoreError> {
        let temp_path = self.temp_path();
        let permissions = fs::metadata(&self.file_path).ok().map(|m| m.permissions());

        let written = File::create(&temp_path).and_then(|file| {
            if let Some(permissions) = permissions {
                file.set_permissions(permissions)?;
            }
            let mut writer = BufWriter::new(file);
            writer.write_all(content)?;
            writer.flush()?;
            writer.get_ref().sync_all()
        });
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(StoreError::io(&temp_path, e));
        }

        fs::rename(&temp_path, &self.file_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::io(&self.file_path, e)
        })
    }
}

impl RecordRepository for FileRecordRepository {
    fn fetch(&self, limit: usize) -> Result<Vec<String>, StoreError> {
        let file = match File::open(&self.file_path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.file_path.clone()));
            }
            Err(e) => return Err(StoreError::io(&self.file_path, e)),
        };

        let take = if limit == 0 { usize::MAX } else { limit };
        let lines = BufReader::new(file)
            .split(b'\n')
            .take(take)
            .map(|line| {
                line.map(|mut bytes| {
                    if bytes.last() == Some(&b'\r') {
                        bytes.pop();
                    }
                    String::from_utf8_lossy(&bytes).into_owned()
                })
            })
            .collect::<io::Result<Vec<String>>>()
            .map_err(|e| StoreError::io(&self.file_path, e))?;

        debug!(path = %self.file_path.display(), limit, fetched = lines.len(), "fetched records");
        Ok(lines)
    }

    fn prepend(&self, lines: &[String]) -> Result<(), StoreError> {
        // The old content must be fully in memory before anything is written.
        let existing = self.read_existing()?;
        if existing.is_none() {
            debug!(path = %self.file_path.display(), "no record file yet, starting empty");
        }
        let existing = existing.unwrap_or_default();

        let new_len: usize = lines.iter().map(|l| l.len() + 1).sum();
        let mut content = Vec::with_capacity(new_len + existing.len() + 1);
        for line in lines {
            content.extend_from_slice(line.as_bytes());
            content.push(b'\n');
        }
        content.extend_from_slice(&existing);
        if existing.last().is_some_and(|&b| b != b'\n') {
            warn!(path = %self.file_path.display(), "record file had no trailing newline");
            content.push(b'\n');
        }

        self.write_content(&content)?;
        debug!(path = %self.file_path.display(), added = lines.len(), "prepended records");
        Ok(())
    }
}
