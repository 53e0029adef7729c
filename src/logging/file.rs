use super::{LogError, Logger};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Appends each message as a line to a file.
///
/// The file is created on first write and opened per message, so external
/// rotation of the file is picked up.
#[derive(Debug, Clone)]
pub struct FileLogger {
    log_file_path: PathBuf,
}

impl FileLogger {
    pub fn new(log_file_path: impl Into<PathBuf>) -> Self {
        Self {
            log_file_path: log_file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.log_file_path
    }

    fn io_error(&self, source: std::io::Error) -> LogError {
        LogError::Io {
            path: self.log_file_path.clone(),
            source,
        }
    }
}

impl Logger for FileLogger {
    fn log(&self, message: &str) -> Result<(), LogError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file_path)
            .map_err(|e| self.io_error(e))?;
        writeln!(file, "{message}").map_err(|e| self.io_error(e))?;
        debug!(path = %self.log_file_path.display(), "Appended log line");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_logger_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let logger = FileLogger::new(&path);
        assert_eq!(logger.path(), path.as_path());

        logger.log("first").unwrap();
        logger.log("second").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_file_logger_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("app.log");
        let logger = FileLogger::new(&path);

        let err = logger.log("lost").unwrap_err();
        let LogError::Io { path: failed, .. } = &err;
        assert_eq!(failed, &path);
        assert!(err.to_string().contains("app.log"));
    }
}
