//! Output and errors files.
//!
//! Both files are named after the run timestamp and live next to the input:
//!
//! - `output_<YYYYMMDD_HHMMSS>.txt`: header, then `<date>,<rate>` rows
//! - `errors_<YYYYMMDD_HHMMSS>.txt`: header, then `<date>,na` rows
//!
//! The errors file is removed at the end of a run that produced no `na` rows.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::domain::{FIELD_SEPARATOR, RateResult};
use crate::error::AppError;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Where a run writes its results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub dir: PathBuf,
    pub output_name: String,
    pub errors_name: String,
}

impl OutputPaths {
    pub fn new(dir: &Path, now: NaiveDateTime) -> Self {
        let ts = now.format(TIMESTAMP_FORMAT);
        Self {
            dir: dir.to_path_buf(),
            output_name: format!("output_{ts}.txt"),
            errors_name: format!("errors_{ts}.txt"),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.dir.join(&self.output_name)
    }

    pub fn errors_path(&self) -> PathBuf {
        self.dir.join(&self.errors_name)
    }
}

/// Where the results ended up once the files are closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub output: PathBuf,
    pub errors: Option<PathBuf>,
}

/// Open handles to both files for the duration of a run.
///
/// Handles are closed on drop, so an early return mid-run still releases
/// them; [`OutputFiles::finish`] is the normal way out.
pub struct OutputFiles {
    paths: OutputPaths,
    output: BufWriter<File>,
    errors: BufWriter<File>,
}

impl OutputFiles {
    /// Create both files and write `header` as their first line.
    pub fn create(paths: OutputPaths, header: &str) -> Result<Self, AppError> {
        let mut output = create_file(&paths.output_path())?;
        let mut errors = create_file(&paths.errors_path())?;

        writeln!(output, "{header}")
            .map_err(|e| AppError::io("Failed to write output header", e))?;
        writeln!(errors, "{header}")
            .map_err(|e| AppError::io("Failed to write errors header", e))?;

        Ok(Self {
            paths,
            output,
            errors,
        })
    }

    /// Append one row: rates go to the output file, `na` rows to the errors file.
    pub fn write_result(&mut self, date: &str, result: RateResult) -> Result<(), AppError> {
        let (sink, label) = match result {
            RateResult::ValidRate(_) => (&mut self.output, "output"),
            RateResult::Unavailable => (&mut self.errors, "errors"),
        };
        writeln!(sink, "{date}{FIELD_SEPARATOR}{result}")
            .map_err(|e| AppError::io(format!("Failed to write {label} row"), e))
    }

    /// Flush and close both files; delete the errors file unless `keep_errors`.
    pub fn finish(self, keep_errors: bool) -> Result<WrittenFiles, AppError> {
        let OutputFiles {
            paths,
            output,
            errors,
        } = self;

        close(output, "output")?;
        close(errors, "errors")?;

        let errors_path = paths.errors_path();
        let errors = if keep_errors {
            Some(errors_path)
        } else {
            fs::remove_file(&errors_path).map_err(|e| {
                AppError::io(
                    format!("Failed to remove errors file '{}'", errors_path.display()),
                    e,
                )
            })?;
            None
        };

        Ok(WrittenFiles {
            output: paths.output_path(),
            errors,
        })
    }
}

fn create_file(path: &Path) -> Result<BufWriter<File>, AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create '{}'", path.display()), e))?;
    Ok(BufWriter::new(file))
}

fn close(writer: BufWriter<File>, label: &str) -> Result<(), AppError> {
    let file = writer
        .into_inner()
        .map_err(|e| AppError::io(format!("Failed to flush {label} file"), e.into_error()))?;
    file.sync_all()
        .map_err(|e| AppError::io(format!("Failed to sync {label} file"), e))
}
