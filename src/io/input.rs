//! Input file loading.
//!
//! The input is a plain text file: the currency pair header on the first
//! line, one date per following line. Loading only checks the file-level
//! preconditions and splits lines; header and date validation belong to the
//! pipeline.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::domain::DateEntry;
use crate::error::AppError;

/// Input file contents, split into header and date lines.
#[derive(Debug, Clone)]
pub struct InputFile {
    /// Path as given by the caller.
    pub path: PathBuf,
    /// Absolute directory containing the file (symlinks resolved).
    pub dir: PathBuf,
    pub header: String,
    pub dates: Vec<DateEntry>,
}

/// Check that `path` is a non-empty regular file and split it into lines.
pub fn read_input(path: &Path) -> Result<InputFile, AppError> {
    let not_found = || AppError::InputNotFound {
        path: path.to_path_buf(),
    };

    let meta = fs::metadata(path).map_err(|_| not_found())?;
    if !meta.is_file() {
        return Err(not_found());
    }
    if meta.len() == 0 {
        return Err(AppError::InputEmpty {
            path: path.to_path_buf(),
        });
    }

    let mut file = File::open(path).map_err(|_| not_found())?;
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| AppError::io(format!("Failed to read input file '{}'", path.display()), e))?;

    let dir = fs::canonicalize(path)
        .map_err(|e| AppError::io(format!("Failed to resolve '{}'", path.display()), e))?
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("/"));

    let (header, dates) = split_lines(&content);

    Ok(InputFile {
        path: path.to_path_buf(),
        dir,
        header,
        dates,
    })
}

/// First line is the header, the rest are dates in file order.
///
/// Trailing whitespace (including `\r` from CRLF files) is dropped from every
/// line; blank lines in the body are kept and later fail date validation.
fn split_lines(content: &str) -> (String, Vec<DateEntry>) {
    let mut lines = content.lines().map(str::trim_end);
    let header = lines.next().unwrap_or_default().to_string();
    let dates = lines.map(DateEntry::new).collect();
    (header, dates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn splits_header_and_dates_in_order() {
        let (header, dates) = split_lines("USDEUR\n2019-12-31\nbad-date\n2020-01-02\n");
        assert_eq!(header, "USDEUR");
        let raw: Vec<&str> = dates.iter().map(|d| d.raw.as_str()).collect();
        assert_eq!(raw, vec!["2019-12-31", "bad-date", "2020-01-02"]);
    }

    #[test]
    fn strips_crlf_and_trailing_spaces() {
        let (header, dates) = split_lines("USDEUR \r\n2019-12-31\r\n");
        assert_eq!(header, "USDEUR");
        assert_eq!(dates, vec![DateEntry::new("2019-12-31")]);
    }

    #[test]
    fn keeps_blank_body_lines() {
        let (_, dates) = split_lines("USDEUR\n\n2019-12-31\n");
        assert_eq!(dates.len(), 2);
        assert_eq!(dates[0].raw, "");
    }

    #[test]
    fn header_only_file_has_no_dates() {
        let (header, dates) = split_lines("USDEUR");
        assert_eq!(header, "USDEUR");
        assert!(dates.is_empty());
    }

    #[test]
    fn missing_file_is_input_not_found() {
        let dir = tempdir().unwrap();
        let err = read_input(&dir.path().join("nope.txt")).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn directory_is_input_not_found() {
        let dir = tempdir().unwrap();
        let err = read_input(dir.path()).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn zero_length_file_is_input_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "").unwrap();
        let err = read_input(&path).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn resolves_absolute_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "USDEUR\n2019-12-31\n").unwrap();

        let input = read_input(&path).unwrap();
        assert!(input.dir.is_absolute());
        assert_eq!(input.dir, fs::canonicalize(dir.path()).unwrap());
        assert_eq!(input.header, "USDEUR");
        assert_eq!(input.dates.len(), 1);
    }
}
