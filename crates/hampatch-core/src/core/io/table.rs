use crate::core::io::traits::MatrixFile;
use nalgebra::DMatrix;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Everything after this marker on a line is ignored.
pub const COMMENT_MARKER: char = '#';

pub const DEFAULT_FIELD_WIDTH: usize = 15;
pub const DEFAULT_PRECISION: usize = 6;

/// Fixed-width layout of a written table: every value is right-aligned in a
/// field of `width` characters with `precision` fractional digits, fields are
/// separated by a single space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFormat {
    pub width: usize,
    pub precision: usize,
}

impl Default for TableFormat {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD_WIDTH,
            precision: DEFAULT_PRECISION,
        }
    }
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: invalid number in column {column} (value: '{value}')")]
    Parse {
        line: usize,
        column: usize,
        value: String,
    },
    #[error("Row on line {line} has {found} columns, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("Table contains no numeric rows")]
    Empty,
}

/// Whitespace-delimited numeric text table, one matrix row per line.
pub struct TextTableFile;

impl MatrixFile for TextTableFile {
    type Format = TableFormat;
    type Error = TableError;

    fn read_from(reader: &mut impl BufRead) -> Result<DMatrix<f64>, Self::Error> {
        let mut values = Vec::new();
        let mut columns: Option<usize> = None;
        let mut rows = 0;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let content = match line.split_once(COMMENT_MARKER) {
                Some((before, _)) => before,
                None => line.as_str(),
            };
            let fields: Vec<&str> = content.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }

            match columns {
                None => columns = Some(fields.len()),
                Some(expected) if expected != fields.len() => {
                    return Err(TableError::Ragged {
                        line: line_num,
                        expected,
                        found: fields.len(),
                    });
                }
                Some(_) => {}
            }

            for (idx, field) in fields.iter().enumerate() {
                let value: f64 = field.parse().map_err(|_| TableError::Parse {
                    line: line_num,
                    column: idx + 1,
                    value: (*field).to_string(),
                })?;
                values.push(value);
            }
            rows += 1;
        }

        let columns = columns.ok_or(TableError::Empty)?;
        Ok(DMatrix::from_row_slice(rows, columns, &values))
    }

    fn write_to(
        matrix: &DMatrix<f64>,
        format: &Self::Format,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        for row in matrix.row_iter() {
            for (idx, value) in row.iter().enumerate() {
                if idx > 0 {
                    write!(writer, " ")?;
                }
                write!(
                    writer,
                    "{:>width$.precision$}",
                    value,
                    width = format.width,
                    precision = format.precision
                )?;
            }
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn read_str(content: &str) -> Result<DMatrix<f64>, TableError> {
        TextTableFile::read_from(&mut Cursor::new(content))
    }

    #[test]
    fn reads_rectangular_table_in_row_order() {
        let matrix = read_str("1.0 2.0 3.0\n4.0 5.0 6.0\n").unwrap();
        assert_eq!(matrix.shape(), (2, 3));
        assert_eq!(matrix[(0, 2)], 3.0);
        assert_eq!(matrix[(1, 0)], 4.0);
    }

    #[test]
    fn accepts_mixed_whitespace_and_exponent_notation() {
        let matrix = read_str("  1e-3\t-2.5  \n3   +4.0E2\n").unwrap();
        assert_eq!(matrix[(0, 0)], 1e-3);
        assert_eq!(matrix[(0, 1)], -2.5);
        assert_eq!(matrix[(1, 1)], 400.0);
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        let content = "# coupling block\n\n1 2 # trailing note\n\n3 4\n";
        let matrix = read_str(content).unwrap();
        assert_eq!(matrix, DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn rejects_non_numeric_field_with_position() {
        let err = read_str("1 2\n3 x4\n").unwrap_err();
        match err {
            TableError::Parse {
                line,
                column,
                value,
            } => {
                assert_eq!(line, 2);
                assert_eq!(column, 2);
                assert_eq!(value, "x4");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = read_str("1 2 3\n\n4 5\n").unwrap_err();
        assert!(matches!(
            err,
            TableError::Ragged {
                line: 3,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn rejects_table_without_numbers() {
        assert!(matches!(read_str(""), Err(TableError::Empty)));
        assert!(matches!(read_str("\n# only a comment\n   \n"), Err(TableError::Empty)));
    }

    #[test]
    fn writes_fixed_width_fields_with_single_space() {
        let matrix = DMatrix::from_row_slice(2, 2, &[1.0, -2.5, 0.1234567, 1000.0]);
        let mut out = Vec::new();
        TextTableFile::write_to(&matrix, &TableFormat::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let expected = "       1.000000       -2.500000\n       0.123457     1000.000000\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn custom_format_changes_width_and_precision() {
        let matrix = DMatrix::from_row_slice(1, 2, &[1.5, 2.25]);
        let format = TableFormat {
            width: 6,
            precision: 2,
        };
        let mut out = Vec::new();
        TextTableFile::write_to(&matrix, &format, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "  1.50   2.25\n");
    }

    #[test]
    fn written_table_reads_back_within_rounding() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roundtrip.txt");
        let matrix = DMatrix::from_fn(6, 6, |r, c| (r as f64 - 2.5) * 0.3141592 + c as f64 * 1e-7);

        TextTableFile::write_to_path(&matrix, &TableFormat::default(), &path).unwrap();
        let back = TextTableFile::read_from_path(&path).unwrap();

        assert_eq!(back.shape(), matrix.shape());
        for (a, b) in back.iter().zip(matrix.iter()) {
            assert!((a - b).abs() <= 5e-7 + 1e-12, "{a} vs {b}");
        }
    }

    #[test]
    fn read_from_missing_path_is_io_error() {
        let dir = tempdir().unwrap();
        let result = TextTableFile::read_from_path(dir.path().join("absent.txt"));
        assert!(matches!(result, Err(TableError::Io(_))));
    }
}
