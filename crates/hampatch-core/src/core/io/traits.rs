use nalgebra::DMatrix;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Defines the interface for reading and writing matrix file formats.
///
/// Implementors handle format-specific parsing and serialization of dense
/// `f64` matrices; the file-path helpers are provided on top of the
/// reader/writer methods.
pub trait MatrixFile {
    /// Formatting options applied when a matrix is written.
    type Format;

    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a matrix from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<DMatrix<f64>, Self::Error>;

    /// Writes a matrix to a writer using the given format.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(
        matrix: &DMatrix<f64>,
        format: &Self::Format,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Reads a matrix from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<DMatrix<f64>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a matrix to a file path.
    ///
    /// The whole table is rendered in memory first, so a formatting failure
    /// never leaves a truncated file behind.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or the file cannot be written.
    fn write_to_path<P: AsRef<Path>>(
        matrix: &DMatrix<f64>,
        format: &Self::Format,
        path: P,
    ) -> Result<(), Self::Error> {
        let mut buffer = Vec::new();
        Self::write_to(matrix, format, &mut buffer)?;
        std::fs::write(path, buffer)?;
        Ok(())
    }
}
