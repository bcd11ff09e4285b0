use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing sequence file formats.
///
/// Implementors handle format-specific parsing and serialization of a list
/// of records; the path-based helpers only add buffered file handling.
pub trait SequenceFile {
    /// The record type produced by the format.
    type Record;

    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads every record from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Self::Record>, Self::Error>;

    /// Writes records to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(records: &[Self::Record], writer: &mut impl Write) -> Result<(), Self::Error>;

    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Self::Record>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    fn write_to_path<P: AsRef<Path>>(records: &[Self::Record], path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(records, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
