use super::traits::SequenceFile;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use thiserror::Error;

const LINE_WIDTH: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastaEntry {
    pub description: String,
    pub sequence: String,
}

impl FastaEntry {
    pub fn new(description: &str, sequence: &str) -> Self {
        Self {
            description: description.to_string(),
            sequence: sequence.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: FastaParseErrorKind },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FastaParseErrorKind {
    #[error("Sequence data found before the first '>' header")]
    SequenceBeforeHeader,
    #[error("Header line has an empty description")]
    EmptyDescription,
    #[error("Record '{0}' has no sequence")]
    EmptySequence(String),
}

pub struct FastaFile;

impl FastaFile {
    fn finish_record(
        current: Option<(usize, FastaEntry)>,
        entries: &mut Vec<FastaEntry>,
    ) -> Result<(), FastaError> {
        if let Some((header_line, entry)) = current {
            if entry.sequence.is_empty() {
                return Err(FastaError::Parse {
                    line: header_line,
                    kind: FastaParseErrorKind::EmptySequence(entry.description),
                });
            }
            entries.push(entry);
        }
        Ok(())
    }
}

impl SequenceFile for FastaFile {
    type Record = FastaEntry;
    type Error = FastaError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<FastaEntry>, FastaError> {
        let mut entries = Vec::new();
        let mut current: Option<(usize, FastaEntry)> = None;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            let line = line.trim_end();

            if line.trim().is_empty() || line.starts_with(';') {
                continue;
            }

            if let Some(header) = line.strip_prefix('>') {
                Self::finish_record(current.take(), &mut entries)?;
                let description = header.trim();
                if description.is_empty() {
                    return Err(FastaError::Parse {
                        line: line_num,
                        kind: FastaParseErrorKind::EmptyDescription,
                    });
                }
                current = Some((line_num, FastaEntry::new(description, "")));
                continue;
            }

            match current.as_mut() {
                Some((_, entry)) => entry
                    .sequence
                    .extend(line.chars().filter(|c| !c.is_whitespace())),
                None => {
                    return Err(FastaError::Parse {
                        line: line_num,
                        kind: FastaParseErrorKind::SequenceBeforeHeader,
                    });
                }
            }
        }

        Self::finish_record(current, &mut entries)?;
        Ok(entries)
    }

    fn write_to(records: &[FastaEntry], writer: &mut impl Write) -> Result<(), FastaError> {
        for entry in records {
            writeln!(writer, ">{}", entry.description)?;
            for chunk in entry.sequence.as_bytes().chunks(LINE_WIDTH) {
                writer.write_all(chunk)?;
                writer.write_all(b"\n")?;
            }
        }
        Ok(())
    }
}
