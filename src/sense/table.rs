//! `index.sense` loading.
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::{debug, info};

/// A line of `index.sense`: `sense_key synset id1 id2`.
///
/// `id1` and `id2` are the sense number and the tag count, kept but unused by resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenseRecord {
    sense_key: String,
    synset: u64,
    id1: u32,
    id2: u32,
}

impl SenseRecord {
    pub fn new(sense_key: &str, synset: u64, id1: u32, id2: u32) -> Self {
        Self {
            sense_key: sense_key.to_string(),
            synset,
            id1,
            id2,
        }
    }

    /// Get a reference to the record's sense key.
    pub fn sense_key(&self) -> &str {
        &self.sense_key
    }

    /// Get the record's synset offset.
    pub fn synset(&self) -> u64 {
        self.synset
    }

    pub fn id1(&self) -> u32 {
        self.id1
    }

    pub fn id2(&self) -> u32 {
        self.id2
    }

    /// Parse a single line. `line_nb` is 1-based and only used for error reporting.
    fn parse(line: &str, line_nb: usize) -> Result<Self, LoadError> {
        let columns: Vec<&str> = line.split_whitespace().collect();
        if columns.len() != 4 {
            return Err(LoadError::Columns {
                line: line_nb,
                found: columns.len(),
            });
        }

        let field = |idx: usize, name: &'static str| LoadError::Field {
            line: line_nb,
            name,
            value: columns[idx].to_string(),
        };

        let synset = columns[1].parse().map_err(|_| field(1, "synset"))?;
        let id1 = columns[2].parse().map_err(|_| field(2, "id1"))?;
        let id2 = columns[3].parse().map_err(|_| field(3, "id2"))?;

        Ok(Self::new(columns[0], synset, id1, id2))
    }
}

/// Failure to build a [SenseTable].
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    /// A row does not have exactly four columns.
    Columns { line: usize, found: usize },
    /// A numeric column could not be parsed.
    Field {
        line: usize,
        name: &'static str,
        value: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "could not read sense table: {}", e),
            LoadError::Columns { line, found } => write!(
                f,
                "malformed sense table at line {}: expected 4 columns, found {}",
                line, found
            ),
            LoadError::Field { line, name, value } => write!(
                f,
                "malformed sense table at line {}: invalid {} {:?}",
                line, name, value
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

/// In-memory `index.sense`.
///
/// Records are kept in file order, duplicates included.
/// The table is never mutated once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SenseTable {
    records: Vec<SenseRecord>,
}

impl SenseTable {
    pub fn new(records: Vec<SenseRecord>) -> Self {
        Self { records }
    }

    /// Load a table from a whitespace separated file without header.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        info!("loading sense table from {:?}", path);
        let f = File::open(path)?;
        let table = Self::from_reader(f)?;
        info!("loaded {} senses", table.len());
        Ok(table)
    }

    /// Load a table from any reader.
    ///
    /// Blank lines are ignored. Any other malformed line fails the whole load.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let reader = BufReader::new(reader);
        let mut records = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                debug!("skipping blank line {}", idx + 1);
                continue;
            }
            records.push(SenseRecord::parse(&line, idx + 1)?);
        }

        Ok(Self { records })
    }

    /// Records sharing `synset`, in table order.
    pub fn with_synset(&self, synset: u64) -> impl Iterator<Item = &SenseRecord> {
        self.records.iter().filter(move |r| r.synset == synset)
    }

    pub fn records(&self) -> &[SenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
