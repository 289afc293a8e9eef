/*! Delimited corpus files

Corpora are tab separated files with a header. Columns holding lists (picto ids, sense keys)
contain list literals such as `[[2349], [], [7114, 3250]]`.
They are written as JSON, and read either as JSON or as python literals
(`[['chat%1:05:00::'], ["o'clock%4:02:00::"]]`).

Files rewritten by a tool go through [CorpusFile], which keeps the columns and their order.
!*/
use std::fs::File;
use std::path::Path;

use csv::StringRecord;
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const TAB: u8 = b'\t';
pub const COMMA: u8 = b',';

/// Picto ids, per token.
pub type TokenPictos = Vec<Vec<u64>>;
/// Sense keys, per token.
pub type TokenSenses = Vec<Vec<String>>;

/// A row of a picto corpus.
///
/// Only `sentence` is mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusRow {
    #[serde(default)]
    pub doc_name: String,
    pub sentence: String,
    #[serde(default)]
    pub pictos_ref_ids: String,
    #[serde(default)]
    pub sense_keys: String,
}

impl CorpusRow {
    pub fn pictos(&self) -> Result<TokenPictos, Error> {
        parse_list(&self.pictos_ref_ids)
    }

    pub fn senses(&self) -> Result<TokenSenses, Error> {
        parse_list(&self.sense_keys)
    }
}

/// A sentence with its per-token picto ids and sense keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRow {
    pub sentence: String,
    pub pictos_ref_ids: String,
    pub sense_keys: String,
}

impl SentenceRow {
    pub fn new(sentence: &str, pictos: &TokenPictos, senses: &TokenSenses) -> Result<Self, Error> {
        Ok(Self {
            sentence: sentence.to_string(),
            pictos_ref_ids: to_list(pictos)?,
            sense_keys: to_list(senses)?,
        })
    }
}

/// Parse a list literal. An empty or blank literal is an empty list.
pub fn parse_list<T: DeserializeOwned + Default>(literal: &str) -> Result<T, Error> {
    let literal = literal.trim();
    if literal.is_empty() {
        return Ok(T::default());
    }

    match serde_json::from_str(literal) {
        Ok(v) => Ok(v),
        Err(e) if literal.contains('\'') => {
            debug!("not json ({}), trying as a python literal", e);
            Ok(serde_json::from_str(&python_to_json(literal)?)?)
        }
        Err(e) => Err(e.into()),
    }
}

/// Rewrite a python literal as JSON.
///
/// Strings are quoted with `'` or `"` and may contain backslash escapes.
fn python_to_json(literal: &str) -> Result<String, Error> {
    let mut json = String::with_capacity(literal.len());
    let mut chars = literal.chars();
    while let Some(c) = chars.next() {
        if c != '\'' && c != '"' {
            json.push(c);
            continue;
        }

        let mut value = String::new();
        let mut closed = false;
        while let Some(s) = chars.next() {
            match s {
                '\\' => match chars.next() {
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('r') => value.push('\r'),
                    Some(e @ ('\\' | '\'' | '"')) => value.push(e),
                    Some(e) => {
                        value.push('\\');
                        value.push(e);
                    }
                    None => break,
                },
                s if s == c => {
                    closed = true;
                    break;
                }
                s => value.push(s),
            }
        }
        if !closed {
            return Err(Error::Custom(format!(
                "unterminated string in list literal {:?}",
                literal
            )));
        }
        json.push_str(&serde_json::to_string(&value)?);
    }
    Ok(json)
}

/// Write a list literal.
pub fn to_list<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    Ok(serde_json::to_string(value)?)
}

/// Read every record of a delimited file with header.
pub fn read_records<T: DeserializeOwned>(path: &Path, delimiter: u8) -> Result<Vec<T>, Error> {
    debug!("reading records from {:?}", path);
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_path(path)?;
    let records = reader.deserialize().collect::<Result<Vec<T>, csv::Error>>()?;
    debug!("read {} records", records.len());
    Ok(records)
}

/// Write records into a delimited file with header, creating the parent folder if needed.
pub fn write_records<T: Serialize>(path: &Path, delimiter: u8, records: &[T]) -> Result<(), Error> {
    debug!("writing {} records to {:?}", records.len(), path);
    let mut writer = writer(path, delimiter)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// A delimited file held as raw records.
///
/// Columns are kept as read, so that rewriting a corpus only touches the columns a tool sets.
#[derive(Debug, Clone)]
pub struct CorpusFile {
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl CorpusFile {
    pub fn from_path(path: &Path, delimiter: u8) -> Result<Self, Error> {
        debug!("reading corpus from {:?}", path);
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .from_path(path)?;
        let headers = reader.headers()?.clone();
        let records = reader
            .records()
            .collect::<Result<Vec<StringRecord>, csv::Error>>()?;
        debug!("read {} records with columns {:?}", records.len(), headers);
        Ok(Self { headers, records })
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Values of column `name`, if present.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.headers.iter().position(|h| h == name)?;
        Some(
            self.records
                .iter()
                .map(|r| r.get(idx).unwrap_or_default())
                .collect(),
        )
    }

    /// Typed view of every record. Columns the type does not name are ignored.
    pub fn rows<T: DeserializeOwned>(&self) -> Result<Vec<T>, Error> {
        Ok(self
            .records
            .iter()
            .map(|r| r.deserialize(Some(&self.headers)))
            .collect::<Result<Vec<T>, csv::Error>>()?)
    }

    /// Replace the values of column `name`, or add it as the last column.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) -> Result<(), Error> {
        if values.len() != self.records.len() {
            return Err(Error::Custom(format!(
                "{} values for column {} of a corpus with {} records",
                values.len(),
                name,
                self.records.len()
            )));
        }

        match self.headers.iter().position(|h| h == name) {
            Some(idx) => {
                for (record, value) in self.records.iter_mut().zip(values) {
                    let mut updated =
                        StringRecord::with_capacity(record.as_slice().len(), record.len());
                    for (i, field) in record.iter().enumerate() {
                        updated.push_field(if i == idx { value.as_str() } else { field });
                    }
                    *record = updated;
                }
            }
            None => {
                self.headers.push_field(name);
                for (record, value) in self.records.iter_mut().zip(values) {
                    record.push_field(&value);
                }
            }
        }
        Ok(())
    }

    /// Write headers and records, creating the parent folder if needed.
    pub fn write(&self, path: &Path, delimiter: u8) -> Result<(), Error> {
        debug!("writing {} records to {:?}", self.records.len(), path);
        let mut writer = writer(path, delimiter)?;
        writer.write_record(&self.headers)?;
        for record in &self.records {
            writer.write_record(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn writer(path: &Path, delimiter: u8) -> Result<csv::Writer<File>, Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_list() {
        let v: TokenPictos = parse_list("[[2349], [], [7114, 3250]]").unwrap();
        assert_eq!(v, vec![vec![2349], vec![], vec![7114, 3250]]);
    }

    #[test]
    fn python_list() {
        let v: TokenSenses = parse_list("[['chat%1:05:00::', 'chat%1:18:00::'], []]").unwrap();
        assert_eq!(
            v,
            vec![
                vec!["chat%1:05:00::".to_string(), "chat%1:18:00::".to_string()],
                vec![]
            ]
        );
    }

    #[test]
    fn mixed_quotes() {
        let v: TokenSenses =
            parse_list(r#"[["o'clock%4:02:00::", 'chat%1:05:00::'], []]"#).unwrap();
        assert_eq!(
            v,
            vec![
                vec!["o'clock%4:02:00::".to_string(), "chat%1:05:00::".to_string()],
                vec![]
            ]
        );

        let v: TokenSenses =
            parse_list(r#"[['jack-o\'-lantern%1:06:00::', 'a "b"']]"#).unwrap();
        assert_eq!(v[0], vec!["jack-o'-lantern%1:06:00::", "a \"b\""]);
    }

    #[test]
    fn unterminated_python_string() {
        assert!(parse_list::<TokenSenses>("[['chat%1:05:00::]]").is_err());
    }

    #[test]
    fn empty_list() {
        let v: TokenSenses = parse_list("  ").unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn garbage() {
        assert!(parse_list::<TokenPictos>("[[1], [").is_err());
        assert!(parse_list::<TokenPictos>("['a']").is_err());
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("corpus.tsv");
        let rows = vec![CorpusRow {
            doc_name: "doc1".to_string(),
            sentence: "le chat dort".to_string(),
            pictos_ref_ids: to_list(&vec![vec![], vec![2349u64], vec![]]).unwrap(),
            sense_keys: to_list(&vec![vec![], vec!["chat%1:05:00::"], vec![]]).unwrap(),
        }];
        write_records(&path, TAB, &rows).unwrap();

        let read: Vec<CorpusRow> = read_records(&path, TAB).unwrap();
        assert_eq!(read, rows);
        assert_eq!(read[0].pictos().unwrap()[1], vec![2349]);
        assert_eq!(read[0].senses().unwrap()[1], vec!["chat%1:05:00::"]);
    }

    #[test]
    fn optional_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.tsv");
        std::fs::write(&path, "sentence\tpictos_ref_ids\nun chat\t[[], [2349]]\n").unwrap();
        let read: Vec<CorpusRow> = read_records(&path, TAB).unwrap();
        assert_eq!(read[0].doc_name, "");
        assert!(read[0].senses().unwrap().is_empty());
        assert_eq!(read[0].pictos().unwrap(), vec![vec![], vec![2349]]);
    }

    #[test]
    fn keep_unknown_columns() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("corpus.tsv");
        std::fs::write(
            &src,
            "sentence\tpictos_ref_ids\tspeaker\nun chat\t[[], [2349]]\tspk1\n",
        )
        .unwrap();

        let mut corpus = CorpusFile::from_path(&src, TAB).unwrap();
        let rows: Vec<CorpusRow> = corpus.rows().unwrap();
        assert_eq!(rows[0].pictos().unwrap(), vec![vec![], vec![2349]]);
        corpus
            .set_column("sense_keys", vec!["[[],[]]".to_string()])
            .unwrap();
        corpus
            .set_column("pictos_ref_ids", vec!["[[],[]]".to_string()])
            .unwrap();

        let dst = dir.path().join("out").join("corpus.tsv");
        corpus.write(&dst, TAB).unwrap();
        assert_eq!(
            std::fs::read_to_string(&dst).unwrap(),
            "sentence\tpictos_ref_ids\tspeaker\tsense_keys\nun chat\t[[],[]]\tspk1\t[[],[]]\n"
        );

        let read = CorpusFile::from_path(&dst, TAB).unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(read.column("speaker"), Some(vec!["spk1"]));
        assert_eq!(read.column("doc_name"), None);
    }

    #[test]
    fn column_length_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("corpus.tsv");
        std::fs::write(&src, "sentence\nun\ndeux\n").unwrap();
        let mut corpus = CorpusFile::from_path(&src, TAB).unwrap();
        assert!(corpus.set_column("lemma", vec![String::new()]).is_err());
        assert_eq!(corpus.headers().len(), 1);
    }
}
