//! ARASAAC picto table (`arasaac.fre30bis.csv`).
use std::path::Path;

use itertools::Itertools;
use log::info;
use serde::Deserialize;

use crate::error::Error;

const NULL: &str = "\\N";

/// A picto table row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PictoEntry {
    idpicto: u64,
    #[serde(default)]
    lemma: String,
    #[serde(default)]
    synset: String,
    #[serde(default)]
    synset2: String,
    #[serde(default)]
    lemma_plural: Option<String>,
}

impl PictoEntry {
    pub fn new(
        idpicto: u64,
        lemma: &str,
        synset: &str,
        synset2: &str,
        lemma_plural: Option<&str>,
    ) -> Self {
        Self {
            idpicto,
            lemma: lemma.to_string(),
            synset: synset.to_string(),
            synset2: synset2.to_string(),
            lemma_plural: lemma_plural.map(String::from),
        }
        .normalized()
    }

    /// `\N` becomes `"0"` in `synset2` and an absent plural.
    fn normalized(mut self) -> Self {
        if self.synset2 == NULL {
            self.synset2 = "0".to_string();
        }
        if matches!(self.lemma_plural.as_deref(), Some(NULL) | Some("")) {
            self.lemma_plural = None;
        }
        self
    }

    pub fn idpicto(&self) -> u64 {
        self.idpicto
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    /// WOLF synset identifier.
    pub fn synset(&self) -> &str {
        &self.synset
    }

    /// Synset reference, as understood by [crate::sense::resolve].
    pub fn synset2(&self) -> &str {
        &self.synset2
    }

    /// `synset2` without its qualifier.
    pub fn synset2_offset(&self) -> &str {
        self.synset2.split('-').next().unwrap_or_default()
    }

    pub fn lemma_plural(&self) -> Option<&str> {
        self.lemma_plural.as_deref()
    }
}

/// In-memory picto table.
#[derive(Debug, Clone, Default)]
pub struct PictoTable {
    entries: Vec<PictoEntry>,
}

impl PictoTable {
    pub fn new(entries: Vec<PictoEntry>) -> Self {
        Self { entries }
    }

    /// Load a comma separated picto table with header.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        info!("loading picto table from {:?}", path);
        let mut reader = csv::ReaderBuilder::new().delimiter(b',').from_path(path)?;
        let table = Self::from_csv(&mut reader)?;
        info!("loaded {} picto entries", table.entries.len());
        Ok(table)
    }

    pub fn from_csv<R: std::io::Read>(reader: &mut csv::Reader<R>) -> Result<Self, Error> {
        let entries = reader
            .deserialize()
            .map(|row| row.map(PictoEntry::normalized))
            .collect::<Result<Vec<PictoEntry>, csv::Error>>()?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[PictoEntry] {
        &self.entries
    }

    pub fn by_lemma<'a>(&'a self, lemma: &'a str) -> impl Iterator<Item = &'a PictoEntry> + 'a {
        self.entries.iter().filter(move |e| e.lemma == lemma)
    }

    /// Picto ids of `lemma`, without duplicates, in first-seen order.
    pub fn picto_ids(&self, lemma: &str) -> Vec<u64> {
        self.by_lemma(lemma).map(PictoEntry::idpicto).unique().collect()
    }

    /// Synset references of `lemma`, in table order.
    pub fn synset_refs<'a>(&'a self, lemma: &'a str) -> Vec<&'a str> {
        self.by_lemma(lemma).map(PictoEntry::synset2).collect()
    }

    /// Synset offsets linked to a WOLF synset, without duplicates.
    pub fn wolf_offsets(&self, wolf_synset: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.synset == wolf_synset)
            .map(PictoEntry::synset2_offset)
            .unique()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "idpicto,lemma,synset,synset2,lemma_plural
2349,chat,eng-30-02121620-n,02124272-n,chats
2349,chat,eng-30-02121620-n,02124272-n,chats
7114,chat,eng-30-02121620-n,\\N,\\N
3250,maison,eng-30-03544360-n,03549540-n,maisons
";

    fn table() -> PictoTable {
        let mut r = csv::Reader::from_reader(TABLE.as_bytes());
        PictoTable::from_csv(&mut r).unwrap()
    }

    #[test]
    fn normalization() {
        let t = table();
        assert_eq!(t.entries()[2].synset2(), "0");
        assert_eq!(t.entries()[2].lemma_plural(), None);
        assert_eq!(t.entries()[0].lemma_plural(), Some("chats"));
    }

    #[test]
    fn picto_ids_are_unique() {
        assert_eq!(table().picto_ids("chat"), vec![2349, 7114]);
        assert!(table().picto_ids("chien").is_empty());
    }

    #[test]
    fn synset_refs() {
        assert_eq!(
            table().synset_refs("chat"),
            vec!["02124272-n", "02124272-n", "0"]
        );
    }

    #[test]
    fn wolf_offsets() {
        assert_eq!(
            table().wolf_offsets("eng-30-02121620-n"),
            vec!["02124272", "0"]
        );
    }

    #[test]
    fn optional_plural_column() {
        let data = "idpicto,lemma,synset,synset2\n12,a,b,1-n\n";
        let mut r = csv::Reader::from_reader(data.as_bytes());
        let t = PictoTable::from_csv(&mut r).unwrap();
        assert_eq!(t.entries()[0].lemma_plural(), None);
    }
}
