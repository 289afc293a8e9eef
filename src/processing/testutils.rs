//! Shared fixtures for processing tests.
use std::collections::HashMap;
use std::path::Path;

use crate::error::Error;
use crate::picto::{PictoCatalog, PictoTable, Pictogram};
use crate::sense::SenseTable;

pub const INDEX_SENSE: &str = "chat%1:05:00:: 02124272 1 3
chat%1:18:00:: 02124272 2 0
maison%1:06:00:: 03549540 1 5
chien%1:05:00:: 02086723 1 2
";

pub const PICTO_TABLE: &str = "idpicto,lemma,synset,synset2,lemma_plural
2349,chat,eng-30-02121620-n,02124272-n,chats
2349,chat,eng-30-02121620-n,02124272-n,chats
7114,chat,eng-30-02121620-n,\\N,\\N
3250,maison,eng-30-03544360-n,03549540-n,maisons
2517,chien_2,eng-30-02084071-n,02086723-n,\\N
";

pub fn sense_table() -> SenseTable {
    SenseTable::from_reader(INDEX_SENSE.as_bytes()).unwrap()
}

pub fn picto_table() -> PictoTable {
    let mut reader = csv::Reader::from_reader(PICTO_TABLE.as_bytes());
    PictoTable::from_csv(&mut reader).unwrap()
}

/// In-memory catalog.
pub struct FakeCatalog {
    pictos: HashMap<u64, &'static str>,
}

impl Default for FakeCatalog {
    fn default() -> Self {
        let pictos = [
            (
                2349,
                r#"{"_id": 2349, "synsets": ["02124272-n", "closed"],
                    "keywords": [{"keyword": "chat", "plural": "chats"}, {"keyword": "minou"}]}"#,
            ),
            (
                3250,
                r#"{"_id": 3250, "synsets": ["03549540-n"],
                    "keywords": [{"keyword": "maison", "plural": "maisons"}]}"#,
            ),
            (
                2517,
                r#"{"_id": 2517, "synsets": ["02086723-n"], "keywords": [{"keyword": "chien"}]}"#,
            ),
            (
                666,
                r#"{"_id": 666, "synsets": ["x-n", "03549540-n"], "keywords": []}"#,
            ),
        ]
        .into_iter()
        .collect();
        Self { pictos }
    }
}

impl PictoCatalog for FakeCatalog {
    fn pictogram_json(&self, id: u64) -> Result<String, Error> {
        self.pictos
            .get(&id)
            .map(|s| s.to_string())
            .ok_or_else(|| Error::Custom(format!("no pictogram {}", id)))
    }

    fn search(&self, word: &str) -> Result<Vec<Pictogram>, Error> {
        let mut ids: Vec<&u64> = self.pictos.keys().collect();
        ids.sort();
        let mut found = Vec::new();
        for id in ids {
            let p = self.pictogram(*id)?;
            if p.names().any(|n| n.starts_with(word)) {
                found.push(p);
            }
        }
        Ok(found)
    }

    fn all_json(&self) -> Result<String, Error> {
        let mut ids: Vec<&u64> = self.pictos.keys().collect();
        ids.sort();
        let all: Vec<&str> = ids.into_iter().map(|id| self.pictos[id]).collect();
        Ok(format!("[{}]", all.join(",")))
    }

    fn download_image(&self, id: u64, dst: &Path) -> Result<(), Error> {
        std::fs::write(dst, format!("png {}", id))?;
        Ok(())
    }
}
