/*! Index files for the InteraactionPicto platforms

- `names.json`: every keyword (and plural) of a folder of pictogram JSON files.
- `synsets.json`: sense key → picto ids, from the synsets of the same pictograms.
- `synsets_fr.json`: picto table lemma (or plural) → sense keys, and `names2.json` with its lemmas.

Maps are written with sorted keys. Pictogram files are read in file name order.
!*/
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;

use crate::error::Error;
use crate::picto::{PictoTable, Pictogram};
use crate::sense::{resolve, MalformedPolicy, SenseTable};

pub const NAMES_FILE: &str = "names.json";
pub const SYNSETS_FILE: &str = "synsets.json";
pub const LEMMA_SYNSETS_FILE: &str = "synsets_fr.json";
pub const LEMMAS_FILE: &str = "names2.json";

fn push_unique<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if !values.contains(&value) {
        values.push(value);
    }
}

/// `*.json` files of `dir`, sorted.
pub fn pictogram_files(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    debug!("{} pictogram files in {:?}", files.len(), dir);
    Ok(files)
}

pub fn read_pictograms(dir: &Path) -> Result<Vec<Pictogram>, Error> {
    pictogram_files(dir)?
        .iter()
        .map(|path| -> Result<Pictogram, Error> {
            let reader = BufReader::new(File::open(path)?);
            Ok(serde_json::from_reader(reader)?)
        })
        .collect()
}

/// Unique names of the pictograms, in first-seen order.
pub fn names(pictograms: &[Pictogram]) -> Vec<String> {
    let mut names = Vec::new();
    for name in pictograms.iter().flat_map(Pictogram::names) {
        push_unique(&mut names, name.to_string());
    }
    names
}

/// Sense key → ids of the pictograms with a synset having that key.
pub fn synsets(
    pictograms: &[Pictogram],
    senses: &SenseTable,
    policy: MalformedPolicy,
) -> Result<BTreeMap<String, Vec<u64>>, Error> {
    let mut index: BTreeMap<String, Vec<u64>> = BTreeMap::new();
    for picto in pictograms {
        for synset in &picto.synsets {
            for key in policy.apply(resolve(synset, senses))? {
                push_unique(index.entry(key).or_default(), picto.id);
            }
        }
    }
    Ok(index)
}

/// Lemma as displayed on the platforms: `_` become spaces and a trailing number is dropped
/// (`chien_2` → `chien`, `pomme_de_terre` → `pomme de terre`).
pub fn display_lemma(lemma: &str) -> String {
    let mut parts: Vec<&str> = lemma.split('_').collect();
    if parts.len() > 1
        && parts
            .last()
            .map_or(false, |p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
    {
        parts.pop();
    }
    parts.join(" ")
}

/// Lemma and plural → sense keys of the `synset2` reference of their rows.
pub fn lemma_synsets(
    pictos: &PictoTable,
    senses: &SenseTable,
    policy: MalformedPolicy,
) -> Result<BTreeMap<String, Vec<String>>, Error> {
    let mut index: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for entry in pictos.entries() {
        let keys = policy.apply(resolve(entry.synset2(), senses))?;
        if keys.is_empty() {
            continue;
        }

        let lemma = display_lemma(entry.lemma());
        let plural = entry.lemma_plural().map(|p| p.replace('_', " "));
        for word in std::iter::once(lemma).chain(plural) {
            if word.is_empty() {
                continue;
            }
            let values = index.entry(word).or_default();
            for key in &keys {
                push_unique(values, key.clone());
            }
        }
    }
    Ok(index)
}

pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), Error> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut out, value)?;
    out.flush()?;
    info!("wrote {:?}", path);
    Ok(())
}

/// Write `names.json` into `dst_dir`.
pub fn create_names(pictos_dir: &Path, dst_dir: &Path) -> Result<(), Error> {
    let pictograms = read_pictograms(pictos_dir)?;
    std::fs::create_dir_all(dst_dir)?;
    write_json(&dst_dir.join(NAMES_FILE), &names(&pictograms))
}

/// Write `synsets.json` into `dst_dir`.
pub fn create_synsets(
    pictos_dir: &Path,
    wn31: &Path,
    dst_dir: &Path,
    policy: MalformedPolicy,
) -> Result<(), Error> {
    let pictograms = read_pictograms(pictos_dir)?;
    let senses = SenseTable::from_path(wn31)?;
    std::fs::create_dir_all(dst_dir)?;
    write_json(
        &dst_dir.join(SYNSETS_FILE),
        &synsets(&pictograms, &senses, policy)?,
    )
}

/// Write `synsets_fr.json` and `names2.json` into `dst_dir`.
pub fn create_lemmas(
    picto_table: &Path,
    wn31: &Path,
    dst_dir: &Path,
    policy: MalformedPolicy,
) -> Result<(), Error> {
    let pictos = PictoTable::from_path(picto_table)?;
    let senses = SenseTable::from_path(wn31)?;
    let index = lemma_synsets(&pictos, &senses, policy)?;
    let lemmas: Vec<&String> = index.keys().collect();

    std::fs::create_dir_all(dst_dir)?;
    write_json(&dst_dir.join(LEMMA_SYNSETS_FILE), &index)?;
    write_json(&dst_dir.join(LEMMAS_FILE), &lemmas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picto::PictoCatalog;
    use crate::processing::testutils::{picto_table, sense_table, FakeCatalog};

    fn pictograms() -> Vec<Pictogram> {
        let catalog = FakeCatalog::default();
        [2349, 3250, 666]
            .iter()
            .map(|id| catalog.pictogram(*id).unwrap())
            .collect()
    }

    #[test]
    fn lemma_display() {
        assert_eq!(display_lemma("chien_2"), "chien");
        assert_eq!(display_lemma("pomme_de_terre"), "pomme de terre");
        assert_eq!(display_lemma("12"), "12");
        assert_eq!(display_lemma("chat"), "chat");
    }

    #[test]
    fn picto_names() {
        let mut p = pictograms();
        p.push(p[0].clone());
        assert_eq!(names(&p), vec!["chat", "chats", "minou", "maison", "maisons"]);
    }

    #[test]
    fn synset_index() {
        // 666 has a malformed synset
        assert!(synsets(&pictograms(), &sense_table(), MalformedPolicy::Abort).is_err());

        let index = synsets(&pictograms(), &sense_table(), MalformedPolicy::Skip).unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index["chat%1:05:00::"], vec![2349]);
        assert_eq!(index["chat%1:18:00::"], vec![2349]);
        assert_eq!(index["maison%1:06:00::"], vec![3250, 666]);
    }

    #[test]
    fn lemma_index() {
        let index = lemma_synsets(&picto_table(), &sense_table(), MalformedPolicy::Abort).unwrap();
        assert_eq!(
            index["chat"],
            vec!["chat%1:05:00::".to_string(), "chat%1:18:00::".to_string()]
        );
        assert_eq!(index["chats"].len(), 2);
        assert_eq!(index["maisons"], vec!["maison%1:06:00::"]);
        assert_eq!(index["chien"], vec!["chien%1:05:00::"]);
        assert!(!index.contains_key("chien_2"));
    }

    #[test]
    fn files() {
        let dir = tempfile::tempdir().unwrap();
        let pictos_dir = dir.path().join("jsons");
        std::fs::create_dir(&pictos_dir).unwrap();
        let catalog = FakeCatalog::default();
        for id in [3250, 2349] {
            std::fs::write(
                pictos_dir.join(format!("{}.json", id)),
                catalog.pictogram_json(id).unwrap(),
            )
            .unwrap();
        }
        std::fs::write(pictos_dir.join("readme.txt"), "ignored").unwrap();

        let out = dir.path().join("out");
        create_names(&pictos_dir, &out).unwrap();
        let names: Vec<String> =
            serde_json::from_str(&std::fs::read_to_string(out.join(NAMES_FILE)).unwrap()).unwrap();
        assert_eq!(names, vec!["chat", "chats", "minou", "maison", "maisons"]);
    }
}
