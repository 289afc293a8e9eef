/*! Corpus from source/reference evaluation sets

The reference file holds the picto "translation" of each source segment, one lemma per picto.
Each reference lemma is looked up in the picto table to get its picto ids and the sense keys
of its synsets.
!*/
use std::collections::HashMap;
use std::path::Path;

use itertools::Itertools;
use log::info;

use crate::error::Error;
use crate::io::corpus::{SentenceRow, TokenPictos, TokenSenses};
use crate::io::seg::{normalize_reference, normalize_source, read_segments};
use crate::io::{write_records, TAB};
use crate::picto::PictoTable;
use crate::sense::{resolve, MalformedPolicy, SenseTable};

/// Picto ids and sense keys of each lemma of a reference segment.
pub fn reference_annotations(
    reference: &str,
    pictos: &PictoTable,
    senses: &SenseTable,
    policy: MalformedPolicy,
) -> Result<(TokenPictos, TokenSenses), Error> {
    let mut ids = Vec::new();
    let mut keys = Vec::new();
    for lemma in reference.split(' ') {
        ids.push(pictos.picto_ids(lemma));

        let mut lemma_keys = Vec::new();
        for synset in pictos.synset_refs(lemma) {
            lemma_keys.extend(policy.apply(resolve(synset, senses))?);
        }
        keys.push(lemma_keys.into_iter().unique().collect());
    }
    Ok((ids, keys))
}

/// Build the corpus rows from normalized source and reference segments.
///
/// A source sentence appearing twice keeps its first position and its last annotation.
pub fn build_rows(
    sources: &[String],
    references: &[String],
    pictos: &PictoTable,
    senses: &SenseTable,
    policy: MalformedPolicy,
) -> Result<Vec<SentenceRow>, Error> {
    if sources.len() != references.len() {
        return Err(Error::Custom(format!(
            "{} source segments for {} reference segments",
            sources.len(),
            references.len()
        )));
    }

    let mut rows: Vec<SentenceRow> = Vec::with_capacity(sources.len());
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for (source, reference) in sources.iter().zip(references) {
        let (ids, keys) = reference_annotations(reference, pictos, senses, policy)?;
        let row = SentenceRow::new(source, &ids, &keys)?;
        match positions.get(source.as_str()) {
            Some(&pos) => rows[pos] = row,
            None => {
                positions.insert(source, rows.len());
                rows.push(row);
            }
        }
    }
    Ok(rows)
}

pub fn create_corpus(
    source_file: &Path,
    ref_file: &Path,
    picto_table: &Path,
    wn31: &Path,
    dst: &Path,
    policy: MalformedPolicy,
) -> Result<(), Error> {
    let sources: Vec<String> = read_segments(source_file)?
        .iter()
        .map(|s| normalize_source(s))
        .collect();
    let references: Vec<String> = read_segments(ref_file)?
        .iter()
        .map(|s| normalize_reference(s))
        .collect();
    info!(
        "{} source and {} reference segments",
        sources.len(),
        references.len()
    );

    let senses = SenseTable::from_path(wn31)?;
    let pictos = PictoTable::from_path(picto_table)?;
    let rows = build_rows(&sources, &references, &pictos, &senses, policy)?;
    write_records(dst, TAB, &rows)?;
    info!("wrote {} sentences to {:?}", rows.len(), dst);
    Ok(())
}
