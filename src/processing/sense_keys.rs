/*! Sense key annotation of a picto corpus

For each token of each sentence, the synsets of every reference pictogram are fetched
from the catalog and resolved into sense keys, which are concatenated.
Tokens without pictogram get an empty list.
!*/
use std::path::Path;

use log::{debug, info};

use crate::error::Error;
use crate::io::{to_list, CorpusFile, CorpusRow, TAB};
use crate::picto::PictoCatalog;
use crate::sense::{resolve, MalformedPolicy, SenseTable};

/// Every sense key of pictogram `id`, following the order of its synsets.
pub fn picto_sense_keys<C: PictoCatalog + ?Sized>(
    catalog: &C,
    table: &SenseTable,
    id: u64,
    policy: MalformedPolicy,
) -> Result<Vec<String>, Error> {
    let mut keys = Vec::new();
    for synset in catalog.synsets(id)? {
        keys.extend(policy.apply(resolve(&synset, table))?);
    }
    debug!("picto {}: {} sense keys", id, keys.len());
    Ok(keys)
}

/// Sense keys of each token, given the picto ids of each token.
pub fn sentence_sense_keys<C: PictoCatalog + ?Sized>(
    catalog: &C,
    table: &SenseTable,
    pictos: &[Vec<u64>],
    policy: MalformedPolicy,
) -> Result<Vec<Vec<String>>, Error> {
    pictos
        .iter()
        .map(|ids| -> Result<Vec<String>, Error> {
            let mut keys = Vec::new();
            for id in ids {
                keys.extend(picto_sense_keys(catalog, table, *id, policy)?);
            }
            Ok(keys)
        })
        .collect()
}

/// Annotate rows in place.
pub fn annotate_rows<C: PictoCatalog + ?Sized>(
    catalog: &C,
    table: &SenseTable,
    rows: &mut [CorpusRow],
    policy: MalformedPolicy,
) -> Result<(), Error> {
    let nb_rows = rows.len();
    for (idx, row) in rows.iter_mut().enumerate() {
        info!("annotating sentence {}/{}", idx + 1, nb_rows);
        let keys = sentence_sense_keys(catalog, table, &row.pictos()?, policy)?;
        row.sense_keys = to_list(&keys)?;
    }
    Ok(())
}

/// Read the corpus at `src`, set its `sense_keys` column and write it at `dst`.
///
/// The other columns are written back unchanged.
pub fn annotate<C: PictoCatalog + ?Sized>(
    src: &Path,
    wn31: &Path,
    dst: &Path,
    catalog: &C,
    policy: MalformedPolicy,
) -> Result<(), Error> {
    let mut corpus = CorpusFile::from_path(src, TAB)?;
    let mut rows: Vec<CorpusRow> = corpus.rows()?;
    let table = SenseTable::from_path(wn31)?;
    annotate_rows(catalog, &table, &mut rows, policy)?;
    corpus.set_column(
        "sense_keys",
        rows.into_iter().map(|row| row.sense_keys).collect(),
    )?;
    corpus.write(dst, TAB)?;
    info!("wrote {} annotated sentences to {:?}", corpus.len(), dst);
    Ok(())
}
