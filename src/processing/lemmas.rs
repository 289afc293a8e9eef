/*! Sentences to lemmas and candidate pictograms

Every lemma of a sentence is searched in the catalog and the pictograms having the lemma as
keyword are kept. Their images are saved into one folder per sentence:
`<out_dir>/<sentence nb>/<id>_<lemma>.png`.

The sentences file gets two more columns, `lemma` and `pictos_all_ids`.
!*/
use std::path::Path;

use log::{debug, info};

use crate::error::Error;
use crate::io::{to_list, CorpusFile, CorpusRow, COMMA};
use crate::picto::PictoCatalog;
use crate::tagger::{lemmas, Tagger};

/// Ids of the pictograms with `lemma` as keyword.
pub fn picto_ids<C: PictoCatalog + ?Sized>(catalog: &C, lemma: &str) -> Result<Vec<u64>, Error> {
    Ok(catalog
        .search(lemma)?
        .into_iter()
        .filter(|p| p.has_keyword(lemma))
        .map(|p| p.id)
        .collect())
}

/// Lemmas and candidate pictograms of sentence number `index`.
pub fn sentence_pictos<C, T>(
    catalog: &C,
    tagger: &T,
    index: usize,
    sentence: &str,
    out_dir: &Path,
) -> Result<(Vec<String>, Vec<Vec<u64>>), Error>
where
    C: PictoCatalog + ?Sized,
    T: Tagger + ?Sized,
{
    let images_dir = out_dir.join(index.to_string());
    std::fs::create_dir_all(&images_dir)?;

    let lemmas = lemmas(tagger, sentence);
    let mut ids = Vec::with_capacity(lemmas.len());
    for lemma in &lemmas {
        let found = picto_ids(catalog, lemma)?;
        debug!("{}: {:?}", lemma, found);
        for id in &found {
            catalog.download_image(*id, &images_dir.join(format!("{}_{}.png", id, lemma)))?;
        }
        ids.push(found);
    }
    Ok((lemmas, ids))
}

pub fn lemmas_to_pictos<C, T>(
    catalog: &C,
    tagger: &T,
    src: &Path,
    out_dir: &Path,
    dst: &Path,
) -> Result<(), Error>
where
    C: PictoCatalog + ?Sized,
    T: Tagger + ?Sized,
{
    let mut corpus = CorpusFile::from_path(src, COMMA)?;
    let rows: Vec<CorpusRow> = corpus.rows()?;
    let mut lemma_col = Vec::with_capacity(rows.len());
    let mut ids_col = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let (lemmas, ids) = sentence_pictos(catalog, tagger, index, &row.sentence, out_dir)?;
        lemma_col.push(to_list(&lemmas)?);
        ids_col.push(to_list(&ids)?);
    }
    corpus.set_column("lemma", lemma_col)?;
    corpus.set_column("pictos_all_ids", ids_col)?;
    corpus.write(dst, COMMA)?;
    info!("wrote {} sentences to {:?}", corpus.len(), dst);
    Ok(())
}
