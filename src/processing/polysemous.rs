/*! Polysemous word corpus

Each input row gives a word to disambiguate, up to six example sentences, the reference picto ids
and the WOLF senses (`_` separated) of the word. Only the tokens whose lemma is the word get
picto ids and sense keys.
!*/
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::error::Error;
use crate::io::corpus::{SentenceRow, TokenPictos, TokenSenses};
use crate::io::{parse_list, read_records, write_records, TAB};
use crate::picto::PictoTable;
use crate::sense::{resolve_first, MalformedPolicy, SenseTable};
use crate::tagger::Tagger;

#[derive(Debug, Clone, Deserialize)]
pub struct PolysemousRow {
    #[serde(rename = "wordToDisambiguate")]
    pub word: String,
    pub sentence1: String,
    #[serde(default)]
    pub sentence2: Option<String>,
    #[serde(default)]
    pub sentence3: Option<String>,
    #[serde(default)]
    pub sentence4: Option<String>,
    #[serde(default)]
    pub sentence5: Option<String>,
    #[serde(default)]
    pub sentence6: Option<String>,
    #[serde(rename = "sense1_pictoID_correct_arasaac")]
    pub picto_ids: String,
    #[serde(rename = "sense_wolf_correct")]
    pub wolf_senses: String,
}

impl PolysemousRow {
    /// Non empty example sentences.
    pub fn sentences(&self) -> impl Iterator<Item = &str> {
        std::iter::once(Some(&self.sentence1))
            .chain([
                self.sentence2.as_ref(),
                self.sentence3.as_ref(),
                self.sentence4.as_ref(),
                self.sentence5.as_ref(),
                self.sentence6.as_ref(),
            ])
            .flatten()
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

/// One sense key per synset linked to the WOLF senses.
///
/// Synsets without sense key are left out.
pub fn wolf_sense_keys(
    wolf_senses: &str,
    pictos: &PictoTable,
    senses: &SenseTable,
    policy: MalformedPolicy,
) -> Result<Vec<String>, Error> {
    let mut keys = Vec::new();
    for wolf in wolf_senses.split('_') {
        for offset in pictos.wolf_offsets(wolf) {
            let key = policy.apply(resolve_first(offset, senses))?;
            if !key.is_empty() {
                keys.push(key);
            }
        }
    }
    Ok(keys)
}

/// Annotate the tokens of `sentence` whose lemma is `word`.
pub fn annotate_sentence<T: Tagger + ?Sized>(
    tagger: &T,
    sentence: &str,
    word: &str,
    ids: &[u64],
    keys: &[String],
) -> (TokenPictos, TokenSenses) {
    let mut pictos = Vec::new();
    let mut senses = Vec::new();
    for token in tagger.tag(sentence) {
        if token.lemma.trim().is_empty() || token.lemma == "'" {
            continue;
        }
        if token.lemma == word {
            pictos.push(ids.to_vec());
            senses.push(keys.to_vec());
        } else {
            pictos.push(Vec::new());
            senses.push(Vec::new());
        }
    }
    (pictos, senses)
}

pub fn build_rows<T: Tagger + ?Sized>(
    rows: &[PolysemousRow],
    pictos: &PictoTable,
    senses: &SenseTable,
    tagger: &T,
    policy: MalformedPolicy,
) -> Result<Vec<SentenceRow>, Error> {
    let mut out = Vec::new();
    for row in rows {
        let keys = wolf_sense_keys(&row.wolf_senses, pictos, senses, policy)?;
        let ids: Vec<u64> = parse_list(&row.picto_ids)?;
        debug!("{}: pictos {:?}, senses {:?}", row.word, ids, keys);

        for sentence in row.sentences() {
            let (p, s) = annotate_sentence(tagger, sentence, &row.word, &ids, &keys);
            out.push(SentenceRow::new(sentence, &p, &s)?);
        }
    }
    Ok(out)
}

pub fn create_corpus<T: Tagger + ?Sized>(
    src: &Path,
    picto_table: &Path,
    wn31: &Path,
    dst: &Path,
    tagger: &T,
    policy: MalformedPolicy,
) -> Result<(), Error> {
    let rows: Vec<PolysemousRow> = read_records(src, TAB)?;
    let pictos = PictoTable::from_path(picto_table)?;
    let senses = SenseTable::from_path(wn31)?;
    let out = build_rows(&rows, &pictos, &senses, tagger, policy)?;
    write_records(dst, TAB, &out)?;
    info!(
        "wrote {} sentences for {} polysemous words to {:?}",
        out.len(),
        rows.len(),
        dst
    );
    Ok(())
}
