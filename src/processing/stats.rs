/*! Corpus statistics

Each token of a sentence is paired with the first picto id of the matching `pictos_ref_ids`
entry (tokens past the end of the list have none).
!*/
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;

use log::{debug, info, warn};
use serde::Serialize;

use crate::error::Error;
use crate::io::{read_records, CorpusRow, TAB};
use crate::tagger::Tagger;

/// Part of speech tags with a coverage entry.
pub const POS_TAGS: [&str; 8] = ["NOUN", "VERB", "AUX", "DET", "CCONJ", "ADJ", "ADP", "PRON"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coverage {
    pub with_picto: usize,
    pub total: usize,
}

impl Coverage {
    fn add(&mut self, has_picto: bool) {
        self.total += 1;
        if has_picto {
            self.with_picto += 1;
        }
    }

    /// Share of words with a pictogram, `None` without words.
    pub fn share(&self) -> Option<f64> {
        ratio(self.with_picto, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusStats {
    pub sentences: usize,
    pub total_words: usize,
    pub vocabulary: usize,
    pub words_with_picto: usize,
    pub picto_share: Option<f64>,
    pub average_words_per_sentence: Option<f64>,
    /// Left empty when the tagger gave none of the [POS_TAGS].
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub pos_coverage: BTreeMap<String, PosStats>,
    pub mwes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PosStats {
    pub with_picto: usize,
    pub total: usize,
    pub share: Option<f64>,
}

impl From<&Coverage> for PosStats {
    fn from(c: &Coverage) -> Self {
        Self {
            with_picto: c.with_picto,
            total: c.total,
            share: c.share(),
        }
    }
}

fn ratio(num: usize, den: usize) -> Option<f64> {
    if den == 0 {
        None
    } else {
        Some(num as f64 / den as f64)
    }
}

/// A token with its lemma, part of speech and first picto id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPicto {
    pub lemma: String,
    pub pos: String,
    pub picto: Option<u64>,
}

pub fn token_pictos<T: Tagger + ?Sized>(
    tagger: &T,
    row: &CorpusRow,
) -> Result<Vec<TokenPicto>, Error> {
    let pictos = row.pictos()?;
    let tokens = tagger.tag(&row.sentence);
    if tokens.len() != pictos.len() {
        debug!(
            "{:?}: {} tokens for {} picto annotations",
            row.sentence,
            tokens.len(),
            pictos.len()
        );
    }
    Ok(tokens
        .into_iter()
        .enumerate()
        .map(|(i, t)| TokenPicto {
            lemma: t.lemma,
            pos: t.pos,
            picto: pictos.get(i).and_then(|p| p.first().copied()),
        })
        .collect())
}

/// Runs of at least two consecutive tokens sharing a picto, as space separated lemmas.
pub fn mwes(sentence: &[TokenPicto]) -> Vec<String> {
    let mut found = Vec::new();
    let mut start = 0;
    while start < sentence.len() {
        let mut end = start + 1;
        if let Some(picto) = sentence[start].picto {
            while end < sentence.len() && sentence[end].picto == Some(picto) {
                end += 1;
            }
            if end - start >= 2 {
                let lemmas: Vec<&str> = sentence[start..end]
                    .iter()
                    .map(|t| t.lemma.as_str())
                    .collect();
                found.push(lemmas.join(" "));
            }
        }
        start = end;
    }
    found
}

pub fn compute(sentences: &[Vec<TokenPicto>]) -> CorpusStats {
    let mut vocabulary = HashSet::new();
    let mut all = Coverage::default();
    let mut pos: BTreeMap<&str, Coverage> =
        POS_TAGS.iter().map(|p| (*p, Coverage::default())).collect();
    let mut mwe_set = BTreeSet::new();

    for sentence in sentences {
        for token in sentence {
            vocabulary.insert(token.lemma.as_str());
            all.add(token.picto.is_some());
            if let Some(coverage) = pos.get_mut(token.pos.as_str()) {
                coverage.add(token.picto.is_some());
            }
        }
        mwe_set.extend(mwes(sentence));
    }

    let tagged = pos.values().any(|c| c.total > 0);
    if !tagged {
        debug!("no {:?} tags, leaving pos coverage out", POS_TAGS);
    }

    CorpusStats {
        sentences: sentences.len(),
        total_words: all.total,
        vocabulary: vocabulary.len(),
        words_with_picto: all.with_picto,
        picto_share: all.share(),
        average_words_per_sentence: ratio(all.total, sentences.len()),
        pos_coverage: if tagged {
            pos.iter()
                .map(|(tag, c)| (tag.to_string(), PosStats::from(c)))
                .collect()
        } else {
            BTreeMap::new()
        },
        mwes: mwe_set.into_iter().collect(),
    }
}

pub fn corpus_stats<T: Tagger + ?Sized>(src: &Path, tagger: &T) -> Result<CorpusStats, Error> {
    let rows: Vec<CorpusRow> = read_records(src, TAB)?;
    let sentences = rows
        .iter()
        .map(|row| token_pictos(tagger, row))
        .collect::<Result<Vec<_>, Error>>()?;
    let stats = compute(&sentences);
    if stats.total_words == 0 {
        warn!("no words in {:?}", src);
    }
    info!(
        "{} sentences, {} words, {} with a pictogram",
        stats.sentences, stats.total_words, stats.words_with_picto
    );
    Ok(stats)
}
