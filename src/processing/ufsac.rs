/*! Picto corpus to UFSAC conversion

Sentences are preprocessed ([restore_elisions]) and tokenized, then token `i` gets the sense keys
at position `i` of the `sense_keys` column. Only annotated words get an id.
!*/
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::Error;
use crate::io::ufsac::{write_corpus, Document, Sentence, Word};
use crate::io::{read_records, CorpusRow, TAB};
use crate::tagger::{restore_elisions, Tagger};

/// Name of the document when rows are not grouped by `doc_name`.
pub const SINGLE_DOC: &str = "doc1";

/// Build the UFSAC sentence of row number `index`.
pub fn sentence<T: Tagger + ?Sized>(
    tagger: &T,
    doc_name: &str,
    index: usize,
    row: &CorpusRow,
) -> Result<Sentence, Error> {
    let id = format!("{}.s{}", doc_name, index);
    let senses = row.senses()?;
    let tokens = tagger.tag(&restore_elisions(&row.sentence));
    if tokens.len() != senses.len() {
        warn!(
            "{}: {} tokens for {} sense annotations",
            id,
            tokens.len(),
            senses.len()
        );
    }

    let mut word_nb = 1;
    let words = tokens
        .into_iter()
        .enumerate()
        .map(|(i, token)| {
            let mut word = Word {
                surface_form: token.text,
                lemma: token.lemma,
                pos: token.pos,
                wn30_key: None,
                id: None,
            };
            if let Some(keys) = senses.get(i).filter(|k| !k.is_empty()) {
                word.wn30_key = Some(keys.join(";"));
                word.id = Some(format!("{}.t{}", id, word_nb));
                word_nb += 1;
            }
            word
        })
        .collect();

    Ok(Sentence { id, words })
}

/// Group rows by `doc_name` (documents sorted by name),
/// or put everything into [SINGLE_DOC] if `per_doc` is false.
///
/// Sentence ids use the row number in the whole file.
pub fn documents<T: Tagger + ?Sized>(
    rows: &[CorpusRow],
    tagger: &T,
    per_doc: bool,
) -> Result<Vec<Document>, Error> {
    let mut groups: BTreeMap<&str, Vec<(usize, &CorpusRow)>> = BTreeMap::new();
    for (index, row) in rows.iter().enumerate() {
        let name = if per_doc {
            row.doc_name.as_str()
        } else {
            SINGLE_DOC
        };
        groups.entry(name).or_default().push((index, row));
    }

    groups
        .into_iter()
        .map(|(name, rows)| -> Result<Document, Error> {
            let sentences = rows
                .into_iter()
                .map(|(index, row)| sentence(tagger, name, index, row))
                .collect::<Result<Vec<Sentence>, Error>>()?;
            Ok(Document {
                id: name.to_string(),
                sentences,
            })
        })
        .collect()
}

/// `<dst_dir>/<csv file stem>.xml`
pub fn output_path(csv_file: &Path, dst_dir: &Path) -> Result<PathBuf, Error> {
    let stem = csv_file
        .file_stem()
        .ok_or_else(|| Error::Custom(format!("{:?} has no file name", csv_file)))?;
    let mut dst = dst_dir.to_path_buf();
    dst.push(stem);
    dst.set_extension("xml");
    Ok(dst)
}

/// Convert the corpus at `csv_file` and write it into `dst_dir`. Returns the path of the xml file.
pub fn convert<T: Tagger + ?Sized>(
    csv_file: &Path,
    dst_dir: &Path,
    tagger: &T,
    per_doc: bool,
) -> Result<PathBuf, Error> {
    let rows: Vec<CorpusRow> = read_records(csv_file, TAB)?;
    let docs = documents(&rows, tagger, per_doc)?;

    std::fs::create_dir_all(dst_dir)?;
    let dst = output_path(csv_file, dst_dir)?;
    let out = BufWriter::new(File::create(&dst)?);
    write_corpus(&docs, out)?;
    info!(
        "wrote {} sentences in {} documents to {:?}",
        rows.len(),
        docs.len(),
        dst
    );
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::RuleTagger;

    fn row(doc: &str, sentence: &str, senses: &str) -> CorpusRow {
        CorpusRow {
            doc_name: doc.to_string(),
            sentence: sentence.to_string(),
            sense_keys: senses.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn annotated_words_get_ids() {
        let r = row(
            "emails",
            "j ai un chat",
            r#"[[], [], [], ["chat%1:05:00::", "chat%1:18:00::"]]"#,
        );
        let s = sentence(&RuleTagger, "emails", 3, &r).unwrap();
        assert_eq!(s.id, "emails.s3");
        assert_eq!(s.words.len(), 4);
        assert_eq!(s.words[0].surface_form, "j'");
        assert_eq!(s.words[0].wn30_key, None);
        assert_eq!(
            s.words[3].wn30_key.as_deref(),
            Some("chat%1:05:00::;chat%1:18:00::")
        );
        assert_eq!(s.words[3].id.as_deref(), Some("emails.s3.t1"));
    }

    #[test]
    fn fewer_annotations_than_tokens() {
        let r = row("d", "le chat dort", r#"[["le%1:01:00::"]]"#);
        let s = sentence(&RuleTagger, "d", 0, &r).unwrap();
        assert_eq!(s.words.len(), 3);
        assert_eq!(s.words[0].id.as_deref(), Some("d.s0.t1"));
        assert!(s.words[2].wn30_key.is_none());
    }

    #[test]
    fn grouping() {
        let rows = vec![
            row("b", "un", "[[]]"),
            row("a", "deux", "[[]]"),
            row("b", "trois", "[[]]"),
        ];
        let docs = documents(&rows, &RuleTagger, true).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, "a");
        assert_eq!(docs[0].sentences[0].id, "a.s1");
        assert_eq!(docs[1].sentences[1].id, "b.s2");

        let docs = documents(&rows, &RuleTagger, false).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, SINGLE_DOC);
        assert_eq!(docs[0].sentences.len(), 3);
    }

    #[test]
    fn output() {
        assert_eq!(
            output_path(Path::new("data/corpus.csv"), Path::new("out")).unwrap(),
            PathBuf::from("out/corpus.xml")
        );
    }

    #[test]
    fn convert_file() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("corpus.csv");
        std::fs::write(
            &src,
            "doc_name\tsentence\tsense_keys\nemails\tle chat\t\"[[], ['chat%1:05:00::']]\"\n",
        )
        .unwrap();
        let dst = convert(&src, &dir.path().join("xml"), &RuleTagger, true).unwrap();
        let xml = std::fs::read_to_string(dst).unwrap();
        assert!(xml.contains(r#"<document id="emails">"#));
        assert!(xml.contains(r#"wn30_key="chat%1:05:00::" id="emails.s0.t1""#));
    }
}
