/*! Speech to picto corpus

Recordings are stored with one folder per speaker:

```text
recordings/
├── alice
│   ├── metadata_help.json
│   └── ...wav
└── bob
    ├── metadata_help.json
    └── ...wav
```

Each `metadata_help.json` is a list of [RecordingTask] with their `file` filled in.
Speakers are numbered from 1, in folder name order.
Every recorded sentence is then looked up in the picto corpus.
!*/
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::io::{read_records, write_records, CorpusRow, TAB};
use crate::processing::recording_tasks::RecordingTask;

pub const METADATA_FILE: &str = "metadata_help.json";

/// A recorded sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechRow {
    pub path: String,
    pub speaker: String,
    pub speaker_id: String,
    pub doc_name: String,
    pub sentence: String,
    pub pictos_ref_ids: String,
    pub sense_keys: String,
}

/// Speaker folders, sorted by name.
pub fn speakers(recordings: &Path) -> Result<Vec<(String, PathBuf)>, Error> {
    let mut speakers = Vec::new();
    for entry in std::fs::read_dir(recordings)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            let name = entry.file_name().to_string_lossy().into_owned();
            speakers.push((name, entry.path()));
        }
    }
    speakers.sort();
    debug!("found {} speakers in {:?}", speakers.len(), recordings);
    Ok(speakers)
}

/// Read the recording metadata of a speaker folder.
pub fn recordings(speaker_dir: &Path) -> Result<Vec<RecordingTask>, Error> {
    let reader = BufReader::new(File::open(speaker_dir.join(METADATA_FILE))?);
    Ok(serde_json::from_reader(reader)?)
}

/// Index corpus rows by sentence. The first row of a sentence wins.
fn by_sentence(corpus: &[CorpusRow]) -> HashMap<&str, &CorpusRow> {
    let mut index = HashMap::with_capacity(corpus.len());
    for row in corpus {
        index.entry(row.sentence.as_str()).or_insert(row);
    }
    index
}

/// Align the recordings of each speaker with the corpus.
///
/// Fails if a recorded sentence is not in the corpus.
pub fn align(
    speakers: &[(String, Vec<RecordingTask>)],
    corpus: &[CorpusRow],
) -> Result<Vec<SpeechRow>, Error> {
    let index = by_sentence(corpus);
    let mut rows = Vec::new();
    for (speaker_nb, (speaker, recorded)) in speakers.iter().enumerate() {
        for rec in recorded {
            let row = index.get(rec.text.as_str()).ok_or_else(|| {
                Error::Custom(format!(
                    "sentence {:?} recorded by {} is not in the corpus",
                    rec.text, speaker
                ))
            })?;
            rows.push(SpeechRow {
                path: rec.file.clone(),
                speaker: speaker.clone(),
                speaker_id: (speaker_nb + 1).to_string(),
                doc_name: row.doc_name.clone(),
                sentence: rec.text.clone(),
                pictos_ref_ids: row.pictos_ref_ids.clone(),
                sense_keys: row.sense_keys.clone(),
            });
        }
    }
    Ok(rows)
}

pub fn create_corpus(recordings_dir: &Path, corpus: &Path, dst: &Path) -> Result<(), Error> {
    let corpus: Vec<CorpusRow> = read_records(corpus, TAB)?;
    let speakers = speakers(recordings_dir)?
        .into_iter()
        .map(|(name, dir)| -> Result<_, Error> { Ok((name, recordings(&dir)?)) })
        .collect::<Result<Vec<_>, Error>>()?;

    let rows = align(&speakers, &corpus)?;
    write_records(dst, TAB, &rows)?;
    info!(
        "wrote {} recordings of {} speakers to {:?}",
        rows.len(),
        speakers.len(),
        dst
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<CorpusRow> {
        vec![
            CorpusRow {
                doc_name: "emails".to_string(),
                sentence: "le chat dort".to_string(),
                pictos_ref_ids: "[[],[2349],[]]".to_string(),
                sense_keys: r#"[[],["chat%1:05:00::"],[]]"#.to_string(),
            },
            CorpusRow {
                doc_name: "emails".to_string(),
                sentence: "la maison".to_string(),
                pictos_ref_ids: "[[],[3250]]".to_string(),
                sense_keys: "[]".to_string(),
            },
        ]
    }

    fn recorded(text: &str, file: &str) -> RecordingTask {
        RecordingTask {
            text: text.to_string(),
            file: file.to_string(),
            source: String::new(),
        }
    }

    #[test]
    fn speaker_ids() {
        let speakers = vec![
            ("alice".to_string(), vec![recorded("le chat dort", "a1.wav")]),
            (
                "bob".to_string(),
                vec![recorded("la maison", "b1.wav"), recorded("le chat dort", "b2.wav")],
            ),
        ];
        let rows = align(&speakers, &corpus()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].speaker_id, "1");
        assert_eq!(rows[0].pictos_ref_ids, "[[],[2349],[]]");
        assert_eq!(rows[2].speaker, "bob");
        assert_eq!(rows[2].speaker_id, "2");
        assert_eq!(rows[2].path, "b2.wav");
        assert_eq!(rows[2].doc_name, "emails");
    }

    #[test]
    fn unknown_sentence() {
        let speakers = vec![("alice".to_string(), vec![recorded("bonjour", "a1.wav")])];
        assert!(align(&speakers, &corpus()).is_err());
    }

    #[test]
    fn from_folders() {
        let dir = tempfile::tempdir().unwrap();
        let rec = dir.path().join("recordings");
        for (speaker, text) in [("zoe", "la maison"), ("alice", "le chat dort")] {
            std::fs::create_dir_all(rec.join(speaker)).unwrap();
            let tasks = vec![recorded(text, &format!("{}.wav", speaker))];
            std::fs::write(
                rec.join(speaker).join(METADATA_FILE),
                serde_json::to_string(&tasks).unwrap(),
            )
            .unwrap();
        }
        std::fs::write(rec.join("notes.txt"), "not a speaker").unwrap();

        let corpus_path = dir.path().join("corpus.csv");
        write_records(&corpus_path, TAB, &corpus()).unwrap();
        let dst = dir.path().join("s2p.csv");
        create_corpus(&rec, &corpus_path, &dst).unwrap();

        let rows: Vec<SpeechRow> = read_records(&dst, TAB).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].speaker, "alice");
        assert_eq!(rows[0].speaker_id, "1");
        assert_eq!(rows[1].speaker, "zoe");
        assert_eq!(rows[1].sentence, "la maison");
    }
}
