/*! Recording tasks

A recording task is a JSON array of sentences to read aloud:

```json
[
    {
        "text": "le chat dort",
        "file": "",
        "source": ""
    }
]
```

The recording platform fills `file` once a sentence is recorded and stores the
task back as `metadata_help.json` in the speaker folder (see [crate::processing::s2p]).
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::io::{read_records, CorpusRow, TAB};

/// Maximum number of sentences in a task.
pub const TASK_SIZE: usize = 50;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingTask {
    pub text: String,
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub source: String,
}

impl RecordingTask {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }
}

/// Pick at most [TASK_SIZE] sentences in random order.
pub fn sample<R: Rng + ?Sized>(sentences: &[String], rng: &mut R) -> Vec<RecordingTask> {
    sentences
        .choose_multiple(rng, TASK_SIZE)
        .map(|s| RecordingTask::new(s))
        .collect()
}

/// Write tasks as JSON indented with 4 spaces. Non-ASCII characters are kept as is.
pub fn write_tasks<W: Write>(tasks: &[RecordingTask], out: W) -> Result<(), Error> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(out, formatter);
    tasks.serialize(&mut ser)?;
    Ok(())
}

/// Sample the sentences of `src` into `<dst_dir>/task_1.json`.
pub fn create_task<R: Rng + ?Sized>(
    src: &Path,
    dst_dir: &Path,
    rng: &mut R,
) -> Result<PathBuf, Error> {
    let rows: Vec<CorpusRow> = read_records(src, TAB)?;
    let sentences: Vec<String> = rows.into_iter().map(|r| r.sentence).collect();
    let tasks = sample(&sentences, rng);

    std::fs::create_dir_all(dst_dir)?;
    let dst = dst_dir.join("task_1.json");
    let mut out = BufWriter::new(File::create(&dst)?);
    write_tasks(&tasks, &mut out)?;
    out.flush()?;
    info!(
        "{} sentences out of {} written to {:?}",
        tasks.len(),
        sentences.len(),
        dst
    );
    Ok(dst)
}
