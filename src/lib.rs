/*! # picto-wsd

Conversion tools for speech/text to pictogram corpora annotated with WordNet 3.1 sense keys.

Pictograms come from [ARASAAC](https://arasaac.org), either through its API ([picto::ArasaacClient])
or through the WOLF aligned picto table ([picto::PictoTable]).
Their synset references are turned into sense keys by [sense::resolve] against `index.sense`.

```no_run
use std::path::Path;
use picto_wsd::sense::{resolve, SenseTable};

let table = SenseTable::from_path(Path::new("index.sense")).unwrap();
for key in resolve("02124272-n", &table).unwrap() {
    println!("{}", key);
}
```
!*/
pub mod error;
pub mod io;
pub mod picto;
pub mod processing;
pub mod sense;
pub mod tagger;
