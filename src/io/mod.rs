/*! Corpus readers and writers

- [corpus]: tab/comma separated records with list literal columns.
- [seg]: `<seg>` segmented evaluation sets.
- [ufsac]: UFSAC XML output.
!*/
pub mod corpus;
pub mod seg;
pub mod ufsac;

pub use corpus::{
    parse_list, read_records, to_list, write_records, CorpusFile, CorpusRow, SentenceRow, COMMA,
    TAB,
};
