/*! Conversion tools

Each module is a batch job that loads its reference data, goes through the input records and
writes its output. Jobs that need pictogram metadata take a [crate::picto::PictoCatalog], jobs that
need tokens take a [crate::tagger::Tagger].

| module | input | output |
|--------|-------|--------|
| [sense_keys] | picto corpus | picto corpus with sense keys |
| [eval_corpus] | `<seg>` source and reference files | picto corpus |
| [polysemous] | polysemous word sentences | picto corpus |
| [ufsac] | picto corpus with sense keys | UFSAC XML |
| [s2p] | recordings and picto corpus | speech to picto corpus |
| [recording_tasks] | picto corpus | recording task |
| [picto_index] | pictogram metadata, picto table | platform indexes |
| [fetch] | pictogram ids | pictogram metadata and images |
| [lemmas] | sentences | lemmas and candidate pictograms |
| [stats] | picto corpus | statistics |
!*/
pub mod eval_corpus;
pub mod fetch;
pub mod lemmas;
pub mod picto_index;
pub mod polysemous;
pub mod recording_tasks;
pub mod s2p;
pub mod sense_keys;
pub mod stats;
pub mod ufsac;

#[cfg(test)]
pub(crate) mod testutils;
