//! # picto-wsd
//!
//! Conversion tools for picto corpora annotated with WordNet 3.1 sense keys.
//!
//! ## Getting started
//!
//! ```sh
//! picto-wsd 0.1.0
//! picto corpora and WordNet sense keys.
//!
//! USAGE:
//!     picto-wsd <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     download            Download the whole pictogram catalog
//!     eval-corpus         Build a picto corpus from <seg> source and reference files
//!     fetch-keywords      Fetch metadata and first keyword of pictogram images
//!     lemmas-to-pictos    Lemmatize sentences and find their candidate pictograms
//!     picto-index         Create InteraactionPicto index files
//!     polysemous          Build a picto corpus from polysemous word sentences
//!     recording-tasks     Sample sentences to record
//!     resolve             Print the sense keys of synset references
//!     s2p                 Build a speech to picto corpus from recordings
//!     sense-keys          Add sense keys to a picto corpus
//!     stats               Print picto corpus statistics
//!     ufsac               Convert a picto corpus to UFSAC XML
//! ```
//!
//! Logging is configured with `RUST_LOG` (`RUST_LOG=info picto-wsd ...`).
use picto_wsd::error::Error;
use picto_wsd::processing::{
    eval_corpus, fetch, lemmas, picto_index, polysemous, recording_tasks, s2p, sense_keys, stats,
    ufsac,
};
use picto_wsd::sense::{resolve, resolve_first, SenseTable};
use picto_wsd::tagger::RuleTagger;
use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::PictoWsd::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::PictoWsd::Resolve(r) => {
            let table = SenseTable::from_path(&r.wn31)?;
            for reference in &r.references {
                if r.first {
                    println!("{}", resolve_first(reference, &table)?);
                } else {
                    println!("{}", resolve(reference, &table)?.join(" "));
                }
            }
        }

        cli::PictoWsd::SenseKeys(s) => {
            let client = s.api.client();
            sense_keys::annotate(&s.src, &s.wn31, &s.dst, &client, s.malformed.policy())?;
        }

        cli::PictoWsd::EvalCorpus(e) => {
            eval_corpus::create_corpus(
                &e.source,
                &e.reference,
                &e.picto_table,
                &e.wn31,
                &e.dst,
                e.malformed.policy(),
            )?;
        }

        cli::PictoWsd::Polysemous(p) => {
            polysemous::create_corpus(
                &p.src,
                &p.picto_table,
                &p.wn31,
                &p.dst,
                &RuleTagger,
                p.malformed.policy(),
            )?;
        }

        cli::PictoWsd::Ufsac(u) => {
            let dst = ufsac::convert(&u.src, &u.dst, &RuleTagger, u.per_doc)?;
            info!("UFSAC corpus written to {:?}", dst);
        }

        cli::PictoWsd::S2p(s) => {
            s2p::create_corpus(&s.recordings, &s.corpus, &s.dst)?;
        }

        cli::PictoWsd::RecordingTasks(t) => {
            match t.seed {
                Some(seed) => {
                    recording_tasks::create_task(&t.src, &t.dst, &mut StdRng::seed_from_u64(seed))?
                }
                None => recording_tasks::create_task(&t.src, &t.dst, &mut rand::thread_rng())?,
            };
        }

        cli::PictoWsd::PictoIndex(index) => match index.kind {
            cli::IndexKind::Names { pictos, dst } => picto_index::create_names(&pictos, &dst)?,
            cli::IndexKind::Synsets {
                pictos,
                wn31,
                dst,
                malformed,
            } => picto_index::create_synsets(&pictos, &wn31, &dst, malformed.policy())?,
            cli::IndexKind::Lemmas {
                picto_table,
                wn31,
                dst,
                malformed,
            } => picto_index::create_lemmas(&picto_table, &wn31, &dst, malformed.policy())?,
        },

        cli::PictoWsd::FetchKeywords(f) => {
            let client = f.api.client();
            fetch::fetch_keywords(&client, &f.png, &f.json, &f.dst)?;
        }

        cli::PictoWsd::Download(d) => {
            let client = d.api.client();
            let images = fetch::download_all(&client, &d.dst)?;
            info!("downloaded {} images to {:?}", images.len(), d.dst);
        }

        cli::PictoWsd::LemmasToPictos(l) => {
            let client = l.api.client();
            lemmas::lemmas_to_pictos(&client, &RuleTagger, &l.src, &l.images, &l.dst)?;
        }

        cli::PictoWsd::Stats(s) => {
            let stats = stats::corpus_stats(&s.src, &RuleTagger)?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    };
    Ok(())
}
