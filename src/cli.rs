//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use picto_wsd::picto::ArasaacClient;
use picto_wsd::sense::MalformedPolicy;
use structopt::StructOpt;
use url::Url;

#[derive(Debug, StructOpt)]
#[structopt(name = "picto-wsd", about = "picto corpora and WordNet sense keys.")]
/// Holds every command that is callable by the `picto-wsd` command.
pub enum PictoWsd {
    #[structopt(about = "Print the sense keys of synset references")]
    Resolve(Resolve),
    #[structopt(about = "Add sense keys to a picto corpus")]
    SenseKeys(SenseKeys),
    #[structopt(about = "Build a picto corpus from <seg> source and reference files")]
    EvalCorpus(EvalCorpus),
    #[structopt(about = "Build a picto corpus from polysemous word sentences")]
    Polysemous(Polysemous),
    #[structopt(about = "Convert a picto corpus to UFSAC XML")]
    Ufsac(Ufsac),
    #[structopt(about = "Build a speech to picto corpus from recordings")]
    S2p(S2p),
    #[structopt(about = "Sample sentences to record")]
    RecordingTasks(RecordingTasks),
    #[structopt(about = "Create InteraactionPicto index files")]
    PictoIndex(PictoIndex),
    #[structopt(about = "Fetch metadata and first keyword of pictogram images")]
    FetchKeywords(FetchKeywords),
    #[structopt(about = "Download the whole pictogram catalog")]
    Download(Download),
    #[structopt(about = "Lemmatize sentences and find their candidate pictograms")]
    LemmasToPictos(LemmasToPictos),
    #[structopt(about = "Print picto corpus statistics")]
    Stats(Stats),
}

#[derive(Debug, StructOpt)]
/// ARASAAC endpoints.
pub struct ApiOpts {
    #[structopt(
        long = "api-url",
        env = "ARASAAC_API_URL",
        default_value = "https://api.arasaac.org/api",
        help = "ARASAAC API base url"
    )]
    pub api_url: Url,
    #[structopt(
        long = "static-url",
        env = "ARASAAC_STATIC_URL",
        default_value = "https://static.arasaac.org",
        help = "ARASAAC images base url"
    )]
    pub static_url: Url,
    #[structopt(long = "lang", default_value = "fr", help = "pictogram language")]
    pub lang: String,
}

impl ApiOpts {
    pub fn client(&self) -> ArasaacClient {
        ArasaacClient::new(self.api_url.clone(), self.static_url.clone(), &self.lang)
    }
}

#[derive(Debug, StructOpt)]
pub struct Malformed {
    #[structopt(
        long = "skip-malformed",
        help = "warn and skip unparsable synset references instead of failing"
    )]
    pub skip_malformed: bool,
}

impl Malformed {
    pub fn policy(&self) -> MalformedPolicy {
        if self.skip_malformed {
            MalformedPolicy::Skip
        } else {
            MalformedPolicy::Abort
        }
    }
}

#[derive(Debug, StructOpt)]
/// Resolve command and parameters.
///
/// ```sh
/// picto-wsd resolve --wn31 index.sense 02124272-n 03549540-n
/// chat%1:05:00:: chat%1:18:00::
/// maison%1:06:00::
/// ```
pub struct Resolve {
    #[structopt(parse(from_os_str), long = "wn31", help = "path to index.sense")]
    pub wn31: PathBuf,
    #[structopt(long = "first", help = "only print the first sense key")]
    pub first: bool,
    #[structopt(required = true, help = "synset references (02124272-n)")]
    pub references: Vec<String>,
}

#[derive(Debug, StructOpt)]
pub struct SenseKeys {
    #[structopt(parse(from_os_str), help = "source corpus (tsv)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "path to index.sense")]
    pub wn31: PathBuf,
    #[structopt(parse(from_os_str), help = "destination corpus (tsv)")]
    pub dst: PathBuf,
    #[structopt(flatten)]
    pub api: ApiOpts,
    #[structopt(flatten)]
    pub malformed: Malformed,
}

#[derive(Debug, StructOpt)]
pub struct EvalCorpus {
    #[structopt(parse(from_os_str), help = "source <seg> file")]
    pub source: PathBuf,
    #[structopt(parse(from_os_str), help = "reference <seg> file (lemmas)")]
    pub reference: PathBuf,
    #[structopt(parse(from_os_str), help = "picto table (csv)")]
    pub picto_table: PathBuf,
    #[structopt(parse(from_os_str), help = "path to index.sense")]
    pub wn31: PathBuf,
    #[structopt(parse(from_os_str), help = "destination corpus (tsv)")]
    pub dst: PathBuf,
    #[structopt(flatten)]
    pub malformed: Malformed,
}

#[derive(Debug, StructOpt)]
pub struct Polysemous {
    #[structopt(parse(from_os_str), help = "polysemous word sentences (tsv)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "picto table (csv)")]
    pub picto_table: PathBuf,
    #[structopt(parse(from_os_str), help = "path to index.sense")]
    pub wn31: PathBuf,
    #[structopt(parse(from_os_str), help = "destination corpus (tsv)")]
    pub dst: PathBuf,
    #[structopt(flatten)]
    pub malformed: Malformed,
}

#[derive(Debug, StructOpt)]
pub struct Ufsac {
    #[structopt(parse(from_os_str), help = "corpus with sense keys (tsv)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder")]
    pub dst: PathBuf,
    #[structopt(long = "per-doc", help = "one document per doc_name")]
    pub per_doc: bool,
}

#[derive(Debug, StructOpt)]
pub struct S2p {
    #[structopt(parse(from_os_str), help = "recordings folder (one folder per speaker)")]
    pub recordings: PathBuf,
    #[structopt(parse(from_os_str), help = "recorded corpus (tsv)")]
    pub corpus: PathBuf,
    #[structopt(parse(from_os_str), help = "destination corpus (tsv)")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct RecordingTasks {
    #[structopt(parse(from_os_str), help = "corpus (tsv)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder")]
    pub dst: PathBuf,
    #[structopt(long = "seed", help = "random seed. Default is random.")]
    pub seed: Option<u64>,
}

#[derive(Debug, StructOpt)]
pub struct PictoIndex {
    #[structopt(subcommand)]
    pub kind: IndexKind,
}

#[derive(Debug, StructOpt)]
pub enum IndexKind {
    #[structopt(about = "names.json from pictogram json files")]
    Names {
        #[structopt(parse(from_os_str), help = "pictogram json folder")]
        pictos: PathBuf,
        #[structopt(parse(from_os_str), help = "destination folder")]
        dst: PathBuf,
    },
    #[structopt(about = "synsets.json from pictogram json files")]
    Synsets {
        #[structopt(parse(from_os_str), help = "pictogram json folder")]
        pictos: PathBuf,
        #[structopt(parse(from_os_str), help = "path to index.sense")]
        wn31: PathBuf,
        #[structopt(parse(from_os_str), help = "destination folder")]
        dst: PathBuf,
        #[structopt(flatten)]
        malformed: Malformed,
    },
    #[structopt(about = "synsets_fr.json and names2.json from the picto table")]
    Lemmas {
        #[structopt(parse(from_os_str), help = "picto table (csv)")]
        picto_table: PathBuf,
        #[structopt(parse(from_os_str), help = "path to index.sense")]
        wn31: PathBuf,
        #[structopt(parse(from_os_str), help = "destination folder")]
        dst: PathBuf,
        #[structopt(flatten)]
        malformed: Malformed,
    },
}

#[derive(Debug, StructOpt)]
pub struct FetchKeywords {
    #[structopt(parse(from_os_str), help = "folder of <id>.png images")]
    pub png: PathBuf,
    #[structopt(parse(from_os_str), help = "pictogram json destination folder")]
    pub json: PathBuf,
    #[structopt(parse(from_os_str), help = "destination keywords file (tsv)")]
    pub dst: PathBuf,
    #[structopt(flatten)]
    pub api: ApiOpts,
}

#[derive(Debug, StructOpt)]
pub struct Download {
    #[structopt(parse(from_os_str), help = "download destination")]
    pub dst: PathBuf,
    #[structopt(flatten)]
    pub api: ApiOpts,
}

#[derive(Debug, StructOpt)]
pub struct LemmasToPictos {
    #[structopt(parse(from_os_str), help = "sentences (csv)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "image destination folder")]
    pub images: PathBuf,
    #[structopt(parse(from_os_str), help = "destination file (csv)")]
    pub dst: PathBuf,
    #[structopt(flatten)]
    pub api: ApiOpts,
}

#[derive(Debug, StructOpt)]
pub struct Stats {
    #[structopt(parse(from_os_str), help = "corpus (tsv)")]
    pub src: PathBuf,
}
