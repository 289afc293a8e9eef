/*! Tokenization and lemmatization

Statistical taggers are external collaborators; they plug in through [Tagger].
[RuleTagger] is the default implementation: it splits on unicode word boundaries,
separates French elided particles (`qu'il` → `qu'`, `il`) and lowercases lemmas.
It tags punctuation as `PUNCT` and anything else as `X`.
!*/
use lazy_static::lazy_static;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    /// Characters dropped from lemmas before querying pictograms.
    static ref IGNORED_CHARS: Regex =
        Regex::new(r#"[,?.!\-;:"“%‘”\n_'…\[\]&()*/]"#).unwrap();
}

/// Leading particles that lost their apostrophe.
const PARTICLES: [&str; 8] = ["qu ", "c ", "d ", "n ", "j ", "l ", "s ", "t "];

/// In-sentence particles that lost their apostrophe.
const REPLACEMENTS: [(&str, &str); 9] = [
    (" qu ", " qu'"),
    (" c ", " c'"),
    (" d ", " d'"),
    (" n ", " n'"),
    (" hui ", "'hui "),
    (" j ", " j'"),
    (" l ", " l'"),
    (" s ", " s'"),
    (" t ", " t'"),
];

pub const PUNCT: &str = "PUNCT";
pub const UNKNOWN_POS: &str = "X";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub pos: String,
}

impl Token {
    pub fn is_punct(&self) -> bool {
        self.pos == PUNCT
    }
}

pub trait Tagger {
    fn tag(&self, text: &str) -> Vec<Token>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTagger;

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '’'
}

impl RuleTagger {
    /// Split a word after each apostrophe, keeping the apostrophe on the left part.
    fn split_elisions(word: &str) -> Vec<&str> {
        let mut parts = Vec::new();
        let mut start = 0;
        for (idx, c) in word.char_indices() {
            if is_apostrophe(c) {
                let end = idx + c.len_utf8();
                parts.push(&word[start..end]);
                start = end;
            }
        }
        if start < word.len() {
            parts.push(&word[start..]);
        }
        parts
    }
}

impl Tagger for RuleTagger {
    fn tag(&self, text: &str) -> Vec<Token> {
        text.split_word_bounds()
            .filter(|w| !w.trim().is_empty())
            .flat_map(Self::split_elisions)
            .map(|w| {
                let is_word = w.chars().any(char::is_alphanumeric)
                    && w.chars().all(|c| c.is_alphanumeric() || is_apostrophe(c));
                let pos = if is_word { UNKNOWN_POS } else { PUNCT };
                Token {
                    text: w.to_string(),
                    lemma: w.to_lowercase(),
                    pos: pos.to_string(),
                }
            })
            .collect()
    }
}

/// Lowercase and restore the apostrophes of elided particles
/// (`qu il est l ami` → `qu'il est l'ami`).
pub fn restore_elisions(sentence: &str) -> String {
    let mut sentence = sentence.to_lowercase();
    for particle in PARTICLES {
        if sentence.starts_with(particle) {
            sentence = format!(
                "{}'{}",
                &particle[..particle.len() - 1],
                &sentence[particle.len()..]
            );
        }
    }
    for (from, to) in REPLACEMENTS {
        sentence = sentence.replace(from, to);
    }
    sentence
}

/// Remove ignored characters from a lemma.
pub fn clean_lemma(lemma: &str) -> String {
    IGNORED_CHARS.replace_all(lemma, "").into_owned()
}

/// Cleaned, non empty lemmas of the non punctuation tokens of `text`.
pub fn lemmas<T: Tagger + ?Sized>(tagger: &T, text: &str) -> Vec<String> {
    tagger
        .tag(text)
        .into_iter()
        .filter(|t| !t.is_punct())
        .map(|t| clean_lemma(&t.lemma))
        .filter(|l| !l.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn tag() {
        let tokens = RuleTagger.tag("Le chat dort.");
        assert_eq!(texts(&tokens), vec!["Le", "chat", "dort", "."]);
        assert_eq!(tokens[0].lemma, "le");
        assert_eq!(tokens[1].pos, UNKNOWN_POS);
        assert_eq!(tokens[3].pos, PUNCT);
    }

    #[test]
    fn elisions() {
        let tokens = RuleTagger.tag("qu'il aille aujourd'hui");
        assert_eq!(
            texts(&tokens),
            vec!["qu'", "il", "aille", "aujourd'", "hui"]
        );
        assert_eq!(tokens[0].pos, UNKNOWN_POS);
    }

    #[test]
    fn restore() {
        assert_eq!(restore_elisions("Qu il est l ami"), "qu'il est l'ami");
        assert_eq!(
            restore_elisions("c est aujourd hui ici"),
            "c'est aujourd'hui ici"
        );
        assert_eq!(restore_elisions("le chat"), "le chat");
    }

    #[test]
    fn restore_then_tag() {
        let tokens = RuleTagger.tag(&restore_elisions("j ai vu l ami"));
        assert_eq!(texts(&tokens), vec!["j'", "ai", "vu", "l'", "ami"]);
    }

    #[test]
    fn clean() {
        assert_eq!(clean_lemma("l'"), "l");
        assert_eq!(clean_lemma("(chat)"), "chat");
        assert_eq!(clean_lemma("..."), "");
    }

    #[test]
    fn lemmas_skip_punct() {
        assert_eq!(
            lemmas(&RuleTagger, "Bonjour, le chat !"),
            vec!["bonjour", "le", "chat"]
        );
    }
}
