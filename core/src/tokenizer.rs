use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use unicode_normalization::UnicodeNormalization;
use std::collections::HashSet;

/// Tokens shorter than this many characters are dropped.
pub const MIN_TOKEN_CHARS: usize = 2;

lazy_static! {
    static ref RE: Regex = Regex::new(r"(?u)[\p{L}\p{N}]+").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","cannot","could",
            "did","do","does","doing","down","during",
            "each","few","for","from","further",
            "had","has","have","having","he","her","here","hers","herself","him","himself","his","how",
            "i","if","in","into","is","it","its","itself",
            "me","more","most","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","should","so","some","such",
            "than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
            "under","until","up","very",
            "was","we","were","what","when","where","which","while","who","whom","why","with","would",
            "you","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

pub fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

/// NFKC-normalize and lowercase.
pub fn normalize(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase()
}

/// Porter (English snowball) stem of a single lowercase word, reapplied until it stops changing.
///
/// A single snowball pass is not idempotent ("agreed" -> "agre" -> "agr").
pub fn stem(word: &str) -> String {
    let mut current = STEMMER.stem(word).into_owned();
    // bounded by the word length
    for _ in 0..word.len() {
        let next = STEMMER.stem(&current);
        if next == current { break; }
        current = next.into_owned();
    }
    current
}

/// Lazily split already-normalized text on non-alphanumeric boundaries and stem each token.
///
/// Tokens and stems shorter than [`MIN_TOKEN_CHARS`] are dropped. When `stop_words` is set, a token is also
/// dropped if either the word or its stem is a stop word, so stemmed output tokenizes to itself.
pub fn stems(normalized: &str, stop_words: bool) -> impl Iterator<Item = String> + '_ {
    RE.find_iter(normalized)
        .map(|m| m.as_str())
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .filter(move |token| !(stop_words && is_stopword(token)))
        .map(stem)
        .filter(move |s| s.chars().count() >= MIN_TOKEN_CHARS && !(stop_words && is_stopword(s)))
}

/// Normalize, tokenize, drop stop words, and stem a title.
pub fn tokenize(text: &str) -> Vec<String> {
    stems(&normalize(text), true).collect()
}
