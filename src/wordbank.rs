use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::IteratorRandom;

use crate::error::WordbankError;
use crate::{debug_log, info_log};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

const APP_DIR: &str = "gordle";
const DICTIONARY_FILE: &str = "dictionary.txt";

/// Where the words of the current session came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    File(PathBuf),
    Embedded,
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordSource::File(path) => write!(f, "{}", path.display()),
            WordSource::Embedded => f.write_str("built-in dictionary"),
        }
    }
}

/// A word made of letters only. Guesses and dictionary entries share this rule.
pub fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

/// Turns a dictionary line into a playable word.
///
/// Blank lines, `#` comments and entries that could never be typed as a guess
/// are skipped. Words are uppercased because guesses are uppercased before
/// they reach the game.
pub fn normalize_word(line: &str) -> Option<String> {
    let word = line.trim();
    if word.starts_with('#') {
        return None;
    }
    if !is_valid_word(word) {
        if !word.is_empty() {
            debug_log!("normalize_word() - skipping non-letter entry {:?}", word);
        }
        return None;
    }
    Some(word.to_uppercase())
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize_word).collect()
}

pub fn load_wordbank_from_reader<B: BufRead>(reader: B) -> Result<Vec<String>, WordbankError> {
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize_word(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordbankError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| WordbankError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_wordbank_from_reader(BufReader::new(file))
}

/// `<data dir>/gordle/dictionary.txt`, if the platform has a data directory.
pub fn default_dictionary_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join(DICTIONARY_FILE))
}

/// Loads the dictionary for a session.
///
/// An explicit path must be readable. Without one, the default dictionary
/// path is used when it exists, and the built-in list otherwise.
pub fn resolve_wordbank(explicit: Option<&Path>) -> Result<(Vec<String>, WordSource), WordbankError> {
    if let Some(path) = explicit {
        let words = load_wordbank_from_file(path)?;
        info_log!("Loaded {} words from {}", words.len(), path.display());
        return Ok((words, WordSource::File(path.to_path_buf())));
    }

    if let Some(path) = default_dictionary_path()
        && path.is_file()
    {
        let words = load_wordbank_from_file(&path)?;
        info_log!("Loaded {} words from default path {}", words.len(), path.display());
        return Ok((words, WordSource::File(path)));
    }

    debug_log!("No dictionary file found, using the built-in list");
    Ok((load_wordbank_from_str(EMBEDDED_WORDBANK), WordSource::Embedded))
}

/// Picks a word of exactly `length` characters, uniformly among the candidates.
///
/// Length is counted in `char`s, so multi-byte letters count once.
pub fn pick_word<I, S, R>(candidates: I, length: usize, rng: &mut R) -> Result<String, WordbankError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    candidates
        .into_iter()
        .filter(|word| word.as_ref().chars().count() == length)
        .choose(rng)
        .map(|word| word.as_ref().to_owned())
        .ok_or(WordbankError::NoWordFound { length })
}

/// Reads a whole dictionary from `reader` and picks a word from it.
pub fn pick_word_from_reader<B, R>(reader: B, length: usize, rng: &mut R) -> Result<String, WordbankError>
where
    B: BufRead,
    R: Rng + ?Sized,
{
    let words = load_wordbank_from_reader(reader)?;
    pick_word(words, length, rng)
}
