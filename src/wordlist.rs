// This file is part of passgen.
//
// Copyright (c) 2025  The passgen developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use log::{info, warn};

/// Environment variable naming the wordlist file used by [`default_provider`].
pub const WORDLIST_ENV: &str = "PASSGEN_WORDLIST";

/// Diceware-layout list compiled into the binary, one `<index>\t<word>` per
/// line.
const WORDLIST_DATA: &str = include_str!("../assets/wordlist.txt");

pub const BUNDLED_WORD_COUNT: usize = 7776;

#[cfg(test)]
const EXPECTED_SHA256: &str = "bf49e0e872c4faa89dc0e7b595975de639ae9cd1af92942397226b4a04d3f76e";

static BUNDLED_WORDS: OnceLock<Vec<String>> = OnceLock::new();

pub const BUILTIN_WORDS: &[&str] = &[
    "apple", "banana", "carrot", "dolphin", "elephant", "flamingo", "giraffe", "honey", "iguana",
    "jaguar", "koala", "lemon", "mango", "night", "orange", "panda", "quail", "rabbit", "sunset",
    "tiger", "umbrella", "violet", "water", "xray", "yellow", "zebra",
];

/// Supplies candidate words for memorable passphrases.
pub trait WordProvider {
    /// Lowercase alphabetic words. An empty list means "nothing usable".
    ///
    /// Repeats are allowed; the generator keeps the first occurrence of each
    /// word, so a repeated entry neither appears twice in one passphrase nor
    /// weighs more in the draw.
    fn words(&self) -> Vec<String>;
}

impl<P: WordProvider + ?Sized> WordProvider for Box<P> {
    fn words(&self) -> Vec<String> {
        (**self).words()
    }
}

/// Parse one word per line.
///
/// Blank lines and `#` comments are skipped. Lines shaped like
/// `"<index>\t<word>"` or `"<index> <word>"` (the diceware layout) keep only
/// the word.
pub fn parse_wordlist(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            line.split_once('\t')
                .or_else(|| line.split_once(' '))
                .filter(|(index, _)| index.chars().all(|c| c.is_ascii_digit()))
                .map_or(line, |(_, word)| word.trim())
        })
        .map(str::to_ascii_lowercase)
        .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()))
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Words read from a text file, loaded on first use.
pub struct FileWordProvider {
    path: PathBuf,
    words: OnceLock<Vec<String>>,
}

impl FileWordProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            words: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Vec<String> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Could not read wordlist {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        let words = parse_wordlist(&text);
        if words.is_empty() {
            warn!("Wordlist {} contains no usable words", self.path.display());
        }
        words
    }
}

impl WordProvider for FileWordProvider {
    fn words(&self) -> Vec<String> {
        self.words.get_or_init(|| self.load()).clone()
    }
}

/// The 7776-word list shipped with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledWordProvider;

impl WordProvider for BundledWordProvider {
    fn words(&self) -> Vec<String> {
        BUNDLED_WORDS
            .get_or_init(|| parse_wordlist(WORDLIST_DATA))
            .clone()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinWordProvider;

impl WordProvider for BuiltinWordProvider {
    fn words(&self) -> Vec<String> {
        BUILTIN_WORDS.iter().map(|word| word.to_string()).collect()
    }
}

/// Uses `primary` unless it yields nothing, then `fallback`.
pub struct FallbackWordProvider<P, F = BuiltinWordProvider> {
    primary: P,
    fallback: F,
}

impl<P: WordProvider> FallbackWordProvider<P> {
    pub fn with_builtin(primary: P) -> Self {
        Self::new(primary, BuiltinWordProvider)
    }
}

impl<P: WordProvider, F: WordProvider> FallbackWordProvider<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: WordProvider, F: WordProvider> WordProvider for FallbackWordProvider<P, F> {
    fn words(&self) -> Vec<String> {
        let words = self.primary.words();
        if !words.is_empty() {
            return words;
        }

        info!("Primary wordlist is empty, using fallback words");
        self.fallback.words()
    }
}

/// Bundled words backed by the built-in list.
pub fn bundled_provider() -> FallbackWordProvider<BundledWordProvider> {
    FallbackWordProvider::with_builtin(BundledWordProvider)
}

/// The file named by `PASSGEN_WORDLIST` when set, then the bundled list, then
/// the built-in words.
pub fn default_provider() -> Box<dyn WordProvider> {
    match std::env::var_os(WORDLIST_ENV) {
        Some(path) => Box::new(FallbackWordProvider::new(
            FileWordProvider::new(path),
            bundled_provider(),
        )),
        None => Box::new(bundled_provider()),
    }
}
