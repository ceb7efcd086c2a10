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

use log::debug;
use zeroize::Zeroizing;

use crate::charset::{
    build_character_pool, check_entropy, covers_classes, entropy_bits, required_classes,
};
use crate::config::GeneratorConfig;
use crate::error::{PassGenError, Result};
use crate::random::{ChaChaRandom, SecureRandom};
use crate::wordlist::{FallbackWordProvider, WordProvider, bundled_provider, default_provider};

pub const MAX_ATTEMPTS: usize = 100;

pub const DEFAULT_WORD_COUNT: usize = 4;
pub const DEFAULT_SEPARATOR: &str = "-";
pub const DEFAULT_PATTERN: &str = "CVCV";

pub const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";
pub const VOWELS: &str = "aeiou";

/// Password generator bound to one validated configuration.
///
/// All randomness comes from `R`; the default is a ChaCha20 keystream keyed
/// from the operating system.
pub struct PasswordGenerator<R: SecureRandom = ChaChaRandom> {
    config: GeneratorConfig,
    rng: R,
    words: Box<dyn WordProvider>,
}

impl PasswordGenerator<ChaChaRandom> {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Self::with_rng(config, ChaChaRandom::from_os()?)
    }
}

impl<R: SecureRandom> PasswordGenerator<R> {
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            words: default_provider(),
        })
    }

    /// Replace the word source for memorable passphrases. The bundled list,
    /// then the built-in one, still back it up whenever `provider` yields
    /// nothing.
    pub fn with_word_provider(mut self, provider: impl WordProvider + 'static) -> Self {
        self.words = Box::new(FallbackWordProvider::new(provider, bundled_provider()));
        self
    }

    /// Number of distinct words memorable passphrases draw from.
    pub fn available_words(&self) -> usize {
        self.word_pool().len()
    }

    pub fn get_configuration(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Entropy of a random password under the current configuration.
    pub fn entropy_bits(&self) -> Result<f64> {
        let pool = build_character_pool(&self.config)?;
        Ok(entropy_bits(pool.len(), self.config.length))
    }

    pub fn generate(&mut self) -> Result<Zeroizing<String>> {
        let pool = build_character_pool(&self.config)?;
        check_entropy(entropy_bits(pool.len(), self.config.length))?;

        let required = required_classes(&self.config);

        sample_covering(&mut self.rng, &pool, self.config.length, &required).ok_or_else(|| {
            debug!(
                "No draw over a {}-character pool covered {} classes",
                pool.len(),
                required.len()
            );
            PassGenError::GenerationExhausted {
                attempts: MAX_ATTEMPTS,
            }
        })
    }

    pub fn generate_batch(&mut self, count: usize) -> Result<Vec<Zeroizing<String>>> {
        self.check_count(count)?;
        (0..count).map(|_| self.generate()).collect()
    }

    /// Rejects a batch size of zero, for callers batching any mode.
    pub fn check_count(&self, count: usize) -> Result<()> {
        if count == 0 {
            return Err(PassGenError::InvalidArgument(
                "Count must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    /// Words joined by `separator`, with an optional trailing digit segment.
    ///
    /// Excluded characters are stripped from the joined result, separator
    /// included.
    pub fn generate_memorable(
        &mut self,
        word_count: usize,
        separator: &str,
        capitalize: bool,
        add_number: bool,
    ) -> Result<Zeroizing<String>> {
        let words = self.word_pool();
        if words.len() < word_count {
            debug!(
                "Requested {} words but only {} are available",
                word_count,
                words.len()
            );
        }

        let mut segments: Zeroizing<Vec<String>> = Zeroizing::new(
            self.rng
                .sample_indices(words.len(), word_count)
                .into_iter()
                .map(|i| {
                    if capitalize {
                        capitalize_first(&words[i])
                    } else {
                        words[i].clone()
                    }
                })
                .collect(),
        );

        if add_number {
            segments.push(self.rng.pick_index(10).to_string());
        }

        let joined = Zeroizing::new(segments.join(separator));
        Ok(Zeroizing::new(self.strip_excluded(&joined)))
    }

    /// Entropy of a memorable passphrase drawn from the current word source.
    pub fn memorable_entropy(&self, word_count: usize, add_number: bool) -> f64 {
        let available = self.available_words();
        let words: f64 = (0..word_count.min(available))
            .map(|i| ((available - i) as f64).log2())
            .sum();
        if add_number { words + 10f64.log2() } else { words }
    }

    /// `length` syllables built from `pattern`, joined by `separator`.
    ///
    /// `C`/`c` is a consonant slot, `V`/`v` a vowel slot, anything else is
    /// copied as is. Excluded letters never fill a slot.
    pub fn generate_pronounceable(
        &mut self,
        length: usize,
        pattern: &str,
        separator: &str,
        capitalize: bool,
    ) -> Result<Zeroizing<String>> {
        if length == 0 {
            return Err(PassGenError::InvalidArgument(
                "Syllable count must be a positive integer".to_string(),
            ));
        }
        if pattern.is_empty() {
            return Err(PassGenError::InvalidArgument(
                "Syllable pattern must not be empty".to_string(),
            ));
        }

        let consonants = self.allowed(CONSONANTS);
        let vowels = self.allowed(VOWELS);

        if consonants.is_empty() && pattern.contains(['C', 'c']) {
            return Err(PassGenError::InvalidConfiguration(
                "Every consonant is excluded".to_string(),
            ));
        }
        if vowels.is_empty() && pattern.contains(['V', 'v']) {
            return Err(PassGenError::InvalidConfiguration(
                "Every vowel is excluded".to_string(),
            ));
        }

        let mut syllables: Zeroizing<Vec<String>> = Zeroizing::new(Vec::with_capacity(length));

        for _ in 0..length {
            let mut syllable = String::with_capacity(pattern.len());
            for slot in pattern.chars() {
                match slot {
                    'C' | 'c' => syllable.extend(self.rng.choose(&consonants)),
                    'V' | 'v' => syllable.extend(self.rng.choose(&vowels)),
                    literal if self.config.is_excluded(literal) => {}
                    literal => syllable.push(literal),
                }
            }

            if capitalize {
                syllable = self.capitalize_allowed(syllable);
            }
            syllables.push(syllable);
        }

        let separator = self.strip_excluded(separator);
        Ok(Zeroizing::new(syllables.join(separator.as_str())))
    }

    /// Entropy of a pronounceable password; literal slots add nothing.
    pub fn pronounceable_entropy(&self, length: usize, pattern: &str) -> f64 {
        let consonants = self.allowed(CONSONANTS).len() as f64;
        let vowels = self.allowed(VOWELS).len() as f64;

        let per_syllable: f64 = pattern
            .chars()
            .map(|slot| match slot {
                'C' | 'c' if consonants > 0.0 => consonants.log2(),
                'V' | 'v' if vowels > 0.0 => vowels.log2(),
                _ => 0.0,
            })
            .sum();

        length as f64 * per_syllable
    }

    /// Provider words with repeats dropped, first occurrence kept.
    fn word_pool(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut words = self.words.words();
        words.retain(|word| seen.insert(word.clone()));
        words
    }

    fn allowed(&self, letters: &str) -> Vec<char> {
        letters
            .chars()
            .filter(|c| !self.config.is_excluded(*c))
            .collect()
    }

    fn strip_excluded(&self, s: &str) -> String {
        s.chars().filter(|c| !self.config.is_excluded(*c)).collect()
    }

    fn capitalize_allowed(&self, syllable: String) -> String {
        let Some(first) = syllable.chars().next() else {
            return syllable;
        };

        let upper: String = first.to_uppercase().collect();
        if upper.chars().any(|c| self.config.is_excluded(c)) {
            return syllable;
        }
        upper + &syllable[first.len_utf8()..]
    }
}

/// Draw full candidates until one covers every required class.
fn sample_covering<R: SecureRandom>(
    rng: &mut R,
    pool: &[char],
    length: usize,
    required: &[Vec<char>],
) -> Option<Zeroizing<String>> {
    let mut candidate: Zeroizing<Vec<char>> = Zeroizing::new(Vec::with_capacity(length));

    for attempt in 1..=MAX_ATTEMPTS {
        candidate.clear();
        candidate.extend((0..length).map(|_| pool[rng.pick_index(pool.len())]));

        if covers_classes(&candidate, required) {
            debug!("Password accepted on attempt {}", attempt);
            return Some(Zeroizing::new(candidate.iter().collect()));
        }
    }

    None
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
