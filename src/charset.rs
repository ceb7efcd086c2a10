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

//! Character classes, pool assembly and entropy estimation.

use std::collections::HashSet;

use crate::config::GeneratorConfig;
use crate::error::{PassGenError, Result};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

pub const MIN_ENTROPY_BITS: f64 = 64.0;

/// Built-in classes enabled by `config`, in pool order.
fn selected_classes(config: &GeneratorConfig) -> Vec<&'static str> {
    let mut classes = Vec::with_capacity(4);
    if config.include_lowercase {
        classes.push(LOWERCASE);
    }
    if config.include_uppercase {
        classes.push(UPPERCASE);
    }
    if config.include_digits {
        classes.push(DIGITS);
    }
    if config.include_special {
        classes.push(SPECIAL);
    }
    classes
}

/// Assemble the effective pool: lowercase, uppercase, digits, special, then
/// custom characters, each character kept once, minus every excluded one.
pub fn build_character_pool(config: &GeneratorConfig) -> Result<Vec<char>> {
    let mut sources: Vec<&str> = selected_classes(config);
    if let Some(custom) = config.custom_chars.as_deref().filter(|c| !c.is_empty()) {
        sources.push(custom);
    }

    if sources.is_empty() {
        return Err(PassGenError::InvalidConfiguration(
            "At least one character set must be selected".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    let pool: Vec<char> = sources
        .iter()
        .flat_map(|source| source.chars())
        .filter(|c| seen.insert(*c))
        .filter(|c| !config.is_excluded(*c))
        .collect();

    if pool.is_empty() {
        return Err(PassGenError::InvalidConfiguration(
            "At least one character set must be selected; every selected character is excluded"
                .to_string(),
        ));
    }

    Ok(pool)
}

pub fn entropy_bits(pool_size: usize, length: usize) -> f64 {
    length as f64 * (pool_size as f64).log2()
}

pub fn check_entropy(entropy: f64) -> Result<()> {
    if entropy < MIN_ENTROPY_BITS {
        return Err(PassGenError::InsufficientEntropy {
            entropy,
            minimum: MIN_ENTROPY_BITS,
        });
    }
    Ok(())
}

/// Classes a random password must draw from at least once.
///
/// Each selected built-in class is reduced by the exclusion set; a class the
/// exclusion empties imposes no requirement. Custom characters are never
/// required.
pub fn required_classes(config: &GeneratorConfig) -> Vec<Vec<char>> {
    selected_classes(config)
        .into_iter()
        .map(|class| {
            class
                .chars()
                .filter(|c| !config.is_excluded(*c))
                .collect::<Vec<char>>()
        })
        .filter(|class| !class.is_empty())
        .collect()
}

pub fn covers_classes(candidate: &[char], classes: &[Vec<char>]) -> bool {
    classes
        .iter()
        .all(|class| candidate.iter().any(|c| class.contains(c)))
}
