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

use crate::error::{PassGenError, Result};

pub const DEFAULT_LENGTH: usize = 16;
pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 256;

/// Settings a [`PasswordGenerator`](crate::PasswordGenerator) is built from.
///
/// The defaults select all four built-in character classes and a length of
/// 16 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_special: bool,
    /// Extra characters unioned into the pool after the built-in classes.
    pub custom_chars: Option<String>,
    /// Characters removed from the pool and from every generated output.
    pub exclude_chars: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_special: true,
            custom_chars: None,
            exclude_chars: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_length(self.length)
    }

    pub(crate) fn is_excluded(&self, c: char) -> bool {
        self.exclude_chars
            .as_deref()
            .is_some_and(|excluded| excluded.contains(c))
    }
}

pub fn validate_length(length: usize) -> Result<()> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(PassGenError::InvalidConfiguration(format!(
            "Password length must be between {} and {} characters",
            MIN_LENGTH, MAX_LENGTH
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = GeneratorConfig::default();
        assert_eq!(config.length, 16);
        assert!(config.include_uppercase);
        assert!(config.include_lowercase);
        assert!(config.include_digits);
        assert!(config.include_special);
        assert_eq!(config.custom_chars, None);
        assert_eq!(config.exclude_chars, None);
    }

    #[test]
    fn test_length_bounds() {
        for length in [MIN_LENGTH, DEFAULT_LENGTH, MAX_LENGTH] {
            assert!(
                validate_length(length).is_ok(),
                "Length {} should be accepted",
                length
            );
        }

        for length in [0, MIN_LENGTH - 1, MAX_LENGTH + 1] {
            let err = validate_length(length).unwrap_err();
            assert!(
                matches!(err, PassGenError::InvalidConfiguration(_)),
                "Length {} should be rejected, got {:?}",
                length,
                err
            );
            assert!(err.to_string().contains("must be between"));
        }
    }

    #[test]
    fn test_exclusion_is_case_sensitive() {
        let config = GeneratorConfig {
            exclude_chars: Some("a".to_string()),
            ..GeneratorConfig::default()
        };
        assert!(config.is_excluded('a'));
        assert!(!config.is_excluded('A'));
        assert!(!GeneratorConfig::default().is_excluded('a'));
    }
}
