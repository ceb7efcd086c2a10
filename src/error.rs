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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PassGenError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PassGenError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(
        "Configuration provides only {entropy:.1} bits of entropy. Minimum required is {minimum:.0} bits. Consider increasing length or using more character sets."
    )]
    InsufficientEntropy { entropy: f64, minimum: f64 },

    #[error(
        "Failed to generate password meeting all requirements after {attempts} attempts. Try relaxing some constraints."
    )]
    GenerationExhausted { attempts: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Secure random source unavailable: {0}")]
    RandomSource(String),
}
