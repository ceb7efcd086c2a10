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

pub mod charset;
pub mod config;
pub mod error;
pub mod generator;
pub mod random;
pub mod wordlist;

pub use config::{GeneratorConfig, validate_length};
pub use error::{PassGenError, Result};
pub use generator::PasswordGenerator;
pub use random::{ChaChaRandom, SecureRandom};
pub use wordlist::{
    BuiltinWordProvider, BundledWordProvider, FallbackWordProvider, FileWordProvider,
    WordProvider, bundled_provider, default_provider,
};
