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

mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use passgen::config::DEFAULT_LENGTH;
use passgen::generator::{DEFAULT_PATTERN, DEFAULT_SEPARATOR, DEFAULT_WORD_COUNT};
use passgen::{FileWordProvider, GeneratorConfig, PasswordGenerator};

#[derive(Parser)]
#[command(
    name = "passgen",
    version,
    author,
    about = "Cryptographically secure random, memorable and pronounceable passwords"
)]
struct Cli {
    #[arg(short, long, value_enum, default_value = "random")]
    mode: Mode,

    /// Password length in characters (random mode)
    #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
    length: usize,

    #[arg(long)]
    no_uppercase: bool,

    #[arg(long)]
    no_lowercase: bool,

    #[arg(long)]
    no_digits: bool,

    #[arg(long)]
    no_special: bool,

    /// Extra characters added to the pool
    #[arg(long)]
    custom: Option<String>,

    /// Characters never emitted, in any mode
    #[arg(short = 'x', long)]
    exclude: Option<String>,

    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Words per passphrase (memorable mode)
    #[arg(short, long, default_value_t = DEFAULT_WORD_COUNT)]
    words: usize,

    #[arg(long, default_value = DEFAULT_SEPARATOR)]
    separator: String,

    /// Capitalize each word or syllable
    #[arg(long)]
    capitalize: bool,

    /// Append a random digit (memorable mode)
    #[arg(long)]
    number: bool,

    /// Syllable count (pronounceable mode)
    #[arg(long, default_value_t = 4)]
    syllables: usize,

    /// C = consonant, V = vowel, anything else is literal
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pattern: String,

    /// Wordlist file, one word per line (overrides PASSGEN_WORDLIST and the bundled list)
    #[arg(long)]
    wordlist: Option<PathBuf>,

    #[arg(short, long)]
    quiet: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
enum Mode {
    Random,
    Memorable,
    Pronounceable,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    let config = GeneratorConfig {
        length: cli.length,
        include_uppercase: !cli.no_uppercase,
        include_lowercase: !cli.no_lowercase,
        include_digits: !cli.no_digits,
        include_special: !cli.no_special,
        custom_chars: cli.custom.as_deref().map(ui::normalize_input),
        exclude_chars: cli.exclude.as_deref().map(ui::normalize_input),
    };

    let mut generator =
        PasswordGenerator::new(config).context("Failed to initialize password generator")?;

    if let Some(path) = &cli.wordlist {
        generator = generator.with_word_provider(FileWordProvider::new(path));
    }

    let (passwords, summary) = match cli.mode {
        Mode::Random => {
            let passwords = generator.generate_batch(cli.count)?;
            let summary = ui::Summary {
                mode: "Random",
                entropy: generator.entropy_bits()?,
                source: format!(
                    "{} chars",
                    passgen::charset::build_character_pool(generator.get_configuration())?.len()
                ),
            };
            (passwords, summary)
        }
        Mode::Memorable => {
            generator.check_count(cli.count)?;
            let passwords = (0..cli.count)
                .map(|_| {
                    generator.generate_memorable(
                        cli.words,
                        &cli.separator,
                        cli.capitalize,
                        cli.number,
                    )
                })
                .collect::<passgen::Result<Vec<_>>>()?;
            let available = generator.available_words();
            let summary = ui::Summary {
                mode: "Memorable",
                entropy: generator.memorable_entropy(cli.words, cli.number),
                source: format!("{} of {} words", cli.words.min(available), available),
            };
            (passwords, summary)
        }
        Mode::Pronounceable => {
            generator.check_count(cli.count)?;
            let passwords = (0..cli.count)
                .map(|_| {
                    generator.generate_pronounceable(
                        cli.syllables,
                        &cli.pattern,
                        &cli.separator,
                        cli.capitalize,
                    )
                })
                .collect::<passgen::Result<Vec<_>>>()?;
            let summary = ui::Summary {
                mode: "Pronounceable",
                entropy: generator.pronounceable_entropy(cli.syllables, &cli.pattern),
                source: format!("{} x {}", cli.syllables, cli.pattern),
            };
            (passwords, summary)
        }
    };

    ui::display_output(&passwords, &summary, &options);

    Ok(())
}
