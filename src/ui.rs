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

use console::Style;
use passgen::charset::MIN_ENTROPY_BITS;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

pub const MIN_SAFE_ENTROPY: f64 = MIN_ENTROPY_BITS;
pub const PARANOID_ENTROPY: f64 = 128.0;

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub struct Summary {
    pub mode: &'static str,
    pub entropy: f64,
    pub source: String,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

/// NFC form, so a composed and a decomposed "é" name the same character.
pub fn normalize_input(s: &str) -> String {
    s.nfc().collect()
}

pub fn rate_entropy(entropy: f64) -> &'static str {
    if entropy >= PARANOID_ENTROPY {
        "Paranoid"
    } else if entropy >= MIN_SAFE_ENTROPY {
        "Strong"
    } else {
        "Weak"
    }
}

pub fn display_output(
    passwords: &[Zeroizing<String>],
    summary: &Summary,
    options: &DisplayOptions,
) {
    if options.quiet {
        for password in passwords {
            println!("{}", &**password);
        }
        return;
    }

    for (i, password) in passwords.iter().enumerate() {
        println!("Out[{}]:\n{}\n", i, &**password);
    }

    let length = passwords.first().map_or(0, |p| p.chars().count());
    display_stats(summary, length, options);
}

fn display_stats(summary: &Summary, length: usize, options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);

    let secure = summary.entropy >= MIN_SAFE_ENTROPY;
    let status_icon = if secure { check_ok } else { check_warn };
    let status_text = rate_entropy(summary.entropy);

    let entropy_style = if options.color_support {
        if secure {
            Style::new().green()
        } else {
            Style::new().yellow()
        }
    } else {
        Style::new()
    };

    let (branch, last) = if options.unicode_support {
        ("├─", "└─")
    } else {
        ("|-", "`-")
    };

    println!("Stats:");
    println!("  {} Mode       {}", branch, summary.mode);
    println!("  {} Source     {}", branch, summary.source);
    println!(
        "  {} Entropy    {} {} bits ({})",
        branch,
        entropy_style.apply_to(format!("[{}]", status_icon)),
        entropy_style.apply_to(format!("{:.1}", summary.entropy)),
        entropy_style.apply_to(status_text)
    );
    println!(
        "  {} Length     {} {}",
        last,
        length,
        if length == 1 { "char" } else { "chars" }
    );

    println!(
        "\n{} Security: {}",
        entropy_style.apply_to(format!("[{}]", status_icon)),
        entropy_style.apply_to(status_text)
    );
}
