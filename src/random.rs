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

//! Cryptographically secure uniform selection.

use chacha20::ChaCha20;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use zeroize::Zeroizing;

use crate::error::{PassGenError, Result};

const KEY_LEN: usize = 32;
const BUFFER_LEN: usize = 1024;

/// Source of uniform choices backing every generation mode.
///
/// Implementations must be cryptographically secure. A general-purpose PRNG
/// is not acceptable here.
pub trait SecureRandom {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// `min(amount, len)` distinct indices in `0..len`, drawn uniformly
    /// without replacement.
    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(len);
        let mut indices: Vec<usize> = (0..len).collect();
        for i in 0..amount {
            let j = i + self.pick_index(len - i);
            indices.swap(i, j);
        }
        indices.truncate(amount);
        indices
    }

    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        Some(&items[self.pick_index(items.len())])
    }
}

/// ChaCha20 keystream read through unbiased rejection sampling.
pub struct ChaChaRandom {
    cipher: ChaCha20,
    buffer: Zeroizing<Vec<u8>>,
    pos: usize,
}

impl ChaChaRandom {
    /// Keyed from the operating system's CSPRNG.
    pub fn from_os() -> Result<Self> {
        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        getrandom::fill(&mut key[..])
            .map_err(|e| PassGenError::RandomSource(e.to_string()))?;
        Ok(Self::from_key(&key))
    }

    /// Reproducible stream for a fixed key.
    pub fn from_key(key: &[u8; KEY_LEN]) -> Self {
        let mut cipher = ChaCha20::new(key.into(), &[0u8; 12].into());
        let mut buffer = Zeroizing::new(vec![0u8; BUFFER_LEN]);
        cipher.apply_keystream(&mut buffer);
        Self {
            cipher,
            buffer,
            pos: 0,
        }
    }

    fn next_u64(&mut self) -> u64 {
        if self.pos + 8 > self.buffer.len() {
            self.buffer.fill(0);
            self.cipher.apply_keystream(&mut self.buffer);
            self.pos = 0;
        }

        let mut word = [0u8; 8];
        word.copy_from_slice(&self.buffer[self.pos..self.pos + 8]);
        self.pos += 8;
        u64::from_le_bytes(word)
    }
}

impl SecureRandom for ChaChaRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot pick from an empty range");

        let len = len as u64;
        let rejection_threshold = u64::MAX - (u64::MAX % len);

        loop {
            let value = self.next_u64();
            if value < rejection_threshold {
                return (value % len) as usize;
            }
        }
    }
}
