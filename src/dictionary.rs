/*
dictionary.rs

Copyright 2025 The Boggle Authors

This file is part of Boggle.

Boggle is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Boggle is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Boggle. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Words that the player can still find.
//!
//! The [`WordPool`] is loaded once from a text file with one word per line.
//! A word that the player finds is taken out of the pool, so that it cannot be scored twice in
//! the same game. Found words are given back to the pool when the next game starts.

use log::debug;
use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Type of errors when loading the dictionary.
#[derive(Debug)]
pub enum DictionaryError {
    /// The file cannot be opened or read.
    Io { path: PathBuf, source: io::Error },

    /// The file does not contain any word.
    Empty(PathBuf),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DictionaryError::Io { path, source } => {
                write!(f, "cannot read the dictionary {}: {source}", path.display())
            }
            DictionaryError::Empty(path) => {
                write!(f, "the dictionary {} does not contain any word", path.display())
            }
        }
    }
}

impl Error for DictionaryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DictionaryError::Io { source, .. } => Some(source),
            DictionaryError::Empty(_) => None,
        }
    }
}

/// Set of the words that can still be found.
#[derive(Debug, Default, Clone)]
pub struct WordPool {
    words: HashSet<String>,
}

impl WordPool {
    /// Create a [`WordPool`] object from a list of words.
    ///
    /// Words are trimmed and converted to uppercase. Empty words are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pool: WordPool = WordPool::default();
        pool.restore(words);
        pool
    }

    /// Read the words from a reader, one word per line.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut words: Vec<String> = Vec::new();
        for line in reader.lines() {
            words.push(line?);
        }
        Ok(Self::from_words(words))
    }

    /// Load the dictionary file.
    ///
    /// # Errors
    ///
    /// The method returns an error if the file cannot be read or if it has no words.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        debug!("Loading the dictionary from {}", path.display());
        let io_error = |source: io::Error| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file: File = File::open(path).map_err(io_error)?;
        let pool: WordPool = Self::from_reader(BufReader::new(file)).map_err(io_error)?;
        if pool.is_empty() {
            return Err(DictionaryError::Empty(path.to_path_buf()));
        }
        debug!("{} words in the dictionary", pool.len());
        Ok(pool)
    }

    /// Whether the word can still be found.
    #[cfg(test)]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Remove the word from the pool. Return whether the word was in the pool.
    pub fn take(&mut self, word: &str) -> bool {
        self.words.remove(word)
    }

    /// Add words back to the pool.
    pub fn restore<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for w in words {
            let w: &str = w.as_ref().trim();
            if !w.is_empty() {
                self.words.insert(w.to_uppercase());
            }
        }
    }

    /// Number of words in the pool.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_are_trimmed_and_uppercased() {
        let pool = WordPool::from_reader("cat\n  DOG \r\n\n\tbird\n".as_bytes()).unwrap();
        assert_eq!(pool.len(), 3);
        assert!(pool.contains("CAT"));
        assert!(pool.contains("DOG"));
        assert!(pool.contains("BIRD"));
        assert!(!pool.contains("cat"));
        assert!(!pool.contains(""));
    }

    #[test]
    fn take_removes_once() {
        let mut pool = WordPool::from_words(["AB", "AD"]);
        assert!(pool.take("AB"));
        assert!(!pool.take("AB"));
        assert!(!pool.contains("AB"));
        assert!(pool.contains("AD"));
    }

    #[test]
    fn restore_merges_words_back() {
        let mut pool = WordPool::from_words(["AD"]);
        pool.restore(vec!["AB".to_string()]);
        assert_eq!(pool.len(), 2);
        assert!(pool.contains("AB"));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "APPLE").unwrap();
        writeln!(file, "pear").unwrap();
        let pool = WordPool::load(file.path()).unwrap();
        assert_eq!(pool.len(), 2);
        assert!(pool.contains("PEAR"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = WordPool::load(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn empty_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "   ").unwrap();
        let err = WordPool::load(file.path()).unwrap_err();
        assert!(matches!(err, DictionaryError::Empty(_)));
    }
}
