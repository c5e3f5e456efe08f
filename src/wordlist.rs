// This file is part of Storypass.
//
// Copyright (c) 2025  The Storypass contributors
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

use crate::lexicon::{classify, RolePools};
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::OnceLock;

const WORDLIST_DATA: &str = include_str!("../assets/wordlist.txt");

#[cfg(test)]
const EXPECTED_SHA256: &str = "9a9ed253bfbc247be1e39e349fc1ea7bef8060786c5ffd16e03484ae4f02270b";

static EMBEDDED_LEXICON: OnceLock<Option<RolePools>> = OnceLock::new();

pub fn embedded_corpus() -> &'static str {
    WORDLIST_DATA
}

/// Role pools of the embedded corpus, classified on first use.
pub fn embedded_lexicon() -> Option<&'static RolePools> {
    EMBEDDED_LEXICON
        .get_or_init(|| classify(WORDLIST_DATA))
        .as_ref()
}

pub fn load_corpus(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read wordlist {}", path.display()))
}

/// Classifies the corpus at `path`. An empty file yields `None`, which leaves
/// the story archetype unavailable rather than failing.
pub fn load_lexicon(path: &Path) -> Result<Option<RolePools>> {
    let corpus = load_corpus(path)?;
    let lexicon = classify(&corpus);
    if lexicon.is_none() {
        log::warn!("Wordlist {} holds no words", path.display());
    }
    Ok(lexicon)
}
