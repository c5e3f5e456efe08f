//! Sorts a raw word corpus into grammatical role pools for story passwords.
//!
//! Classification is a pure function of the corpus. Rules run in a fixed
//! order (verbs, adjectives, twists, objects) and a word claimed by an
//! earlier role is never handed to a later one. Actors come from fixed
//! tables and are claimed first, so no corpus pool can hold an actor.

use crate::morphology::{
    has_any_suffix, has_verb_inflection, is_conjugated_verb_form, third_person_singular,
};
use crate::tables;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

pub const OBJECT_CAP: usize = 900;
pub const VIVID_ADJECTIVE_CAP: usize = 420;
pub const VIVID_OBJECT_CAP: usize = 900;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordRole {
    Verb,
    Adjective,
    Twist,
    Object,
    Actor,
    Stopword,
    Block,
}

struct Tables {
    stop_words: HashSet<&'static str>,
    sfw_excluded: HashSet<&'static str>,
    verb_seeds: Vec<&'static str>,
    verb_seed_set: HashSet<&'static str>,
    verb_blocklist: HashSet<&'static str>,
    adjective_seeds: Vec<&'static str>,
    adjective_seed_set: HashSet<&'static str>,
    adjective_boring: HashSet<&'static str>,
    twist_seeds: Vec<&'static str>,
    twist_blocklist: HashSet<&'static str>,
    object_seeds: Vec<&'static str>,
    object_seed_set: HashSet<&'static str>,
    object_excluded: HashSet<&'static str>,
    object_bland: HashSet<&'static str>,
}

impl Tables {
    fn load() -> Self {
        let verb_seeds = table_words(tables::VERB_SEEDS);
        let adjective_seeds = table_words(tables::ADJECTIVE_SEEDS);
        let object_seeds = table_words(tables::OBJECT_SEEDS);

        Self {
            stop_words: table_set(tables::STOP_WORDS),
            sfw_excluded: table_set(tables::SFW_EXCLUDED),
            verb_seed_set: verb_seeds.iter().copied().collect(),
            verb_seeds,
            verb_blocklist: table_set(tables::VERB_BLOCKLIST),
            adjective_seed_set: adjective_seeds.iter().copied().collect(),
            adjective_seeds,
            adjective_boring: table_set(tables::ADJECTIVE_BORING),
            twist_seeds: table_words(tables::TWIST_SEEDS),
            twist_blocklist: table_set(tables::TWIST_BLOCKLIST),
            object_seed_set: object_seeds.iter().copied().collect(),
            object_seeds,
            object_excluded: table_set(tables::OBJECT_EXCLUDED),
            object_bland: table_set(tables::OBJECT_BLAND),
        }
    }
}

static TABLES: LazyLock<Tables> = LazyLock::new(Tables::load);

/// Words of a static table, first occurrence wins.
pub fn table_words(text: &'static str) -> Vec<&'static str> {
    let mut seen = HashSet::new();
    text.split_whitespace().filter(|w| seen.insert(*w)).collect()
}

fn table_set(text: &'static str) -> HashSet<&'static str> {
    text.split_whitespace().collect()
}

/// Trimmed, lowercased, non-empty and deduplicated, in first-seen order.
pub fn unique_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for word in words {
        let word = word.trim().to_lowercase();
        if !word.is_empty() && seen.insert(word.clone()) {
            out.push(word);
        }
    }
    out
}

/// 32-bit FNV-1a. Only used to rank words for capping, so any stable hash
/// would do; this one keeps the ranking reproducible everywhere.
pub fn rank_hash(word: &str) -> u32 {
    let mut hash: u32 = 2_166_136_261;
    for unit in word.encode_utf16() {
        hash ^= u32::from(unit);
        hash = hash.wrapping_mul(16_777_619);
    }
    hash
}

/// Keeps at most `cap` words, chosen by ascending [`rank_hash`] with ties
/// broken lexicographically. Pools under the cap keep their order.
pub fn cap_word_pool(pool: Vec<String>, cap: usize) -> Vec<String> {
    let mut unique = unique_words(pool.iter().map(String::as_str));
    if unique.len() <= cap {
        return unique;
    }

    log::debug!("Capping pool of {} words to {}", unique.len(), cap);
    unique.sort_by(|a, b| rank_hash(a).cmp(&rank_hash(b)).then_with(|| a.cmp(b)));
    unique.truncate(cap);
    unique
}

pub fn is_story_base_word(word: &str) -> bool {
    let t = &*TABLES;
    !word.is_empty()
        && word.bytes().all(|b| b.is_ascii_lowercase())
        && (3..=10).contains(&word.len())
        && !t.stop_words.contains(word)
        && !t.sfw_excluded.contains(word)
}

fn is_likely_verb_root(word: &str, corpus: &HashSet<String>) -> bool {
    let t = &*TABLES;
    if !(3..=9).contains(&word.len()) {
        return false;
    }
    if t.verb_blocklist.contains(word) {
        return false;
    }
    if has_any_suffix(word, tables::VERB_NOUNISH_SUFFIXES) || word.ends_with("ly") {
        return false;
    }
    t.verb_seed_set.contains(word) || has_verb_inflection(word, corpus)
}

fn is_likely_twist(word: &str) -> bool {
    (4..=12).contains(&word.len())
        && !TABLES.twist_blocklist.contains(word)
        && word.ends_with("ly")
}

/// Role-tagged word pools. Built once per corpus and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePools {
    verbs: Vec<String>,
    adjectives: Vec<String>,
    vivid_adjectives: Vec<String>,
    twists: Vec<String>,
    objects: Vec<String>,
    vivid_objects: Vec<String>,
    names: Vec<String>,
    actors: Vec<String>,
    roles: HashMap<String, WordRole>,
}

/// Classifies a newline-delimited corpus. Returns `None` when the corpus
/// holds no words at all, meaning no wordlist has been supplied yet.
pub fn classify(corpus: &str) -> Option<RolePools> {
    let raw = unique_words(corpus.lines());
    if raw.is_empty() {
        return None;
    }
    Some(Classifier::new(&raw).run())
}

struct Classifier {
    base: Vec<String>,
    base_set: HashSet<String>,
    verb_roots: HashSet<String>,
    claimed: HashSet<String>,
}

impl Classifier {
    fn new(raw: &[String]) -> Self {
        let base: Vec<String> = raw
            .iter()
            .filter(|w| is_story_base_word(w))
            .cloned()
            .collect();
        let base_set = base.iter().cloned().collect();

        Self {
            base,
            base_set,
            verb_roots: HashSet::new(),
            claimed: actor_words().into_iter().collect(),
        }
    }

    fn claim(&mut self, pool: Vec<String>) -> Vec<String> {
        let pool: Vec<String> = pool
            .into_iter()
            .filter(|w| !self.claimed.contains(w))
            .collect();
        self.claimed.extend(pool.iter().cloned());
        pool
    }

    fn run(mut self) -> RolePools {
        let t = &*TABLES;

        let roots = self.verb_roots();
        self.verb_roots = roots.iter().cloned().collect();
        let verb_forms: Vec<String> = roots
            .iter()
            .map(|root| third_person_singular(root))
            .filter(|form| {
                form.bytes().all(|b| b.is_ascii_lowercase())
                    && (4..=12).contains(&form.len())
                    && !t.sfw_excluded.contains(form.as_str())
            })
            .collect();
        let verbs = self.claim(unique_words(verb_forms.iter().map(String::as_str)));

        let adjectives = self.adjectives();
        let adjectives = self.claim(adjectives);

        let twists = unique_words(
            t.twist_seeds
                .iter()
                .copied()
                .chain(self.base.iter().map(String::as_str).filter(|w| is_likely_twist(w))),
        );
        let twists = self.claim(twists);

        let objects = self.objects();
        let objects = self.claim(objects);

        let vivid_adjectives = vivid_adjectives(&adjectives);
        let vivid_objects = vivid_objects(&objects);

        let names = unique_words(tables::NAME_ACTORS.split_whitespace());
        let actors = actor_words();

        let mut roles = HashMap::new();
        for (pool, role) in [
            (&verbs, WordRole::Verb),
            (&adjectives, WordRole::Adjective),
            (&twists, WordRole::Twist),
            (&objects, WordRole::Object),
            (&actors, WordRole::Actor),
        ] {
            for word in pool {
                roles.entry(word.clone()).or_insert(role);
            }
        }

        log::info!(
            "Lexicon: {} base words, {} verbs, {} adjectives ({} vivid), {} twists, {} objects ({} vivid), {} actors",
            self.base.len(),
            verbs.len(),
            adjectives.len(),
            vivid_adjectives.len(),
            twists.len(),
            objects.len(),
            vivid_objects.len(),
            actors.len()
        );

        RolePools {
            verbs,
            adjectives,
            vivid_adjectives,
            twists,
            objects,
            vivid_objects,
            names,
            actors,
            roles,
        }
    }

    fn verb_roots(&self) -> Vec<String> {
        let dynamic = self
            .base
            .iter()
            .map(String::as_str)
            .filter(|w| is_likely_verb_root(w, &self.base_set));
        unique_words(TABLES.verb_seeds.iter().copied().chain(dynamic))
    }

    fn is_likely_adjective(&self, word: &str) -> bool {
        let t = &*TABLES;
        if !(3..=10).contains(&word.len()) || t.adjective_boring.contains(word) {
            return false;
        }
        if t.adjective_seed_set.contains(word) {
            return true;
        }
        if self.verb_roots.contains(word) || self.claimed.contains(word) {
            return false;
        }
        if has_verb_inflection(word, &self.base_set) {
            return false;
        }
        if word.len() > 3 && !word.ends_with("ly") && self.base_set.contains(&format!("{word}ly")) {
            return true;
        }
        if let Some(stem) = word.strip_suffix('y') {
            if self.base_set.contains(&format!("{stem}ily")) {
                return true;
            }
        }
        has_any_suffix(word, tables::ADJECTIVE_SUFFIXES)
    }

    fn adjectives(&self) -> Vec<String> {
        let dynamic = self
            .base
            .iter()
            .map(String::as_str)
            .filter(|w| self.is_likely_adjective(w));
        unique_words(TABLES.adjective_seeds.iter().copied().chain(dynamic))
    }

    fn is_likely_object(&self, word: &str) -> bool {
        let t = &*TABLES;
        if !(3..=10).contains(&word.len()) {
            return false;
        }
        if t.object_seed_set.contains(word) {
            return true;
        }
        if t.object_excluded.contains(word) || t.object_bland.contains(word) {
            return false;
        }
        if has_any_suffix(word, tables::OBJECT_ABSTRACT_SUFFIXES)
            || has_any_suffix(word, tables::OBJECT_VERBISH_SUFFIXES)
            || has_any_suffix(word, tables::OBJECT_ADJECTIVISH_SUFFIXES)
            || word.ends_with("ly")
        {
            return false;
        }
        if has_verb_inflection(word, &self.base_set)
            || is_conjugated_verb_form(word, &self.verb_roots)
        {
            return false;
        }
        !self.verb_roots.contains(word)
            && !self.claimed.contains(word)
            && !t.stop_words.contains(word)
    }

    fn objects(&self) -> Vec<String> {
        let t = &*TABLES;
        let dynamic: Vec<String> = self
            .base
            .iter()
            .filter(|w| self.is_likely_object(w) && !t.object_seed_set.contains(w.as_str()))
            .cloned()
            .collect();
        let dynamic = cap_word_pool(dynamic, OBJECT_CAP);
        unique_words(
            t.object_seeds
                .iter()
                .copied()
                .chain(dynamic.iter().map(String::as_str)),
        )
    }
}

/// Creatures, names and extras. Claimed before any corpus rule runs.
fn actor_words() -> Vec<String> {
    unique_words(
        tables::CREATURE_ACTORS
            .split_whitespace()
            .chain(tables::NAME_ACTORS.split_whitespace())
            .chain(tables::EXTRA_ACTORS.split_whitespace()),
    )
}

fn vivid_adjectives(adjectives: &[String]) -> Vec<String> {
    let t = &*TABLES;
    let dynamic: Vec<String> = adjectives
        .iter()
        .filter(|w| !t.adjective_seed_set.contains(w.as_str()))
        .filter(|w| has_any_suffix(w, tables::VIVID_ADJECTIVE_SUFFIXES))
        .cloned()
        .collect();
    let dynamic = cap_word_pool(dynamic, VIVID_ADJECTIVE_CAP);

    let seeds = adjectives
        .iter()
        .filter(|w| t.adjective_seed_set.contains(w.as_str()));
    unique_words(seeds.chain(dynamic.iter()).map(String::as_str))
}

fn vivid_objects(objects: &[String]) -> Vec<String> {
    let t = &*TABLES;
    let dynamic: Vec<String> = objects
        .iter()
        .filter(|w| !t.object_seed_set.contains(w.as_str()))
        .filter(|w| (4..=8).contains(&w.len()))
        .filter(|w| !t.object_bland.contains(w.as_str()))
        .filter(|w| !has_any_suffix(w, tables::OBJECT_ABSTRACT_SUFFIXES))
        .cloned()
        .collect();
    let dynamic = cap_word_pool(dynamic, VIVID_OBJECT_CAP);

    let seeds = objects
        .iter()
        .filter(|w| t.object_seed_set.contains(w.as_str()));
    unique_words(seeds.chain(dynamic.iter()).map(String::as_str))
}

impl RolePools {
    pub fn verbs(&self) -> &[String] {
        &self.verbs
    }

    pub fn adjectives(&self) -> &[String] {
        &self.adjectives
    }

    pub fn vivid_adjectives(&self) -> &[String] {
        &self.vivid_adjectives
    }

    pub fn twists(&self) -> &[String] {
        &self.twists
    }

    pub fn objects(&self) -> &[String] {
        &self.objects
    }

    pub fn vivid_objects(&self) -> &[String] {
        &self.vivid_objects
    }

    /// Given names only.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Creatures, occupations and names together.
    pub fn actors(&self) -> &[String] {
        &self.actors
    }

    /// The single role a word holds, if any. Stop-words and blocked words
    /// report as such even though they never reach a pool.
    pub fn role_of(&self, word: &str) -> Option<WordRole> {
        let t = &*TABLES;
        if t.stop_words.contains(word) {
            return Some(WordRole::Stopword);
        }
        if t.sfw_excluded.contains(word) {
            return Some(WordRole::Block);
        }
        self.roles.get(word).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_corpus() -> &'static str {
        "wander\nwandered\nwandering\nbright\nbrightly\nglimmer\nglimmered\n\
         pebble\nlantern\nhonest\nhonestly\nsneaky\nsneakily\nhopeful\n\
         kindness\nthe\nshit\nBiscuit\n  harbor  \nharbor\nrelocate\nsilently\n\
         jumping\ncarried\ncarry\nmarvelous\n"
    }

    #[test]
    fn test_empty_corpus_is_unavailable() {
        assert!(classify("").is_none());
        assert!(classify("\n   \n\t\n").is_none());
    }

    #[test]
    fn test_base_word_filter() {
        assert!(is_story_base_word("lantern"));
        assert!(!is_story_base_word("ox"));
        assert!(!is_story_base_word("extraordinary"));
        assert!(!is_story_base_word("Lantern"));
        assert!(!is_story_base_word("tea-pot"));
        assert!(!is_story_base_word("their"));
        assert!(!is_story_base_word("bullshit"));
    }

    #[test]
    fn test_unique_words() {
        let words = unique_words([" Apple", "apple", "", "pear ", "PEAR", "fig"]);
        assert_eq!(words, vec!["apple", "pear", "fig"]);
    }

    #[test]
    fn test_rank_hash_is_fnv1a() {
        assert_eq!(rank_hash(""), 2_166_136_261);
        assert_eq!(rank_hash("a"), 0xe40c_292c);
        assert_eq!(rank_hash("foobar"), 0xbf9c_f968);
    }

    #[test]
    fn test_cap_word_pool() {
        let pool: Vec<String> = (0..50).map(|i| format!("word{i}")).collect();
        let capped = cap_word_pool(pool.clone(), 10);
        assert_eq!(capped.len(), 10);
        assert_eq!(capped, cap_word_pool(pool.clone(), 10));

        let hashes: Vec<u32> = capped.iter().map(|w| rank_hash(w)).collect();
        assert!(hashes.windows(2).all(|w| w[0] <= w[1]));

        let uncapped = cap_word_pool(pool.clone(), 100);
        assert_eq!(uncapped, pool);
    }

    #[test]
    fn test_classification_rules() {
        let pools = classify(small_corpus()).unwrap();

        assert!(pools.verbs().contains(&"wanders".to_string()));
        assert!(pools.verbs().contains(&"glimmers".to_string()));
        assert!(pools.verbs().contains(&"carries".to_string()));
        assert!(pools.adjectives().contains(&"bright".to_string()));
        assert!(pools.adjectives().contains(&"honest".to_string()));
        assert!(pools.adjectives().contains(&"hopeful".to_string()));
        assert!(pools.adjectives().contains(&"marvelous".to_string()));
        assert!(pools.twists().contains(&"brightly".to_string()));
        assert!(pools.twists().contains(&"silently".to_string()));
        assert!(pools.objects().contains(&"pebble".to_string()));
        assert!(pools.objects().contains(&"harbor".to_string()));
        assert!(pools.objects().contains(&"biscuit".to_string()));

        assert!(!pools.objects().contains(&"kindness".to_string()));
        assert!(!pools.objects().contains(&"relocate".to_string()));
        assert!(!pools.objects().contains(&"jumping".to_string()));
        assert!(!pools.objects().contains(&"wander".to_string()));

        assert_eq!(pools.role_of("the"), Some(WordRole::Stopword));
        assert_eq!(pools.role_of("shit"), Some(WordRole::Block));
        assert_eq!(pools.role_of("wanders"), Some(WordRole::Verb));
        assert_eq!(pools.role_of("pebble"), Some(WordRole::Object));
        assert_eq!(pools.role_of("otter"), Some(WordRole::Actor));
        assert_eq!(pools.role_of("zzzz"), None);
    }

    #[test]
    fn test_seeds_present_without_corpus_evidence() {
        let pools = classify("pebble\n").unwrap();
        assert!(pools.verbs().contains(&"juggles".to_string()));
        assert!(pools.adjectives().contains(&"fuzzy".to_string()));
        assert!(pools.twists().contains(&"proudly".to_string()));
        assert!(pools.objects().contains(&"toaster".to_string()));
        assert!(pools.names().contains(&"ana".to_string()));
        assert!(pools.actors().contains(&"otter".to_string()));
    }

    #[test]
    fn test_actor_pools() {
        let pools = classify("pebble\n").unwrap();
        assert!(pools.names().iter().all(|n| pools.actors().contains(n)));
        assert!(pools.actors().contains(&"panther".to_string()));
        assert!(!pools.names().contains(&"panther".to_string()));
        let unique: HashSet<&String> = pools.actors().iter().collect();
        assert_eq!(unique.len(), pools.actors().len());
    }

    #[test]
    fn test_classification_is_deterministic() {
        let corpus = crate::wordlist::embedded_corpus();
        let first = classify(corpus).unwrap();
        let second = classify(corpus).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_role_pools_are_disjoint() {
        let pools = classify(crate::wordlist::embedded_corpus()).unwrap();
        let named = [
            ("verbs", pools.verbs()),
            ("adjectives", pools.adjectives()),
            ("twists", pools.twists()),
            ("objects", pools.objects()),
            ("actors", pools.actors()),
        ];

        for (i, (left_name, left)) in named.iter().enumerate() {
            let left: HashSet<&String> = left.iter().collect();
            for (right_name, right) in &named[i + 1..] {
                let shared: Vec<&String> = right.iter().filter(|w| left.contains(w)).collect();
                assert!(
                    shared.is_empty(),
                    "{} and {} share {:?}",
                    left_name,
                    right_name,
                    shared
                );
            }
        }
    }

    #[test]
    fn test_corpus_actor_words_stay_actors() {
        let pools = classify("robot\nfalcon\nwhale\npebble\n").unwrap();
        for word in ["robot", "falcon", "whale"] {
            assert!(!pools.objects().contains(&word.to_string()), "{} is an object", word);
            assert!(pools.actors().contains(&word.to_string()));
            assert_eq!(pools.role_of(word), Some(WordRole::Actor));
        }
        assert_eq!(pools.role_of("pebble"), Some(WordRole::Object));
    }

    #[test]
    fn test_vivid_pools_are_subsets() {
        let pools = classify(crate::wordlist::embedded_corpus()).unwrap();
        assert!(pools
            .vivid_adjectives()
            .iter()
            .all(|w| pools.adjectives().contains(w)));
        assert!(pools
            .vivid_objects()
            .iter()
            .all(|w| pools.objects().contains(w)));
        assert!(
            pools.vivid_adjectives().len() <= TABLES.adjective_seeds.len() + VIVID_ADJECTIVE_CAP
        );
        assert!(pools.objects().len() <= TABLES.object_seeds.len() + OBJECT_CAP);
    }
}
