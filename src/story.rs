use crate::lexicon::{table_words, RolePools};
use crate::random::SecureRandom;
use crate::tables;
use anyhow::Result;
use std::collections::HashSet;
use std::sync::LazyLock;
use zeroize::Zeroizing;

pub const MAX_UNIQUE_ATTEMPTS: usize = 60;
pub const VIVID_ADJECTIVE_PERCENT: usize = 78;
pub const VIVID_OBJECT_PERCENT: usize = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Actor,
    Verb,
    Relation,
    Adjective,
    Object,
    Twist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorPool {
    Names,
    Mixed,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Schema {
    pub id: &'static str,
    pub base: [Slot; 5],
    pub six: [Slot; 6],
    pub actor_pool: ActorPool,
}

pub static SCHEMAS: [Schema; 7] = {
    use self::Slot::{
        Actor as X, Adjective as A, Object as O, Relation as R, Twist as T, Verb as V,
    };
    [
        Schema {
            id: "scene-a",
            base: [X, V, R, A, O],
            six: [X, V, R, A, O, T],
            actor_pool: ActorPool::Mixed,
        },
        Schema {
            id: "scene-b",
            base: [A, O, V, R, X],
            six: [A, O, V, R, X, T],
            actor_pool: ActorPool::Mixed,
        },
        Schema {
            id: "scene-c",
            base: [X, V, O, R, A],
            six: [X, V, O, R, A, T],
            actor_pool: ActorPool::Mixed,
        },
        Schema {
            id: "scene-d",
            base: [O, V, R, X, A],
            six: [O, V, R, X, A, T],
            actor_pool: ActorPool::Mixed,
        },
        Schema {
            id: "scene-e",
            base: [A, X, V, R, O],
            six: [A, X, V, R, O, T],
            actor_pool: ActorPool::Mixed,
        },
        Schema {
            id: "scene-f",
            base: [X, V, R, A, O],
            six: [X, V, R, A, O, T],
            actor_pool: ActorPool::Names,
        },
        Schema {
            id: "scene-g",
            base: [O, R, A, X, V],
            six: [O, R, A, X, V, T],
            actor_pool: ActorPool::Mixed,
        },
    ]
};

/// How the sentence is dressed up. `Six` swaps the literal for a sixth,
/// adverbial slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Ordinal,
    Year,
    Time,
    Six,
}

impl Pattern {
    pub const ALL: [Pattern; 4] = [Pattern::Ordinal, Pattern::Year, Pattern::Time, Pattern::Six];

    pub fn id(self) -> &'static str {
        match self {
            Pattern::Ordinal => "ordinal",
            Pattern::Year => "year",
            Pattern::Time => "time",
            Pattern::Six => "six",
        }
    }
}

static RELATIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| table_words(tables::RELATIONS));
static PROFANE_ADJECTIVES: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| table_words(tables::PROFANE_ADJECTIVES));
static PROFANE_OBJECTS: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| table_words(tables::PROFANE_OBJECTS));
static PROFANE_VERBS: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| table_words(tables::PROFANE_VERBS));
static PROFANE_TWISTS: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| table_words(tables::PROFANE_TWISTS));

/// Profane replacements for a slot, empty for slots that are never swapped.
pub fn profane_pool(slot: Slot) -> &'static [&'static str] {
    match slot {
        Slot::Adjective => &PROFANE_ADJECTIVES,
        Slot::Object => &PROFANE_OBJECTS,
        Slot::Verb => &PROFANE_VERBS,
        Slot::Twist => &PROFANE_TWISTS,
        Slot::Actor | Slot::Relation => &[],
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotFill<'a> {
    pub actor: &'a str,
    pub verb: &'a str,
    pub relation: &'a str,
    pub adjective: &'a str,
    pub object: &'a str,
    pub twist: Option<&'a str>,
}

impl<'a> SlotFill<'a> {
    pub fn get(&self, slot: Slot) -> Option<&'a str> {
        match slot {
            Slot::Actor => Some(self.actor),
            Slot::Verb => Some(self.verb),
            Slot::Relation => Some(self.relation),
            Slot::Adjective => Some(self.adjective),
            Slot::Object => Some(self.object),
            Slot::Twist => self.twist,
        }
    }

    fn set(&mut self, slot: Slot, word: &'a str) {
        match slot {
            Slot::Actor => self.actor = word,
            Slot::Verb => self.verb = word,
            Slot::Relation => self.relation = word,
            Slot::Adjective => self.adjective = word,
            Slot::Object => self.object = word,
            Slot::Twist => self.twist = Some(word),
        }
    }
}

/// Draws from `pool`, skipping words already used in this password. After
/// [`MAX_UNIQUE_ATTEMPTS`] misses any pool member is accepted, repeats
/// included.
fn pick_unique<'a>(
    rng: &mut SecureRandom,
    pool: &'a [String],
    used: &mut HashSet<&'a str>,
) -> Result<&'a str> {
    for _ in 0..MAX_UNIQUE_ATTEMPTS {
        let word = rng.pick(pool)?.as_str();
        if used.insert(word) {
            return Ok(word);
        }
    }
    log::debug!("No unused word after {} attempts", MAX_UNIQUE_ATTEMPTS);
    Ok(rng.pick(pool)?.as_str())
}

fn pick_biased_unique<'a>(
    rng: &mut SecureRandom,
    primary: &'a [String],
    fallback: &'a [String],
    used: &mut HashSet<&'a str>,
    primary_percent: usize,
) -> Result<&'a str> {
    if !primary.is_empty() && rng.chance_percent(primary_percent)? {
        return pick_unique(rng, primary, used);
    }
    pick_unique(rng, fallback, used)
}

pub fn fill_slots<'a>(
    rng: &mut SecureRandom,
    pools: &'a RolePools,
    schema: &Schema,
    include_twist: bool,
) -> Result<SlotFill<'a>> {
    let mut used = HashSet::new();
    let actors = match schema.actor_pool {
        ActorPool::Names => pools.names(),
        ActorPool::Mixed => pools.actors(),
    };

    let actor = pick_unique(rng, actors, &mut used)?;
    let verb = pick_unique(rng, pools.verbs(), &mut used)?;
    let relation = *rng.pick(RELATIONS.as_slice())?;
    let adjective = pick_biased_unique(
        rng,
        pools.vivid_adjectives(),
        pools.adjectives(),
        &mut used,
        VIVID_ADJECTIVE_PERCENT,
    )?;
    let object = pick_biased_unique(
        rng,
        pools.vivid_objects(),
        pools.objects(),
        &mut used,
        VIVID_OBJECT_PERCENT,
    )?;
    let twist = if include_twist {
        Some(pick_unique(rng, pools.twists(), &mut used)?)
    } else {
        None
    };

    Ok(SlotFill {
        actor,
        verb,
        relation,
        adjective,
        object,
        twist,
    })
}

/// Overwrites one filled adjective, object, verb or twist slot with a
/// profane word for that role. Returns the slot that changed.
pub fn inject_profanity(rng: &mut SecureRandom, slots: &mut SlotFill<'_>) -> Result<Slot> {
    let targets: Vec<Slot> = [Slot::Adjective, Slot::Object, Slot::Verb, Slot::Twist]
        .into_iter()
        .filter(|&slot| slots.get(slot).is_some())
        .collect();

    let target = *rng.pick(&targets)?;
    let word = *rng.pick(profane_pool(target))?;
    slots.set(target, word);
    Ok(target)
}

pub fn ordinal_suffix(value: u32) -> &'static str {
    let mod100 = value % 100;
    if (11..=13).contains(&mod100) {
        return "th";
    }
    match value % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// 10th through 99th.
pub fn random_ordinal(rng: &mut SecureRandom) -> Result<String> {
    let value = 10 + rng.uniform_int(90)? as u32;
    Ok(format!("{}{}", value, ordinal_suffix(value)))
}

/// 1901 through 2099.
pub fn random_year(rng: &mut SecureRandom) -> Result<String> {
    Ok((1901 + rng.uniform_int(199)?).to_string())
}

/// Any half-hour of the day as 24h `HH:MM`.
pub fn random_half_hour(rng: &mut SecureRandom) -> Result<String> {
    let slot = rng.uniform_int(48)?;
    let minute = if slot % 2 == 0 { "00" } else { "30" };
    Ok(format!("{:02}:{}", slot / 2, minute))
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Everything chosen for one story password, before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryDraft<'a> {
    pub schema: &'static Schema,
    pub pattern: Pattern,
    pub slots: SlotFill<'a>,
    pub profane_slot: Option<Slot>,
    pub punctuation: char,
    /// The ordinal, year or time, absent for [`Pattern::Six`].
    pub literal: Option<String>,
}

impl StoryDraft<'_> {
    pub fn render(&self) -> Zeroizing<String> {
        let order: &[Slot] = match self.pattern {
            Pattern::Six => &self.schema.six,
            _ => &self.schema.base,
        };
        let literal = self.literal.as_deref().unwrap_or_default();

        let mut parts: Zeroizing<Vec<String>> = Zeroizing::new(Vec::with_capacity(order.len() + 2));
        for &slot in order {
            if self.pattern == Pattern::Ordinal && slot == Slot::Object {
                parts.push(literal.to_string());
            }
            let token = self.slots.get(slot).unwrap_or_default();
            if slot == Slot::Actor {
                parts.push(title_case(token));
            } else {
                parts.push(token.to_string());
            }
        }

        if self.pattern == Pattern::Year {
            parts.push("in".to_string());
            parts.push(literal.to_string());
        }

        let mut body = Zeroizing::new(parts.join("-"));
        if self.pattern == Pattern::Time {
            body = Zeroizing::new(format!("At-{}-{}", literal, &*body));
        }
        body.push(self.punctuation);
        body
    }
}

/// Picks a schema and pattern, fills the slots and, with `sfw` off, swaps
/// one slot for a profane word.
pub fn draft_story<'a>(
    rng: &mut SecureRandom,
    pools: &'a RolePools,
    sfw: bool,
) -> Result<StoryDraft<'a>> {
    let schema = rng.pick(&SCHEMAS)?;
    let pattern = *rng.pick(&Pattern::ALL)?;
    let mut slots = fill_slots(rng, pools, schema, pattern == Pattern::Six)?;

    let profane_slot = if sfw {
        None
    } else {
        Some(inject_profanity(rng, &mut slots)?)
    };

    let punctuation = *rng.pick(&tables::STORY_PUNCTUATION)?;
    let literal = match pattern {
        Pattern::Ordinal => Some(random_ordinal(rng)?),
        Pattern::Year => Some(random_year(rng)?),
        Pattern::Time => Some(random_half_hour(rng)?),
        Pattern::Six => None,
    };

    log::trace!("Story draft: schema {} pattern {}", schema.id, pattern.id());

    Ok(StoryDraft {
        schema,
        pattern,
        slots,
        profane_slot,
        punctuation,
        literal,
    })
}

/// Result of the latest story generation. Nothing older is kept.
#[derive(Debug)]
pub struct StoryState {
    pub sfw: bool,
    pub last_schema_id: Option<&'static str>,
    pub last_pattern: Option<Pattern>,
    pub last_password: Option<Zeroizing<String>>,
}

impl Default for StoryState {
    fn default() -> Self {
        Self {
            sfw: true,
            last_schema_id: None,
            last_pattern: None,
            last_password: None,
        }
    }
}

pub fn generate_story(
    rng: &mut SecureRandom,
    pools: &RolePools,
    state: &mut StoryState,
) -> Result<Zeroizing<String>> {
    let draft = draft_story(rng, pools, state.sfw)?;
    let password = draft.render();

    state.last_schema_id = Some(draft.schema.id);
    state.last_pattern = Some(draft.pattern);
    state.last_password = Some(password.clone());
    Ok(password)
}

fn log2_len(len: usize) -> f64 {
    (len.max(1) as f64).log2()
}

/// Rough lower bound on story entropy: every draw is treated as uniform
/// over the smallest pool it can come from, and the weakest pattern wins.
pub fn estimate_bits(pools: &RolePools) -> u32 {
    let smallest = |a: &[String], b: &[String]| a.len().min(b.len());

    let shared = log2_len(SCHEMAS.len())
        + log2_len(Pattern::ALL.len())
        + log2_len(tables::STORY_PUNCTUATION.len())
        + log2_len(pools.names().len().min(pools.actors().len()))
        + log2_len(pools.verbs().len())
        + log2_len(RELATIONS.len())
        + log2_len(smallest(pools.vivid_adjectives(), pools.adjectives()))
        + log2_len(smallest(pools.vivid_objects(), pools.objects()));

    let weakest_pattern = [
        log2_len(90),
        log2_len(199),
        log2_len(48),
        log2_len(pools.twists().len()),
    ]
    .into_iter()
    .fold(f64::INFINITY, f64::min);

    (shared + weakest_pattern).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::classify;
    use crate::wordlist::embedded_lexicon;

    fn schema(id: &str) -> &'static Schema {
        SCHEMAS.iter().find(|s| s.id == id).unwrap()
    }

    fn fixed_draft(
        pattern: Pattern,
        literal: Option<&str>,
        schema_id: &str,
    ) -> StoryDraft<'static> {
        StoryDraft {
            schema: schema(schema_id),
            pattern,
            slots: SlotFill {
                actor: "otter",
                verb: "juggles",
                relation: "under",
                adjective: "fuzzy",
                object: "toaster",
                twist: (pattern == Pattern::Six).then_some("boldly"),
            },
            profane_slot: None,
            punctuation: '!',
            literal: literal.map(str::to_string),
        }
    }

    #[test]
    fn test_schema_table() {
        assert_eq!(SCHEMAS.len(), 7);
        for schema in &SCHEMAS {
            assert_eq!(&schema.six[..5], &schema.base[..]);
            assert_eq!(schema.six[5], Slot::Twist);
            for slot in [Slot::Actor, Slot::Verb, Slot::Relation, Slot::Adjective, Slot::Object] {
                assert_eq!(schema.base.iter().filter(|&&s| s == slot).count(), 1);
            }
        }
        assert_eq!(schema("scene-f").actor_pool, ActorPool::Names);
    }

    #[test]
    fn test_render_ordinal() {
        let draft = fixed_draft(Pattern::Ordinal, Some("43rd"), "scene-a");
        assert_eq!(&*draft.render(), "Otter-juggles-under-fuzzy-43rd-toaster!");
    }

    #[test]
    fn test_render_year() {
        let draft = fixed_draft(Pattern::Year, Some("1999"), "scene-a");
        assert_eq!(&*draft.render(), "Otter-juggles-under-fuzzy-toaster-in-1999!");
    }

    #[test]
    fn test_render_time() {
        let draft = fixed_draft(Pattern::Time, Some("07:30"), "scene-a");
        assert_eq!(&*draft.render(), "At-07:30-Otter-juggles-under-fuzzy-toaster!");
    }

    #[test]
    fn test_render_six() {
        let draft = fixed_draft(Pattern::Six, None, "scene-a");
        assert_eq!(&*draft.render(), "Otter-juggles-under-fuzzy-toaster-boldly!");
    }

    #[test]
    fn test_render_follows_schema_order() {
        let draft = fixed_draft(Pattern::Ordinal, Some("12th"), "scene-g");
        assert_eq!(&*draft.render(), "12th-toaster-under-fuzzy-Otter-juggles!");

        let draft = fixed_draft(Pattern::Six, None, "scene-b");
        assert_eq!(&*draft.render(), "fuzzy-toaster-juggles-under-Otter-boldly!");
    }

    #[test]
    fn test_ordinal_suffix() {
        let cases = [
            (10, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (24, "th"),
            (42, "nd"),
            (99, "th"),
            (101, "st"),
            (111, "th"),
        ];
        for (value, suffix) in cases {
            assert_eq!(ordinal_suffix(value), suffix, "suffix of {}", value);
        }
    }

    #[test]
    fn test_literal_ranges() {
        let mut rng = SecureRandom::seeded(b"literals");
        let mut times = HashSet::new();
        for _ in 0..3000 {
            let ordinal = random_ordinal(&mut rng).unwrap();
            let value: u32 = ordinal[..2].parse().unwrap();
            assert!((10..=99).contains(&value));
            assert_eq!(&ordinal[2..], ordinal_suffix(value));

            let year: u32 = random_year(&mut rng).unwrap().parse().unwrap();
            assert!((1901..=2099).contains(&year));

            let time = random_half_hour(&mut rng).unwrap();
            assert_eq!(time.len(), 5);
            let hour: u32 = time[..2].parse().unwrap();
            assert!(hour < 24);
            assert!(&time[3..] == "00" || &time[3..] == "30");
            times.insert(time);
        }
        assert_eq!(times.len(), 48);
    }

    #[test]
    fn test_story_shape_and_uniqueness() {
        let pools = embedded_lexicon().unwrap();
        let mut rng = SecureRandom::seeded(b"story shape");

        for _ in 0..500 {
            let draft = draft_story(&mut rng, pools, true).unwrap();
            let password = draft.render();

            assert!(password.is_ascii());
            assert!(password.ends_with('!') || password.ends_with('?'));
            assert!(!password.contains(' '));
            assert!(password.chars().next().unwrap().is_ascii_alphanumeric());

            let roles = [Slot::Actor, Slot::Verb, Slot::Adjective, Slot::Object, Slot::Twist];
            let words: Vec<&str> = roles
                .into_iter()
                .filter_map(|slot| draft.slots.get(slot))
                .collect();
            let unique: HashSet<&str> = words.iter().copied().collect();
            assert_eq!(unique.len(), words.len(), "repeated word in {}", &*password);

            assert_eq!(draft.slots.twist.is_some(), draft.pattern == Pattern::Six);
            assert_eq!(draft.literal.is_none(), draft.pattern == Pattern::Six);
        }
    }

    #[test]
    fn test_all_schemas_and_patterns_reachable() {
        let pools = embedded_lexicon().unwrap();
        let mut rng = SecureRandom::seeded(b"coverage");
        let mut schemas = HashSet::new();
        let mut patterns = HashSet::new();
        for _ in 0..400 {
            let draft = draft_story(&mut rng, pools, true).unwrap();
            schemas.insert(draft.schema.id);
            patterns.insert(draft.pattern.id());
        }
        assert_eq!(schemas.len(), SCHEMAS.len());
        assert_eq!(patterns.len(), Pattern::ALL.len());
    }

    #[test]
    fn test_names_schema_uses_names() {
        let pools = embedded_lexicon().unwrap();
        let mut rng = SecureRandom::seeded(b"names");
        for _ in 0..200 {
            let slots = fill_slots(&mut rng, pools, schema("scene-f"), false).unwrap();
            assert!(pools.names().iter().any(|n| n == slots.actor));
        }
    }

    #[test]
    fn test_sfw_off_swaps_exactly_one_slot() {
        let pools = embedded_lexicon().unwrap();

        for i in 0..200u32 {
            let seed = format!("profanity {}", i);
            let clean =
                draft_story(&mut SecureRandom::seeded(seed.as_bytes()), pools, true).unwrap();
            let spicy =
                draft_story(&mut SecureRandom::seeded(seed.as_bytes()), pools, false).unwrap();

            assert!(clean.profane_slot.is_none());
            let target = spicy.profane_slot.unwrap();
            assert_ne!(target, Slot::Actor);
            assert_ne!(target, Slot::Relation);

            let swapped = spicy.slots.get(target).unwrap();
            assert!(profane_pool(target).contains(&swapped));

            let every_slot = [
                Slot::Actor,
                Slot::Verb,
                Slot::Relation,
                Slot::Adjective,
                Slot::Object,
                Slot::Twist,
            ];
            for slot in every_slot {
                if slot != target {
                    assert_eq!(clean.slots.get(slot), spicy.slots.get(slot));
                }
            }
            assert_eq!(clean.schema.id, spicy.schema.id);
            assert_eq!(clean.pattern, spicy.pattern);
        }
    }

    #[test]
    fn test_twist_only_swapped_when_present() {
        let pools = embedded_lexicon().unwrap();
        let mut rng = SecureRandom::seeded(b"twist");
        for _ in 0..300 {
            let draft = draft_story(&mut rng, pools, false).unwrap();
            if draft.profane_slot == Some(Slot::Twist) {
                assert_eq!(draft.pattern, Pattern::Six);
            }
        }
    }

    #[test]
    fn test_generate_story_updates_state() {
        let pools = embedded_lexicon().unwrap();
        let mut rng = SecureRandom::seeded(b"state");
        let mut state = StoryState::default();
        assert!(state.sfw);

        let password = generate_story(&mut rng, pools, &mut state).unwrap();
        assert_eq!(state.last_password.as_deref().map(|s| s.as_str()), Some(password.as_str()));
        assert!(state.last_schema_id.is_some());
        assert!(state.last_pattern.is_some());
    }

    #[test]
    fn test_seed_only_corpus_generates() {
        let pools = classify("pebble\n").unwrap();
        let mut rng = SecureRandom::seeded(b"seed only");
        let draft = draft_story(&mut rng, &pools, true).unwrap();
        assert!(!draft.render().is_empty());
    }

    #[test]
    fn test_pick_unique_repeats_when_pool_is_used_up() {
        let mut rng = SecureRandom::seeded(b"used up");
        let pool = vec!["otter".to_string()];
        let mut used: HashSet<&str> = HashSet::new();
        used.insert("otter");

        let word = pick_unique(&mut rng, &pool, &mut used).unwrap();
        assert_eq!(word, "otter");
        assert_eq!(used.len(), 1);
    }

    #[test]
    fn test_pick_unique_skips_used_words() {
        let mut rng = SecureRandom::seeded(b"skip used");
        let pool = vec!["otter".to_string(), "heron".to_string()];
        let mut used: HashSet<&str> = HashSet::new();
        used.insert("otter");

        for _ in 0..20 {
            let mut attempt = used.clone();
            assert_eq!(pick_unique(&mut rng, &pool, &mut attempt).unwrap(), "heron");
        }
    }

    #[test]
    fn test_biased_pick_uses_fallback_when_primary_empty() {
        let mut rng = SecureRandom::seeded(b"biased");
        let fallback = vec!["lantern".to_string()];
        let mut used = HashSet::new();
        let word = pick_biased_unique(&mut rng, &[], &fallback, &mut used, 100).unwrap();
        assert_eq!(word, "lantern");
    }

    #[test]
    fn test_estimate_bits() {
        let pools = embedded_lexicon().unwrap();
        let bits = estimate_bits(pools);
        assert!(bits > 30, "estimate too low: {}", bits);
        assert!(bits < 120, "estimate too high: {}", bits);
    }
}
