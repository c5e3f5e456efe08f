use crate::archetype::{ArchetypeId, ArchetypeKind};
use crate::charset::CharsetSelection;
use crate::entropy::Estimate;
use crate::lexicon::RolePools;
use crate::pattern::{generate_from_pool, Constraints};
use crate::random::SecureRandom;
use crate::slogan::{pick_slogan, SLOGANS};
use crate::story::{self, StoryState};
use crate::wordlist;
use anyhow::{ensure, Result};
use std::borrow::Cow;
use zeroize::Zeroizing;

pub const DEFAULT_CUSTOM_LENGTH: usize = 20;
pub const MAX_CUSTOM_LENGTH: usize = 256;

pub const CUSTOM_NAME: &str = "Custom";

#[derive(Debug)]
pub struct Generated {
    pub name: &'static str,
    pub password: Zeroizing<String>,
    pub estimate: Option<Estimate>,
}

/// Everything that survives between generation calls: the random source,
/// the classified lexicon, the story toggles and the last slogan shown.
pub struct GeneratorContext {
    random: SecureRandom,
    lexicon: Option<Cow<'static, RolePools>>,
    story_bits: Option<u32>,
    story: StoryState,
    last_slogan: Option<usize>,
}

impl GeneratorContext {
    pub fn new(random: SecureRandom, lexicon: Option<Cow<'static, RolePools>>) -> Self {
        let story_bits = lexicon.as_deref().map(story::estimate_bits);
        Self {
            random,
            lexicon,
            story_bits,
            story: StoryState::default(),
            last_slogan: None,
        }
    }

    /// Uses the classified built-in corpus.
    pub fn with_embedded_lexicon(random: SecureRandom) -> Self {
        Self::new(random, wordlist::embedded_lexicon().map(Cow::Borrowed))
    }

    pub fn has_lexicon(&self) -> bool {
        self.lexicon.is_some()
    }

    pub fn sfw(&self) -> bool {
        self.story.sfw
    }

    pub fn set_sfw(&mut self, sfw: bool) {
        self.story.sfw = sfw;
    }

    pub fn story_state(&self) -> &StoryState {
        &self.story
    }

    /// `Ok(None)` when the archetype cannot run, i.e. a story without a
    /// lexicon.
    pub fn generate(&mut self, id: ArchetypeId) -> Result<Option<Generated>> {
        let archetype = id.archetype();
        let generated = match &archetype.kind {
            ArchetypeKind::Pattern(spec) => Generated {
                name: archetype.name,
                password: spec.generate(&mut self.random)?,
                estimate: spec.estimate(),
            },
            ArchetypeKind::Story => {
                let Some(pools) = self.lexicon.as_deref() else {
                    log::debug!("No lexicon loaded, skipping {}", archetype.name);
                    return Ok(None);
                };
                Generated {
                    name: archetype.name,
                    password: story::generate_story(&mut self.random, pools, &mut self.story)?,
                    estimate: self.story_bits.map(Estimate::from_bits),
                }
            }
        };
        Ok(Some(generated))
    }

    /// Uniform draw from the union of the enabled toggles. A length below the
    /// number of enabled toggles is raised to that number.
    pub fn generate_custom(
        &mut self,
        selection: &CharsetSelection,
        length: usize,
    ) -> Result<Generated> {
        ensure!(
            (1..=MAX_CUSTOM_LENGTH).contains(&length),
            "Length must be between 1 and {} (got {})",
            MAX_CUSTOM_LENGTH,
            length
        );

        let length = length.max(selection.enabled_count());
        let pool = selection.pool();
        let password = generate_from_pool(&mut self.random, length, &pool, &[], Constraints::NONE)?;

        Ok(Generated {
            name: CUSTOM_NAME,
            password,
            estimate: Estimate::for_pool(length, pool.len()),
        })
    }

    pub fn slogan(&mut self) -> Result<&'static str> {
        let index = pick_slogan(&mut self.random, self.last_slogan)?;
        self.last_slogan = Some(index);
        Ok(SLOGANS[index])
    }
}
