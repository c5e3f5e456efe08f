use crate::charset::{self, CharClass, CharPool};
use crate::entropy::Estimate;
use crate::pattern::{generate_from_pool, Constraints};
use crate::random::SecureRandom;
use anyhow::Result;
use std::sync::LazyLock;
use zeroize::Zeroizing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchetypeId {
    Compatible,
    Memorable,
    Alphanumeric,
    Short,
    Maximum,
}

impl ArchetypeId {
    /// Display order.
    pub const ALL: [ArchetypeId; 5] = [
        ArchetypeId::Compatible,
        ArchetypeId::Memorable,
        ArchetypeId::Alphanumeric,
        ArchetypeId::Short,
        ArchetypeId::Maximum,
    ];

    pub fn archetype(self) -> &'static Archetype {
        &REGISTRY[self as usize]
    }
}

/// A fixed pool, length and constraint set for the pattern generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSpec {
    pub length: usize,
    pub pool: CharPool,
    pub requirements: Vec<CharPool>,
    pub constraints: Constraints,
}

impl PatternSpec {
    pub fn generate(&self, rng: &mut SecureRandom) -> Result<Zeroizing<String>> {
        generate_from_pool(
            rng,
            self.length,
            &self.pool,
            &self.requirements,
            self.constraints,
        )
    }

    pub fn estimate(&self) -> Option<Estimate> {
        Estimate::for_pool(self.length, self.pool.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchetypeKind {
    Pattern(PatternSpec),
    /// Needs a classified lexicon; unavailable without one.
    Story,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archetype {
    pub id: ArchetypeId,
    pub name: &'static str,
    pub kind: ArchetypeKind,
}

fn alphanumeric_requirements() -> Vec<CharPool> {
    vec![charset::upper(), charset::lower(), charset::digits()]
}

fn safe_spec(length: usize, constraints: Constraints) -> PatternSpec {
    let mut requirements = alphanumeric_requirements();
    requirements.push(charset::symbols_safe());
    PatternSpec {
        length,
        pool: CharPool::concat(&requirements.iter().collect::<Vec<_>>()),
        requirements,
        constraints,
    }
}

fn build_registry() -> Vec<Archetype> {
    let full_ascii = charset::full_ascii();
    let mut maximum_requirements = alphanumeric_requirements();
    maximum_requirements.push(full_ascii.filter(|c| charset::char_class(c) == CharClass::Symbol));

    vec![
        Archetype {
            id: ArchetypeId::Compatible,
            name: "Works with Most Sites",
            kind: ArchetypeKind::Pattern(safe_spec(
                18,
                Constraints {
                    starts_with_letter: true,
                    no_triple_consecutive: true,
                    no_sequential_run: true,
                    ..Constraints::NONE
                },
            )),
        },
        Archetype {
            id: ArchetypeId::Memorable,
            name: "If You Need to Remember It",
            kind: ArchetypeKind::Story,
        },
        Archetype {
            id: ArchetypeId::Alphanumeric,
            name: "No Special Characters",
            kind: ArchetypeKind::Pattern(PatternSpec {
                length: 22,
                pool: CharPool::concat(&[&charset::upper(), &charset::lower(), &charset::digits()]),
                requirements: alphanumeric_requirements(),
                constraints: Constraints {
                    no_double_consecutive: true,
                    ..Constraints::NONE
                },
            }),
        },
        Archetype {
            id: ArchetypeId::Short,
            name: "If Character Limit Is Short",
            kind: ArchetypeKind::Pattern(safe_spec(
                12,
                Constraints {
                    starts_with_letter: true,
                    ..Constraints::NONE
                },
            )),
        },
        Archetype {
            id: ArchetypeId::Maximum,
            name: "Maximum Security",
            kind: ArchetypeKind::Pattern(PatternSpec {
                length: 32,
                pool: full_ascii,
                requirements: maximum_requirements,
                constraints: Constraints::NONE,
            }),
        },
    ]
}

static REGISTRY: LazyLock<Vec<Archetype>> = LazyLock::new(build_registry);

pub fn archetypes() -> &'static [Archetype] {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::has_sequential_run;

    fn pattern_spec(id: ArchetypeId) -> &'static PatternSpec {
        match &id.archetype().kind {
            ArchetypeKind::Pattern(spec) => spec,
            ArchetypeKind::Story => panic!("{:?} is not a pattern archetype", id),
        }
    }

    #[test]
    fn test_registry_order_matches_ids() {
        assert_eq!(archetypes().len(), ArchetypeId::ALL.len());
        for (archetype, id) in archetypes().iter().zip(ArchetypeId::ALL) {
            assert_eq!(archetype.id, id);
            assert_eq!(id.archetype().id, id);
        }
    }

    #[test]
    fn test_preset_shapes() {
        let compatible = pattern_spec(ArchetypeId::Compatible);
        assert_eq!((compatible.length, compatible.pool.len()), (18, 72));
        assert_eq!(compatible.requirements.len(), 4);

        let alphanumeric = pattern_spec(ArchetypeId::Alphanumeric);
        assert_eq!((alphanumeric.length, alphanumeric.pool.len()), (22, 62));
        assert!(alphanumeric.constraints.no_double_consecutive);

        let short = pattern_spec(ArchetypeId::Short);
        assert_eq!((short.length, short.pool.len()), (12, 72));
        assert!(short.constraints.starts_with_letter);
        assert!(!short.constraints.no_sequential_run);

        let maximum = pattern_spec(ArchetypeId::Maximum);
        assert_eq!((maximum.length, maximum.pool.len()), (32, 94));
        assert_eq!(maximum.requirements[3].len(), 32);
        assert_eq!(maximum.constraints, Constraints::NONE);

        assert_eq!(ArchetypeId::Memorable.archetype().kind, ArchetypeKind::Story);
    }

    #[test]
    fn test_requirements_are_subsets() {
        for archetype in archetypes() {
            if let ArchetypeKind::Pattern(spec) = &archetype.kind {
                for requirement in &spec.requirements {
                    assert!(requirement.is_subset_of(&spec.pool), "{}", archetype.name);
                }
            }
        }
    }

    #[test]
    fn test_estimates() {
        assert_eq!(pattern_spec(ArchetypeId::Compatible).estimate().unwrap().bits, 111);
        assert_eq!(pattern_spec(ArchetypeId::Maximum).estimate().unwrap().bits, 210);
    }

    #[test]
    fn test_compatible_passwords() {
        let spec = pattern_spec(ArchetypeId::Compatible);
        let mut rng = SecureRandom::seeded(b"compatible");
        for _ in 0..500 {
            let password = spec.generate(&mut rng).unwrap();
            let chars: Vec<char> = password.chars().collect();
            assert_eq!(chars.len(), 18);
            assert!(chars[0].is_ascii_alphabetic());
            assert!(!has_sequential_run(&chars));
            assert!(chars.iter().all(|&c| spec.pool.contains(c)));
        }
    }
}
