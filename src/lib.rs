pub mod archetype;
pub mod charset;
pub mod context;
pub mod entropy;
pub mod lexicon;
pub mod morphology;
pub mod pattern;
pub mod random;
pub mod slogan;
pub mod story;
pub mod tables;
pub mod ui;
pub mod wordlist;

pub use archetype::{archetypes, Archetype, ArchetypeId, ArchetypeKind};
pub use charset::{CharPool, Charset, CharsetSelection};
pub use context::{GeneratorContext, Generated};
pub use entropy::Estimate;
pub use lexicon::{classify, RolePools, WordRole};
pub use pattern::{generate_from_pool, Constraints};
pub use random::SecureRandom;
pub use story::{generate_story, StoryState};
pub use wordlist::{embedded_lexicon, load_lexicon};
