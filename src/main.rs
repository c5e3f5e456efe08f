use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use storypass::archetype::ArchetypeId;
use storypass::charset::{Charset, CharsetSelection};
use storypass::context::{GeneratorContext, DEFAULT_CUSTOM_LENGTH, MAX_CUSTOM_LENGTH};
use storypass::lexicon::RolePools;
use storypass::random::SecureRandom;
use storypass::ui::{self, DisplayOptions, RandomSource, SessionInfo};
use storypass::wordlist;

#[derive(Parser)]
#[command(
    name = "storypass",
    version,
    author,
    about = "Client-side password and memorable story-passphrase generator"
)]
struct Cli {
    #[arg(short, long, value_enum, default_value = "all")]
    archetype: ArchetypeArg,

    /// Comma-separated toggles; switches to custom mode
    #[arg(short, long, value_enum, value_delimiter = ',')]
    charset: Vec<CharsetArg>,

    /// Length in custom mode
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_CUSTOM_LENGTH as u16,
        value_parser = clap::value_parser!(u16).range(1..=MAX_CUSTOM_LENGTH as i64)
    )]
    length: u16,

    /// Passwords per archetype
    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..=1000)
    )]
    count: u32,

    /// Allow profanity in story passwords
    #[arg(long)]
    nsfw: bool,

    /// Newline-separated corpus replacing the built-in one
    #[arg(short, long, env = "STORYPASS_WORDLIST")]
    wordlist: Option<PathBuf>,

    /// Reproducible output from a ChaCha20 keystream; never for real secrets
    #[arg(long)]
    seed: Option<String>,

    #[arg(short, long)]
    quiet: bool,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
enum ArchetypeArg {
    All,
    Compatible,
    Memorable,
    Alphanumeric,
    Short,
    Maximum,
}

impl ArchetypeArg {
    fn ids(self) -> Vec<ArchetypeId> {
        match self {
            ArchetypeArg::All => ArchetypeId::ALL.to_vec(),
            ArchetypeArg::Compatible => vec![ArchetypeId::Compatible],
            ArchetypeArg::Memorable => vec![ArchetypeId::Memorable],
            ArchetypeArg::Alphanumeric => vec![ArchetypeId::Alphanumeric],
            ArchetypeArg::Short => vec![ArchetypeId::Short],
            ArchetypeArg::Maximum => vec![ArchetypeId::Maximum],
        }
    }

    fn needs_lexicon(self) -> bool {
        matches!(self, ArchetypeArg::All | ArchetypeArg::Memorable)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
enum CharsetArg {
    Upper,
    Lower,
    Digits,
    Safe,
    More,
    Full,
}

impl From<CharsetArg> for Charset {
    fn from(arg: CharsetArg) -> Self {
        match arg {
            CharsetArg::Upper => Charset::Upper,
            CharsetArg::Lower => Charset::Lower,
            CharsetArg::Digits => Charset::Digits,
            CharsetArg::Safe => Charset::Safe,
            CharsetArg::More => Charset::More,
            CharsetArg::Full => Charset::Full,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

type LoadedLexicon = (Option<Cow<'static, RolePools>>, Option<String>);

fn load_lexicon(path: Option<&Path>) -> Result<LoadedLexicon> {
    let (lexicon, origin) = match path {
        Some(path) => (
            wordlist::load_lexicon(path)?.map(Cow::Owned),
            path.display().to_string(),
        ),
        None => (
            wordlist::embedded_lexicon().map(Cow::Borrowed),
            "built-in".to_string(),
        ),
    };

    let description = lexicon.as_deref().map(|pools| {
        format!(
            "{} ({} verbs, {} adjectives, {} objects)",
            origin,
            pools.verbs().len(),
            pools.adjectives().len(),
            pools.objects().len()
        )
    });
    Ok((lexicon, description))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    let (random, source) = match &cli.seed {
        Some(seed) => {
            log::warn!("Seeded keystream in use, output is reproducible");
            (SecureRandom::seeded(seed.as_bytes()), RandomSource::Seeded)
        }
        None => (SecureRandom::os(), RandomSource::Os),
    };

    let custom = !cli.charset.is_empty();
    let (lexicon, lexicon_info) = if !custom && cli.archetype.needs_lexicon() {
        let path = cli.wordlist.as_deref();
        if options.quiet {
            load_lexicon(path)?
        } else {
            ui::show_progress(options.unicode_support, "Classifying wordlist...", || {
                load_lexicon(path)
            })?
        }
    } else {
        (None, None)
    };

    let mut ctx = GeneratorContext::new(random, lexicon);
    ctx.set_sfw(!cli.nsfw);

    ui::display_slogan(ctx.slogan()?, &options);

    if custom {
        let selection: CharsetSelection = cli.charset.iter().map(|&c| Charset::from(c)).collect();
        let batch = (0..cli.count)
            .map(|_| ctx.generate_custom(&selection, usize::from(cli.length)))
            .collect::<Result<Vec<_>>>()?;
        ui::display_generated(&batch, &options);
    } else {
        for id in cli.archetype.ids() {
            let mut batch = Vec::new();
            for _ in 0..cli.count {
                match ctx.generate(id)? {
                    Some(generated) => batch.push(generated),
                    None => break,
                }
            }
            if batch.is_empty() {
                ui::display_unavailable(id.archetype().name, &options);
            } else {
                ui::display_generated(&batch, &options);
            }
        }
    }

    ui::display_settings(
        &SessionInfo {
            source,
            lexicon: lexicon_info,
            sfw: ctx.sfw(),
        },
        &options,
    );

    Ok(())
}
