use crate::charset::{char_class, CharClass};
use crate::context::Generated;
use anyhow::Result;
use console::{Style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub const MIN_SAFE_BITS: u32 = 64;
pub const PARANOID_BITS: u32 = 128;

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub enum RandomSource {
    Os,
    Seeded,
}

pub struct SessionInfo {
    pub source: RandomSource,
    /// Where the story corpus came from, `None` when stories are unavailable.
    pub lexicon: Option<String>,
    pub sfw: bool,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("\u{2713}", "!")
    } else {
        ("+", "!")
    }
}

struct TreeGlyphs {
    branch: &'static str,
    last: &'static str,
}

fn tree_glyphs(unicode_support: bool) -> TreeGlyphs {
    if unicode_support {
        TreeGlyphs {
            branch: "\u{251C}\u{2500}",
            last: "\u{2514}\u{2500}",
        }
    } else {
        TreeGlyphs {
            branch: "|-",
            last: "`-",
        }
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

pub fn strength_label(bits: u32) -> &'static str {
    if bits >= PARANOID_BITS {
        "Paranoid"
    } else if bits >= MIN_SAFE_BITS {
        "Strong"
    } else {
        "Weak"
    }
}

fn class_style(class: CharClass, color_support: bool) -> Style {
    if !color_support {
        return Style::new();
    }
    match class {
        CharClass::Upper => Style::new().cyan(),
        CharClass::Lower => Style::new(),
        CharClass::Digit => Style::new().yellow(),
        CharClass::Symbol => Style::new().magenta(),
    }
}

/// Colours each character by class so look-alikes are easier to tell apart.
pub fn highlight(password: &str, color_support: bool) -> String {
    password
        .chars()
        .map(|c| class_style(char_class(c), color_support).apply_to(c).to_string())
        .collect()
}

pub fn show_progress<F, T>(unicode_support: bool, message: &str, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let term = Term::stderr();
    term.hide_cursor().ok();

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    if unicode_support {
        pb.set_style(style.tick_strings(&[
            "\u{280B}", "\u{2819}", "\u{2839}", "\u{2838}", "\u{283C}", "\u{2834}", "\u{2826}",
            "\u{2827}", "\u{2807}", "\u{280F}", "\u{2713}",
        ]));
    } else {
        pb.set_style(style.tick_chars("-\\|/-"));
    }

    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));

    let result = f();

    pb.finish_and_clear();
    term.show_cursor().ok();

    result
}

pub fn display_slogan(slogan: &str, options: &DisplayOptions) {
    if options.quiet {
        return;
    }
    let style = if options.color_support {
        Style::new().dim().italic()
    } else {
        Style::new()
    };
    println!("{}\n", style.apply_to(slogan));
}

pub fn display_unavailable(name: &str, options: &DisplayOptions) {
    if options.quiet {
        return;
    }
    let (_, check_warn) = get_status_symbols(options.unicode_support);
    let style = if options.color_support {
        Style::new().yellow()
    } else {
        Style::new()
    };
    println!(
        "{}:\n{} unavailable (no wordlist loaded)\n",
        name,
        style.apply_to(format!("[{}]", check_warn))
    );
}

/// Passwords of one archetype with the strength tree below them.
pub fn display_generated(batch: &[Generated], options: &DisplayOptions) {
    let Some(first) = batch.first() else {
        return;
    };

    if options.quiet {
        for generated in batch {
            println!("{}", &*generated.password);
        }
        return;
    }

    let header = if options.color_support {
        Style::new().bold()
    } else {
        Style::new()
    };
    println!("{}:", header.apply_to(first.name));
    for generated in batch {
        println!("{}", highlight(&generated.password, options.color_support));
    }
    println!();

    display_stats(first, options);
}

fn display_stats(generated: &Generated, options: &DisplayOptions) {
    for line in stats_lines(generated, options) {
        println!("{}", line);
    }
    println!();
}

fn stats_lines(generated: &Generated, options: &DisplayOptions) -> Vec<String> {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let glyphs = tree_glyphs(options.unicode_support);
    let length = generated.password.chars().count();
    let length_line = |glyph: &str| {
        format!(
            "  {} Length     {} {}",
            glyph,
            length,
            plural(length, "char", "chars")
        )
    };

    let Some(estimate) = &generated.estimate else {
        return vec![length_line(glyphs.last)];
    };

    let secure = estimate.bits >= MIN_SAFE_BITS;
    let status = if secure { check_ok } else { check_warn };
    let style = match (options.color_support, secure) {
        (false, _) => Style::new(),
        (true, true) => Style::new().green(),
        (true, false) => Style::new().yellow(),
    };

    vec![
        format!(
            "  {} Strength   {} {}",
            glyphs.branch,
            style.apply_to(format!("[{}]", status)),
            style.apply_to(strength_label(estimate.bits))
        ),
        length_line(glyphs.branch),
        format!("  {} Estimate   {}", glyphs.last, estimate),
    ]
}

pub fn display_settings(info: &SessionInfo, options: &DisplayOptions) {
    if options.quiet {
        return;
    }
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let glyphs = tree_glyphs(options.unicode_support);

    let (ok_style, warn_style) = if options.color_support {
        (Style::new().green(), Style::new().yellow())
    } else {
        (Style::new(), Style::new())
    };

    println!("Settings:");

    match info.source {
        RandomSource::Os => println!(
            "  {} Source     {} OS CSPRNG",
            glyphs.branch,
            ok_style.apply_to(format!("[{}]", check_ok))
        ),
        RandomSource::Seeded => println!(
            "  {} Source     {} ChaCha20 keystream from --seed (reproducible, not for real secrets)",
            glyphs.branch,
            warn_style.apply_to(format!("[{}]", check_warn))
        ),
    }

    println!("  {} Sampling   Unbiased rejection", glyphs.branch);

    match &info.lexicon {
        Some(lexicon) => println!(
            "  {} Wordlist   {} {}",
            glyphs.branch,
            ok_style.apply_to(format!("[{}]", check_ok)),
            lexicon
        ),
        None => println!(
            "  {} Wordlist   {} not loaded",
            glyphs.branch,
            warn_style.apply_to(format!("[{}]", check_warn))
        ),
    }

    println!(
        "  {} Stories    {}\n",
        glyphs.last,
        if info.sfw { "SFW" } else { "NSFW" }
    );
}
