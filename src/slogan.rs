use crate::random::SecureRandom;
use anyhow::Result;

pub static SLOGANS: &[&str] = &[
    "Your 847th account deserves better.",
    "The tab you'll close in four seconds.",
    "Uppercase, lowercase, special character, done.",
    "No sign-up. Yes, really.",
    "We made you five. Pick one.",
    "Stop pretending your cat's name is secure.",
    "One clipboard away from moving on.",
    "For when your brain suggests 'qwerty.'",
    "Five passwords. Zero opinions.",
    "You have 84 accounts. None of them use this.",
    "Warm passwords from a cold, indifferent website.",
    "Because you're still staring at that form.",
    "Randomness you don't have to trust.",
    "Just the good bits.",
    "Your secrets never leave.",
    "Made fresh. Served local.",
    "cat /dev/urandom for the rest of us.",
    "No account. No audit trail. No problem.",
    "Weapons-grade randomness. One click.",
    "The page forgets you were here.",
    "Strong passwords from thin air.",
    "No servers were harmed in the making.",
    "Where entropy meets the clipboard.",
    "Math, not promises.",
    "Passwords. Nothing else.",
    "Open. Copy. Gone.",
    "The whole tool.",
    "Make password. Leave.",
    "Already done.",
    "Nothing to learn.",
    "Less than a bookmark.",
    "Strong and forgettable.",
    "Just the output.",
    "Five. Fresh. Yours.",
    "No sign-up. No sign-in. No catch.",
    "One page. One purpose.",
    "your passwords are ready.",
    "Humanity's best defense against 'Password123'.",
    "no account. no tracker. no small talk.",
    "touch grass after this one.",
    "we generated before you loaded.",
    "Leave this tab open. We don't mind.",
    "make password. take password. leave.",
    "client-side or it didn't happen.",
    "nothing was remembered.",
    "the last good website.",
    "localhost energy.",
    "closed the tab. that's the whole tutorial.",
    "we don't even know you're here.",
    "passwords hit different when nobody's watching.",
    "Make password. Make haste.",
    "Five ready. Go.",
    "The password is yours.",
    "No account necessary.",
    "Just the passwords.",
    "Open tab. Closed book.",
    "Strong as written.",
    "We don't remember you.",
    "Arrives made.",
    "Keys, not keychains.",
    "Take what you need.",
    "Nothing to join.",
    "Your password, then gone.",
    "No signups, no newsletters, no traces.",
    "We don't want your email.",
    "Not a funnel. Just a tool.",
    "Yes, this is the entire app.",
    "The world's least ambitious startup.",
    "We peaked on launch day.",
    "Grab one. Go.",
    "One job. Done.",
    "Open tab. Close tab. That's the tour.",
    "It's not that deep.",
    "Literally just passwords.",
    "No one will remember this. That's the point.",
    "The shortest relationship you'll have with a website.",
    "Entropy as a service.",
    "Made fresh. Never stored.",
    "Unguessable in every sense.",
    "Passwords. Not a relationship.",
    "mkdir strong-password",
    "mkdir for entropy.",
    "Warm keys, cold math.",
    "Five seeds. No strings.",
    "chmod 000 your attack surface.",
    "You needed this 5 minutes ago.",
    "No account needed to make your account.",
    "Passwords for people with shit to do.",
    "Because 'password123' isn't a personality.",
    "Ctrl+V and move on with your life.",
    "Because you need a password, not a subscription.",
    "Skip the sales pitch. Here's your password.",
    "Faster than thinking of one yourself.",
    "Strong passwords for weak moments.",
];

/// Picks a slogan index different from `last`.
pub fn pick_slogan(rng: &mut SecureRandom, last: Option<usize>) -> Result<usize> {
    match last {
        Some(last) if last < SLOGANS.len() => {
            let index = rng.uniform_int(SLOGANS.len() - 1)?;
            Ok(if index >= last { index + 1 } else { index })
        }
        _ => rng.uniform_int(SLOGANS.len()),
    }
}
