use std::collections::HashSet;

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// Suffix match that leaves at least two characters of stem.
pub fn has_any_suffix(word: &str, suffixes: &[&str]) -> bool {
    suffixes
        .iter()
        .any(|suffix| word.len() > suffix.len() + 1 && word.ends_with(suffix))
}

/// Consonant followed by a final `y`, as in `carry` but not `play`.
pub fn ends_with_consonant_y(word: &str) -> bool {
    let bytes = word.as_bytes();
    bytes.len() >= 2 && bytes[bytes.len() - 1] == b'y' && !is_vowel(bytes[bytes.len() - 2])
}

/// Every `-ing`/`-ed` spelling a root could plausibly take.
pub fn inflections(root: &str) -> Vec<String> {
    let mut forms = vec![format!("{root}ing"), format!("{root}ed")];
    let bytes = root.as_bytes();

    if bytes.len() > 1 && root.ends_with('e') {
        forms.push(format!("{}ing", &root[..root.len() - 1]));
        forms.push(format!("{root}d"));
    }

    if bytes.len() > 1 && ends_with_consonant_y(root) {
        forms.push(format!("{}ied", &root[..root.len() - 1]));
        forms.push(format!("{root}ing"));
    }

    // consonant-vowel-consonant doubles: hop -> hopping, hopped
    if bytes.len() > 2 {
        let c0 = bytes[bytes.len() - 3];
        let c1 = bytes[bytes.len() - 2];
        let c2 = bytes[bytes.len() - 1];
        if !is_vowel(c0) && is_vowel(c1) && !is_vowel(c2) && !matches!(c2, b'w' | b'x' | b'y') {
            let last = c2 as char;
            forms.push(format!("{root}{last}ing"));
            forms.push(format!("{root}{last}ed"));
        }
    }

    forms
}

/// True if any inflection of `root` appears in `corpus`.
pub fn has_verb_inflection(root: &str, corpus: &HashSet<String>) -> bool {
    inflections(root).iter().any(|form| corpus.contains(form))
}

pub fn third_person_singular(root: &str) -> String {
    match root {
        "be" => return "is".to_string(),
        "have" => return "has".to_string(),
        "do" => return "does".to_string(),
        "go" => return "goes".to_string(),
        _ => {}
    }

    if ["s", "x", "z", "ch", "sh", "o"].iter().any(|end| root.ends_with(end)) {
        format!("{root}es")
    } else if ends_with_consonant_y(root) {
        format!("{}ies", &root[..root.len() - 1])
    } else {
        format!("{root}s")
    }
}

/// Recognises `-ing`/`-ed` words and 3rd-person forms of a known root.
pub fn is_conjugated_verb_form(word: &str, verb_roots: &HashSet<String>) -> bool {
    let len = word.len();
    if len > 4 && (word.ends_with("ing") || word.ends_with("ed")) {
        return true;
    }
    if len > 4 && word.ends_with("ies") {
        return verb_roots.contains(&format!("{}y", &word[..len - 3]));
    }
    if len > 3 && word.ends_with("es") {
        let stem = &word[..len - 2];
        if verb_roots.contains(stem) || verb_roots.contains(&format!("{stem}e")) {
            return true;
        }
    }
    if len > 3 && word.ends_with('s') {
        return verb_roots.contains(&word[..len - 1]);
    }
    false
}
