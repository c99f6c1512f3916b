//! English noun inflection heuristics used by the plural resource rule.
//!
//! Recognizes regular plurals, a table of irregular forms and a list of
//! uninflected nouns. Findings of `pluralized-resource-names` follow these
//! tables exactly.

/// Nouns with identical singular and plural forms.
const UNINFLECTED: &[&str] = &[
    "bison",
    "bream",
    "breeches",
    "britches",
    "carp",
    "chassis",
    "clippers",
    "cod",
    "contretemps",
    "corps",
    "debris",
    "deer",
    "diabetes",
    "djinn",
    "eland",
    "elk",
    "fish",
    "flounder",
    "gallows",
    "graffiti",
    "headquarters",
    "herpes",
    "innings",
    "jackanapes",
    "mackerel",
    "measles",
    "mews",
    "moose",
    "mumps",
    "news",
    "pincers",
    "pliers",
    "proceedings",
    "rabies",
    "salmon",
    "scissors",
    "series",
    "shears",
    "sheep",
    "species",
    "swine",
    "trout",
    "tuna",
    "whiting",
    "wildebeest",
];

/// Suffixes of compound uninflected nouns (`goldfish`, `reindeer`).
const UNINFLECTED_SUFFIXES: &[&str] = &["fish", "sheep", "deer", "pox", "itis"];

/// Irregular `(singular, plural)` pairs.
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("mouse", "mice"),
    ("louse", "lice"),
    ("ox", "oxen"),
    ("die", "dice"),
    ("datum", "data"),
    ("medium", "media"),
    ("criterion", "criteria"),
    ("phenomenon", "phenomena"),
    ("index", "indices"),
    ("matrix", "matrices"),
    ("vertex", "vertices"),
    ("appendix", "appendices"),
    ("analysis", "analyses"),
    ("axis", "axes"),
    ("basis", "bases"),
    ("crisis", "crises"),
    ("thesis", "theses"),
    ("cactus", "cacti"),
    ("radius", "radii"),
    ("alumnus", "alumni"),
    ("syllabus", "syllabi"),
    ("quiz", "quizzes"),
    ("knife", "knives"),
    ("wife", "wives"),
    ("life", "lives"),
    ("leaf", "leaves"),
    ("half", "halves"),
    ("shelf", "shelves"),
    ("wolf", "wolves"),
    ("thief", "thieves"),
    ("calf", "calves"),
    ("loaf", "loaves"),
    ("scarf", "scarves"),
    ("self", "selves"),
    ("elf", "elves"),
    ("movie", "movies"),
    ("cookie", "cookies"),
    ("zombie", "zombies"),
    ("hero", "heroes"),
    ("potato", "potatoes"),
    ("tomato", "tomatoes"),
    ("echo", "echoes"),
    ("veto", "vetoes"),
];

/// Singular nouns ending in `s` that the suffix rules would otherwise
/// strip. Plurals such as `menus`, `apis` or `taxis` are not listed.
const SINGULAR_S_WORDS: &[&str] = &[
    "alias",
    "apparatus",
    "atlas",
    "bias",
    "bonus",
    "bus",
    "campus",
    "canvas",
    "census",
    "chaos",
    "chorus",
    "circus",
    "consensus",
    "corpus",
    "cosmos",
    "ethos",
    "focus",
    "gas",
    "genus",
    "ibis",
    "iris",
    "lens",
    "mantis",
    "minus",
    "nexus",
    "onus",
    "pelvis",
    "plus",
    "prospectus",
    "sinus",
    "status",
    "stimulus",
    "surplus",
    "tennis",
    "trellis",
    "virus",
];

/// Endings of nouns that are singular even though they end in `s`.
const SINGULAR_S_ENDINGS: &[&str] = &["ss", "ous", "sis"];

/// Endings that take `es` in the plural.
const ES_ENDINGS: &[&str] = &["sses", "shes", "ches", "xes", "zzes"];

fn is_uninflected(word: &str) -> bool {
    UNINFLECTED.contains(&word) || UNINFLECTED_SUFFIXES.iter().any(|s| word.ends_with(s))
}

/// Returns the singular form of a plural noun.
///
/// Returns `None` when the word does not look like a plural. Uninflected
/// nouns are returned unchanged.
pub(crate) fn singular_noun(word: &str) -> Option<String> {
    let lower = word.to_ascii_lowercase();
    if lower.len() < 2 {
        return None;
    }
    if is_uninflected(&lower) {
        return Some(lower);
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(_, plural)| *plural == lower) {
        return Some((*singular).to_string());
    }
    if IRREGULAR.iter().any(|(singular, _)| *singular == lower) {
        return None;
    }
    if SINGULAR_S_WORDS.contains(&lower.as_str())
        || SINGULAR_S_ENDINGS.iter().any(|e| lower.ends_with(e))
    {
        return None;
    }
    if let Some(stem) = lower.strip_suffix("ies").filter(|s| !s.is_empty()) {
        return Some(format!("{stem}y"));
    }
    if let Some(stem) = lower
        .strip_suffix("es")
        .filter(|stem| SINGULAR_S_WORDS.contains(stem))
    {
        return Some(stem.to_string());
    }
    if ES_ENDINGS.iter().any(|e| lower.ends_with(e)) {
        return lower.strip_suffix("es").map(str::to_string);
    }
    lower.strip_suffix('s').map(str::to_string)
}

/// Returns the plural form of a singular noun.
pub(crate) fn plural_noun(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    if is_uninflected(&lower) {
        return lower;
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == lower) {
        return (*plural).to_string();
    }
    if IRREGULAR.iter().any(|(_, plural)| *plural == lower) {
        return lower;
    }
    if let Some(stem) = lower.strip_suffix('y') {
        let after_vowel = stem.ends_with(['a', 'e', 'i', 'o', 'u']);
        if !stem.is_empty() && !after_vowel {
            return format!("{stem}ies");
        }
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|e| lower.ends_with(e)) {
        return format!("{lower}es");
    }
    format!("{lower}s")
}

/// Returns true if the word is recognized as a plural that differs from its
/// singular form.
pub(crate) fn is_plural(word: &str) -> bool {
    singular_noun(word).is_some_and(|singular| !singular.eq_ignore_ascii_case(word))
}
