
use once_cell::sync::Lazy;
use regex::Regex;

/// First-person singular pronouns. Contractions carry both the straight and
/// curly apostrophe as literal alternatives; real posts mix the two.
pub(crate) const FIRST_SINGULAR: &[&str] = &[
    "i['’]m", "i['’]ve", "i['’]ll", "i['’]d", "i", "me", "my", "mine", "myself",
];

/// First-person plural pronouns, same apostrophe handling.
pub(crate) const FIRST_PLURAL: &[&str] = &[
    "we['’]re", "we['’]ve", "we['’]ll", "we['’]d", "we", "us", "our", "ours", "ourselves",
];

/// Absolutist language lexicon.
pub(crate) const ABSOLUTIST: &[&str] = &[
    "absolutely", "all", "always", "complete", "completely", "constant", "constantly",
    "definitely", "entire", "entirely", "ever", "every", "everyone", "everything",
    "full", "must", "never", "nothing", "totally", "whole",
];

/// Negative-emotion lexicon.
pub(crate) const NEGATIVE_EMOTION: &[&str] = &[
    "sad", "miserable", "unhappy", "depressed", "hopeless", "worthless", "alone",
    "lonely", "hurt", "pain", "suffer", "cry", "tears", "awful", "terrible", "horrible",
];

/// Death-related lexicon.
pub(crate) const DEATH_RELATED: &[&str] = &[
    "death", "die", "dead", "dying", "suicide", "suicidal", "kill", "killed",
    "killing", "end", "ending",
];

/// Past-tense auxiliaries and markers.
pub(crate) const PAST_TENSE: &[&str] = &["was", "were", "had", "did", "been"];

/// A precompiled case-insensitive whole-word matcher over a fixed word list.
///
/// `count` tallies every non-overlapping occurrence, so a word repeated in a
/// record is counted each time.
pub struct LexiconMatcher {
    re: Regex,
}

impl LexiconMatcher {
    /// Compile a matcher from pattern alternatives. The entries are spliced
    /// into one alternation wrapped in word boundaries, so they may carry
    /// small regex fragments (the pronoun apostrophe classes) but must not
    /// contain `|` or groups of their own.
    pub fn new(alternatives: &[&str]) -> Self {
        let pattern = format!(r"(?i)\b(?:{})\b", alternatives.join("|"));
        // Word lists are fixed at compile time; the pattern is always valid.
        Self { re: Regex::new(&pattern).unwrap() }
    }

    pub fn count(&self, text: &str) -> u32 {
        self.re.find_iter(text).count() as u32
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.re.is_match(text)
    }
}

macro_rules! static_matcher {
    ($name:ident, $words:expr) => {
        pub(crate) static $name: Lazy<LexiconMatcher> = Lazy::new(|| LexiconMatcher::new($words));
    };
}

static_matcher!(FIRST_SINGULAR_MATCHER, FIRST_SINGULAR);
static_matcher!(FIRST_PLURAL_MATCHER, FIRST_PLURAL);
static_matcher!(ABSOLUTIST_MATCHER, ABSOLUTIST);
static_matcher!(NEGATIVE_EMOTION_MATCHER, NEGATIVE_EMOTION);
static_matcher!(DEATH_RELATED_MATCHER, DEATH_RELATED);
static_matcher!(PAST_TENSE_MATCHER, PAST_TENSE);
