
use once_cell::sync::Lazy;
use regex::Regex;

/// Token substituted for every URL found in a post.
pub const URL_TOKEN: &str = "<URL>";

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").unwrap());
static ESCAPE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\[A-Za-z]").unwrap());
static MULTI_WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Clean a raw post (title + body) for feature extraction.
///
/// Steps run in order, each over the previous step's output:
/// 1. mask URLs with [`URL_TOKEN`]
/// 2. turn every backslash+letter pair into a space (literal strip, not
///    escape decoding — downstream consumers rely on this)
/// 3. drop any remaining backslashes
/// 4. turn newlines, carriage returns and tabs into spaces
/// 5. collapse whitespace runs to single spaces
///
/// Total over any input; case is preserved so case signals survive.
pub fn normalize(text: &str) -> String {
    let cleaned = URL_RE.replace_all(text, URL_TOKEN);
    let cleaned = ESCAPE_RE.replace_all(&cleaned, " ");
    let cleaned = cleaned.replace('\\', "");
    let cleaned = cleaned.replace('\n', " ");
    let cleaned = cleaned.replace('\r', " ");
    let cleaned = cleaned.replace('\t', " ");
    MULTI_WS_RE.replace_all(&cleaned, " ").into_owned()
}
