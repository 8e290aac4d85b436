
/// Emoticon presence flags, 0/1 each.
///
/// `:"` is deliberately in both the negative and crying lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiFeatures {
    pub positive: u8,
    pub negative: u8,
    pub crying: u8,
}

const POSITIVE: &[&str] = &[":)", ":D", ";)"];
const NEGATIVE: &[&str] = &[":(", ":\"", "D:"];
const CRYING: &[&str] = &[":\"", "T_T", "Q_Q"];

fn any_substring(text: &str, needles: &[&str]) -> u8 {
    u8::from(needles.iter().any(|n| text.contains(n)))
}

/// Case-sensitive substring scan for the three emoticon groups.
pub fn emoji_features(text: &str) -> EmojiFeatures {
    EmojiFeatures {
        positive: any_substring(text, POSITIVE),
        negative: any_substring(text, NEGATIVE),
        crying: any_substring(text, CRYING),
    }
}
