
/// Uppercase-token stats over whitespace-split words.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseFeatures {
    pub upper_count: u32,
    pub upper_ratio: f32,
}

fn is_shouted(token: &str) -> bool {
    // Single-character tokens (a lone "I", stray punctuation) never count.
    token.chars().count() > 1
        && token
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(|c| c.is_uppercase())
}

/// Count fully-uppercase tokens and their share of all tokens.
///
/// Zero tokens gives (0, 0.0) rather than dividing by zero.
pub fn case_features(text: &str) -> CaseFeatures {
    let mut total = 0u32;
    let mut upper = 0u32;
    for token in text.split_whitespace() {
        total += 1;
        if is_shouted(token) {
            upper += 1;
        }
    }
    if total == 0 {
        return CaseFeatures { upper_count: 0, upper_ratio: 0.0 };
    }
    CaseFeatures {
        upper_count: upper,
        upper_ratio: upper as f32 / total as f32,
    }
}
