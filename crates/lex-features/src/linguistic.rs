
use serde::{Deserialize, Serialize};

use crate::case::case_features;
use crate::emoji::emoji_features;
use crate::lexicons::{
    ABSOLUTIST_MATCHER, DEATH_RELATED_MATCHER, FIRST_PLURAL_MATCHER, FIRST_SINGULAR_MATCHER,
    NEGATIVE_EMOTION_MATCHER, PAST_TENSE_MATCHER,
};

/// One record's feature vector. Field order is the canonical column order;
/// serde emits the fields in this order for every row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub first_person_singular: u32,
    pub first_person_plural: u32,
    pub absolutist_count: u32,
    pub negative_emotion: u32,
    pub death_related: u32,
    pub past_tense: u32,
    pub exclamation_count: u32,
    pub question_count: u32,
    pub upper_word_count: u32,
    pub upper_word_ratio: f32,
    pub has_positive_emoji: u8,
    pub has_negative_emoji: u8,
    pub has_crying_emoji: u8,
}

impl FeatureRow {
    /// Column names in emit order, for table writers that need a header.
    pub const COLUMNS: [&'static str; 13] = [
        "first_person_singular",
        "first_person_plural",
        "absolutist_count",
        "negative_emotion",
        "death_related",
        "past_tense",
        "exclamation_count",
        "question_count",
        "upper_word_count",
        "upper_word_ratio",
        "has_positive_emoji",
        "has_negative_emoji",
        "has_crying_emoji",
    ];
}

/// Bulk extractor over case-preserved text.
///
/// All six lexicon matchers are compiled once per process and shared; each
/// record is scanned independently, one pass per signal. Callers that want
/// cleaned input run `text_clean::normalize` first, but must not lowercase —
/// the uppercase-word columns read the original casing.
#[derive(Default)]
pub struct LinguisticExtractor;

impl LinguisticExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract_one(&self, text: &str) -> FeatureRow {
        let case = case_features(text);
        let emoji = emoji_features(text);
        FeatureRow {
            first_person_singular: FIRST_SINGULAR_MATCHER.count(text),
            first_person_plural: FIRST_PLURAL_MATCHER.count(text),
            absolutist_count: ABSOLUTIST_MATCHER.count(text),
            negative_emotion: NEGATIVE_EMOTION_MATCHER.count(text),
            death_related: DEATH_RELATED_MATCHER.count(text),
            past_tense: PAST_TENSE_MATCHER.count(text),
            exclamation_count: text.matches('!').count() as u32,
            question_count: text.matches('?').count() as u32,
            upper_word_count: case.upper_count,
            upper_word_ratio: case.upper_ratio,
            has_positive_emoji: emoji.positive,
            has_negative_emoji: emoji.negative,
            has_crying_emoji: emoji.crying,
        }
    }

    /// One row per record, aligned with input order.
    pub fn extract<S: AsRef<str>>(&self, texts: &[S]) -> Vec<FeatureRow> {
        texts.iter().map(|t| self.extract_one(t.as_ref())).collect()
    }
}
