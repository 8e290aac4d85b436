
mod case;
mod emoji;
mod lexicons;
mod linguistic;

pub use case::{case_features, CaseFeatures};
pub use emoji::{emoji_features, EmojiFeatures};
pub use lexicons::LexiconMatcher;
pub use linguistic::{FeatureRow, LinguisticExtractor};
