
use anyhow::Result;
use lex_features::{FeatureRow, LinguisticExtractor};
use serde::{Deserialize, Serialize};
use text_clean::normalize;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("unsupported task: {0}")]
    UnsupportedTask(String),
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub enum InputPayload {
    Text { text: String },
    Batch { texts: Vec<String> },
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub enum OutputArtifact {
    CleanedText { texts: Vec<String> },
    FeatureTable { rows: Vec<FeatureRow> },
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ProcessRequest {
    /// "clean" | "features" | "full"
    pub task: String,
    pub payload: InputPayload,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ProcessResponse {
    pub artifacts: Vec<OutputArtifact>,
}

fn payload_texts(payload: InputPayload) -> Vec<String> {
    match payload {
        InputPayload::Text { text } => vec![text],
        InputPayload::Batch { texts } => texts,
    }
}

/// Normalize a batch of raw posts.
pub fn clean_records(texts: &[String]) -> Vec<String> {
    texts.iter().map(|t| normalize(t)).collect()
}

/// Extract the 13-column feature table from already-prepared records.
/// Does not normalize; the input must still be case-preserved.
pub fn extract_records(texts: &[String]) -> Vec<FeatureRow> {
    LinguisticExtractor::new().extract(texts)
}

/// Route a request to the stages it names.
///
/// - `clean`: normalizer only.
/// - `features`: extractor only, over the text exactly as given.
/// - `full`: normalize, then extract — the screening default. Emits both the
///   cleaned records and the feature table, row-aligned with the input.
pub fn handle_process(req: ProcessRequest) -> Result<ProcessResponse> {
    let texts = payload_texts(req.payload);
    tracing::debug!(task = %req.task, records = texts.len(), "processing batch");

    let artifacts = match req.task.as_str() {
        "clean" => vec![OutputArtifact::CleanedText { texts: clean_records(&texts) }],
        "features" => vec![OutputArtifact::FeatureTable { rows: extract_records(&texts) }],
        "full" => {
            let cleaned = clean_records(&texts);
            let rows = extract_records(&cleaned);
            vec![
                OutputArtifact::CleanedText { texts: cleaned },
                OutputArtifact::FeatureTable { rows },
            ]
        }
        other => return Err(PipelineError::UnsupportedTask(other.to_string()).into()),
    };

    Ok(ProcessResponse { artifacts })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(task: &str, texts: &[&str]) -> ProcessRequest {
        ProcessRequest {
            task: task.to_string(),
            payload: InputPayload::Batch { texts: texts.iter().map(|t| t.to_string()).collect() },
        }
    }

    #[test]
    fn clean_task_masks_urls() {
        let resp = handle_process(batch("clean", &["go to www.site.com  now"])).unwrap();
        match &resp.artifacts[..] {
            [OutputArtifact::CleanedText { texts }] => {
                assert_eq!(texts, &["go to <URL> now".to_string()]);
            }
            other => panic!("unexpected artifacts: {other:?}"),
        }
    }

    #[test]
    fn features_task_leaves_text_untouched() {
        // raw text with a collapsible run; counts must reflect the raw input
        let resp = handle_process(batch("features", &["I was  SAD!"])).unwrap();
        match &resp.artifacts[..] {
            [OutputArtifact::FeatureTable { rows }] => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].first_person_singular, 1);
                assert_eq!(rows[0].past_tense, 1);
                assert_eq!(rows[0].negative_emotion, 1);
                assert_eq!(rows[0].exclamation_count, 1);
                assert_eq!(rows[0].upper_word_count, 1);
            }
            other => panic!("unexpected artifacts: {other:?}"),
        }
    }

    #[test]
    fn full_task_cleans_then_extracts() {
        let resp = handle_process(batch("full", &[r"I\nfeel hopeless http://a.b", "fine"])).unwrap();
        assert_eq!(resp.artifacts.len(), 2);
        match &resp.artifacts[..] {
            [OutputArtifact::CleanedText { texts }, OutputArtifact::FeatureTable { rows }] => {
                assert_eq!(texts[0], "I feel hopeless <URL>");
                assert_eq!(rows.len(), texts.len());
                assert_eq!(rows[0].first_person_singular, 1);
                assert_eq!(rows[0].negative_emotion, 1);
            }
            other => panic!("unexpected artifacts: {other:?}"),
        }
    }

    #[test]
    fn single_text_payload() {
        let resp = handle_process(ProcessRequest {
            task: "features".to_string(),
            payload: InputPayload::Text { text: "we were alone :(".to_string() },
        })
        .unwrap();
        match &resp.artifacts[..] {
            [OutputArtifact::FeatureTable { rows }] => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].first_person_plural, 1);
                assert_eq!(rows[0].past_tense, 1);
                assert_eq!(rows[0].negative_emotion, 1);
                assert_eq!(rows[0].has_negative_emoji, 1);
            }
            other => panic!("unexpected artifacts: {other:?}"),
        }
    }

    #[test]
    fn unsupported_task_is_an_error() {
        let err = handle_process(batch("translate", &["x"])).unwrap_err();
        assert!(err.to_string().contains("unsupported task"));
    }

    #[test]
    fn empty_batch_yields_empty_table() {
        let resp = handle_process(batch("features", &[])).unwrap();
        match &resp.artifacts[..] {
            [OutputArtifact::FeatureTable { rows }] => assert!(rows.is_empty()),
            other => panic!("unexpected artifacts: {other:?}"),
        }
    }

    #[test]
    fn row_order_follows_input_order() {
        let resp = handle_process(batch("features", &["die die die", "", "why?"])).unwrap();
        match &resp.artifacts[..] {
            [OutputArtifact::FeatureTable { rows }] => {
                assert_eq!(rows.len(), 3);
                assert_eq!(rows[0].death_related, 3);
                assert_eq!(rows[1].death_related, 0);
                assert_eq!(rows[2].question_count, 1);
            }
            other => panic!("unexpected artifacts: {other:?}"),
        }
    }
}
