//! Generation Requests
//!
//! The values sent to the hipsum.co generator: which unit, how many, and
//! the fixed request options coming from configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Granularity of the generated text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Paragraphs,
    Sentences,
}

impl Unit {
    /// Order in which the units are offered to the user
    pub const ALL: [Unit; 2] = [Unit::Paragraphs, Unit::Sentences];

    /// Identifier used in prompts and logs
    pub fn id(&self) -> &'static str {
        match self {
            Unit::Paragraphs => "paragraphs",
            Unit::Sentences => "sentences",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Unit::Paragraphs => "Paragraphs",
            Unit::Sentences => "Sentences",
        }
    }

    /// Query parameter carrying the count for this unit
    pub fn query_key(&self) -> &'static str {
        match self {
            Unit::Paragraphs => "paras",
            Unit::Sentences => "sentences",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.id() == id)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Text style understood by the generator
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    #[default]
    HipsterCentric,
    HipsterLatin,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::HipsterCentric => "hipster-centric",
            Style::HipsterLatin => "hipster-latin",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request settings that are not chosen by the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub style: Style,
    /// Sent as `start-with-lorem` only when set
    pub start_with_lorem: Option<bool>,
}

/// One request to the generator, built per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    unit: Unit,
    count: i64,
    options: RequestOptions,
}

impl GenerationRequest {
    pub fn new(unit: Unit, count: i64, options: RequestOptions) -> Self {
        Self {
            unit,
            count,
            options,
        }
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn options(&self) -> RequestOptions {
        self.options
    }

    /// Query string pairs, in the order they are sent.
    ///
    /// Only the count key matching the unit is present.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("type", self.options.style.as_str().to_string()),
            (self.unit.query_key(), self.count.to_string()),
        ];
        if let Some(start_with_lorem) = self.options.start_with_lorem {
            pairs.push(("start-with-lorem", start_with_lorem.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(request: &GenerationRequest) -> Vec<&'static str> {
        request.query_pairs().into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn test_exactly_one_count_key() {
        for unit in Unit::ALL {
            for count in [1, 2, 7, 100] {
                let request = GenerationRequest::new(unit, count, RequestOptions::default());
                let keys = keys(&request);
                let has_paras = keys.contains(&"paras");
                let has_sentences = keys.contains(&"sentences");
                assert!(has_paras ^ has_sentences, "{unit} x{count}: {keys:?}");
                assert_eq!(has_paras, unit == Unit::Paragraphs);
            }
        }
    }

    #[test]
    fn test_default_pairs() {
        let request = GenerationRequest::new(Unit::Paragraphs, 3, RequestOptions::default());
        assert_eq!(
            request.query_pairs(),
            vec![
                ("type", "hipster-centric".to_string()),
                ("paras", "3".to_string())
            ]
        );
    }

    #[test]
    fn test_start_with_lorem_only_when_set() {
        let options = RequestOptions {
            style: Style::HipsterLatin,
            start_with_lorem: Some(false),
        };
        let request = GenerationRequest::new(Unit::Sentences, 2, options);
        let pairs = request.query_pairs();
        assert_eq!(pairs[0], ("type", "hipster-latin".to_string()));
        assert_eq!(pairs[1], ("sentences", "2".to_string()));
        assert_eq!(pairs[2], ("start-with-lorem", "false".to_string()));
    }

    #[test]
    fn test_non_positive_counts_pass_through() {
        let request = GenerationRequest::new(Unit::Sentences, -4, RequestOptions::default());
        assert!(request
            .query_pairs()
            .contains(&("sentences", "-4".to_string())));
        let request = GenerationRequest::new(Unit::Paragraphs, 0, RequestOptions::default());
        assert!(request.query_pairs().contains(&("paras", "0".to_string())));
    }

    #[test]
    fn test_unit_names() {
        assert_eq!(Unit::from_id("sentences"), Some(Unit::Sentences));
        assert_eq!(Unit::from_id("lines"), None);
        assert_eq!(Unit::Paragraphs.label(), "Paragraphs");
        let json = serde_json::to_string(&Style::HipsterCentric).expect("serialize");
        assert_eq!(json, "\"hipster-centric\"");
    }
}
