//! Label selector conversion with Kubernetes semantics

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::types::{LabelRequirement, LabelSelector, ParsedSelector, RequirementOperator};

const QUALIFIED_NAME_MAX_LEN: usize = 63;
const LABEL_VALUE_MAX_LEN: usize = 63;
const DNS1123_SUBDOMAIN_MAX_LEN: usize = 253;

static QUALIFIED_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]$").unwrap());

static LABEL_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9])?$").unwrap());

static DNS1123_SUBDOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$").unwrap()
});

/// Errors that can occur while converting a label selector
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Operator outside In/NotIn/Exists/DoesNotExist
    #[error("\"{0}\" is not a valid label selector operator")]
    InvalidOperator(String),

    /// In/NotIn without values
    #[error("values for key \"{0}\" can't be empty for 'in', 'notin' operators")]
    MissingValues(String),

    /// Exists/DoesNotExist with values
    #[error("values for key \"{0}\" must be empty for 'exists', 'doesnotexist' operators")]
    UnexpectedValues(String),

    /// Key is not a qualified name
    #[error("invalid label key \"{key}\": {reason}")]
    InvalidKey { key: String, reason: String },

    /// Value is not a valid label value
    #[error("invalid label value \"{value}\" for key \"{key}\"")]
    InvalidValue { key: String, value: String },
}

/// Label selector capability used by the aggregator
///
/// Implementations must be pure: the same selector always parses and
/// decomposes to the same result.
pub trait SelectorParser: Send + Sync {
    /// Parsed, validated selector
    type Selector;

    /// Validates a selector; `None` means the rule carries no selector
    fn parse(&self, selector: Option<&LabelSelector>) -> Result<Self::Selector, SelectorError>;

    /// Splits a parsed selector into its requirements and whether the
    /// conjunction can select anything at all
    fn decompose(&self, selector: &Self::Selector) -> (Vec<LabelRequirement>, bool);
}

/// Production selector parser following Kubernetes `LabelSelector` rules
///
/// - No selector selects nothing
/// - An empty selector selects everything
/// - `matchLabels` entries become `Equals` requirements
/// - Requirements come back stably sorted by key
#[derive(Debug, Clone, Copy, Default)]
pub struct KubeSelectorParser;

impl KubeSelectorParser {
    /// Creates a new parser
    pub fn new() -> Self {
        Self
    }

    fn requirement(
        key: &str,
        operator: RequirementOperator,
        values: &[String],
    ) -> Result<LabelRequirement, SelectorError> {
        validate_label_key(key)?;

        let values = match operator {
            RequirementOperator::In | RequirementOperator::NotIn => {
                if values.is_empty() {
                    return Err(SelectorError::MissingValues(key.to_string()));
                }
                let mut set = values.to_vec();
                set.sort();
                set.dedup();
                set
            }
            RequirementOperator::Exists | RequirementOperator::DoesNotExist => {
                if !values.is_empty() {
                    return Err(SelectorError::UnexpectedValues(key.to_string()));
                }
                Vec::new()
            }
            RequirementOperator::Equals => values.to_vec(),
        };

        for value in &values {
            validate_label_value(key, value)?;
        }

        Ok(LabelRequirement::new(key, operator, values))
    }
}

impl SelectorParser for KubeSelectorParser {
    type Selector = ParsedSelector;

    fn parse(&self, selector: Option<&LabelSelector>) -> Result<ParsedSelector, SelectorError> {
        let Some(selector) = selector else {
            return Ok(ParsedSelector::Nothing);
        };

        let mut requirements =
            Vec::with_capacity(selector.match_labels.len() + selector.match_expressions.len());

        for (key, value) in &selector.match_labels {
            requirements.push(Self::requirement(
                key,
                RequirementOperator::Equals,
                std::slice::from_ref(value),
            )?);
        }

        for expr in &selector.match_expressions {
            let operator = match expr.operator.as_str() {
                "In" => RequirementOperator::In,
                "NotIn" => RequirementOperator::NotIn,
                "Exists" => RequirementOperator::Exists,
                "DoesNotExist" => RequirementOperator::DoesNotExist,
                other => return Err(SelectorError::InvalidOperator(other.to_string())),
            };
            requirements.push(Self::requirement(&expr.key, operator, &expr.values)?);
        }

        requirements.sort_by(|a, b| a.key.cmp(&b.key));

        Ok(ParsedSelector::Requirements(requirements))
    }

    fn decompose(&self, selector: &ParsedSelector) -> (Vec<LabelRequirement>, bool) {
        match selector {
            ParsedSelector::Nothing => (Vec::new(), false),
            ParsedSelector::Requirements(requirements) => (requirements.clone(), true),
        }
    }
}

/// Validates a label key as a qualified name (`[prefix/]name`)
fn validate_label_key(key: &str) -> Result<(), SelectorError> {
    let invalid = |reason: &str| SelectorError::InvalidKey {
        key: key.to_string(),
        reason: reason.to_string(),
    };

    let parts: Vec<&str> = key.split('/').collect();
    let name = match parts.as_slice() {
        [name] => *name,
        [prefix, name] => {
            if prefix.is_empty() {
                return Err(invalid("prefix part must be non-empty"));
            }
            if prefix.len() > DNS1123_SUBDOMAIN_MAX_LEN {
                return Err(invalid("prefix part must be no more than 253 characters"));
            }
            if !DNS1123_SUBDOMAIN.is_match(prefix) {
                return Err(invalid("prefix part must be a lowercase DNS-1123 subdomain"));
            }
            *name
        }
        _ => return Err(invalid("must consist of an optional prefix and a name")),
    };

    if name.is_empty() {
        return Err(invalid("name part must be non-empty"));
    }
    if name.len() > QUALIFIED_NAME_MAX_LEN {
        return Err(invalid("name part must be no more than 63 characters"));
    }
    if !QUALIFIED_NAME.is_match(name) {
        return Err(invalid(
            "name part must consist of alphanumeric characters, '-', '_' or '.', \
             and must start and end with an alphanumeric character",
        ));
    }

    Ok(())
}

/// Validates a label value (empty is allowed)
fn validate_label_value(key: &str, value: &str) -> Result<(), SelectorError> {
    if value.len() > LABEL_VALUE_MAX_LEN || !LABEL_VALUE.is_match(value) {
        return Err(SelectorError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}
