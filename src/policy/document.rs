use serde::{Deserialize, Serialize};

use crate::constant::POLICY_VERSION;
use crate::{AccessError, Action, RowScopePolicy};

/// Whether a statement grants or forbids its actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Allow,
    Deny,
}

/// The condition binding a statement to rows owned by the caller.
///
/// Renders as the provider's
/// `{"ForAllValues:StringEquals": {"dynamodb:LeadingKeys": ["${...}"]}}`
/// operator: every leading (partition) key named by the request must equal the
/// caller's claim value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowCondition {
    #[serde(rename = "ForAllValues:StringEquals")]
    pub string_equals: LeadingKeys,
}

/// The set of partition-key values a [`RowCondition`] accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadingKeys {
    #[serde(rename = "dynamodb:LeadingKeys")]
    pub keys: Vec<String>,
}

impl RowCondition {
    /// Restrict a statement to rows whose partition key equals the given
    /// policy variable at request time.
    #[must_use]
    pub fn leading_keys(variable: String) -> Self {
        Self {
            string_equals: LeadingKeys {
                keys: vec![variable],
            },
        }
    }
}

/// One `(effect, actions, resources, condition)` tuple of a policy document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatement {
    pub effect: Effect,
    pub action: Vec<String>,
    pub resource: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<RowCondition>,
}

impl PolicyStatement {
    /// An allow statement, scoped to the caller's rows by `condition`.
    #[must_use]
    pub fn allow(actions: &[Action], resources: Vec<String>, condition: RowCondition) -> Self {
        Self {
            effect: Effect::Allow,
            action: Self::provider_names(actions),
            resource: resources,
            condition: Some(condition),
        }
    }

    /// An unconditional deny statement.
    ///
    /// Deny needs no condition: it applies to every caller, owner or not.
    #[must_use]
    pub fn deny(actions: &[Action], resources: Vec<String>) -> Self {
        Self {
            effect: Effect::Deny,
            action: Self::provider_names(actions),
            resource: resources,
            condition: None,
        }
    }

    fn provider_names(actions: &[Action]) -> Vec<String> {
        actions
            .iter()
            .map(|action| action.provider_name().to_owned())
            .collect()
    }
}

/// A policy document in the provider's grammar, ready to be attached to the
/// role that authenticated identities assume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<PolicyStatement>,
}

impl PolicyDocument {
    /// Serialize the document to pretty-printed JSON.
    ///
    /// ## Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, AccessError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl RowScopePolicy {
    /// Render the document instructing the enforcement engine to apply this
    /// policy.
    ///
    /// Three statements, in a fixed order:
    ///
    /// 1. allow row reads, writes, and queries on the table, scoped to rows
    ///    whose partition key equals the caller's claim;
    /// 2. the same allowance for every secondary-index projection;
    /// 3. an unconditional deny of scans, deletes, and updates, on the table
    ///    and on every projection.
    ///
    /// The rendering is deterministic: the same policy value always yields the
    /// same document.
    #[must_use]
    pub fn document(&self) -> PolicyDocument {
        let condition = RowCondition::leading_keys(self.mapping().policy_variable());

        PolicyDocument {
            version: POLICY_VERSION.into(),
            statement: vec![
                PolicyStatement::allow(
                    &Action::ALLOWED,
                    vec![self.table().arn().to_owned()],
                    condition.clone(),
                ),
                PolicyStatement::allow(
                    &Action::ALLOWED,
                    vec![self.table().projection_pattern()],
                    condition,
                ),
                PolicyStatement::deny(
                    &Action::FORBIDDEN,
                    vec![self.table().arn().to_owned(), self.table().projection_pattern()],
                ),
            ],
        }
    }
}
