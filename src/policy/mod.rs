use log::debug;

use crate::constant;
use crate::AccessError;

pub use document::{Effect, LeadingKeys, PolicyDocument, PolicyStatement, RowCondition};

mod document;
mod evaluator;

/// An operation a caller can request against the protected table.
///
/// Only [`Action::Read`], [`Action::Write`], and [`Action::Query`] can ever be
/// granted. The remaining operations mutate or enumerate rows, which the
/// append-only contract rules out permanently: they are denied with priority
/// over any allow, for every caller, including the row's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Fetch a single row by its full key (`dynamodb:GetItem`).
    Read,

    /// Create a row (`dynamodb:PutItem`).
    ///
    /// Create-only: a row, once written, is never touched again.
    Write,

    /// Fetch the rows under a single partition key (`dynamodb:Query`).
    Query,

    /// Mutate an existing row in place (`dynamodb:UpdateItem`).
    Update,

    /// Remove a row (`dynamodb:DeleteItem`).
    Delete,

    /// Walk the whole table regardless of key (`dynamodb:Scan`).
    Scan,
}

impl Action {
    /// The actions a caller may be granted on its own rows.
    pub const ALLOWED: [Action; 3] = [Action::Read, Action::Write, Action::Query];

    /// The actions denied unconditionally, listed in the order the rendered
    /// deny statement declares them.
    pub const FORBIDDEN: [Action; 3] = [Action::Scan, Action::Delete, Action::Update];

    /// The provider-side action name this operation instructs the enforcement
    /// engine about.
    #[must_use]
    pub const fn provider_name(self) -> &'static str {
        match self {
            Action::Read => "dynamodb:GetItem",
            Action::Write => "dynamodb:PutItem",
            Action::Query => "dynamodb:Query",
            Action::Update => "dynamodb:UpdateItem",
            Action::Delete => "dynamodb:DeleteItem",
            Action::Scan => "dynamodb:Scan",
        }
    }

    /// Whether this action is in the permanently denied set.
    #[must_use]
    pub const fn is_forbidden(self) -> bool {
        matches!(self, Action::Update | Action::Delete | Action::Scan)
    }
}

/// The append-only table a [`RowScopePolicy`] protects.
///
/// Held as a validated ARN so the rendered policy document can only ever name a
/// well-formed resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableResource {
    arn: String,
}

impl TableResource {
    /// Wrap a DynamoDB table ARN.
    ///
    /// ## Errors
    ///
    /// Returns an error if the ARN does not match
    /// `arn:aws:dynamodb:<region>:<account>:table/<name>`.
    pub fn new(arn: &str) -> Result<Self, AccessError> {
        if !constant::TABLE_ARN.is_match(arn) {
            return Err(AccessError::InvalidArgument(format!(
                "Invalid table ARN '{arn}'. Expected `arn:aws:dynamodb:<region>:<account>:table/<name>`"
            )));
        }

        Ok(Self { arn: arn.into() })
    }

    /// The ARN of the table itself.
    #[must_use]
    pub fn arn(&self) -> &str {
        &self.arn
    }

    /// The resource pattern covering every secondary-index projection of the
    /// table.
    ///
    /// Index projections inherit the full contract - the key restriction and
    /// the deny set - so each rendered statement names them alongside, or in
    /// place of, the table ARN.
    #[must_use]
    pub fn projection_pattern(&self) -> String {
        format!("{}/*", self.arn)
    }
}

/// The binding between a verified token claim and the table's partition key.
///
/// Which token attribute carries the caller's user id is an integration detail
/// of the identity provider, so it is configuration rather than a hardcoded
/// string. The default is the `www.amazon.com:user_id` principal tag;
/// deployments federating through an identity pool would configure
/// `cognito-identity.amazonaws.com:sub` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimMapping {
    claim: String,
}

impl ClaimMapping {
    /// Bind partition keys to the named token claim.
    #[must_use]
    pub fn new(claim: &str) -> Self {
        Self {
            claim: claim.into(),
        }
    }

    /// The name of the bound claim.
    #[must_use]
    pub fn claim(&self) -> &str {
        &self.claim
    }

    /// The `${...}` policy-variable form, substituted by the enforcement
    /// engine with the caller's claim value on each request.
    #[must_use]
    pub fn policy_variable(&self) -> String {
        format!("${{{}}}", self.claim)
    }

    /// Pull the partition-key claim out of a decoded token payload.
    ///
    /// The payload must already be verified by the identity layer; this only
    /// selects the attribute, it does not validate the token.
    ///
    /// ## Errors
    ///
    /// Returns an error if the claim is absent, or is not a string - the token
    /// was issued without the attribute this policy binds rows to.
    pub fn resolve(&self, claims: &serde_json::Value) -> Result<String, AccessError> {
        let value = claims
            .get(self.claim.as_str())
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| {
                AccessError::IdentityVerification(format!(
                    "Token payload is missing the `{}` claim",
                    self.claim
                ))
            })?;

        debug!(claim = self.claim.as_str(); "Resolved partition-key claim from token payload");

        Ok(value.to_owned())
    }
}

impl Default for ClaimMapping {
    fn default() -> Self {
        Self::new(constant::DEFAULT_CLAIM)
    }
}

/// The static access policy for one append-only table.
///
/// Constructed once at provisioning time and passed explicitly wherever
/// decisions are made. It holds no mutable state, so a single value can be
/// shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowScopePolicy {
    table: TableResource,
    mapping: ClaimMapping,
}

impl RowScopePolicy {
    #[must_use]
    pub fn new(table: TableResource, mapping: ClaimMapping) -> Self {
        Self { table, mapping }
    }

    /// The table this policy protects.
    #[must_use]
    pub fn table(&self) -> &TableResource {
        &self.table
    }

    /// The claim-to-partition-key binding this policy scopes rows with.
    #[must_use]
    pub fn mapping(&self) -> &ClaimMapping {
        &self.mapping
    }
}

/// A single access decision input.
///
/// The principal claim is asserted by the trusted identity layer after token
/// verification - it is never client-supplied input, and the evaluator does
/// not re-verify it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRequest<'a> {
    /// The verified partition-key claim of the caller.
    pub principal_claim: &'a str,

    /// The partition key of the row the request targets.
    pub resource_key: &'a str,

    /// The requested operation.
    pub action: Action,

    /// The secondary index the request reads through, if any.
    ///
    /// Index projections carry the same restrictions as the base table.
    pub index: Option<&'a str>,
}

impl<'a> AccessRequest<'a> {
    /// A request against the base table.
    #[must_use]
    pub fn new(principal_claim: &'a str, resource_key: &'a str, action: Action) -> Self {
        Self {
            principal_claim,
            resource_key,
            action,
            index: None,
        }
    }

    /// Target a secondary-index projection instead of the base table.
    #[must_use]
    pub fn on_index(mut self, index: &'a str) -> Self {
        self.index = Some(index);
        self
    }
}
