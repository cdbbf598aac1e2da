#![crate_name = "aws_row_scope"]

//! # AWS Row Scope
//!
//! Row-scoped, append-only access policies for DynamoDB tables shared by federated
//! AWS Cognito identities.
//!
//! Every authenticated caller owns the rows whose partition key equals its verified
//! `user_id` claim, and rows are only ever created - never updated, deleted, or
//! scanned. This crate models that contract in two interchangeable forms:
//!
//! 1. [`RowScopePolicy::evaluate`] - a pure decision function with deny-overrides
//!    semantics, usable wherever the contract needs to be checked or tested without
//!    a network hop.
//! 2. [`RowScopePolicy::document`] - the IAM policy document which instructs AWS to
//!    enforce exactly the same contract on every request against the table and all
//!    of its secondary-index projections, using the
//!    [`dynamodb:LeadingKeys`](https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/specifying-conditions.html)
//!    condition key.
//!
//! The claim-to-partition-key binding is configuration, not a hardcoded string: see
//! [`ClaimMapping`].
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! aws-row-scope = "0.1.0"
//! ```
//!
//! ### Declaring the policy
//!
//! The policy is an immutable value, built once at provisioning time and passed
//! explicitly wherever decisions are made.
//!
//! ```
//! use aws_row_scope::{AccessError, ClaimMapping, RowScopePolicy, TableResource};
//!
//! let policy = RowScopePolicy::new(
//!     // The append-only table whose rows are keyed by user id.
//!     TableResource::new("arn:aws:dynamodb:eu-central-1:123456789012:table/events")?,
//!
//!     // The verified token claim carrying the caller's partition key.
//!     ClaimMapping::default(),
//! );
//!
//! // Attach this document to the role assumed by authenticated identities, and
//! // AWS enforces the same contract the local evaluator implements.
//! let document = policy.document().to_json()?;
//! # Ok::<(), AccessError>(())
//! ```
//!
//! ### Deciding access locally
//!
//! [`RowScopePolicy::evaluate`] never errors - denial is a normal boolean outcome.
//! Deny rules win over any allow, so mutation and removal are off the table even
//! for the row's owner.
//!
//! ```
//! use aws_row_scope::{AccessError, AccessRequest, Action, ClaimMapping, RowScopePolicy, TableResource};
//!
//! let policy = RowScopePolicy::new(
//!     TableResource::new("arn:aws:dynamodb:eu-central-1:123456789012:table/events")?,
//!     ClaimMapping::default(),
//! );
//!
//! // A caller may append to, and read back, its own partition...
//! assert!(policy.evaluate(&AccessRequest::new("user-42", "user-42", Action::Write)));
//! assert!(policy.evaluate(&AccessRequest::new("user-42", "user-42", Action::Read)));
//!
//! // ...but never someone else's,
//! assert!(!policy.evaluate(&AccessRequest::new("user-42", "user-99", Action::Read)));
//!
//! // and rows are append-only: even the owner can never delete.
//! assert!(!policy.evaluate(&AccessRequest::new("user-42", "user-42", Action::Delete)));
//! # Ok::<(), AccessError>(())
//! ```
//!
//! ### Binding a token payload
//!
//! At the authorization boundary, [`RowScopePolicy::authorize_claims`] resolves the
//! caller's partition key out of a decoded (and already verified) token payload and
//! translates denial into [`AccessError::AuthorizationDenied`]. The denial message
//! is identical for every cause, so callers cannot probe whether a row exists.
//!
//! ```
//! use aws_row_scope::{AccessError, Action, ClaimMapping, RowScopePolicy, TableResource};
//!
//! let policy = RowScopePolicy::new(
//!     TableResource::new("arn:aws:dynamodb:eu-central-1:123456789012:table/events")?,
//!     ClaimMapping::default(),
//! );
//!
//! let claims = serde_json::json!({ "www.amazon.com:user_id": "user-42" });
//!
//! policy.authorize_claims(&claims, "user-42", Action::Query)?;
//! # Ok::<(), AccessError>(())
//! ```
//!
//! ## Contributing
//!
//! The integration tests exercise sign-up/sign-in flows and the append-only row
//! contract against a live user pool and table, and are `#[ignore]`d by default.
//!
//! Running them requires a user pool with self sign-up enabled (and a pre-sign-up
//! trigger that auto-confirms new users), an app client without a client secret,
//! and a table whose partition key is the string attribute `id`.
//!
//! With the infrastructure in place, copy `.env.example` to `.env`, fill in
//! `REGION`, `CLIENT_ID`, and `TABLE_NAME`, and run:
//!
//! ```sh
//! cargo test -- --ignored
//! ```

#[macro_use]
extern crate lazy_static;

pub use crate::error::AccessError;
pub use crate::policy::{AccessRequest, Action, ClaimMapping, RowScopePolicy, TableResource};
pub use crate::policy::{Effect, LeadingKeys, PolicyDocument, PolicyStatement, RowCondition};

mod constant;
mod error;
mod policy;
