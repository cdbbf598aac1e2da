use log::debug;

use crate::policy::AccessRequest;
use crate::{AccessError, Action, RowScopePolicy};

impl RowScopePolicy {
    /// Decide whether a request is permitted.
    ///
    /// Deny rules are evaluated first and short-circuit, so the forbidden
    /// actions can never be granted no matter what other statements exist or
    /// in which order they were declared. An allow requires the target row's
    /// partition key to equal the caller's verified claim; everything else
    /// falls through to the default deny.
    ///
    /// Denial is a normal boolean outcome, not an error - this function never
    /// fails and never panics. It reads no shared state, so the same request
    /// always yields the same decision.
    #[must_use]
    pub fn evaluate(&self, request: &AccessRequest<'_>) -> bool {
        if request.action.is_forbidden() {
            debug!(
                action = request.action.provider_name(),
                key = request.resource_key;
                "Denying forbidden action"
            );

            return false;
        }

        if request.resource_key != request.principal_claim {
            debug!(
                action = request.action.provider_name(),
                key = request.resource_key;
                "Denying access to a row the caller does not own"
            );

            return false;
        }

        debug!(
            action = request.action.provider_name(),
            key = request.resource_key;
            "Allowing access to the caller's own row"
        );

        true
    }

    /// Decide, and translate denial into the boundary error.
    ///
    /// The returned error is identical for every denial cause, so a rejected
    /// caller cannot distinguish a row it does not own from a row that does
    /// not exist.
    ///
    /// ## Errors
    ///
    /// Returns [`AccessError::AuthorizationDenied`] when the request is not
    /// permitted.
    pub fn authorize(&self, request: &AccessRequest<'_>) -> Result<(), AccessError> {
        if self.evaluate(request) {
            Ok(())
        } else {
            Err(AccessError::AuthorizationDenied)
        }
    }

    /// Resolve the caller's partition key from a decoded token payload, then
    /// authorize the request.
    ///
    /// ## Errors
    ///
    /// Returns [`AccessError::IdentityVerification`] when the configured claim
    /// cannot be resolved from the payload, and
    /// [`AccessError::AuthorizationDenied`] when the request is not permitted.
    pub fn authorize_claims(
        &self,
        claims: &serde_json::Value,
        resource_key: &str,
        action: Action,
    ) -> Result<(), AccessError> {
        let principal_claim = self.mapping().resolve(claims)?;

        self.authorize(&AccessRequest::new(&principal_claim, resource_key, action))
    }
}
