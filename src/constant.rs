use regex::Regex;

/// Version string required at the top of every IAM policy document.
pub(crate) const POLICY_VERSION: &str = "2012-10-17";

/// Token claim the default [`ClaimMapping`](crate::ClaimMapping) binds partition
/// keys to.
pub(crate) const DEFAULT_CLAIM: &str = "www.amazon.com:user_id";

lazy_static! {
    /// Grammar of a DynamoDB table ARN:
    /// `arn:aws:dynamodb:<region>:<account>:table/<name>`.
    ///
    /// Table names are 3-255 characters from `a-z A-Z 0-9 _ - .`.
    pub(crate) static ref TABLE_ARN: Regex =
        Regex::new(r"^arn:aws:dynamodb:[a-z0-9-]+:[0-9]{12}:table/[a-zA-Z0-9_.-]{3,255}$")
            .expect("table ARN pattern should compile");
}
