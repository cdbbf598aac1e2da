use rand::Rng;

/// A throwaway identity for a single live test run.
///
/// The pool under test allows self sign-up, and its pre-sign-up trigger
/// auto-confirms new users, so a generated address is immediately usable.
pub struct TestUser {
    pub email: String,
    pub password: String,
}

pub fn generate_test_user() -> TestUser {
    let tag: u64 = rand::rng().random();

    TestUser {
        email: format!("test-user-{tag:016x}@example.com"),
        password: "SuperSecret0101$$".to_string(),
    }
}
