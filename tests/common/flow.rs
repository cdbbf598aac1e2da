use aws_sdk_cognitoidentityprovider::types::AuthenticationResultType;
use aws_sdk_dynamodb::types::AttributeValue;

use crate::common;
use crate::common::client::TestUser;

/// Sign the user up and hand back the pool-assigned `sub`.
///
/// The `sub` is the partition key the row-scoped policy binds this user's rows
/// to, so the row flows below key everything by it.
pub async fn sign_up_user(
    cognito: &aws_sdk_cognitoidentityprovider::Client,
    user: &TestUser,
) -> String {
    let response = common::request::send_sign_up_request(cognito, user).await;

    assert!(
        response.user_confirmed,
        "The pre-sign-up trigger should auto-confirm new users"
    );

    response.user_sub
}

pub async fn sign_in_user(
    cognito: &aws_sdk_cognitoidentityprovider::Client,
    user: &TestUser,
) -> Option<AuthenticationResultType> {
    common::request::send_initiate_auth_request(cognito, user)
        .await
        .authentication_result
}

/// Append a row under the user's own partition key and read it back.
pub async fn append_and_read_own_row(dynamo: &aws_sdk_dynamodb::Client, user_sub: &str) {
    common::request::send_put_item_request(dynamo, user_sub, "signed-up").await;

    let response = common::request::send_get_item_request(dynamo, user_sub).await;

    let row = response
        .item
        .expect("The freshly appended row should be readable by its owner");

    assert_eq!(
        row.get("id"),
        Some(&AttributeValue::S(user_sub.to_string()))
    );
}
