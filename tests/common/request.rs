use aws_sdk_cognitoidentityprovider::operation::initiate_auth::InitiateAuthOutput;
use aws_sdk_cognitoidentityprovider::operation::sign_up::SignUpOutput;
use aws_sdk_cognitoidentityprovider::types::{AttributeType, AuthFlowType};
use aws_sdk_dynamodb::operation::get_item::GetItemOutput;
use aws_sdk_dynamodb::operation::put_item::PutItemOutput;
use aws_sdk_dynamodb::operation::query::QueryOutput;
use aws_sdk_dynamodb::types::AttributeValue;

use crate::common;
use crate::common::client::TestUser;

pub async fn send_sign_up_request(
    cognito: &aws_sdk_cognitoidentityprovider::Client,
    user: &TestUser,
) -> SignUpOutput {
    cognito
        .sign_up()
        .client_id(common::env("CLIENT_ID"))
        .username(&user.email)
        .password(&user.password)
        .user_attributes(
            AttributeType::builder()
                .name("email")
                .value(&user.email)
                .build()
                .expect("The email attribute should build"),
        )
        .send()
        .await
        .expect("Request to sign the user up should succeed")
}

pub async fn send_initiate_auth_request(
    cognito: &aws_sdk_cognitoidentityprovider::Client,
    user: &TestUser,
) -> InitiateAuthOutput {
    cognito
        .initiate_auth()
        .auth_flow(AuthFlowType::UserPasswordAuth)
        .client_id(common::env("CLIENT_ID"))
        .auth_parameters("USERNAME", &user.email)
        .auth_parameters("PASSWORD", &user.password)
        .send()
        .await
        .expect("Request to initiate auth with user credentials should succeed")
}

pub async fn send_put_item_request(
    dynamo: &aws_sdk_dynamodb::Client,
    partition_key: &str,
    payload: &str,
) -> PutItemOutput {
    dynamo
        .put_item()
        .table_name(common::env("TABLE_NAME"))
        .item("id", AttributeValue::S(partition_key.to_string()))
        .item("payload", AttributeValue::S(payload.to_string()))
        .send()
        .await
        .expect("Request to append the row should succeed")
}

pub async fn send_get_item_request(
    dynamo: &aws_sdk_dynamodb::Client,
    partition_key: &str,
) -> GetItemOutput {
    dynamo
        .get_item()
        .table_name(common::env("TABLE_NAME"))
        .key("id", AttributeValue::S(partition_key.to_string()))
        .send()
        .await
        .expect("Request to read the row should succeed")
}

pub async fn send_query_request(
    dynamo: &aws_sdk_dynamodb::Client,
    partition_key: &str,
) -> QueryOutput {
    dynamo
        .query()
        .table_name(common::env("TABLE_NAME"))
        .key_condition_expression("#id = :id")
        .expression_attribute_names("#id", "id")
        .expression_attribute_values(":id", AttributeValue::S(partition_key.to_string()))
        .send()
        .await
        .expect("Request to query the caller's partition should succeed")
}
