use aws_config::{BehaviorVersion, Region};
use aws_sdk_cognitoidentityprovider::types::AuthenticationResultType;
use dotenvy::dotenv;

pub mod client;
pub mod flow;
pub mod request;

pub fn setup() {
    dotenv().ok();
}

pub fn env(name: &str) -> String {
    std::env::var(name)
        .unwrap_or_else(|_| panic!("`{name}` must be set to run the live AWS tests"))
}

pub async fn get_cognito_client() -> aws_sdk_cognitoidentityprovider::Client {
    aws_sdk_cognitoidentityprovider::Client::new(&shared_config().await)
}

pub async fn get_dynamo_client() -> aws_sdk_dynamodb::Client {
    aws_sdk_dynamodb::Client::new(&shared_config().await)
}

async fn shared_config() -> aws_config::SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(env("REGION")))
        .load()
        .await
}

pub fn is_authenticated(authentication_result: Option<&AuthenticationResultType>) -> bool {
    authentication_result.is_some()
        && authentication_result.unwrap().id_token.is_some()
            & authentication_result.unwrap().access_token.is_some()
        && authentication_result.unwrap().refresh_token.is_some()
}
