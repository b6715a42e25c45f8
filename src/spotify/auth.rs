use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, header::AUTHORIZATION};

use crate::{config::Config, spotify::check_status, types::TokenResponse};

/// Builds the value of the `Authorization` header for the token endpoint.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(credentials))
}

/// Exchanges the configured client credentials for a bearer token.
///
/// Performs the OAuth 2.0 client-credentials grant against
/// `config.token_url`. The request is a form-encoded POST with
/// `grant_type=client_credentials`, and the client id/secret pair goes in a
/// Basic `Authorization` header.
///
/// # Arguments
///
/// * `config` - Configuration holding credentials and the token endpoint
///
/// # Returns
///
/// - `Ok(String)` - The `access_token` from the response
/// - `Err(reqwest::Error)` - Network failure, non-success status, or a body
///   without an `access_token` field
///
/// # Token Lifetime
///
/// The token is neither cached nor refreshed. Every CLI run and every
/// `/search` request performs a fresh exchange.
///
/// # Example
///
/// ```
/// let token = get_token(&config).await?;
/// let artist = search::search_artist(&config, &token, "Daft Punk").await?;
/// ```
pub async fn get_token(config: &Config) -> Result<String, reqwest::Error> {
    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .header(
            AUTHORIZATION,
            basic_auth_header(&config.client_id, &config.client_secret),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let token = check_status(res).await?.json::<TokenResponse>().await?;

    Ok(token.access_token)
}
