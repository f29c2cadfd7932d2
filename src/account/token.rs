use reqwest::{Client, Url};
use serde::de::Error as _;
use serde_json::{Value, from_slice};

use crate::account::submit::SubmitError;

/// Whatever the token endpoint handed back. The response isn't validated,
/// so a member the endpoint left out is just `None` and gets passed along
/// as such.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TokenPair {
    pub access_token: Option<Value>,
    pub refresh_token: Option<Value>,
}

impl TokenPair {
    fn from_json(v: Value) -> Result<Self, SubmitError> {
        match v {
            Value::Null => Err(serde_json::Error::custom("token response is null").into()),
            Value::Object(m) => Ok(Self {
                access_token: m.get("access_token").cloned(),
                refresh_token: m.get("refresh_token").cloned(),
            }),
            _ => Ok(Self::default()),
        }
    }
}

/// `GET /api/token?code=&client_id=&client_secret=`
pub async fn exchange(
    cl: &Client,
    base: &Url,
    code: impl AsRef<str>,
    client_id: impl AsRef<str>,
    client_secret: impl AsRef<str>,
) -> Result<TokenPair, SubmitError> {
    let url = base.join("/api/token")?;
    log::info!("Exchanging authorization code at {url}");

    let res = cl
        .get(url)
        .query(&[
            ("code", code.as_ref()),
            ("client_id", client_id.as_ref()),
            ("client_secret", client_secret.as_ref()),
        ])
        .send()
        .await
        // The url carries the client secret and the code
        .map_err(reqwest::Error::without_url)?;

    let stat = res.status();
    if !stat.is_success() {
        log::error!("Token endpoint answered {stat}");
        return Err(SubmitError::ExchangeFailed(stat));
    }

    let bytes = res.bytes().await.map_err(reqwest::Error::without_url)?;
    let tokens = TokenPair::from_json(from_slice::<Value>(&bytes)?)?;
    if tokens.access_token.is_none() || tokens.refresh_token.is_none() {
        log::warn!("Token response is missing a token, passing it on anyway");
    }

    Ok(tokens)
}
