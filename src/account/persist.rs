use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::Value;

use crate::account::AccountDraft;
use crate::account::submit::SubmitError;
use crate::account::token::TokenPair;

/// Body of `POST /api/account`. A token the exchange didn't return is left
/// out of the body entirely.
#[derive(Debug, Serialize)]
pub struct NewAccount<'a> {
    pub name: &'a str,
    pub email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<&'a Value>,
    pub client_id: &'a str,
    pub client_secret: &'a str,
}

impl<'a> NewAccount<'a> {
    pub fn new(draft: &'a AccountDraft, tokens: &'a TokenPair) -> Self {
        Self {
            name: &draft.name,
            email: &draft.email,
            refresh_token: tokens.refresh_token.as_ref(),
            access_token: tokens.access_token.as_ref(),
            client_id: &draft.client_id,
            client_secret: &draft.client_secret,
        }
    }
}

/// `POST /api/account`, the response body is never read
pub async fn create(
    cl: &Client,
    base: &Url,
    draft: &AccountDraft,
    tokens: &TokenPair,
) -> Result<(), SubmitError> {
    let url = base.join("/api/account")?;
    log::info!("Creating account {} at {url}", draft.email);

    let res = cl
        .post(url)
        .json(&NewAccount::new(draft, tokens))
        .send()
        .await
        .map_err(reqwest::Error::without_url)?;

    let stat = res.status();
    if !stat.is_success() {
        log::error!("Account endpoint answered {stat}");
        return Err(SubmitError::CreateFailed(stat));
    }

    Ok(())
}
