use anyhow::Result;
use reqwest::Url;
use uuid::Uuid;

use crate::settings::AuthorizeSettings;

/// The provider's authorization request, the page the user signs in on to
/// get the code this form needs:
///
/// `{authority}/{tenant}/oauth2/v2.0/authorize?client_id=&response_type=code&redirect_uri=&response_mode=&scope=&state=`
pub fn authorize_url(
    settings: &AuthorizeSettings,
    client_id: impl AsRef<str>,
    state: impl AsRef<str>,
) -> Result<Url> {
    let authority = settings.authority.trim_end_matches('/');
    let mut url = Url::parse(&format!(
        "{authority}/{}/oauth2/v2.0/authorize",
        settings.tenant
    ))?;

    url.query_pairs_mut()
        .append_pair("client_id", client_id.as_ref())
        .append_pair("response_type", "code")
        .append_pair("redirect_uri", &settings.redirect_uri)
        .append_pair("response_mode", &settings.response_mode)
        .append_pair("scope", &settings.scope)
        .append_pair("state", state.as_ref());

    Ok(url)
}

pub fn new_state() -> String {
    Uuid::now_v7().simple().to_string()
}
