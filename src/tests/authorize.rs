use pretty_assertions::assert_eq;

use crate::account::authorize::{authorize_url, new_state};
use crate::settings::AuthorizeSettings;

#[test]
fn test_authorize_url() {
    let s = AuthorizeSettings {
        tenant: "contoso".into(),
        ..Default::default()
    };

    let u = authorize_url(&s, "id1", "st4te");
    assert!(u.is_ok(), "{:#?}", u.unwrap_err());
    let u = u.unwrap();

    assert_eq!(u.host_str(), Some("login.microsoftonline.com"));
    assert_eq!(u.path(), "/contoso/oauth2/v2.0/authorize");

    let pairs = u
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect::<Vec<_>>();
    let keys = pairs.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>();
    assert_eq!(
        keys,
        [
            "client_id",
            "response_type",
            "redirect_uri",
            "response_mode",
            "scope",
            "state"
        ]
    );
    assert_eq!(pairs[0].1, "id1");
    assert_eq!(pairs[1].1, "code");
    assert_eq!(pairs[2].1, s.redirect_uri);
    assert_eq!(pairs[4].1, s.scope);
    assert_eq!(pairs[5].1, "st4te");
}

#[test]
fn test_trailing_slash_on_authority() {
    let s = AuthorizeSettings {
        authority: "https://login.example.com/".into(),
        ..Default::default()
    };

    let u = authorize_url(&s, "id1", "x").unwrap();
    assert_eq!(u.path(), "/common/oauth2/v2.0/authorize");
}

#[test]
fn test_states_differ() {
    let a = new_state();
    let b = new_state();
    assert_eq!(a.len(), 32);
    assert_ne!(a, b);
}
