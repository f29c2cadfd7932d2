use std::env::var_os;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use reqwest::{Client, Url};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn init_appdir() -> Result<PathBuf> {
    #[cfg(target_family = "windows")]
    let appdir = {
        let mut p = PathBuf::from(
            var_os("APPDATA").ok_or(anyhow!("Variable %APPDATA% is not set"))?,
        );

        p.push("Account Adder");
        p
    };

    #[cfg(target_family = "unix")]
    let appdir = {
        let mut p =
            PathBuf::from(var_os("HOME").ok_or(anyhow!("Variable $HOME is not set"))?);

        p.push(".local");
        p.push("share");
        p.push("account-adder");
        p
    };

    Ok(appdir)
}

/// Plain http is only allowed when the backend itself is plain http
/// (a local dev server, or the mock server in tests)
pub fn init_reqwest(base_url: &Url) -> Result<Client> {
    let c = Client::builder()
        .user_agent(format!("account-adder/{VERSION}"))
        .pool_idle_timeout(None)
        .use_rustls_tls()
        .https_only(base_url.scheme() == "https")
        .build()?;

    Ok(c)
}
