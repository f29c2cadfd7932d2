use std::path::PathBuf;

use clap::Parser;
use reqwest::Url;

#[derive(Debug, Default, Parser)]
#[command(name = "account-adder", version, about = "Add an OAuth2 mail account to the backend")]
pub struct Cli {
    /// Redirect url the provider sent the browser to, or just its query
    /// string (`?code=...`)
    pub callback: Option<String>,

    /// Authorization code, takes precedence over the callback url
    #[arg(long)]
    pub code: Option<String>,

    /// Backend to talk to for this run, instead of the one in settings.json
    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long)]
    pub appdir: Option<PathBuf>,
}

impl Cli {
    /// The value the form's code field starts with
    pub fn initial_code(&self) -> String {
        if let Some(code) = &self.code {
            return code.clone();
        }

        self.callback
            .as_deref()
            .map(code_from_query)
            .unwrap_or_default()
    }
}

/// Pulls the first `code` query parameter out of a full url, a `?a=b`
/// query string, or a bare `a=b` query string. Missing means empty.
pub fn code_from_query(s: &str) -> String {
    let s = s.trim();
    let url = match Url::parse(s) {
        Ok(u) => u,
        Err(_) => {
            let query = s.strip_prefix('?').unwrap_or(s);
            // Any base works, only the query is read back
            match Url::parse("http://localhost/").and_then(|b| b.join(&format!("?{query}"))) {
                Ok(u) => u,
                Err(e) => {
                    log::warn!("Could not read a query string from {s:?}: {e}");
                    return String::new();
                }
            }
        }
    };

    url.query_pairs()
        .find(|(k, _)| k == "code")
        .map(|(_, v)| v.into_owned())
        .unwrap_or_default()
}
