use std::fs::{create_dir_all, read, write};
use std::path::Path;

use anyhow::{Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::{from_slice, to_vec_pretty};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where `/api/token` and `/api/account` live
    pub base_url: String,
    pub accounts_page: String,
    pub authorize: AuthorizeSettings,
}

/// Parameters of the provider's authorization request, used for the
/// "Sign in" link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorizeSettings {
    pub authority: String,
    pub tenant: String,
    pub redirect_uri: String,
    pub response_mode: String,
    pub scope: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".into(),
            accounts_page: "/old/accounts".into(),
            authorize: AuthorizeSettings::default(),
        }
    }
}

impl Default for AuthorizeSettings {
    fn default() -> Self {
        Self {
            authority: "https://login.microsoftonline.com".into(),
            tenant: "common".into(),
            redirect_uri: "http://localhost:3000/old/add-account".into(),
            response_mode: "query".into(),
            scope: "offline_access User.Read Mail.Read".into(),
        }
    }
}

impl Settings {
    /// Reads `settings.json` from the app directory, writing the defaults
    /// there first if it doesn't exist yet
    pub fn load(appdir: impl AsRef<Path>) -> Result<Self> {
        let f = appdir.as_ref().join(SETTINGS_FILE);
        if f.is_file() {
            log::info!("Settings file found {f:?}");
            let bytes = read(&f)?;
            let s = from_slice::<Self>(&bytes).with_context(|| format!("Parsing {f:?}"))?;
            return Ok(s);
        }

        log::info!("Settings file not found, writing defaults to {f:?}");
        let s = Self::default();
        s.save(appdir)?;
        Ok(s)
    }

    pub fn save(&self, appdir: impl AsRef<Path>) -> Result<()> {
        create_dir_all(appdir.as_ref())?;
        write(appdir.as_ref().join(SETTINGS_FILE), to_vec_pretty(self)?)?;
        Ok(())
    }

    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url).with_context(|| format!("Invalid base url {:?}", self.base_url))
    }

    pub fn accounts_url(&self) -> Result<Url> {
        Ok(self.base_url()?.join(&self.accounts_page)?)
    }
}
