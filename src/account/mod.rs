use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use thiserror::Error;

pub mod authorize;
pub mod form;
pub mod persist;
pub mod submit;
pub mod token;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Code,
    ClientId,
    ClientSecret,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Code,
        Field::ClientId,
        Field::ClientSecret,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Code => "Code",
            Field::ClientId => "Client ID",
            Field::ClientSecret => "Client Secret",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Micheal Scofield",
            Field::Email => "xyz@abc.onmicrosoft.com",
            Field::Code => "Code needs to come automatically",
            Field::ClientId => "123-940🪪",
            Field::ClientSecret => "Secret🔐",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rule {
    Required,
    MinLen(usize),
    MaxLen(usize),
    Email,
}

/// Fields and their rules, checked in order. The first failing rule of a
/// field is the one reported.
pub static SCHEMA: &[(Field, &[Rule])] = &[
    (Field::Code, &[Rule::Required]),
    (Field::Name, &[Rule::MinLen(3), Rule::MaxLen(50)]),
    (Field::Email, &[Rule::Email, Rule::MinLen(3), Rule::MaxLen(50)]),
    (Field::ClientId, &[Rule::Required]),
    (Field::ClientSecret, &[Rule::Required]),
];

impl Rule {
    /// `None` when `value` passes
    pub fn check(self, value: &str) -> Option<String> {
        let len = value.chars().count();
        match self {
            Rule::Required if value.is_empty() => Some("Required".into()),
            Rule::MinLen(n) if len < n => {
                Some(format!("String must contain at least {n} character(s)"))
            }
            Rule::MaxLen(n) if len > n => {
                Some(format!("String must contain at most {n} character(s)"))
            }
            Rule::Email if !is_email(value) => Some("Invalid email".into()),
            _ => None,
        }
    }
}

/// Field name to message, only for fields that failed
#[derive(Debug, Default, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(pub BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The unsaved form data for one account. Lives only as long as the form,
/// never written to disk.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AccountDraft {
    pub code: String,
    pub name: String,
    pub email: String,
    pub client_id: String,
    pub client_secret: String,
}

impl AccountDraft {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Default::default()
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Code => &self.code,
            Field::ClientId => &self.client_id,
            Field::ClientSecret => &self.client_secret,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Code => &mut self.code,
            Field::ClientId => &mut self.client_id,
            Field::ClientSecret => &mut self.client_secret,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let errors = SCHEMA
            .iter()
            .filter_map(|(field, rules)| {
                let value = self.get(*field);
                rules
                    .iter()
                    .find_map(|r| r.check(value))
                    .map(|msg| (*field, msg))
            })
            .collect::<BTreeMap<_, _>>();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

/// Loose address syntax check: `local@label.label`. The local part may not
/// start with a dot, hold `..`, or end in `.` or `'`. Domain labels start
/// alphanumeric, and the top level label is alphabetic and at least two
/// characters.
pub fn is_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };

    if domain.contains('@') || local.is_empty() {
        return false;
    }

    let local_ok = local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "_'+-.".contains(c))
        && !local.starts_with('.')
        && !local.ends_with(['.', '\''])
        && !local.contains("..");
    if !local_ok {
        return false;
    }

    let Some((labels, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    let labels_ok = labels.split('.').all(|l| {
        l.starts_with(|c: char| c.is_ascii_alphanumeric())
            && l.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    labels_ok && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}
