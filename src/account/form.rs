use crate::account::{AccountDraft, Field, ValidationErrors};

/// Field values plus the errors shown under them
#[derive(Debug, Default, Clone)]
pub struct FormState {
    initial_code: String,
    draft: AccountDraft,
    errors: ValidationErrors,
    // Errors only show up once the user tried to submit
    attempted: bool,
}

impl FormState {
    pub fn new(code: impl Into<String>) -> Self {
        let initial_code = code.into();
        Self {
            draft: AccountDraft::new(initial_code.clone()),
            initial_code,
            ..Default::default()
        }
    }

    pub fn draft(&self) -> &AccountDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Returns false and leaves the draft alone for the code field, which
    /// only ever comes from the redirect
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> bool {
        if field == Field::Code {
            log::debug!("Ignoring an edit to the code field");
            return false;
        }

        *self.draft.get_mut(field) = value.into();
        if self.attempted {
            self.errors = self.draft.validate().err().unwrap_or_default();
        }

        true
    }

    /// Validates the draft for a submit, handing back a copy of it when
    /// every field passes
    pub fn validate(&mut self) -> Result<AccountDraft, ValidationErrors> {
        self.attempted = true;
        match self.draft.validate() {
            Ok(()) => {
                self.errors = ValidationErrors::default();
                Ok(self.draft.clone())
            }
            Err(e) => {
                self.errors = e.clone();
                Err(e)
            }
        }
    }

    /// Throws the draft away and starts over from the code the form was
    /// opened with
    pub fn discard(&mut self) {
        *self = Self::new(self.initial_code.clone());
    }
}
