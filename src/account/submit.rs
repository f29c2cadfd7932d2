use std::fmt::{Display, Formatter};
use std::sync::Arc;

use reqwest::{Client, StatusCode, Url};
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::watch::{Receiver, Sender};
use tokio::task::JoinHandle;

use crate::account::token::{self, TokenPair};
use crate::account::{AccountDraft, ValidationErrors, persist};
use crate::utils::message::Toast;

/// Anything that can go wrong after validation passed. The user only ever
/// sees one generic toast for all of these, the detail goes to the logs.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("token exchange failed with status {0}")]
    ExchangeFailed(StatusCode),
    #[error("account creation failed with status {0}")]
    CreateFailed(StatusCode),
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("token response is not usable json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("cannot build endpoint url: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Exchanging,
    Persisting,
    Done,
    Failed,
}

impl SubmitState {
    pub fn is_busy(self) -> bool {
        matches!(self, SubmitState::Exchanging | SubmitState::Persisting)
    }

    /// The notification a state emits when it is entered
    pub fn toast(self) -> Option<Toast> {
        match self {
            SubmitState::Done => Some(Toast::account_added()),
            SubmitState::Failed => Some(Toast::went_wrong()),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Nothing was sent
    Invalid(ValidationErrors),
    /// Another submission is still in flight, nothing was sent
    Busy,
    Done,
    Failed(SubmitError),
}

impl Display for SubmitOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitOutcome::Invalid(e) => write!(f, "not sent, {e}"),
            SubmitOutcome::Busy => write!(f, "not sent, another submission is in flight"),
            SubmitOutcome::Done => write!(f, "account added"),
            SubmitOutcome::Failed(e) => write!(f, "failed, {e}"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    Submit(AccountDraft),
    /// Back to `Idle` once a submission has finished
    Reset,
}

/// Holds the submission state and runs submissions against the backend.
/// Cloning gives another handle to the same state.
#[derive(Debug, Clone)]
pub struct SubmitStore {
    cl: Client,
    base: Arc<Url>,
    state: Arc<Sender<SubmitState>>,
    handle: Handle,
}

impl SubmitStore {
    pub fn new(cl: Client, base: Url, handle: Handle) -> Self {
        Self {
            cl,
            base: Arc::new(base),
            state: Arc::new(Sender::new(SubmitState::Idle)),
            handle,
        }
    }

    pub fn state(&self) -> SubmitState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> Receiver<SubmitState> {
        self.state.subscribe()
    }

    pub fn dispatch(&self, action: Action) -> Option<JoinHandle<SubmitOutcome>> {
        match action {
            Action::Submit(draft) => {
                let store = self.clone();
                Some(self.handle.spawn(async move {
                    let outcome = store.submit(draft).await;
                    log::debug!("Submission finished: {outcome}");
                    outcome
                }))
            }
            Action::Reset => {
                self.state.send_if_modified(|s| {
                    if s.is_busy() || *s == SubmitState::Idle {
                        return false;
                    }

                    *s = SubmitState::Idle;
                    true
                });

                None
            }
        }
    }

    pub async fn submit(&self, draft: AccountDraft) -> SubmitOutcome {
        if let Err(e) = draft.validate() {
            log::warn!("Not submitting, {e}");
            return SubmitOutcome::Invalid(e);
        }

        if !self.begin() {
            log::warn!("A submission is already in flight, ignoring this one");
            return SubmitOutcome::Busy;
        }

        match self.run(&draft).await {
            Ok(()) => {
                log::info!("Account {} added", draft.email);
                self.state.send_replace(SubmitState::Done);
                SubmitOutcome::Done
            }
            Err(e) => {
                log::error!("Adding account {} failed: {e}", draft.email);
                self.state.send_replace(SubmitState::Failed);
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Check and set in one go so two submissions can't both get through
    fn begin(&self) -> bool {
        self.state.send_if_modified(|s| {
            if s.is_busy() {
                return false;
            }

            *s = SubmitState::Exchanging;
            true
        })
    }

    async fn run(&self, draft: &AccountDraft) -> Result<(), SubmitError> {
        let tokens: TokenPair = token::exchange(
            &self.cl,
            &self.base,
            &draft.code,
            &draft.client_id,
            &draft.client_secret,
        )
        .await?;

        self.state.send_replace(SubmitState::Persisting);
        if let Err(e) = persist::create(&self.cl, &self.base, draft, &tokens).await {
            // Nothing revokes these, they are simply dropped here
            log::warn!("Discarding the tokens issued for {}", draft.email);
            return Err(e);
        }

        Ok(())
    }
}
