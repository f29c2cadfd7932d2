use tokio::sync::watch::Receiver;

use crate::account::authorize::new_state;
use crate::account::form::FormState;
use crate::account::submit::{Action, SubmitState};
use crate::utils::message::Toasts;

/// Everything the window shows that reacts to the submission state: the
/// form, the toasts, and the OAuth `state` of the sign-in link
#[derive(Debug)]
pub struct FormView {
    pub form: FormState,
    pub toasts: Toasts,
    pub oauth_state: String,

    state: SubmitState,
    state_rx: Receiver<SubmitState>,
}

impl FormView {
    pub fn new(code: impl Into<String>, state_rx: Receiver<SubmitState>) -> Self {
        let state = *state_rx.borrow();
        Self {
            form: FormState::new(code),
            toasts: Toasts::default(),
            oauth_state: new_state(),

            state,
            state_rx,
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Picks up the latest submission state, returns whether there was one
    pub fn poll(&mut self) -> bool {
        if !self.state_rx.has_changed().unwrap_or(false) {
            return false;
        }

        // No comparison with the previous state: a retry can go
        // Failed -> Exchanging -> Failed between two polls
        let state = *self.state_rx.borrow_and_update();
        self.apply(state);
        true
    }

    fn apply(&mut self, state: SubmitState) {
        log::debug!("Submission state {:?} -> {state:?}", self.state);
        self.state = state;
        if let Some(toast) = state.toast() {
            self.toasts.push(toast);
        }

        // A failed attempt leaves the fields alone so the user can fix them
        if state == SubmitState::Done {
            self.form.discard();
            self.oauth_state = new_state();
        }
    }

    /// An edit after a finished submission starts the form over from `Idle`
    pub fn edited(&self) -> Option<Action> {
        matches!(self.state, SubmitState::Done | SubmitState::Failed).then_some(Action::Reset)
    }
}
