use std::time::Instant;

use pretty_assertions::assert_eq;
use reqwest::Url;
use tokio::runtime::Handle;
use tokio::sync::watch;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::account::submit::{Action, SubmitState, SubmitStore};
use crate::account::{AccountDraft, Field};
use crate::app::view::FormView;
use crate::init::init_reqwest;
use crate::utils::message::Toast;

fn fill(view: &mut FormView) {
    assert!(view.form.set(Field::Name, "Michael Scofield"));
    assert!(view.form.set(Field::Email, "xyz@abc.onmicrosoft.com"));
    assert!(view.form.set(Field::ClientId, "id1"));
    assert!(view.form.set(Field::ClientSecret, "sec1"));
}

fn shown(view: &mut FormView) -> Vec<Toast> {
    view.toasts
        .current(Instant::now())
        .iter()
        .map(|(t, _)| t.clone())
        .collect()
}

#[test]
fn test_nothing_new_nothing_shown() {
    let (_tx, rx) = watch::channel(SubmitState::Idle);
    let mut view = FormView::new("abc", rx);

    assert!(!view.poll());
    assert_eq!(view.state(), SubmitState::Idle);
    assert!(view.toasts.is_empty());
}

#[test]
fn test_every_failure_gets_its_own_toast() {
    let (tx, rx) = watch::channel(SubmitState::Idle);
    let mut view = FormView::new("abc", rx);
    fill(&mut view);
    let filled = view.form.draft().clone();
    let oauth_state = view.oauth_state.clone();

    tx.send(SubmitState::Failed).unwrap();
    assert!(view.poll());
    tx.send(SubmitState::Exchanging).unwrap();
    assert!(view.poll());
    assert_eq!(view.state(), SubmitState::Exchanging);
    tx.send(SubmitState::Failed).unwrap();
    assert!(view.poll());

    assert_eq!(shown(&mut view), vec![Toast::went_wrong(), Toast::went_wrong()]);
    assert_eq!(view.form.draft(), &filled);
    assert_eq!(view.oauth_state, oauth_state);
}

#[test]
fn test_a_retry_between_two_frames_still_shows_a_toast() {
    let (tx, rx) = watch::channel(SubmitState::Idle);
    let mut view = FormView::new("abc", rx);
    fill(&mut view);

    tx.send(SubmitState::Failed).unwrap();
    assert!(view.poll());

    // The ui thread never sees the Exchanging in between
    tx.send(SubmitState::Exchanging).unwrap();
    tx.send(SubmitState::Failed).unwrap();
    assert!(view.poll());

    assert_eq!(shown(&mut view), vec![Toast::went_wrong(), Toast::went_wrong()]);
    assert_eq!(view.form.draft().name, "Michael Scofield");
}

#[test]
fn test_done_clears_everything_but_the_code() {
    let (tx, rx) = watch::channel(SubmitState::Idle);
    let mut view = FormView::new("abc", rx);
    fill(&mut view);
    let _ = view.form.validate();
    let oauth_state = view.oauth_state.clone();

    tx.send(SubmitState::Exchanging).unwrap();
    assert!(view.poll());
    tx.send(SubmitState::Persisting).unwrap();
    assert!(view.poll());
    assert!(shown(&mut view).is_empty());

    tx.send(SubmitState::Done).unwrap();
    assert!(view.poll());

    assert_eq!(view.form.draft(), &AccountDraft::new("abc"));
    assert!(view.form.errors().is_empty());
    assert_eq!(shown(&mut view), vec![Toast::account_added()]);
    assert_ne!(view.oauth_state, oauth_state);
}

#[test]
fn test_edits_reset_only_a_finished_submission() {
    let (tx, rx) = watch::channel(SubmitState::Idle);
    let mut view = FormView::new("abc", rx);
    assert!(view.edited().is_none());

    for busy in [SubmitState::Exchanging, SubmitState::Persisting] {
        tx.send(busy).unwrap();
        let _ = view.poll();
        assert!(view.edited().is_none(), "{busy:?}");
    }

    for finished in [SubmitState::Done, SubmitState::Failed] {
        tx.send(finished).unwrap();
        let _ = view.poll();
        assert!(matches!(view.edited(), Some(Action::Reset)), "{finished:?}");
    }
}

#[tokio::test]
async fn test_editing_after_a_failure_goes_back_to_idle() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let base = Url::parse(&server.uri()).unwrap();
    let store = SubmitStore::new(init_reqwest(&base).unwrap(), base, Handle::current());
    let mut view = FormView::new("abc", store.subscribe());
    fill(&mut view);

    let draft = view.form.validate().unwrap();
    let _ = store.submit(draft).await;
    assert!(view.poll());
    assert_eq!(view.state(), SubmitState::Failed);

    assert!(view.form.set(Field::Name, "Lincoln Burrows"));
    let action = view.edited().expect("a failed submission resets on edit");
    assert!(store.dispatch(action).is_none());
    assert_eq!(store.state(), SubmitState::Idle);

    assert!(view.poll());
    assert_eq!(view.state(), SubmitState::Idle);
    assert!(view.edited().is_none());
    assert_eq!(shown(&mut view), vec![Toast::went_wrong()]);
    assert_eq!(view.form.draft().name, "Lincoln Burrows");
}
