use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use crate::account::submit::SubmitState;
use crate::utils::message::{Toast, ToastKind, Toasts};

#[test]
fn test_notifications_per_state() {
    assert_eq!(SubmitState::Idle.toast(), None);
    assert_eq!(SubmitState::Exchanging.toast(), None);
    assert_eq!(SubmitState::Persisting.toast(), None);

    let ok = SubmitState::Done.toast().unwrap();
    assert_eq!(ok.kind, ToastKind::Default);
    assert_eq!(ok.title, "Account Added");
    assert_eq!(ok.description, "New account added successfully!");

    let bad = SubmitState::Failed.toast().unwrap();
    assert_eq!(bad.kind, ToastKind::Destructive);
    assert_eq!(bad.title, "Something went wrong");
    assert_eq!(bad.description, "Please try again with valid inputs!");
}

#[test]
fn test_toasts_expire() {
    let mut t = Toasts::new(Duration::from_secs(5));
    t.push(Toast::account_added());

    let now = Instant::now();
    assert_eq!(t.current(now).len(), 1);
    assert_eq!(t.current(now + Duration::from_secs(6)).len(), 0);
    assert!(t.is_empty());
}

#[test]
fn test_dismiss() {
    let mut t = Toasts::default();
    t.push(Toast::went_wrong());
    t.push(Toast::account_added());

    t.dismiss(0);
    t.dismiss(7);
    let left = t.current(Instant::now());
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].0, Toast::account_added());
}
