use std::time::{Duration, Instant};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn account_added() -> Self {
        Self {
            kind: ToastKind::Default,
            title: "Account Added".into(),
            description: "New account added successfully!".into(),
        }
    }

    /// Shown for every failure, whether the inputs were bad or the server
    /// fell over
    pub fn went_wrong() -> Self {
        Self {
            kind: ToastKind::Destructive,
            title: "Something went wrong".into(),
            description: "Please try again with valid inputs!".into(),
        }
    }
}

/// Toasts currently on screen, each dropped once it's been up for `ttl`
#[derive(Debug)]
pub struct Toasts {
    ttl: Duration,
    shown: Vec<(Toast, Instant)>,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl Toasts {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, shown: vec![] }
    }

    pub fn push(&mut self, toast: Toast) {
        self.shown.push((toast, Instant::now()));
    }

    pub fn dismiss(&mut self, idx: usize) {
        if idx < self.shown.len() {
            let _ = self.shown.remove(idx);
        }
    }

    /// Drops the expired toasts and returns the rest
    pub fn current(&mut self, now: Instant) -> &[(Toast, Instant)] {
        let ttl = self.ttl;
        self.shown
            .retain(|(_, at)| now.saturating_duration_since(*at) < ttl);

        &self.shown
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }
}
