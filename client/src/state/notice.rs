//! Auto-dismissing success/error banners.
//!
//! Each `show` bumps a sequence number; the dismiss timer only clears the
//! notice it was started for, so an older timer never hides a newer notice.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use std::time::Duration;

use leptos::prelude::*;

/// Lifetime of management-screen notices.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);
/// Lifetime of the post-booking and post-review banners.
pub const BOOKING_NOTICE_TTL: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert alert-success",
            Self::Error => "alert alert-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    current: Option<Notice>,
    seq: u64,
}

impl NoticeState {
    /// Replace the current notice and return its sequence number.
    pub fn show(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.seq += 1;
        self.current = Some(Notice { kind, text: text.into() });
        self.seq
    }

    /// Clear the notice if it is still the one numbered `seq`.
    pub fn dismiss(&mut self, seq: u64) -> bool {
        if seq != self.seq || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

/// Show a notice and schedule its dismissal after `ttl`.
pub fn flash(notices: RwSignal<NoticeState>, kind: NoticeKind, text: impl Into<String>, ttl: Duration) {
    let mut seq = 0;
    notices.update(|state| seq = state.show(kind, text));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(ttl).await;
        notices.update(|state| {
            state.dismiss(seq);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (seq, ttl);
}
