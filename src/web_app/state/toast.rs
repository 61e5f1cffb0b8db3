// web_app/state/toast.rs - Single-slot toast state
//
// At most one toast is visible. Showing a new one replaces the old one and
// bumps the generation; a dismiss timer only clears the toast it was
// started for.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// How long a toast stays up unless replaced or closed
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

impl ToastKind {
    /// Tailwind classes for the toast container
    pub fn classes(&self) -> &'static str {
        match self {
            ToastKind::Success => "bg-green-50 border-green-200 text-green-800",
            ToastKind::Error => "bg-red-50 border-red-200 text-red-800",
        }
    }
}

/// A message destined for the toast slot
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub kind: ToastKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }
}

/// The toast currently on screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub notice: Notice,
    pub shown_at: DateTime<Utc>,
    pub generation: u64,
}

impl Toast {
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.shown_at + toast_delta()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastSlot {
    current: Option<Toast>,
    generation: u64,
}

impl ToastSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `notice` now; returns the generation to expire later
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.show_at(notice, Utc::now())
    }

    pub fn show_at(&mut self, notice: Notice, now: DateTime<Utc>) -> u64 {
        self.generation += 1;
        self.current = Some(Toast {
            notice,
            shown_at: now,
            generation: self.generation,
        });
        self.generation
    }

    /// Close button
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Timer callback: clears the toast only if it is still `generation`
    pub fn expire(&mut self, generation: u64) -> bool {
        match &self.current {
            Some(toast) if toast.generation == generation => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// The toast as seen at `now`, honouring the timeout even if the
    /// timer has not fired yet
    pub fn visible_at(&self, now: DateTime<Utc>) -> Option<&Toast> {
        self.current.as_ref().filter(|toast| now < toast.expires_at())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

fn toast_delta() -> TimeDelta {
    TimeDelta::milliseconds(TOAST_DURATION.as_millis() as i64)
}
