//! Theme and toast state.

use serde::{Deserialize, Serialize};

use crate::schedule::{SlotTicket, TimerSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Value of the `data-theme` attribute and the CSS `color-scheme`.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Toggle icon: shows the theme a click switches to.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "\u{2600}\u{fe0f}",
            Theme::Light => "\u{1f319}",
        }
    }

    pub fn announcement(self) -> &'static str {
        match self {
            Theme::Dark => "Dark theme enabled",
            Theme::Light => "Light theme enabled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self { message: message.into(), kind }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }
}

/// The single toast area. Showing a toast re-arms the dismiss timer, so the
/// previous toast's timer can no longer hide the new one.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ToastArea {
    current: Option<Toast>,
    visible: bool,
    dismiss: TimerSlot,
}

impl ToastArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, toast: Toast) -> SlotTicket {
        self.current = Some(toast);
        self.visible = true;
        self.dismiss.schedule()
    }

    /// Dismiss-timer callback. Hides the toast only for the latest ticket.
    pub fn expire(&mut self, ticket: SlotTicket) -> bool {
        if self.dismiss.fire(ticket) {
            self.visible = false;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Class list: `toast {kind}` plus `show` while visible. The last message
    /// stays in place while it fades out.
    pub fn class(&self) -> String {
        let kind = self.current.as_ref().map_or(ToastKind::Info, |t| t.kind);
        if self.visible {
            format!("toast {} show", kind.as_str())
        } else {
            format!("toast {}", kind.as_str())
        }
    }
}
