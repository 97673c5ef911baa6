//! Transient status messages ("toasts")

/// How long a toast stays fully visible
pub const VISIBLE_MS: u32 = 3000;
/// Fade-out duration before the toast is removed
pub const FADE_MS: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn background(&self) -> &'static str {
        match self {
            NoticeKind::Success => "#28a745",
            NoticeKind::Error => "#dc3545",
        }
    }
}

/// A message shown to the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// Cosmetic only; data operations never depend on it
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Inline style of the toast element
pub fn toast_style(kind: NoticeKind) -> String {
    format!(
        "position: fixed; top: 20px; right: 20px; padding: 15px 25px; \
         border-radius: 8px; color: white; z-index: 1000; font-weight: bold; \
         box-shadow: 0 4px 12px rgba(0,0,0,0.2); background-color: {}; \
         transition: opacity {}ms ease-in-out;",
        kind.background(),
        FADE_MS
    )
}
