/// Toasts visible at the same time, older ones are dropped first.
pub const MAX_TOASTS: usize = 5;

/// How long a toast stays up before it dismisses itself.
pub const TOAST_DURATION_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn alert_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "alert-success",
            ToastKind::Error => "alert-error",
            ToastKind::Info => "alert-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            kind,
            message: message.into(),
        });

        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }

        self.next_id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Info, message)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_the_newest_toasts() {
        let mut state = ToastState::default();
        for index in 0..7 {
            state.info(format!("toast {}", index));
        }

        assert_eq!(state.toasts.len(), MAX_TOASTS);
        assert_eq!(state.toasts[0].message, "toast 2");
        assert_eq!(state.toasts[4].message, "toast 6");
    }

    #[test]
    fn dismiss_removes_by_id() {
        let mut state = ToastState::default();
        let first = state.success("Saved");
        let second = state.error("Failed");

        state.dismiss(first);

        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].id, second);
        assert_eq!(state.toasts[0].kind, ToastKind::Error);
    }

    #[test]
    fn ids_are_not_reused_after_dismissal() {
        let mut state = ToastState::default();
        let first = state.info("a");
        state.dismiss(first);

        assert_ne!(state.info("b"), first);
    }
}
