//! Toast notifications and confirmation prompts
//!
//! Controllers never print or prompt directly. They get a [`Notifier`] and,
//! for destructive actions, a [`Confirm`].

use std::io::{BufRead, Write};
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

pub trait Notifier: Send + Sync {
    fn notify(&self, kind: ToastKind, message: &str);

    fn success(&self, message: &str) {
        self.notify(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(ToastKind::Error, message);
    }

    fn info(&self, message: &str) {
        self.notify(ToastKind::Info, message);
    }
}

/// Prints toasts to the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: ToastKind, message: &str) {
        match kind {
            ToastKind::Success => println!("✔ {message}"),
            ToastKind::Info => println!("• {message}"),
            ToastKind::Error => eprintln!("✘ {message}"),
        }
    }
}

/// Keeps every toast; for tests
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .map(|t| t.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts().pop()
    }

    pub fn count(&self, kind: ToastKind) -> usize {
        self.toasts().iter().filter(|t| t.kind == kind).count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: ToastKind, message: &str) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(Toast {
                kind,
                message: message.to_string(),
            });
        }
    }
}

/// Yes/no gate in front of destructive actions
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Asks on the terminal; anything but `y`/`yes` declines
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        if std::io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match std::io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                tracing::warn!(error = %e, "could not read confirmation");
                false
            }
        }
    }
}

/// `--yes`
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier() {
        let notifier = RecordingNotifier::new();
        notifier.success("Saved");
        notifier.error("Failed");
        assert_eq!(notifier.count(ToastKind::Success), 1);
        assert_eq!(
            notifier.last(),
            Some(Toast {
                kind: ToastKind::Error,
                message: "Failed".into()
            })
        );
    }

    #[test]
    fn test_closure_confirm() {
        let decline = |_: &str| false;
        assert!(!decline.confirm("Delete?"));
        assert!(AlwaysConfirm.confirm("Delete?"));
    }
}
