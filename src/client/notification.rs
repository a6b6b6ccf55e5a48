use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tokio::task::JoinHandle;

/// How long a notification stays up unless dismissed by hand.
pub const AUTO_DISMISS_AFTER: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            NotificationKind::Success => "Success!",
            NotificationKind::Error => "Error",
        }
    }
}

#[derive(Debug, Default)]
struct Slot {
    // Bumped on every show and dismiss so a timer only clears what it was armed for.
    generation: u64,
    current: Option<Notification>,
}

/// Holds the visible notification and the timer that will take it down.
///
/// The timer is aborted when the notification is dismissed, replaced, or when
/// the notifier is dropped.
#[derive(Debug, Default)]
pub struct Notifier {
    slot: Arc<Mutex<Slot>>,
    timer: Option<JoinHandle<()>>,
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Notifier {
    /// Shows `notification` and arms the auto-dismiss timer. Must be called
    /// from within a tokio runtime.
    pub fn show(&mut self, notification: Notification) {
        self.cancel_timer();
        tracing::debug!(
            title = notification.title(),
            message = %notification.message,
            "showing notification"
        );

        let generation = {
            let mut slot = lock(&self.slot);
            slot.generation += 1;
            slot.current = Some(notification);
            slot.generation
        };

        let slot = Arc::clone(&self.slot);
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(AUTO_DISMISS_AFTER).await;
            let mut slot = lock(&slot);
            if slot.generation == generation {
                slot.current = None;
            }
        }));
    }

    pub fn dismiss(&mut self) {
        self.cancel_timer();
        let mut slot = lock(&self.slot);
        slot.generation += 1;
        slot.current = None;
    }

    pub fn current(&self) -> Option<Notification> {
        lock(&self.slot).current.clone()
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
