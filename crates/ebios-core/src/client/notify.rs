//! Transient notification banners.
//!
//! Each banner is dismissed automatically after a fixed delay by its own
//! timer task. Dismissing early cancels that task.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dashmap::DashMap;
use tokio_util::sync::CancellationToken;

use super::view::ChatView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "✅",
            NotificationKind::Error => "❌",
            NotificationKind::Info => "ℹ️",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Error => write!(f, "error"),
            NotificationKind::Info => write!(f, "info"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Tracks visible banners and their dismissal timers.
pub struct NotificationCenter {
    view: Arc<dyn ChatView>,
    dismiss_after: Duration,
    next_id: AtomicU64,
    active: Arc<DashMap<u64, (Notification, CancellationToken)>>,
}

impl NotificationCenter {
    pub fn new(view: Arc<dyn ChatView>, dismiss_after: Duration) -> Self {
        Self {
            view,
            dismiss_after,
            next_id: AtomicU64::new(1),
            active: Arc::new(DashMap::new()),
        }
    }

    /// Show a banner and schedule its dismissal. Returns the banner id.
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let notification = Notification {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            kind,
            message: message.into(),
        };
        let id = notification.id;
        let token = CancellationToken::new();

        self.view.show_notification(&notification);
        self.active.insert(id, (notification, token.clone()));

        let active = Arc::clone(&self.active);
        let view = Arc::clone(&self.view);
        let delay = self.dismiss_after;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    if active.remove(&id).is_some() {
                        view.dismiss_notification(id);
                    }
                }
            }
        });

        id
    }

    /// Dismiss a banner before its timer fires. Returns whether it was visible.
    pub fn dismiss(&self, id: u64) -> bool {
        match self.active.remove(&id) {
            Some((_, (_, token))) => {
                token.cancel();
                self.view.dismiss_notification(id);
                true
            }
            None => false,
        }
    }

    /// Currently visible banners, oldest first.
    pub fn active(&self) -> Vec<Notification> {
        let mut list: Vec<Notification> =
            self.active.iter().map(|e| e.value().0.clone()).collect();
        list.sort_by_key(|n| n.id);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingView, ViewEvent};

    fn center(view: &Arc<RecordingView>) -> NotificationCenter {
        NotificationCenter::new(view.clone(), Duration::from_secs(3))
    }

    #[tokio::test(start_paused = true)]
    async fn banner_dismisses_after_delay() {
        let view = Arc::new(RecordingView::default());
        let center = center(&view);

        let id = center.show(NotificationKind::Success, "Connected");
        assert_eq!(center.active().len(), 1);

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert_eq!(center.active().len(), 1);

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert!(center.active().is_empty());
        assert!(view.events().contains(&ViewEvent::Dismissed(id)));
    }

    #[tokio::test(start_paused = true)]
    async fn early_dismiss_cancels_timer() {
        let view = Arc::new(RecordingView::default());
        let center = center(&view);

        let id = center.show(NotificationKind::Info, "hello");
        assert!(center.dismiss(id));
        assert!(!center.dismiss(id));

        tokio::time::sleep(Duration::from_secs(4)).await;
        let dismissals = view
            .events()
            .into_iter()
            .filter(|e| *e == ViewEvent::Dismissed(id))
            .count();
        assert_eq!(dismissals, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn ids_are_unique_and_ordered() {
        let view = Arc::new(RecordingView::default());
        let center = center(&view);

        let a = center.show(NotificationKind::Info, "a");
        let b = center.show(NotificationKind::Error, "b");
        assert!(b > a);

        let active = center.active();
        assert_eq!(active[0].message, "a");
        assert_eq!(active[1].kind, NotificationKind::Error);
        assert_eq!(active[1].kind.icon(), "❌");
    }
}
