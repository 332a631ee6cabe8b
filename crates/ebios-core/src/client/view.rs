//! Port for rendering chat state.

use ebios_types::chat::ChatMessage;

use super::notify::Notification;

/// Presentation callbacks invoked by the controller.
///
/// Implementations must be cheap and non-blocking: they are called from
/// timer tasks as well as from the controller itself.
pub trait ChatView: Send + Sync {
    /// Render a complete message at once.
    fn render_message(&self, message: &ChatMessage);

    /// Open an empty message that will be filled by [`ChatView::reveal_char`].
    fn begin_reveal(&self, message: &ChatMessage);

    /// Append one character to the message opened by `begin_reveal`.
    fn reveal_char(&self, ch: char);

    /// Show or hide the typing indicator.
    fn set_typing(&self, visible: bool);

    fn show_notification(&self, notification: &Notification);

    fn dismiss_notification(&self, id: u64);

    /// Remove every rendered message.
    fn clear_messages(&self);
}
