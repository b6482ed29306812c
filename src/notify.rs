//! Blocking user notifications.

use log::warn;

pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Shows notifications with `window.alert`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn notify(&self, message: &str) {
        if let Err(e) = gloo_utils::window().alert_with_message(message) {
            warn!("Could not show notification \"{}\": {:?}", message, e);
        }
    }
}
