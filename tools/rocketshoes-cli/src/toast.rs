//! Terminal toasts for cart notices.

use rocketshoes_commerce::cart::{Notice, NoticeLevel, Notifier};

use crate::output::Output;

/// Shows cart notices the way the storefront shows toasts.
pub struct ToastNotifier {
    output: Output,
}

impl ToastNotifier {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => self.output.error(&notice.message),
        }
    }
}
