use url::Url;

use crate::domain::{AppError, Notice, NoticeLevel};
use crate::ports::{Navigator, Notifier};

/// Terminal adapter for notices and navigation.
///
/// Errors go to stderr, everything else to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalUi;

impl Notifier for TerminalUi {
    fn notify(&self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Success => println!("✅ {}", notice),
            NoticeLevel::Error => eprintln!("❌ {}", notice),
        }
    }
}

impl Navigator for TerminalUi {
    fn navigate(&self, target: &Url) -> Result<(), AppError> {
        println!("↩ Returning to {}", target);
        Ok(())
    }
}
