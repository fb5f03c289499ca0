use url::Url;

use crate::domain::{AppError, Notice};

/// Port for the user-facing notification channel.
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Port for sending the user to another location.
pub trait Navigator {
    fn navigate(&self, target: &Url) -> Result<(), AppError>;
}
