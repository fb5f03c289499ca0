use std::sync::{Arc, Mutex};

use url::Url;

use crate::domain::{AppError, Notice};
use crate::ports::{Navigator, Notifier};

/// UI double that records every notice and navigation.
#[derive(Clone, Default)]
pub struct RecordingUi {
    pub notices: Arc<Mutex<Vec<Notice>>>,
    pub navigations: Arc<Mutex<Vec<Url>>>,
}

impl RecordingUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn navigations(&self) -> Vec<Url> {
        self.navigations.lock().unwrap().clone()
    }
}

impl Notifier for RecordingUi {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}

impl Navigator for RecordingUi {
    fn navigate(&self, target: &Url) -> Result<(), AppError> {
        self.navigations.lock().unwrap().push(target.clone());
        Ok(())
    }
}
