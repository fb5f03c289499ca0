mod fake_storefront;
mod recording_ui;

pub use fake_storefront::FakeStorefront;
pub use recording_ui::RecordingUi;
