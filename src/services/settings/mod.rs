// Settings service
// Persists the app config as TOML

mod service;

pub use service::SettingsService;
