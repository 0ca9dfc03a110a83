mod service;

pub use service::Theme;
