pub use frigate_api;
pub use i18n;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
