pub mod config;
pub mod errors;
pub mod format;
pub mod table;

pub use config::AppConfig;
pub use errors::user_error_message;
pub use format::format_es_cl;
pub use table::Table;
