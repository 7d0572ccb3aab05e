mod format;
pub use format::LoggerFormat;

mod level;
pub use level::LoggerLevel;

mod timer;
pub use timer::{LoggerRfc3339, LoggerTimeZone, init_local_offset};
