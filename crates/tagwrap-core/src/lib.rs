//! Marker discovery and boilerplate wrapping.
//!
//! A type exposes its methods through a [`MethodTable`], either generated by
//! `#[annotated]` or registered by hand. The [`Scanner`] walks that table and
//! wraps every tagged method with header, before and after notices.
mod describe;
pub use describe::Annotated;

pub mod config;
pub mod scanner;
pub mod table;

pub use config::{ConfigError, NoticeTemplate, ScanConfig};
pub use scanner::{Invocation, ScanError, ScanReport, Scanner, process};
pub use table::{InvokeFn, MethodEntry, MethodError, MethodKind, MethodTable, TableError};

pub use tagwrap_macro::annotated;
pub use tagwrap_model::{Marker, ModelError};

pub mod prelude {
    pub use crate::Annotated;
    pub use crate::annotated;
    pub use crate::config::ScanConfig;
    pub use crate::scanner::{ScanError, ScanReport, Scanner};
    pub use crate::table::{MethodError, MethodTable};
    pub use tagwrap_model::Marker;
}
