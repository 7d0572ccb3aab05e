mod error;
pub use error::{ModelError, ModelResult};

mod marker;
pub use marker::Marker;
