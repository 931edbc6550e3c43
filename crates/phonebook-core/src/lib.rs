pub mod domain;
pub mod pipeline;

pub use domain::*;
pub use pipeline::normalize_record;
