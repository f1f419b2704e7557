mod core;
pub mod ast;
pub mod analysis;
pub mod interpreter;

pub use crate::core::errors::{self, OryonError};
pub use crate::core::CaptureOutput;
