pub mod errors;
mod output;

pub use output::CaptureOutput;
