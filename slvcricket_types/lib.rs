pub mod errors;

pub use errors::Result;
