pub mod cs;
pub mod error;

pub use cs::ecc;
pub use cs::ecc::hamming::{decode, encode, inject_noise};
pub use error::{Error, Result};
