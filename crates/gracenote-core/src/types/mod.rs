mod envelope;
mod identity;

pub use envelope::*;
pub use identity::*;
