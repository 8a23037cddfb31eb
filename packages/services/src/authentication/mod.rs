pub mod authenticator;
pub mod claims;
pub mod token;

pub use authenticator::*;
pub use token::*;
