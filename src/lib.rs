pub mod artifacts;
pub mod assemble;
pub mod buildstep;
pub mod error;
pub mod filter;
pub mod headers;
pub mod layout;
pub mod platform;
pub mod runtime;
