//! Global client state shared through the component context.

pub mod session;
pub mod toast;
