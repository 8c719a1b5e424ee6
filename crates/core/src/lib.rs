pub mod classify;
pub mod export;
pub mod format;
pub mod model;
pub mod parsers;
pub mod resolve;
pub mod session;
