//! Site host shell: page events in, page commands out.
pub mod platform;
