//! Host-side simulation layer over the pin-accurate core.

pub mod driver;

pub use driver::Driver;
