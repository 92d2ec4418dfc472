//! Command handlers invoked by the binary.

pub mod sun_times;

pub use sun_times::{SunTimesRequest, handle_sun_times, resolve_request};
