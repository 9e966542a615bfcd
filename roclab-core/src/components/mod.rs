//! Component traits.
//!
//! The streaming indicator trait is the seam external collaborators program
//! against: a price feed pushes observations in, a signal or plotting layer
//! reads the oscillator values out.

pub mod indicator;

pub use indicator::StreamingIndicator;
