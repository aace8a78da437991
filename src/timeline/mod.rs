// Participant timeline geometry

pub mod layout;
pub mod pairing;
pub mod projection;

pub use layout::{TimelineLayout, TimelineLayoutEngine};
pub use pairing::{PairedInterval, pair_intervals, track_intervals};
pub use projection::TimeProjection;
