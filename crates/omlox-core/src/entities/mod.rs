//! Hub resource envelopes.

mod location;
mod properties;
mod trackable;

pub use location::Location;
pub use properties::Properties;
pub use trackable::Trackable;
