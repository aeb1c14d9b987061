//! mapdrop-core: domain logic for the map-annotation service
//!
//! Pure types and rules consumed by the server: coordinates and bounding
//! boxes, the GeoJSON-style wire projection, write-time link rewriting,
//! message validation, and the score-threshold moderation policy. No HTTP
//! or database code lives here.

pub mod feature;
pub mod geo;
pub mod links;
pub mod message;
pub mod moderation;
pub mod validation;

pub use feature::Feature;
pub use geo::{BoundingBox, Coordinates};
pub use links::rewrite_social_link;
pub use message::MessageBody;
pub use moderation::ModerationPolicy;
pub use validation::ValidationError;
