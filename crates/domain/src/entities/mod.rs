//! Domain entities - Core business objects with identity

mod participant;

pub use participant::Participant;
