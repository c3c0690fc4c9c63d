pub mod alias;
pub mod media;

pub use alias::Alias;
pub use media::{MediaKind, MediaRecord};
