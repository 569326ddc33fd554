pub mod landing;
pub mod site;
pub mod skin_type;

pub use landing::{LandingState, Navigate};
pub use site::SITE;
pub use skin_type::{SKIN_TYPES, SkinType, SkinTypeEntry};
