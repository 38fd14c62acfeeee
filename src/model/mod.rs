pub mod resolver;
pub mod space;

pub use resolver::SpaceNumberResolver;
pub use space::{Space, SpaceInfo};
