pub mod block_quote;
pub mod code_fence;
pub mod divider;
pub mod heading;
pub mod image;
pub mod list;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use divider::Divider;
pub use heading::Heading;
pub use image::Image;
pub use list::{List, ListMarker};
