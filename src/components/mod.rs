pub mod bio;
pub mod layout;
pub mod seo;
pub mod tags;

pub use bio::bio;
pub use layout::layout;
pub use seo::{seo, SeoProps};
pub use tags::tags;
