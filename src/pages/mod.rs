pub mod index;
pub mod not_found;
pub mod post;

pub use index::render_index;
pub use not_found::not_found;
pub use post::blog_post;
