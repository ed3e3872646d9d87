//! Design primitives: generic elements whose look comes from an explicit [`Style`].

mod primitives;
mod style;

pub use primitives::{card, flex, link, list, span, LinkProps};
pub use style::{Size, Space, Style};
