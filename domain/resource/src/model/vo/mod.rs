mod listing;
mod tag_descriptor;

#[rustfmt::skip]
pub use {
    listing::*,
    tag_descriptor::*,
};
