mod resource;
mod tag;

#[rustfmt::skip]
pub use {
    resource::ResourceRepo,
    tag::TagRepo,
};
