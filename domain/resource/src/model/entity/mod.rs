mod author;
mod resource;
mod tag;
mod translation;

#[rustfmt::skip]
pub use {
    author::AuthorRef,
    resource::Resource,
    tag::Tag,
    translation::ResourceTranslation,
};
