mod resource;
mod tag;

#[rustfmt::skip]
pub use {
    resource::ResourceLifecycleServiceImpl,
    tag::TagSyncServiceImpl,
};
