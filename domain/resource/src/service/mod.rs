mod resource;
mod tag;

#[rustfmt::skip]
pub use {
    resource::ResourceLifecycleService,
    tag::TagSyncService,
};
