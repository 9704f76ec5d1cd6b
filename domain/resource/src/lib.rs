pub mod command;
pub mod event;
pub mod exception;
pub mod message_queue;
#[cfg(feature = "mock")]
pub mod mock;
pub mod model;
pub mod repository;
pub mod service;
