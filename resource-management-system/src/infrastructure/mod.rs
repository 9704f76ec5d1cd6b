mod background_service;
mod config;
mod database;
mod message_queue;
mod repository;
mod service_provider;

pub use background_service::BackgroundService;
pub use config::{build_config, DatabaseConfig, HostConfig, ResourceSystemConfig};
pub use message_queue::{EventLogConsumer, InternalMessage, InternalMessageQueueProducer};
pub use service_provider::ServiceProvider;
