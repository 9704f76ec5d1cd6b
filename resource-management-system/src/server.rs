use std::sync::Arc;

use actix_web::web;
use colored::Colorize;
use tokio::task::JoinHandle;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::api;
use crate::infrastructure::{build_config, BackgroundService, ServiceProvider};

pub fn run() {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(async_run());
}

pub async fn async_run() {
    let config = match build_config() {
        Ok(x) => x,
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build config".red(), e);
        }
    };

    let service_provider = match ServiceProvider::build(config).await {
        Ok(x) => Arc::new(x),
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build Service Provider".red(), e);
        }
    };
    if let Err(e) = initialize_telemetry() {
        return eprintln!("{}: {}", "Cannot build logger".red(), e);
    };
    let tasks: Vec<Arc<dyn BackgroundService>> = service_provider.background_services();
    let handles = tasks
        .into_iter()
        .map(|x| {
            tokio::spawn(async move {
                let task = x.clone();
                task.run().await
            })
        })
        .collect::<Vec<JoinHandle<()>>>();
    tokio::select! {
        _ = initialize_web_host(service_provider) => {

        }
        _ = tokio::signal::ctrl_c() => {
            info!("Stopping services (ctrl-c handling).");
            for handle in handles {
                handle.abort()
            }
            std::process::exit(0);
        }
    }
}

fn initialize_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

pub async fn initialize_web_host(sp: Arc<ServiceProvider>) {
    let host = sp.config().host.clone();
    match actix_web::HttpServer::new(move || {
        let cors = actix_cors::Cors::default()
            .allow_any_origin()
            .allow_any_header()
            .allow_any_method()
            .max_age(86400);

        actix_web::App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .wrap(cors)
            .app_data(actix_web::web::Data::from(sp.clone()))
            .service(
                web::scope("")
                    .service(api::resource::get_resource)
                    .service(api::resource::list_resources)
                    .service(api::resource::get_resource_options)
                    .service(api::resource::update_resource)
                    .service(api::resource::delete_resources)
                    .service(api::resource::restore_resources)
                    .service(api::resource::force_delete_resources),
            )
    })
    .bind((host.bind_address.to_owned(), host.bind_port))
    .unwrap()
    .disable_signals()
    .run()
    .await
    {
        Ok(_) => info!("Web server stopped successfully."),
        Err(e) => error!("Web server stopped with error: {}", e),
    }
}
