use actix_web::http::StatusCode;
use actix_web::web::{self, Json, Path, Query};
use actix_web::{delete, get, post, put, HttpResponse};
use domain_resource::service::ResourceLifecycleService;

use crate::api::dtos::{ListIdsRequest, ListResourcesRequest, UpdateResourceRequest};
use crate::api::{extract_uuid, response};
use crate::infrastructure::ServiceProvider;

#[get("resource-manager/GetResource/{id}")]
pub async fn get_resource(sp: web::Data<ServiceProvider>, id: Path<String>) -> HttpResponse {
    let id = match extract_uuid(&id) {
        Ok(x) => x,
        Err(resp) => return resp,
    };
    match sp.resource_service().get_by_id(id).await {
        Ok(record) => response::success("Ok", Some(record)),
        Err(e) => response::from_exception(&e),
    }
}

#[get("resource-manager/ListResources")]
pub async fn list_resources(
    sp: web::Data<ServiceProvider>,
    request: Query<ListResourcesRequest>,
) -> HttpResponse {
    match sp.resource_service().list(request.0.into_query()).await {
        Ok(page) => response::success("Ok", Some(page)),
        Err(e) => response::from_exception(&e),
    }
}

#[get("resource-manager/GetResourceOptions")]
pub async fn get_resource_options(sp: web::Data<ServiceProvider>) -> HttpResponse {
    match sp.resource_service().options().await {
        Ok(options) => response::success("Ok", Some(options)),
        Err(e) => response::from_exception(&e),
    }
}

#[put("resource-manager/UpdateResource/{id}")]
pub async fn update_resource(
    sp: web::Data<ServiceProvider>,
    id: Path<String>,
    data: Json<UpdateResourceRequest>,
) -> HttpResponse {
    let id = match extract_uuid(&id) {
        Ok(x) => x,
        Err(resp) => return resp,
    };
    let data = data.0;
    if data.translations.is_empty() {
        return response::error(StatusCode::BAD_REQUEST, "translations are required");
    }
    match sp.resource_service().update(id, data.into_command()).await {
        Ok(record) => response::success("Updated", Some(record)),
        Err(e) => response::from_exception(&e),
    }
}

#[delete("resource-manager/DeleteResources")]
pub async fn delete_resources(
    sp: web::Data<ServiceProvider>,
    data: Json<ListIdsRequest>,
) -> HttpResponse {
    let ids = data.0.list;
    if ids.is_empty() {
        return response::error(StatusCode::BAD_REQUEST, "list is required");
    }
    match sp.resource_service().delete_soft(&ids).await {
        Ok(deleted) => response::success("Successfully deleted", Some(deleted)),
        Err(e) => response::from_exception(&e),
    }
}

#[post("resource-manager/RestoreResources")]
pub async fn restore_resources(
    sp: web::Data<ServiceProvider>,
    data: Json<ListIdsRequest>,
) -> HttpResponse {
    let ids = data.0.list;
    if ids.is_empty() {
        return response::error(StatusCode::BAD_REQUEST, "list is required");
    }
    match sp.resource_service().restore(&ids).await {
        Ok(restored) => response::success("Successfully restored", Some(restored)),
        Err(e) => response::from_exception(&e),
    }
}

#[post("resource-manager/ForceDeleteResources")]
pub async fn force_delete_resources(
    sp: web::Data<ServiceProvider>,
    data: Json<ListIdsRequest>,
) -> HttpResponse {
    let ids = data.0.list;
    if ids.is_empty() {
        return response::error(StatusCode::BAD_REQUEST, "list is required");
    }
    match sp.resource_service().delete_force(&ids).await {
        Ok(deleted) => response::success("Successfully deleted", Some(deleted)),
        Err(e) => response::from_exception(&e),
    }
}
