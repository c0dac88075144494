mod health_routes;
mod profile_routes;

use crate::cors;
use profile_domain::error::ProfileError;
use profile_domain::{FetchProfile, LikeProfile, System, UpdateProfile};

use axum::routing::Router;
use axum::Extension;
use tower::ServiceBuilder;

/// Success envelope shared by the profile endpoints.
#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct SuccessBody<T> {
    pub success: bool,
    pub data: T,
}

impl<T> SuccessBody<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Axum API router for the profile service.
pub fn api_router<D>(deps: D) -> Router
where
    D: FetchProfile + UpdateProfile + LikeProfile + System + Clone + Send + Sync + 'static,
{
    Router::new()
        .merge(health_routes::HealthRoutes::<D>::router())
        .merge(profile_routes::ProfileRoutes::<D>::router())
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(cors::cors_headers))
                .layer(Extension(deps)),
        )
}

pub(crate) async fn not_found() -> ProfileError {
    ProfileError::EndpointNotFound
}
