use profile_domain::{System, Timestamp};

use axum::extract::Extension;
use axum::routing::get;
use axum::Json;

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct HealthBody {
    pub status: String,
    pub message: String,
    pub timestamp: Timestamp,
}

pub struct HealthRoutes<D>(std::marker::PhantomData<D>);

impl<D> HealthRoutes<D>
where
    D: System + Sized + Clone + Send + Sync + 'static,
{
    pub fn router() -> axum::Router {
        axum::Router::new().route("/api/health", get(Self::health).fallback(super::not_found))
    }

    async fn health(Extension(deps): Extension<D>) -> Json<HealthBody> {
        Json(HealthBody {
            status: "ok".to_string(),
            message: "Personal Profile Backend is running".to_string(),
            timestamp: Timestamp(deps.get_current_time()),
        })
    }
}
