use super::SuccessBody;
use crate::json_body::{JsonBody, JsonBodyOrDefault};
use profile_domain::error::ProfileResult;
use profile_domain::{LikeSummary, Profile, ProfileUpdate, VisitorRequest};

use axum::extract::Extension;
use axum::routing::{get, post};
use axum::Json;

pub struct ProfileRoutes<D>(std::marker::PhantomData<D>);

impl<D> ProfileRoutes<D>
where
    D: profile_domain::FetchProfile
        + profile_domain::UpdateProfile
        + profile_domain::LikeProfile
        + Sized
        + Clone
        + Send
        + Sync
        + 'static,
{
    pub fn router() -> axum::Router {
        axum::Router::new()
            .route(
                "/api/profile",
                get(Self::get_profile)
                    .put(Self::update_profile)
                    .fallback(super::not_found),
            )
            .route(
                "/api/profile/like",
                post(Self::like).fallback(super::not_found),
            )
            .route(
                "/api/profile/unlike",
                post(Self::unlike).fallback(super::not_found),
            )
    }

    async fn get_profile(Extension(deps): Extension<D>) -> Json<SuccessBody<Profile>> {
        Json(SuccessBody::new(deps.fetch_profile()))
    }

    async fn update_profile(
        Extension(deps): Extension<D>,
        JsonBody(update): JsonBody<ProfileUpdate>,
    ) -> Json<SuccessBody<Profile>> {
        Json(SuccessBody::new(deps.update_profile(update)))
    }

    async fn like(
        Extension(deps): Extension<D>,
        JsonBodyOrDefault(body): JsonBodyOrDefault<VisitorRequest>,
    ) -> ProfileResult<Json<SuccessBody<LikeSummary>>> {
        Ok(Json(SuccessBody::new(deps.like(body.visitor())?)))
    }

    async fn unlike(
        Extension(deps): Extension<D>,
        JsonBodyOrDefault(body): JsonBodyOrDefault<VisitorRequest>,
    ) -> ProfileResult<Json<SuccessBody<LikeSummary>>> {
        Ok(Json(SuccessBody::new(deps.unlike(body.visitor())?)))
    }
}
