//! Profile endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    domain::{ProfileQuery, ProfileUpdate, UserId},
    infrastructure::dto::http::ProfileDto,
    ui::{
        error::ApiError,
        extract::{ApiJson, ApiQuery, CallerId},
        state::AppState,
    },
    usecase::{GetProfileUseCase, SearchProfilesUseCase, UpdateProfileUseCase},
};

/// `GET /api/profile`
pub async fn get_my_profile(
    State(state): State<Arc<AppState>>,
    CallerId(caller): CallerId,
) -> Result<Json<ProfileDto>, ApiError> {
    let usecase = GetProfileUseCase::new(state.profiles.clone());
    let profile = usecase.execute(&caller).await?;
    Ok(Json(profile.into()))
}

/// `PUT /api/profile`
pub async fn update_my_profile(
    State(state): State<Arc<AppState>>,
    CallerId(caller): CallerId,
    ApiJson(update): ApiJson<ProfileUpdate>,
) -> Json<ProfileDto> {
    let usecase = UpdateProfileUseCase::new(state.profiles.clone());
    Json(usecase.execute(caller, update).await.into())
}

/// `GET /api/profile/search`
pub async fn search_profiles(
    State(state): State<Arc<AppState>>,
    CallerId(caller): CallerId,
    ApiQuery(query): ApiQuery<ProfileQuery>,
) -> Json<Vec<ProfileDto>> {
    let usecase = SearchProfilesUseCase::new(state.profiles.clone());
    let profiles = usecase.execute(&caller, &query).await;
    Json(profiles.into_iter().map(ProfileDto::from).collect())
}

/// `GET /api/profile/{user_id}`
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    CallerId(_caller): CallerId,
    Path(user_id): Path<String>,
) -> Result<Json<ProfileDto>, ApiError> {
    let user_id = UserId::new(user_id)?;
    let usecase = GetProfileUseCase::new(state.profiles.clone());
    let profile = usecase.execute(&user_id).await?;
    Ok(Json(profile.into()))
}
