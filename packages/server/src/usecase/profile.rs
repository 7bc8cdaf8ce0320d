//! UseCase: プロフィールの取得・更新・検索

use std::sync::Arc;

use crate::domain::{
    Profile, ProfileQuery, ProfileRepository, ProfileUpdate, SEARCH_RESULT_LIMIT, Timestamp,
    UserId,
};

use super::error::ProfileError;

/// プロフィール取得のユースケース
pub struct GetProfileUseCase {
    repository: Arc<dyn ProfileRepository>,
}

impl GetProfileUseCase {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, user_id: &UserId) -> Result<Profile, ProfileError> {
        self.repository
            .find(user_id)
            .await
            .map_err(|_| ProfileError::NotFound(user_id.to_string()))
    }
}

/// プロフィール更新のユースケース（存在しなければ作成）
pub struct UpdateProfileUseCase {
    repository: Arc<dyn ProfileRepository>,
}

impl UpdateProfileUseCase {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, user_id: UserId, update: ProfileUpdate) -> Profile {
        let profile = self.repository.upsert(user_id, update, Timestamp::now()).await;
        tracing::info!(
            "Profile '{}' saved (complete: {})",
            profile.user_id,
            profile.is_profile_complete
        );
        profile
    }
}

/// プロフィール検索のユースケース
pub struct SearchProfilesUseCase {
    repository: Arc<dyn ProfileRepository>,
}

impl SearchProfilesUseCase {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    /// 完成済みで条件に合うプロフィールを最大 `SEARCH_RESULT_LIMIT` 件返す（呼び出し元は除く）
    pub async fn execute(&self, caller: &UserId, query: &ProfileQuery) -> Vec<Profile> {
        self.repository
            .search(query, caller, SEARCH_RESULT_LIMIT)
            .await
    }
}
