//! InMemory Profile Repository 実装

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Profile, ProfileQuery, ProfileRepository, ProfileUpdate, RepositoryError, Timestamp, UserId,
};

/// インメモリ Profile Repository 実装
///
/// BTreeMap のキー順（user_id 順）がそのまま検索結果の順序になります。
#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: Mutex<BTreeMap<UserId, Profile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find(&self, user_id: &UserId) -> Result<Profile, RepositoryError> {
        let profiles = self.profiles.lock().await;
        profiles
            .get(user_id)
            .cloned()
            .ok_or_else(|| RepositoryError::ProfileNotFound(user_id.to_string()))
    }

    async fn upsert(&self, user_id: UserId, update: ProfileUpdate, at: Timestamp) -> Profile {
        let mut profiles = self.profiles.lock().await;
        let profile = profiles
            .entry(user_id.clone())
            .or_insert_with(|| Profile::new(user_id, at));
        profile.apply(update, at);
        profile.clone()
    }

    async fn search(&self, query: &ProfileQuery, exclude: &UserId, limit: usize) -> Vec<Profile> {
        let profiles = self.profiles.lock().await;
        profiles
            .values()
            .filter(|p| p.is_profile_complete && &p.user_id != exclude && query.matches(p))
            .take(limit)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserId {
        UserId::new(id.to_string()).unwrap()
    }

    fn full_update(location: &str, gender: &str) -> ProfileUpdate {
        ProfileUpdate {
            name: Some("Someone".to_string()),
            college_name: Some("State University".to_string()),
            branch: Some("Mechanical".to_string()),
            year: Some("3".to_string()),
            gender: Some(gender.to_string()),
            course: Some("B.E.".to_string()),
            location: Some(location.to_string()),
        }
    }

    #[tokio::test]
    async fn test_upsert_creates_then_updates() {
        // テスト項目: 存在しなければ作成し、存在すれば指定項目のみ更新する
        // given (前提条件):
        let repo = InMemoryProfileRepository::new();
        repo.upsert(user("u1"), full_update("Pune", "male"), Timestamp::new(1))
            .await;

        // when (操作):
        let updated = repo
            .upsert(
                user("u1"),
                ProfileUpdate {
                    location: Some("Mumbai".to_string()),
                    ..Default::default()
                },
                Timestamp::new(2),
            )
            .await;

        // then (期待する結果):
        assert_eq!(updated.location, "Mumbai");
        assert_eq!(updated.gender, "male");
        assert!(updated.is_profile_complete);
        assert_eq!(repo.find(&user("u1")).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_find_missing_profile() {
        // テスト項目: 存在しないプロフィールはエラー
        let repo = InMemoryProfileRepository::new();
        assert_eq!(
            repo.find(&user("ghost")).await,
            Err(RepositoryError::ProfileNotFound("ghost".to_string()))
        );
    }

    #[tokio::test]
    async fn test_search_excludes_caller_and_incomplete_profiles() {
        // テスト項目: 検索結果に自分自身と未完成のプロフィールは含まれない
        // given (前提条件):
        let repo = InMemoryProfileRepository::new();
        repo.upsert(user("me"), full_update("Pune", "male"), Timestamp::new(1))
            .await;
        repo.upsert(user("other"), full_update("Pune", "male"), Timestamp::new(1))
            .await;
        repo.upsert(
            user("draft"),
            ProfileUpdate {
                location: Some("Pune".to_string()),
                ..Default::default()
            },
            Timestamp::new(1),
        )
        .await;

        // when (操作):
        let query = ProfileQuery {
            location: Some("pune".to_string()),
            ..Default::default()
        };
        let results = repo.search(&query, &user("me"), 20).await;

        // then (期待する結果):
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].user_id, user("other"));
    }

    #[tokio::test]
    async fn test_search_respects_limit_and_order() {
        // テスト項目: 件数上限と user_id 順が守られる
        // given (前提条件):
        let repo = InMemoryProfileRepository::new();
        for id in ["u3", "u1", "u2"] {
            repo.upsert(user(id), full_update("Delhi", "female"), Timestamp::new(1))
                .await;
        }

        // when (操作):
        let results = repo
            .search(&ProfileQuery::default(), &user("nobody"), 2)
            .await;

        // then (期待する結果):
        let ids: Vec<&str> = results.iter().map(|p| p.user_id.as_str()).collect();
        assert_eq!(ids, vec!["u1", "u2"]);
    }
}
