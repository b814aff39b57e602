//! Member management service

use validator::Validate;

use crate::{
    error::AppResult,
    models::member::{Member, MemberPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct MembersService {
    repository: Repository,
}

impl MembersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Member>> {
        let members = self.repository.read().await.members_list();
        tracing::debug!("Returning members count={}", members.len());
        Ok(members)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Member> {
        self.repository.read().await.members_get(id).cloned()
    }

    pub async fn create(&self, payload: MemberPayload) -> AppResult<Member> {
        payload.validate()?;
        let member = self.repository.write().await.members_create(payload);
        tracing::info!("Added member id={}", member.id);
        Ok(member)
    }

    pub async fn update(&self, id: i64, payload: MemberPayload) -> AppResult<Member> {
        payload.validate()?;
        let member = self.repository.write().await.members_update(id, payload)?;
        tracing::info!("Updated member id={}", id);
        Ok(member)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.write().await.members_delete(id)?;
        tracing::info!("Deleted member id={}", id);
        Ok(())
    }
}
