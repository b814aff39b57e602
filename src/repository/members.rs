//! Member domain methods on Store

use super::Store;
use crate::{
    error::{AppError, AppResult},
    models::member::{Member, MemberPayload},
};

impl Store {
    pub fn members_list(&self) -> Vec<Member> {
        self.members.rows().to_vec()
    }

    pub fn members_get(&self, id: i64) -> AppResult<&Member> {
        self.members
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))
    }

    pub fn members_create(&mut self, payload: MemberPayload) -> Member {
        let id = match payload.id {
            Some(id) => id,
            None => self.members.allocate_id(),
        };
        let member = payload.into_member(id);
        self.members.push(member.clone());
        member
    }

    pub fn members_update(&mut self, id: i64, payload: MemberPayload) -> AppResult<Member> {
        let member = payload.into_member(id);
        if !self.members.replace(member.clone()) {
            return Err(AppError::NotFound(format!("Member {} not found", id)));
        }
        Ok(member)
    }

    pub fn members_delete(&mut self, id: i64) -> AppResult<()> {
        if !self.members.remove(id) {
            return Err(AppError::NotFound(format!("Member {} not found", id)));
        }
        Ok(())
    }
}
