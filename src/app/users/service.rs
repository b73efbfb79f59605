//! 用户业务服务（内存存储）

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use super::model::{EmailResponse, User, UserInput};
use crate::core::error::CoreError;

/// 用户存储服务
///
/// 进程启动时创建一次，克隆出的句柄共享同一份数据。按插入顺序迭代；
/// 每个操作只持有一次锁，所以创建时的邮箱查重和插入是原子的。
#[derive(Clone, Default)]
pub struct UserService {
    users: Arc<RwLock<IndexMap<String, User>>>,
}

impl UserService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_user(&self, input: UserInput) -> Result<User, CoreError> {
        let mut users = self.users.write();

        if users.values().any(|u| u.email == input.email) {
            warn!("Rejected duplicate email: {}", input.email);
            return Err(CoreError::DuplicateEmail);
        }

        let user = User::from_input(Uuid::new_v4().to_string(), input);
        users.insert(user.id.clone(), user.clone());

        info!("Created user: {} ({})", user.name, user.id);
        Ok(user)
    }

    pub fn list_users(&self) -> Vec<User> {
        self.users.read().values().cloned().collect()
    }

    pub fn get_user(&self, id: &str) -> Result<User, CoreError> {
        self.users.read().get(id).cloned().ok_or(CoreError::NotFound)
    }

    /// 整体替换 name/email/age，保留 id。
    ///
    /// 不会重新校验邮箱唯一性；如果新邮箱与其他用户冲突，只记录告警。
    pub fn update_user(&self, id: &str, input: UserInput) -> Result<User, CoreError> {
        let mut users = self.users.write();

        if !users.contains_key(id) {
            return Err(CoreError::NotFound);
        }

        let collides = users
            .iter()
            .any(|(other_id, other)| other_id != id && other.email == input.email);
        if collides {
            warn!(
                "Update of user {} introduces duplicate email: {}",
                id, input.email
            );
        }

        let updated = User::from_input(id.to_string(), input);
        users.insert(id.to_string(), updated.clone());

        info!("Updated user: {} ({})", updated.name, updated.id);
        Ok(updated)
    }

    pub fn delete_user(&self, id: &str) -> Result<(), CoreError> {
        let removed = self.users.write().shift_remove(id);
        match removed {
            Some(user) => {
                info!("Deleted user: {} ({})", user.name, user.id);
                Ok(())
            }
            None => Err(CoreError::NotFound),
        }
    }

    pub fn list_emails(&self) -> Vec<EmailResponse> {
        self.users.read().values().map(EmailResponse::from).collect()
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
