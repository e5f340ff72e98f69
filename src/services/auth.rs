use serde::{Deserialize, Serialize};

/// 已登录用户
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub email: String,
}

/// 认证服务句柄
///
/// 核心不实现认证，只查询当前登录状态；具体会话管理由宿主实现
pub trait AuthProvider {
    fn current_user(&self) -> Option<UserIdentity>;
}

/// 固定身份的认证实现，用于测试与命令行演示
pub struct StaticAuth {
    user: Option<UserIdentity>,
}

impl StaticAuth {
    pub fn logged_in(id: &str, email: &str) -> Self {
        StaticAuth {
            user: Some(UserIdentity {
                id: id.to_string(),
                email: email.to_string(),
            }),
        }
    }

    pub fn anonymous() -> Self {
        StaticAuth { user: None }
    }
}

impl AuthProvider for StaticAuth {
    fn current_user(&self) -> Option<UserIdentity> {
        self.user.clone()
    }
}
