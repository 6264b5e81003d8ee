// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

/// 登录凭据
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// 站点公开的标准测试用户
    pub fn standard_user() -> Self {
        Self::new("standard_user", "secret_sauce")
    }

    /// 被锁定的账号
    pub fn locked_out_user() -> Self {
        Self::new("locked_out_user", "secret_sauce")
    }

    /// 标准用户名搭配错误密码
    pub fn wrong_password() -> Self {
        Self::new("standard_user", "wrong_password")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
