//! 用户数据模型

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 保留用途的顶级域，不能作为可投递邮箱
const SPECIAL_USE_TLDS: [&str; 6] = ["localhost", "local", "test", "invalid", "onion", "arpa"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl User {
    pub fn from_input(id: String, input: UserInput) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            age: input.age,
        }
    }
}

/// 创建与更新共用的请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserInput {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(
        email(message = "Invalid email format"),
        custom(function = "validate_email_domain")
    )]
    pub email: String,

    pub age: i64,
}

/// 域名必须带点，且不能落在保留顶级域下
///
/// 没有 `@` 的输入交给 `email` 规则报错，这里不重复报告。
fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return Ok(());
    };

    let domain = domain.to_ascii_lowercase();
    let tld = match domain.rsplit_once('.') {
        Some((_, tld)) => tld,
        None => {
            let mut error = ValidationError::new("email_domain");
            error.message = Some("Email domain must contain a dot".into());
            return Err(error);
        }
    };

    if SPECIAL_USE_TLDS.contains(&tld) {
        let mut error = ValidationError::new("email_domain");
        error.message = Some(format!("Email domain uses special-use TLD: {}", tld).into());
        return Err(error);
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailResponse {
    pub email: String,
}

impl From<&User> for EmailResponse {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
        }
    }
}
