//! 用户模型
//!
//! 用户行及其随机生成逻辑。邮箱在整张表内唯一，由生成方维护已用邮箱集合。

use std::collections::HashSet;

use chrono::NaiveDateTime;
use fake::Fake;
use fake::faker::internet::en::FreeEmail;
use fake::faker::name::en::Name;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::random_timestamp_within;

/// 用户注册时间的回溯窗口（约 2 年）
pub const USER_LOOKBACK_DAYS: i64 = 730;

/// 邮箱冲突时的重新抽取次数上限
const EMAIL_REDRAW_LIMIT: usize = 16;

/// 用户
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: u64,
    pub name: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

impl User {
    /// 生成随机用户
    ///
    /// `used_emails` 记录已分配的邮箱，新邮箱写入后返回
    pub fn random<R: Rng + ?Sized>(
        user_id: u64,
        reference: NaiveDateTime,
        used_emails: &mut HashSet<String>,
        rng: &mut R,
    ) -> Self {
        let created_at = random_timestamp_within(rng, reference, USER_LOOKBACK_DAYS);
        let name: String = Name().fake_with_rng(rng);
        let email = unique_email(user_id, used_emails, rng);

        Self {
            user_id,
            name,
            email,
            created_at,
        }
    }
}

/// 抽取一个未被使用的邮箱
///
/// 多次冲突后在本地部分追加用户 ID（`local+id@domain`），faker 不会生成 `+`，因此结果必然唯一
fn unique_email<R: Rng + ?Sized>(
    user_id: u64,
    used_emails: &mut HashSet<String>,
    rng: &mut R,
) -> String {
    let mut candidate: String = FreeEmail().fake_with_rng(rng);
    for _ in 0..EMAIL_REDRAW_LIMIT {
        if !used_emails.contains(&candidate) {
            break;
        }
        candidate = FreeEmail().fake_with_rng(rng);
    }

    if used_emails.contains(&candidate) {
        candidate = tag_email(&candidate, user_id);
    }

    used_emails.insert(candidate.clone());
    candidate
}

fn tag_email(email: &str, user_id: u64) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{local}+{user_id}@{domain}"),
        None => format!("{email}+{user_id}"),
    }
}
