use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 已上传文档的元数据记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub user_id: String,
    pub filename: String,
    pub storage_path: String,
    pub upload_time: DateTime<Utc>,
    pub file_type: String,
    pub file_size: usize,
    pub is_script: bool,
}

/// 取回文档时附带的带签名下载地址
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredDocument {
    pub document: Document,
    pub signed_url: String,
    /// 签名地址过期时间
    pub expires_at: DateTime<Utc>,
}
