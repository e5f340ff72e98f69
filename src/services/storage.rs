use std::collections::HashMap;

use chrono::{Duration, Utc};
use thiserror::Error;

use crate::models::{Document, StoredDocument};

/// 持久化错误
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("文档不存在: {0}")]
    NotFound(String),

    #[error("上传失败: {0}")]
    UploadFailed(String),

    #[error("删除失败: {0}")]
    DeleteFailed(String),

    #[error("签名地址生成失败: {0}")]
    SignedUrlFailed(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// 上传文档时由调用方提供的元信息
#[derive(Debug, Clone)]
pub struct UploadMeta {
    pub user_id: String,
    pub filename: String,
    pub file_type: String,
    pub is_script: bool,
}

/// 文档存储服务句柄
///
/// 对核心而言持久化是不透明操作；存储与元数据库由宿主实现。
/// 核心不访问任何全局单例，句柄一律显式注入
pub trait DocumentStore {
    /// 上传文件并登记元数据，返回存储记录
    fn upload(&mut self, bytes: &[u8], meta: &UploadMeta) -> StorageResult<Document>;

    /// 按ID取回元数据与限时签名下载地址
    fn fetch(&self, id: &str, expiry_sec: i64) -> StorageResult<StoredDocument>;

    /// 下载文件字节
    fn download(&self, id: &str) -> StorageResult<Vec<u8>>;

    /// 删除文件与元数据
    fn delete(&mut self, id: &str) -> StorageResult<()>;

    /// 列出某用户的全部文档，按上传时间降序
    fn list(&self, user_id: &str) -> StorageResult<Vec<Document>>;
}

/// 内存存储实现，用于测试与命令行演示
pub struct MemoryStore {
    entries: HashMap<String, (Document, Vec<u8>)>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            entries: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MemoryStore {
    fn upload(&mut self, bytes: &[u8], meta: &UploadMeta) -> StorageResult<Document> {
        let id = format!("doc-{}", self.next_id);
        self.next_id += 1;

        let document = Document {
            id: id.clone(),
            user_id: meta.user_id.clone(),
            filename: meta.filename.clone(),
            storage_path: format!("{}/{}-{}", meta.user_id, id, meta.filename),
            upload_time: Utc::now(),
            file_type: meta.file_type.clone(),
            file_size: bytes.len(),
            is_script: meta.is_script,
        };

        self.entries.insert(id, (document.clone(), bytes.to_vec()));
        Ok(document)
    }

    fn fetch(&self, id: &str, expiry_sec: i64) -> StorageResult<StoredDocument> {
        let (document, _) = self
            .entries
            .get(id)
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;

        let expires_at = Utc::now() + Duration::seconds(expiry_sec);
        Ok(StoredDocument {
            document: document.clone(),
            signed_url: format!(
                "memory://documents/{}?expires={}",
                document.storage_path,
                expires_at.timestamp()
            ),
            expires_at,
        })
    }

    fn download(&self, id: &str) -> StorageResult<Vec<u8>> {
        self.entries
            .get(id)
            .map(|(_, bytes)| bytes.clone())
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    fn delete(&mut self, id: &str) -> StorageResult<()> {
        self.entries
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    fn list(&self, user_id: &str) -> StorageResult<Vec<Document>> {
        let mut documents: Vec<Document> = self
            .entries
            .values()
            .filter(|(doc, _)| doc.user_id == user_id)
            .map(|(doc, _)| doc.clone())
            .collect();

        documents.sort_by(|a, b| b.upload_time.cmp(&a.upload_time));
        Ok(documents)
    }
}
