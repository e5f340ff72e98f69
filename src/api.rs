//! 应用层API
//!
//! 这个模块把解析核心与外部服务（合成、存储、认证）组合成
//! 宿主应用可以直接调用的接口；服务句柄全部显式注入

use serde::Serialize;
use thiserror::Error;

use crate::audio::{create_timestamps_with_floor, AudioHandle};
use crate::models::{Character, Conf, Document, ScriptLine, StoredDocument, TextToSpeechParams, Timestamp};
use crate::parser::{is_script_format_with_threshold, ScriptParser};
use crate::services::{
    AuthProvider, DocumentStore, ExtractError, SpeechSynthesizer, StorageError, SynthesisError,
    UploadMeta, UserIdentity,
};
use crate::utils::file_extension;

/// 服务层错误，按类别区分以便呈现与重试
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("未登录")]
    Unauthorized,

    #[error("文件过大: {size} 字节，上限 {limit} 字节")]
    FileTooLarge { size: usize, limit: usize },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// 注入的服务句柄集合
pub struct AppServices {
    pub synthesizer: Box<dyn SpeechSynthesizer>,
    pub store: Box<dyn DocumentStore>,
    pub auth: Box<dyn AuthProvider>,
}

impl AppServices {
    pub fn new(
        synthesizer: Box<dyn SpeechSynthesizer>,
        store: Box<dyn DocumentStore>,
        auth: Box<dyn AuthProvider>,
    ) -> Self {
        AppServices {
            synthesizer,
            store,
            auth,
        }
    }

    fn require_user(&self) -> ServiceResult<UserIdentity> {
        self.auth.current_user().ok_or(ServiceError::Unauthorized)
    }
}

/// 文档转换结果：原文、剧本判定、解析行与角色、播放时间戳
#[derive(Debug, Clone, Serialize)]
pub struct ConvertOutput {
    pub content: String,
    pub is_script: bool,
    pub lines: Vec<ScriptLine>,
    pub characters: Vec<Character>,
    pub timestamps: Vec<Timestamp>,
}

/// 转换一段纯文本：剧本判定 + 解析 + 时间戳估算
pub async fn convert_text(text: String, config: Option<Conf>) -> ConvertOutput {
    let conf = config.unwrap_or_default();

    let is_script = is_script_format_with_threshold(&text, conf.script_detect_threshold);
    let parsed = ScriptParser::new().parse(&text);
    let timestamps =
        create_timestamps_with_floor(&text, conf.words_per_minute, conf.min_line_sec);

    ConvertOutput {
        content: text,
        is_script,
        lines: parsed.lines,
        characters: parsed.characters,
        timestamps,
    }
}

/// 转换上传的文档字节：抽取文本后按 convert_text 处理
pub async fn convert_document(
    bytes: &[u8],
    filename: &str,
    config: Option<Conf>,
) -> ServiceResult<ConvertOutput> {
    let text = crate::services::extract_text(bytes, filename)?;
    Ok(convert_text(text, config).await)
}

/// 转换结果的JSON表示
pub async fn convert_text_json(text: String, config: Option<Conf>) -> String {
    let output = convert_text(text, config).await;
    serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_string())
}

/// 合成整篇文档的朗读音频
///
/// 返回新的音频句柄；调用方用它替换持有的旧句柄，旧音频随之释放，
/// 保证同一时刻只有一份播放资源存活
pub async fn synthesize_audio(
    services: &AppServices,
    text: &str,
    voice_id: Option<String>,
    config: Option<Conf>,
) -> ServiceResult<AudioHandle> {
    let conf = config.unwrap_or_default();

    let mut params = TextToSpeechParams::new(
        text.to_string(),
        voice_id.unwrap_or_else(|| conf.default_voice_id.clone()),
    );
    params.model_id = conf.model_id.clone();
    params.speed = conf.speed;
    params.stability = conf.stability;
    params.similarity_boost = conf.similarity_boost;

    let bytes = services.synthesizer.synthesize(&params)?;
    Ok(AudioHandle::mp3(bytes))
}

/// 上传文档：认证检查、类型与大小校验、存储登记
pub async fn upload_document(
    services: &mut AppServices,
    bytes: &[u8],
    filename: &str,
    is_script: bool,
    config: Option<Conf>,
) -> ServiceResult<Document> {
    let conf = config.unwrap_or_default();
    let user = services.require_user()?;

    let ext = file_extension(filename)
        .filter(|ext| conf.allowed_extensions.iter().any(|a| a == ext))
        .ok_or_else(|| ExtractError::UnsupportedFormat(filename.to_string()))?;

    if bytes.len() > conf.max_file_size {
        return Err(ServiceError::FileTooLarge {
            size: bytes.len(),
            limit: conf.max_file_size,
        });
    }

    let meta = UploadMeta {
        user_id: user.id,
        filename: filename.to_string(),
        file_type: ext,
        is_script,
    };

    Ok(services.store.upload(bytes, &meta)?)
}

/// 取回文档元数据与签名下载地址
pub async fn fetch_document(
    services: &AppServices,
    id: &str,
    config: Option<Conf>,
) -> ServiceResult<StoredDocument> {
    let conf = config.unwrap_or_default();
    services.require_user()?;
    Ok(services.store.fetch(id, conf.signed_url_expiry_sec)?)
}

/// 删除文档
pub async fn delete_document(services: &mut AppServices, id: &str) -> ServiceResult<()> {
    services.require_user()?;
    Ok(services.store.delete(id)?)
}

/// 列出当前用户的全部文档
pub async fn list_documents(services: &AppServices) -> ServiceResult<Vec<Document>> {
    let user = services.require_user()?;
    Ok(services.store.list(&user.id)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{MemoryStore, MockSynthesizer, StaticAuth};

    fn test_services() -> AppServices {
        AppServices::new(
            Box::new(MockSynthesizer::new()),
            Box::new(MemoryStore::new()),
            Box::new(StaticAuth::logged_in("u1", "u1@example.com")),
        )
    }

    #[tokio::test]
    async fn test_convert_text_pipeline() {
        let text = "John: Hello there.\nSarah: Hi.\nJohn: Bye.".to_string();
        let output = convert_text(text, None).await;

        assert!(output.is_script);
        assert_eq!(output.lines.len(), 3);
        assert_eq!(output.characters.len(), 2);
        assert_eq!(output.timestamps.len(), 3, "时间戳数量应该等于行数");
    }

    #[tokio::test]
    async fn test_upload_rejects_without_login() {
        let mut services = AppServices::new(
            Box::new(MockSynthesizer::new()),
            Box::new(MemoryStore::new()),
            Box::new(StaticAuth::anonymous()),
        );

        let result = upload_document(&mut services, b"text", "a.txt", false, None).await;
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_upload_validation() {
        let mut services = test_services();

        let result = upload_document(&mut services, b"data", "a.exe", false, None).await;
        assert!(
            matches!(result, Err(ServiceError::Extract(ExtractError::UnsupportedFormat(_)))),
            "不在允许列表的扩展名应该被拒绝"
        );

        let mut conf = Conf::default();
        conf.max_file_size = 2;
        let result = upload_document(&mut services, b"toolarge", "a.txt", false, Some(conf)).await;
        assert!(matches!(result, Err(ServiceError::FileTooLarge { .. })));
    }

    #[tokio::test]
    async fn test_synthesize_replaces_previous_handle() {
        let services = test_services();

        let mut current = synthesize_audio(&services, "第一段文本", None, None)
            .await
            .unwrap();
        let first_len = current.len();

        // 新结果到达时替换旧句柄，旧资源随Drop释放
        current = synthesize_audio(&services, "第二段明显更长的文本内容", None, None)
            .await
            .unwrap();
        assert!(current.len() > first_len);
        assert!(current.object_url().starts_with("data:audio/mpeg;base64,"));
    }

    #[tokio::test]
    async fn test_document_lifecycle() {
        let mut services = test_services();

        let doc = upload_document(&mut services, b"John: Hello.", "play.txt", true, None)
            .await
            .unwrap();

        let stored = fetch_document(&services, &doc.id, None).await.unwrap();
        assert!(stored.document.is_script);

        let docs = list_documents(&services).await.unwrap();
        assert_eq!(docs.len(), 1);

        delete_document(&mut services, &doc.id).await.unwrap();
        let result = fetch_document(&services, &doc.id, None).await;
        assert!(matches!(
            result,
            Err(ServiceError::Storage(StorageError::NotFound(_)))
        ));
    }
}
