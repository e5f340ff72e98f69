use serde::{Deserialize, Serialize};

use crate::models::voice::DEFAULT_VOICE_ID;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conf {
    /// 时间戳估算使用的平均语速（词/分钟）
    pub words_per_minute: f64,
    /// 每行最少消耗的预估时长（秒），空行也按此计
    pub min_line_sec: f64,
    /// 剧本格式判定阈值：对白行占比超过该值即视为剧本
    pub script_detect_threshold: f64,
    /// 默认语音ID
    pub default_voice_id: String,
    /// 合成模型ID
    pub model_id: String,
    /// 语速倍率
    pub speed: f64,
    /// 声音稳定度
    pub stability: f64,
    /// 相似度增强
    pub similarity_boost: f64,
    /// 上传文件大小上限（字节）
    pub max_file_size: usize,
    /// 允许上传的扩展名
    pub allowed_extensions: Vec<String>,
    /// 签名下载地址有效期（秒）
    pub signed_url_expiry_sec: i64,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            words_per_minute: 150.0,
            min_line_sec: 0.5,
            script_detect_threshold: 0.2,
            default_voice_id: DEFAULT_VOICE_ID.to_string(),
            model_id: "eleven_monolingual_v1".to_string(),
            speed: 1.0,
            stability: 0.5,
            similarity_boost: 0.75,
            max_file_size: 10 * 1024 * 1024,
            allowed_extensions: vec![
                "pdf".to_string(),
                "docx".to_string(),
                "txt".to_string(),
                "html".to_string(),
                "rtf".to_string(),
                "fdx".to_string(),
                "fdr".to_string(),
                "fdxt".to_string(),
            ],
            signed_url_expiry_sec: 60 * 60,
        }
    }
}
