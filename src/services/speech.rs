use thiserror::Error;

use crate::models::TextToSpeechParams;

/// 语音合成错误
#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("未配置合成服务的API密钥")]
    MissingApiKey,

    /// 远端服务返回非成功状态
    #[error("合成服务返回错误: {status} {body}")]
    ApiError { status: u16, body: String },

    #[error("合成请求失败: {0}")]
    RequestFailed(String),

    #[error("合成文本为空")]
    EmptyText,
}

pub type SynthesisResult = Result<Vec<u8>, SynthesisError>;

/// 语音合成服务句柄
///
/// 对核心而言合成是不透明操作：文本+语音参数 -> 音频字节。
/// 具体传输（ElevenLabs HTTP流式接口等）由宿主实现，核心只消费该接口
pub trait SpeechSynthesizer {
    fn synthesize(&self, params: &TextToSpeechParams) -> SynthesisResult;
}

/// 演示与测试用的模拟合成器
///
/// 输出字节量随文本长度变化，便于验证替换与释放逻辑；不产生可播放音频
pub struct MockSynthesizer {
    /// 每字符产生的模拟音频字节数
    pub bytes_per_char: usize,
}

impl MockSynthesizer {
    pub fn new() -> Self {
        MockSynthesizer { bytes_per_char: 64 }
    }
}

impl Default for MockSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechSynthesizer for MockSynthesizer {
    fn synthesize(&self, params: &TextToSpeechParams) -> SynthesisResult {
        if params.text.trim().is_empty() {
            return Err(SynthesisError::EmptyText);
        }
        let size = params.text.chars().count() * self.bytes_per_char;
        Ok(vec![0u8; size])
    }
}

/// 固定失败的合成器，用于验证错误传播不破坏会话状态
pub struct FailingSynthesizer;

impl SpeechSynthesizer for FailingSynthesizer {
    fn synthesize(&self, _params: &TextToSpeechParams) -> SynthesisResult {
        Err(SynthesisError::ApiError {
            status: 500,
            body: "simulated failure".to_string(),
        })
    }
}
