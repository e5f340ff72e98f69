use serde::{Deserialize, Serialize};

/// 一个可用的合成语音
#[derive(Debug, Clone, Serialize)]
pub struct Voice {
    pub name: &'static str,
    pub id: &'static str,
}

/// 内置语音列表
pub const VOICES: [Voice; 5] = [
    Voice { name: "Rachel", id: "21m00Tcm4TlvDq8ikWAM" },
    Voice { name: "Domi", id: "AZnzlk1XvdvUeBnXmlld" },
    Voice { name: "Bella", id: "EXAVITQu4vr4xnSDxMaL" },
    Voice { name: "Antoni", id: "ErXwobaYiN019PkySvjV" },
    Voice { name: "Elli", id: "MF3mGyEYCl7XYWbV9V6O" },
];

/// 默认语音（Rachel）
pub const DEFAULT_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";

/// 语音合成请求参数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextToSpeechParams {
    pub text: String,
    pub voice_id: String,
    pub model_id: String,
    /// 声音稳定度 0.0-1.0
    pub stability: f64,
    /// 相似度增强 0.0-1.0
    pub similarity_boost: f64,
    pub speaker_boost: bool,
    pub style: f64,
    /// 语速倍率
    pub speed: f64,
    /// 输出格式
    pub output_format: String,
}

impl TextToSpeechParams {
    pub fn new(text: String, voice_id: String) -> Self {
        TextToSpeechParams {
            text,
            voice_id,
            model_id: "eleven_monolingual_v1".to_string(),
            stability: 0.5,
            similarity_boost: 0.75,
            speaker_boost: true,
            style: 0.0,
            speed: 1.0,
            output_format: "mp3_44100_128".to_string(),
        }
    }
}
