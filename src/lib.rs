pub mod models;
pub mod utils;
pub mod parser;
pub mod audio;
pub mod practice;
pub mod services;
pub mod api;

pub use models::{
    Character,
    Conf,
    Document,
    ScriptLine,
    StoredDocument,
    TextToSpeechParams,
    Timestamp,
    DIRECTION,
};

pub use parser::{
    ScriptParser,
    ParseOutput,
    is_script_format,
    is_script_format_with_threshold,
};

pub use audio::{
    create_timestamps,
    AudioHandle,
    PlaybackTracker,
    NO_ACTIVE_LINE,
};

pub use practice::{
    PracticeEffect,
    PracticeError,
    PracticeState,
    RehearsalSession,
};

pub use api::{
    AppServices,
    ConvertOutput,
    ServiceError,
    convert_text,
    convert_text_json,
    convert_document,
    synthesize_audio,
};

/// 解析剧本格式文本
///
/// # Arguments
///
/// * `content` - 待解析的剧本文本
///
/// # Returns
///
/// 解析结果对象（行序列与角色列表）
pub fn parse_script(content: &str) -> ParseOutput {
    let parser = ScriptParser::new();
    parser.parse(content)
}
