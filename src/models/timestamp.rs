use serde::{Deserialize, Serialize};

/// 音频播放进度与文本行的对应点
///
/// 序列按 line_index 升序排列，time 累计非递减；首个条目的 time 恒为0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timestamp {
    /// 预估开始时间（秒，非负）
    pub time: f64,
    /// 对应的行序号
    pub line_index: usize,
}

impl Timestamp {
    pub fn new(time: f64, line_index: usize) -> Self {
        Timestamp { time, line_index }
    }
}
