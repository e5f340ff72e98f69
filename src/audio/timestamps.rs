use crate::models::Timestamp;
use crate::utils::count_words;

/// 默认平均语速（词/分钟）
pub const DEFAULT_WORDS_PER_MINUTE: f64 = 150.0;

/// 每行最少消耗的预估时长（秒）
pub const MIN_LINE_SEC: f64 = 0.5;

/// 根据词数估算逐行播放时间戳
///
/// 按换行拆分且不过滤，每一行（含空行）都产生一个条目；
/// 行的预估时长 = 词数 / 语速 * 60，最少0.5秒，空行按下限计。
/// 这是粗略估计，不基于真实音频分析
pub fn create_timestamps(text: &str, words_per_minute: f64) -> Vec<Timestamp> {
    create_timestamps_with_floor(text, words_per_minute, MIN_LINE_SEC)
}

/// 指定时长下限的时间戳估算
pub fn create_timestamps_with_floor(
    text: &str,
    words_per_minute: f64,
    min_line_sec: f64,
) -> Vec<Timestamp> {
    let mut timestamps = Vec::new();
    let mut cumulative_time = 0.0_f64;

    for (index, line) in text.split('\n').enumerate() {
        timestamps.push(Timestamp::new(cumulative_time, index));

        let word_count = count_words(line);
        let estimated_seconds = word_count as f64 / words_per_minute * 60.0;

        cumulative_time += estimated_seconds.max(min_line_sec);
    }

    timestamps
}
