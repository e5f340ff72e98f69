use crate::models::Timestamp;

/// 无活动行的哨兵值
pub const NO_ACTIVE_LINE: i32 = -1;

/// 音频播放进度与文本行的同步器
///
/// 绑定一段时间戳序列后，在每次播放进度事件上同步解析当前行。
/// 解析规则：从头正向扫描，取 time <= 当前播放时间的最后一个条目；
/// 无条目满足时为 -1。每次更新 O(时间戳数)，不阻塞事件源
#[derive(Debug)]
pub struct PlaybackTracker {
    timestamps: Vec<Timestamp>,
    /// 绑定代数：新音频源立即作废全部旧事件
    generation: u64,
    active_line: i32,
}

impl PlaybackTracker {
    pub fn new() -> Self {
        PlaybackTracker {
            timestamps: Vec::new(),
            generation: 0,
            active_line: NO_ACTIVE_LINE,
        }
    }

    /// 绑定新的音频源对应的时间戳序列
    ///
    /// 返回本次绑定的代数；之后携带旧代数的事件一律忽略
    pub fn bind(&mut self, timestamps: Vec<Timestamp>) -> u64 {
        self.generation += 1;
        self.timestamps = timestamps;
        self.active_line = NO_ACTIVE_LINE;
        self.generation
    }

    /// 当前绑定代数
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 播放进度事件：解析当前行并返回
    ///
    /// 携带过期代数的事件不改变状态，返回当时的活动行
    pub fn on_time_update(&mut self, generation: u64, current_time: f64) -> i32 {
        if generation != self.generation {
            return self.active_line;
        }

        let mut line = NO_ACTIVE_LINE;
        for ts in &self.timestamps {
            if current_time >= ts.time {
                // 同一时间的条目取序列中靠后者
                line = ts.line_index as i32;
            } else {
                break;
            }
        }

        self.active_line = line;
        line
    }

    /// 播放结束事件：活动行复位为无
    pub fn on_ended(&mut self, generation: u64) {
        if generation != self.generation {
            return;
        }
        self.active_line = NO_ACTIVE_LINE;
    }

    pub fn active_line(&self) -> i32 {
        self.active_line
    }
}

impl Default for PlaybackTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// 一次合成得到的可播放音频
///
/// 持有音频字节与派生的临时可播放地址。替换为新的合成结果时旧句柄
/// 被丢弃，随 Drop 确定性释放，避免重复转换导致资源累积
#[derive(Debug)]
pub struct AudioHandle {
    bytes: Vec<u8>,
    object_url: Option<String>,
    mime_type: String,
}

impl AudioHandle {
    pub fn new(bytes: Vec<u8>, mime_type: &str) -> Self {
        AudioHandle {
            bytes,
            object_url: None,
            mime_type: mime_type.to_string(),
        }
    }

    /// 合成结果默认是mp3
    pub fn mp3(bytes: Vec<u8>) -> Self {
        Self::new(bytes, "audio/mpeg")
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// 取临时可播放地址（data: URL），首次调用时生成
    pub fn object_url(&mut self) -> &str {
        if self.object_url.is_none() {
            let encoded = base64::encode(&self.bytes);
            self.object_url = Some(format!("data:{};base64,{}", self.mime_type, encoded));
        }
        self.object_url.as_deref().unwrap_or("")
    }

    /// 显式释放临时地址；音频字节保留
    pub fn revoke_object_url(&mut self) {
        self.object_url = None;
    }
}
