use serde::{Deserialize, Serialize};

/// 无归属台词（舞台指示等）使用的哨兵角色名
pub const DIRECTION: &str = "Direction";

/// 剧本中的一条逻辑行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptLine {
    pub index: usize,        // 在过滤后行序列中的序号，从0开始，保持原文顺序
    pub character: String,   // 说话角色名；未匹配对白格式时为 "Direction"
    pub text: String,        // 去除角色名前缀后的台词内容
}

impl ScriptLine {
    pub fn new(index: usize, character: String, text: String) -> Self {
        ScriptLine {
            index,
            character,
            text,
        }
    }

    /// 创建一条舞台指示行
    ///
    /// 注意：角色名字面上就叫 "Direction" 的对白行与舞台指示无法区分，
    /// 这是既有行为，不做消歧处理
    pub fn direction(index: usize, text: String) -> Self {
        ScriptLine {
            index,
            character: DIRECTION.to_string(),
            text,
        }
    }

    pub fn is_direction(&self) -> bool {
        self.character == DIRECTION
    }
}
