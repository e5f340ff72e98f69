use serde::{Deserialize, Serialize};

/// 从剧本行中提取的角色
///
/// 角色列表是行序列的纯投影：源文本变化时整体重新计算，从不增量修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// 角色显示名（区分大小写，已去除首尾空白）
    pub name: String,
    /// 该角色说话的行序号，按原文顺序排列
    pub line_indices: Vec<usize>,
}

impl Character {
    pub fn new(name: String) -> Self {
        Character {
            name,
            line_indices: Vec::new(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_indices.len()
    }
}
