use std::collections::HashMap;
use std::time::Instant;

use crate::models::{Character, ScriptLine};
use crate::utils::SCRIPT_REGEX;

/// 剧本解析结果
#[derive(Debug, Clone, serde::Serialize)]
pub struct ParseOutput {
    /// 过滤空行后按原文顺序编号的行序列
    pub lines: Vec<ScriptLine>,
    /// 角色列表，按首次出现顺序排列
    pub characters: Vec<Character>,
    /// 解析耗时(毫秒)
    pub parse_time: u64,
}

impl ParseOutput {
    pub fn new() -> Self {
        ParseOutput {
            lines: Vec::new(),
            characters: Vec::new(),
            parse_time: 0,
        }
    }
}

impl Default for ParseOutput {
    fn default() -> Self {
        Self::new()
    }
}

/// 判断一段文本是否为剧本格式
///
/// 启发式判定：按行统计匹配 "Name: 台词" 模式的行数，
/// 占比超过 threshold 且至少有一行匹配时视为剧本。
/// 误判只影响界面功能开关，不影响正确性
pub fn is_script_format_with_threshold(content: &str, threshold: f64) -> bool {
    let lines: Vec<&str> = content.split('\n').collect();
    if lines.is_empty() {
        return false;
    }

    let re = &SCRIPT_REGEX["dialogue_detect"];
    let dialogue_count = lines.iter().filter(|line| re.is_match(line)).count();

    // 空内容时 split 仍产生一个空串行，dialogue_count 为0，直接判否
    dialogue_count > 0 && dialogue_count as f64 / lines.len() as f64 > threshold
}

/// 使用默认阈值0.2判断剧本格式
pub fn is_script_format(content: &str) -> bool {
    is_script_format_with_threshold(content, 0.2)
}

pub struct ScriptParser;

impl ScriptParser {
    pub fn new() -> Self {
        ScriptParser
    }

    /// 解析剧本文本
    ///
    /// 按换行拆分并丢弃空行，行序号在过滤后的序列上从0连续分配。
    /// 匹配对白模式的行归属捕获的角色名，其余行归入 "Direction"。
    /// 纯函数：同一输入多次解析产生相同输出
    pub fn parse(&self, content: &str) -> ParseOutput {
        let start_time = Instant::now();

        let mut result = ParseOutput::new();
        let re = &SCRIPT_REGEX["dialogue_line"];

        let lines = content
            .split('\n')
            .filter(|line| !line.trim().is_empty());

        for (index, line) in lines.enumerate() {
            match re.captures(line) {
                Some(caps) => {
                    let character_name = caps[1].trim().to_string();
                    let line_text = caps[2].trim().to_string();
                    result
                        .lines
                        .push(ScriptLine::new(index, character_name, line_text));
                }
                None => {
                    // 舞台指示或其他未归属文本
                    result
                        .lines
                        .push(ScriptLine::direction(index, line.trim().to_string()));
                }
            }
        }

        result.characters = Self::build_characters(&result.lines);
        result.parse_time = start_time.elapsed().as_millis() as u64;
        result
    }

    /// 从行序列构建角色表
    ///
    /// 顺序扫描产生的行序列，按角色名归组，不排除任何行：
    /// "Direction" 桶同样作为角色出现。角色顺序为首次出现顺序
    fn build_characters(lines: &[ScriptLine]) -> Vec<Character> {
        let mut characters: Vec<Character> = Vec::new();
        // 角色名 -> characters 中的下标，用于维持首次出现顺序
        let mut character_index: HashMap<&str, usize> = HashMap::new();

        for line in lines {
            let pos = match character_index.get(line.character.as_str()) {
                Some(&pos) => pos,
                None => {
                    characters.push(Character::new(line.character.clone()));
                    character_index.insert(line.character.as_str(), characters.len() - 1);
                    characters.len() - 1
                }
            };
            characters[pos].line_indices.push(line.index);
        }

        characters
    }
}

impl Default for ScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DIRECTION;

    #[test]
    fn test_empty_content_is_not_script() {
        // 空内容不能触发除零
        assert!(!is_script_format(""));
        assert!(!is_script_format("\n\n\n"));
    }

    #[test]
    fn test_all_dialogue_lines_is_script() {
        let content = "John: Hello there.\nSarah: Hi, John.";
        assert!(is_script_format(content), "全对白文本应该判定为剧本");
    }

    #[test]
    fn test_prose_is_not_script() {
        let content = "这是一段普通散文。\n没有任何对白格式。\n只有叙述文字。\n继续叙述。\n还在叙述。";
        assert!(!is_script_format(content));
    }

    #[test]
    fn test_parse_assigns_indices_after_filtering() {
        let parser = ScriptParser::new();
        let content = "John: Hello.\n\n\nSarah: Hi.\n(They shake hands.)";
        let result = parser.parse(content);

        assert_eq!(result.lines.len(), 3, "空行不应该占用序号");
        assert_eq!(result.lines[0].index, 0);
        assert_eq!(result.lines[1].index, 1);
        assert_eq!(result.lines[1].character, "Sarah");
        assert_eq!(result.lines[2].character, DIRECTION);
        assert_eq!(result.lines[2].text, "(They shake hands.)");
    }

    #[test]
    fn test_characters_in_first_appearance_order() {
        let parser = ScriptParser::new();
        let content = "Zoe: First.\nAdam: Second.\nZoe: Third.";
        let result = parser.parse(content);

        let names: Vec<&str> = result.characters.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zoe", "Adam"], "角色列表应该按首次出现顺序");
        assert_eq!(result.characters[0].line_indices, vec![0, 2]);
        assert_eq!(result.characters[1].line_indices, vec![1]);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let parser = ScriptParser::new();
        let content = "John: Hello.\nSarah: Hi.\nStage note here.";
        let a = parser.parse(content);
        let b = parser.parse(content);
        assert_eq!(a.lines, b.lines, "两次解析应该产生相同行序列");
        assert_eq!(a.characters, b.characters);
    }

    #[test]
    fn test_direction_named_character_is_not_disambiguated() {
        // 角色名字面上叫 Direction 时与舞台指示合并，属既有行为
        let parser = ScriptParser::new();
        let content = "Direction: to the left.\nAn actual stage direction";
        let result = parser.parse(content);

        assert_eq!(result.characters.len(), 1);
        assert_eq!(result.characters[0].name, DIRECTION);
        // 两类行在角色表中合并为同一个 Direction 桶
        assert_eq!(result.characters[0].line_indices, vec![0, 1]);
        assert_eq!(result.lines[1].character, DIRECTION);
    }
}
