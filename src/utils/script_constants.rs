use std::collections::HashMap;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // 剧本行分类正则
    pub static ref SCRIPT_REGEX: HashMap<&'static str, Regex> = {
        let mut map = HashMap::new();
        // 剧本格式探测："Name: 至少一个字符"
        map.insert("dialogue_detect", Regex::new(r"^[A-Za-z\s]+:.+").unwrap());
        // 对白行解析：捕获角色名（允许字母、空格、点号）与台词内容
        map.insert("dialogue_line", Regex::new(r"^([A-Za-z\s.]+):\s*(.*)").unwrap());
        map
    };

    // DOCX 文本抽取正则
    pub static ref DOCX_REGEX: HashMap<&'static str, Regex> = {
        let mut map = HashMap::new();
        // 段落结束转换为换行
        map.insert("paragraph_end", Regex::new(r"</w:p>").unwrap());
        // 去除全部XML标签
        map.insert("tag", Regex::new(r"<[^>]+>").unwrap());
        map
    };
}
