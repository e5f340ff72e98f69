pub mod script_constants;

pub use script_constants::{DOCX_REGEX, SCRIPT_REGEX};

/// 统计一行文本中以空白分隔的词数
pub fn count_words(line: &str) -> usize {
    line.trim().split_whitespace().count()
}

/// 取文件名的小写扩展名
pub fn file_extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| !ext.is_empty())
}
