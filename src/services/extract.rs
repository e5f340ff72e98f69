use std::io::{Cursor, Read};

use thiserror::Error;

use crate::utils::{file_extension, DOCX_REGEX};

/// 文本抽取错误
#[derive(Error, Debug)]
pub enum ExtractError {
    /// 无法识别的文档类型
    #[error("不支持的文件类型: {0}")]
    UnsupportedFormat(String),

    #[error("文档内容损坏: {0}")]
    InvalidDocument(String),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

pub type ExtractResult = Result<String, ExtractError>;

/// 从文件字节中抽取纯文本
///
/// 按扩展名分派：txt 直接按UTF-8读取，docx 解包读取正文，
/// 其余类型（含pdf）报不支持
pub fn extract_text(bytes: &[u8], filename: &str) -> ExtractResult {
    let ext = file_extension(filename)
        .ok_or_else(|| ExtractError::UnsupportedFormat(filename.to_string()))?;

    match ext.as_str() {
        "txt" => Ok(String::from_utf8_lossy(bytes).into_owned()),
        "docx" => extract_docx_text(bytes),
        other => Err(ExtractError::UnsupportedFormat(other.to_string())),
    }
}

/// 从DOCX字节中抽取正文文本
///
/// DOCX本质是zip包，正文在 word/document.xml 中：
/// 段落结束转换为换行，其余标签剥除，XML实体还原
pub fn extract_docx_text(bytes: &[u8]) -> ExtractResult {
    let cursor = Cursor::new(bytes);
    let mut archive = zip::ZipArchive::new(cursor)
        .map_err(|e| ExtractError::InvalidDocument(format!("zip解包失败: {}", e)))?;

    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::InvalidDocument(format!("缺少word/document.xml: {}", e)))?
        .read_to_string(&mut document_xml)?;

    let with_newlines = DOCX_REGEX["paragraph_end"].replace_all(&document_xml, "\n");
    let stripped = DOCX_REGEX["tag"].replace_all(&with_newlines, "");

    Ok(unescape_xml(stripped.trim()))
}

// 还原常见XML实体，&amp; 必须最后处理
fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
