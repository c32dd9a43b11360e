// ==========================================
// 建筑材料清单系统 - 上传文件接入
// ==========================================
// 职责: 读取材料报表文本 / 截图转 data URL
// 说明: 原理图文件内容核心不检查，只保留文件名引用
// ==========================================

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::importer::error::{ImportError, ImportResult};

/// 读取材料报表文本
///
/// 报表编码不可控（玩家从各种工具导出），按 UTF-8 宽容解码，
/// 非法字节替换为占位符，不中断导入。
pub fn read_report_text(path: &Path) -> ImportResult<String> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// 截图文件转 data URL（`data:<mime>;base64,<payload>`）
pub fn file_to_data_url(path: &Path) -> ImportResult<String> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let mime = mime_for_extension(&ext).ok_or(ImportError::UnsupportedFormat(ext))?;

    let bytes = fs::read(path)?;
    Ok(format!("data:{};base64,{}", mime, BASE64.encode(bytes)))
}

/// 按扩展名推断图片 MIME 类型
fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}
