// ==========================================
// 建筑材料清单系统 - 导入层
// ==========================================
// 职责: 材料报表文本解析 + 上传文件接入
// 红线: 解析器是全函数，任何输入都不报错
// ==========================================

pub mod error;
pub mod file_intake;
pub mod report_parser;

// 重导出
pub use error::ImportError;
pub use file_intake::{file_to_data_url, read_report_text};
pub use report_parser::parse_materials;
