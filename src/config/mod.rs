// ==========================================
// 建筑材料清单系统 - 配置层
// ==========================================
// 职责: 系统配置加载与查询
// 存储: config_kv 表 (key-value + scope)
// ==========================================

pub mod config_manager;

// 重导出
pub use config_manager::ConfigManager;

/// 清单去抖保存静默期默认值（毫秒）
pub const DEFAULT_SAVE_DEBOUNCE_MS: u64 = 1_000;

/// 默认界面语言
pub const DEFAULT_LOCALE: &str = "ru";
