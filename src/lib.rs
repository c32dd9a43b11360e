// ==========================================
// 建筑材料清单系统 - 核心库
// ==========================================
// 技术栈: Tauri + Rust + SQLite
// 系统定位: Minecraft 建筑材料收集协作清单
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "ru");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 换算与清单合并规则
pub mod engine;

// 导入层 - 材料报表解析与文件接入
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// 性能观测
pub mod perf;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - Tauri 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    Building, ChecklistRow, ChecklistTotals, Coordinates, MaterialRow, NewBuilding,
};

// 解析器
pub use importer::parse_materials;

// 引擎
pub use engine::{
    compute_totals, effective_checklist, init_checklist, to_shulkers, to_stacks,
    toggle_gathered, update_gathered_by,
};

// API
pub use api::{BuildingApi, ChecklistSaver, ChecklistStore};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "建筑材料清单系统";

// ==========================================
// 预编译检查
// ==========================================
