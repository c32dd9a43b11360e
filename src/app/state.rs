// ==========================================
// 建筑材料清单系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::api::{BuildingApi, ChecklistSaver, ChecklistStore};
use crate::app::session::ChecklistSession;
use crate::config::ConfigManager;
use crate::repository::BuildingRepository;

/// 应用状态
///
/// 包含API实例、配置、当前清单编辑会话与去抖写入器。
/// 在Tauri应用中作为全局状态管理。
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    /// 建筑API
    pub building_api: Arc<BuildingApi>,

    /// 配置管理器
    pub config: Arc<ConfigManager>,

    /// 当前清单编辑会话（同一时刻最多一份）
    pub session: Mutex<Option<ChecklistSession>>,

    /// 清单去抖写入器
    pub saver: ChecklistSaver,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: String) -> Result<Self, String> {
        let repo = Arc::new(
            BuildingRepository::new(&db_path).map_err(|e| format!("仓储初始化失败: {}", e))?,
        );
        let config = Arc::new(
            ConfigManager::new(&db_path).map_err(|e| format!("配置初始化失败: {}", e))?,
        );

        // 界面语言来自配置
        let locale = config
            .get_locale()
            .map_err(|e| format!("读取语言配置失败: {}", e))?;
        crate::i18n::set_locale(&locale);

        let building_api = Arc::new(BuildingApi::new(repo));

        let quiet_ms = config
            .get_save_debounce_ms()
            .map_err(|e| format!("读取去抖配置失败: {}", e))?;
        let store: Arc<dyn ChecklistStore> = building_api.clone();
        let saver = ChecklistSaver::new(store, Duration::from_millis(quiet_ms));

        tracing::info!(db_path = %db_path, save_debounce_ms = quiet_ms, "AppState 初始化完成");

        Ok(Self {
            db_path,
            building_api,
            config,
            session: Mutex::new(None),
            saver,
        })
    }
}

/// 默认数据库路径
///
/// 用户数据目录下 build-checklist/buildings.db；
/// 目录不可用时回落到当前工作目录。
pub fn get_default_db_path() -> String {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    let dir = base.join("build-checklist");

    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::warn!(error = %e, "数据目录创建失败，使用当前目录");
        return "buildings.db".to_string();
    }

    dir.join("buildings.db").display().to_string()
}
