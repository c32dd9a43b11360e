// ==========================================
// 建筑材料清单系统 - Tauri 命令
// ==========================================
// 约定: 命令返回 Result<String, String>，载荷与错误都走 JSON
// 错误: {code, message}，与前端错误处理约定一致
// ==========================================

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::CreateBuildingRequest;
use crate::app::session::ChecklistSession;
use crate::app::state::AppState;
use crate::importer::{file_to_data_url, read_report_text};
use rust_i18n::t;

// ==========================================
// 公共工具：错误映射
// ==========================================

/// 错误响应（返回给前端）
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,
}

/// 将ApiError转换为JSON字符串（Tauri要求）
fn map_api_error(err: ApiError) -> String {
    let response = ErrorResponse {
        code: match &err {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::DatabaseError(_) => "DATABASE_ERROR",
            ApiError::ImportError(_) => "IMPORT_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
            ApiError::Other(_) => "OTHER_ERROR",
        }
        .to_string(),
        message: err.to_string(),
    };

    serde_json::to_string(&response)
        .unwrap_or_else(|_| format!("{{\"code\":\"INTERNAL_ERROR\",\"message\":\"{}\"}}", err))
}

/// 无编辑会话错误
fn no_session_error() -> String {
    map_api_error(ApiError::InvalidInput(t!("checklist.no_session").to_string()))
}

// ==========================================
// 建筑相关命令
// ==========================================

/// 注册建筑
///
/// 前端传文件路径（dialog-open 选取），
/// 报表文本与截图编码在后端完成。
#[tauri::command(rename_all = "snake_case")]
pub async fn create_building(
    state: tauri::State<'_, AppState>,
    name: String,
    x: String,
    y: String,
    z: String,
    schematic_path: String,
    materials_path: String,
    screenshot_path: Option<String>,
) -> Result<String, String> {
    let building_api = state.building_api.clone();

    let record = tauri::async_runtime::spawn_blocking(move || {
        let _perf = crate::perf::PerfGuard::new("ipc.create_building");

        let materials_text =
            read_report_text(Path::new(&materials_path)).map_err(ApiError::from)?;
        let screenshot_data_url = match &screenshot_path {
            Some(path) => Some(file_to_data_url(Path::new(path)).map_err(ApiError::from)?),
            None => None,
        };

        building_api.create_building(CreateBuildingRequest {
            name,
            x,
            y,
            z,
            schematic_file_name: file_name_of(&schematic_path),
            materials_file_name: file_name_of(&materials_path),
            materials_text,
            screenshot_data_url,
        })
    })
    .await
    .map_err(|e| format!("任务执行失败: {}", e))?
    .map_err(map_api_error)?;

    serde_json::to_string(&record).map_err(|e| format!("序列化失败: {}", e))
}

/// 查询建筑列表
#[tauri::command(rename_all = "snake_case")]
pub async fn list_buildings(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let building_api = state.building_api.clone();
    let result = tauri::async_runtime::spawn_blocking(move || {
        let _perf = crate::perf::PerfGuard::new("ipc.list_buildings");
        building_api.list_buildings()
    })
    .await
    .map_err(|e| format!("任务执行失败: {}", e))?
    .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 查询建筑详情
#[tauri::command(rename_all = "snake_case")]
pub async fn get_building(
    state: tauri::State<'_, AppState>,
    building_id: String,
) -> Result<String, String> {
    let result = state
        .building_api
        .get_building(&building_id)
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

// ==========================================
// 清单相关命令
// ==========================================

/// 打开清单编辑会话
///
/// 已存非空快照优先，否则按材料派生默认清单；
/// 打开不触发写入。解析不出任何材料时附带提示文案。
#[tauri::command(rename_all = "snake_case")]
pub async fn open_checklist(
    state: tauri::State<'_, AppState>,
    building_id: String,
) -> Result<String, String> {
    let _perf = crate::perf::PerfGuard::new("ipc.open_checklist");

    let building = state
        .building_api
        .get_building(&building_id)
        .map_err(map_api_error)?
        .ok_or_else(|| {
            map_api_error(ApiError::NotFound(format!("Building id={}", building_id)))
        })?;

    let session = ChecklistSession::open(&building);
    let response = checklist_response(&session);

    let mut guard = state.session.lock().map_err(|e| format!("锁获取失败: {}", e))?;
    *guard = Some(session);

    response
}

/// 翻转收集标记
///
/// 无匹配行是 no-op，不触发保存。
#[tauri::command(rename_all = "snake_case")]
pub async fn toggle_gathered(
    state: tauri::State<'_, AppState>,
    item: String,
) -> Result<String, String> {
    let mut guard = state.session.lock().map_err(|e| format!("锁获取失败: {}", e))?;
    let session = guard.as_mut().ok_or_else(no_session_error)?;

    if session.toggle_gathered(&item) {
        state.saver.schedule(&session.building_id, session.snapshot());
    }

    checklist_response(session)
}

/// 更新收集人
#[tauri::command(rename_all = "snake_case")]
pub async fn update_gathered_by(
    state: tauri::State<'_, AppState>,
    item: String,
    value: String,
) -> Result<String, String> {
    let mut guard = state.session.lock().map_err(|e| format!("锁获取失败: {}", e))?;
    let session = guard.as_mut().ok_or_else(no_session_error)?;

    if session.update_gathered_by(&item, &value) {
        state.saver.schedule(&session.building_id, session.snapshot());
    }

    checklist_response(session)
}

// ==========================================
// 语言设置命令
// ==========================================

/// 读取当前界面语言
#[tauri::command(rename_all = "snake_case")]
pub async fn get_app_locale(_state: tauri::State<'_, AppState>) -> Result<String, String> {
    Ok(crate::i18n::current_locale())
}

/// 设置界面语言并持久化
#[tauri::command(rename_all = "snake_case")]
pub async fn set_app_locale(
    state: tauri::State<'_, AppState>,
    locale: String,
) -> Result<String, String> {
    crate::i18n::set_locale(&locale);
    state
        .config
        .set_config_value("locale", &locale)
        .map_err(|e| map_api_error(ApiError::from(e)))?;
    Ok(locale)
}

// ==========================================
// 内部辅助
// ==========================================

/// 会话快照 → 前端响应 JSON
fn checklist_response(session: &ChecklistSession) -> Result<String, String> {
    let notice = if session.rows.is_empty() {
        Some(t!("checklist.parse_empty").to_string())
    } else {
        None
    };

    let payload = serde_json::json!({
        "buildingId": session.building_id,
        "rows": session.rows,
        "totals": session.totals(),
        "notice": notice,
    });

    serde_json::to_string(&payload).map_err(|e| format!("序列化失败: {}", e))
}

/// 从路径提取文件名
fn file_name_of(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
