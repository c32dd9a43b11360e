// ==========================================
// BuildingApi - 建筑业务接口
// ==========================================
// 职责: 建筑注册校验、报表解析调度、有效清单计算、清单整体保存
// ==========================================

use std::sync::Arc;

use crate::api::checklist_saver::ChecklistStore;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::{Building, ChecklistRow, Coordinates, NewBuilding};
use crate::engine::effective_checklist;
use crate::importer::parse_materials;
use crate::repository::BuildingRepository;

/// 建筑创建请求（报表以原始文本传入，解析在本层完成）
#[derive(Debug, Clone)]
pub struct CreateBuildingRequest {
    pub name: String,
    pub x: String,
    pub y: String,
    pub z: String,
    pub schematic_file_name: String,
    pub materials_file_name: String,
    pub materials_text: String,
    pub screenshot_data_url: Option<String>,
}

/// 建筑API
pub struct BuildingApi {
    repo: Arc<BuildingRepository>,
}

impl BuildingApi {
    /// 创建新的 BuildingApi 实例
    pub fn new(repo: Arc<BuildingRepository>) -> Self {
        Self { repo }
    }

    /// 注册建筑
    ///
    /// 必填字段校验（名称/三维坐标/两个文件名），
    /// 解析材料报表后落库。报表解析不出任何行不算失败 ——
    /// 空材料列表是合法结果，由展示层提示。
    pub fn create_building(&self, request: CreateBuildingRequest) -> ApiResult<Building> {
        let name = request.name.trim().to_string();
        let x = request.x.trim().to_string();
        let y = request.y.trim().to_string();
        let z = request.z.trim().to_string();

        if name.is_empty() || x.is_empty() || y.is_empty() || z.is_empty() {
            return Err(ApiError::InvalidInput("名称与坐标均为必填项".to_string()));
        }
        if request.schematic_file_name.trim().is_empty()
            || request.materials_file_name.trim().is_empty()
        {
            return Err(ApiError::InvalidInput(
                "原理图与材料报表文件均为必填项".to_string(),
            ));
        }

        let materials = parse_materials(&request.materials_text);
        tracing::info!(
            name = %name,
            material_rows = materials.len(),
            "材料报表解析完成"
        );

        let record = self.repo.create(NewBuilding {
            name,
            coordinates: Coordinates { x, y, z },
            schematic_file_name: request.schematic_file_name.trim().to_string(),
            materials_file_name: request.materials_file_name.trim().to_string(),
            screenshot_data_url: request.screenshot_data_url,
            materials,
        })?;

        Ok(record)
    }

    /// 按 id 查询建筑
    pub fn get_building(&self, id: &str) -> ApiResult<Option<Building>> {
        Ok(self.repo.get(id)?)
    }

    /// 列出全部建筑
    pub fn list_buildings(&self) -> ApiResult<Vec<Building>> {
        Ok(self.repo.list()?)
    }

    /// 计算建筑的有效清单（不落库）
    ///
    /// 已存非空快照原样返回；否则按材料列表派生默认清单。
    /// 首次查看派生的默认清单不触发写入 —— 只有用户编辑才会保存。
    pub fn get_checklist(&self, id: &str) -> ApiResult<Vec<ChecklistRow>> {
        let building = self
            .repo
            .get(id)?
            .ok_or_else(|| ApiError::NotFound(format!("Building id={}", id)))?;

        Ok(effective_checklist(
            &building.materials,
            building.checklist.as_deref(),
        ))
    }
}

// 去抖写入器调用的保存边界：清单快照整体替换
impl ChecklistStore for BuildingApi {
    fn save_checklist(&self, building_id: &str, rows: &[ChecklistRow]) -> ApiResult<Building> {
        Ok(self.repo.update_checklist(building_id, rows)?)
    }
}
