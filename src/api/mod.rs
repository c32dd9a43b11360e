// ==========================================
// 建筑材料清单系统 - API 层
// ==========================================
// 职责: 面向应用层的业务接口
// ==========================================

pub mod building_api;
pub mod checklist_saver;
pub mod error;

// 重导出
pub use building_api::{BuildingApi, CreateBuildingRequest};
pub use checklist_saver::{ChecklistSaver, ChecklistStore};
pub use error::{ApiError, ApiResult};
