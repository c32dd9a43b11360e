// ==========================================
// 建筑材料清单系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod building;
pub mod checklist;
pub mod material;

// 重导出核心类型
pub use building::{Building, Coordinates, NewBuilding};
pub use checklist::{ChecklistRow, ChecklistTotals};
pub use material::MaterialRow;
