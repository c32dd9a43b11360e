// ==========================================
// 建筑材料清单系统 - 数据仓储层
// ==========================================
// 职责: buildings 表的数据访问
// 红线: 不含业务逻辑，只负责数据访问
// ==========================================

pub mod building_repo;
pub mod error;

// 重导出
pub use building_repo::BuildingRepository;
pub use error::{RepositoryError, RepositoryResult};
