// ==========================================
// 建筑材料清单系统 - 清单行实体
// ==========================================
// 清单行 = 材料行 + 协作收集状态
// 生命周期: 首次查看时按材料行 1:1 派生默认值，
//           之后由用户编辑并整体快照持久化，不做单行删除
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::material::MaterialRow;

/// 清单行 - 带收集进度的材料行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistRow {
    /// 方块显示名（行的身份键）
    pub item: String,

    /// 需求总数（方块数）
    pub total: f64,

    /// 缺少数量
    pub missing: f64,

    /// 已备数量
    pub available: f64,

    /// 收集人昵称（自由文本，默认空串）
    #[serde(default)]
    pub gathered_by: String,

    /// 是否已收集完成（默认 false）
    #[serde(default)]
    pub is_gathered: bool,
}

impl ChecklistRow {
    /// 按材料行派生默认清单行
    pub fn from_material(row: &MaterialRow) -> Self {
        Self {
            item: row.item.clone(),
            total: row.total,
            missing: row.missing,
            available: row.available,
            gathered_by: String::new(),
            is_gathered: false,
        }
    }
}

/// 清单汇总 - 每次状态变化后重算
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistTotals {
    /// 方块总数
    pub total_blocks: f64,

    /// 折合组数（1 组 = 64 方块）
    pub total_stacks: f64,

    /// 折合潜影盒数（1 盒 = 27 组）
    pub total_shulkers: f64,
}
