// ==========================================
// ChecklistSession - 清单编辑会话
// ==========================================
// 单用户单会话模型: 同一时刻只编辑一份清单，
// 它是去抖写入之外唯一的共享可变状态
// ==========================================

use crate::domain::{Building, ChecklistRow, ChecklistTotals};
use crate::engine::{compute_totals, effective_checklist, toggle_gathered, update_gathered_by};

/// 清单编辑会话
///
/// 打开时按"已存非空快照优先、否则派生默认值"计算工作清单；
/// 打开本身不触发任何写入。
pub struct ChecklistSession {
    /// 所属建筑 id
    pub building_id: String,

    /// 工作清单（编辑的就是这一份）
    pub rows: Vec<ChecklistRow>,
}

impl ChecklistSession {
    /// 按建筑记录打开编辑会话
    pub fn open(building: &Building) -> Self {
        Self {
            building_id: building.id.clone(),
            rows: effective_checklist(&building.materials, building.checklist.as_deref()),
        }
    }

    /// 翻转某材料的收集标记
    ///
    /// 返回是否有行被修改（无匹配行时 false，调用方不触发保存）。
    pub fn toggle_gathered(&mut self, item: &str) -> bool {
        toggle_gathered(&mut self.rows, item)
    }

    /// 更新某材料的收集人
    pub fn update_gathered_by(&mut self, item: &str, value: &str) -> bool {
        update_gathered_by(&mut self.rows, item, value)
    }

    /// 当前汇总
    pub fn totals(&self) -> ChecklistTotals {
        compute_totals(&self.rows)
    }

    /// 当前快照（交给去抖写入器）
    pub fn snapshot(&self) -> Vec<ChecklistRow> {
        self.rows.clone()
    }
}
