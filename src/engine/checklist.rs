// ==========================================
// 建筑材料清单系统 - 清单聚合引擎
// ==========================================
// 职责: 清单初始化/按已存快照恢复、按 item 键变更、汇总重算
// ==========================================

use crate::domain::{ChecklistRow, ChecklistTotals, MaterialRow};
use crate::engine::conversion::{to_shulkers, to_stacks};

/// 按材料列表初始化默认清单
///
/// 每条材料行派生一条清单行（gathered_by 空、is_gathered 假），
/// 保持解析顺序。
pub fn init_checklist(materials: &[MaterialRow]) -> Vec<ChecklistRow> {
    materials.iter().map(ChecklistRow::from_material).collect()
}

/// 计算会话应呈现的有效清单
///
/// 规则: 已存的非空清单快照按原样使用，是唯一事实来源；
/// 材料列表在两次访问之间变化时，旧快照原样保留，
/// 不与新材料做键级 re-diff（已知缺口，产品层面未决策，不擅自修复）。
/// 无快照或快照为空时按材料列表派生默认清单。
pub fn effective_checklist(
    materials: &[MaterialRow],
    saved: Option<&[ChecklistRow]>,
) -> Vec<ChecklistRow> {
    match saved {
        Some(rows) if !rows.is_empty() => rows.to_vec(),
        _ => init_checklist(materials),
    }
}

/// 翻转指定材料的收集标记
///
/// 按 `item` 全等匹配；无匹配行时不做任何修改。
/// 返回是否有行被修改。
pub fn toggle_gathered(rows: &mut [ChecklistRow], item: &str) -> bool {
    match rows.iter_mut().find(|row| row.item == item) {
        Some(row) => {
            row.is_gathered = !row.is_gathered;
            true
        }
        None => false,
    }
}

/// 更新指定材料的收集人
///
/// 按 `item` 全等匹配；无匹配行时不做任何修改。
/// 返回是否有行被修改。
pub fn update_gathered_by(rows: &mut [ChecklistRow], item: &str, value: &str) -> bool {
    match rows.iter_mut().find(|row| row.item == item) {
        Some(row) => {
            row.gathered_by = value.to_string();
            true
        }
        None => false,
    }
}

/// 重算清单汇总
///
/// 换算是线性的，逐行换算再求和与先求和再换算等价，
/// 这里沿用逐行换算求和的口径。
pub fn compute_totals(rows: &[ChecklistRow]) -> ChecklistTotals {
    let total_blocks = rows.iter().map(|row| row.total).sum();
    let total_stacks = rows.iter().map(|row| to_stacks(row.total)).sum();
    let total_shulkers = rows.iter().map(|row| to_shulkers(row.total)).sum();

    ChecklistTotals {
        total_blocks,
        total_stacks,
        total_shulkers,
    }
}
