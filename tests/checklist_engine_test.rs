// ==========================================
// 清单聚合引擎 - 集成测试
// ==========================================
// 覆盖: 单位换算 / 汇总线性 / 初始化与快照优先 / 按键变更
// ==========================================

use build_checklist::domain::{ChecklistRow, MaterialRow};
use build_checklist::engine::{
    compute_totals, effective_checklist, init_checklist, to_shulkers, to_stacks, toggle_gathered,
    update_gathered_by,
};

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建测试用材料行
fn material(item: &str, total: f64) -> MaterialRow {
    MaterialRow {
        item: item.to_string(),
        total,
        missing: total,
        available: 0.0,
    }
}

/// 创建测试用材料列表（来自规格样例的三种数量）
fn sample_materials() -> Vec<MaterialRow> {
    vec![
        material("Кирпичи", 4974.0),
        material("Стекло", 3200.0),
        material("Факелы", 244.0),
    ]
}

// ==========================================
// 单位换算
// ==========================================

#[test]
fn test_stack_conversion() {
    assert_eq!(to_stacks(64.0), 1.0);
    assert_eq!(to_stacks(32.0), 0.5);
}

#[test]
fn test_shulker_conversion() {
    // 1 潜影盒 = 27 组 × 64 方块 = 1728 方块
    assert_eq!(to_shulkers(1728.0), 1.0);
}

// ==========================================
// 汇总
// ==========================================

#[test]
fn test_totals_sum_blocks() {
    let rows = init_checklist(&sample_materials());
    let totals = compute_totals(&rows);
    assert_eq!(totals.total_blocks, 8418.0);
}

#[test]
fn test_totals_linearity() {
    // 换算线性: 逐行换算求和 == 先求和再换算
    let rows = init_checklist(&sample_materials());
    let totals = compute_totals(&rows);

    let per_row_stacks: f64 = rows.iter().map(|r| to_stacks(r.total)).sum();
    let per_row_shulkers: f64 = rows.iter().map(|r| to_shulkers(r.total)).sum();

    assert_eq!(totals.total_stacks, per_row_stacks);
    assert_eq!(totals.total_shulkers, per_row_shulkers);
    assert!((totals.total_stacks - to_stacks(totals.total_blocks)).abs() < 1e-9);
    assert!((totals.total_shulkers - to_shulkers(totals.total_blocks)).abs() < 1e-9);
}

#[test]
fn test_totals_of_empty_checklist_are_zero() {
    let totals = compute_totals(&[]);
    assert_eq!(totals.total_blocks, 0.0);
    assert_eq!(totals.total_stacks, 0.0);
    assert_eq!(totals.total_shulkers, 0.0);
}

// ==========================================
// 初始化与快照优先
// ==========================================

#[test]
fn test_init_checklist_derives_defaults_in_parse_order() {
    let rows = init_checklist(&sample_materials());

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].item, "Кирпичи");
    assert_eq!(rows[1].item, "Стекло");
    assert_eq!(rows[2].item, "Факелы");
    assert!(rows.iter().all(|r| !r.is_gathered));
    assert!(rows.iter().all(|r| r.gathered_by.is_empty()));
}

#[test]
fn test_saved_nonempty_checklist_wins_verbatim() {
    // 已存快照与当前材料列表不一致（材料改过了）——
    // 快照仍按原样使用，不做键级 re-diff
    let mut saved = init_checklist(&[material("Кирпичи", 4974.0)]);
    saved[0].is_gathered = true;
    saved[0].gathered_by = "Steve".to_string();

    let effective = effective_checklist(&sample_materials(), Some(&saved));
    assert_eq!(effective, saved);
}

#[test]
fn test_empty_saved_checklist_rederives_defaults() {
    let saved: Vec<ChecklistRow> = Vec::new();
    let effective = effective_checklist(&sample_materials(), Some(&saved));
    assert_eq!(effective.len(), 3);
}

#[test]
fn test_no_saved_checklist_derives_defaults() {
    let effective = effective_checklist(&sample_materials(), None);
    assert_eq!(effective, init_checklist(&sample_materials()));
}

// ==========================================
// 按键变更
// ==========================================

#[test]
fn test_toggle_flips_only_the_matching_row() {
    let mut rows = init_checklist(&sample_materials());
    let before = rows.clone();

    assert!(toggle_gathered(&mut rows, "Стекло"));

    assert!(rows[1].is_gathered);
    assert_eq!(rows[0], before[0]);
    assert_eq!(rows[2], before[2]);
    // 同一行的其他字段不受影响
    assert_eq!(rows[1].gathered_by, before[1].gathered_by);
    assert_eq!(rows[1].total, before[1].total);
}

#[test]
fn test_toggle_twice_is_involution() {
    let mut rows = init_checklist(&sample_materials());
    let before = rows.clone();

    assert!(toggle_gathered(&mut rows, "Кирпичи"));
    assert!(toggle_gathered(&mut rows, "Кирпичи"));

    assert_eq!(rows, before);
}

#[test]
fn test_toggle_unknown_item_is_noop() {
    let mut rows = init_checklist(&sample_materials());
    let before = rows.clone();

    assert!(!toggle_gathered(&mut rows, "Алмазы"));
    assert_eq!(rows, before);
}

#[test]
fn test_update_gathered_by_sets_only_the_matching_row() {
    let mut rows = init_checklist(&sample_materials());
    let before = rows.clone();

    assert!(update_gathered_by(&mut rows, "Кирпичи", "Steve"));

    assert_eq!(rows[0].gathered_by, "Steve");
    assert!(!rows[0].is_gathered);
    assert_eq!(rows[1], before[1]);
    assert_eq!(rows[2], before[2]);
}

#[test]
fn test_update_gathered_by_unknown_item_is_noop() {
    let mut rows = init_checklist(&sample_materials());
    let before = rows.clone();

    assert!(!update_gathered_by(&mut rows, "Алмазы", "Alex"));
    assert_eq!(rows, before);
}
