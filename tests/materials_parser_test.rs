// ==========================================
// 材料报表解析器 - 集成测试
// ==========================================
// 覆盖: 行过滤规则 / 四列定位 / 数值清洗 / 宽容丢弃策略
// ==========================================

use build_checklist::domain::MaterialRow;
use build_checklist::importer::parse_materials;

/// 一份贴近真实导出的报表样例（俄文物品名 + 空格千位分隔）
const SAMPLE_REPORT: &str = r#"
| Список материалов |
+------------+--------+---------+-----------+
| Item       | Total  | Missing | Available |
+------------+--------+---------+-----------+
| Кирпичи    | 4 974  | 4974    | 0         |
| Стекло     | 3 200  | 1 200   | 2 000     |
| Факелы     | 244    |         | 244       |
+------------+--------+---------+-----------+
"#;

#[test]
fn test_empty_input_yields_empty_sequence() {
    assert!(parse_materials("").is_empty());
}

#[test]
fn test_whitespace_only_input_yields_empty_sequence() {
    assert!(parse_materials("   \n\r\n  \n").is_empty());
}

#[test]
fn test_lines_without_leading_pipe_are_excluded() {
    let text = "Кирпичи | 4 | 4 | 0 |\nчто угодно\n1 | 2 | 3 | 4";
    assert!(parse_materials(text).is_empty());
}

#[test]
fn test_header_row_is_excluded_despite_four_segments() {
    let text = "| Item | Total | Missing | Available |";
    assert!(parse_materials(text).is_empty());
}

#[test]
fn test_separator_rows_are_excluded() {
    // `+---+` 不以 `|` 开头；`|---|` 以 `|` 开头但含 "---"
    let text = "+------+------+\n|------|------|\n| --- | --- | --- | --- |";
    assert!(parse_materials(text).is_empty());
}

#[test]
fn test_caption_row_with_single_segment_is_excluded() {
    let text = "| Список материалов |";
    assert!(parse_materials(text).is_empty());
}

#[test]
fn test_row_with_wrong_column_count_is_silently_dropped() {
    let text = "| Кирпичи | 4974 | 0 |\n| Стекло | 1 | 2 | 3 | 4 |";
    assert!(parse_materials(text).is_empty());
}

#[test]
fn test_thousands_separator_spaces_are_stripped() {
    let rows = parse_materials("| Кирпичи | 4 974 | 4974 | 0 |");
    assert_eq!(
        rows,
        vec![MaterialRow {
            item: "Кирпичи".to_string(),
            total: 4974.0,
            missing: 4974.0,
            available: 0.0,
        }]
    );
}

#[test]
fn test_blank_numeric_cell_drops_the_row() {
    // 留空单元格在去空白后变成空段被滤掉，列数不足 4 —— 整行丢弃。
    // 这是有意的宽容策略，不是要修的 bug
    let rows = parse_materials("| Факелы | 244 |  | 244 |");
    assert!(rows.is_empty());
}

#[test]
fn test_non_numeric_cell_defaults_to_zero() {
    // 宽容策略: 解析失败按 0 处理，不丢行、不报错
    let rows = parse_materials("| Кирпичи | many | 4 | 0 |");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total, 0.0);
    assert_eq!(rows[0].missing, 4.0);
}

#[test]
fn test_sample_report_parses_in_encounter_order() {
    let rows = parse_materials(SAMPLE_REPORT);

    // 标题行、表头行、分隔行全部被滤掉；
    // Факелы 行的 Missing 列为空格，空段被滤掉后只剩 3 列 —— 整行丢弃
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].item, "Кирпичи");
    assert_eq!(rows[0].total, 4974.0);
    assert_eq!(rows[1].item, "Стекло");
    assert_eq!(rows[1].total, 3200.0);
    assert_eq!(rows[1].missing, 1200.0);
    assert_eq!(rows[1].available, 2000.0);
}

#[test]
fn test_crlf_line_endings_are_handled() {
    let text = "| Кирпичи | 1 | 1 | 0 |\r\n| Стекло | 2 | 0 | 2 |\r\n";
    let rows = parse_materials(text);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].item, "Кирпичи");
    assert_eq!(rows[1].item, "Стекло");
}

#[test]
fn test_numeric_columns_are_independent() {
    // 三个数量列独立解析，不强制 missing + available == total
    let rows = parse_materials("| Кирпичи | 100 | 90 | 90 |");
    assert_eq!(rows[0].total, 100.0);
    assert_eq!(rows[0].missing, 90.0);
    assert_eq!(rows[0].available, 90.0);
}
