// ==========================================
// 建筑材料清单系统 - 材料报表解析器
// ==========================================
// 输入: 管道符伪表格文本（行边框 `|`、表头行、`---+` 分隔行）
// 输出: 按出现顺序排列的材料行序列
// 策略: 宽容解析 —— 解析不了的行静默丢弃，不报错
// ==========================================

use crate::domain::MaterialRow;

/// 表头行标记（列标题行含有该词，需整行排除）
const HEADER_MARKER: &str = "Item";

/// 分隔行标记（`+----+----+` 之类的边框行含有该子串）
const SEPARATOR_MARKER: &str = "---";

/// 解析材料报表文本
///
/// 行处理规则:
/// 1. 按任意换行风格切行，逐行去首尾空白
/// 2. 不以 `|` 开头的行丢弃
/// 3. 含 `Item`（区分大小写）或 `---` 的行丢弃（表头/分隔行）
/// 4. 按 `|` 切分、去空白、滤掉空段；非空段不等于 4 个的行丢弃
///    （标题行只有 1 段、畸形行都会在这里被吸收）
/// 5. 四段按位置解释为 [item, total, missing, available]，
///    不做表头文字到列的映射 —— 报表列序是固定约定
///
/// 空输入返回空序列，不是错误。
pub fn parse_materials(text: &str) -> Vec<MaterialRow> {
    let mut rows = Vec::new();

    // str::lines 同时处理 `\n` 与 `\r\n`
    for raw_line in text.lines() {
        let line = raw_line.trim();

        if !line.starts_with('|')
            || line.contains(HEADER_MARKER)
            || line.contains(SEPARATOR_MARKER)
        {
            continue;
        }

        let parts: Vec<&str> = line
            .split('|')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        // 首尾 `|` 产生的空段已被滤掉，剩下的必须恰好是 4 列
        if parts.len() != 4 {
            continue;
        }

        rows.push(MaterialRow {
            item: parts[0].to_string(),
            total: number_from_cell(parts[1]),
            missing: number_from_cell(parts[2]),
            available: number_from_cell(parts[3]),
        });
    }

    rows
}

/// 数值单元格转换
///
/// 先剔除全部空白字符（俄文报表用空格做千位分隔，如 "4 974"），
/// 空串视为 0；剩余文本解析失败同样取 0（宽容策略，保持解析器为全函数），
/// 仅打 debug 日志以便排查报表质量问题。
fn number_from_cell(cell: &str) -> f64 {
    let cleaned: String = cell.chars().filter(|c| !c.is_whitespace()).collect();

    if cleaned.is_empty() {
        return 0.0;
    }

    match cleaned.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            tracing::debug!(cell = %cell, "数值单元格解析失败，按 0 处理");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_from_cell_thousands_space() {
        assert_eq!(number_from_cell("4 974"), 4974.0);
    }

    #[test]
    fn test_number_from_cell_empty_is_zero() {
        assert_eq!(number_from_cell(""), 0.0);
        assert_eq!(number_from_cell("   "), 0.0);
    }

    #[test]
    fn test_number_from_cell_garbage_is_zero() {
        assert_eq!(number_from_cell("N/A"), 0.0);
    }

    #[test]
    fn test_number_from_cell_nbsp_separator() {
        // 不换行空格也是空白字符
        assert_eq!(number_from_cell("1\u{a0}728"), 1728.0);
    }
}
