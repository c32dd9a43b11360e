// ==========================================
// 建筑材料清单系统 - 材料行实体
// ==========================================
// 来源: 材料报表（管道符伪表格）逐行解析结果
// ==========================================

use serde::{Deserialize, Serialize};

/// 材料行 - 报表中的一条材料记录
///
/// 三个数量列来自报表的三个独立列，解析层不强制
/// `missing + available == total` 之类的算术关系，调用方也不得假设。
///
/// 序列化使用 camelCase 字段名，与前端及持久化 JSON 快照格式保持一致。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRow {
    /// 方块显示名（在同一份解析结果内当作唯一键使用）
    pub item: String,

    /// 需求总数（方块数）
    pub total: f64,

    /// 解析时刻仍缺少的数量
    pub missing: f64,

    /// 解析时刻已备好的数量
    pub available: f64,
}
