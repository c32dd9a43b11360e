// ==========================================
// 建筑材料清单系统 - 建筑实体
// ==========================================
// 聚合根: 一条建筑记录独占一份材料列表和一份可选的清单快照
// 不变式: 创建后核心字段不可变，唯一可变字段是 checklist
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::checklist::ChecklistRow;
use crate::domain::material::MaterialRow;

/// 建筑坐标（保留玩家输入原文，不做数值解析）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: String,
    pub y: String,
    pub z: String,
}

/// 建筑记录 - 聚合根
///
/// 清单快照一经初始化即成为唯一事实来源，
/// 后续加载时必须优先于按材料列表重新派生默认值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    /// 不透明标识，创建时分配（build-<uuid>）
    pub id: String,

    /// 建筑名称
    pub name: String,

    /// 游戏内坐标
    pub coordinates: Coordinates,

    /// 原理图文件名（仅引用，内容不入核心）
    pub schematic_file_name: String,

    /// 材料报表文件名
    pub materials_file_name: String,

    /// 截图 data URL（可选）
    pub screenshot_data_url: Option<String>,

    /// 解析后的材料列表
    pub materials: Vec<MaterialRow>,

    /// 清单快照（首次查看前为 None）
    pub checklist: Option<Vec<ChecklistRow>>,

    /// 创建时间
    pub created_at: DateTime<Utc>,

    /// 最后更新时间（仅清单保存会推进）
    pub updated_at: DateTime<Utc>,
}

/// 建筑创建请求（id 与时间戳由仓储分配）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBuilding {
    pub name: String,
    pub coordinates: Coordinates,
    pub schematic_file_name: String,
    pub materials_file_name: String,
    pub screenshot_data_url: Option<String>,
    pub materials: Vec<MaterialRow>,
}
