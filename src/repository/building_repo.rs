// ==========================================
// BuildingRepository - 建筑仓储
// ==========================================
// 职责: 管理 buildings 表的 CRUD 操作
// 契约: create / get / update_checklist / list
// 说明: 写入核心只动 checklist 列（整体快照替换）
// ==========================================

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

use crate::db::{init_schema, open_sqlite_connection};
use crate::domain::{Building, ChecklistRow, Coordinates, MaterialRow, NewBuilding};
use crate::repository::error::{RepositoryError, RepositoryResult};

/// 建筑仓储
pub struct BuildingRepository {
    conn: Arc<Mutex<Connection>>,
}

impl BuildingRepository {
    /// 创建新的 BuildingRepository 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        init_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例（测试/共享连接场景）
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(e.to_string()))?;
            init_schema(&guard)?;
        }
        Ok(Self { conn })
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 创建建筑记录，分配不透明 id 与时间戳
    pub fn create(&self, building: NewBuilding) -> RepositoryResult<Building> {
        let now = Utc::now();
        let record = Building {
            id: format!("build-{}", Uuid::new_v4().simple()),
            name: building.name,
            coordinates: building.coordinates,
            schematic_file_name: building.schematic_file_name,
            materials_file_name: building.materials_file_name,
            screenshot_data_url: building.screenshot_data_url,
            materials: building.materials,
            checklist: None,
            created_at: now,
            updated_at: now,
        };

        let materials_json = serde_json::to_string(&record.materials)?;

        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO buildings (
                id, name, coord_x, coord_y, coord_z,
                schematic_file_name, materials_file_name, screenshot_data_url,
                materials_json, checklist_json, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, NULL, ?10, ?11)
            "#,
            params![
                record.id,
                record.name,
                record.coordinates.x,
                record.coordinates.y,
                record.coordinates.z,
                record.schematic_file_name,
                record.materials_file_name,
                record.screenshot_data_url,
                materials_json,
                record.created_at.to_rfc3339(),
                record.updated_at.to_rfc3339(),
            ],
        )?;

        tracing::info!(building_id = %record.id, name = %record.name, "建筑记录已创建");
        Ok(record)
    }

    /// 按 id 查询建筑记录
    pub fn get(&self, id: &str) -> RepositoryResult<Option<Building>> {
        let conn = self.get_conn()?;
        let record = conn
            .query_row(
                r#"
                SELECT id, name, coord_x, coord_y, coord_z,
                       schematic_file_name, materials_file_name, screenshot_data_url,
                       materials_json, checklist_json, created_at, updated_at
                FROM buildings WHERE id = ?1
                "#,
                params![id],
                row_to_building,
            )
            .optional()?;

        match record {
            Some(result) => Ok(Some(result?)),
            None => Ok(None),
        }
    }

    /// 整体替换清单快照，推进 updated_at
    ///
    /// # 返回
    /// - Ok(Building): 更新后的完整记录
    /// - Err(NotFound): id 不存在
    pub fn update_checklist(
        &self,
        id: &str,
        checklist: &[ChecklistRow],
    ) -> RepositoryResult<Building> {
        let checklist_json = serde_json::to_string(checklist)?;
        let now = Utc::now();

        {
            let conn = self.get_conn()?;
            let affected = conn.execute(
                "UPDATE buildings SET checklist_json = ?1, updated_at = ?2 WHERE id = ?3",
                params![checklist_json, now.to_rfc3339(), id],
            )?;

            if affected == 0 {
                return Err(RepositoryError::NotFound {
                    entity: "Building".to_string(),
                    id: id.to_string(),
                });
            }
        }

        // 回读完整记录，保证调用方拿到的是落库后的事实
        self.get(id)?.ok_or_else(|| RepositoryError::NotFound {
            entity: "Building".to_string(),
            id: id.to_string(),
        })
    }

    /// 列出全部建筑记录（按创建时间倒序）
    pub fn list(&self) -> RepositoryResult<Vec<Building>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, name, coord_x, coord_y, coord_z,
                   schematic_file_name, materials_file_name, screenshot_data_url,
                   materials_json, checklist_json, created_at, updated_at
            FROM buildings ORDER BY created_at DESC
            "#,
        )?;

        let rows = stmt.query_map([], row_to_building)?;

        let mut buildings = Vec::new();
        for row in rows {
            buildings.push(row??);
        }
        Ok(buildings)
    }
}

/// 行映射：buildings 表一行 → Building
///
/// JSON 列的反序列化错误不能在 rusqlite 闭包里直接抛仓储错误，
/// 先以内层 Result 带出，由调用方展开。
fn row_to_building(row: &Row<'_>) -> rusqlite::Result<RepositoryResult<Building>> {
    let materials_json: String = row.get(8)?;
    let checklist_json: Option<String> = row.get(9)?;
    let created_at: String = row.get(10)?;
    let updated_at: String = row.get(11)?;

    let build = || -> RepositoryResult<Building> {
        let materials: Vec<MaterialRow> = serde_json::from_str(&materials_json)?;
        let checklist: Option<Vec<ChecklistRow>> = match checklist_json {
            Some(json) => Some(serde_json::from_str(&json)?),
            None => None,
        };

        Ok(Building {
            id: row.get(0)?,
            name: row.get(1)?,
            coordinates: Coordinates {
                x: row.get(2)?,
                y: row.get(3)?,
                z: row.get(4)?,
            },
            schematic_file_name: row.get(5)?,
            materials_file_name: row.get(6)?,
            screenshot_data_url: row.get(7)?,
            materials,
            checklist,
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        })
    };

    Ok(build())
}

/// RFC3339 时间戳解析
fn parse_timestamp(value: &str) -> RepositoryResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::SerializationError(format!("时间戳非法: {}", e)))
}
