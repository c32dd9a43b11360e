// ==========================================
// BuildingRepository - 集成测试
// ==========================================
// 使用 tempfile 临时数据库，覆盖 create/get/update_checklist/list
// ==========================================

use build_checklist::domain::{ChecklistRow, Coordinates, MaterialRow, NewBuilding};
use build_checklist::repository::{BuildingRepository, RepositoryError};
use tempfile::TempDir;

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建临时数据库上的仓储
fn setup() -> (TempDir, BuildingRepository) {
    let dir = TempDir::new().expect("创建临时目录失败");
    let db_path = dir.path().join("buildings.db");
    let repo = BuildingRepository::new(db_path.to_str().unwrap()).expect("仓储初始化失败");
    (dir, repo)
}

/// 创建测试用建筑请求
fn new_building(name: &str) -> NewBuilding {
    NewBuilding {
        name: name.to_string(),
        coordinates: Coordinates {
            x: "100".to_string(),
            y: "64".to_string(),
            z: "-200".to_string(),
        },
        schematic_file_name: "castle.litematic".to_string(),
        materials_file_name: "castle_materials.txt".to_string(),
        screenshot_data_url: Some("data:image/png;base64,iVBORw0KGgo=".to_string()),
        materials: vec![MaterialRow {
            item: "Кирпичи".to_string(),
            total: 4974.0,
            missing: 4974.0,
            available: 0.0,
        }],
    }
}

// ==========================================
// 用例
// ==========================================

#[test]
fn test_create_assigns_opaque_id_and_timestamps() {
    let (_dir, repo) = setup();

    let record = repo.create(new_building("Замок")).unwrap();

    assert!(record.id.starts_with("build-"));
    assert_eq!(record.name, "Замок");
    assert!(record.checklist.is_none());
    assert_eq!(record.created_at, record.updated_at);
}

#[test]
fn test_create_then_get_roundtrip() {
    let (_dir, repo) = setup();

    let created = repo.create(new_building("Замок")).unwrap();
    let loaded = repo.get(&created.id).unwrap().expect("记录应存在");

    assert_eq!(loaded, created);
}

#[test]
fn test_get_absent_id_returns_none() {
    let (_dir, repo) = setup();
    assert!(repo.get("build-nope").unwrap().is_none());
}

#[test]
fn test_update_checklist_replaces_snapshot_wholesale() {
    let (_dir, repo) = setup();
    let created = repo.create(new_building("Замок")).unwrap();

    let checklist = vec![ChecklistRow {
        item: "Кирпичи".to_string(),
        total: 4974.0,
        missing: 4974.0,
        available: 0.0,
        gathered_by: "Steve".to_string(),
        is_gathered: true,
    }];

    let updated = repo.update_checklist(&created.id, &checklist).unwrap();
    assert_eq!(updated.checklist.as_deref(), Some(checklist.as_slice()));
    assert!(updated.updated_at >= created.updated_at);

    // 覆盖式替换：第二次保存完全覆盖第一次
    let replacement: Vec<ChecklistRow> = Vec::new();
    let updated = repo.update_checklist(&created.id, &replacement).unwrap();
    assert_eq!(updated.checklist.as_deref(), Some(&[][..]));
}

#[test]
fn test_update_checklist_absent_id_is_not_found() {
    let (_dir, repo) = setup();
    let err = repo.update_checklist("build-nope", &[]).unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[test]
fn test_list_returns_all_buildings() {
    let (_dir, repo) = setup();
    repo.create(new_building("Замок")).unwrap();
    repo.create(new_building("Маяк")).unwrap();

    let buildings = repo.list().unwrap();
    assert_eq!(buildings.len(), 2);
}
