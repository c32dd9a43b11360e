// ==========================================
// 建筑材料清单系统 - Tauri 主入口
// ==========================================
// 技术栈: Tauri + Rust + SQLite
// ==========================================

// 禁止控制台窗口 (Windows)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(feature = "tauri-app")]
fn main() {
    use build_checklist::app::tauri_commands::*;
    use build_checklist::app::{get_default_db_path, AppState};

    // 初始化日志系统
    build_checklist::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", build_checklist::APP_NAME);
    tracing::info!("系统版本: {}", build_checklist::VERSION);
    tracing::info!("==================================================");

    // 获取数据库路径
    let db_path = get_default_db_path();
    tracing::info!("使用数据库: {}", db_path);

    // 创建AppState
    let app_state = AppState::new(db_path).expect("无法初始化AppState");
    tracing::info!("AppState初始化成功");

    // 启动Tauri应用
    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // 建筑相关命令
            create_building,
            list_buildings,
            get_building,
            // 清单相关命令
            open_checklist,
            toggle_gathered,
            update_gathered_by,
            // 语言设置命令
            get_app_locale,
            set_app_locale,
        ])
        .run(tauri::generate_context!())
        .expect("启动Tauri应用失败");

    tracing::info!("Tauri应用已退出");
}

#[cfg(not(feature = "tauri-app"))]
fn main() {
    println!("==================================================");
    println!("{}", build_checklist::APP_NAME);
    println!("系统版本: {}", build_checklist::VERSION);
    println!("==================================================");
    println!();
    println!("此可执行文件需要启用 tauri-app 特性");
    println!("使用: cargo run --features tauri-app");
    println!();
    println!("或者使用库模式:");
    println!("use build_checklist::app::AppState;");
}
