// ==========================================
// ChecklistSaver - 清单去抖写入器
// ==========================================
// 策略: 编辑触发后等待静默期再整体落库；
//       静默期内再次编辑则废弃挂起写入、用最新快照重新计时
//       （覆盖式快照，不是补丁队列）
// 失败: 记日志后吞掉，不重试、不回滚内存状态
// ==========================================

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::api::error::ApiResult;
use crate::domain::{Building, ChecklistRow};

/// 清单保存边界
///
/// 接受 (建筑id, 完整清单快照)，整体替换已存清单。
/// 不存在行级更新协议。
pub trait ChecklistStore: Send + Sync {
    fn save_checklist(&self, building_id: &str, rows: &[ChecklistRow]) -> ApiResult<Building>;
}

/// 清单去抖写入器
pub struct ChecklistSaver {
    store: Arc<dyn ChecklistStore>,
    quiet_period: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl ChecklistSaver {
    /// 创建写入器
    ///
    /// # 参数
    /// - store: 保存边界实现
    /// - quiet_period: 静默期（配置项 save_debounce_ms）
    pub fn new(store: Arc<dyn ChecklistStore>, quiet_period: Duration) -> Self {
        Self {
            store,
            quiet_period,
            pending: Mutex::new(None),
        }
    }

    /// 调度一次去抖保存
    ///
    /// 携带编辑后的完整快照；挂起中的写入被废弃并重新计时。
    /// 必须在 tokio 运行时上下文内调用。
    pub fn schedule(&self, building_id: &str, rows: Vec<ChecklistRow>) {
        let store = Arc::clone(&self.store);
        let quiet_period = self.quiet_period;
        let building_id = building_id.to_string();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;

            // rusqlite 写入是同步的，移到阻塞线程池
            let result = tokio::task::spawn_blocking(move || {
                store.save_checklist(&building_id, &rows).map(|_| building_id)
            })
            .await;

            match result {
                Ok(Ok(building_id)) => {
                    tracing::debug!(building_id = %building_id, "清单快照已落库");
                }
                Ok(Err(err)) => {
                    // 保存失败对编辑会话非致命：内存状态仍是可见事实
                    tracing::warn!(error = %err, "清单保存失败，已忽略");
                }
                Err(err) => {
                    tracing::warn!(error = %err, "清单保存任务异常，已忽略");
                }
            }
        });

        let mut pending = match self.pending.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    /// 是否有写入挂起（测试/关闭流程用）
    pub fn has_pending(&self) -> bool {
        match self.pending.lock() {
            Ok(guard) => guard.as_ref().map(|h| !h.is_finished()).unwrap_or(false),
            Err(_) => false,
        }
    }
}
