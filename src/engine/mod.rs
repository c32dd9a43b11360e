// ==========================================
// 建筑材料清单系统 - 引擎层
// ==========================================
// 职责: 库存单位换算 + 清单初始化/合并/变更规则
// 红线: 纯计算，无 I/O，无共享可变状态
// ==========================================

pub mod checklist;
pub mod conversion;

// 重导出
pub use checklist::{
    compute_totals, effective_checklist, init_checklist, toggle_gathered, update_gathered_by,
};
pub use conversion::{to_shulkers, to_stacks, SHULKER_STACKS, STACK_SIZE};
