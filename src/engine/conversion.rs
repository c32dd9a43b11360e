// ==========================================
// 建筑材料清单系统 - 库存单位换算
// ==========================================
// Minecraft 库存语义: 1 组 = 64 方块, 1 潜影盒 = 27 组
// 领域常量，不提供配置项
// ==========================================

/// 一组的方块数
pub const STACK_SIZE: f64 = 64.0;

/// 一个潜影盒的组数
pub const SHULKER_STACKS: f64 = 27.0;

/// 方块数折合组数
///
/// 真实除法，不取整 —— 小数位截断属于展示层职责
pub fn to_stacks(total: f64) -> f64 {
    total / STACK_SIZE
}

/// 方块数折合潜影盒数
pub fn to_shulkers(total: f64) -> f64 {
    total / (SHULKER_STACKS * STACK_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_stacks() {
        assert_eq!(to_stacks(64.0), 1.0);
        assert_eq!(to_stacks(32.0), 0.5);
        assert_eq!(to_stacks(0.0), 0.0);
    }

    #[test]
    fn test_to_shulkers() {
        // 1728 = 27 × 64
        assert_eq!(to_shulkers(1728.0), 1.0);
        assert_eq!(to_shulkers(864.0), 0.5);
    }
}
