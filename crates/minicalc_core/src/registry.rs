//! 操作注册表
//!
//! 使用 HashMap 集中管理操作符到二元运算的映射，
//! 每个操作符只能注册一次

use std::collections::HashMap;

/// 二元整数运算接口
///
/// 任何 `Fn(i64, i64) -> i64` 都自动实现该接口，
/// 因此普通函数可以直接注册
pub trait BinaryOperation {
    /// 对两个操作数执行运算
    fn apply(&self, lhs: i64, rhs: i64) -> i64;
}

impl<F> BinaryOperation for F
where
    F: Fn(i64, i64) -> i64,
{
    fn apply(&self, lhs: i64, rhs: i64) -> i64 {
        self(lhs, rhs)
    }
}

/// 操作注册表
///
/// 集中管理所有操作符到运算的关联。
/// 不变量：同一个操作符最多只有一个条目
pub struct OperationRegistry {
    // 操作符 -> 运算: '+' -> add
    operations: HashMap<char, Box<dyn BinaryOperation>>,
}

impl OperationRegistry {
    /// 创建空的注册表
    pub fn new() -> Self {
        Self {
            operations: HashMap::new(),
        }
    }

    /// 注册一个操作
    ///
    /// 操作符已注册时返回 `false`，且不覆盖已有条目
    ///
    /// # Examples
    ///
    /// ```
    /// use minicalc_core::registry::OperationRegistry;
    ///
    /// let mut registry = OperationRegistry::new();
    /// assert!(registry.register('+', |a: i64, b: i64| a + b));
    /// assert!(!registry.register('+', |a: i64, b: i64| a - b));
    /// ```
    pub fn register(&mut self, symbol: char, operation: impl BinaryOperation + 'static) -> bool {
        if self.operations.contains_key(&symbol) {
            return false;
        }
        self.operations.insert(symbol, Box::new(operation));
        true
    }

    /// 根据操作符查找运算
    pub fn lookup(&self, symbol: char) -> Option<&dyn BinaryOperation> {
        self.operations.get(&symbol).map(|operation| operation.as_ref())
    }

    /// 获取已注册的操作数量
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_registry() {
        let registry = OperationRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = OperationRegistry::new();
        assert!(registry.register('+', |a: i64, b: i64| a + b));

        let operation = registry.lookup('+').unwrap();
        assert_eq!(operation.apply(2, 3), 5);

        assert!(registry.lookup('^').is_none());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = OperationRegistry::new();
        assert!(registry.register('+', |a: i64, b: i64| a + b));

        // 重复注册失败，第一次注册的运算保持不变
        assert!(!registry.register('+', |a: i64, b: i64| a - b));
        assert_eq!(registry.lookup('+').unwrap().apply(2, 3), 5);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_plain_function_registration() {
        fn double_sum(a: i64, b: i64) -> i64 {
            (a + b) * 2
        }

        let mut registry = OperationRegistry::new();
        assert!(registry.register('#', double_sum));
        assert_eq!(registry.lookup('#').unwrap().apply(1, 2), 6);
    }
}
