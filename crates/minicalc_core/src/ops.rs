//! 内置运算
//!
//! 四个纯函数形式的二元整数运算，
//! 以及把它们批量装入注册表的辅助函数。
//! 算术统一按补码回绕，避免极端输入导致 panic。

use crate::registry::OperationRegistry;
use minicalc_diagnostics::{Diagnostic, Emitter};

/// 加法
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// 减法
pub fn subtract(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

/// 乘法
pub fn multiply(a: i64, b: i64) -> i64 {
    a.wrapping_mul(b)
}

/// 除法（向零截断）
///
/// 除以零是可报告但不致命的情况：
/// 发出警告诊断并返回 0，不向调用方传播错误
pub fn divide(a: i64, b: i64) -> i64 {
    if b == 0 {
        Emitter::new().emit(
            &Diagnostic::warning("division by zero")
                .expression(format!("{}/{}", a, b))
                .with_note("result defaults to 0"),
        );
        return 0;
    }
    a.wrapping_div(b)
}

/// 注册全部内置运算
///
/// 操作符依次为 `+`、`*`、`-`、`/`
pub fn register_builtins(registry: &mut OperationRegistry) {
    registry.register('+', add);
    registry.register('*', multiply);
    registry.register('-', subtract);
    registry.register('/', divide);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(subtract(3, 2), 1);
        assert_eq!(multiply(2, 3), 6);
        assert_eq!(divide(6, 3), 2);
    }

    #[test]
    fn test_division_truncates() {
        assert_eq!(divide(7, 2), 3);
        assert_eq!(divide(-7, 2), -3);
        assert_eq!(divide(7, -2), -3);
    }

    #[test]
    fn test_division_by_zero() {
        // 发出诊断并返回 0，不 panic
        assert_eq!(divide(5, 0), 0);
        assert_eq!(divide(0, 0), 0);
    }

    #[test]
    fn test_wrapping_edges() {
        assert_eq!(add(i64::MAX, 1), i64::MIN);
        assert_eq!(divide(i64::MIN, -1), i64::MIN);
    }

    #[test]
    fn test_register_builtins() {
        let mut registry = OperationRegistry::new();
        register_builtins(&mut registry);

        assert_eq!(registry.len(), 4);
        for symbol in ['+', '-', '*', '/'] {
            assert!(registry.lookup(symbol).is_some());
        }
    }
}
