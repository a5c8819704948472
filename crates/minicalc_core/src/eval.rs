//! 表达式求值
//!
//! 解析表达式并分发到注册表中的运算。
//! 提供两个入口：
//!
//! - [`try_evaluate`] - 失败时返回明确的 [`EvalError`]，新调用方使用
//! - [`evaluate`] - 旧的哨兵值契约，所有失败折叠为 0
//!   （与合法结果 0 无法区分，保留仅为兼容）

use crate::error::EvalError;
use crate::parser::parse_expression;
use crate::registry::OperationRegistry;

/// 求值并返回明确的失败原因
pub fn try_evaluate(registry: &OperationRegistry, expression: &str) -> Result<i64, EvalError> {
    let parsed = parse_expression(expression)?;

    let operation = registry
        .lookup(parsed.operator)
        .ok_or_else(|| EvalError::UnknownOperator {
            symbol: parsed.operator,
            expression: expression.to_string(),
        })?;

    Ok(operation.apply(parsed.lhs, parsed.rhs))
}

/// 求值，失败时返回哨兵值 0
///
/// 失败不会改变注册表状态；相同输入的重复调用结果相同
pub fn evaluate(registry: &OperationRegistry, expression: &str) -> i64 {
    try_evaluate(registry, expression).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::register_builtins;

    fn builtin_registry() -> OperationRegistry {
        let mut registry = OperationRegistry::new();
        register_builtins(&mut registry);
        registry
    }

    #[test]
    fn test_evaluate_basic() {
        let registry = builtin_registry();

        assert_eq!(evaluate(&registry, "2+3"), 5);
        assert_eq!(evaluate(&registry, "3-2"), 1);
        assert_eq!(evaluate(&registry, "2*3"), 6);
        assert_eq!(evaluate(&registry, "6/3"), 2);
    }

    #[test]
    fn test_evaluate_division_by_zero() {
        let registry = builtin_registry();

        // 除以零：发出诊断并返回 0，不 panic
        assert_eq!(evaluate(&registry, "5/0"), 0);
    }

    #[test]
    fn test_evaluate_no_operator() {
        let registry = builtin_registry();
        assert_eq!(evaluate(&registry, "7"), 0);
        assert_eq!(evaluate(&registry, ""), 0);
    }

    #[test]
    fn test_evaluate_unknown_operator() {
        let registry = builtin_registry();
        assert_eq!(evaluate(&registry, "4^2"), 0);
    }

    #[test]
    fn test_evaluate_empty_registry() {
        let registry = OperationRegistry::new();
        assert_eq!(evaluate(&registry, "1+1"), 0);
    }

    #[test]
    fn test_evaluate_idempotent() {
        let registry = builtin_registry();

        let first = evaluate(&registry, "12*34");
        for _ in 0..3 {
            assert_eq!(evaluate(&registry, "12*34"), first);
        }
    }

    #[test]
    fn test_evaluate_signed_operands() {
        let registry = builtin_registry();

        assert_eq!(evaluate(&registry, "-2+3"), 1);
        assert_eq!(evaluate(&registry, "2+-3"), -1);
    }

    #[test]
    fn test_try_evaluate_errors() {
        let registry = builtin_registry();

        assert_eq!(try_evaluate(&registry, "2+3"), Ok(5));
        assert_eq!(
            try_evaluate(&registry, "7"),
            Err(EvalError::MissingOperator {
                expression: "7".to_string()
            })
        );
        assert_eq!(
            try_evaluate(&registry, "4^2"),
            Err(EvalError::UnknownOperator {
                symbol: '^',
                expression: "4^2".to_string()
            })
        );
    }
}
