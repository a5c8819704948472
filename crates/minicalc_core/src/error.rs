//! Evaluation Error Types
//!
//! 求值错误定义，集成统一诊断系统。
//! 旧接口 [`crate::evaluate`] 把所有失败折叠为 0，
//! 新调用方应使用 [`crate::try_evaluate`] 获得明确的失败原因。

use minicalc_diagnostics::Diagnostic;
use thiserror::Error;

/// 求值错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// 表达式中没有操作符
    #[error("no operator found in expression '{expression}'")]
    MissingOperator { expression: String },

    /// 操作符未注册
    #[error("unknown operator '{symbol}'")]
    UnknownOperator { symbol: char, expression: String },
}

impl EvalError {
    /// 转换为诊断信息
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::MissingOperator { expression } => {
                Diagnostic::error("no operator found")
                    .expression(expression.clone())
                    .with_note("expected the form <int><operator><int>")
            }
            Self::UnknownOperator { symbol, expression } => {
                Diagnostic::error(format!("unknown operator '{}'", symbol))
                    .expression(expression.clone())
                    .with_note("register the operator before evaluating")
            }
        }
    }
}

/// 求值结果类型
pub type EvalResult<T> = Result<T, EvalError>;
