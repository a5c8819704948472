//! 表达式解析
//!
//! 解析 `<int><operator><int>` 形式的两操作数表达式。
//!
//! 分割点策略：左操作数是前导的 `[符号]数字+` 前缀，
//! 遇到第一个非数字字符即停止；该字符是操作符，
//! 其后的剩余部分按同样的前缀规则解析为右操作数，
//! 尾部多余字节被忽略（与 C `strtol` 的行为一致）。

use crate::error::EvalError;

/// 解析后的两操作数表达式
///
/// 仅在单次求值调用内存在，不被存储
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExpr {
    pub lhs: i64,
    pub operator: char,
    pub rhs: i64,
}

/// 解析两操作数表达式
///
/// 整个表达式都是数字（没有操作符）时返回
/// [`EvalError::MissingOperator`]
pub fn parse_expression(expression: &str) -> Result<ParsedExpr, EvalError> {
    let split = split_point(expression);
    let Some(operator) = expression[split..].chars().next() else {
        return Err(EvalError::MissingOperator {
            expression: expression.to_string(),
        });
    };

    let lhs = leading_int(&expression[..split]);
    let rhs = leading_int(&expression[split + operator.len_utf8()..]);

    Ok(ParsedExpr { lhs, operator, rhs })
}

/// 计算分割点：左操作数前缀结束、操作符开始的位置
fn split_point(expression: &str) -> usize {
    let bytes = expression.as_bytes();
    let mut index = 0;

    // 前导符号只有紧跟数字时才属于左操作数
    if matches!(bytes.first(), Some(&(b'+' | b'-')))
        && bytes.get(1).is_some_and(|byte| byte.is_ascii_digit())
    {
        index = 1;
    }
    while index < bytes.len() && bytes[index].is_ascii_digit() {
        index += 1;
    }
    index
}

/// 解析字符串前缀中的整数（与区域设置无关）
///
/// 行为对齐 `strtol`：可选的前导符号、尽可能长的数字序列、
/// 没有数字时为 0、溢出时饱和到 i64 边界
fn leading_int(text: &str) -> i64 {
    let bytes = text.as_bytes();
    let mut index = 0;

    let negative = match bytes.first() {
        Some(&b'-') => {
            index = 1;
            true
        }
        Some(&b'+') => {
            index = 1;
            false
        }
        _ => false,
    };

    // 负数方向累加，i64::MIN 也能表示
    let mut value: i64 = 0;
    while index < bytes.len() && bytes[index].is_ascii_digit() {
        let digit = i64::from(bytes[index] - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
        index += 1;
    }
    value
}
