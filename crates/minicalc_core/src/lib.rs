//! Minicalc Core
//!
//! 两操作数整数表达式求值器的核心逻辑：
//! 操作注册表 + 表达式解析与分发。
//!
//! # 核心类型
//!
//! - [`OperationRegistry`] - 操作符到二元运算的注册表
//! - [`BinaryOperation`] - 二元整数运算接口
//! - [`evaluate`] / [`try_evaluate`] - 表达式求值入口
//!
//! # 示例
//!
//! ```rust
//! use minicalc_core::{evaluate, register_builtins, OperationRegistry};
//!
//! let mut registry = OperationRegistry::new();
//! register_builtins(&mut registry);
//!
//! assert_eq!(evaluate(&registry, "2+3"), 5);
//! assert_eq!(evaluate(&registry, "6/3"), 2);
//! ```

pub mod error;
pub mod eval;
pub mod ops;
pub mod parser;
pub mod registry;

// 重新导出核心类型
pub use error::{EvalError, EvalResult};
pub use eval::{evaluate, try_evaluate};
pub use ops::{add, divide, multiply, register_builtins, subtract};
pub use parser::{parse_expression, ParsedExpr};
pub use registry::{BinaryOperation, OperationRegistry};
