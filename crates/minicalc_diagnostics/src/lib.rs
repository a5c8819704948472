//! Minicalc Diagnostics
//!
//! 统一的诊断系统，为 minicalc 求值器提供清晰、美观的问题报告。
//!
//! # 核心类型
//!
//! - [`Diagnostic`] - 诊断信息主体
//! - [`DiagnosticLevel`] - 诊断级别（Error/Warning/Info/Note）
//! - [`DiagnosticSink`] - 诊断收集器
//! - [`Emitter`] - 诊断输出器
//!
//! # 示例
//!
//! ```rust
//! use minicalc_diagnostics::{Diagnostic, DiagnosticSink, Emitter};
//!
//! let mut sink = DiagnosticSink::new();
//!
//! // 添加警告
//! sink.add(
//!     Diagnostic::warning("division by zero")
//!         .expression("5/0")
//!         .with_note("result defaults to 0")
//! );
//!
//! // 检查是否有错误
//! if sink.has_errors() {
//!     let emitter = Emitter::new();
//!     emitter.emit_all(sink.diagnostics());
//! }
//! ```

pub mod diagnostic;
pub mod emitter;
pub mod level;
pub mod sink;

// 重新导出核心类型
pub use diagnostic::Diagnostic;
pub use emitter::Emitter;
pub use level::DiagnosticLevel;
pub use sink::DiagnosticSink;
