use anyhow::Result;
use clap::{Parser, Subcommand};
use minicalc_core::{evaluate, register_builtins, try_evaluate, OperationRegistry};
use minicalc_diagnostics::Emitter;

#[derive(Parser)]
#[command(name = "minicalc")]
#[command(about = "minicalc 求值器 - 两操作数整数表达式", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 求值表达式，输出 <表达式>= <结果>
    Eval {
        /// 表达式，形如 2+3
        expressions: Vec<String>,

        /// 严格模式：解析失败或操作符未注册时报错退出
        #[arg(long)]
        strict: bool,
    },

    /// 运行内置演示序列
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Eval {
            expressions,
            strict,
        } => cmd_eval(&expressions, strict),
        Commands::Demo => cmd_demo(),
    }

    Ok(())
}

/// 构建带全部内置运算的注册表
fn builtin_registry() -> OperationRegistry {
    let mut registry = OperationRegistry::new();
    register_builtins(&mut registry);
    registry
}

/// 求值命令
fn cmd_eval(expressions: &[String], strict: bool) {
    let registry = builtin_registry();
    let emitter = Emitter::new();
    let mut failed = false;

    for expression in expressions {
        if strict {
            match try_evaluate(&registry, expression) {
                Ok(result) => println!("{}= {}", expression, result),
                Err(error) => {
                    emitter.emit(&error.to_diagnostic());
                    failed = true;
                }
            }
        } else {
            // 旧的哨兵值契约：失败一律输出 0
            println!("{}= {}", expression, evaluate(&registry, expression));
        }
    }

    if failed {
        std::process::exit(1);
    }
}

/// 演示命令
fn cmd_demo() {
    let registry = builtin_registry();

    for expression in ["2+3", "2*3", "6/3", "3-2"] {
        println!("{}= {}", expression, evaluate(&registry, expression));
    }
}
