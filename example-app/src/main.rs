//! # 表示层应用程序
//!
//! 按名称装配业务逻辑组件并输出计算结果

use anyhow::Context;
use clap::{Parser, Subcommand};
use infrastructure_common::BusinessLogic;
use infrastructure_composition::{render_result, LoggingConfig, WiredApplication, WiringBuilder};
use std::path::PathBuf;
use tracing::info;
use wiring_components::{DaoImplV2, MetierImpl};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "pres")]
#[command(about = "按名称装配组件并输出计算结果")]
struct Args {
    /// 日志级别
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// 使用 JSON 格式输出日志
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

/// 装配方式
#[derive(Subcommand, Debug)]
enum Command {
    /// 直接在代码中创建并注入组件
    Manual,
    /// 从两行文本文件读取组件名称
    Text {
        /// 描述符文件路径
        #[arg(short, long, default_value = "config/config.txt")]
        config: PathBuf,
    },
    /// 从环境变量读取组件名称
    Env {
        /// 环境变量前缀
        #[arg(short, long, default_value = "PRES")]
        prefix: String,
    },
    /// 扫描模块路径下登记的组件
    Annotation {
        /// 模块路径
        #[arg(short, long, default_value = wiring_components::BASE_PATH)]
        package: String,
    },
    /// 从 TOML 或 JSON 容器定义装配
    Declarative {
        /// 容器定义文件路径
        #[arg(short, long, default_value = "config/container.toml")]
        definition: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let logging = LoggingConfig::default()
        .with_level(parse_log_level(&args.log_level))
        .with_json_format(args.log_json);

    let output = match args.command {
        Command::Manual => {
            logging.initialize()?;
            info!("手动装配: DaoImplV2 -> MetierImpl");
            let metier = MetierImpl::new(Box::new(DaoImplV2::new()));
            render_result(metier.calcul())
        }
        Command::Text { config } => {
            let app = wire(
                WiringBuilder::new().from_text_file(&config).with_logging(logging),
            )
            .await
            .with_context(|| format!("无法按文本描述符装配: {}", config.display()))?;
            app.render()
        }
        Command::Env { prefix } => {
            let app = wire(WiringBuilder::new().from_env(prefix.as_str()).with_logging(logging))
                .await
                .with_context(|| format!("无法按环境变量装配，前缀: {}", prefix))?;
            app.render()
        }
        Command::Annotation { package } => {
            let app = wire(
                WiringBuilder::new().scan_package(package.as_str()).with_logging(logging),
            )
            .await
            .with_context(|| format!("无法按组件目录装配: {}", package))?;
            app.render()
        }
        Command::Declarative { definition } => {
            let app = wire(
                WiringBuilder::new()
                    .from_definition_file(&definition)
                    .with_logging(logging),
            )
            .await
            .with_context(|| format!("无法按容器定义装配: {}", definition.display()))?;
            app.render()
        }
    };

    println!("{}", output);
    Ok(())
}

/// 构建并记录装配结果
async fn wire(builder: WiringBuilder) -> anyhow::Result<WiredApplication> {
    let app = builder.build().await?;
    info!("已装配 {} ({})", app.descriptor(), app.strategy());
    Ok(app)
}

fn parse_log_level(level: &str) -> tracing::Level {
    match level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::WARN,
    }
}
