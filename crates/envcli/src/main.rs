mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envcli")]
#[command(
    about = "CLIコマンドを対応するDockerコンテナ内で実行します",
    long_about = None
)]
struct Cli {
    /// ログレベル (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info", env = "ENVCLI_LOGLEVEL")]
    loglevel: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// コマンドを対応するコンテナ内で実行
    Run {
        /// 追加で読み込む設定ファイル（複数指定可、指定順にマージ）
        #[arg(short = 'i', long = "include")]
        includes: Vec<PathBuf>,
        /// 実行するコマンド名
        command: String,
        /// コマンドに渡す引数
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// ユーザー設定 (.envclirc) を管理
    #[command(subcommand)]
    Config(ConfigCommands),
    /// バージョン情報を表示
    Version,
}

/// ユーザー設定のサブコマンド
#[derive(Subcommand)]
enum ConfigCommands {
    /// 値を表示
    Get {
        /// プロパティ名
        key: String,
    },
    /// 値を設定
    Set {
        /// プロパティ名
        key: String,
        /// 値
        value: String,
    },
    /// 値を消去
    Unset {
        /// プロパティ名
        key: String,
    },
    /// 全プロパティを表示
    List,
}

fn init_tracing(loglevel: &str) {
    let level = loglevel
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.loglevel);

    match cli.command {
        Commands::Run {
            includes,
            command,
            args,
        } => {
            let exit_code = commands::run::handle(command, args, includes).await?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Get { key } => commands::config::handle_get(&key)?,
            ConfigCommands::Set { key, value } => commands::config::handle_set(&key, &value)?,
            ConfigCommands::Unset { key } => commands::config::handle_unset(&key)?,
            ConfigCommands::List => commands::config::handle_list()?,
        },
        Commands::Version => {
            println!("envcli {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
