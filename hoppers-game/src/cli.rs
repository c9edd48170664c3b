//! 命令行参数

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use hoppers_core::Side;

/// 跳棋（10×10 Hoppers）终端对局
#[derive(Parser, Debug)]
#[command(name = "hoppers")]
#[command(about = "Hoppers 跳棋：人机对弈与 AI 自我对弈", long_about = None)]
#[command(version)]
pub struct Cli {
    /// 配置文件路径（默认 <config_dir>/hoppers/config.json）
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 子命令
    #[command(subcommand)]
    pub command: Command,
}

/// 可用命令
#[derive(Subcommand, Debug)]
pub enum Command {
    /// AI 自我对弈，A 方先行
    Selfplay {
        /// 搜索深度（覆盖配置）
        #[arg(long)]
        depth: Option<u8>,

        /// 最大手数（覆盖配置）
        #[arg(long)]
        max_turns: Option<u32>,
    },

    /// 人机对弈，输入 `行 列 行 列` 走子
    Play {
        /// 人类执哪一方（覆盖配置）
        #[arg(long, value_enum)]
        human: Option<SideArg>,

        /// AI 搜索深度（覆盖配置）
        #[arg(long)]
        depth: Option<u8>,
    },
}

/// 命令行中的阵营
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideArg {
    A,
    B,
}

impl From<SideArg> for Side {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::A => Side::A,
            SideArg::B => Side::B,
        }
    }
}
