//! 跳棋对局层
//!
//! 包含:
//! - 对局控制
//! - 游戏配置
//! - 命令行参数
//! - 终端对局流程

pub mod cli;
pub mod config;
pub mod game;
pub mod session;

pub use config::{ConfigError, GameConfig};
pub use game::{GameController, GameStatus};
pub use session::{parse_input, run_interactive, run_selfplay, Input};
