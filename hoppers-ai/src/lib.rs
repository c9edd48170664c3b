//! 跳棋 AI 引擎
//!
//! 包含:
//! - 局面评估函数
//! - Minimax + Alpha-Beta 搜索
//! - AI 难度配置

mod evaluate;
mod search;

pub use evaluate::Evaluator;
pub use search::{AiConfig, Difficulty, SearchEngine, SearchResult};
