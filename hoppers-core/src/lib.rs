//! 跳棋（Hoppers）规则库
//!
//! 包含:
//! - 阵营、格子、目标区等核心数据结构
//! - 棋盘存储与布局字符串
//! - 跳跃路径搜索
//! - 走法生成

mod board;
mod constants;
mod error;
mod jump;
mod layout;
mod moves;
mod piece;

pub use board::{Board, Snapshot};
pub use constants::*;
pub use error::{HoppersError, Result};
pub use jump::{JumpPathFinder, MovePath};
pub use layout::{Layout, INITIAL_LAYOUT};
pub use moves::{Move, MoveGenerator, Successor};
pub use piece::{in_bounds, Cell, Side};
