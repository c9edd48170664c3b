//! 错误类型定义

use thiserror::Error;

use crate::piece::{Cell, Side};

/// 跳棋规则错误
///
/// 所有错误都可在本地恢复，不会跨越 API 边界导致进程退出。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HoppersError {
    /// 起点没有棋子
    #[error("No piece at {cell}")]
    EmptySource { cell: Cell },

    /// 起点棋子不属于走子方
    #[error("Piece at {cell} belongs to side {found}, not {expected}")]
    WrongOwner {
        cell: Cell,
        expected: Side,
        found: Side,
    },

    /// 目标不可达（既不是相邻空格，也没有跳跃路径）
    #[error("Illegal destination: no path from {from} to {to}")]
    IllegalDestination { from: Cell, to: Cell },

    /// 坐标越界
    #[error("Coordinate out of bounds: ({row}, {col})")]
    OutOfBounds { row: i32, col: i32 },

    /// 无效参数
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// 无效的棋盘布局字符串
    #[error("Invalid layout string: {reason}")]
    InvalidLayout { reason: String },

    /// 走子方没有任何合法走法
    #[error("Side {side} has no legal moves")]
    NoLegalMoves { side: Side },

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,

    /// 搜索被取消
    #[error("Search was cancelled")]
    Cancelled,
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, HoppersError>;
