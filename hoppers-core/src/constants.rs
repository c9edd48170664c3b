//! 规则常量定义

/// 棋盘边长（行数 = 列数）
pub const BOARD_SIZE: usize = 10;

/// 棋盘格子总数
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 每方棋子数
pub const PIECES_PER_SIDE: usize = 15;

/// 出发三角的边长（第 0 行 5 子，逐行递减）
pub const TRIANGLE_SIZE: usize = 5;

/// 跳跃搜索的八个方向 (行偏移, 列偏移)
///
/// 顺序固定：上、右上、右、右下、下、左下、左、左上。
/// 跳跃路径搜索按此顺序展开，返回第一条找到的路径。
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// 分数上限（胜局）
pub const WIN_SCORE: f64 = f64::INFINITY;

/// 分数下限（负局）
pub const LOSS_SCORE: f64 = f64::NEG_INFINITY;
