//! 阵营、格子与目标区定义

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT, PIECES_PER_SIDE, TRIANGLE_SIZE};
use crate::error::{HoppersError, Result};

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// A 方（先手，从左上角出发）
    A,
    /// B 方（后手，从右下角出发）
    B,
}

impl Side {
    /// 获取对方阵营
    pub fn opponent(&self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// 出发三角（本方初始 15 子所在区域）
    pub fn home_zone(&self) -> &'static [Cell; PIECES_PER_SIDE] {
        match self {
            Side::A => &HOME_A,
            Side::B => &HOME_B,
        }
    }

    /// 目标区（对方的出发三角）
    pub fn goal_zone(&self) -> &'static [Cell; PIECES_PER_SIDE] {
        self.opponent().home_zone()
    }

    /// 评估时使用的参考角（目标区最深处）
    pub fn target_corner(&self) -> Cell {
        match self {
            Side::A => Cell::new_unchecked(BOARD_SIZE as u8 - 1, BOARD_SIZE as u8 - 1),
            Side::B => Cell::new_unchecked(0, 0),
        }
    }

    /// 布局字符（A 方 'a'，B 方 'b'）
    pub fn to_layout_char(&self) -> char {
        match self {
            Side::A => 'a',
            Side::B => 'b',
        }
    }

    /// 从布局字符解析（大小写均可）
    pub fn from_layout_char(c: char) -> Option<Side> {
        match c {
            'a' | 'A' => Some(Side::A),
            'b' | 'B' => Some(Side::B),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// 棋盘格子 (行, 列)
///
/// 只能通过带边界检查的构造函数创建，因此任何 `Cell` 都在棋盘内。
/// 排序即行优先扫描顺序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// 创建新格子，越界返回 None
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// 从任意整数坐标创建格子，越界返回 `OutOfBounds`
    pub fn try_new(row: i32, col: i32) -> Result<Self> {
        if in_bounds(row, col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(HoppersError::OutOfBounds { row, col })
        }
    }

    /// 创建新格子（不检查边界，内部使用）
    pub(crate) const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 行 (0-9)
    pub fn row(&self) -> u8 {
        self.row
    }

    /// 列 (0-9)
    pub fn col(&self) -> u8 {
        self.col
    }

    /// 获取偏移后的格子
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Cell> {
        let row = self.row as i32 + dr as i32;
        let col = self.col as i32 + dc as i32;
        Self::try_new(row, col).ok()
    }

    /// 切比雪夫距离（八方向步数）
    pub fn chebyshev(&self, other: Cell) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// 是否与另一格相邻（八方向，不含自身）
    pub fn is_adjacent(&self, other: Cell) -> bool {
        self.chebyshev(other) == 1
    }

    /// 欧几里得距离
    pub fn distance(&self, other: Cell) -> f64 {
        let dr = self.row as f64 - other.row as f64;
        let dc = self.col as f64 - other.col as f64;
        (dr * dr + dc * dc).sqrt()
    }

    /// 关于棋盘中心的点对称格子
    pub fn mirrored(&self) -> Cell {
        let max = BOARD_SIZE as u8 - 1;
        Cell::new_unchecked(max - self.row, max - self.col)
    }

    /// 转换为数组索引
    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self::new_unchecked(
                (index / BOARD_SIZE) as u8,
                (index % BOARD_SIZE) as u8,
            ))
        } else {
            None
        }
    }

    /// 按行优先顺序遍历全部格子
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).filter_map(Cell::from_index)
    }
}

impl TryFrom<(u8, u8)> for Cell {
    type Error = HoppersError;

    fn try_from((row, col): (u8, u8)) -> Result<Self> {
        Self::try_new(row as i32, col as i32)
    }
}

impl From<Cell> for (u8, u8) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 坐标是否在棋盘内
pub fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

/// 生成角落三角（行优先顺序）
const fn triangle(bottom_right: bool) -> [Cell; PIECES_PER_SIDE] {
    let far = 2 * (BOARD_SIZE - 1) - (TRIANGLE_SIZE - 1);
    let mut cells = [Cell::new_unchecked(0, 0); PIECES_PER_SIDE];
    let mut i = 0;
    let mut row = 0;
    while row < BOARD_SIZE {
        let mut col = 0;
        while col < BOARD_SIZE {
            let inside = if bottom_right {
                row + col >= far
            } else {
                row + col < TRIANGLE_SIZE
            };
            if inside {
                cells[i] = Cell::new_unchecked(row as u8, col as u8);
                i += 1;
            }
            col += 1;
        }
        row += 1;
    }
    cells
}

/// A 方出发三角（左上角，行 + 列 <= 4）
static HOME_A: [Cell; PIECES_PER_SIDE] = triangle(false);

/// B 方出发三角（右下角，行 + 列 >= 14）
static HOME_B: [Cell; PIECES_PER_SIDE] = triangle(true);
