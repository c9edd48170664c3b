//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT};
use crate::error::{HoppersError, Result};
use crate::piece::{in_bounds, Cell, Side};

/// 只读的 10x10 棋盘快照（供界面渲染）
pub type Snapshot = [[Option<Side>; BOARD_SIZE]; BOARD_SIZE];

/// 棋盘
///
/// 纯数据：只负责存储和带边界检查的读写，不做任何规则校验。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardCells", into = "BoardCells")]
pub struct Board {
    /// 10x10 棋盘，索引为 row * 10 + col，长度恒为 100
    cells: Vec<Option<Side>>,
}

/// 序列化形式，反序列化时校验格子数
#[derive(Serialize, Deserialize)]
struct BoardCells {
    cells: Vec<Option<Side>>,
}

impl TryFrom<BoardCells> for Board {
    type Error = HoppersError;

    fn try_from(value: BoardCells) -> Result<Self> {
        if value.cells.len() != CELL_COUNT {
            return Err(HoppersError::InvalidLayout {
                reason: format!("Expected {} cells, got {}", CELL_COUNT, value.cells.len()),
            });
        }
        Ok(Self { cells: value.cells })
    }
}

impl From<Board> for BoardCells {
    fn from(board: Board) -> Self {
        Self { cells: board.cells }
    }
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            cells: vec![None; CELL_COUNT],
        }
    }

    /// 创建初始棋盘：双方各 15 子位于各自的出发三角
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for side in [Side::A, Side::B] {
            for &cell in side.home_zone() {
                board.set(cell, Some(side));
            }
        }
        board
    }

    /// 获取指定格子的棋子
    pub fn get(&self, cell: Cell) -> Option<Side> {
        self.cells[cell.to_index()]
    }

    /// 按整数坐标读取，越界返回 `OutOfBounds`
    pub fn get_at(&self, row: i32, col: i32) -> Result<Option<Side>> {
        Cell::try_new(row, col).map(|cell| self.get(cell))
    }

    /// 设置指定格子的棋子
    pub fn set(&mut self, cell: Cell, side: Option<Side>) {
        self.cells[cell.to_index()] = side;
    }

    /// 按整数坐标写入，越界返回 `OutOfBounds`
    pub fn set_at(&mut self, row: i32, col: i32, side: Option<Side>) -> Result<()> {
        let cell = Cell::try_new(row, col)?;
        self.set(cell, side);
        Ok(())
    }

    /// 坐标是否在棋盘内
    pub fn in_bounds(row: i32, col: i32) -> bool {
        in_bounds(row, col)
    }

    /// 格子是否为空
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell).is_none()
    }

    /// 移动棋子（不检查规则）
    pub fn move_piece(&mut self, from: Cell, to: Cell) {
        let side = self.get(from);
        self.set(from, None);
        self.set(to, side);
    }

    /// 获取指定阵营的所有棋子位置（行优先顺序）
    pub fn pieces_of(&self, side: Side) -> Vec<Cell> {
        Cell::all().filter(|&cell| self.get(cell) == Some(side)).collect()
    }

    /// 所有空格（行优先顺序）
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::all().filter(|&cell| self.is_empty(cell)).collect()
    }

    /// 指定阵营的棋子数
    pub fn count(&self, side: Side) -> usize {
        self.cells.iter().filter(|&&c| c == Some(side)).count()
    }

    /// 指定阵营是否已占满自己的目标区
    pub fn fills_goal(&self, side: Side) -> bool {
        side.goal_zone().iter().all(|&cell| self.get(cell) == Some(side))
    }

    /// 胜负判定：A 方先判
    pub fn winner(&self) -> Option<Side> {
        if self.fills_goal(Side::A) {
            Some(Side::A)
        } else if self.fills_goal(Side::B) {
            Some(Side::B)
        } else {
            None
        }
    }

    /// 点对称镜像，同时交换双方棋子
    pub fn mirrored(&self) -> Board {
        let mut board = Board::empty();
        for cell in Cell::all() {
            board.set(cell.mirrored(), self.get(cell).map(|side| side.opponent()));
        }
        board
    }

    /// 生成只读快照
    pub fn snapshot(&self) -> Snapshot {
        let mut grid = [[None; BOARD_SIZE]; BOARD_SIZE];
        for cell in Cell::all() {
            grid[cell.row() as usize][cell.col() as usize] = self.get(cell);
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{} ", row)?;
            for col in 0..BOARD_SIZE {
                let c = match self.cells[row * BOARD_SIZE + col] {
                    Some(side) => side.to_layout_char().to_ascii_uppercase(),
                    None => '.',
                };
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PIECES_PER_SIDE;

    fn cell(row: u8, col: u8) -> Cell {
        Cell::new(row, col).unwrap()
    }

    #[test]
    fn test_initial_board() {
        let board = Board::initial();

        assert_eq!(board.count(Side::A), PIECES_PER_SIDE);
        assert_eq!(board.count(Side::B), PIECES_PER_SIDE);
        assert_eq!(board.empty_cells().len(), 70);

        assert_eq!(board.get(cell(0, 0)), Some(Side::A));
        assert_eq!(board.get(cell(4, 0)), Some(Side::A));
        assert_eq!(board.get(cell(0, 5)), None);
        assert_eq!(board.get(cell(5, 9)), Some(Side::B));
        assert_eq!(board.get(cell(9, 5)), Some(Side::B));
        assert_eq!(board.get(cell(9, 4)), None);
    }

    #[test]
    fn test_pieces_of_row_major() {
        let board = Board::initial();
        let pieces = board.pieces_of(Side::A);
        assert_eq!(pieces.len(), PIECES_PER_SIDE);
        assert_eq!(pieces.first(), Some(&cell(0, 0)));
        assert_eq!(pieces.last(), Some(&cell(4, 0)));
        assert!(pieces.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_move_piece() {
        let mut board = Board::initial();
        board.move_piece(cell(4, 0), cell(5, 0));

        assert!(board.is_empty(cell(4, 0)));
        assert_eq!(board.get(cell(5, 0)), Some(Side::A));
        assert_eq!(board.count(Side::A), PIECES_PER_SIDE);
    }

    #[test]
    fn test_get_at_out_of_bounds() {
        let mut board = Board::initial();
        assert_eq!(board.get_at(0, 0), Ok(Some(Side::A)));
        assert_eq!(
            board.get_at(10, 0),
            Err(HoppersError::OutOfBounds { row: 10, col: 0 })
        );
        assert_eq!(
            board.set_at(0, -1, None),
            Err(HoppersError::OutOfBounds { row: 0, col: -1 })
        );
        assert!(Board::in_bounds(9, 9));
        assert!(!Board::in_bounds(-1, 9));
    }

    #[test]
    fn test_clone_is_independent() {
        let board = Board::initial();
        let mut copy = board.clone();
        copy.move_piece(cell(4, 0), cell(5, 0));
        assert_ne!(board, copy);
        assert_eq!(board.get(cell(4, 0)), Some(Side::A));
    }

    #[test]
    fn test_winner() {
        let board = Board::initial();
        assert_eq!(board.winner(), None);

        let mut a_wins = Board::empty();
        for &c in Side::A.goal_zone() {
            a_wins.set(c, Some(Side::A));
        }
        assert_eq!(a_wins.winner(), Some(Side::A));

        // 目标区混有对方棋子不算胜利
        let mut mixed = a_wins.clone();
        mixed.set(cell(9, 9), Some(Side::B));
        assert_eq!(mixed.winner(), None);
    }

    #[test]
    fn test_winner_swapped_formation() {
        let mut board = Board::empty();
        for &c in Side::A.home_zone() {
            board.set(c, Some(Side::B));
        }
        for &c in Side::B.home_zone() {
            board.set(c, Some(Side::A));
        }
        // 双方同时到位时 A 方先判
        assert_eq!(board.winner(), Some(Side::A));
        assert!(board.fills_goal(Side::B));
    }

    #[test]
    fn test_mirrored() {
        let board = Board::initial();
        assert_eq!(board.mirrored(), board);

        let mut moved = board.clone();
        moved.move_piece(cell(4, 0), cell(5, 0));
        let mirror = moved.mirrored();
        assert_eq!(mirror.get(cell(4, 9)), Some(Side::B));
        assert_eq!(mirror.get(cell(5, 9)), None);
        assert_eq!(mirror.mirrored(), moved);
    }

    #[test]
    fn test_snapshot() {
        let board = Board::initial();
        let grid = board.snapshot();
        assert_eq!(grid[0][4], Some(Side::A));
        assert_eq!(grid[5][9], Some(Side::B));
        assert_eq!(grid[5][5], None);
    }

    #[test]
    fn test_display() {
        let text = Board::initial().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), BOARD_SIZE + 1);
        assert_eq!(lines[1], "0  A A A A A . . . . .");
        assert_eq!(lines[10], "9  . . . . . B B B B B");
    }

    #[test]
    fn test_serde_checks_cell_count() {
        let board = Board::initial();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);

        assert!(serde_json::from_str::<Board>(r#"{"cells":[]}"#).is_err());
        let short = format!(r#"{{"cells":[{}]}}"#, vec!["null"; 99].join(","));
        assert!(serde_json::from_str::<Board>(&short).is_err());
    }
}
