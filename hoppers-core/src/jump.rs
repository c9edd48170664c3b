//! 跳跃路径搜索
//!
//! 棋子可以越过相邻的任意棋子（不分敌我），落在同方向再远一格的空格上，
//! 并可在落点继续朝任意方向连跳。

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::{CELL_COUNT, DIRECTIONS};
use crate::error::HoppersError;
use crate::piece::Cell;

/// 走子路径：首格为起点，末格为终点，至少两格
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct MovePath(Vec<Cell>);

impl TryFrom<Vec<Cell>> for MovePath {
    type Error = HoppersError;

    fn try_from(cells: Vec<Cell>) -> Result<Self, Self::Error> {
        if cells.len() < 2 {
            return Err(HoppersError::InvalidArgument {
                reason: format!("Move path needs at least 2 cells, got {}", cells.len()),
            });
        }
        Ok(Self(cells))
    }
}

impl From<MovePath> for Vec<Cell> {
    fn from(path: MovePath) -> Self {
        path.0
    }
}

impl MovePath {
    /// 途经的全部格子
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    /// 起点
    pub fn source(&self) -> Cell {
        self.0[0]
    }

    /// 终点
    pub fn destination(&self) -> Cell {
        self.0[self.0.len() - 1]
    }

    /// 路径格数
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 路径至少两格，恒为 false
    pub fn is_empty(&self) -> bool {
        false
    }

    /// 是否为单步移动
    pub fn is_step(&self) -> bool {
        self.0.len() == 2 && self.source().is_adjacent(self.destination())
    }
}

impl std::fmt::Display for MovePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cell) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", cell)?;
        }
        Ok(())
    }
}

/// 跳跃路径搜索器
pub struct JumpPathFinder;

impl JumpPathFinder {
    /// 查找从 `source` 到 `destination` 的走子路径
    ///
    /// 相邻空格直接单步；否则按固定方向顺序做回溯深搜，返回第一条找到的路径，
    /// 不保证最短。起点无子、起终点相同或不可达时返回 None。不修改棋盘。
    pub fn find_path(board: &Board, source: Cell, destination: Cell) -> Option<MovePath> {
        if board.is_empty(source) || source == destination {
            return None;
        }

        if source.is_adjacent(destination) {
            return board
                .is_empty(destination)
                .then(|| MovePath(vec![source, destination]));
        }

        // 访问标记只在本次调用内有效
        let mut visited = [false; CELL_COUNT];
        let mut path = Vec::new();
        if Self::search(board, source, destination, &mut visited, &mut path) {
            Some(MovePath(path))
        } else {
            None
        }
    }

    /// 回溯深搜：进入时标记，回退时取消标记
    fn search(
        board: &Board,
        current: Cell,
        destination: Cell,
        visited: &mut [bool; CELL_COUNT],
        path: &mut Vec<Cell>,
    ) -> bool {
        visited[current.to_index()] = true;
        path.push(current);

        if current == destination {
            return true;
        }

        for landing in Self::jump_targets(board, current) {
            if !visited[landing.to_index()]
                && Self::search(board, landing, destination, visited, path)
            {
                return true;
            }
        }

        path.pop();
        visited[current.to_index()] = false;
        false
    }

    /// 从 `cell` 出发一次跳跃可到达的落点（按方向顺序）
    ///
    /// 中间格必须有子，落点必须在棋盘内且为空。
    pub fn jump_targets(board: &Board, cell: Cell) -> Vec<Cell> {
        let mut targets = Vec::with_capacity(DIRECTIONS.len());
        for (dr, dc) in DIRECTIONS {
            let (Some(over), Some(landing)) = (cell.offset(dr, dc), cell.offset(2 * dr, 2 * dc))
            else {
                continue;
            };
            if !board.is_empty(over) && board.is_empty(landing) {
                targets.push(landing);
            }
        }
        targets
    }

    /// 通过连跳可以到达的全部格子（行优先顺序，不含起点）
    ///
    /// 与逐格调用 `find_path` 得到的可达集合相同，但只做一次洪泛。
    pub fn reachable(board: &Board, source: Cell) -> Vec<Cell> {
        let mut seen = [false; CELL_COUNT];
        seen[source.to_index()] = true;
        let mut stack = vec![source];

        while let Some(cell) = stack.pop() {
            for landing in Self::jump_targets(board, cell) {
                if !seen[landing.to_index()] {
                    seen[landing.to_index()] = true;
                    stack.push(landing);
                }
            }
        }

        seen[source.to_index()] = false;
        Cell::all().filter(|cell| seen[cell.to_index()]).collect()
    }
}
