//! 走法生成

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::jump::JumpPathFinder;
use crate::piece::{Cell, Side};

/// 走法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 起始格
    pub from: Cell,
    /// 目标格
    pub to: Cell,
}

impl Move {
    /// 创建新走法
    pub fn new(from: Cell, to: Cell) -> Self {
        Self { from, to }
    }

    /// 对比走子前后的棋盘还原走法
    ///
    /// 起点是唯一从 `side` 变为空的格子，终点是唯一从空变为 `side` 的格子；
    /// 不满足时返回 None。
    pub fn recover(before: &Board, after: &Board, side: Side) -> Option<Move> {
        let mut from = None;
        let mut to = None;

        for cell in Cell::all() {
            match (before.get(cell), after.get(cell)) {
                (Some(s), None) if s == side => {
                    if from.replace(cell).is_some() {
                        return None;
                    }
                }
                (None, Some(s)) if s == side => {
                    if to.replace(cell).is_some() {
                        return None;
                    }
                }
                (b, a) if b != a => return None,
                _ => {}
            }
        }

        Some(Move::new(from?, to?))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// 一步走法及其产生的新棋盘
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor {
    /// 走法
    pub mv: Move,
    /// 走子后的棋盘（独立副本）
    pub board: Board,
}

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 指定棋子的所有合法落点（行优先顺序）
    ///
    /// 等价于对每个空格调用 `JumpPathFinder::find_path`：
    /// 相邻空格加上连跳可达的格子。起点无子时返回空列表。
    pub fn legal_destinations(board: &Board, piece: Cell) -> Vec<Cell> {
        if board.is_empty(piece) {
            return Vec::new();
        }

        let mut destinations = JumpPathFinder::reachable(board, piece);
        for cell in Cell::all() {
            if piece.is_adjacent(cell) && board.is_empty(cell) && !destinations.contains(&cell) {
                destinations.push(cell);
            }
        }
        destinations.sort_unstable();
        destinations
    }

    /// 指定阵营的所有走法（棋子按行优先，落点按行优先）
    pub fn generate(board: &Board, side: Side) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);

        for from in board.pieces_of(side) {
            for to in Self::legal_destinations(board, from) {
                moves.push(Move::new(from, to));
            }
        }

        moves
    }

    /// 指定阵营的所有走法及对应的新棋盘
    ///
    /// 顺序与 `generate` 相同，每个新棋盘都是独立克隆。
    pub fn moves_for(board: &Board, side: Side) -> Vec<Successor> {
        Self::generate(board, side)
            .into_iter()
            .map(|mv| {
                let mut next = board.clone();
                next.set(mv.from, None);
                next.set(mv.to, Some(side));
                Successor { mv, board: next }
            })
            .collect()
    }

    /// 指定阵营是否还有合法走法
    pub fn has_moves(board: &Board, side: Side) -> bool {
        board
            .pieces_of(side)
            .into_iter()
            .any(|from| !Self::legal_destinations(board, from).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PIECES_PER_SIDE;
    use crate::layout::Layout;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn cell(row: u8, col: u8) -> Cell {
        Cell::new(row, col).unwrap()
    }

    /// 逐个空格调用 find_path 的朴素实现
    fn brute_force_destinations(board: &Board, piece: Cell) -> Vec<Cell> {
        board
            .empty_cells()
            .into_iter()
            .filter(|&target| JumpPathFinder::find_path(board, piece, target).is_some())
            .collect()
    }

    /// 随机对局生成一批局面（固定种子，结果确定）
    fn random_positions(seed: u64, plies: usize) -> Vec<Board> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut board = Board::initial();
        let mut side = Side::A;
        let mut positions = vec![board.clone()];

        for _ in 0..plies {
            let moves = MoveGenerator::generate(&board, side);
            let Some(mv) = moves.choose(&mut rng) else {
                break;
            };
            board.move_piece(mv.from, mv.to);
            positions.push(board.clone());
            side = side.opponent();
        }

        positions
    }

    #[test]
    fn test_initial_destinations() {
        let board = Board::initial();

        // (4, 0) 可以向下、右下、右各走一步
        assert_eq!(
            MoveGenerator::legal_destinations(&board, cell(4, 0)),
            vec![cell(4, 1), cell(5, 0), cell(5, 1)]
        );

        // (0, 0) 被完全包围且无法跳出
        assert!(MoveGenerator::legal_destinations(&board, cell(0, 0)).is_empty());
    }

    #[test]
    fn test_empty_source_has_no_destinations() {
        let board = Board::initial();
        assert!(MoveGenerator::legal_destinations(&board, cell(5, 5)).is_empty());
    }

    #[test]
    fn test_destinations_never_contain_source() {
        for board in random_positions(7, 40) {
            for side in [Side::A, Side::B] {
                for piece in board.pieces_of(side) {
                    assert!(!MoveGenerator::legal_destinations(&board, piece).contains(&piece));
                }
            }
        }
    }

    #[test]
    fn test_adjacent_legal_iff_empty() {
        for board in random_positions(11, 30) {
            for piece in board.pieces_of(Side::B) {
                let destinations = MoveGenerator::legal_destinations(&board, piece);
                for target in Cell::all().filter(|c| piece.is_adjacent(*c)) {
                    assert_eq!(destinations.contains(&target), board.is_empty(target));
                }
            }
        }
    }

    #[test]
    fn test_jump_over_any_side_always_legal() {
        let board = Layout::parse("10/10/10/3b6/3a6/3a6/10/10/10/10").unwrap();
        let destinations = MoveGenerator::legal_destinations(&board, cell(4, 3));
        // 越过 B 方向上，越过 A 方向下
        assert!(destinations.contains(&cell(2, 3)));
        assert!(destinations.contains(&cell(6, 3)));
    }

    #[test]
    fn test_matches_brute_force_scan() {
        for seed in [1, 2, 3] {
            for board in random_positions(seed, 60).into_iter().step_by(6) {
                for side in [Side::A, Side::B] {
                    for piece in board.pieces_of(side) {
                        assert_eq!(
                            MoveGenerator::legal_destinations(&board, piece),
                            brute_force_destinations(&board, piece),
                            "piece {} on\n{}",
                            piece,
                            board
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_every_destination_has_valid_path() {
        for board in random_positions(5, 50).into_iter().step_by(5) {
            for piece in board.pieces_of(Side::A) {
                for target in MoveGenerator::legal_destinations(&board, piece) {
                    let path = JumpPathFinder::find_path(&board, piece, target).unwrap();
                    assert_eq!(path.source(), piece);
                    assert_eq!(path.destination(), target);
                    if !path.is_step() {
                        for pair in path.cells().windows(2) {
                            assert!(JumpPathFinder::jump_targets(&board, pair[0]).contains(&pair[1]));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_moves_for_order_and_boards() {
        let board = Board::initial();
        let successors = MoveGenerator::moves_for(&board, Side::B);
        let moves = MoveGenerator::generate(&board, Side::B);

        assert_eq!(successors.len(), moves.len());
        assert!(!successors.is_empty());

        // 棋子行优先，其次落点行优先
        let keys: Vec<(Cell, Cell)> = moves.iter().map(|m| (m.from, m.to)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);

        for successor in &successors {
            let next = &successor.board;
            assert!(next.is_empty(successor.mv.from));
            assert_eq!(next.get(successor.mv.to), Some(Side::B));
            assert_eq!(next.count(Side::A), PIECES_PER_SIDE);
            assert_eq!(next.count(Side::B), PIECES_PER_SIDE);
            assert_eq!(Move::recover(&board, next, Side::B), Some(successor.mv));
        }

        // 原棋盘不受影响
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn test_recover_rejects_foreign_changes() {
        let before = Board::initial();
        let mut after = before.clone();
        after.move_piece(cell(4, 0), cell(5, 0));
        assert_eq!(Move::recover(&before, &after, Side::B), None);
        assert_eq!(
            Move::recover(&before, &after, Side::A),
            Some(Move::new(cell(4, 0), cell(5, 0)))
        );
        assert_eq!(Move::recover(&before, &before, Side::A), None);
    }

    #[test]
    fn test_has_moves() {
        assert!(MoveGenerator::has_moves(&Board::initial(), Side::A));
        assert!(!MoveGenerator::has_moves(&Board::empty(), Side::A));
    }
}
