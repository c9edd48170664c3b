//! 局面评估函数

use hoppers_core::{Board, Side, LOSS_SCORE, PIECES_PER_SIDE, WIN_SCORE};

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 评估局面（A 方视角，正值对 A 方有利）
    ///
    /// 已分胜负时返回正负无穷；否则为 `15 / distA - 15 / distB`，
    /// 其中 dist 为一方全部棋子到其参考角的欧几里得距离之和。
    pub fn evaluate(board: &Board) -> f64 {
        match board.winner() {
            Some(Side::A) => return WIN_SCORE,
            Some(Side::B) => return LOSS_SCORE,
            None => {}
        }

        let dist_a = Self::distance_sum(board, Side::A);
        let dist_b = Self::distance_sum(board, Side::B);

        // 所有棋子都压在参考角上（退化情形）
        if dist_a == 0.0 {
            return WIN_SCORE;
        }
        if dist_b == 0.0 {
            return LOSS_SCORE;
        }

        let pieces = PIECES_PER_SIDE as f64;
        pieces / dist_a - pieces / dist_b
    }

    /// 一方全部棋子到参考角的距离之和
    pub fn distance_sum(board: &Board, side: Side) -> f64 {
        let corner = side.target_corner();
        board
            .pieces_of(side)
            .into_iter()
            .map(|cell| cell.distance(corner))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoppers_core::{Cell, Layout, MoveGenerator};

    fn cell(row: u8, col: u8) -> Cell {
        Cell::new(row, col).unwrap()
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_initial_evaluation() {
        let score = Evaluator::evaluate(&Board::initial());
        // 初始局面对称
        assert!(approx_eq(score, 0.0), "Initial position should be balanced, got {}", score);
    }

    #[test]
    fn test_progress_is_rewarded() {
        let mut board = Board::initial();
        let before = Evaluator::evaluate(&board);
        board.move_piece(cell(4, 0), cell(5, 1));
        let after = Evaluator::evaluate(&board);
        assert!(after > before, "A 方前进应当加分: {} vs {}", after, before);

        board.move_piece(cell(5, 9), cell(4, 8));
        assert!(Evaluator::evaluate(&board) < after, "B 方前进应当减分");
    }

    #[test]
    fn test_known_value() {
        // A 在 (9, 8)，B 在 (0, 1)：双方距离都是 1
        let board = Layout::parse("1b8/10/10/10/10/10/10/10/10/8a1").unwrap();
        assert_eq!(Evaluator::distance_sum(&board, Side::A), 1.0);
        assert_eq!(Evaluator::distance_sum(&board, Side::B), 1.0);
        assert_eq!(Evaluator::evaluate(&board), 0.0);

        // A 在 (7, 9) 距离 2，B 在 (0, 1) 距离 1
        let board = Layout::parse("1b8/10/10/10/10/10/10/9a/10/10").unwrap();
        assert_eq!(Evaluator::evaluate(&board), 15.0 / 2.0 - 15.0);
    }

    #[test]
    fn test_win_scores() {
        let mut a_wins = Board::empty();
        for &c in Side::A.goal_zone() {
            a_wins.set(c, Some(Side::A));
        }
        for &c in Side::A.home_zone() {
            a_wins.set(c, Some(Side::B));
        }
        // 双方同时到位时 A 方先判
        assert_eq!(Evaluator::evaluate(&a_wins), f64::INFINITY);

        let mut b_wins = Board::initial();
        for &c in Side::B.goal_zone() {
            b_wins.set(c, Some(Side::B));
        }
        for &c in Side::B.home_zone() {
            b_wins.set(c, None);
        }
        assert_eq!(Evaluator::evaluate(&b_wins), f64::NEG_INFINITY);
    }

    #[test]
    fn test_degenerate_zero_distance() {
        // A 方唯一的棋子压在参考角上，但尚未占满目标区
        let board = Layout::parse("1b8/10/10/10/10/10/10/10/10/9a").unwrap();
        assert_eq!(board.winner(), None);
        assert_eq!(Evaluator::evaluate(&board), f64::INFINITY);

        let board = Layout::parse("b9/10/10/10/10/10/10/10/10/8a1").unwrap();
        assert_eq!(Evaluator::evaluate(&board), f64::NEG_INFINITY);
    }

    #[test]
    fn test_mirror_antisymmetry() {
        let mut board = Board::initial();
        let mut side = Side::A;
        // 依次走每方第一个合法走法，检查若干局面
        for _ in 0..12 {
            let score = Evaluator::evaluate(&board);
            let mirrored = Evaluator::evaluate(&board.mirrored());
            assert!(approx_eq(mirrored, -score), "{} vs {}", mirrored, score);

            let moves = MoveGenerator::generate(&board, side);
            let mv = moves[moves.len() / 2];
            board.move_piece(mv.from, mv.to);
            side = side.opponent();
        }
    }
}
