//! 搜索引擎
//!
//! 实现 Minimax + Alpha-Beta 剪枝。分数始终以 A 方视角给出：
//! A 方取极大，B 方取极小。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use hoppers_core::{Board, HoppersError, Move, MoveGenerator, Result, Side, Successor};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::evaluate::Evaluator;

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    /// 简单：depth=1
    Easy,
    /// 中等：depth=2
    #[default]
    Medium,
    /// 困难：depth=3
    Hard,
}

/// AI 配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    pub depth: u8,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        let depth = match difficulty {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        };
        Self { difficulty, depth }
    }

    /// 覆盖搜索深度
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::default())
    }
}

/// 搜索结果
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// 局面分数（A 方视角）
    pub score: f64,
    /// 走出最佳走法后的棋盘；终局或无子可动时为原棋盘的副本
    pub board: Board,
    /// 最佳走法
    pub best_move: Option<Move>,
}

/// 搜索引擎
#[derive(Debug, Default)]
pub struct SearchEngine {
    nodes_searched: u64,
    cancel: Option<Arc<AtomicBool>>,
}

impl SearchEngine {
    /// 创建新的搜索引擎
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建可取消的搜索引擎
    ///
    /// 每次展开候选走法前检查标志，置位后搜索返回 `Cancelled`。
    pub fn with_cancel_flag(flag: Arc<AtomicBool>) -> Self {
        Self {
            nodes_searched: 0,
            cancel: Some(flag),
        }
    }

    /// 以完整窗口搜索最佳走法
    pub fn search(&mut self, board: &Board, depth: u8, side: Side) -> Result<SearchResult> {
        self.search_window(board, depth, side, f64::NEG_INFINITY, f64::INFINITY)
    }

    /// 以指定的 alpha/beta 窗口搜索
    pub fn search_window(
        &mut self,
        board: &Board,
        depth: u8,
        side: Side,
        alpha: f64,
        beta: f64,
    ) -> Result<SearchResult> {
        self.nodes_searched = 0;

        let (score, best) = self.alpha_beta(board, depth, side, alpha, beta)?;
        let result = match best {
            Some(Successor { mv, board: next }) => SearchResult {
                score,
                board: next,
                best_move: Some(mv),
            },
            None => SearchResult {
                score,
                board: board.clone(),
                best_move: None,
            },
        };

        debug!(
            depth,
            %side,
            nodes = self.nodes_searched,
            score = result.score,
            best_move = ?result.best_move,
            "search finished"
        );
        Ok(result)
    }

    /// Alpha-Beta 搜索
    ///
    /// 同分时后出现的走法覆盖先前的最佳走法。
    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u8,
        side: Side,
        mut alpha: f64,
        mut beta: f64,
    ) -> Result<(f64, Option<Successor>)> {
        self.nodes_searched += 1;

        if depth == 0 || board.winner().is_some() {
            return Ok((Evaluator::evaluate(board), None));
        }

        let successors = MoveGenerator::moves_for(board, side);

        // 无子可动，按叶子处理
        if successors.is_empty() {
            return Ok((Evaluator::evaluate(board), None));
        }

        let mut best = None;
        match side {
            Side::A => {
                let mut max_eval = f64::NEG_INFINITY;
                for successor in successors {
                    self.check_cancelled()?;
                    let (eval, _) =
                        self.alpha_beta(&successor.board, depth - 1, Side::B, alpha, beta)?;
                    max_eval = max_eval.max(eval);
                    if max_eval == eval {
                        best = Some(successor);
                    }
                    alpha = alpha.max(max_eval);
                    if alpha >= beta {
                        break; // Beta 剪枝
                    }
                }
                Ok((max_eval, best))
            }
            Side::B => {
                let mut min_eval = f64::INFINITY;
                for successor in successors {
                    self.check_cancelled()?;
                    let (eval, _) =
                        self.alpha_beta(&successor.board, depth - 1, Side::A, alpha, beta)?;
                    min_eval = min_eval.min(eval);
                    if min_eval == eval {
                        best = Some(successor);
                    }
                    beta = beta.min(min_eval);
                    if alpha >= beta {
                        break; // Alpha 剪枝
                    }
                }
                Ok((min_eval, best))
            }
        }
    }

    fn check_cancelled(&self) -> Result<()> {
        match &self.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(HoppersError::Cancelled),
            _ => Ok(()),
        }
    }

    /// 获取上次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}
