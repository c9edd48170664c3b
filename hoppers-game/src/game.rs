//! 对局控制
//!
//! `GameController` 是外部（界面、命令行）与规则和 AI 交互的唯一入口。

use hoppers_ai::SearchEngine;
use hoppers_core::{
    Board, Cell, HoppersError, JumpPathFinder, Move, MoveGenerator, MovePath, Result, Side,
    Snapshot,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// 对局状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// 进行中
    InProgress,
    /// 某方获胜
    WonBy(Side),
}

/// 对局控制器
#[derive(Debug)]
pub struct GameController {
    /// 当前棋盘
    board: Board,
    /// 对局状态
    status: GameStatus,
    /// 最后一步走法
    last_move: Option<Move>,
    /// 最后一步的路径
    last_path: Option<MovePath>,
    /// 走法记录
    history: Vec<Move>,
    /// AI 搜索引擎
    engine: SearchEngine,
}

impl GameController {
    /// 以标准初始局面开始新对局
    pub fn new() -> Self {
        Self::with_engine(SearchEngine::new())
    }

    /// 使用指定的搜索引擎（例如可取消的引擎）
    pub fn with_engine(engine: SearchEngine) -> Self {
        let mut game = Self::from_board(Board::initial());
        game.engine = engine;
        game
    }

    /// 从任意局面开始（用于残局和测试）
    pub fn from_board(board: Board) -> Self {
        let status = match board.winner() {
            Some(side) => GameStatus::WonBy(side),
            None => GameStatus::InProgress,
        };
        Self {
            board,
            status,
            last_move: None,
            last_path: None,
            history: Vec::new(),
            engine: SearchEngine::new(),
        }
    }

    /// 走子
    ///
    /// 起点必须是 `side` 的棋子，且存在单步或连跳路径。成功时返回路径。
    pub fn apply_move(&mut self, source: Cell, destination: Cell, side: Side) -> Result<MovePath> {
        let result = self.try_apply_move(source, destination, side);
        match &result {
            Ok(path) => info!(%side, %path, "走子"),
            Err(e) => warn!(%side, %source, %destination, "走法被拒绝: {}", e),
        }
        result
    }

    fn try_apply_move(&mut self, source: Cell, destination: Cell, side: Side) -> Result<MovePath> {
        if let GameStatus::WonBy(_) = self.status {
            return Err(HoppersError::GameOver);
        }

        match self.board.get(source) {
            None => return Err(HoppersError::EmptySource { cell: source }),
            Some(found) if found != side => {
                return Err(HoppersError::WrongOwner {
                    cell: source,
                    expected: side,
                    found,
                })
            }
            Some(_) => {}
        }

        let path = JumpPathFinder::find_path(&self.board, source, destination).ok_or(
            HoppersError::IllegalDestination {
                from: source,
                to: destination,
            },
        )?;

        self.board.set(source, None);
        self.board.set(destination, Some(side));

        let mv = Move::new(source, destination);
        self.last_move = Some(mv);
        self.last_path = Some(path.clone());
        self.history.push(mv);

        if let Some(winner) = self.check_win() {
            info!(%winner, moves = self.history.len(), "对局结束");
            self.status = GameStatus::WonBy(winner);
        }

        Ok(path)
    }

    /// 胜负判定
    pub fn check_win(&self) -> Option<Side> {
        self.board.winner()
    }

    /// 指定棋子的所有合法落点（用于界面高亮）
    pub fn legal_destinations(&self, cell: Cell) -> Result<Vec<Cell>> {
        if self.board.is_empty(cell) {
            return Err(HoppersError::EmptySource { cell });
        }
        Ok(MoveGenerator::legal_destinations(&self.board, cell))
    }

    /// 让 AI 为 `side` 走一步，返回走子后的胜方（如有）
    ///
    /// 搜索返回走子后的棋盘，通过与搜索前的棋盘逐格对比还原出走法，再经 `apply_move` 落子。
    pub fn request_ai_move(&mut self, side: Side, depth: u8) -> Result<Option<Side>> {
        if depth == 0 {
            return Err(HoppersError::InvalidArgument {
                reason: "search depth must be at least 1".to_string(),
            });
        }
        if let GameStatus::WonBy(_) = self.status {
            return Err(HoppersError::GameOver);
        }

        let before = self.board.clone();
        let result = self.engine.search(&before, depth, side)?;
        let mv = Move::recover(&before, &result.board, side)
            .ok_or(HoppersError::NoLegalMoves { side })?;
        debug!(
            %side,
            depth,
            score = result.score,
            nodes = self.engine.nodes_searched(),
            "AI 选择 {}",
            mv
        );

        self.apply_move(mv.from, mv.to, side)?;
        Ok(self.check_win())
    }

    /// 重新开局
    pub fn restart(&mut self) {
        self.board = Board::initial();
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.last_path = None;
        self.history.clear();
        info!("重新开局");
    }

    /// 只读棋盘快照
    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    /// 当前棋盘
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn last_path(&self) -> Option<&MovePath> {
        self.last_path.as_ref()
    }

    /// 走法记录
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
