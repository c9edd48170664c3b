//! 终端对局流程
//!
//! 自我对弈与人机对弈的主循环。输入输出以泛型读写器传入，便于测试。

use std::io::{BufRead, Write};

use hoppers_core::{Cell, HoppersError, MoveGenerator, Result, Side};
use tracing::info;

use crate::config::GameConfig;
use crate::game::GameController;

/// 一行人类输入
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// `行 列 行 列`
    Move { from: Cell, to: Cell },
    /// `moves 行 列`
    Moves(Cell),
    Restart,
    Quit,
}

/// 解析一行输入
pub fn parse_input(line: &str) -> Result<Input> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["quit"] | ["exit"] => Ok(Input::Quit),
        ["restart"] => Ok(Input::Restart),
        ["moves", row, col] => Ok(Input::Moves(parse_cell(row, col)?)),
        [r1, c1, r2, c2] => Ok(Input::Move {
            from: parse_cell(r1, c1)?,
            to: parse_cell(r2, c2)?,
        }),
        _ => Err(HoppersError::InvalidArgument {
            reason: format!("unrecognized input '{}'", line.trim()),
        }),
    }
}

fn parse_cell(row: &str, col: &str) -> Result<Cell> {
    let parse = |s: &str| {
        s.parse::<i32>().map_err(|_| HoppersError::InvalidArgument {
            reason: format!("'{}' is not a number", s),
        })
    };
    Cell::try_new(parse(row)?, parse(col)?)
}

/// 打印最后一步和棋盘
fn print_last_move<W: Write>(
    out: &mut W,
    game: &GameController,
    label: &str,
    show_paths: bool,
) -> std::io::Result<()> {
    match (game.last_path(), game.last_move()) {
        (Some(path), _) if show_paths => writeln!(out, "{}: {}", label, path)?,
        (_, Some(mv)) => writeln!(out, "{}: {}", label, mv)?,
        _ => {}
    }
    writeln!(out, "{}", game.board())
}

/// AI 自我对弈，A 方先行
///
/// 一方无棋可走时跳过该方；双方都无棋可走或达到最大手数时结束。返回胜方。
pub fn run_selfplay<W: Write>(
    game: &mut GameController,
    config: &GameConfig,
    out: &mut W,
) -> anyhow::Result<Option<Side>> {
    let depth = config.ai.depth;
    let mut side = Side::A;
    let mut passes = 0;

    info!(depth, max_turns = config.max_turns, "开始自我对弈");
    writeln!(out, "{}", game.board())?;

    for turn in 1..=config.max_turns {
        match game.request_ai_move(side, depth) {
            Ok(winner) => {
                passes = 0;
                print_last_move(out, game, &format!("第 {} 手 {}", turn, side), config.show_paths)?;
                if let Some(winner) = winner {
                    writeln!(out, "{} 方获胜！", winner)?;
                    return Ok(Some(winner));
                }
            }
            Err(HoppersError::NoLegalMoves { .. }) => {
                writeln!(out, "第 {} 手：{} 方无棋可走", turn, side)?;
                passes += 1;
                if passes == 2 {
                    break;
                }
            }
            Err(e) => return Err(e.into()),
        }
        side = side.opponent();
    }

    writeln!(out, "对局结束，未分胜负")?;
    Ok(None)
}

/// AI 走子；人类无棋可走时 AI 连续走子
fn ai_turn<W: Write>(
    game: &mut GameController,
    config: &GameConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    let ai = config.human_side.opponent();
    loop {
        match game.request_ai_move(ai, config.ai.depth) {
            Ok(winner) => {
                print_last_move(out, game, &format!("AI ({})", ai), config.show_paths)?;
                if let Some(winner) = winner {
                    writeln!(out, "{} 方获胜！", winner)?;
                    return Ok(());
                }
            }
            Err(HoppersError::NoLegalMoves { .. }) => {
                writeln!(out, "AI 无棋可走")?;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }

        if MoveGenerator::has_moves(game.board(), config.human_side) {
            return Ok(());
        }
        writeln!(out, "{} 方无棋可走，AI 继续", config.human_side)?;
    }
}

/// 开局（或重新开局）时若 AI 执 A 方则由 AI 先走
fn open<W: Write>(
    game: &mut GameController,
    config: &GameConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    writeln!(out, "{}", game.board())?;
    if config.human_side == Side::B {
        ai_turn(game, config, out)?;
    }
    Ok(())
}

/// 人机对弈
///
/// 逐行读取输入直到 `quit` 或输入结束。非法输入和被拒绝的走法只打印错误。
pub fn run_interactive<R: BufRead, W: Write>(
    game: &mut GameController,
    config: &GameConfig,
    input: R,
    out: &mut W,
) -> anyhow::Result<Option<Side>> {
    let human = config.human_side;
    info!(%human, depth = config.ai.depth, "开始人机对弈");

    open(game, config, out)?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(out, "> ")?;
            out.flush()?;
            continue;
        }

        match parse_input(&line) {
            Err(e) => writeln!(out, "错误: {}", e)?,
            Ok(Input::Quit) => break,
            Ok(Input::Restart) => {
                game.restart();
                open(game, config, out)?;
            }
            Ok(Input::Moves(cell)) => match game.legal_destinations(cell) {
                Ok(cells) if cells.is_empty() => writeln!(out, "{} 无合法落点", cell)?,
                Ok(cells) => {
                    let list: Vec<String> = cells.iter().map(|c| c.to_string()).collect();
                    writeln!(out, "{}: {}", cell, list.join(" "))?;
                }
                Err(e) => writeln!(out, "错误: {}", e)?,
            },
            Ok(Input::Move { from, to }) => match game.apply_move(from, to, human) {
                Ok(_) => {
                    print_last_move(out, game, &human.to_string(), config.show_paths)?;
                    match game.check_win() {
                        Some(winner) => writeln!(out, "{} 方获胜！", winner)?,
                        None => ai_turn(game, config, out)?,
                    }
                }
                Err(e) => writeln!(out, "错误: {}", e)?,
            },
        }

        write!(out, "> ")?;
        out.flush()?;
    }

    Ok(game.check_win())
}
