//! 棋盘布局字符串
//!
//! 类似 FEN 的紧凑写法：从第 0 行到第 9 行，行之间用 `/` 分隔，
//! `a` 表示 A 方棋子，`b` 表示 B 方棋子，数字表示连续空格数（1-10）。
//!
//! 示例（初始局面）：
//! `aaaaa5/aaaa6/aaa7/aa8/a9/9b/8bb/7bbb/6bbbb/5bbbbb`

use crate::board::Board;
use crate::constants::BOARD_SIZE;
use crate::error::{HoppersError, Result};
use crate::piece::{Cell, Side};

/// 初始局面布局
pub const INITIAL_LAYOUT: &str = "aaaaa5/aaaa6/aaa7/aa8/a9/9b/8bb/7bbb/6bbbb/5bbbbb";

/// 布局字符串处理
pub struct Layout;

impl Layout {
    /// 解析布局字符串为棋盘
    pub fn parse(layout: &str) -> Result<Board> {
        let rows: Vec<&str> = layout.trim().split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(HoppersError::InvalidLayout {
                reason: format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut board = Board::empty();
        for (row_idx, row) in rows.iter().enumerate() {
            let mut col = 0usize;
            let mut run = 0usize;

            for c in row.chars() {
                if let Some(digit) = c.to_digit(10) {
                    run = run * 10 + digit as usize;
                    if col + run > BOARD_SIZE {
                        return Err(HoppersError::InvalidLayout {
                            reason: format!("Row {} has too many columns", row_idx),
                        });
                    }
                    continue;
                }
                col += run;
                run = 0;

                let side = Side::from_layout_char(c).ok_or_else(|| HoppersError::InvalidLayout {
                    reason: format!("Invalid piece character: {}", c),
                })?;
                if col >= BOARD_SIZE {
                    return Err(HoppersError::InvalidLayout {
                        reason: format!("Row {} has too many columns", row_idx),
                    });
                }
                let cell = Cell::try_new(row_idx as i32, col as i32)?;
                board.set(cell, Some(side));
                col += 1;
            }
            col += run;

            if col != BOARD_SIZE {
                return Err(HoppersError::InvalidLayout {
                    reason: format!("Row {} has {} columns, expected {}", row_idx, col, BOARD_SIZE),
                });
            }
        }

        Ok(board)
    }

    /// 将棋盘转换为布局字符串
    pub fn to_string(board: &Board) -> String {
        let mut text = String::new();
        let mut empty = 0;
        for cell in Cell::all() {
            if cell.col() == 0 && cell.row() > 0 {
                if empty > 0 {
                    text.push_str(&empty.to_string());
                    empty = 0;
                }
                text.push('/');
            }
            match board.get(cell) {
                Some(side) => {
                    if empty > 0 {
                        text.push_str(&empty.to_string());
                        empty = 0;
                    }
                    text.push(side.to_layout_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            text.push_str(&empty.to_string());
        }
        text
    }
}
