use super::board::Board;
use super::types::{Mark, Outcome, WinLine};

/// Checked in this order; when several lines are complete the first one wins.
pub const WIN_LINES: [WinLine; 8] = [
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

pub fn check_win_with_line(board: &Board) -> Option<(Mark, WinLine)> {
    let cells = board.cells();
    WIN_LINES.iter().find_map(|line| {
        let [a, b, c] = line.cells();
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            Some((mark, *line))
        } else {
            None
        }
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_win(board) {
        return Outcome::Win(mark);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

pub fn winning_line(board: &Board) -> Option<WinLine> {
    check_win_with_line(board).map(|(_, line)| line)
}
