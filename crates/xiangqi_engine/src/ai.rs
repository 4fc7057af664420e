//! The computer opponent
//!
//! A one-ply scored candidate search: every legal move for the side to
//! play is scored by a capture/positioning heuristic plus a material
//! evaluation of the resulting board, and one of the top three candidates
//! is picked at random so play does not loop through identical games.

use crate::board::Board;
use crate::constants::{
    crossed_river, piece_value, BOARD_COLS, BOARD_ROWS, CAPTURE_WEIGHT, CENTER_BONUS,
    CROSSED_SOLDIER_BONUS, PALACE_COL_MAX, PALACE_COL_MIN, SCREEN_GENERAL_BONUS, TOP_CANDIDATES,
};
use crate::rules;
use crate::state::{GameState, Move};
use crate::types::{Pos, Role, Side};
use rand::seq::IndexedRandom;
use rand::Rng;

struct Candidate {
    from: Pos,
    to: Pos,
    value: i32,
}

/// Pick a move for `side`, or `None` in a terminal position (a general is
/// already captured) or when no legal move exists.
pub fn choose_move<R: Rng + ?Sized>(state: &GameState, side: Side, rng: &mut R) -> Option<Move> {
    if state.board.winner().is_some() {
        return None;
    }

    let mut candidates = legal_candidates(&state.board, side);
    if candidates.is_empty() {
        return None;
    }

    for candidate in &mut candidates {
        let after = state.board.moved(candidate.from, candidate.to);
        candidate.value += evaluate(&after, side);
    }

    candidates.sort_by(|a, b| b.value.cmp(&a.value));
    candidates.truncate(TOP_CANDIDATES);
    let pick = candidates.choose(rng)?;

    Some(Move {
        pieces: state.board.moved(pick.from, pick.to),
        turn: side.opponent(),
        from: Some(pick.from),
        to: Some(pick.to),
    })
}

/// All legal `(from, to)` pairs for `side`, scored by the move heuristic:
/// captures at twice the victim's value, river crossings for soldiers,
/// central columns, and advisors/elephants screening the general.
fn legal_candidates(board: &Board, side: Side) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for (from, piece) in board.iter() {
        if piece.side() != side {
            continue;
        }
        for row in 0..BOARD_ROWS {
            for col in 0..BOARD_COLS {
                let to = Pos::new(row, col);
                if !rules::is_legal(from, to, piece, board) {
                    continue;
                }

                let mut value = 0;
                if let Some(victim) = board.get(to) {
                    value += piece_value(victim.role()) * CAPTURE_WEIGHT;
                }
                if piece.role() == Role::Soldier && crossed_river(side, to.row) {
                    value += CROSSED_SOLDIER_BONUS;
                }
                let central = (PALACE_COL_MIN..=PALACE_COL_MAX).contains(&to.col);
                if central {
                    value += CENTER_BONUS;
                }
                if central && matches!(piece.role(), Role::Advisor | Role::Elephant) {
                    value += SCREEN_GENERAL_BONUS;
                }

                candidates.push(Candidate { from, to, value });
            }
        }
    }

    candidates
}

/// Material evaluation of a board from `side`'s perspective: own pieces
/// positive, the opponent's negative, with an extra bonus for soldiers
/// that have crossed the river.
fn evaluate(board: &Board, side: Side) -> i32 {
    let mut score = 0;
    for (pos, piece) in board.iter() {
        let mut value = piece_value(piece.role());
        if piece.role() == Role::Soldier && crossed_river(piece.side(), pos.row) {
            value += CROSSED_SOLDIER_BONUS;
        }
        if piece.side() == side {
            score += value;
        } else {
            score -= value;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Piece;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn opening_position_always_yields_a_move() {
        let state = GameState::new();
        for _ in 0..20 {
            let mv = choose_move(&state, Side::Red, &mut rng()).expect("legal moves exist");
            let from = mv.from.unwrap();
            let to = mv.to.unwrap();
            assert_eq!(state.board.get(from).map(|p| p.side()), Some(Side::Red));
            assert!(rules::is_legal(from, to, state.board.get(from).unwrap(), &state.board));
            assert_eq!(mv.turn, Side::Black);
            assert_eq!(mv.pieces, state.board.moved(from, to));
        }
    }

    #[test]
    fn terminal_position_yields_none() {
        let mut state = GameState::new();
        state.board = state
            .board
            .iter()
            .filter(|&(_, piece)| piece != Piece::BlackGeneral)
            .collect();
        assert!(choose_move(&state, Side::Red, &mut rng()).is_none());
        assert!(choose_move(&state, Side::Black, &mut rng()).is_none());
    }

    #[test]
    fn no_legal_move_yields_none() {
        // black's general is walled in by its own advisors, and every one
        // of those advisors is pinned against the palace bounds
        let mut state = GameState::new();
        state.board = [
            (Pos::new(0, 4), Piece::RedGeneral),
            (Pos::new(9, 4), Piece::BlackGeneral),
            (Pos::new(9, 3), Piece::BlackAdvisor),
            (Pos::new(9, 5), Piece::BlackAdvisor),
            (Pos::new(8, 4), Piece::BlackAdvisor),
            (Pos::new(7, 3), Piece::BlackAdvisor),
            (Pos::new(7, 5), Piece::BlackAdvisor),
        ]
        .into_iter()
        .collect();
        state.turn = Side::Black;

        assert!(choose_move(&state, Side::Black, &mut rng()).is_none());
        // red, by contrast, can still step its general
        assert!(choose_move(&state, Side::Red, &mut rng()).is_some());
    }

    #[test]
    fn hanging_chariot_tops_the_candidate_scores() {
        // a black chariot on an open rank with red's chariot
        let mut state = GameState::new();
        state.board = [
            (Pos::new(0, 4), Piece::RedGeneral),
            (Pos::new(9, 4), Piece::BlackGeneral),
            (Pos::new(4, 0), Piece::RedChariot),
            (Pos::new(4, 8), Piece::BlackChariot),
        ]
        .into_iter()
        .collect();

        let mut candidates = legal_candidates(&state.board, Side::Red);
        for candidate in &mut candidates {
            let after = state.board.moved(candidate.from, candidate.to);
            candidate.value += evaluate(&after, Side::Red);
        }
        candidates.sort_by(|a, b| b.value.cmp(&a.value));

        let best = &candidates[0];
        assert_eq!((best.from, best.to), (Pos::new(4, 0), Pos::new(4, 8)));
        // the capture outscores every quiet move by more than a chariot
        assert!(best.value - candidates[1].value > piece_value(Role::Chariot));

        // whichever of the top three the rng picks, it is a legal move
        let mv = choose_move(&state, Side::Red, &mut rng()).unwrap();
        let piece = state.board.get(mv.from.unwrap()).unwrap();
        assert!(rules::is_legal(mv.from.unwrap(), mv.to.unwrap(), piece, &state.board));
    }

    #[test]
    fn never_fabricates_a_capture() {
        let state = GameState::new();
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mv = choose_move(&state, Side::Red, &mut rng).unwrap();
            // from the opening no red move can reach a black piece except
            // the cannons' screened captures of the horses; every returned
            // move must still be legal, so just re-check piece counts
            assert!(mv.pieces.len() == 32 || mv.pieces.len() == 31);
        }
    }
}
