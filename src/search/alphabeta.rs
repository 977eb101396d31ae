//! Negamax alpha-beta search with iterative deepening and a quiescence
//! extension over captures.
//!
//! The search owns a per-ply arena of move buffers, so steady-state
//! node expansion allocates nothing.

use log::debug;

use crate::board::position::{Color, Move, Position};
use crate::eval::evaluate::{evaluate, MATE};
use crate::movegen::legal::{generate_legal_into, generate_legal_moves, is_king_in_check};
use crate::movegen::moves::MAX_MOVES;
use crate::search::ordering::order_moves;

/// Alpha-beta bound; far outside any reachable evaluation.
const INFINITY: i32 = 100_000;

#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// Best move of the deepest completed pass, or the null move `(0,0)`
    /// when the root has no legal moves. Callers must check
    /// [`Move::is_null`] before playing it.
    pub best_move: Move,
    /// Score from White's perspective.
    pub score: i32,
    /// Deepest completed iteration.
    pub depth: u32,
    /// Nodes visited across all iterations, quiescence included.
    pub nodes_searched: u64,
}

pub struct Search {
    nodes: u64,
    root_best: Move,
    use_quiescence: bool,
    buffers: Vec<Vec<Move>>,
}

impl Search {
    pub fn new() -> Search {
        Search {
            nodes: 0,
            root_best: Move::null(),
            use_quiescence: true,
            buffers: Vec::new(),
        }
    }

    /// Toggle the quiescence extension; depth-0 nodes fall back to the
    /// static evaluation when disabled.
    pub fn set_quiescence(&mut self, enabled: bool) {
        self.use_quiescence = enabled;
    }

    /// Iteratively deepen from 1 to `max_depth` and return the best move
    /// of the deepest completed pass.
    pub fn find_best_move(&mut self, pos: &mut Position, max_depth: u32) -> SearchResult {
        self.nodes = 0;
        self.root_best = Move::null();

        let side = pos.side_to_move;
        let turn = turn_multiplier(side);

        let root_moves = generate_legal_moves(pos, side);
        if root_moves.is_empty() {
            // Mated or stalemated before we start; the evaluation
            // carries which one.
            return SearchResult {
                best_move: Move::null(),
                score: evaluate(pos),
                depth: 0,
                nodes_searched: 0,
            };
        }

        let mut result = SearchResult {
            best_move: root_moves[0],
            score: evaluate(pos),
            depth: 0,
            nodes_searched: 0,
        };

        for depth in 1..=max_depth {
            let score = self.negamax(pos, depth, -INFINITY, INFINITY, turn, 0);

            result = SearchResult {
                best_move: self.root_best,
                score: score * turn,
                depth,
                nodes_searched: self.nodes,
            };
            debug!(
                "depth {} best {} score {} nodes {}",
                depth, result.best_move, result.score, result.nodes_searched
            );

            // A forced mate does not improve with more depth.
            if score.abs() >= MATE - max_depth as i32 {
                break;
            }
        }

        result
    }

    fn negamax(
        &mut self,
        pos: &mut Position,
        depth: u32,
        mut alpha: i32,
        beta: i32,
        turn: i32,
        ply: u32,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return if self.use_quiescence {
                self.quiescence(pos, alpha, beta, turn, ply)
            } else {
                turn * evaluate(pos)
            };
        }

        let side = pos.side_to_move;
        let mut moves = self.take_buffer(ply);
        generate_legal_into(pos, side, &mut moves);

        if moves.is_empty() {
            self.put_buffer(ply, moves);
            // Subtracting the ply prefers the nearest mate.
            return if is_king_in_check(pos, side) {
                -(MATE - ply as i32)
            } else {
                0
            };
        }

        order_moves(pos, &mut moves);

        let mut best = -INFINITY;
        for i in 0..moves.len() {
            let mut mv = moves[i];
            pos.make(&mut mv);
            let score = -self.negamax(pos, depth - 1, -beta, -alpha, -turn, ply + 1);
            pos.undo(&mv);

            if score > best {
                best = score;
                if ply == 0 {
                    self.root_best = mv;
                }
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                break;
            }
        }

        self.put_buffer(ply, moves);
        best
    }

    // Fail-hard: returns at most beta, at least the stand-pat-raised
    // alpha. Captures only, so the recursion is bounded by the material
    // on the board.
    fn quiescence(
        &mut self,
        pos: &mut Position,
        mut alpha: i32,
        beta: i32,
        turn: i32,
        ply: u32,
    ) -> i32 {
        self.nodes += 1;

        let stand_pat = turn * evaluate(pos);
        if stand_pat >= beta {
            return beta;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        let side = pos.side_to_move;
        let mut moves = self.take_buffer(ply);
        generate_legal_into(pos, side, &mut moves);
        moves.retain(|mv| mv.is_capture);
        order_moves(pos, &mut moves);

        for i in 0..moves.len() {
            let mut mv = moves[i];
            pos.make(&mut mv);
            let score = -self.quiescence(pos, -beta, -alpha, -turn, ply + 1);
            pos.undo(&mv);

            if score >= beta {
                self.put_buffer(ply, moves);
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        self.put_buffer(ply, moves);
        alpha
    }

    fn take_buffer(&mut self, ply: u32) -> Vec<Move> {
        let ply = ply as usize;
        while self.buffers.len() <= ply {
            self.buffers.push(Vec::with_capacity(MAX_MOVES));
        }
        std::mem::take(&mut self.buffers[ply])
    }

    fn put_buffer(&mut self, ply: u32, buffer: Vec<Move>) {
        self.buffers[ply as usize] = buffer;
    }
}

impl Default for Search {
    fn default() -> Search {
        Search::new()
    }
}

#[inline(always)]
fn turn_multiplier(side: Color) -> i32 {
    match side {
        Color::White => 1,
        Color::Black => -1,
    }
}
