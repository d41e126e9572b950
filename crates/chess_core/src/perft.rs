use crate::{board::GameState, movegen::legal_moves_into, moves::Move};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
pub fn perft(state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(state: &mut GameState, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 0;
        };

        legal_moves_into(state, buf);

        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            state.make_move(mv);
            nodes += inner(state, depth - 1, rest);
            state.undo_move();
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(state, depth, &mut layers[..])
}

/// Perft split by root move, in generation order. Each entry is the root
/// move and the node count below it; the counts sum to `perft(state, depth)`.
pub fn perft_divide(state: &mut GameState, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let root = state.legal_moves();
    root.into_iter()
        .map(|mv| {
            state.make_move(mv);
            let nodes = perft(state, depth - 1);
            state.undo_move();
            (mv, nodes)
        })
        .collect()
}
