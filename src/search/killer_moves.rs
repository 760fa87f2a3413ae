use crate::move_generation::move_path::MovePath;

/// Bounded per-ply record of moves that caused a beta cutoff.
#[derive(Debug, Clone)]
pub struct KillerMoves {
    slots: usize,
    per_ply: Vec<Vec<MovePath>>,
}

impl KillerMoves {
    pub fn new(max_ply: usize, slots: usize) -> Self {
        Self {
            slots: slots.max(1),
            per_ply: vec![Vec::new(); max_ply + 1],
        }
    }

    pub fn killers_at(&self, ply: usize) -> &[MovePath] {
        self.per_ply.get(ply).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn is_killer(&self, ply: usize, path: &MovePath) -> bool {
        self.killers_at(ply).contains(path)
    }

    /// Newest first; the oldest entry falls off once the ply is full.
    pub fn record(&mut self, ply: usize, path: &MovePath) {
        let Some(killers) = self.per_ply.get_mut(ply) else {
            return;
        };
        if killers.contains(path) {
            return;
        }
        if killers.len() == self.slots {
            killers.pop();
        }
        killers.insert(0, path.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::KillerMoves;
    use crate::game_state::checkers_types::Coord;
    use crate::move_generation::move_path::MovePath;

    fn step(row: u8, col: u8, to_row: u8, to_col: u8) -> MovePath {
        MovePath::single(Coord::new(row, col), Coord::new(to_row, to_col))
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut killers = KillerMoves::new(4, 2);
        killers.record(1, &step(5, 0, 4, 1));
        killers.record(1, &step(5, 2, 4, 3));
        killers.record(1, &step(5, 2, 4, 3));
        assert_eq!(killers.killers_at(1).len(), 2);

        killers.record(1, &step(5, 4, 4, 5));
        assert_eq!(killers.killers_at(1), &[step(5, 4, 4, 5), step(5, 2, 4, 3)]);
        assert!(!killers.is_killer(1, &step(5, 0, 4, 1)));
        assert!(killers.killers_at(0).is_empty());
    }

    #[test]
    fn out_of_range_ply_is_ignored() {
        let mut killers = KillerMoves::new(1, 2);
        killers.record(7, &step(5, 0, 4, 1));
        assert!(killers.killers_at(7).is_empty());
    }
}
