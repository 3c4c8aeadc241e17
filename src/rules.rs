// rules.rs - B3/S23 transition rule

/// Moore neighborhood as (dx, dy) offsets.
pub const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, 0), (1, 0), (0, -1), (0, 1),
    (-1, 1), (1, -1), (-1, -1), (1, 1),
];

/// Next state of a cell given its current state and live neighbor count.
#[inline]
pub const fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_birth_and_survival_for_every_input() {
        for alive in [false, true] {
            for neighbors in 0..=8u8 {
                let expected = neighbors == 3 || (alive && neighbors == 2);
                assert_eq!(next_state(alive, neighbors), expected, "alive={alive} n={neighbors}");
            }
        }
    }

    #[test]
    fn offsets_cover_moore_neighborhood_once() {
        let mut seen = NEIGHBOR_OFFSETS.to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 8);
        assert!(!seen.contains(&(0, 0)));
        assert!(seen.iter().all(|&(dx, dy)| (-1..=1).contains(&dx) && (-1..=1).contains(&dy)));
    }
}
