use crate::align::structs::{Cache, Cell, Direction};
use crate::align::Judge;
use crate::alphabet::GAP;
use crate::structs::Sequence;

/// Fill every cell of the cache with the optimal score of aligning
/// the corresponding prefixes of x and y, along with the move that
/// produced it.
///
/// When more than one move reaches the optimal score, the move is
/// chosen in the order: diagonal, left, up.
pub(crate) fn fill_cache(cache: &mut Cache, x: &Sequence, y: &Sequence, judge: &Judge) {
    assert_eq!(cache.rows(), x.length + 1);
    assert_eq!(cache.cols(), y.length + 1);

    let gap_cost = judge.gap_cost();

    cache.set(0, 0, Cell::new(0, Direction::None));

    for y_idx in 1..=y.length {
        cache.set(0, y_idx, Cell::new(y_idx as i32 * gap_cost, Direction::Left));
    }

    for x_idx in 1..=x.length {
        let x_residue = x.utf8_bytes[x_idx];
        cache.set(x_idx, 0, Cell::new(x_idx as i32 * gap_cost, Direction::Up));

        for y_idx in 1..=y.length {
            let y_residue = y.utf8_bytes[y_idx];

            let diagonal_score =
                cache.get(x_idx - 1, y_idx - 1).score() + judge.score(x_residue, y_residue);
            let left_score = cache.get(x_idx, y_idx - 1).score() + gap_cost;
            let up_score = cache.get(x_idx - 1, y_idx).score() + gap_cost;

            let cell = if diagonal_score >= left_score && diagonal_score >= up_score {
                Cell::new(diagonal_score, Direction::Diagonal)
            } else if left_score >= up_score {
                Cell::new(left_score, Direction::Left)
            } else {
                Cell::new(up_score, Direction::Up)
            };

            cache.set(x_idx, y_idx, cell);
        }
    }

    log::debug!(
        "filled {}x{} alignment cache: optimal score {}",
        cache.rows(),
        cache.cols(),
        cache.get(x.length, y.length).score()
    );
}

/// Follow the parent moves from the bottom right cell back to the origin,
/// marking each visited cell, and return the two aligned sequences.
pub(crate) fn traceback(cache: &mut Cache, x: &Sequence, y: &Sequence) -> (String, String) {
    // the aligned bytes are collected back to front
    let mut aligned_x: Vec<u8> = Vec::with_capacity(x.length + y.length);
    let mut aligned_y: Vec<u8> = Vec::with_capacity(x.length + y.length);

    let mut x_idx = x.length;
    let mut y_idx = y.length;

    while x_idx > 0 || y_idx > 0 {
        cache.mark(x_idx, y_idx);

        match cache.get(x_idx, y_idx).parent() {
            Direction::Diagonal => {
                aligned_x.push(x.utf8_bytes[x_idx]);
                aligned_y.push(y.utf8_bytes[y_idx]);
                x_idx -= 1;
                y_idx -= 1;
            }
            Direction::Up => {
                aligned_x.push(x.utf8_bytes[x_idx]);
                aligned_y.push(GAP);
                x_idx -= 1;
            }
            Direction::Left => {
                aligned_x.push(GAP);
                aligned_y.push(y.utf8_bytes[y_idx]);
                y_idx -= 1;
            }
            Direction::None => {
                panic!("traceback reached a cell with no parent at ({x_idx}, {y_idx})")
            }
        }
    }

    cache.mark(0, 0);

    aligned_x.reverse();
    aligned_y.reverse();

    log::debug!("traced back alignment of length {}", aligned_x.len());

    (
        aligned_x.into_iter().map(char::from).collect(),
        aligned_y.into_iter().map(char::from).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    fn filled(x: &str, y: &str, judge: &Judge) -> anyhow::Result<(Cache, Sequence, Sequence)> {
        let x = Sequence::from_utf8(x.as_bytes())?;
        let y = Sequence::from_utf8(y.as_bytes())?;
        let mut cache = Cache::new(x.length, y.length);
        fill_cache(&mut cache, &x, &y, judge);
        Ok((cache, x, y))
    }

    #[test]
    fn test_boundaries() -> anyhow::Result<()> {
        let judge = Judge::new(5, -4, -3);
        let (cache, _, _) = filled("ACGTA", "GGA", &judge)?;

        check!(*cache.get(0, 0) == Cell::new(0, Direction::None));
        for x_idx in 1..=5 {
            check!(cache.get(x_idx, 0).score() == x_idx as i32 * -3);
            check!(cache.get(x_idx, 0).parent() == Direction::Up);
        }
        for y_idx in 1..=3 {
            check!(cache.get(0, y_idx).score() == y_idx as i32 * -3);
            check!(cache.get(0, y_idx).parent() == Direction::Left);
        }
        Ok(())
    }

    #[test]
    fn test_recurrence_holds_everywhere() -> anyhow::Result<()> {
        let judge = Judge::default();
        let (cache, x, y) = filled("GATTACA", "GCATGCT", &judge)?;

        for x_idx in 1..=x.length {
            for y_idx in 1..=y.length {
                let diagonal = cache.get(x_idx - 1, y_idx - 1).score()
                    + judge.score(x.utf8_bytes[x_idx], y.utf8_bytes[y_idx]);
                let left = cache.get(x_idx, y_idx - 1).score() + judge.gap_cost();
                let up = cache.get(x_idx - 1, y_idx).score() + judge.gap_cost();
                let best = diagonal.max(left).max(up);

                let expected_parent = if best == diagonal {
                    Direction::Diagonal
                } else if best == left {
                    Direction::Left
                } else {
                    Direction::Up
                };

                check!(cache.get(x_idx, y_idx).score() == best);
                check!(cache.get(x_idx, y_idx).parent() == expected_parent);
            }
        }
        Ok(())
    }

    #[test]
    fn test_tie_prefers_diagonal() -> anyhow::Result<()> {
        // diagonal, left, and up all score -2 at (1, 1)
        let (cache, _, _) = filled("A", "C", &Judge::default())?;
        check!(*cache.get(1, 1) == Cell::new(-2, Direction::Diagonal));
        Ok(())
    }

    #[test]
    fn test_tie_prefers_left_over_up() -> anyhow::Result<()> {
        // a mismatch is so expensive that only gaps compete, and they tie
        let (cache, _, _) = filled("A", "C", &Judge::new(1, -10, -1))?;
        check!(*cache.get(1, 1) == Cell::new(-2, Direction::Left));
        Ok(())
    }

    #[test]
    fn test_traceback_marks_path() -> anyhow::Result<()> {
        let (mut cache, x, y) = filled("ACACCC", "GCCTCGA", &Judge::default())?;
        let (aligned_x, aligned_y) = traceback(&mut cache, &x, &y);

        check!(aligned_x == "ACAC_C_C");
        check!(aligned_y == "GC_CTCGA");
        check!(
            cache.path()
                == vec![
                    (0, 0),
                    (1, 1),
                    (2, 2),
                    (3, 2),
                    (4, 3),
                    (4, 4),
                    (5, 5),
                    (5, 6),
                    (6, 7)
                ]
        );
        Ok(())
    }

    #[test]
    fn test_traceback_one_empty() -> anyhow::Result<()> {
        let (mut cache, x, y) = filled("ACGT", "", &Judge::default())?;
        let (aligned_x, aligned_y) = traceback(&mut cache, &x, &y);
        check!(aligned_x == "ACGT");
        check!(aligned_y == "____");
        check!(cache.path().len() == 5);

        let (mut cache, x, y) = filled("", "AC", &Judge::default())?;
        let (aligned_x, aligned_y) = traceback(&mut cache, &x, &y);
        check!(aligned_x == "__");
        check!(aligned_y == "AC");
        check!(cache.get(0, 2).score() == -2);
        Ok(())
    }

    #[test]
    fn test_traceback_both_empty() -> anyhow::Result<()> {
        let (mut cache, x, y) = filled("", "", &Judge::default())?;
        let (aligned_x, aligned_y) = traceback(&mut cache, &x, &y);
        check!(aligned_x.is_empty());
        check!(aligned_y.is_empty());
        check!(cache.path() == vec![(0, 0)]);
        Ok(())
    }
}
