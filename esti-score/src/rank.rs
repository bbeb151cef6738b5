use bigdecimal::BigDecimal;

/// Assigns competition ranks to an ascending run of total scores
///
/// A team tied with its predecessor repeats the predecessor's rank; any
/// other team takes its one-based position in the run. Positions swallowed
/// by a tie stay swallowed, so `[19, 34, 34, 80]` ranks as `[1, 2, 2, 4]`.
///
/// Ranks key on the totals alone. Two teams with equal totals share a rank
/// even when the tie was broken another way for display order.
pub fn dense_ranks<'a>(totals: impl IntoIterator<Item = &'a BigDecimal>) -> Vec<u32> {
    let mut ranks = Vec::new();
    let mut previous: Option<(&BigDecimal, u32)> = None;
    for (position, total) in totals.into_iter().enumerate() {
        debug_assert!(
            previous.is_none_or(|(earlier, _)| earlier <= total),
            "totals must be sorted ascending"
        );
        let rank = match previous {
            Some((earlier, held)) if earlier == total => held,
            _ => position as u32 + 1,
        };
        ranks.push(rank);
        previous = Some((total, rank));
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(values: &[u32]) -> Vec<BigDecimal> {
        values.iter().map(|&value| BigDecimal::from(value)).collect()
    }

    #[test]
    fn test_ties_share_a_rank_and_swallow_positions() {
        let totals = totals(&[19, 34, 34, 80]);
        assert_eq!(dense_ranks(&totals), vec![1, 2, 2, 4]);
    }

    #[test]
    fn test_distinct_totals_rank_by_position() {
        let totals = totals(&[10, 19, 34, 80]);
        assert_eq!(dense_ranks(&totals), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_leading_tie_holds_rank_one() {
        let totals = totals(&[19, 19, 19, 34]);
        assert_eq!(dense_ranks(&totals), vec![1, 1, 1, 4]);
    }

    #[test]
    fn test_no_totals_no_ranks() {
        assert_eq!(dense_ranks(&totals(&[])), Vec::<u32>::new());
    }
}
