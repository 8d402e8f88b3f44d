use proptest::prelude::*;
use ranker_core::comment::{Comment, CommentBuilder};
use ranker_core::rank::{compare, rank, RankMode};
use std::cmp::Ordering;
use std::sync::Arc;
use std::thread;

fn mode_strategy() -> impl Strategy<Value = RankMode> {
    prop_oneof![
        Just(RankMode::Agree),
        Just(RankMode::Disagree),
        Just(RankMode::Divisive),
        Just(RankMode::Stars),
    ]
}

// Small value ranges so that ties on every key actually happen.
fn comments_strategy() -> impl Strategy<Value = Vec<Comment>> {
    prop::collection::vec((0u32..6, 0u32..6, 0u8..3, 0usize..4, 0i64..3), 0..40).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (a, d, stars, len, created))| {
                    CommentBuilder::new(i as u64)
                        .votes(a, d)
                        .stars(f64::from(stars))
                        .text("x".repeat(len))
                        .created_ms(created)
                        .build()
                })
                .collect()
        },
    )
}

fn ids(ranked: &[&Comment]) -> Vec<u64> {
    ranked.iter().map(|c| c.id.0).collect()
}

proptest! {
    #[test]
    fn prop_rank_is_permutation(comments in comments_strategy(), mode in mode_strategy()) {
        let mut ranked = ids(&rank(&comments, mode));
        ranked.sort_unstable();
        let expected: Vec<u64> = (0..comments.len() as u64).collect();
        prop_assert_eq!(ranked, expected);
    }

    #[test]
    fn prop_rank_is_deterministic(comments in comments_strategy(), mode in mode_strategy()) {
        prop_assert_eq!(ids(&rank(&comments, mode)), ids(&rank(&comments, mode)));
    }

    #[test]
    fn prop_rank_is_idempotent(comments in comments_strategy(), mode in mode_strategy()) {
        let once: Vec<Comment> = rank(&comments, mode).into_iter().cloned().collect();
        let twice = rank(&once, mode);
        prop_assert_eq!(ids(&twice), once.iter().map(|c| c.id.0).collect::<Vec<_>>());
    }

    #[test]
    fn prop_rank_ignores_input_order(comments in comments_strategy(), mode in mode_strategy()) {
        let mut reversed = comments.clone();
        reversed.reverse();
        prop_assert_eq!(ids(&rank(&comments, mode)), ids(&rank(&reversed, mode)));
    }

    #[test]
    fn prop_neighbours_strictly_ordered(comments in comments_strategy(), mode in mode_strategy()) {
        let ranked = rank(&comments, mode);
        for pair in ranked.windows(2) {
            prop_assert_eq!(compare(mode, pair[0], pair[1]), Ordering::Less);
        }
    }
}

#[test]
fn rank_from_many_threads() {
    let comments: Arc<Vec<Comment>> = Arc::new(
        (0..50u32)
            .map(|i| CommentBuilder::new(u64::from(i)).votes(i % 7, i % 5).build())
            .collect(),
    );
    let expected = ids(&rank(&comments, RankMode::Divisive));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let comments = Arc::clone(&comments);
            thread::spawn(move || ids(&rank(&comments, RankMode::Divisive)))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
