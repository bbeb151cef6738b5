#![allow(unused_macros)]
use rstest_reuse::template;

// This creates a testing "template" holding the worked scoring examples, so
// the aggregation rule and the full scoreboard pipeline are checked against
// the same numbers

#[template]
#[rstest]
#[case::one_miss_doubles(&[5, 0, 2], 34)]
#[case::every_question_missed(&[0, 0, 0], 80)]
#[case::no_misses(&[4, 3, 2], 19)]
pub fn score_vectors(#[case] scores: &[u32], #[case] expected_total: u32) -> () {}
