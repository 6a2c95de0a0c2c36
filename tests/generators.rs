//! Generator behaviour: ordering, bounds and edge cases

use seqwrap::generators::{concat, cycle, infinity, range, repeat, zip, zip_all};
use test_case::test_case;

#[test]
fn test_concat_iterables() {
    let out: Vec<i32> = concat([vec![0, 1], vec![2, 3, 4, 5], vec![6, 7]]).collect();
    assert_eq!(out, vec![0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_concat_macro_mixes_source_types() {
    let out: Vec<u8> = seqwrap::concat!(vec![0u8, 1], [2, 3, 4, 5], 6..8).collect();
    assert_eq!(out, vec![0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_cycle_throughout_the_iterable() {
    for (i, o) in cycle(vec![0, 1, 2]).take(101).enumerate() {
        assert_eq!(o, i % 3);
    }
}

#[test_case(0.0, 1.0 ; "go forward with integer")]
#[test_case(5.0, 0.1 ; "go forward with decimal")]
#[test_case(100.0, -3.0 ; "go backward with integer")]
#[test_case(100.0, -0.7 ; "go backward with decimal")]
fn test_infinity_steps(start: f64, step: f64) {
    let mut expected = start;
    for o in infinity(start, step).take(101) {
        assert_eq!(o, expected);
        expected += step;
    }
}

#[test_case(0.0, 10.0, 1.0 => vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0] ; "integer start included end excluded")]
#[test_case(0.0, 1.0, 0.2 => vec![0.0, 0.2, 0.4, 0.6000000000000001, 0.8] ; "decimal start included end excluded")]
#[test_case(5.0, 2.0, -1.0 => vec![5.0, 4.0, 3.0] ; "negative step")]
#[test_case(5.0, 2.0, 1.0 => Vec::<f64>::new() ; "start above end with positive step")]
#[test_case(2.0, 8.0, -0.3 => Vec::<f64>::new() ; "start below end with negative step")]
fn test_range(start: f64, end: f64, step: f64) -> Vec<f64> {
    range(start, end, step).collect()
}

#[test]
fn test_range_zero_step_below_end_is_empty() {
    assert_eq!(range(1, 5, 0).next(), None);
}

#[test]
fn test_range_zero_step_above_end_repeats_start() {
    let out: Vec<i32> = range(5, 1, 0).take(4).collect();
    assert_eq!(out, vec![5, 5, 5, 5]);
}

#[test_case("Foo", 5 => vec!["Foo"; 5] ; "five copies")]
#[test_case("Bar", 2 => vec!["Bar", "Bar"] ; "two copies")]
#[test_case("Goo", 0 => Vec::<&str>::new() ; "zero count")]
#[test_case("Baz", -3 => Vec::<&str>::new() ; "negative count")]
fn test_repeat(value: &'static str, count: i64) -> Vec<&'static str> {
    repeat(value, count).collect()
}

#[test]
fn test_zip_tuples_of_mixed_types() {
    let rows: Vec<(usize, char, bool)> =
        zip((0..5usize, ['a', 'b', 'c'], [true, false, true, false])).collect();
    assert_eq!(rows, vec![(0, 'a', true), (1, 'b', false), (2, 'c', true)]);
}

#[test]
fn test_zip_all_shortest_wins() {
    let rows: Vec<Vec<char>> = zip_all(["abc".chars(), "de".chars()]).collect();
    assert_eq!(rows, vec![vec!['a', 'd'], vec!['b', 'e']]);
}
