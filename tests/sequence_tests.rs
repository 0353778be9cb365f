#![cfg(feature = "sequence")]
//! Integration tests for the eager slice combinators.

use pullwise::sequence::{filter, map, reduce};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: &'static str,
    age: u32,
}

fn people() -> Vec<Person> {
    vec![
        Person { name: "Ada", age: 36 },
        Person { name: "Tim", age: 12 },
        Person { name: "Grace", age: 85 },
    ]
}

#[rstest]
fn test_reduce_sum_of_range() {
    let total: i32 = reduce(&[0, 1, 2, 3, 4, 5], |sum, value| sum + value);
    assert_eq!(total, 15);
}

#[rstest]
fn test_map_projects_fields() {
    assert_eq!(map(&people(), |person| person.name), vec!["Ada", "Tim", "Grace"]);
}

#[rstest]
fn test_filter_leaves_input_untouched() {
    let everyone = people();
    let adults = filter(&everyone, |person| person.age >= 18);

    assert_eq!(adults.len(), 2);
    assert_eq!(everyone.len(), 3);
    assert!(adults.iter().all(|person| person.age >= 18));
}

#[rstest]
#[case(vec![], 0)]
#[case(vec![7], 7)]
#[case(vec![1, 2, 3, 4], 10)]
fn test_reduce_total_age(#[case] ages: Vec<u32>, #[case] expected: u32) {
    assert_eq!(reduce(&ages, |sum: u32, age| sum + age), expected);
}

#[rstest]
fn test_empty_input_yields_empty_vec() {
    let nobody: Vec<Person> = Vec::new();

    assert_eq!(map(&nobody, |person| person.age), Vec::<u32>::new());
    assert_eq!(filter(&nobody, |_| true), Vec::new());
}
