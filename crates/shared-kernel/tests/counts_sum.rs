// crates/shared-kernel/tests/counts_sum.rs
use countable_shared_kernel::{CharCount, ParagraphCount, WordCount};

#[test]
fn paragraph_sum() {
    let total = [1usize, 2, 3]
        .into_iter()
        .map(ParagraphCount::from)
        .sum::<ParagraphCount>();
    assert_eq!(usize::from(total), 6);
}

#[test]
fn charcount_sum_ref() {
    let values = [CharCount::from(5), CharCount::from(7)];
    let total: CharCount = values.iter().sum();
    assert_eq!(usize::from(total), 12);
}

#[test]
fn wordcount_add_assign() {
    let mut words = WordCount::from(10);
    words += WordCount::from(5);
    assert_eq!(usize::from(words), 15);
    assert_eq!(words, 15usize);
}

#[test]
fn saturating_add_caps_at_max() {
    let near_max = CharCount::new(usize::MAX - 1);
    let total = near_max.saturating_add(CharCount::new(10));
    assert_eq!(usize::from(total), usize::MAX);
}

#[test]
fn zero_is_default() {
    assert_eq!(WordCount::default(), WordCount::zero());
    assert!(WordCount::zero().is_zero());
    assert!(!WordCount::new(1).is_zero());
}
