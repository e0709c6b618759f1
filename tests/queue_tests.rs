//! Scenario tests for PriorityQueue
//!
//! These tests drive the queue through its public API the way the
//! registry layer does: integer elements and priorities, ordered traversal
//! through get_first/get_next, removals and priority changes.

use linked_priority_queue::{FnBehavior, Natural, PriorityQueue, QueueBuilder, QueueError};

fn int_queue() -> PriorityQueue<FnBehavior<i32, i32>> {
    QueueBuilder::new()
        .copy_element(|e: &i32| Some(*e))
        .free_element(drop)
        .equal_elements(|a: &i32, b: &i32| a == b)
        .copy_priority(|p: &i32| Some(*p))
        .free_priority(drop)
        .compare_priorities(|a: &i32, b: &i32| a.cmp(b))
        .build()
        .unwrap()
}

/// Collects the queue through the embedded cursor
fn traverse<B>(queue: &PriorityQueue<B>) -> Vec<B::Element>
where
    B: linked_priority_queue::QueueBehavior,
    B::Element: Clone,
{
    let mut out = Vec::new();
    let mut current = queue.get_first();
    while let Some(element) = current {
        out.push(element.clone());
        current = queue.get_next();
    }
    out
}

#[test]
fn test_insert_remove_scenario() {
    let mut queue = int_queue();
    queue.insert(&10, &5).unwrap();
    queue.insert(&20, &5).unwrap();
    queue.insert(&30, &7).unwrap();
    assert_eq!(traverse(&queue), vec![30, 10, 20]);

    queue.remove_element(&10).unwrap();
    assert_eq!(traverse(&queue), vec![30, 20]);
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_get_next_after_insert_is_invalid() {
    let mut queue = int_queue();
    queue.insert(&1, &1).unwrap();
    queue.insert(&2, &2).unwrap();

    assert_eq!(queue.get_first(), Some(&2));
    queue.insert(&3, &3).unwrap();
    assert_eq!(queue.get_next(), None);
}

#[test]
fn test_every_mutation_invalidates_cursor() {
    let mut queue = int_queue();
    for i in 0..6 {
        queue.insert(&i, &i).unwrap();
    }

    queue.get_first();
    queue.remove_first();
    assert_eq!(queue.get_next(), None);

    queue.get_first();
    queue.remove_element(&2).unwrap();
    assert_eq!(queue.get_next(), None);

    queue.get_first();
    queue.change_priority(&1, &1, &9).unwrap();
    assert_eq!(queue.get_next(), None);

    queue.get_first();
    queue.clear();
    assert_eq!(queue.get_next(), None);
}

#[test]
fn test_failed_lookup_keeps_cursor() {
    let mut queue = int_queue();
    queue.insert(&1, &2).unwrap();
    queue.insert(&2, &1).unwrap();

    assert_eq!(queue.get_first(), Some(&1));
    assert_eq!(queue.remove_element(&42), Err(QueueError::ElementDoesNotExist));
    assert_eq!(queue.get_next(), Some(&2));
}

#[test]
fn test_get_next_without_get_first() {
    let mut queue = int_queue();
    queue.insert(&1, &1).unwrap();
    assert_eq!(queue.get_next(), None);
}

#[test]
fn test_get_next_past_tail() {
    let mut queue = int_queue();
    queue.insert(&1, &1).unwrap();
    assert_eq!(queue.get_first(), Some(&1));
    assert_eq!(queue.get_next(), None);
    assert_eq!(queue.get_next(), None);
}

#[test]
fn test_fifo_within_band_survives_unrelated_changes() {
    let mut queue = int_queue();
    queue.insert(&1, &5).unwrap();
    queue.insert(&2, &5).unwrap();
    queue.insert(&3, &5).unwrap();

    queue.insert(&100, &9).unwrap();
    queue.insert(&200, &1).unwrap();
    queue.remove_element(&100).unwrap();
    queue.insert(&4, &5).unwrap();
    queue.remove_first();

    assert_eq!(traverse(&queue), vec![2, 3, 4, 200]);
}

#[test]
fn test_change_priority_moves_element() {
    let mut queue = int_queue();
    queue.insert(&10, &5).unwrap();
    queue.insert(&20, &5).unwrap();
    queue.insert(&30, &7).unwrap();

    queue.change_priority(&20, &5, &8).unwrap();
    assert_eq!(traverse(&queue), vec![20, 30, 10]);

    queue.change_priority(&20, &8, &1).unwrap();
    assert_eq!(traverse(&queue), vec![30, 10, 20]);
    assert_eq!(queue.len(), 3);
}

#[test]
fn test_change_priority_mismatch_leaves_queue() {
    let mut queue = int_queue();
    queue.insert(&10, &5).unwrap();
    queue.insert(&30, &7).unwrap();

    assert_eq!(
        queue.change_priority(&10, &7, &9),
        Err(QueueError::ElementDoesNotExist)
    );
    assert_eq!(
        queue.change_priority(&11, &5, &9),
        Err(QueueError::ElementDoesNotExist)
    );
    assert_eq!(traverse(&queue), vec![30, 10]);
}

#[test]
fn test_change_priority_targets_matching_duplicate() {
    let mut queue = int_queue();
    queue.insert(&7, &9).unwrap();
    queue.insert(&7, &3).unwrap();
    queue.insert(&8, &2).unwrap();

    queue.change_priority(&7, &3, &1).unwrap();
    let pairs: Vec<_> = queue.iter().map(|(p, e)| (*p, *e)).collect();
    assert_eq!(pairs, vec![(9, 7), (2, 8), (1, 7)]);
}

#[test]
fn test_remove_then_contains() {
    let mut queue = int_queue();
    queue.insert(&1, &1).unwrap();
    queue.insert(&2, &2).unwrap();
    queue.insert(&1, &3).unwrap();

    queue.remove_element(&1).unwrap();
    assert!(queue.contains(&1));
    queue.remove_element(&1).unwrap();
    assert!(!queue.contains(&1));
    assert_eq!(queue.remove_element(&1), Err(QueueError::ElementDoesNotExist));
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_remove_first_on_empty_is_noop() {
    let mut queue = int_queue();
    queue.remove_first();
    assert_eq!(queue.len(), 0);
    queue.insert(&1, &1).unwrap();
    queue.remove_first();
    queue.remove_first();
    assert!(queue.is_empty());
}

#[test]
fn test_clone_matches_and_is_independent() {
    let mut queue = int_queue();
    queue.insert(&10, &5).unwrap();
    queue.insert(&20, &5).unwrap();
    queue.insert(&30, &7).unwrap();

    let mut copy = queue.try_clone().unwrap();
    let source_pairs: Vec<_> = queue.iter().map(|(p, e)| (*p, *e)).collect();
    let copy_pairs: Vec<_> = copy.iter().map(|(p, e)| (*p, *e)).collect();
    assert_eq!(source_pairs, copy_pairs);

    copy.remove_element(&30).unwrap();
    copy.insert(&40, &6).unwrap();
    assert_eq!(traverse(&queue), vec![30, 10, 20]);
    assert_eq!(traverse(&copy), vec![40, 10, 20]);

    queue.clear();
    assert_eq!(traverse(&copy), vec![40, 10, 20]);
}

#[test]
fn test_clone_resets_source_cursor() {
    let mut queue = int_queue();
    queue.insert(&1, &2).unwrap();
    queue.insert(&2, &1).unwrap();

    assert_eq!(queue.get_first(), Some(&1));
    let copy = queue.try_clone().unwrap();
    assert_eq!(queue.get_next(), None);
    assert_eq!(copy.get_next(), None);
}

#[test]
fn test_clone_of_empty_queue() {
    let queue = int_queue();
    let copy = queue.try_clone().unwrap();
    assert!(copy.is_empty());
    assert_eq!(copy.get_first(), None);
}

#[test]
fn test_clear_then_reuse() {
    let mut queue = int_queue();
    for i in 0..10 {
        queue.insert(&i, &(i % 3)).unwrap();
    }
    queue.clear();
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.get_first(), None);

    queue.insert(&5, &5).unwrap();
    assert_eq!(traverse(&queue), vec![5]);
}

#[test]
fn test_size_matches_traversal() {
    let mut queue = int_queue();
    for i in 0..25 {
        queue.insert(&i, &(i % 4)).unwrap();
    }
    for i in (0..25).step_by(3) {
        queue.remove_element(&i).unwrap();
    }
    assert_eq!(queue.len(), 25 - 9);
    assert_eq!(traverse(&queue).len(), queue.len());
    assert_eq!(queue.iter().count(), queue.len());
}

#[test]
fn test_custom_comparator_reverses_order() {
    let mut queue = QueueBuilder::<&'static str, u32>::new()
        .copy_element(|e| Some(*e))
        .free_element(drop)
        .equal_elements(|a, b| a == b)
        .copy_priority(|p| Some(*p))
        .free_priority(drop)
        .compare_priorities(|a, b| b.cmp(a))
        .build()
        .unwrap();

    queue.insert(&"late", &20).unwrap();
    queue.insert(&"early", &1).unwrap();
    queue.insert(&"middle", &10).unwrap();
    assert_eq!(traverse(&queue), vec!["early", "middle", "late"]);
}

#[test]
fn test_missing_behavior_is_null_argument() {
    let result = QueueBuilder::<i32, i32>::new()
        .copy_element(|e| Some(*e))
        .free_element(drop)
        .copy_priority(|p| Some(*p))
        .free_priority(drop)
        .compare_priorities(|a, b| a.cmp(b))
        .build();
    assert_eq!(result.unwrap_err(), QueueError::NullArgument("equal_elements"));
}

#[test]
fn test_natural_queue_push_pop() {
    let mut queue: PriorityQueue<Natural<String, u8>> = PriorityQueue::default();
    queue.push(1, "b".to_string());
    queue.push(3, "a".to_string());
    queue.push(1, "c".to_string());

    assert_eq!(queue.peek(), Some((&3, &"a".to_string())));
    assert_eq!(queue.pop(), Some((3, "a".to_string())));
    assert_eq!(queue.pop(), Some((1, "b".to_string())));
    assert_eq!(queue.pop(), Some((1, "c".to_string())));
    assert_eq!(queue.pop(), None);
}

#[test]
fn test_shared_behavior_between_queues() {
    use std::rc::Rc;

    let behavior = Rc::new(Natural::<i32, i32>::new());
    let mut a = PriorityQueue::with_shared(Rc::clone(&behavior));
    let mut b = PriorityQueue::with_shared(Rc::clone(&behavior));
    a.push(1, 1);
    b.push(2, 2);
    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 1);
    assert_eq!(Rc::strong_count(&behavior), 3);

    let c = a.try_clone().unwrap();
    assert_eq!(Rc::strong_count(&behavior), 4);
    drop(c);
    assert_eq!(Rc::strong_count(&behavior), 3);
}

#[test]
fn test_error_display() {
    assert_eq!(
        QueueError::NullArgument("copy_element").to_string(),
        "missing required argument: copy_element"
    );
    assert_eq!(
        QueueError::ElementDoesNotExist.to_string(),
        "element does not exist in the queue"
    );
}
