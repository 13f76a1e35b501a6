use dsatty::algorithms::{expression, monotonic};
use dsatty::collections::{
    ArrayQueue, ArrayStack, CircularLinkedList, CircularQueue, ContainerError, Deque,
    DoublyLinkedList, LinkedQueue, LinkedStack, SinglyLinkedList,
};
use dsatty::trace::Visualize;

#[test]
fn test_stacks_are_lifo() {
    let mut array = ArrayStack::with_capacity(3).expect("capacity");
    let mut linked = LinkedStack::new();
    for value in 1..=3 {
        array.push(value).expect("push");
        linked.push(value);
    }

    let from_array: Vec<i32> = std::iter::from_fn(|| array.pop().ok()).collect();
    let from_linked: Vec<i32> = std::iter::from_fn(|| linked.pop().ok()).collect();
    assert_eq!(from_array, vec![3, 2, 1]);
    assert_eq!(from_linked, vec![3, 2, 1]);
}

#[test]
fn test_stack_underflow_and_overflow() {
    let mut stack = ArrayStack::with_capacity(1).expect("capacity");
    assert!(stack.pop().unwrap_err().is_empty());
    assert!(stack.peek().unwrap_err().is_empty());

    stack.push('a').expect("push");
    let err = stack.push('b').unwrap_err();
    assert!(err.is_full());
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.peek(), Ok(&'a'));
}

#[test]
fn test_queues_are_fifo() {
    let mut array = ArrayQueue::with_capacity(3).expect("capacity");
    let mut ring = CircularQueue::with_capacity(3).expect("capacity");
    let mut linked = LinkedQueue::new();
    for value in 1..=3 {
        array.enqueue(value).expect("enqueue");
        ring.enqueue(value).expect("enqueue");
        linked.enqueue(value);
    }

    let from_array: Vec<i32> = std::iter::from_fn(|| array.dequeue().ok()).collect();
    let from_ring: Vec<i32> = std::iter::from_fn(|| ring.dequeue().ok()).collect();
    let from_linked: Vec<i32> = std::iter::from_fn(|| linked.dequeue().ok()).collect();
    assert_eq!(from_array, vec![1, 2, 3]);
    assert_eq!(from_ring, vec![1, 2, 3]);
    assert_eq!(from_linked, vec![1, 2, 3]);
}

#[test]
fn test_circular_queue_reuses_slots_linear_does_not() {
    let mut linear = ArrayQueue::with_capacity(2).expect("capacity");
    let mut ring = CircularQueue::with_capacity(2).expect("capacity");
    for value in [1, 2] {
        linear.enqueue(value).expect("enqueue");
        ring.enqueue(value).expect("enqueue");
    }
    linear.dequeue().expect("dequeue");
    ring.dequeue().expect("dequeue");

    assert!(linear.enqueue(3).unwrap_err().is_full());
    ring.enqueue(3).expect("freed slot is reused");
    assert_eq!(ring.rear_index(), Some(0));
    assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
}

#[test]
fn test_deque_both_ends() {
    let mut deque = Deque::with_capacity(3).expect("capacity");
    deque.push_back(2).expect("push");
    deque.push_front(1).expect("push");
    deque.push_back(3).expect("push");
    assert!(deque.push_front(0).unwrap_err().is_full());

    assert_eq!(deque.pop_back(), Ok(3));
    assert_eq!(deque.pop_front(), Ok(1));
    assert_eq!(deque.front(), deque.back());
}

#[test]
fn test_zero_capacity_rejected() {
    assert_eq!(
        ArrayStack::<u8>::with_capacity(0).unwrap_err(),
        ContainerError::ZeroCapacity {
            container: "ArrayStack"
        }
    );
    assert!(CircularQueue::<u8>::with_capacity(0).is_err());
}

#[test]
fn test_singly_list_edits() {
    let mut list: SinglyLinkedList<i32> = (1..=4).collect();
    list.insert(2, 10).expect("insert");
    assert_eq!(list.remove(0), Ok(1));
    list.reverse();

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![4, 3, 10, 2]);
    assert_eq!(list.len(), 4);
    assert!(matches!(
        list.remove(4),
        Err(ContainerError::IndexOutOfBounds { index: 4, len: 4 })
    ));
}

#[test]
fn test_doubly_list_directions_agree() {
    let list: DoublyLinkedList<char> = "stack".chars().collect();
    let forward: String = list.iter().collect();
    let mut backward: Vec<char> = list.iter_rev().copied().collect();
    backward.reverse();
    assert_eq!(forward, "stack");
    assert_eq!(backward.into_iter().collect::<String>(), forward);
}

#[test]
fn test_doubly_list_stale_handle() {
    let mut list = DoublyLinkedList::new();
    let a = list.push_back(1);
    list.push_back(2);
    assert_eq!(list.remove(a), Ok(1));
    assert!(matches!(list.remove(a), Err(ContainerError::StaleNode { .. })));
    assert!(list.insert_after(a, 9).is_err());
    assert_eq!(list.len(), 1);
}

#[test]
fn test_doubly_list_rejects_handle_from_another_list() {
    let mut left = DoublyLinkedList::new();
    let mut right = DoublyLinkedList::new();
    let from_left = left.push_back('a');
    right.push_back('x');
    right.push_back('y');

    assert_eq!(
        right.remove(from_left),
        Err(ContainerError::ForeignNode { index: 0 })
    );
    assert!(right.insert_before(from_left, 'z').is_err());
    assert_eq!(right.iter().collect::<String>(), "xy");
    assert_eq!(left.remove(from_left), Ok('a'));
}

#[test]
fn test_circular_list_iterates_one_lap() {
    let mut ring: CircularLinkedList<u32> = (1..=4).collect();
    assert_eq!(ring.iter().count(), ring.len());

    ring.rotate().expect("rotate");
    assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4, 1]);
    assert_eq!(ring.back(), Some(&1));
}

#[test]
fn test_josephus_order() {
    let mut ring: CircularLinkedList<u32> = (1..=7).collect();
    assert_eq!(ring.remove_every(3), Ok(vec![3, 6, 2, 7, 5, 1, 4]));
    assert!(ring.is_empty());
}

#[test]
fn test_views_carry_markers() {
    let mut queue = CircularQueue::with_capacity(3).expect("capacity");
    queue.enqueue(7).expect("enqueue");
    let view = queue.view();
    assert_eq!(view.cells.len(), 3);
    assert_eq!(view.markers_at(0), vec!["front", "rear"]);
}

#[test]
fn test_monotonic_matches_brute_force() {
    let values = [2, 7, 3, 5, 4, 6, 8, 1];
    let brute: Vec<Option<usize>> = (0..values.len())
        .map(|i| (i + 1..values.len()).find(|&j| values[j] > values[i]))
        .collect();
    assert_eq!(monotonic::next_greater(&values), brute);
}

#[test]
fn test_expression_pipeline() {
    assert_eq!(expression::evaluate("2 * (3 + 4) - 5"), Ok(9));
    assert_eq!(
        expression::evaluate("1 / 0"),
        Err(expression::ExprError::DivisionByZero)
    );
    assert!(!expression::is_balanced("(]"));
    for adjacent in ["1 2 +", "+ 1 2", "(1 2 *)"] {
        assert!(expression::evaluate(adjacent).is_err(), "{} evaluated", adjacent);
    }
}
