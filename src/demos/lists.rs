use crate::collections::{CircularLinkedList, DoublyLinkedList, SinglyLinkedList};
use crate::trace::{Outcome, Recorder, TraceError};

pub(super) fn singly(rec: &mut Recorder) -> Result<(), TraceError> {
    let mut list: SinglyLinkedList<i32> = SinglyLinkedList::new();
    rec.record("SinglyLinkedList::new()", Outcome::Done, &[&list])?;

    for value in [20, 30] {
        list.push_back(value);
        rec.record(format!("push_back({})", value), Outcome::Done, &[&list])?;
    }
    list.push_front(10);
    rec.record("push_front(10)", Outcome::Done, &[&list])?;

    let result = list.insert(2, 25);
    rec.record("insert(2, 25)", Outcome::from_unit(&result), &[&list])?;
    let result = list.insert(9, 99);
    rec.record("insert(9, 99)", Outcome::from_unit(&result), &[&list])?;

    rec.println(format!(
        "contains(25) = {}, position of 30 = {}",
        list.contains(&25),
        super::or_dash(list.position(|&v| v == 30))
    ))?;
    rec.println(format!("middle = {}", super::or_dash(list.middle())))?;

    let result = list.remove(1);
    rec.record("remove(1)", Outcome::from_result(&result), &[&list])?;

    list.reverse();
    rec.record("reverse()", Outcome::Done, &[&list])?;

    let result = list.pop_back();
    rec.record("pop_back()", Outcome::from_result(&result), &[&list])?;

    while !list.is_empty() {
        let result = list.pop_front();
        rec.record("pop_front()", Outcome::from_result(&result), &[&list])?;
    }
    let result = list.pop_front();
    rec.record("pop_front()", Outcome::from_result(&result), &[&list])?;
    Ok(())
}

pub(super) fn doubly(rec: &mut Recorder) -> Result<(), TraceError> {
    let mut list: DoublyLinkedList<char> = DoublyLinkedList::new();
    rec.record("DoublyLinkedList::new()", Outcome::Done, &[&list])?;

    let b = list.push_back('B');
    rec.record("push_back('B')", Outcome::Done, &[&list])?;
    list.push_front('A');
    rec.record("push_front('A')", Outcome::Done, &[&list])?;
    let d = list.push_back('D');
    rec.record("push_back('D')", Outcome::Done, &[&list])?;

    let c = list.insert_after(b, 'C')?;
    rec.record("insert_after(B, 'C')", Outcome::Done, &[&list])?;
    list.insert_before(d, 'X')?;
    rec.record("insert_before(D, 'X')", Outcome::Done, &[&list])?;

    let forward: String = list.iter().collect();
    let backward: String = list.iter_rev().collect();
    rec.println(format!("forward: {}  backward: {}", forward, backward))?;

    let result = list.remove(c);
    rec.record("remove(C)", Outcome::from_result(&result), &[&list])?;
    let result = list.remove(c);
    rec.record("remove(C) again", Outcome::from_result(&result), &[&list])?;

    if let Some(x) = list.find(|&v| v == 'X') {
        let result = list.remove(x);
        rec.record("remove(find('X'))", Outcome::from_result(&result), &[&list])?;
    }

    let result = list.pop_back();
    rec.record("pop_back()", Outcome::from_result(&result), &[&list])?;
    let result = list.pop_front();
    rec.record("pop_front()", Outcome::from_result(&result), &[&list])?;
    rec.println(format!(
        "head and tail now both hold {}",
        super::or_dash(list.front())
    ))?;
    Ok(())
}

pub(super) fn circular(rec: &mut Recorder) -> Result<(), TraceError> {
    let mut ring: CircularLinkedList<u32> = CircularLinkedList::new();
    rec.record("CircularLinkedList::new()", Outcome::Done, &[&ring])?;

    for value in 1..=5 {
        ring.push_back(value)?;
        rec.record(format!("push_back({})", value), Outcome::Done, &[&ring])?;
    }

    ring.rotate()?;
    rec.record("rotate()", Outcome::Done, &[&ring])?;
    ring.rotate()?;
    rec.record("rotate()", Outcome::Done, &[&ring])?;
    rec.println(format!(
        "After two rotations the head is {} and the tail is {}",
        super::or_dash(ring.front()),
        super::or_dash(ring.back())
    ))?;

    // Josephus with k = 2, one elimination per snapshot
    let mut ring: CircularLinkedList<u32> = (1..=5).collect();
    rec.record("Josephus ring, k = 2", Outcome::Done, &[&ring])?;
    let mut eliminated = Vec::new();
    while !ring.is_empty() {
        ring.rotate()?;
        let result = ring.pop_front();
        rec.record("skip one, remove next", Outcome::from_result(&result), &[&ring])?;
        if let Ok(value) = result {
            eliminated.push(value.to_string());
        }
    }
    rec.println(format!("Elimination order: {}", eliminated.join(" ")))?;
    Ok(())
}
