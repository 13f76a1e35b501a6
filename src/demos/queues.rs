use crate::collections::{ArrayQueue, CircularQueue, Deque, LinkedQueue};
use crate::constants::DEMO_CAPACITY;
use crate::trace::{Outcome, Recorder, TraceError};

pub(super) fn linear(rec: &mut Recorder) -> Result<(), TraceError> {
    let mut queue: ArrayQueue<i32> = ArrayQueue::with_capacity(DEMO_CAPACITY)?;
    rec.record(
        format!("ArrayQueue::with_capacity({})", DEMO_CAPACITY),
        Outcome::Done,
        &[&queue],
    )?;

    for value in 1..=DEMO_CAPACITY as i32 {
        let result = queue.enqueue(value);
        rec.record(format!("enqueue({})", value), Outcome::from_unit(&result), &[&queue])?;
    }

    for _ in 0..2 {
        let result = queue.dequeue();
        rec.record("dequeue()", Outcome::from_result(&result), &[&queue])?;
    }

    let result = queue.enqueue(5);
    rec.record("enqueue(5)", Outcome::from_unit(&result), &[&queue])?;
    rec.println(format!(
        "Only {} of {} slots hold values, yet the queue reports full: rear has reached the end",
        queue.len(),
        queue.capacity()
    ))?;

    let result = queue.reset();
    rec.record("reset()", Outcome::from_unit(&result), &[&queue])?;

    while !queue.is_empty() {
        let result = queue.dequeue();
        rec.record("dequeue()", Outcome::from_result(&result), &[&queue])?;
    }
    let result = queue.reset();
    rec.record("reset()", Outcome::from_unit(&result), &[&queue])?;
    let result = queue.enqueue(5);
    rec.record("enqueue(5)", Outcome::from_unit(&result), &[&queue])?;
    rec.println("Slots are usable again only after the queue drains and resets")?;
    Ok(())
}

pub(super) fn circular(rec: &mut Recorder) -> Result<(), TraceError> {
    let mut queue: CircularQueue<i32> = CircularQueue::with_capacity(DEMO_CAPACITY)?;
    rec.record(
        format!("CircularQueue::with_capacity({})", DEMO_CAPACITY),
        Outcome::Done,
        &[&queue],
    )?;

    let result = queue.dequeue();
    rec.record("dequeue()", Outcome::from_result(&result), &[&queue])?;

    for value in 1..=DEMO_CAPACITY as i32 {
        let result = queue.enqueue(value);
        rec.record(format!("enqueue({})", value), Outcome::from_unit(&result), &[&queue])?;
    }
    let result = queue.enqueue(5);
    rec.record("enqueue(5)", Outcome::from_unit(&result), &[&queue])?;

    for _ in 0..2 {
        let result = queue.dequeue();
        rec.record("dequeue()", Outcome::from_result(&result), &[&queue])?;
    }

    for value in [5, 6] {
        let result = queue.enqueue(value);
        rec.record(format!("enqueue({})", value), Outcome::from_unit(&result), &[&queue])?;
        rec.println(format!(
            "{} stored in slot {} (head at slot {})",
            value,
            crate::demos::or_dash(queue.rear_index()),
            queue.head_index()
        ))?;
    }

    rec.println(format!(
        "front = {}, rear = {}",
        queue.front()?,
        queue.rear()?
    ))?;

    let mut order = Vec::new();
    while let Ok(value) = queue.dequeue() {
        order.push(value.to_string());
        rec.record("dequeue()", Outcome::Value(value.to_string()), &[&queue])?;
    }
    rec.println(format!("FIFO order: {}", order.join(" ")))?;
    Ok(())
}

pub(super) fn linked(rec: &mut Recorder) -> Result<(), TraceError> {
    let mut queue: LinkedQueue<&str> = LinkedQueue::new();
    rec.record("LinkedQueue::new()", Outcome::Done, &[&queue])?;

    for job in ["print", "scan", "copy"] {
        queue.enqueue(job);
        rec.record(format!("enqueue({})", job), Outcome::Done, &[&queue])?;
    }

    rec.println(format!("front = {}, rear = {}", queue.front()?, queue.rear()?))?;

    while let Ok(job) = queue.dequeue() {
        rec.record("dequeue()", Outcome::Value(job.to_string()), &[&queue])?;
        rec.println(format!("Processing {}", job))?;
    }

    let result = queue.dequeue();
    rec.record("dequeue()", Outcome::from_result(&result), &[&queue])?;
    Ok(())
}

pub(super) fn deque(rec: &mut Recorder) -> Result<(), TraceError> {
    let mut deque: Deque<i32> = Deque::with_capacity(DEMO_CAPACITY)?;
    rec.record(
        format!("Deque::with_capacity({})", DEMO_CAPACITY),
        Outcome::Done,
        &[&deque],
    )?;

    let result = deque.push_back(2);
    rec.record("push_back(2)", Outcome::from_unit(&result), &[&deque])?;
    let result = deque.push_front(1);
    rec.record("push_front(1)", Outcome::from_unit(&result), &[&deque])?;
    let result = deque.push_back(3);
    rec.record("push_back(3)", Outcome::from_unit(&result), &[&deque])?;
    let result = deque.push_front(0);
    rec.record("push_front(0)", Outcome::from_unit(&result), &[&deque])?;
    let result = deque.push_back(4);
    rec.record("push_back(4)", Outcome::from_unit(&result), &[&deque])?;

    rec.println(format!("front = {}, back = {}", deque.front()?, deque.back()?))?;

    let result = deque.pop_back();
    rec.record("pop_back()", Outcome::from_result(&result), &[&deque])?;
    let result = deque.pop_front();
    rec.record("pop_front()", Outcome::from_result(&result), &[&deque])?;

    let remaining: Vec<String> = deque.iter().map(|v| v.to_string()).collect();
    rec.println(format!("Remaining: {}", remaining.join(" ")))?;
    Ok(())
}
