use crate::collections::{ArrayStack, LinkedStack, MinStack};
use crate::constants::DEMO_CAPACITY;
use crate::trace::{Outcome, Recorder, TraceError};

pub(super) fn array_and_linked(rec: &mut Recorder) -> Result<(), TraceError> {
    let mut stack: ArrayStack<i32> = ArrayStack::with_capacity(DEMO_CAPACITY)?;
    rec.record(
        format!("ArrayStack::with_capacity({})", DEMO_CAPACITY),
        Outcome::Done,
        &[&stack],
    )?;

    let result = stack.pop();
    rec.record("pop()", Outcome::from_result(&result), &[&stack])?;
    rec.println("Pop on an empty stack is an underflow")?;

    for value in (1..=DEMO_CAPACITY as i32).map(|i| i * 10) {
        let result = stack.push(value);
        rec.record(format!("push({})", value), Outcome::from_unit(&result), &[&stack])?;
    }

    let result = stack.push(50);
    rec.record("push(50)", Outcome::from_unit(&result), &[&stack])?;
    rec.println(format!(
        "Stack full: {} (size {} of {})",
        stack.is_full(),
        stack.len(),
        stack.capacity()
    ))?;

    let result = stack.peek().copied();
    rec.record("peek()", Outcome::from_result(&result), &[&stack])?;

    while !stack.is_empty() {
        let result = stack.pop();
        rec.record("pop()", Outcome::from_result(&result), &[&stack])?;
        if let Ok(value) = result {
            rec.println(format!("Popped {}", value))?;
        }
    }

    let mut linked: LinkedStack<i32> = LinkedStack::new();
    for value in 1..=3 {
        linked.push(value);
        rec.record(format!("linked.push({})", value), Outcome::Done, &[&linked])?;
    }
    let mut order = Vec::new();
    while let Ok(value) = linked.pop() {
        order.push(value.to_string());
        rec.record("linked.pop()", Outcome::Value(value.to_string()), &[&linked])?;
    }
    rec.println(format!("LIFO order: {}", order.join(" ")))?;

    let result = linked.peek().copied();
    rec.record("linked.peek()", Outcome::from_result(&result), &[&linked])?;
    Ok(())
}

pub(super) fn min_stack(rec: &mut Recorder) -> Result<(), TraceError> {
    let mut stack: MinStack<i32> = MinStack::new();
    for value in [5, 3, 7, 2, 8] {
        stack.push(value);
        rec.record(format!("push({})", value), Outcome::Done, &[&stack])?;
        rec.println(format!("min after push({}) = {}", value, stack.min()?))?;
    }
    while !stack.is_empty() {
        let result = stack.pop();
        rec.record("pop()", Outcome::from_result(&result), &[&stack])?;
        match stack.min() {
            Ok(min) => rec.println(format!("min = {}", min))?,
            Err(e) => rec.println(format!("min: {}", e))?,
        }
    }
    Ok(())
}
