use super::{or_dash, sequence};
use crate::algorithms::{arrays, expression, monotonic, recursion, strings};
use crate::collections::{ArrayStack, LinkedStack};
use crate::constants::HANOI_DISKS;
use crate::trace::{Outcome, Recorder, StructureView, TraceError, ViewKind};

/// Next warmer day, with the pending-index stack visible at every push and pop
pub(super) fn monotonic(rec: &mut Recorder) -> Result<(), TraceError> {
    let temps = [73, 74, 75, 71, 69, 72, 76, 73];
    let mut waits: Vec<Option<usize>> = vec![None; temps.len()];
    let mut pending: LinkedStack<usize> = LinkedStack::new();

    let views = |i: Option<usize>, pending: &LinkedStack<usize>, waits: &[Option<usize>]| {
        (
            sequence("temperatures", temps).mark("i", i),
            StructureView::new("pending days", ViewKind::Array)
                .with_values(pending.iter().collect::<Vec<_>>().into_iter().rev()),
            StructureView::new("days to wait", ViewKind::Sequence)
                .with_slots(waits.iter().map(|w| w.map(|d| d.to_string())).collect()),
        )
    };

    let (t, p, w) = views(None, &pending, &waits);
    rec.record("start scan", Outcome::Done, &[&t, &p, &w])?;

    for (i, &temp) in temps.iter().enumerate() {
        while let Ok(&top) = pending.peek() {
            if temps[top] >= temp {
                break;
            }
            pending.pop()?;
            waits[top] = Some(i - top);
            let (t, p, w) = views(Some(i), &pending, &waits);
            rec.record(
                format!("{} > {}: resolve day {}", temp, temps[top], top),
                Outcome::Value((i - top).to_string()),
                &[&t, &p, &w],
            )?;
        }
        pending.push(i);
        let (t, p, w) = views(Some(i), &pending, &waits);
        rec.record(format!("push day {}", i), Outcome::Done, &[&t, &p, &w])?;
    }

    let answer = monotonic::daily_temperatures(&temps);
    let shown: Vec<String> = answer.iter().map(|d| d.to_string()).collect();
    rec.println(format!("daily_temperatures = [{}]", shown.join(", ")))?;
    rec.println(format!(
        "largest rectangle in [2, 1, 5, 6, 2, 3] = {}",
        monotonic::largest_rectangle(&[2, 1, 5, 6, 2, 3])
    ))?;
    Ok(())
}

/// Postfix evaluation with the operand stack visible
pub(super) fn expression(rec: &mut Recorder) -> Result<(), TraceError> {
    for text in ["{[()()]}", "([)]", "(("] {
        rec.println(format!("is_balanced({:?}) = {}", text, expression::is_balanced(text)))?;
    }

    let infix = "3 + 4 * (2 - 1) ^ 2";
    let tokens = expression::tokenize(infix)?;
    let postfix = expression::infix_to_postfix(&tokens)?;
    let postfix_text = expression::format_tokens(&postfix);
    rec.println(format!("{}  =>  {}", infix, postfix_text))?;

    let mut operands: ArrayStack<i64> = ArrayStack::with_capacity(postfix.len().max(1))?;
    let input = sequence("postfix", postfix.iter());
    rec.record("start evaluation", Outcome::Done, &[&input, &operands])?;

    for (i, token) in postfix.iter().enumerate() {
        let input = sequence("postfix", postfix.iter()).mark("next", Some(i));
        match token {
            expression::Token::Number(n) => {
                let result = operands.push(*n);
                rec.record(format!("push {}", n), Outcome::from_unit(&result), &[&input, &operands])?;
            }
            expression::Token::Operator(op) => {
                let rhs = operands.pop()?;
                let lhs = operands.pop()?;
                let value = expression::evaluate_postfix(&[
                    expression::Token::Number(lhs),
                    expression::Token::Number(rhs),
                    *token,
                ])?;
                operands.push(value)?;
                rec.record(
                    format!("{} {} {}", lhs, op, rhs),
                    Outcome::Value(value.to_string()),
                    &[&input, &operands],
                )?;
            }
            expression::Token::LeftParen | expression::Token::RightParen => {}
        }
    }

    let result = operands.pop();
    rec.record("pop result", Outcome::from_result(&result), &[&operands])?;
    rec.println(format!("evaluate({:?}) = {}", infix, result?))?;

    for text in ["8 / (3 - 3)", "1 2 +"] {
        match expression::evaluate(text) {
            Ok(v) => rec.println(format!("{} = {}", text, v))?,
            Err(e) => rec.println(format!("{}: {}", text, e))?,
        }
    }
    Ok(())
}

/// Replay the recursive move list on three peg stacks
pub(super) fn hanoi(rec: &mut Recorder) -> Result<(), TraceError> {
    let capacity = HANOI_DISKS as usize;
    let mut pegs = [
        ArrayStack::with_capacity(capacity)?,
        ArrayStack::with_capacity(capacity)?,
        ArrayStack::with_capacity(capacity)?,
    ];
    for disk in (1..=HANOI_DISKS).rev() {
        pegs[0].push(disk)?;
    }

    let peg_views = |pegs: &[ArrayStack<u32>; 3]| -> Vec<StructureView> {
        pegs.iter()
            .zip(['A', 'B', 'C'])
            .map(|(peg, name)| {
                let mut view = crate::trace::Visualize::view(peg);
                view.title = format!("peg {}", name);
                view
            })
            .collect()
    };

    let views = peg_views(&pegs);
    rec.record(
        format!("{} disks on peg A", HANOI_DISKS),
        Outcome::Done,
        &[&views[0], &views[1], &views[2]],
    )?;

    let moves = recursion::hanoi(HANOI_DISKS, 'A', 'C', 'B');
    for mv in &moves {
        let from = (mv.from as u8 - b'A') as usize;
        let to = (mv.to as u8 - b'A') as usize;
        let disk = pegs[from].pop()?;
        pegs[to].push(disk)?;
        let views = peg_views(&pegs);
        rec.record(
            format!("move disk {} from {} to {}", mv.disk, mv.from, mv.to),
            Outcome::Done,
            &[&views[0], &views[1], &views[2]],
        )?;
    }

    rec.println(format!("{} disks solved in {} moves (2^n - 1)", HANOI_DISKS, moves.len()))?;
    rec.println(format!("factorial(10) = {}", or_dash(recursion::factorial(10))))?;
    rec.println(format!("fibonacci_memo(50) = {}", or_dash(recursion::fibonacci_memo(50))))?;
    rec.println(format!("power(2, 20) = {}", or_dash(recursion::power(2, 20))))?;
    Ok(())
}

/// Build prefix sums one element at a time, then answer range queries
pub(super) fn prefix_sum(rec: &mut Recorder) -> Result<(), TraceError> {
    let values: [i64; 6] = [3, -1, 4, 1, 5, -9];
    let mut sums: Vec<Option<String>> = vec![None; values.len() + 1];
    sums[0] = Some("0".to_string());
    let mut running = 0;

    let input = sequence("values", values);
    let view = StructureView::new("prefix", ViewKind::Array).with_slots(sums.clone());
    rec.record("prefix[0] = 0", Outcome::Done, &[&input, &view])?;

    for (i, &v) in values.iter().enumerate() {
        running += v;
        sums[i + 1] = Some(running.to_string());
        let input = sequence("values", values).mark("i", Some(i));
        let view = StructureView::new("prefix", ViewKind::Array)
            .with_slots(sums.clone())
            .mark("i+1", Some(i + 1));
        rec.record(
            format!("prefix[{}] = prefix[{}] + {}", i + 1, i, v),
            Outcome::Value(running.to_string()),
            &[&input, &view],
        )?;
    }

    let table = arrays::PrefixSum::new(&values);
    for (l, r) in [(0, 2), (1, 4), (3, 3), (4, 2)] {
        rec.println(format!(
            "sum(values[{}..={}]) = {}",
            l,
            r,
            or_dash(table.range_sum(l, r))
        ))?;
    }
    rec.println(format!(
        "max window of 3 = {}",
        or_dash(arrays::max_window_sum(&values, 3))
    ))?;
    if let Some((best, start, end)) = arrays::max_subarray(&values) {
        rec.println(format!("max subarray = {} over [{}..={}]", best, start, end))?;
    }
    rec.println(format!(
        "subarrays summing to 4: {}",
        arrays::subarray_sum_count(&values, 4)
    ))?;
    Ok(())
}

/// Two-pointer palindrome check with both cursors visible
pub(super) fn strings(rec: &mut Recorder) -> Result<(), TraceError> {
    let word = "racecar";
    let chars: Vec<char> = word.chars().collect();
    let (mut left, mut right) = (0, chars.len().saturating_sub(1));

    let view = sequence(word, chars.iter())
        .mark("left", Some(left))
        .mark("right", Some(right));
    rec.record("left = 0, right = len - 1", Outcome::Done, &[&view])?;

    while left < right {
        let matched = chars[left] == chars[right];
        let view = sequence(word, chars.iter())
            .mark("left", Some(left))
            .mark("right", Some(right));
        rec.record(
            format!("compare '{}' with '{}'", chars[left], chars[right]),
            Outcome::Value(matched.to_string()),
            &[&view],
        )?;
        if !matched {
            break;
        }
        left += 1;
        right -= 1;
    }
    rec.println(format!("is_palindrome({:?}) = {}", word, strings::is_palindrome(word)))?;

    let phrase = "A man, a plan, a canal: Panama";
    rec.println(format!("is_palindrome({:?}) = {}", phrase, strings::is_palindrome(phrase)))?;
    rec.println(format!(
        "is_anagram(\"listen\", \"silent\") = {}",
        strings::is_anagram("listen", "silent")
    ))?;
    rec.println(format!(
        "longest_unique_substring(\"abcabcbb\") = {:?}",
        strings::longest_unique_substring("abcabcbb")
    ))?;
    rec.println(format!(
        "run_length_encode(\"aaabccdddd\") = {}",
        strings::run_length_encode("aaabccdddd")
    ))?;
    rec.println(format!(
        "reverse_words(\"stacks before queues\") = {:?}",
        strings::reverse_words("stacks before queues")
    ))?;
    Ok(())
}
