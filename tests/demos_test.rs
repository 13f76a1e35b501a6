use dsatty::constants::DEFAULT_SNAPSHOT_LIMIT;
use dsatty::demos::Demo;
use dsatty::player::{Player, PlayerError};
use dsatty::trace::{Trace, TraceError};

fn record(demo: Demo) -> Trace {
    demo.run(DEFAULT_SNAPSHOT_LIMIT)
        .unwrap_or_else(|e| panic!("{} failed: {}", demo.name(), e))
}

fn console_text(trace: &Trace) -> String {
    trace.console().get_output().join("\n")
}

#[test]
fn test_every_demo_records_snapshots() {
    for demo in Demo::ALL {
        let trace = record(demo);
        assert!(!trace.is_empty(), "{} recorded nothing", demo.name());
        assert!(
            !trace.console().get_output().is_empty(),
            "{} printed nothing",
            demo.name()
        );
        for (i, snapshot) in trace.snapshots().iter().enumerate() {
            assert_eq!(snapshot.step, i);
            assert!(!snapshot.structures.is_empty());
        }
    }
}

#[test]
fn test_stack_demo_output() {
    let trace = record(Demo::Stack);
    let output = console_text(&trace);
    assert!(output.contains("LIFO order: 3 2 1"));
    assert!(output.contains("Popped 40"));

    // pop on empty and push on full are both recorded as errors
    let errors = trace
        .snapshots()
        .iter()
        .filter(|s| s.outcome.is_error())
        .count();
    assert!(errors >= 3);
}

#[test]
fn test_queue_demos_output() {
    let linear = console_text(&record(Demo::LinearQueue));
    assert!(linear.contains("Only 2 of 4 slots hold values"));

    let circular = console_text(&record(Demo::CircularQueue));
    assert!(circular.contains("5 stored in slot 0 (head at slot 2)"));
    assert!(circular.contains("FIFO order: 3 4 5 6"));

    let deque = console_text(&record(Demo::Deque));
    assert!(deque.contains("front = 0, back = 3"));
}

#[test]
fn test_list_demos_output() {
    let doubly = console_text(&record(Demo::DoublyList));
    assert!(doubly.contains("forward: ABCXD  backward: DXCBA"));

    let circular = console_text(&record(Demo::CircularList));
    assert!(circular.contains("Elimination order: 2 4 1 5 3"));
}

#[test]
fn test_technique_demos_output() {
    let monotonic = console_text(&record(Demo::Monotonic));
    assert!(monotonic.contains("daily_temperatures = [1, 1, 4, 2, 1, 1, 0, 0]"));
    assert!(monotonic.contains("= 10"));

    let expression = console_text(&record(Demo::Expression));
    assert!(expression.contains("= 7"));
    assert!(expression.contains("8 / (3 - 3):"));
    assert!(expression.contains("1 2 +: Expected an operator at token 1"));

    let hanoi = console_text(&record(Demo::Hanoi));
    assert!(hanoi.contains("3 disks solved in 7 moves"));

    let prefix = console_text(&record(Demo::PrefixSum));
    assert!(prefix.contains("sum(values[1..=4]) = 9"));
    assert!(prefix.contains("sum(values[4..=2]) = -"));
    assert!(prefix.contains("max subarray = 12 over [0..=4]"));

    let strings = console_text(&record(Demo::Strings));
    assert!(strings.contains("is_palindrome(\"racecar\") = true"));
}

#[test]
fn test_hanoi_ends_with_all_disks_on_target() {
    let trace = record(Demo::Hanoi);
    let last = trace.snapshots().last().expect("snapshots");
    let peg_c = last
        .structures
        .iter()
        .find(|v| v.title == "peg C")
        .expect("peg C view");
    assert_eq!(
        peg_c.cells,
        vec![Some("3".to_string()), Some("2".to_string()), Some("1".to_string())]
    );
}

#[test]
fn test_tiny_snapshot_limit_fails() {
    let err = Demo::Stack.run(16).unwrap_err();
    assert!(matches!(err, TraceError::SnapshotLimitExceeded { limit: 16, .. }));
}

#[test]
fn test_player_walks_recorded_demo() {
    let mut player = Player::new(record(Demo::CircularQueue));
    assert_eq!(player.step_backward(), Err(PlayerError::AtStart));

    let total = player.total_snapshots();
    assert_eq!(player.step_forward_by(total + 5), total - 1);
    assert!(player.is_at_end());
    assert_eq!(player.step_forward(), Err(PlayerError::AtEnd));

    // console output grows with the cursor
    let at_end = player.console_output().len();
    player.rewind_to_start().expect("rewind");
    assert!(player.console_output().len() < at_end);
    assert_eq!(player.current().map(|s| s.step), Some(0));
}
