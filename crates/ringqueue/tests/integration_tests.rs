use ringqueue::{Config, QueueError, RingQueue, PIECE_PREVIEW_CONFIG};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Item {
    name: &'static str,
    id: u64,
}

fn item(name: &'static str, id: u64) -> Item {
    Item { name, id }
}

#[test]
fn test_preview_queue_scenario() {
    let mut queue = RingQueue::with_config(PIECE_PREVIEW_CONFIG).unwrap();
    let names = ["I", "O", "T", "L", "I"];

    for (id, &name) in names.iter().enumerate() {
        queue.enqueue(item(name, id as u64)).unwrap();
    }
    assert!(queue.is_full());

    // Full: rejected, nothing moves
    assert_eq!(queue.enqueue(item("T", 99)), Err(QueueError::Full));
    assert_eq!(queue.len(), 5);
    let ids: Vec<u64> = queue.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);

    // Oldest piece leaves first
    let played = queue.dequeue().unwrap();
    assert_eq!(played, item("I", 0));
    assert_eq!(queue.len(), 4);

    // Tail already wrapped to slot 0, so the next piece lands there
    assert_eq!(queue.tail(), 0);
    queue.enqueue(item("L", 5)).unwrap();
    assert_eq!(queue.len(), 5);
    assert_eq!(queue.head(), 1);
    assert_eq!(queue.tail(), 1);

    let ids: Vec<u64> = queue.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    let metrics = queue.metrics();
    assert_eq!(metrics.enqueued, 6);
    assert_eq!(metrics.dequeued, 1);
    assert_eq!(metrics.rejected_full, 1);
}

#[test]
fn test_fifo_ordering_across_many_laps() {
    const N: u64 = 10_000;
    let mut queue = RingQueue::new(7).unwrap();
    let mut expected = 0u64;

    for i in 0..N {
        if queue.is_full() {
            let got = queue.dequeue().unwrap();
            assert_eq!(got, expected, "FIFO violation: expected {}, got {}", expected, got);
            expected += 1;
        }
        queue.enqueue(i).unwrap();
    }

    while let Ok(got) = queue.dequeue() {
        assert_eq!(got, expected);
        expected += 1;
    }
    assert_eq!(expected, N);
    assert!(queue.is_empty());
    assert_eq!(queue.head(), queue.tail());
}

#[test]
fn test_recoverable_after_errors() {
    let mut queue = RingQueue::new(2).unwrap();

    let err = queue.dequeue().unwrap_err();
    assert!(err.is_recoverable());

    queue.enqueue(1).unwrap();
    queue.enqueue(2).unwrap();
    let err = queue.enqueue(3).unwrap_err();
    assert!(err.is_recoverable());

    assert_eq!(queue.dequeue(), Ok(1));
    queue.enqueue(3).unwrap();
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
}

#[test]
fn test_invalid_config_is_fatal() {
    let err = RingQueue::<String>::with_config(Config::new(0, true)).unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn test_owned_values_move_out() {
    let mut queue = RingQueue::new(3).unwrap();
    queue.enqueue(String::from("I")).unwrap();
    queue.enqueue(String::from("O")).unwrap();

    let mut first = queue.dequeue().unwrap();
    first.push('!');
    assert_eq!(first, "I!");
    assert_eq!(queue.peek().map(String::as_str), Some("O"));
}
