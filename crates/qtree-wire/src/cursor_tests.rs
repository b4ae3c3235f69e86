use crate::cursor::WordCursor;
use crate::error::WireError;

#[test]
fn reads_advance() {
    let words = [10, 20, 30];
    let mut c = WordCursor::new(&words);

    assert_eq!(c.peek(), Ok(10));
    assert_eq!(c.read(), Ok(10));
    assert_eq!(c.take(2), Ok(&words[1..]));
    assert!(c.is_at_end());
    assert_eq!(c.position(), 3);
}

#[test]
fn read_past_end_is_truncated() {
    let words = [1];
    let mut c = WordCursor::new(&words);
    c.read().unwrap();

    assert_eq!(
        c.read(),
        Err(WireError::Truncated {
            needed: 2,
            available: 1
        })
    );
    // Failed reads do not move the cursor.
    assert_eq!(c.position(), 1);
}

#[test]
fn take_checks_whole_run() {
    let words = [1, 2, 3];
    let mut c = WordCursor::at(&words, 1);

    assert_eq!(
        c.take(3),
        Err(WireError::Truncated {
            needed: 4,
            available: 3
        })
    );
    assert_eq!(c.take(0), Ok(&[][..]));
    assert_eq!(c.remaining(), 2);
}

#[test]
fn start_past_end() {
    let words = [1, 2];
    let c = WordCursor::at(&words, 5);
    assert_eq!(c.remaining(), 0);
    assert!(c.peek().is_err());
}
