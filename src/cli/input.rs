//! Line input feeding the command loop

use std::io::{self, BufRead};

use tokio::sync::mpsc;
use tracing::warn;

/// Lines buffered between the reader thread and the command loop
const LINE_CHANNEL_CAPACITY: usize = 16;

/// Read stdin on a dedicated thread and forward each line.
///
/// The channel closes at end-of-input or on a read error. The thread is
/// detached so a pending read never holds up process exit.
pub fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(LINE_CHANNEL_CAPACITY);

    // Not spawn_blocking: the runtime would wait on the read at shutdown
    std::thread::spawn(move || forward_lines(io::stdin().lock(), tx));

    rx
}

/// Forward lines from `reader` until EOF, an I/O error, or the receiver closing.
///
/// Bytes that are not valid UTF-8 are replaced rather than ending input, so a
/// garbled line reaches the command loop as an unknown command.
pub fn forward_lines<R: BufRead>(mut reader: R, tx: mpsc::Sender<String>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => return,
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                    if buf.last() == Some(&b'\r') {
                        buf.pop();
                    }
                }
                let line = String::from_utf8_lossy(&buf).into_owned();
                if tx.blocking_send(line).is_err() {
                    return;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                warn!("stopped reading input: {}", e);
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_every_line_then_closes() {
        let (tx, mut rx) = mpsc::channel(8);
        forward_lines(&b"save\nstatus\r\n\nquit"[..], tx);

        let mut lines = Vec::new();
        while let Ok(line) = rx.try_recv() {
            lines.push(line);
        }
        assert_eq!(lines, ["save", "status", "", "quit"]);
        assert!(rx.blocking_recv().is_none());
    }

    #[test]
    fn stops_when_receiver_is_gone() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        forward_lines(&b"save\nsave\n"[..], tx);
    }

    #[test]
    fn invalid_utf8_line_does_not_end_input() {
        let (tx, mut rx) = mpsc::channel(8);
        forward_lines(&b"status\n\xff\xfe\nstatus\nquit\n"[..], tx);

        let mut lines = Vec::new();
        while let Some(line) = rx.blocking_recv() {
            lines.push(line);
        }
        assert_eq!(lines, ["status", "\u{FFFD}\u{FFFD}", "status", "quit"]);
    }
}
