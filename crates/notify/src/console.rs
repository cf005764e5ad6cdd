//! Channel that prints messages instead of sending them (dry runs, demos).

use std::io::{self, Write};
use std::sync::Mutex;

use takeaway_ordering::{DeliveryError, NotificationChannel};

pub struct ConsoleChannel<W> {
    out: Mutex<W>,
}

impl ConsoleChannel<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleChannel<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> NotificationChannel for ConsoleChannel<W> {
    fn send_message(&self, destination: &str, text: &str) -> Result<(), DeliveryError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| DeliveryError::Transport("console sink poisoned".to_string()))?;
        writeln!(out, "[sms to {destination}] {text}")
            .and_then(|()| out.flush())
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;
        tracing::debug!(destination, "message written to console");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_line_per_message() {
        let channel = ConsoleChannel::new(Vec::new());
        channel.send_message("+4400", "hello").unwrap();
        channel.send_message("+4401", "again").unwrap();

        let written = String::from_utf8(channel.into_inner()).unwrap();
        assert_eq!(written, "[sms to +4400] hello\n[sms to +4401] again\n");
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn io_failure_is_a_transport_error() {
        let channel = ConsoleChannel::new(BrokenSink);
        let err = channel.send_message("+4400", "hello").unwrap_err();
        assert!(matches!(err, DeliveryError::Transport(_)));
    }
}
