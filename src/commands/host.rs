use std::io::Write;

/// Where command output lands.
///
/// Commands never print directly; everything goes through the host so tests
/// can run them against in-memory buffers instead of the real process streams.
pub trait Host: Send + Sync {
    /// Sink for report output, normally stdout.
    fn output(&mut self) -> impl Write;

    /// Sink for diagnostics, normally stderr.
    fn error(&mut self) -> impl Write;

    /// Terminate the process. A test host records the code instead of exiting.
    fn exit(&mut self, code: i32);
}

/// Captures everything a command writes, for assertions.
#[cfg(test)]
pub struct TestHost {
    pub output_buf: Vec<u8>,
    pub error_buf: Vec<u8>,
    pub exit_code: Option<i32>,
}

#[cfg(test)]
impl TestHost {
    pub fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            exit_code: None,
        }
    }
}

#[cfg(test)]
impl Host for TestHost {
    fn output(&mut self) -> impl Write {
        std::io::Cursor::new(&mut self.output_buf)
    }

    fn error(&mut self) -> impl Write {
        std::io::Cursor::new(&mut self.error_buf)
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}
