use std::io::Write;

/// Abstract the process environment so commands can be driven from tests
pub trait Host: Send + Sync {
    // where reports and confirmations go (e.g., stdout)
    fn output(&mut self) -> impl Write;

    // where failures go (e.g., stderr)
    fn error(&mut self) -> impl Write;

    /// Terminate the process with `code`. A test host records the code and returns.
    fn exit(&mut self, code: i32);
}

/// Host capturing everything a command writes or exits with
#[cfg(test)]
pub struct TestHost {
    pub output_buf: Vec<u8>,
    pub error_buf: Vec<u8>,
    pub exit_code: Option<i32>,
}

#[cfg(test)]
impl TestHost {
    pub const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            exit_code: None,
        }
    }

    pub fn output_text(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    pub fn error_text(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

#[cfg(test)]
impl Host for TestHost {
    fn output(&mut self) -> impl Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}
