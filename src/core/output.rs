use std::{cell::RefCell, rc::Rc};

/// An in-memory output sink which can be handed to the interpreter while a
/// clone is kept around to read back what was printed.
#[derive(Debug, Clone, Default)]
pub struct CaptureOutput {
    into: Rc<RefCell<Vec<u8>>>,
}

impl CaptureOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.to_string().lines().map(|l| l.to_string()).collect()
    }
}

impl std::io::Write for CaptureOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.into.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl std::fmt::Display for CaptureOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.into.borrow()))
    }
}
