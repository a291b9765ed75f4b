use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub type CopyHandler = Box<dyn FnMut(&mut CopyEvent)>;

/// Kind → data pairs in the order they were first set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Setting a kind twice replaces its data.
    pub fn set_data(&mut self, kind: &str, data: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == kind) {
            Some((_, existing)) => *existing = data.to_string(),
            None => self.entries.push((kind.to_string(), data.to_string())),
        }
    }

    pub fn get_data(&self, kind: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == kind)
            .map(|(_, d)| d.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, d)| (k.as_str(), d.as_str()))
    }
}

#[derive(Debug, Default)]
pub struct CopyEvent {
    clipboard_data: DataTransfer,
    default_prevented: bool,
}

impl CopyEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clipboard_data(&self) -> &DataTransfer {
        &self.clipboard_data
    }

    pub fn clipboard_data_mut(&mut self) -> &mut DataTransfer {
        &mut self.clipboard_data
    }

    /// Stops the host from copying its own selection.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn into_clipboard_data(self) -> DataTransfer {
        self.clipboard_data
    }
}
