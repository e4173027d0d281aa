use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    Success,
    Warning,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    pub const MEMORY_FULL: &'static str =
        "Memory is completely full! Free some space before continuing.";
    pub const INVALID_ADDRESS: &'static str = "Invalid address.";

    pub fn memory_full() -> Self {
        Self {
            level: Level::Warning,
            message: Self::MEMORY_FULL.into(),
        }
    }

    pub fn invalid_address() -> Self {
        Self {
            level: Level::Error,
            message: Self::INVALID_ADDRESS.into(),
        }
    }

    pub fn value_at(address: usize, value: Option<i64>) -> Self {
        let message = match value {
            Some(value) => format!("Value at memory address {address}: {value}"),
            None => format!("No value stored at memory address {address}"),
        };
        Self {
            level: Level::Success,
            message,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level.as_str(), self.message)
    }
}

/// Abstraction over the toast area of the host UI.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Drops every notification.
pub struct Discard;

impl Notifier for Discard {
    fn notify(&mut self, _notification: Notification) {}
}

/// Keeps every notification, oldest first.
#[derive(Debug, Default, Clone)]
pub struct Collect(pub std::rc::Rc<std::cell::RefCell<Vec<Notification>>>);

impl Collect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

impl Notifier for Collect {
    fn notify(&mut self, notification: Notification) {
        self.0.borrow_mut().push(notification);
    }
}
