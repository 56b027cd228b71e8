/// Errors out of the binding surface. The list operations themselves
/// cannot fail, shift on an empty list is defined to yield nil and an
/// allocation failure aborts like the host runtime's own allocator, so
/// everything here is a caller mistake caught at dispatch.
#[derive(Debug, PartialEq)]
pub enum ListError {
    /// method name, arity it was registered with, arity it was called with
    WrongArity(&'static str, u8, usize),
    UnknownMethod(String),
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListError::WrongArity(name, expected, got) => {
                write!(
                    f,
                    "wrong number of arguments to '{}' (expected {}, got {})",
                    name, expected, got
                )
            }
            ListError::UnknownMethod(name) => write!(f, "unknown method '{}'", name),
        }
    }
}

impl std::error::Error for ListError {}
