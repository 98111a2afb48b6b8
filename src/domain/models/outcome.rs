/// Result shape of every store-backed operation.
///
/// `NotFound` is an answer from the store. `Degraded` means the store could
/// not be reached and the fallback stepped in. Older clients saw both a
/// degraded call and a found record as an account, the degraded one with
/// every field empty; HTTP callers now get a 503 instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Found(T),
    NotFound,
    Degraded,
}

impl<T> Outcome<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Outcome::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded)
    }
}
