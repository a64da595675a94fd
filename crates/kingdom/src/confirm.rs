/// Asks the user before a destructive write is dispatched.
///
/// Any `Fn(&str) -> bool` closure is a `Confirm`.
pub trait Confirm: Send {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Declines every prompt. The default until a real prompt is installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decline;

impl Confirm for Decline {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}
