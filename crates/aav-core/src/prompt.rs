//! Interactive choices the synchronizer asks for

use std::io;

/// Source of user decisions.
///
/// Every method may return an empty answer (no selection, or "No").
pub trait Prompter {
    /// Pick one item, `None` when nothing was chosen.
    fn select(&self, prompt: &str, items: &[String]) -> io::Result<Option<usize>>;

    /// Pick any subset of items, by index.
    fn multi_select(&self, prompt: &str, items: &[String]) -> io::Result<Vec<usize>>;

    /// Binary Yes/No question.
    fn confirm(&self, prompt: &str) -> io::Result<bool>;
}

impl<T: Prompter + ?Sized> Prompter for &T {
    fn select(&self, prompt: &str, items: &[String]) -> io::Result<Option<usize>> {
        (**self).select(prompt, items)
    }

    fn multi_select(&self, prompt: &str, items: &[String]) -> io::Result<Vec<usize>> {
        (**self).multi_select(prompt, items)
    }

    fn confirm(&self, prompt: &str) -> io::Result<bool> {
        (**self).confirm(prompt)
    }
}
