//! [`ScriptedPrompter`]: answers prompts from a fixed script.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

use aav_core::Prompter;

/// One scripted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Select(Option<usize>),
    MultiSelect(Vec<usize>),
    Confirm(bool),
}

/// A [`Prompter`] that replays answers in order and records every question.
///
/// A question with no scripted answer left, or with an answer of the wrong
/// kind, panics, so a test fails on any prompt it did not expect.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    /// A prompter with no answers; any prompt panics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a single-choice answer.
    pub fn select(self, index: Option<usize>) -> Self {
        self.push(Answer::Select(index))
    }

    /// Queue a multi-choice answer.
    pub fn multi_select(self, indices: &[usize]) -> Self {
        self.push(Answer::MultiSelect(indices.to_vec()))
    }

    /// Queue a Yes/No answer.
    pub fn confirm(self, yes: bool) -> Self {
        self.push(Answer::Confirm(yes))
    }

    fn push(self, answer: Answer) -> Self {
        self.answers.borrow_mut().push_back(answer);
        self
    }

    /// The prompts asked so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, prompt: &str) -> Answer {
        self.asked.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("ScriptedPrompter: unexpected prompt {prompt:?}"))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, prompt: &str, _items: &[String]) -> io::Result<Option<usize>> {
        match self.next(prompt) {
            Answer::Select(index) => Ok(index),
            other => panic!("ScriptedPrompter: {prompt:?} is a select, scripted {other:?}"),
        }
    }

    fn multi_select(&self, prompt: &str, _items: &[String]) -> io::Result<Vec<usize>> {
        match self.next(prompt) {
            Answer::MultiSelect(indices) => Ok(indices),
            other => panic!("ScriptedPrompter: {prompt:?} is a multi-select, scripted {other:?}"),
        }
    }

    fn confirm(&self, prompt: &str) -> io::Result<bool> {
        match self.next(prompt) {
            Answer::Confirm(yes) => Ok(yes),
            other => panic!("ScriptedPrompter: {prompt:?} is a confirm, scripted {other:?}"),
        }
    }
}
