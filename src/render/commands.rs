//! # Command Rendering
//!
//! Walks an element tree in document order and yields printer commands one
//! at a time, so a sink can start printing before the walk is done.
//!
//! ## Work Stack
//!
//! The walk is an explicit stack of tasks instead of recursion. Expanding
//! an element pushes its commands and children in reverse, so popping
//! yields them in document order:
//!
//! ```text
//! <bold>a<inverse>b</inverse>c</bold>
//!
//! pop bold     push [cancel-bold, write c, inverse, write a, select-bold]
//! pop          select-bold
//! pop          write "a"
//! pop inverse  push [cancel-inverse, write b, select-inverse]
//! ...
//! ```
//!
//! ## Budgets
//!
//! When a budget is given, text is clipped to the cells left and every
//! child is charged [`element_width`] against what its earlier siblings
//! left over. Rendered output never takes more cells than the width
//! reported for the same element and budget. An element with a declared
//! `width` is padded with spaces, so it takes exactly that many cells.

use crate::error::LineModeError;
use crate::ir::{Command, Style};
use crate::markup::{Element, ElementKind};

use super::width::{clip, element_width, remaining, text_width};

enum Task {
    Emit(Command),
    Line {
        element: Element,
        max_width: Option<usize>,
    },
    Inline {
        element: Element,
        budget: Option<usize>,
    },
}

/// Lazy stream of printer commands.
///
/// Yields `Err` at most once, for the first structural error reached, and
/// nothing after it. Dropping the stream early is always safe.
pub struct Commands {
    stack: Vec<Task>,
    failed: bool,
}

impl Commands {
    /// Commands for one inline element (`span`, `bold`, `highlighted`,
    /// `inverse`) under an optional budget.
    pub fn element(element: Element, budget: Option<usize>) -> Self {
        Self {
            stack: vec![Task::Inline { element, budget }],
            failed: false,
        }
    }

    /// Commands for a document root: an optional prelude, then every line
    /// followed by a line break.
    pub(crate) fn document(root: Element, max_width: Option<usize>, prelude: bool) -> Self {
        let mut stack = Vec::with_capacity(root.children.len() + 2);

        if root.text_str().is_some_and(|t| !t.trim().is_empty()) {
            log::debug!("ignoring text directly inside <document>");
        }

        let charset = root.charset().to_string();
        for line in root.children.into_iter().rev() {
            stack.push(Task::Line {
                element: line,
                max_width,
            });
        }
        if prelude {
            stack.push(Task::Emit(Command::SetCharset(charset)));
            stack.push(Task::Emit(Command::Reset));
        }

        Self {
            stack,
            failed: false,
        }
    }

    fn expand_line(
        &mut self,
        mut element: Element,
        max_width: Option<usize>,
    ) -> Result<(), LineModeError> {
        match &element.kind {
            ElementKind::Line => {}
            ElementKind::Unknown(tag) => return Err(LineModeError::UnknownElement(tag.clone())),
            other => {
                return Err(LineModeError::ExpectedLine {
                    tag: other.tag().to_string(),
                });
            }
        }
        if element.tail.take().is_some_and(|t| !t.trim().is_empty()) {
            log::debug!("ignoring text between lines");
        }

        let (mut tasks, _) = body(element, max_width)?;
        tasks.push(Task::Emit(Command::Write("\n".into())));
        self.schedule(tasks);
        Ok(())
    }

    fn expand_inline(
        &mut self,
        element: Element,
        budget: Option<usize>,
    ) -> Result<(), LineModeError> {
        let style = match &element.kind {
            ElementKind::Span => {
                render_span(&element);
                None
            }
            ElementKind::Bold => Some(Style::Bold),
            ElementKind::Highlighted => Some(Style::Highlight),
            ElementKind::Inverse => Some(Style::Inverse),
            other => return other.expect_inline(),
        };

        // A declared width replaces the content budget and is filled
        // with trailing spaces.
        let fixed = element
            .fixed_width()?
            .map(|width| budget.map_or(width, |b| b.min(width)));
        let (mut content, used) = body(element, fixed.or(budget))?;
        if let Some(width) = fixed.filter(|width| *width > used) {
            content.push(Task::Emit(Command::Write(" ".repeat(width - used))));
        }

        let tasks = match style {
            Some(style) => {
                let mut tasks = Vec::with_capacity(content.len() + 2);
                tasks.push(Task::Emit(style.select()));
                tasks.extend(content);
                tasks.push(Task::Emit(style.cancel()));
                tasks
            }
            None => content,
        };
        self.schedule(tasks);
        Ok(())
    }

    /// Push tasks so that they pop in the given order.
    fn schedule(&mut self, tasks: Vec<Task>) {
        self.stack.extend(tasks.into_iter().rev());
    }
}

impl Iterator for Commands {
    type Item = Result<Command, LineModeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        while let Some(task) = self.stack.pop() {
            let expanded = match task {
                Task::Emit(command) => return Some(Ok(command)),
                Task::Line { element, max_width } => self.expand_line(element, max_width),
                Task::Inline { element, budget } => self.expand_inline(element, budget),
            };
            if let Err(err) = expanded {
                self.failed = true;
                self.stack.clear();
                return Some(Err(err));
            }
        }

        None
    }
}

/// Text, children and tails of an element, clipped to `budget`, with the
/// cells charged for them. Children are only charged under a budget.
fn body(element: Element, budget: Option<usize>) -> Result<(Vec<Task>, usize), LineModeError> {
    let mut tasks = Vec::with_capacity(element.children.len() * 2 + 1);
    let mut used = 0;

    if let Some(text) = element.text.as_deref() {
        used += push_write(&mut tasks, text, budget);
    }

    for mut child in element.children {
        let child_budget = remaining(budget, used);
        if budget.is_some() {
            used += element_width(&child, child_budget)?;
        }
        let tail = child.tail.take();
        tasks.push(Task::Inline {
            element: child,
            budget: child_budget,
        });
        if let Some(tail) = tail.as_deref() {
            used += push_write(&mut tasks, tail, remaining(budget, used));
        }
    }

    Ok((tasks, used))
}

/// Queue a write of `text` clipped to `budget`; returns the cells used.
fn push_write(tasks: &mut Vec<Task>, text: &str, budget: Option<usize>) -> usize {
    let clipped = clip(text, budget);
    if clipped.is_empty() {
        return 0;
    }
    tasks.push(Task::Emit(Command::Write(clipped.to_string())));
    text_width(clipped)
}

/// Span-specific rendering hook.
///
/// Alignment is not supported: content is always left-aligned, and a
/// declared width is padded on the right.
fn render_span(element: &Element) {
    if let Some(align) = element.attribute("align") {
        log::debug!("<span align={:?}> is not supported, rendering unaligned", align);
    }
}

/// Render one inline element into a command list.
pub fn render_element(
    element: &Element,
    budget: Option<usize>,
) -> Result<Vec<Command>, LineModeError> {
    Commands::element(element.clone(), budget).collect()
}
