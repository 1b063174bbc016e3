use std::io::Write;

use termcolor::{ColorSpec, WriteColor};

use crate::report::Reporter;
use crate::{LinkedList, Stack};

/// Which parts of the walkthrough to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sections {
    All,
    List,
    Stack,
}

impl Sections {
    fn list(self) -> bool {
        matches!(self, Sections::All | Sections::List)
    }

    fn stack(self) -> bool {
        matches!(self, Sections::All | Sections::Stack)
    }
}

/// Runs the fixed walkthrough, writing the transcript to `out`.
///
/// Stack warnings go to `reporter`, not `out`.
pub fn run(out: &mut impl WriteColor, sections: Sections, reporter: Reporter) -> anyhow::Result<()> {
    if sections.list() {
        list_walkthrough(out)?;
    }

    if sections.stack() {
        if sections.list() {
            writeln!(out)?;
        }
        stack_walkthrough(out, reporter)?;
    }

    Ok(())
}

fn list_walkthrough(out: &mut impl WriteColor) -> anyhow::Result<()> {
    let mut list = LinkedList::new();

    list.push_front(10);
    writeln!(out, "After push_front(10): {}", list)?;

    list.push_back(20);
    list.push_back(30);
    writeln!(out, "After push_back(20) and push_back(30): {}", list)?;

    writeln!(out, "Front: {}", list.front()?)?;
    writeln!(out, "Back: {}", list.back()?)?;
    writeln!(out, "Is list empty? {}", yes_no(list.is_empty()))?;

    list.insert(1, 99);
    writeln!(out, "After insert(1, 99): {}", list)?;

    let removed = list.remove(1);
    writeln!(out, "Remove at index 1: {}", if removed { "True" } else { "False" })?;
    writeln!(out, "{}", list)?;

    writeln!(out, "Index of 20: {}", list.find(20))?;

    list.pop_front();
    writeln!(out, "After pop_front(): {}", list)?;

    list.pop_back();
    writeln!(out, "After pop_back(): {}", list)?;

    Ok(())
}

fn stack_walkthrough(out: &mut impl WriteColor, reporter: Reporter) -> anyhow::Result<()> {
    heading(out, "Vector-Based Stack")?;
    writeln!(out)?;

    let mut stack = Stack::with_reporter(reporter);
    writeln!(out, "1) Stack object created.")?;
    writeln!(out, "2) Is stack empty? {}", yes_no(stack.is_empty()))?;

    stack.push(10);
    stack.push(20);
    stack.push(30);
    writeln!(out, "3) After pushing 10, 20, 30:")?;
    writeln!(out, "Stack (bottom to top): {}", stack)?;

    stack.pop();
    writeln!(out, "4) After one pop:")?;
    writeln!(out, "Stack (bottom to top): {}", stack)?;

    writeln!(out, "5) Top of the stack: {}", stack.top()?)?;
    writeln!(out, "6) Average of stack elements: {}", stack.average())?;

    Ok(())
}

fn heading(out: &mut impl WriteColor, text: &str) -> anyhow::Result<()> {
    let mut bold = ColorSpec::new();
    bold.set_bold(true);

    out.set_color(&bold)?;
    write!(out, "{}", text)?;
    out.reset()?;
    writeln!(out)?;
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use termcolor::Buffer;

    use super::*;

    fn transcript(sections: Sections) -> String {
        let mut out = Buffer::no_color();
        run(&mut out, sections, Reporter::capture()).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn list_only_skips_stack() {
        let text = transcript(Sections::List);
        assert!(text.starts_with("After push_front(10): 10 -> NULL\n"));
        assert!(!text.contains("Vector-Based Stack"));
    }

    #[test]
    fn stack_only_starts_with_heading() {
        let text = transcript(Sections::Stack);
        assert!(text.starts_with("Vector-Based Stack\n\n1) Stack object created.\n"));
        assert!(!text.contains("push_front"));
    }

    #[test]
    fn all_separates_sections_with_blank_line() {
        let text = transcript(Sections::All);
        assert!(text.contains("After pop_back(): 20 -> NULL\n\nVector-Based Stack\n"));
    }
}
