use chain_stack::demo::{self, Sections};
use chain_stack::report::Reporter;
use chain_stack::{Error, LinkedList, Stack};
use expect_test::expect;
use termcolor::Buffer;

fn transcript(sections: Sections, reporter: Reporter) -> String {
    let mut out = Buffer::no_color();
    demo::run(&mut out, sections, reporter).unwrap();
    String::from_utf8(out.into_inner()).unwrap()
}

#[test]
fn test_full_transcript() {
    let reporter = Reporter::capture();
    let text = transcript(Sections::All, reporter.clone());

    expect![[r#"
        After push_front(10): 10 -> NULL
        After push_back(20) and push_back(30): 10 -> 20 -> 30 -> NULL
        Front: 10
        Back: 30
        Is list empty? No
        After insert(1, 99): 10 -> 99 -> 20 -> 30 -> NULL
        Remove at index 1: True
        10 -> 20 -> 30 -> NULL
        Index of 20: 1
        After pop_front(): 20 -> 30 -> NULL
        After pop_back(): 20 -> NULL

        Vector-Based Stack

        1) Stack object created.
        2) Is stack empty? Yes
        3) After pushing 10, 20, 30:
        Stack (bottom to top): 10 -> 20 -> 30 -> NULL
        4) After one pop:
        Stack (bottom to top): 10 -> 20 -> NULL
        5) Top of the stack: 20
        6) Average of stack elements: 15
    "#]]
    .assert_eq(&text);

    expect![[""]].assert_eq(&reporter.captured().unwrap());
}

#[test]
fn test_empty_pop_warning_is_separate_from_list_silence() {
    let reporter = Reporter::capture();

    let mut list = LinkedList::new();
    list.pop_front();
    list.pop_back();

    let mut stack = Stack::with_reporter(reporter.clone());
    stack.pop();

    expect!["warn: Stack is empty. Cannot pop.\n"].assert_eq(&reporter.captured().unwrap());
    assert!(stack.is_empty());
    assert!(list.is_empty());
}

#[test]
fn test_empty_containers_fail_hard() {
    let list = LinkedList::new();
    let stack = Stack::with_reporter(Reporter::capture());

    assert_eq!(list.front(), Err(Error::EmptyList));
    assert_eq!(list.back(), Err(Error::EmptyList));
    assert_eq!(stack.top(), Err(Error::EmptyStack));
    assert_eq!(stack.average(), 0.0);
}

#[test]
fn test_insert_remove_find_sequence() {
    let mut list = LinkedList::new();
    list.push_back(10);
    list.push_back(20);
    list.push_back(30);
    list.insert(1, 99);
    expect!["10 -> 99 -> 20 -> 30 -> NULL"].assert_eq(&list.to_string());

    assert!(list.remove(1));
    expect!["10 -> 20 -> 30 -> NULL"].assert_eq(&list.to_string());
    assert_eq!(list.find(20), 1);
}
