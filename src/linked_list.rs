use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{Error, Result};

type Link = Option<NonNull<Node>>;

struct Node {
    value: i32,
    next: Link,
}

/// Singly linked list of integers with O(1) access to both ends.
///
/// Every node is allocated with `Box::into_raw` and owned by exactly one link:
/// `head` or its predecessor's `next`. `tail` is a non-owning alias of the
/// last node, `None` exactly when the list is empty. A node goes back into a
/// `Box` only when it is unlinked.
pub struct LinkedList {
    head: Link,
    tail: Link,
    size: usize,
    _owns: PhantomData<Box<Node>>,
}

impl LinkedList {
    pub fn new() -> Self {
        LinkedList {
            head: None,
            tail: None,
            size: 0,
            _owns: PhantomData,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn push_front(&mut self, value: i32) {
        let new_node = allocate(value, self.head);

        if self.tail.is_none() {
            self.tail = Some(new_node);
        }

        self.head = Some(new_node);
        self.size += 1;
    }

    pub fn push_back(&mut self, value: i32) {
        let new_node = allocate(value, None);

        match self.tail {
            // SAFETY: tail points to the live last node of this list.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(new_node) },
            None => self.head = Some(new_node),
        }

        self.tail = Some(new_node);
        self.size += 1;
    }

    /// Removes the first value. Does nothing on an empty list.
    pub fn pop_front(&mut self) -> Option<i32> {
        self.head.map(|head| {
            // SAFETY: head is owned by this list; unlinking it hands ownership back to a Box.
            let node = unsafe { Box::from_raw(head.as_ptr()) };
            self.head = node.next;
            self.size -= 1;

            if self.head.is_none() {
                self.tail = None;
            }

            node.value
        })
    }

    /// Removes the last value. Does nothing on an empty list.
    ///
    /// Walks the whole chain to find the new tail, so this is O(n).
    pub fn pop_back(&mut self) -> Option<i32> {
        let tail = self.tail?;

        if self.head == Some(tail) {
            return self.pop_front();
        }

        let mut current = self.head?;
        // SAFETY: every link followed here belongs to this list, and tail is
        // reachable from head, so the walk stops on the node before tail.
        unsafe {
            while (*current.as_ptr()).next != Some(tail) {
                current = (*current.as_ptr()).next?;
            }
            (*current.as_ptr()).next = None;
        }

        self.tail = Some(current);
        self.size -= 1;

        // SAFETY: tail was just unlinked, so this is its only owner.
        let node = unsafe { Box::from_raw(tail.as_ptr()) };
        Some(node.value)
    }

    pub fn front(&self) -> Result<i32> {
        // SAFETY: head points to a live node owned by this list.
        self.head
            .map(|head| unsafe { (*head.as_ptr()).value })
            .ok_or(Error::EmptyList)
    }

    pub fn back(&self) -> Result<i32> {
        // SAFETY: tail points to a live node owned by this list.
        self.tail
            .map(|tail| unsafe { (*tail.as_ptr()).value })
            .ok_or(Error::EmptyList)
    }

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// Out of range indices are clamped: anything at or past the end appends.
    pub fn insert(&mut self, index: usize, value: i32) {
        if index == 0 {
            self.push_front(value);
            return;
        }

        if index >= self.size {
            self.push_back(value);
            return;
        }

        // 0 < index < size, so the node before index has a successor and is not the tail.
        if let Some(previous) = self.node_at(index - 1) {
            // SAFETY: previous is a live node of this list.
            unsafe {
                let new_node = allocate(value, (*previous.as_ptr()).next);
                (*previous.as_ptr()).next = Some(new_node);
            }
            self.size += 1;
        }
    }

    /// Removes the value at `index`, returning `false` if there is none.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.size {
            return false;
        }

        if index == 0 {
            self.pop_front();
            return true;
        }

        let Some(previous) = self.node_at(index - 1) else {
            return false;
        };

        // SAFETY: previous is a live node of this list; its successor is
        // unlinked before being turned back into a Box.
        unsafe {
            let Some(target) = (*previous.as_ptr()).next else {
                return false;
            };
            let removed = Box::from_raw(target.as_ptr());
            (*previous.as_ptr()).next = removed.next;

            if self.tail == Some(target) {
                self.tail = Some(previous);
            }
        }

        self.size -= 1;
        true
    }

    /// Position of the first node holding `value`, or `size()` if there is none.
    pub fn find(&self, value: i32) -> usize {
        self.iter()
            .position(|candidate| candidate == value)
            .unwrap_or(self.size)
    }

    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            current: self.head,
            _list: PhantomData,
        }
    }

    fn node_at(&self, index: usize) -> Link {
        let mut current = self.head?;
        for _ in 0..index {
            // SAFETY: current is a live node of this list.
            current = unsafe { (*current.as_ptr()).next }?;
        }
        Some(current)
    }
}

fn allocate(value: i32, next: Link) -> NonNull<Node> {
    let node = Box::into_raw(Box::new(Node { value, next }));
    // SAFETY: Box::into_raw never returns null.
    unsafe { NonNull::new_unchecked(node) }
}

impl Default for LinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for LinkedList {
    fn clone(&self) -> Self {
        let mut new_list = LinkedList::new();
        for value in self.iter() {
            new_list.push_back(value);
        }
        new_list
    }
}

impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{} -> ", value)?;
        }
        write!(f, "NULL")
    }
}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Head-to-tail traversal of a [`LinkedList`]
pub struct Iter<'a> {
    current: Link,
    _list: PhantomData<&'a LinkedList>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            // SAFETY: the list is borrowed for 'a, so no node is freed or relinked meanwhile.
            let node = unsafe { &*node.as_ptr() };
            self.current = node.next;
            node.value
        })
    }
}
