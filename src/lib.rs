mod error;
mod linked_list;
mod stack;

pub mod demo;
pub mod report;

pub use error::{Error, Result};
pub use linked_list::LinkedList;
pub use stack::Stack;
