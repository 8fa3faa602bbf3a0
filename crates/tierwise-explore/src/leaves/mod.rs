//! Leaf enumerations: numbers and text.

pub mod numeric;
pub mod text;

use std::iter::Fuse;

/// Alternates between two sequences; once one ends, the rest of the other
/// follows.
pub fn interleave<I, J>(first: I, second: J) -> Interleave<I::IntoIter, J::IntoIter>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
{
    Interleave {
        first: first.into_iter().fuse(),
        second: second.into_iter().fuse(),
        second_next: false,
    }
}

#[derive(Debug, Clone)]
pub struct Interleave<I, J> {
    first: Fuse<I>,
    second: Fuse<J>,
    second_next: bool,
}

impl<I, J> Iterator for Interleave<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let turn = if self.second_next {
            self.second.next()
        } else {
            self.first.next()
        };
        match turn {
            Some(x) => {
                self.second_next = !self.second_next;
                Some(x)
            }
            None if self.second_next => self.first.next(),
            None => self.second.next(),
        }
    }
}
