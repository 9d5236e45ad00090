use std::{iter, slice};

use crate::error::{Error, Result};

/// A fixed-size array with checked subscripts.
///
/// The length is chosen at construction and never changes. Arrays are
/// deliberately not `Clone`.
pub struct BoundedArray<T> {
    data: Box<[T]>,
}

impl<T> BoundedArray<T> {
    pub fn new(len: usize) -> Self
    where
        T: Default,
    {
        BoundedArray {
            data: iter::repeat_with(T::default).take(len).collect(),
        }
    }

    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        BoundedArray {
            data: vec![value; len].into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.len();
        self.data.get(index).ok_or(Error::OutOfRange { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len();
        self.data.get_mut(index).ok_or(Error::OutOfRange { index, len })
    }

    pub fn iter(&self) -> slice::Iter<T> {
        self.data.iter()
    }
}

impl<T> Default for BoundedArray<T> {
    fn default() -> Self {
        BoundedArray {
            data: Box::default(),
        }
    }
}

impl<'a, T> IntoIterator for &'a BoundedArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscripts_checked() {
        let array = BoundedArray::<i32>::new(10);
        for i in 0..10 {
            assert_eq!(array.get(i), Ok(&0));
        }
        for i in 10..20 {
            assert_eq!(array.get(i), Err(Error::OutOfRange { index: i, len: 10 }));
        }
    }

    #[test]
    fn default_is_empty() {
        let array = BoundedArray::<u8>::default();
        assert!(array.is_empty());
        assert_eq!(array.get(0), Err(Error::OutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn writes_through_get_mut() {
        let mut array = BoundedArray::from_elem(3, 1);
        *array.get_mut(1).unwrap() = 7;
        assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![1, 7, 1]);
        assert!(array.get_mut(3).is_err());
    }

    #[test]
    fn nested_arrays() {
        let mut grid: BoundedArray<BoundedArray<i32>> = BoundedArray::new(4);
        assert!(grid.iter().all(BoundedArray::is_empty));
        *grid.get_mut(2).unwrap() = BoundedArray::from_elem(2, 5);
        assert_eq!(grid.get(2).and_then(|row| row.get(1)), Ok(&5));
        assert_eq!(
            grid.get(0).and_then(|row| row.get(0)),
            Err(Error::OutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn holds_expressions() {
        let array = BoundedArray::from_elem(3, crate::Expr::binary("+", 3, 4));
        assert_eq!(array.get(0).unwrap().share_count(), 3);
        let texts: Vec<String> = (&array).into_iter().map(|e| e.text().unwrap()).collect();
        assert_eq!(texts, vec!["(3 + 4)"; 3]);
    }
}
