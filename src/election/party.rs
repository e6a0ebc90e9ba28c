use std::ops::{Index, IndexMut};

use crate::render::Rgb;

/// One of the two competing sides. `Left` is always index 0, `Right` index 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Position of this side in every two-element array.
    #[inline] pub fn index(self) -> usize { self as usize }

    #[inline]
    pub fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl<T> Index<Side> for [T; 2] {
    type Output = T;
    #[inline] fn index(&self, side: Side) -> &T { &self[side.index()] }
}

impl<T> IndexMut<Side> for [T; 2] {
    #[inline] fn index_mut(&mut self, side: Side) -> &mut T { &mut self[side.index()] }
}

/// A political party: display label plus the color used for its bars and highlights.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Party {
    name: String,
    color: Rgb,
}

impl Party {
    pub fn new(name: impl Into<String>, color: Rgb) -> Self {
        Self { name: name.into(), color }
    }

    #[inline] pub fn name(&self) -> &str { &self.name }

    #[inline] pub fn color(&self) -> Rgb { self.color }
}

/// The left and right parties of an election.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parties {
    pub left: Party,
    pub right: Party,
}

impl Parties {
    pub fn new(left: Party, right: Party) -> Self { Self { left, right } }

    #[inline]
    pub fn get(&self, side: Side) -> &Party {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}
