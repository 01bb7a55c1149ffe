use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A point (or a delta) in the 4D lattice.
///
/// Components are unconstrained here: a `Coord` may sit off the board while a
/// candidate move is being computed. On-board cells are [`crate::board::Square`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub w: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord {
        x: 0,
        y: 0,
        z: 0,
        w: 0,
    };

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self { x, y, z, w }
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Coord {
        Coord::new(self.x.abs(), self.y.abs(), self.z.abs(), self.w.abs())
    }

    #[inline]
    pub fn components(self) -> [i32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    pub fn chebyshev_norm(self) -> i32 {
        self.components()
            .into_iter()
            .map(i32::abs)
            .max()
            .unwrap_or(0)
    }

    #[inline]
    pub fn in_range(self, size: i32) -> bool {
        self.components().into_iter().all(|c| (0..size).contains(&c))
    }

    /// The exact difference `to - self`, for any pair of coordinates.
    #[inline]
    pub fn delta_to(self, to: Coord) -> Delta {
        let d = |a: i32, b: i32| i64::from(b) - i64::from(a);
        Delta::new(
            d(self.x, to.x),
            d(self.y, to.y),
            d(self.z, to.z),
            d(self.w, to.w),
        )
    }
}

/// A move vector between two [`Coord`]s.
///
/// Components are widened to `i64` so that the difference of any two `i32`
/// coordinates, and its absolute value, is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delta {
    pub x: i64,
    pub y: i64,
    pub z: i64,
    pub w: i64,
}

impl Delta {
    pub const ZERO: Delta = Delta::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(x: i64, y: i64, z: i64, w: i64) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn abs(self) -> Delta {
        Delta::new(self.x.abs(), self.y.abs(), self.z.abs(), self.w.abs())
    }

    /// Unit step towards `self`.
    #[inline]
    pub fn signum(self) -> Coord {
        let s = |c: i64| c.signum() as i32;
        Coord::new(s(self.x), s(self.y), s(self.z), s(self.w))
    }

    #[inline]
    pub fn components(self) -> [i64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    pub fn chebyshev_norm(self) -> i64 {
        self.components()
            .into_iter()
            .map(i64::abs)
            .max()
            .unwrap_or(0)
    }

    #[inline]
    pub fn nonzero_axes(self) -> usize {
        self.components().into_iter().filter(|&c| c != 0).count()
    }
}

impl From<Coord> for Delta {
    fn from(c: Coord) -> Self {
        Delta::new(c.x.into(), c.y.into(), c.z.into(), c.w.into())
    }
}


impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Self::Output {
        Coord::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl Neg for Coord {
    type Output = Coord;

    #[inline]
    fn neg(self) -> Self::Output {
        Coord::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i32) -> Coord {
        Coord::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{},{})", self.x, self.y, self.z, self.w)
    }
}

/// The 81 king offsets in `{-1,0,1}^4`, the zero offset included.
pub fn king_offsets() -> impl Iterator<Item = Coord> {
    (0..81).map(|i| Coord::new(i / 27 % 3 - 1, i / 9 % 3 - 1, i / 3 % 3 - 1, i % 3 - 1))
}
