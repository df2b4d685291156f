//! Intersection classification
//!
//! Every point of the Fanorona grid is either strong or weak. Strong
//! points sit on the diagonal lines and allow all 8 unit steps; weak
//! points only connect orthogonally. Which one a point is follows from
//! the parity of its coordinates.

use crate::board::Pos;

/// Orthogonal unit steps
pub const ORTHOGONAL: [Step; 4] = [
    Step::new(-1, 0),
    Step::new(1, 0),
    Step::new(0, -1),
    Step::new(0, 1),
];

/// Diagonal unit steps
pub const DIAGONAL: [Step; 4] = [
    Step::new(-1, -1),
    Step::new(-1, 1),
    Step::new(1, -1),
    Step::new(1, 1),
];

/// Movement class of an intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    /// 8 neighbours (orthogonal + diagonal)
    Strong,
    /// 4 orthogonal neighbours
    Weak,
}

/// A direction vector between two points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    pub dr: i32,
    pub dc: i32,
}

impl Step {
    #[inline]
    pub const fn new(dr: i32, dc: i32) -> Self {
        Self { dr, dc }
    }

    /// Vector from `from` to `to`
    #[inline]
    pub fn between(from: Pos, to: Pos) -> Self {
        Self::new(to.row - from.row, to.col - from.col)
    }

    /// Both components in {-1, 0, 1} and not the null step
    #[inline]
    pub fn is_unit(self) -> bool {
        self.dr.abs() <= 1 && self.dc.abs() <= 1 && (self.dr, self.dc) != (0, 0)
    }

    #[inline]
    pub fn is_orthogonal(self) -> bool {
        self.dr.abs() + self.dc.abs() == 1
    }

    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(-self.dr, -self.dc)
    }

    /// Apply this step to a position
    #[inline]
    pub fn apply(self, pos: Pos) -> Pos {
        pos.offset(self.dr, self.dc)
    }
}

impl Strength {
    /// Whether a unit step may leave an intersection of this strength
    #[inline]
    pub fn allows(self, step: Step) -> bool {
        match self {
            Strength::Strong => step.is_unit(),
            Strength::Weak => step.is_orthogonal(),
        }
    }

    /// Unit steps leaving an intersection of this strength
    pub fn steps(self) -> impl Iterator<Item = Step> {
        let diagonal: &'static [Step] = match self {
            Strength::Strong => &DIAGONAL,
            Strength::Weak => &[],
        };
        ORTHOGONAL.iter().chain(diagonal.iter()).copied()
    }
}

/// Classify an intersection by coordinate parity
#[inline]
pub fn classify(pos: Pos) -> Strength {
    if (pos.row + pos.col).rem_euclid(2) == 0 {
        Strength::Strong
    } else {
        Strength::Weak
    }
}

/// On-board neighbours reachable in one step from `pos`
pub fn neighbours(pos: Pos) -> impl Iterator<Item = Pos> {
    classify(pos)
        .steps()
        .map(move |step| step.apply(pos))
        .filter(|p| p.is_valid())
}
