//! Material catalog: one table row per material.

use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

use crate::color::Color;
use crate::error::SimError;

/// Discriminant values cross the wasm boundary as plain `u8`. Do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Material {
    #[default]
    Empty = 0,
    Sand = 1,
    Water = 2,
    Stone = 3,
    Oil = 4,
    Smoke = 5,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Aggregate {
    Solid,
    Liquid,
    Gaseous,
}

/// Set of movement capabilities a material is allowed to try each tick.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Moves(u8);

impl Moves {
    pub const NONE: Self = Self(0);
    pub const DOWN: Self = Self(1);
    pub const SIDES: Self = Self(1 << 1);
    pub const DOWN_SIDES: Self = Self(1 << 2);
    pub const UP: Self = Self(1 << 3);

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Moves {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MaterialProps {
    pub name: &'static str,
    pub aggregate: Aggregate,
    pub moves: Moves,
    /// Relative rank between two occupied cells; never compared against Empty.
    pub density: u8,
    pub color: Color,
}

/// Indexed by discriminant.
static CATALOG: [MaterialProps; 6] = [
    MaterialProps {
        name: "empty",
        aggregate: Aggregate::Solid,
        moves: Moves::NONE,
        density: 0,
        color: Color::hsla(0.0, 0.0, 0.0, 0.0),
    },
    MaterialProps {
        name: "sand",
        aggregate: Aggregate::Solid,
        moves: Moves::DOWN.union(Moves::DOWN_SIDES),
        density: 4,
        color: Color::hsla(45.0, 80.0, 55.0, 1.0),
    },
    MaterialProps {
        name: "water",
        aggregate: Aggregate::Liquid,
        moves: Moves::DOWN.union(Moves::SIDES),
        density: 3,
        color: Color::hsla(200.0, 100.0, 50.0, 0.8),
    },
    MaterialProps {
        name: "stone",
        aggregate: Aggregate::Solid,
        moves: Moves::NONE,
        density: 8,
        color: Color::hsla(0.0, 0.0, 40.0, 1.0),
    },
    MaterialProps {
        name: "oil",
        aggregate: Aggregate::Liquid,
        moves: Moves::DOWN.union(Moves::SIDES),
        density: 2,
        color: Color::hsla(45.0, 90.0, 40.0, 0.9),
    },
    MaterialProps {
        name: "smoke",
        aggregate: Aggregate::Gaseous,
        moves: Moves::UP,
        density: 1,
        color: Color::hsla(0.0, 0.0, 40.0, 0.7),
    },
];

impl Material {
    pub const ALL: [Self; 6] = [
        Self::Empty,
        Self::Sand,
        Self::Water,
        Self::Stone,
        Self::Oil,
        Self::Smoke,
    ];

    #[must_use]
    pub fn props(self) -> &'static MaterialProps {
        &CATALOG[self as usize]
    }

    #[must_use]
    pub fn aggregate(self) -> Aggregate {
        self.props().aggregate
    }

    #[must_use]
    pub fn moves(self) -> Moves {
        self.props().moves
    }

    #[must_use]
    pub fn density(self) -> u8 {
        self.props().density
    }

    #[must_use]
    pub fn base_color(self) -> Color {
        self.props().color
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.props().name
    }

    #[must_use]
    pub fn from_u8(id: u8) -> Option<Self> {
        Self::ALL.get(usize::from(id)).copied()
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Material {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| SimError::InvalidMaterialKind(s.to_owned()))
    }
}

impl TryFrom<u8> for Material {
    type Error = SimError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_u8(id).ok_or_else(|| SimError::InvalidMaterialKind(id.to_string()))
    }
}
