//! Layout snapshot types: units, doors, access points.
//!
//! - `Unit`: axis-aligned footprint (rectangle or right triangle) with doors.
//! - `Door`: a side of its unit plus a `locked` flag; locked doors become locks.
//! - `AccessPoint`: omnidirectional anchor with a fixed range in pixels.
//!
//! Field names follow the host UI's JSON (camelCase, lowercase enum tags) so a
//! layout snapshot deserializes without an intermediate mapping layer.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Snap size of the host editor's grid (pixels). Units are at least this big.
pub const GRID_SIZE: f64 = 25.0;

/// Footprint kind of a unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Shape {
    #[default]
    Rectangle,
    RightTriangle,
}

/// Corner of the bounding box that holds a right triangle's right angle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Nw,
    Ne,
    Se,
    Sw,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Nw,
        Orientation::Ne,
        Orientation::Se,
        Orientation::Sw,
    ];

    /// The two legs of a triangle with this orientation, plus the hypotenuse.
    pub fn valid_sides(self) -> [Side; 3] {
        match self {
            Orientation::Nw => [Side::Top, Side::Left, Side::Hypotenuse],
            Orientation::Ne => [Side::Top, Side::Right, Side::Hypotenuse],
            Orientation::Se => [Side::Bottom, Side::Right, Side::Hypotenuse],
            Orientation::Sw => [Side::Bottom, Side::Left, Side::Hypotenuse],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Nw => "nw",
            Orientation::Ne => "ne",
            Orientation::Se => "se",
            Orientation::Sw => "sw",
        }
    }
}

/// Side of a unit a door sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
    Hypotenuse,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Hypotenuse => "hypotenuse",
        }
    }
}

/// Unknown name for a `Shape`, `Orientation` or `Side`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseLayoutError {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for ParseLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} {:?}", self.kind, self.value)
    }
}

impl std::error::Error for ParseLayoutError {}

impl FromStr for Side {
    type Err = ParseLayoutError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Side::Top),
            "right" => Ok(Side::Right),
            "bottom" => Ok(Side::Bottom),
            "left" => Ok(Side::Left),
            "hypotenuse" => Ok(Side::Hypotenuse),
            other => Err(ParseLayoutError {
                kind: "side",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for Orientation {
    type Err = ParseLayoutError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nw" => Ok(Orientation::Nw),
            "ne" => Ok(Orientation::Ne),
            "se" => Ok(Orientation::Se),
            "sw" => Ok(Orientation::Sw),
            other => Err(ParseLayoutError {
                kind: "orientation",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for Shape {
    type Err = ParseLayoutError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rectangle" => Ok(Shape::Rectangle),
            "rightTriangle" => Ok(Shape::RightTriangle),
            other => Err(ParseLayoutError {
                kind: "shape",
                value: other.to_string(),
            }),
        }
    }
}

/// A door on one side of its unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    pub side: Side,
    #[serde(default)]
    pub locked: bool,
}

impl Door {
    #[inline]
    pub fn locked(side: Side) -> Self {
        Self { side, locked: true }
    }
    #[inline]
    pub fn unlocked(side: Side) -> Self {
        Self {
            side,
            locked: false,
        }
    }
}

/// A room footprint in pixel space.
///
/// Invariants (caller-guaranteed):
/// - `width > 0` and `height > 0`.
/// - `orientation` only matters for `Shape::RightTriangle`; `None` reads as `Nw`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub shape: Shape,
    #[serde(default)]
    pub orientation: Option<Orientation>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub doors: Vec<Door>,
}

impl Unit {
    pub fn rect(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            shape: Shape::Rectangle,
            orientation: None,
            x,
            y,
            width,
            height,
            doors: Vec::new(),
        }
    }

    pub fn triangle(
        id: impl Into<String>,
        orientation: Orientation,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            id: id.into(),
            shape: Shape::RightTriangle,
            orientation: Some(orientation),
            x,
            y,
            width,
            height,
            doors: Vec::new(),
        }
    }

    /// Builder-style door append.
    pub fn with_door(mut self, door: Door) -> Self {
        self.doors.push(door);
        self
    }

    /// Effective triangle orientation (`Nw` when unset).
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation.unwrap_or_default()
    }

    #[inline]
    pub fn origin(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Whether a door on `side` is geometrically meaningful for this unit.
    pub fn accepts_side(&self, side: Side) -> bool {
        match self.shape {
            Shape::Rectangle => side != Side::Hypotenuse,
            Shape::RightTriangle => self.orientation().valid_sides().contains(&side),
        }
    }
}

/// Omnidirectional wireless access point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessPoint {
    #[serde(default)]
    pub id: String,
    pub x: f64,
    pub y: f64,
    /// Coverage radius in pixels.
    pub range: f64,
}

impl AccessPoint {
    pub fn new(id: impl Into<String>, x: f64, y: f64, range: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            range,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

/// Immutable snapshot handed over by the host UI.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(default)]
    pub units: Vec<Unit>,
    #[serde(default)]
    pub access_points: Vec<AccessPoint>,
}
