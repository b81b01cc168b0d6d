//! Shared, immutable rendering state for snowflakes

use crate::render::DrawSurface;
use snowfall_core::Rgba;
use std::fmt;

/// Shape label of a descriptor. Snowflakes only come as circles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Circle,
}

impl Shape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Circle => "Circle",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a descriptor: two descriptors with equal keys are the same flyweight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DescriptorKey {
    pub shape: Shape,
    pub color: Rgba,
    pub diameter: u32,
}

impl fmt::Display for DescriptorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.color.to_array();
        write!(f, "{}_{r},{g},{b},{a}_{}", self.shape, self.diameter)
    }
}

/// Flyweight holding everything needed to draw one kind of snowflake.
///
/// Only constructed by `FlyweightCache`; fields are read-only.
#[derive(Debug, PartialEq, Eq)]
pub struct Descriptor {
    shape: Shape,
    color: Rgba,
    diameter: u32,
}

impl Descriptor {
    pub(crate) fn new(key: DescriptorKey) -> Self {
        Self {
            shape: key.shape,
            color: key.color,
            diameter: key.diameter,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    pub fn key(&self) -> DescriptorKey {
        DescriptorKey {
            shape: self.shape,
            color: self.color,
            diameter: self.diameter,
        }
    }

    /// Draw this snowflake centered at `(x, y)`
    pub fn draw(&self, surface: &mut dyn DrawSurface, x: f32, y: f32) {
        match self.shape {
            Shape::Circle => surface.fill_circle([x, y], self.diameter as f32, self.color),
        }
    }
}
