//! Cloneable shapes managed by the [`PrototypeRegistry`](crate::prototype::PrototypeRegistry).
//!
//! Every shape embeds a [`ShapeBase`] (origin, color, label). `origin` and
//! `color` are owned and copied on clone; `label` is an immutable `Arc<str>`,
//! so clones share it safely.

use std::any::Any;
use std::f64::consts::PI;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::framework::Shape;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// State shared by every shape kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeBase {
    pub origin: Point,
    pub color: String,
    pub label: Arc<str>,
}

impl ShapeBase {
    pub fn new(label: &str) -> Self {
        Self {
            origin: Point::default(),
            color: "black".to_string(),
            label: Arc::from(label),
        }
    }
}

impl Default for ShapeBase {
    fn default() -> Self {
        Self::new("")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub base: ShapeBase,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            base: ShapeBase::new("rectangle"),
            width,
            height,
        }
    }
}

impl Default for Rectangle {
    /// A zero-sized rectangle.
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub base: ShapeBase,
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self {
            base: ShapeBase::new("circle"),
            radius,
        }
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// A shape that owns other shapes.
///
/// `#[derive(Clone)]` on `Vec<Box<dyn Shape>>` goes through
/// [`Shape::clone_shape`] for each child, so a cloned group never aliases the
/// children of its source.
#[derive(Debug, Clone)]
pub struct ShapeGroup {
    pub base: ShapeBase,
    children: Vec<Box<dyn Shape>>,
}

impl ShapeGroup {
    pub fn new(label: &str) -> Self {
        Self {
            base: ShapeBase::new(label),
            children: Vec::new(),
        }
    }

    pub fn with(mut self, child: Box<dyn Shape>) -> Self {
        self.push(child);
        self
    }

    pub fn push(&mut self, child: Box<dyn Shape>) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Box<dyn Shape>] {
        &self.children
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Box<dyn Shape>> {
        self.children.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl PartialEq for ShapeGroup {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.children == other.children
    }
}

impl Shape for Rectangle {
    fn kind(&self) -> &'static str {
        "rectangle"
    }

    fn show(&self) -> String {
        format!("<> This is a Rectangle: {}#{}", self.width, self.height)
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn eq_shape(&self, other: &dyn Shape) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| other == self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Shape for Circle {
    fn kind(&self) -> &'static str {
        "circle"
    }

    fn show(&self) -> String {
        format!("<> This is a Circle: {}", self.radius)
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn eq_shape(&self, other: &dyn Shape) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| other == self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Shape for ShapeGroup {
    fn kind(&self) -> &'static str {
        "group"
    }

    fn show(&self) -> String {
        let inner: Vec<String> = self.children.iter().map(|child| child.show()).collect();
        format!("<> This is a Group of {}: [{}]", self.children.len(), inner.join(", "))
    }

    fn area(&self) -> f64 {
        self.children.iter().map(|child| child.area()).sum()
    }

    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn eq_shape(&self, other: &dyn Shape) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| other == self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_matches_dimensions() {
        assert_eq!(Rectangle::new(3.0, 4.0).show(), "<> This is a Rectangle: 3#4");
        assert_eq!(Circle::new(5.0).show(), "<> This is a Circle: 5");
    }

    #[test]
    fn test_eq_shape_across_kinds() {
        let rect: Box<dyn Shape> = Box::new(Rectangle::new(1.0, 1.0));
        let circle: Box<dyn Shape> = Box::new(Circle::new(1.0));
        assert!(rect != circle);
        assert!(rect == rect.clone());
    }

    #[test]
    fn test_group_area_sums_children() {
        let group = ShapeGroup::new("pair")
            .with(Box::new(Rectangle::new(2.0, 3.0)))
            .with(Box::new(Rectangle::new(1.0, 4.0)));
        assert_eq!(group.area(), 10.0);
        assert_eq!(group.len(), 2);
    }
}
