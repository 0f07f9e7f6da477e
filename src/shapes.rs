use std::f64::consts::PI;
use std::fmt::{Display, Formatter};

pub trait Shape {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Employee {
    pub person: Person,
    pub employee_id: u32,
}

impl Employee {
    pub fn new(name: &str, age: u32, employee_id: u32) -> Self {
        Self {
            person: Person { name: name.to_string(), age },
            employee_id,
        }
    }
}

/// Name, age and employee id, one per line.
impl Display for Employee {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.person.name)?;
        writeln!(f, "{}", self.person.age)?;
        write!(f, "{}", self.employee_id)
    }
}

/// The objects shown by the `shapes` subcommand.
pub fn demo_shapes() -> (Vec<Box<dyn Shape>>, Employee) {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::new(10.0)),
        Box::new(Rectangle::new(10.0, 5.0)),
    ];

    (shapes, Employee::new("Jack", 20, 30))
}
