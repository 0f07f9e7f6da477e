//! A two-operand arithmetic calculator.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use tracing::debug;

use crate::errors::DrillsError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Operator {
    #[default]
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl FromStr for Operator {
    type Err = DrillsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Sub),
            "*" => Ok(Self::Mul),
            "/" => Ok(Self::Div),
            other => Err(DrillsError::UnknownOperator(other.to_string())),
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.symbol(), f)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Calculation {
    pub lhs: f64,
    pub op: Operator,
    pub rhs: f64,
    pub result: f64,
}

impl Display for Calculation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "result: {:.2} {} {:.2} = {:.2}", self.lhs, self.op, self.rhs, self.result)
    }
}

pub fn evaluate(lhs: f64, op: Operator, rhs: f64) -> Result<Calculation, DrillsError> {
    let result = match op {
        Operator::Add => lhs + rhs,
        Operator::Sub => lhs - rhs,
        Operator::Mul => lhs * rhs,
        Operator::Div => {
            if rhs == 0.0 {
                return Err(DrillsError::DivisionByZero);
            }

            lhs / rhs
        }
    };

    debug!(lhs, %op, rhs, result, "evaluated");

    Ok(Calculation { lhs, op, rhs, result })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{evaluate, Operator};
    use crate::errors::DrillsError;

    #[rstest]
    #[case(3.0, "+", 4.5, 7.5)]
    #[case(3.0, "-", 4.5, -1.5)]
    #[case(3.0, "*", 4.5, 13.5)]
    #[case(9.0, "/", 4.0, 2.25)]
    #[case(0.0, "+", 0.0, 0.0)]
    fn test_evaluate(#[case] lhs: f64, #[case] op: &str, #[case] rhs: f64, #[case] expected: f64) {
        let op: Operator = op.parse().unwrap();
        let calc = evaluate(lhs, op, rhs).unwrap();

        assert_eq!(calc.result, expected);
    }

    #[test]
    fn test_division_by_zero() {
        assert!(matches!(evaluate(6.0, Operator::Div, 0.0), Err(DrillsError::DivisionByZero)));
        assert!(matches!(evaluate(6.0, Operator::Div, -0.0), Err(DrillsError::DivisionByZero)));
        assert_eq!(DrillsError::DivisionByZero.to_string(), "error: num2 is 0");
    }

    #[test]
    fn test_unknown_operator() {
        match "%".parse::<Operator>() {
            Err(DrillsError::UnknownOperator(op)) => assert_eq!(op, "%"),
            other => panic!("Unexpected result {:?}", other),
        }
        assert!("".parse::<Operator>().is_err());
        assert_eq!(Operator::default(), Operator::Add);
    }

    #[test]
    fn test_display() {
        let calc = evaluate(1.0, Operator::Div, 3.0).unwrap();
        assert_eq!(calc.to_string(), "result: 1.00 / 3.00 = 0.33");

        let calc = evaluate(-2.5, Operator::Mul, 4.0).unwrap();
        assert_eq!(calc.to_string(), "result: -2.50 * 4.00 = -10.00");
    }
}
