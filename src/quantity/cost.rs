use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Total resource pool cost of a solution.
pub type Cost = Quantity<0, 1>;

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}$", self.0.0)
    }
}
