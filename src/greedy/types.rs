//! Greedy allocation types.

/// A divisible investment project.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Project {
    pub name: String,

    /// Full funding cost. Must be positive.
    pub cost: f64,

    /// Benefit at full funding; partial funding yields a
    /// proportional share.
    pub benefit: f64,
}

impl Project {
    pub fn new(name: impl Into<String>, cost: f64, benefit: f64) -> Self {
        Self {
            name: name.into(),
            cost,
            benefit,
        }
    }

    pub(crate) fn ratio(&self) -> f64 {
        self.benefit / self.cost
    }
}

/// Budget assigned to one project.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub name: String,

    /// Amount of budget assigned.
    pub amount: f64,

    /// Funded fraction in `[0, 1]`.
    pub fraction: f64,

    /// Proportional benefit obtained.
    pub benefit: f64,
}

/// Result of a fractional budget allocation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FractionalAllocation {
    /// Funded projects in descending ratio order; at most one is
    /// partially funded (the last).
    pub assignments: Vec<Assignment>,

    /// Sum of obtained benefits.
    pub total_benefit: f64,

    /// Budget left after all projects are fully funded (zero unless
    /// the budget exceeds the total cost).
    pub budget_remaining: f64,
}

/// Result of distributing an integer amount over container sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitDistribution {
    /// `(size, count)` pairs in descending size order, zero counts
    /// omitted.
    pub counts: Vec<(usize, usize)>,

    /// Amount covered by the containers.
    pub delivered: usize,

    /// Amount no container combination could cover.
    pub remainder: usize,
}
