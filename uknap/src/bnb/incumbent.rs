/// Best complete solution found so far, in the sorted item order of the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incumbent {
    assignment: Vec<u64>,
    value: u64,
}

impl Incumbent {
    pub fn new(assignment: &[u64], value: u64) -> Self {
        Self {
            assignment: assignment.to_vec(),
            value,
        }
    }

    /// Adopts `assignment` if its `value` strictly improves the incumbent.
    /// Returns whether it was adopted.
    pub fn offer(&mut self, assignment: &[u64], value: u64) -> bool {
        if value <= self.value {
            return false;
        }
        self.assignment.copy_from_slice(assignment);
        self.value = value;
        true
    }

    /// Same as [`Incumbent::offer`], for `assignment` extended with a single copy of item `extra`.
    /// `assignment` itself is left untouched.
    pub fn offer_with_extra(&mut self, assignment: &[u64], value: u64, extra: usize) -> bool {
        debug_assert_eq!(assignment[extra], 0);
        if value <= self.value {
            return false;
        }
        self.assignment.copy_from_slice(assignment);
        self.assignment[extra] = 1;
        self.value = value;
        true
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    #[inline]
    pub fn assignment(&self) -> &[u64] {
        &self.assignment
    }

    /// Whether the incumbent attains `upper_bound`, proving it optimal
    #[inline]
    pub fn reaches(&self, upper_bound: u64) -> bool {
        self.value == upper_bound
    }

    pub fn into_assignment(self) -> Vec<u64> {
        self.assignment
    }
}
