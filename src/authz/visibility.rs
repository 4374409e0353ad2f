//! Reachability of a resource through its ancestor chain.
//!
//! Each level of the chain is an independent gate: a level passes when the
//! principal may reach it (`internal` requires internal access) and when it is
//! shown (`visible`, or any admin in historical mode). The chain passes only if
//! every level passes. Nothing is inherited between levels.

use crate::errors::IndeterminateInput;
use crate::models::{Category, Issue, Project, Task};

use super::predicates::{category_of, project_of};
use super::principal::Principal;

/// How visibility flags are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Existing resources. Admins see hidden levels.
    Historical,
    /// Resource creation. No admin bypass.
    Live,
}

/// Visibility flags of one hierarchy level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    pub visible: bool,
    pub internal: bool,
}

impl Level {
    pub fn new(visible: bool, internal: bool) -> Self {
        Self { visible, internal }
    }

    pub fn reachable_by(&self, principal: &Principal) -> bool {
        !self.internal || principal.has_internal_access()
    }

    pub fn shown_to(&self, principal: &Principal, mode: Mode) -> bool {
        match mode {
            Mode::Historical => self.visible || principal.is_admin(),
            Mode::Live => self.visible,
        }
    }

    pub fn passes(&self, principal: &Principal, mode: Mode) -> bool {
        self.reachable_by(principal) && self.shown_to(principal, mode)
    }
}

/// Ordered levels from the root category downwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AncestorChain {
    levels: Vec<Level>,
}

impl AncestorChain {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push(mut self, level: Level) -> Self {
        self.levels.push(level);
        self
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Reduces the chain. Unaffiliated principals never pass, even on an
    /// empty chain.
    pub fn reachable(&self, principal: &Principal, mode: Mode) -> bool {
        principal.is_affiliated() && self.levels.iter().all(|level| level.passes(principal, mode))
    }
}

/// Resources that carry their own visibility flags.
pub trait Flagged {
    fn level(&self) -> Level;
}

impl Flagged for Category {
    fn level(&self) -> Level {
        Level::new(self.visible, self.internal)
    }
}

impl Flagged for Project {
    fn level(&self) -> Level {
        Level::new(self.visible, self.internal)
    }
}

/// Anything whose reachability derives from the hierarchy.
pub trait Scoped {
    /// Chain above this resource.
    fn ancestors(&self) -> Result<AncestorChain, IndeterminateInput>;

    /// Chain seen by resources nested under this one. Flagged resources add
    /// their own level; work items add nothing.
    fn scope(&self) -> Result<AncestorChain, IndeterminateInput> {
        self.ancestors()
    }
}

impl Scoped for Category {
    fn ancestors(&self) -> Result<AncestorChain, IndeterminateInput> {
        Ok(AncestorChain::empty())
    }

    fn scope(&self) -> Result<AncestorChain, IndeterminateInput> {
        Ok(self.ancestors()?.push(self.level()))
    }
}

impl Scoped for Project {
    fn ancestors(&self) -> Result<AncestorChain, IndeterminateInput> {
        category_of(self)?.scope()
    }

    fn scope(&self) -> Result<AncestorChain, IndeterminateInput> {
        Ok(self.ancestors()?.push(self.level()))
    }
}

impl Scoped for Issue {
    fn ancestors(&self) -> Result<AncestorChain, IndeterminateInput> {
        project_of(self)?.scope()
    }
}

impl Scoped for Task {
    fn ancestors(&self) -> Result<AncestorChain, IndeterminateInput> {
        project_of(self)?.scope()
    }
}
