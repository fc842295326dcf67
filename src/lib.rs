/*!

A minimal agent-based epidemic simulation core: a `Population` of `Person`s
with Gaussian-distributed 2D positions and a health `Status`, where each
person's neighbors are the people strictly inside a fixed axis-aligned box
around its position, and sickness resolves to immunity after a fixed number
of consecutive sick days.

The crate deliberately stops at single-step transition operations
(`Person::next_epoch`, `Person::update_status`): assembling them into a
day-by-day loop is an external collaborator's job.

*/

pub mod error;
pub mod log;
pub mod people;
pub mod population;
pub mod random;

pub use error::EpiError;
pub use people::{DAYS_BEFORE_HEALING, NeighborhoodArea, Person, Status};
pub use population::{Population, PopulationParameters, StatusSummary};
pub use random::SimRng;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a person, unique within its owning `Population`. Assigned
/// sequentially during generation, so ids double as collection indices.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
pub struct PersonId(pub(crate) usize);

impl PersonId {
    #[must_use]
    pub fn new(index: usize) -> Self {
        PersonId(index)
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
