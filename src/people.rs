/*!

The leaf entity of the simulation: one `Person` with an immutable 2D
position, a health `Status`, a consecutive-sick-day counter, and a
neighborhood box computed once at construction. Status only ever moves
`Sick → Immune`, after `DAYS_BEFORE_HEALING` sick days.

*/

use crate::PersonId;
use serde::Serialize;
use std::fmt;

/// Number of consecutive sick days after which a sick person heals immune.
pub const DAYS_BEFORE_HEALING: u32 = 7;

/// Health state of a person.
///
/// `Dead` is defined for future transmission logic but nothing in the
/// current model assigns it or transitions into it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub enum Status {
    Healthy,
    Sick,
    Dead,
    Immune,
}

impl Status {
    /// Every variant, in declaration order. Lets callers tabulate counts
    /// without missing dormant states.
    pub const ALL: [Status; 4] = [Status::Healthy, Status::Sick, Status::Dead, Status::Immune];
}

/// Axis-aligned box `[x - r, x + r] × [y - r, y + r]` around a person's
/// position. Anyone strictly inside counts as a neighbor; a point exactly on
/// a bound does not. Computed once at construction and never updated, which
/// is sound because positions are immutable after construction.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct NeighborhoodArea {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

impl NeighborhoodArea {
    #[must_use]
    pub fn new(position_x: f64, position_y: f64, radius: f64) -> Self {
        NeighborhoodArea {
            x_min: position_x - radius,
            y_min: position_y - radius,
            x_max: position_x + radius,
            y_max: position_y + radius,
        }
    }

    /// Strict inequality on all four bounds.
    #[must_use]
    pub fn contains(&self, position_x: f64, position_y: f64) -> bool {
        self.x_min < position_x
            && position_x < self.x_max
            && self.y_min < position_y
            && position_y < self.y_max
    }
}

/// One simulated person. Owned exclusively by its `Population` and mutated
/// in place by the single-step transition operations.
#[derive(Clone, Debug, Serialize)]
pub struct Person {
    id: PersonId,
    position_x: f64,
    position_y: f64,
    status: Status,
    consecutive_sick_days: u32,
    // Derived from position and radius; excluded from the diagnostic
    // rendering, as only the bounds' inputs are interesting.
    #[serde(skip)]
    neighborhood_area: NeighborhoodArea,
    neighbors: Vec<PersonId>,
}

impl Person {
    /// Creates a person at `(position_x, position_y)` with the given initial
    /// status. `radius` defines the neighborhood box. Id uniqueness is the
    /// caller's responsibility; `Population` assigns sequential indices.
    #[must_use]
    pub fn new(
        id: PersonId,
        position_x: f64,
        position_y: f64,
        initial_status: Status,
        radius: f64,
    ) -> Self {
        Person {
            id,
            position_x,
            position_y,
            status: initial_status,
            consecutive_sick_days: 0,
            neighborhood_area: NeighborhoodArea::new(position_x, position_y, radius),
            neighbors: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PersonId {
        self.id
    }

    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.position_x, self.position_y)
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn consecutive_sick_days(&self) -> u32 {
        self.consecutive_sick_days
    }

    #[must_use]
    pub fn neighborhood_area(&self) -> &NeighborhoodArea {
        &self.neighborhood_area
    }

    /// Ids of the people strictly inside this person's neighborhood box, in
    /// candidate order. Empty until `compute_neighbors` runs.
    #[must_use]
    pub fn neighbors(&self) -> &[PersonId] {
        &self.neighbors
    }

    /// Heals a person who has been sick for at least `DAYS_BEFORE_HEALING`
    /// consecutive days. No-op otherwise; idempotent once `Immune`.
    pub fn update_status(&mut self) {
        if self.status == Status::Sick && self.consecutive_sick_days >= DAYS_BEFORE_HEALING {
            self.status = Status::Immune;
        }
    }

    /// Advances this person by one epoch: a sick person accrues one more
    /// consecutive sick day. No-op for every other status.
    ///
    /// Deliberately not combined with `update_status`; sequencing the two
    /// into a day loop belongs to an external stepper.
    pub fn next_epoch(&mut self) {
        if self.status == Status::Sick {
            self.consecutive_sick_days += 1;
        }
    }

    /// Rebuilds this person's neighbor list from `candidates`: every
    /// candidate strictly inside the neighborhood box, excluding this person
    /// itself (the candidate set is typically the whole population, self
    /// included). The list is cleared first, so repeat scans replace rather
    /// than accumulate.
    pub fn compute_neighbors(&mut self, candidates: &[Person]) {
        self.neighbors.clear();
        for candidate in candidates {
            if self
                .neighborhood_area
                .contains(candidate.position_x, candidate.position_y)
                && candidate.id != self.id
            {
                self.neighbors.push(candidate.id);
            }
        }
    }
}

impl fmt::Display for Person {
    /// Renders every field except the derived neighborhood box as a JSON
    /// object, for diagnostics and logging.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rendered = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sick_person() -> Person {
        Person::new(PersonId(0), 0.0, 0.0, Status::Sick, 1.0)
    }

    #[test]
    fn sick_person_accrues_sick_days() {
        let mut person = sick_person();
        person.next_epoch();
        person.next_epoch();
        assert_eq!(person.consecutive_sick_days(), 2);
    }

    #[test]
    fn next_epoch_is_noop_for_non_sick() {
        for status in [Status::Healthy, Status::Dead, Status::Immune] {
            let mut person = Person::new(PersonId(0), 0.0, 0.0, status, 1.0);
            person.next_epoch();
            assert_eq!(person.consecutive_sick_days(), 0);
            assert_eq!(person.status(), status);
        }
    }

    #[test]
    fn heals_at_threshold_not_before() {
        let mut person = sick_person();
        for _ in 0..DAYS_BEFORE_HEALING - 1 {
            person.next_epoch();
        }
        person.update_status();
        assert_eq!(person.status(), Status::Sick);

        person.next_epoch();
        person.update_status();
        assert_eq!(person.status(), Status::Immune);
    }

    #[test]
    fn update_status_idempotent_once_immune() {
        let mut person = sick_person();
        for _ in 0..DAYS_BEFORE_HEALING {
            person.next_epoch();
        }
        person.update_status();
        person.update_status();
        assert_eq!(person.status(), Status::Immune);

        // The counter no longer advances either.
        person.next_epoch();
        assert_eq!(person.consecutive_sick_days(), DAYS_BEFORE_HEALING);
    }

    #[test]
    fn neighbors_within_radius_are_mutual() {
        let mut a = Person::new(PersonId(0), 0.0, 0.0, Status::Healthy, 1.0);
        let mut b = Person::new(PersonId(1), 0.5, 0.0, Status::Healthy, 1.0);
        let candidates = vec![a.clone(), b.clone()];

        a.compute_neighbors(&candidates);
        b.compute_neighbors(&candidates);

        assert_eq!(a.neighbors(), &[PersonId(1)]);
        assert_eq!(b.neighbors(), &[PersonId(0)]);
    }

    #[test]
    fn distant_candidates_are_not_neighbors() {
        let mut a = Person::new(PersonId(0), 0.0, 0.0, Status::Healthy, 1.0);
        let mut b = Person::new(PersonId(1), 3.0, 0.0, Status::Healthy, 1.0);
        let candidates = vec![a.clone(), b.clone()];

        a.compute_neighbors(&candidates);
        b.compute_neighbors(&candidates);

        assert!(a.neighbors().is_empty());
        assert!(b.neighbors().is_empty());
    }

    #[test]
    fn exact_boundary_is_excluded() {
        // (1, 0) sits exactly on the x_max bound of a radius-1 box at the
        // origin; strict inequality keeps it out.
        let mut a = Person::new(PersonId(0), 0.0, 0.0, Status::Healthy, 1.0);
        let b = Person::new(PersonId(1), 1.0, 0.0, Status::Healthy, 1.0);
        let candidates = vec![a.clone(), b];

        a.compute_neighbors(&candidates);
        assert!(a.neighbors().is_empty());
    }

    #[test]
    fn never_its_own_neighbor() {
        let mut person = Person::new(PersonId(7), 0.0, 0.0, Status::Healthy, 5.0);
        let candidates = vec![person.clone()];
        person.compute_neighbors(&candidates);
        assert!(person.neighbors().is_empty());
    }

    #[test]
    fn repeat_scans_replace_instead_of_accumulating() {
        let mut a = Person::new(PersonId(0), 0.0, 0.0, Status::Healthy, 1.0);
        let b = Person::new(PersonId(1), 0.5, 0.0, Status::Healthy, 1.0);
        let candidates = vec![a.clone(), b];

        a.compute_neighbors(&candidates);
        a.compute_neighbors(&candidates);
        assert_eq!(a.neighbors(), &[PersonId(1)]);
    }

    #[test]
    fn area_contains_is_strict() {
        let area = NeighborhoodArea::new(0.0, 0.0, 1.0);
        assert!(area.contains(0.5, 0.0));
        assert!(area.contains(-0.999, 0.999));
        assert!(!area.contains(1.0, 0.0));
        assert!(!area.contains(0.0, -1.0));
        assert!(!area.contains(3.0, 0.0));
    }

    #[test]
    fn display_omits_neighborhood_area() {
        let person = sick_person();
        let value: serde_json::Value = serde_json::from_str(&person.to_string()).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.contains_key("id"));
        assert!(object.contains_key("status"));
        assert!(object.contains_key("consecutive_sick_days"));
        assert!(object.contains_key("neighbors"));
        assert!(!object.contains_key("neighborhood_area"));
        assert_eq!(object["status"], serde_json::json!("Sick"));
    }
}
