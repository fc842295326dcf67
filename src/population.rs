/*!

`Population` owns the full set of `Person`s and the injected random source.
Generation draws positions from a zero-mean normal distribution, seeds the
configured number of infections, and marks the remainder immune with the
configured probability. Neighbor assignment is a full O(n²) scan, acceptable
at the scales this model targets.

*/

use crate::error::EpiError;
use crate::people::{Person, Status};
use crate::random::SimRng;
use crate::PersonId;
use log::trace;
use rand_distr::Normal;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable configuration of a population. Validated once at
/// `Population::new`; invalid values never reach generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PopulationParameters {
    /// Number of people in the population.
    pub size: usize,
    /// Variance of the normal distribution positions are drawn from. The
    /// standard deviation is its square root; zero puts everyone at the
    /// origin.
    pub positional_variance: f64,
    /// Half-width of each person's neighborhood box.
    pub neighbor_radius: f64,
    /// Number of infection draws at generation time. Draws are with
    /// replacement, so the number of distinct sick people can be lower.
    pub nb_infected: usize,
    /// Probability that a non-infected person starts out immune.
    pub immunity_prob: f64,
}

impl PopulationParameters {
    fn validate(&self) -> Result<(), EpiError> {
        if self.size == 0 {
            return Err(EpiError::InvalidConfig(
                "size must be at least 1".to_string(),
            ));
        }
        if !self.positional_variance.is_finite() || self.positional_variance < 0.0 {
            return Err(EpiError::InvalidConfig(format!(
                "positional_variance must be finite and non-negative, got {}",
                self.positional_variance
            )));
        }
        if !self.neighbor_radius.is_finite() || self.neighbor_radius <= 0.0 {
            return Err(EpiError::InvalidConfig(format!(
                "neighbor_radius must be finite and positive, got {}",
                self.neighbor_radius
            )));
        }
        if !(0.0..=1.0).contains(&self.immunity_prob) {
            return Err(EpiError::InvalidConfig(format!(
                "immunity_prob must lie in [0, 1], got {}",
                self.immunity_prob
            )));
        }
        if self.nb_infected > self.size {
            return Err(EpiError::InvalidConfig(format!(
                "nb_infected ({}) cannot exceed size ({})",
                self.nb_infected, self.size
            )));
        }
        Ok(())
    }
}

/// The owned collection of all people plus generation parameters and the
/// random source that feeds generation.
pub struct Population {
    parameters: PopulationParameters,
    rng: SimRng,
    people: Vec<Person>,
}

impl Population {
    /// Validates `parameters` and stores them with the injected random
    /// source. No people are created yet; call `generate_population`.
    pub fn new(parameters: PopulationParameters, rng: SimRng) -> Result<Self, EpiError> {
        parameters.validate()?;
        Ok(Population {
            parameters,
            rng,
            people: Vec::new(),
        })
    }

    #[must_use]
    pub fn parameters(&self) -> &PopulationParameters {
        &self.parameters
    }

    /// All people, ordered by id after generation.
    #[must_use]
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Mutable access for external steppers that drive `next_epoch` and
    /// `update_status` per person.
    pub fn people_mut(&mut self) -> &mut [Person] {
        &mut self.people
    }

    /// Replaces the owned collection with `size` freshly generated people,
    /// ids `0..size`. Positions come from `Normal(0, sqrt(variance))`;
    /// `nb_infected` infection draws (with replacement, half-open index
    /// range) mark people `Sick`; everyone else is `Immune` with probability
    /// `immunity_prob`, otherwise `Healthy`.
    pub fn generate_population(&mut self) -> Result<(), EpiError> {
        trace!("generating population of {}", self.parameters.size);

        let sigma = self.parameters.positional_variance.sqrt();
        // Unreachable for validated parameters, but propagated rather than
        // unwrapped.
        let position_distr = Normal::new(0.0, sigma).map_err(|e| EpiError::from(e.to_string()))?;

        let size = self.parameters.size;
        let all_x: Vec<f64> = (0..size).map(|_| self.rng.sample_distr(position_distr)).collect();
        let all_y: Vec<f64> = (0..size).map(|_| self.rng.sample_distr(position_distr)).collect();

        let infected_ids: Vec<usize> = (0..self.parameters.nb_infected)
            .map(|_| self.rng.sample_range(0..size))
            .collect();

        let mut people = Vec::with_capacity(size);
        for i in 0..size {
            let status = if infected_ids.contains(&i) {
                Status::Sick
            } else if self.rng.sample_bool(self.parameters.immunity_prob) {
                Status::Immune
            } else {
                Status::Healthy
            };
            people.push(Person::new(
                PersonId(i),
                all_x[i],
                all_y[i],
                status,
                self.parameters.neighbor_radius,
            ));
        }

        self.people = people;
        Ok(())
    }

    /// Linear scan for the person with the given id. Explicit `None` on
    /// miss; ids handed out by generation always hit.
    #[must_use]
    pub fn get_by_id(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|person| person.id() == id)
    }

    pub fn get_by_id_mut(&mut self, id: PersonId) -> Option<&mut Person> {
        self.people.iter_mut().find(|person| person.id() == id)
    }

    /// Assigns every person its neighbor list by scanning the entire
    /// collection, self included (per-person self-exclusion handles that).
    /// Each person scans a pre-scan snapshot so people can be updated in
    /// place; idempotent because per-person scans clear before repopulating.
    pub fn assign_neighbors(&mut self) {
        trace!("assigning neighbors for {} people", self.people.len());

        let snapshot = self.people.clone();
        for person in &mut self.people {
            person.compute_neighbors(&snapshot);
        }
    }

    /// Fresh diagnostic snapshot of how many people hold each status, plus
    /// the configured size and initial infection draws. Recomputed by a full
    /// scan on every call; not a live view.
    #[must_use]
    pub fn status_summary(&self) -> StatusSummary {
        let mut counts: FxHashMap<Status, usize> =
            Status::ALL.iter().map(|&status| (status, 0)).collect();
        for person in &self.people {
            // Will never panic as every variant was inserted above.
            *counts.get_mut(&person.status()).unwrap() += 1;
        }

        StatusSummary {
            size: self.parameters.size,
            nb_infected_start: self.parameters.nb_infected,
            counts,
        }
    }
}

/// Diagnostic snapshot produced by `Population::status_summary`. Every
/// `Status` variant is present in `counts`, dormant ones at zero.
#[derive(Clone, Debug, Serialize)]
pub struct StatusSummary {
    pub size: usize,
    pub nb_infected_start: usize,
    pub counts: FxHashMap<Status, usize>,
}

impl fmt::Display for StatusSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rendered = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
