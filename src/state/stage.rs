use super::registry::PrizeRegistry;
use crate::error::{DrawError, DrawResult, GuardViolation};
use crate::types::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Four-stage draw workflow over a [`PrizeRegistry`].
///
/// Generic over the random source so draws can be seeded.
#[derive(Debug)]
pub struct StageController<R = StdRng> {
    stage: Stage,
    registry: PrizeRegistry,
    number_of_people: u32,
    in_progress: bool,
    rng: R,
}

impl StageController<StdRng> {
    /// Controller seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible controller for tests and rehearsals
    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> StageController<R> {
    pub fn new(rng: R) -> Self {
        Self {
            stage: Stage::PrizeInput,
            registry: PrizeRegistry::new(),
            number_of_people: 0,
            in_progress: false,
            rng,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn registry(&self) -> &PrizeRegistry {
        &self.registry
    }

    pub fn number_of_people(&self) -> u32 {
        self.number_of_people
    }

    /// True once prizes are entered; UIs warn before navigating away
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    fn require_stage(&self, expected: Stage) -> Result<(), GuardViolation> {
        if self.stage != expected {
            return Err(GuardViolation::WrongStage {
                expected,
                actual: self.stage,
            });
        }
        Ok(())
    }

    /// Check whether the next forward transition would pass its guard.
    ///
    /// Does not mutate anything. Entering `PeopleInput` needs input rather
    /// than state, and `Announce` has nothing after it, so both report ready.
    pub fn check_advance(&self) -> Result<(), GuardViolation> {
        match self.stage.next() {
            Some(Stage::SelectNumber) => self.selection_guard(),
            Some(Stage::Announce) => self.announcement_guard(),
            Some(Stage::PrizeInput | Stage::PeopleInput) | None => Ok(()),
        }
    }

    fn selection_guard(&self) -> Result<(), GuardViolation> {
        let active = self.registry.active_count();
        if self.number_of_people == 0 {
            return Err(GuardViolation::NoPeople);
        }
        if active == 0 {
            return Err(GuardViolation::NoActivePrizes);
        }
        if (self.number_of_people as usize) < active {
            return Err(GuardViolation::TooFewPeople {
                people: self.number_of_people,
                active,
            });
        }
        Ok(())
    }

    fn announcement_guard(&self) -> Result<(), GuardViolation> {
        if !self.registry.all_selected() {
            return Err(GuardViolation::NotAllSelected {
                remaining: self.registry.remaining_to_select(),
            });
        }
        Ok(())
    }

    // ---- transitions ----

    /// PrizeInput -> PeopleInput: build the registry from the entered names
    pub fn submit_prizes<I, S>(&mut self, names: I) -> DrawResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.require_stage(Stage::PrizeInput)?;
        let registry = PrizeRegistry::from_names(names)?;

        tracing::info!("{} prizes entered", registry.total_count());
        self.registry = registry;
        self.in_progress = true;
        self.stage = Stage::PeopleInput;
        Ok(())
    }

    /// PeopleInput -> SelectNumber: assign redemption numbers exactly once
    pub fn start_selection(&mut self) -> DrawResult<()> {
        self.require_stage(Stage::PeopleInput)?;
        self.selection_guard()?;

        self.registry
            .assign_numbers(self.number_of_people, &mut self.rng)?;
        self.stage = Stage::SelectNumber;
        tracing::info!(
            "Assigned {} redemption numbers for {} people",
            self.registry.active_count(),
            self.number_of_people
        );
        Ok(())
    }

    /// SelectNumber -> Announce: every active number must be claimed
    pub fn start_announcement(&mut self) -> DrawResult<()> {
        self.require_stage(Stage::SelectNumber)?;
        self.announcement_guard()?;

        self.stage = Stage::Announce;
        tracing::info!("Announcement started");
        Ok(())
    }

    /// Discard everything and return to PrizeInput.
    ///
    /// Callers are expected to confirm with the operator first.
    pub fn reset(&mut self) {
        tracing::info!("Resetting draw (was {:?})", self.stage);
        self.registry = PrizeRegistry::new();
        self.number_of_people = 0;
        self.in_progress = false;
        self.stage = Stage::PrizeInput;
    }

    // ---- PeopleInput operations ----

    pub fn set_number_of_people(&mut self, count: i64) -> DrawResult<()> {
        self.require_stage(Stage::PeopleInput)?;
        if count < 0 {
            return Err(DrawError::Validation(format!(
                "Number of people cannot be negative ({})",
                count
            )));
        }
        self.number_of_people = u32::try_from(count).map_err(|_| {
            DrawError::Validation(format!("Number of people is too large ({})", count))
        })?;
        Ok(())
    }

    pub fn toggle_exclusion(&mut self, id: &str) -> DrawResult<bool> {
        self.require_stage(Stage::PeopleInput)?;
        self.registry.toggle_exclusion(id)
    }

    pub fn reorder(&mut self, id: &str, new_position: usize) -> DrawResult<()> {
        self.require_stage(Stage::PeopleInput)?;
        self.registry.reorder(id, new_position)
    }

    // ---- SelectNumber operations ----

    pub fn select(&mut self, number: PrizeNumber) -> DrawResult<bool> {
        self.require_stage(Stage::SelectNumber)?;
        self.registry.select(number)
    }

    pub fn deselect(&mut self, number: PrizeNumber) -> DrawResult<bool> {
        self.require_stage(Stage::SelectNumber)?;
        self.registry.deselect(number)
    }

    pub fn update_memo(&mut self, number: PrizeNumber, memo: String) -> DrawResult<()> {
        self.require_stage(Stage::SelectNumber)?;
        self.registry.update_memo(number, memo)
    }

    // ---- Announce operations ----

    pub fn announce(&mut self, id: &str) -> DrawResult<bool> {
        self.require_stage(Stage::Announce)?;
        self.registry.announce(id)
    }

    pub fn unannounce(&mut self, id: &str) -> DrawResult<bool> {
        self.require_stage(Stage::Announce)?;
        self.registry.unannounce(id)
    }
}
