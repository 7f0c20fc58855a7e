use crate::error::{DrawError, DrawResult};
use crate::shuffle::shuffle;
use crate::types::*;
use rand::Rng;

/// The authoritative list of prize records.
///
/// Records are stored in display order, so `prizes[i].display_order == i + 1`
/// holds after every operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrizeRegistry {
    prizes: Vec<Prize>,
}

impl PrizeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create one record per non-blank name, in input order
    pub fn from_names<I, S>(names: I) -> DrawResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let prizes: Vec<Prize> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .enumerate()
            .map(|(i, name)| Prize::new(name, i as u32 + 1))
            .collect();

        if prizes.is_empty() {
            return Err(DrawError::Validation(
                "Enter at least one prize name".to_string(),
            ));
        }

        Ok(Self { prizes })
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Prize> {
        self.prizes.iter().find(|p| p.id == id)
    }

    /// Find the active record holding `number`
    pub fn find_by_number(&self, number: PrizeNumber) -> Option<&Prize> {
        self.prizes
            .iter()
            .find(|p| p.is_active() && p.assigned_number == Some(number))
    }

    fn get_mut(&mut self, id: &str) -> DrawResult<&mut Prize> {
        self.prizes
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DrawError::NotFound(format!("Prize {}", id)))
    }

    fn by_number_mut(&mut self, number: PrizeNumber) -> DrawResult<&mut Prize> {
        self.prizes
            .iter_mut()
            .find(|p| p.is_active() && p.assigned_number == Some(number))
            .ok_or_else(|| DrawError::NotFound(format!("Prize number {}", number)))
    }

    /// Flip exclusion on one record, returning the new `excluded` value
    pub fn toggle_exclusion(&mut self, id: &str) -> DrawResult<bool> {
        let prize = self.get_mut(id)?;
        prize.excluded = !prize.excluded;
        Ok(prize.excluded)
    }

    /// Move a record to `new_position` (1-based) and renumber the display order
    pub fn reorder(&mut self, id: &str, new_position: usize) -> DrawResult<()> {
        let total = self.prizes.len();
        if new_position == 0 || new_position > total {
            return Err(DrawError::Validation(format!(
                "Position {} is outside 1..={}",
                new_position, total
            )));
        }

        let old_index = self
            .prizes
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| DrawError::NotFound(format!("Prize {}", id)))?;
        let new_index = new_position - 1;
        if old_index == new_index {
            return Ok(());
        }

        let prize = self.prizes.remove(old_index);
        self.prizes.insert(new_index, prize);
        for (i, p) in self.prizes.iter_mut().enumerate() {
            p.display_order = i as u32 + 1;
        }
        Ok(())
    }

    /// Bind a fresh random permutation of `1..=active_count` to the active records.
    ///
    /// Every call is a full reassignment; excluded records end up unassigned.
    pub fn assign_numbers<R: Rng + ?Sized>(
        &mut self,
        number_of_people: u32,
        rng: &mut R,
    ) -> DrawResult<()> {
        let active = self.active_count();
        if active == 0 {
            return Err(DrawError::Precondition(
                "Cannot assign numbers without active prizes".to_string(),
            ));
        }
        if number_of_people == 0 {
            return Err(DrawError::Precondition(
                "Cannot assign numbers without participants".to_string(),
            ));
        }
        if (number_of_people as usize) < active {
            return Err(DrawError::Precondition(format!(
                "{} participants cannot cover {} active prizes",
                number_of_people, active
            )));
        }

        let active_indices: Vec<usize> = self
            .prizes
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_active())
            .map(|(i, _)| i)
            .collect();
        let shuffled = shuffle(&active_indices, rng);

        for prize in self.prizes.iter_mut() {
            prize.assigned_number = None;
        }
        for (number, index) in (1..).zip(shuffled) {
            self.prizes[index].assigned_number = Some(number);
        }
        Ok(())
    }

    /// Mark the record holding `number` as claimed.
    ///
    /// Returns `false` when it was already selected.
    pub fn select(&mut self, number: PrizeNumber) -> DrawResult<bool> {
        let prize = self.by_number_mut(number)?;
        if prize.selected {
            return Ok(false);
        }
        prize.selected = true;
        Ok(true)
    }

    /// Release a claimed number; the memo goes with it
    pub fn deselect(&mut self, number: PrizeNumber) -> DrawResult<bool> {
        let prize = self.by_number_mut(number)?;
        let was_selected = prize.selected;
        prize.selected = false;
        prize.memo.clear();
        Ok(was_selected)
    }

    pub fn update_memo(&mut self, number: PrizeNumber, memo: String) -> DrawResult<()> {
        self.by_number_mut(number)?.memo = memo;
        Ok(())
    }

    pub fn announce(&mut self, id: &str) -> DrawResult<bool> {
        self.set_announced(id, true)
    }

    pub fn unannounce(&mut self, id: &str) -> DrawResult<bool> {
        self.set_announced(id, false)
    }

    /// Returns whether the flag actually changed
    fn set_announced(&mut self, id: &str, announced: bool) -> DrawResult<bool> {
        let prize = self.get_mut(id)?;
        if prize.assigned_number.is_none() {
            return Err(DrawError::Precondition(format!(
                "Prize '{}' has no redemption number",
                prize.name
            )));
        }
        let changed = prize.announced != announced;
        prize.announced = announced;
        Ok(changed)
    }

    // ---- derived queries ----

    pub fn active(&self) -> impl Iterator<Item = &Prize> {
        self.prizes.iter().filter(|p| p.is_active())
    }

    pub fn total_count(&self) -> usize {
        self.prizes.len()
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn excluded_count(&self) -> usize {
        self.total_count() - self.active_count()
    }

    pub fn selected_count(&self) -> usize {
        self.active().filter(|p| p.selected).count()
    }

    pub fn announced_count(&self) -> usize {
        self.active().filter(|p| p.announced).count()
    }

    pub fn remaining_to_select(&self) -> usize {
        self.active_count() - self.selected_count()
    }

    pub fn remaining_to_announce(&self) -> usize {
        self.active_count() - self.announced_count()
    }

    pub fn all_selected(&self) -> bool {
        self.active_count() > 0 && self.remaining_to_select() == 0
    }

    pub fn all_announced(&self) -> bool {
        self.active_count() > 0 && self.remaining_to_announce() == 0
    }

    pub fn progress(&self) -> Progress {
        Progress {
            total: self.total_count(),
            active: self.active_count(),
            excluded: self.excluded_count(),
            selected: self.selected_count(),
            announced: self.announced_count(),
            remaining_to_select: self.remaining_to_select(),
            remaining_to_announce: self.remaining_to_announce(),
        }
    }
}
