//! Read-only views over the registry for the number grid and the
//! announcement list.

use super::registry::PrizeRegistry;
use crate::types::Prize;

/// Active prizes sorted by redemption number; unnumbered records sort last
pub fn by_assigned_number(registry: &PrizeRegistry) -> Vec<&Prize> {
    let mut prizes: Vec<&Prize> = registry.active().collect();
    prizes.sort_by_key(|p| (p.assigned_number.is_none(), p.assigned_number));
    prizes
}

/// Active prizes in announcement (display) order
pub fn by_display_order(registry: &PrizeRegistry) -> Vec<&Prize> {
    let mut prizes: Vec<&Prize> = registry.active().collect();
    prizes.sort_by_key(|p| p.display_order);
    prizes
}

/// The first active prize in display order that has not been announced
pub fn next_to_announce(registry: &PrizeRegistry) -> Option<&Prize> {
    by_display_order(registry).into_iter().find(|p| !p.announced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn numbered(names: &[&str]) -> PrizeRegistry {
        let mut reg = PrizeRegistry::from_names(names.iter().copied()).unwrap();
        let mut rng = StdRng::seed_from_u64(17);
        reg.assign_numbers(names.len() as u32, &mut rng).unwrap();
        reg
    }

    #[test]
    fn test_by_assigned_number_sorted() {
        let reg = numbered(&["A", "B", "C", "D"]);
        let nums: Vec<_> = by_assigned_number(&reg)
            .iter()
            .map(|p| p.assigned_number.unwrap())
            .collect();
        assert_eq!(nums, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_by_display_order_skips_excluded() {
        let mut reg = PrizeRegistry::from_names(["A", "B", "C"]).unwrap();
        let b = reg.prizes()[1].id.clone();
        reg.toggle_exclusion(&b).unwrap();
        let c = reg.prizes()[2].id.clone();
        reg.reorder(&c, 1).unwrap();

        let names: Vec<_> = by_display_order(&reg).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A"]);
    }

    #[test]
    fn test_next_to_announce_walks_display_order() {
        let mut reg = numbered(&["A", "B", "C"]);
        assert_eq!(next_to_announce(&reg).unwrap().name, "A");

        let a = reg.prizes()[0].id.clone();
        reg.announce(&a).unwrap();
        assert_eq!(next_to_announce(&reg).unwrap().name, "B");

        let ids: Vec<_> = reg.prizes().iter().map(|p| p.id.clone()).collect();
        for id in &ids {
            reg.announce(id).unwrap();
        }
        assert!(next_to_announce(&reg).is_none());
    }
}
