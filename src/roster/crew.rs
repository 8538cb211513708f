use rand::seq::SliceRandom;
use rand::Rng;

use crate::records::{Attendant, AttendantRole, Pilot, Seniority};

/// Most regular attendants assigned to one flight
pub const MAX_REGULAR_ATTENDANTS: usize = 4;

/// Pick the first senior and the first junior pilot.
///
/// Both or neither: a flight never gets a lone pilot.
pub fn select_pilots(eligible: Vec<Pilot>) -> Vec<Pilot> {
    let mut senior = None;
    let mut junior = None;

    for pilot in eligible {
        match pilot.seniority {
            Seniority::Senior if senior.is_none() => senior = Some(pilot),
            Seniority::Junior if junior.is_none() => junior = Some(pilot),
            _ => {}
        }
    }

    match (senior, junior) {
        (Some(senior), Some(junior)) => vec![senior, junior],
        _ => Vec::new(),
    }
}

/// Cabin crew chosen for a flight, plus what the chef brings to the menu
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CabinSelection {
    /// Chief first, then regulars, then the chef
    pub crew: Vec<Attendant>,
    pub menu: Vec<String>,
}

/// Pick one chief, up to four regulars and one chef.
///
/// Roles are filled independently. When a chef is picked, one of their
/// recipes is drawn at random for the menu.
pub fn select_cabin_crew<R: Rng + ?Sized>(eligible: Vec<Attendant>, rng: &mut R) -> CabinSelection {
    let mut chief = None;
    let mut regulars = Vec::new();
    let mut chef = None;

    for attendant in eligible {
        match attendant.role {
            AttendantRole::Chief if chief.is_none() => chief = Some(attendant),
            AttendantRole::Regular if regulars.len() < MAX_REGULAR_ATTENDANTS => regulars.push(attendant),
            AttendantRole::Chef if chef.is_none() => chef = Some(attendant),
            _ => {}
        }
    }

    let menu = chef
        .as_ref()
        .and_then(|c| c.recipes.choose(rng))
        .map(|recipe| vec![recipe.dish_name.clone()])
        .unwrap_or_default();

    let mut crew = Vec::with_capacity(regulars.len() + 2);
    crew.extend(chief);
    crew.extend(regulars);
    crew.extend(chef);

    CabinSelection { crew, menu }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::eligibility::tests::{attendant, pilot};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const B737: &str = "Boeing 737";

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn names(crew: &[Attendant]) -> Vec<&str> {
        crew.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn test_senior_and_junior_selected() {
        let pilots = vec![
            pilot("trainee", Seniority::Trainee, B737, 3000.0),
            pilot("junior-1", Seniority::Junior, B737, 2000.0),
            pilot("senior-1", Seniority::Senior, B737, 3000.0),
            pilot("senior-2", Seniority::Senior, B737, 3000.0),
            pilot("junior-2", Seniority::Junior, B737, 2000.0),
        ];

        let selected = select_pilots(pilots);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].name, "senior-1");
        assert_eq!(selected[1].name, "junior-1");
    }

    #[test]
    fn test_no_pilots_without_a_pair() {
        let seniors_only = vec![
            pilot("senior-1", Seniority::Senior, B737, 3000.0),
            pilot("senior-2", Seniority::Senior, B737, 3000.0),
        ];
        assert!(select_pilots(seniors_only).is_empty());

        let junior_and_trainee = vec![
            pilot("junior", Seniority::Junior, B737, 3000.0),
            pilot("trainee", Seniority::Trainee, B737, 3000.0),
        ];
        assert!(select_pilots(junior_and_trainee).is_empty());

        assert!(select_pilots(Vec::new()).is_empty());
    }

    #[test]
    fn test_full_cabin_crew() {
        let crew = vec![
            attendant("r1", AttendantRole::Regular, &[B737], &[]),
            attendant("chef", AttendantRole::Chef, &[B737], &["Risotto", "Baklava", "Pide"]),
            attendant("r2", AttendantRole::Regular, &[B737], &[]),
            attendant("chief", AttendantRole::Chief, &[B737], &[]),
            attendant("r3", AttendantRole::Regular, &[B737], &[]),
            attendant("r4", AttendantRole::Regular, &[B737], &[]),
            attendant("r5", AttendantRole::Regular, &[B737], &[]),
            attendant("chief-2", AttendantRole::Chief, &[B737], &[]),
        ];

        let selection = select_cabin_crew(crew, &mut rng());
        assert_eq!(names(&selection.crew), vec!["chief", "r1", "r2", "r3", "r4", "chef"]);
        assert_eq!(selection.menu.len(), 1);
        assert!(["Risotto", "Baklava", "Pide"].contains(&selection.menu[0].as_str()));
    }

    #[test]
    fn test_roles_fill_independently() {
        let crew = vec![
            attendant("r1", AttendantRole::Regular, &[B737], &[]),
            attendant("chef", AttendantRole::Chef, &[B737], &["Soup"]),
        ];

        let selection = select_cabin_crew(crew, &mut rng());
        assert_eq!(names(&selection.crew), vec!["r1", "chef"]);
        assert_eq!(selection.menu, vec!["Soup"]);
    }

    #[test]
    fn test_chef_without_recipes_leaves_menu_empty() {
        let crew = vec![attendant("chef", AttendantRole::Chef, &[B737], &[])];

        let selection = select_cabin_crew(crew, &mut rng());
        assert_eq!(names(&selection.crew), vec!["chef"]);
        assert!(selection.menu.is_empty());
    }

    #[test]
    fn test_same_seed_same_dish() {
        let crew = || {
            vec![attendant(
                "chef",
                AttendantRole::Chef,
                &[B737],
                &["Risotto", "Baklava", "Pide", "Manti"],
            )]
        };

        let first = select_cabin_crew(crew(), &mut rng());
        let second = select_cabin_crew(crew(), &mut rng());
        assert_eq!(first.menu, second.menu);
    }
}
