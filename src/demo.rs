//! Roster de démonstration : préférences tirées au hasard.

use crate::model::{Calendar, Employee, Roster, MAX_PREFERENCES};
use crate::scheduler::SchedError;
use rand::seq::SliceRandom;
use rand::Rng;

pub const DEMO_NAMES: [&str; 8] = [
    "Alice", "Bob", "Charlie", "David", "Eve", "Frank", "Grace", "Heidi",
];

/// Pour chaque nom et chaque jour, une permutation aléatoire des shifts
/// (tronquée à `MAX_PREFERENCES`).
pub fn generate_demo_roster<R, S>(
    calendar: &Calendar,
    names: &[S],
    rng: &mut R,
) -> Result<Roster, SchedError>
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    let mut roster = Roster::new(calendar.clone());
    for name in names {
        let mut employee = Employee::new(name.as_ref());
        for day in calendar.days() {
            let mut shifts: Vec<&String> = calendar.shifts().iter().collect();
            shifts.shuffle(rng);
            shifts.truncate(MAX_PREFERENCES);
            employee.add_preference(day.as_str(), shifts.into_iter().cloned());
        }
        roster.add_employee(employee)?;
    }
    Ok(roster)
}
