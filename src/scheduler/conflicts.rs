use super::{Conflict, ConflictKind, Scheduler};
use std::collections::HashMap;

/// Audite le planning courant contre les compteurs des employés.
pub(super) fn detect_conflicts(scheduler: &Scheduler) -> Vec<Conflict> {
    let mut out = Vec::new();
    let max_days = scheduler.opts.max_days_per_week;

    for day in scheduler.schedule.days.iter() {
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for slot in day.shifts.iter() {
            for name in slot.staff.iter() {
                if seen.insert(name.as_str(), slot.shift.as_str()).is_some() {
                    out.push(Conflict {
                        employee: name.clone(),
                        day: Some(day.day.clone()),
                        kind: ConflictKind::DoubleAssignment,
                    });
                }
            }
        }

        for employee in scheduler.roster.employees() {
            let listed = seen.get(employee.name.as_str()).copied();
            if listed != employee.assigned_shift(&day.day) {
                out.push(Conflict {
                    employee: employee.name.clone(),
                    day: Some(day.day.clone()),
                    kind: ConflictKind::AssignmentMismatch,
                });
            }
        }
    }

    for employee in scheduler.roster.employees() {
        if employee.days_worked() > max_days {
            out.push(Conflict {
                employee: employee.name.clone(),
                day: None,
                kind: ConflictKind::WeeklyCapExceeded,
            });
        }
        if employee.days_worked() as usize != employee.assignment().len() {
            out.push(Conflict {
                employee: employee.name.clone(),
                day: None,
                kind: ConflictKind::AssignmentMismatch,
            });
        }
    }

    out
}
