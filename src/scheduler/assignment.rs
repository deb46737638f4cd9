use super::{util, AssignOptions, Scheduler, UnmetPreference, UnmetReason};

/// Passe 1 : chaque employé prend le premier shift préféré encore sous le soft cap.
pub(super) fn assign_preferences(
    scheduler: &mut Scheduler,
    opts: AssignOptions,
) -> Vec<UnmetPreference> {
    let (calendar, employees) = scheduler.roster.parts_mut();
    let schedule = &mut scheduler.schedule;
    let mut unmet = Vec::new();

    for (day_index, day) in calendar.days().iter().enumerate() {
        for employee in employees.iter_mut() {
            if employee.days_worked() >= opts.max_days_per_week {
                unmet.push(UnmetPreference {
                    employee: employee.name.clone(),
                    day: day.clone(),
                    reason: UnmetReason::WeeklyCap,
                });
                continue;
            }
            if !employee.is_free_on(day) {
                continue;
            }

            let prefs = employee.preferences_for(day);
            if prefs.is_empty() {
                unmet.push(UnmetPreference {
                    employee: employee.name.clone(),
                    day: day.clone(),
                    reason: UnmetReason::NoPreference,
                });
                continue;
            }

            let chosen = prefs.iter().find_map(|shift| {
                let shift_index = calendar.shift_index(shift)?;
                (util::staff_count(schedule, day_index, shift_index) < opts.soft_cap)
                    .then_some(shift_index)
            });

            match chosen {
                Some(shift_index) => {
                    util::place(schedule, employee, day_index, shift_index);
                }
                None => unmet.push(UnmetPreference {
                    employee: employee.name.clone(),
                    day: day.clone(),
                    reason: UnmetReason::ShiftsFull,
                }),
            }
        }
    }

    for miss in &unmet {
        tracing::debug!(employee = %miss.employee, day = %miss.day, reason = ?miss.reason, "preference not met");
    }
    unmet
}
