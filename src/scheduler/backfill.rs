use super::{util, AssignOptions, Scheduler, StaffingGap};
use rand::seq::SliceRandom;
use rand::Rng;

/// Passe 2 : complète chaque shift jusqu'à `min_staff` par tirage uniforme
/// parmi les employés encore disponibles ce jour-là.
pub(super) fn backfill<R: Rng + ?Sized>(
    scheduler: &mut Scheduler,
    opts: AssignOptions,
    rng: &mut R,
) -> Vec<StaffingGap> {
    let (calendar, employees) = scheduler.roster.parts_mut();
    let schedule = &mut scheduler.schedule;
    let mut gaps = Vec::new();

    for (day_index, day) in calendar.days().iter().enumerate() {
        for (shift_index, shift) in calendar.shifts().iter().enumerate() {
            while util::staff_count(schedule, day_index, shift_index) < opts.min_staff {
                let candidates: Vec<usize> = employees
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| util::is_available(e, day, opts.max_days_per_week))
                    .map(|(idx, _)| idx)
                    .collect();

                let Some(&picked) = candidates.choose(rng) else {
                    break;
                };
                if !util::place(schedule, &mut employees[picked], day_index, shift_index) {
                    break;
                }
            }

            let assigned = util::staff_count(schedule, day_index, shift_index);
            let understaffed = assigned < opts.min_staff;
            if let Some(slot) = schedule.slot_mut(day_index, shift_index) {
                slot.understaffed = understaffed;
            }
            if understaffed {
                tracing::warn!(day = %day, shift = %shift, assigned, required = opts.min_staff, "shift understaffed");
                gaps.push(StaffingGap {
                    day: day.clone(),
                    shift: shift.clone(),
                    assigned,
                    required: opts.min_staff,
                });
            }
        }
    }

    gaps
}
