use crate::model::{Employee, Schedule};

/// Place `employee` sur le créneau (day, shift) et met à jour ses compteurs.
pub(super) fn place(
    schedule: &mut Schedule,
    employee: &mut Employee,
    day: usize,
    shift: usize,
) -> bool {
    let Some(slot) = schedule.slot_mut(day, shift) else {
        return false;
    };
    slot.staff.push(employee.name.clone());
    let shift_name = slot.shift.clone();
    let day_name = schedule.days[day].day.clone();
    employee.record_assignment(&day_name, &shift_name);
    tracing::debug!(employee = %employee.name, day = %day_name, shift = %shift_name, "assigned");
    true
}

pub(super) fn staff_count(schedule: &Schedule, day: usize, shift: usize) -> usize {
    schedule.slot(day, shift).map_or(0, |s| s.staff.len())
}

/// Disponible = sous le plafond hebdo et pas encore affecté ce jour-là.
pub(super) fn is_available(employee: &Employee, day: &str, max_days: u32) -> bool {
    employee.days_worked() < max_days && employee.is_free_on(day)
}
