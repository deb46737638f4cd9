#![forbid(unsafe_code)]
//! Shiftplan — planning hebdomadaire d'équipes à partir des préférences.
//!
//! - Passe 1 : préférences dans l'ordre de priorité, sous un soft cap par shift.
//! - Passe 2 : backfill aléatoire (seed fourni) jusqu'à l'effectif minimal.
//! - Plafond de jours travaillés par employé sur la période.

pub mod demo;
pub mod io;
pub mod model;
pub mod report;
pub mod scheduler;

pub use demo::{generate_demo_roster, DEMO_NAMES};
pub use model::{Calendar, DaySchedule, Employee, EmployeeId, Roster, Schedule, ShiftStaffing};
pub use report::{ScheduleRenderer, TextReport};
pub use scheduler::{
    AssignOptions, AssignReport, Conflict, ConflictKind, SchedError, Scheduler, StaffingGap,
    UnmetPreference, UnmetReason,
};
