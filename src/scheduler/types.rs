use thiserror::Error;

/// Plafond de jours travaillés sur la période.
pub const MAX_DAYS_PER_WEEK: u32 = 5;
/// Effectif minimal par shift visé par le backfill.
pub const MIN_STAFF_PER_SHIFT: usize = 2;
/// Remplissage maximal d'un shift pendant la passe de préférences.
pub const DEFAULT_SOFT_CAP: usize = 5;

/// Options d'assignation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignOptions {
    pub soft_cap: usize,
    pub min_staff: usize,
    pub max_days_per_week: u32,
}

impl Default for AssignOptions {
    fn default() -> Self {
        Self {
            soft_cap: DEFAULT_SOFT_CAP,
            min_staff: MIN_STAFF_PER_SHIFT,
            max_days_per_week: MAX_DAYS_PER_WEEK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmetReason {
    WeeklyCap,
    NoPreference,
    ShiftsFull,
}

/// Employé resté sans shift après la passe de préférences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmetPreference {
    pub employee: String,
    pub day: String,
    pub reason: UnmetReason,
}

/// Shift resté sous l'effectif minimal après le backfill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffingGap {
    pub day: String,
    pub shift: String,
    pub assigned: usize,
    pub required: usize,
}

/// Résultat observable d'un run complet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignReport {
    pub unmet_preferences: Vec<UnmetPreference>,
    pub gaps: Vec<StaffingGap>,
}

impl AssignReport {
    pub fn is_fully_staffed(&self) -> bool {
        self.gaps.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictKind {
    DoubleAssignment,
    WeeklyCapExceeded,
    AssignmentMismatch,
}

#[derive(Debug, Clone)]
pub struct Conflict {
    pub employee: String,
    pub day: Option<String>,
    pub kind: ConflictKind,
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("invalid calendar: {0}")]
    InvalidCalendar(&'static str),
    #[error("employee name cannot be empty")]
    EmptyName,
    #[error("employee {0} already carries assignments")]
    AlreadyScheduled(String),
    #[error("duplicate employee name: {0}")]
    DuplicateEmployee(String),
    #[error("unknown day {day} in preferences of {employee}")]
    UnknownDay { employee: String, day: String },
    #[error("unknown shift {shift} on {day} in preferences of {employee}")]
    UnknownShift {
        employee: String,
        day: String,
        shift: String,
    },
    #[error("{employee} ranks {count} shifts on {day} (max {max})", max = crate::model::MAX_PREFERENCES)]
    TooManyPreferences {
        employee: String,
        day: String,
        count: usize,
    },
    #[error("{employee} ranks shift {shift} twice on {day}")]
    DuplicatePreference {
        employee: String,
        day: String,
        shift: String,
    },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
