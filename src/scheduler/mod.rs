mod assignment;
mod backfill;
mod conflicts;
mod types;
mod util;

pub use types::{
    AssignOptions, AssignReport, Conflict, ConflictKind, SchedError, StaffingGap,
    UnmetPreference, UnmetReason, DEFAULT_SOFT_CAP, MAX_DAYS_PER_WEEK, MIN_STAFF_PER_SHIFT,
};

use crate::model::{Roster, Schedule};
use rand::Rng;

/// Avancement du run : la passe 1 couvre toute la période avant le backfill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pending,
    Preferences,
    Backfilled,
}

/// Scheduler : possède le roster et construit le planning final
#[derive(Debug)]
pub struct Scheduler {
    roster: Roster,
    schedule: Schedule,
    opts: AssignOptions,
    phase: Phase,
    unmet: Vec<UnmetPreference>,
}

impl Scheduler {
    pub fn new(roster: Roster, opts: AssignOptions) -> Self {
        let schedule = Schedule::empty(roster.calendar());
        Self {
            roster,
            schedule,
            opts,
            phase: Phase::Pending,
            unmet: Vec::new(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
    pub fn options(&self) -> AssignOptions {
        self.opts
    }

    pub fn into_parts(self) -> (Roster, Schedule) {
        (self.roster, self.schedule)
    }

    /// Passe 1, déterministe. Ne s'exécute qu'une fois ; les appels suivants
    /// renvoient les préférences non satisfaites déjà relevées.
    pub fn assign_preferences(&mut self) -> Vec<UnmetPreference> {
        if self.phase == Phase::Pending {
            let opts = self.opts;
            self.unmet = assignment::assign_preferences(self, opts);
            self.phase = Phase::Preferences;
        }
        self.unmet.clone()
    }

    /// Passe 2 ; le générateur est fourni par l'appelant (seed reproductible).
    /// Déclenche d'abord la passe 1 si elle n'a pas encore tourné.
    pub fn backfill<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<StaffingGap> {
        self.assign_preferences();
        let opts = self.opts;
        let gaps = backfill::backfill(self, opts, rng);
        self.phase = Phase::Backfilled;
        gaps
    }

    pub fn is_backfilled(&self) -> bool {
        self.phase == Phase::Backfilled
    }

    /// Passe 1 sur toute la période, puis passe 2.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> AssignReport {
        let unmet_preferences = self.assign_preferences();
        let gaps = self.backfill(rng);
        tracing::info!(
            employees = self.roster.len(),
            unmet = unmet_preferences.len(),
            gaps = gaps.len(),
            "schedule built"
        );
        AssignReport {
            unmet_preferences,
            gaps,
        }
    }

    pub fn detect_conflicts(&self) -> Vec<Conflict> {
        conflicts::detect_conflicts(self)
    }
}
