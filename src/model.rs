use crate::scheduler::SchedError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Nombre maximal de shifts classés par jour et par employé.
pub const MAX_PREFERENCES: usize = 3;

pub const WEEK_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const DAY_SHIFTS: [&str; 3] = ["Morning", "Afternoon", "Evening"];

/// Identifiant fort pour Employee : index stable dans le roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeId(usize);

/// Calendrier figé pour la durée d'un run : jours ordonnés × shifts ordonnés.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCalendar")]
pub struct Calendar {
    days: Vec<String>,
    shifts: Vec<String>,
}

impl Calendar {
    /// Crée un calendrier en validant noms non vides et uniques.
    pub fn new<D, S>(days: D, shifts: S) -> Result<Self, SchedError>
    where
        D: IntoIterator,
        D::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let days: Vec<String> = days.into_iter().map(Into::into).collect();
        let shifts: Vec<String> = shifts.into_iter().map(Into::into).collect();
        if days.is_empty() {
            return Err(SchedError::InvalidCalendar("at least one day is required"));
        }
        if shifts.is_empty() {
            return Err(SchedError::InvalidCalendar("at least one shift is required"));
        }
        if !all_unique_non_empty(&days) {
            return Err(SchedError::InvalidCalendar("day names must be unique and non-empty"));
        }
        if !all_unique_non_empty(&shifts) {
            return Err(SchedError::InvalidCalendar("shift names must be unique and non-empty"));
        }
        Ok(Self { days, shifts })
    }

    /// Semaine standard : lundi..dimanche × matin/après-midi/soir.
    pub fn weekly() -> Self {
        Self {
            days: WEEK_DAYS.iter().map(|d| d.to_string()).collect(),
            shifts: DAY_SHIFTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn days(&self) -> &[String] {
        &self.days
    }
    pub fn shifts(&self) -> &[String] {
        &self.shifts
    }
    pub fn day_index(&self, day: &str) -> Option<usize> {
        self.days.iter().position(|d| d == day)
    }
    pub fn shift_index(&self, shift: &str) -> Option<usize> {
        self.shifts.iter().position(|s| s == shift)
    }
}

/// Forme brute désérialisée, validée par `Calendar::new`.
#[derive(Deserialize)]
struct RawCalendar {
    days: Vec<String>,
    shifts: Vec<String>,
}

impl TryFrom<RawCalendar> for Calendar {
    type Error = SchedError;

    fn try_from(raw: RawCalendar) -> Result<Self, Self::Error> {
        Calendar::new(raw.days, raw.shifts)
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::weekly()
    }
}

fn all_unique_non_empty(names: &[String]) -> bool {
    let mut seen = HashSet::new();
    names
        .iter()
        .all(|n| !n.trim().is_empty() && seen.insert(n.as_str()))
}

/// Employé : préférences par jour, compteur de jours et affectation courante.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    preferences: BTreeMap<String, Vec<String>>,
    #[serde(default, skip_deserializing)]
    days_worked: u32,
    #[serde(default, skip_deserializing, skip_serializing_if = "BTreeMap::is_empty")]
    assignment: BTreeMap<String, String>,
}

impl Employee {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            preferences: BTreeMap::new(),
            days_worked: 0,
            assignment: BTreeMap::new(),
        }
    }

    /// Remplace la liste de préférences d'un jour (ordre = priorité).
    pub fn add_preference<D, I>(&mut self, day: D, shifts: I)
    where
        D: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.preferences
            .insert(day.into(), shifts.into_iter().map(Into::into).collect());
    }

    pub fn with_preference<D, I>(mut self, day: D, shifts: I) -> Self
    where
        D: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.add_preference(day, shifts);
        self
    }

    /// Préférences du jour, vide si aucune n'a été déclarée.
    pub fn preferences_for(&self, day: &str) -> &[String] {
        self.preferences.get(day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn preferences(&self) -> &BTreeMap<String, Vec<String>> {
        &self.preferences
    }

    pub fn days_worked(&self) -> u32 {
        self.days_worked
    }

    pub fn assigned_shift(&self, day: &str) -> Option<&str> {
        self.assignment.get(day).map(String::as_str)
    }

    pub fn is_free_on(&self, day: &str) -> bool {
        !self.assignment.contains_key(day)
    }

    pub fn assignment(&self) -> &BTreeMap<String, String> {
        &self.assignment
    }

    pub(crate) fn record_assignment(&mut self, day: &str, shift: &str) {
        self.assignment.insert(day.to_owned(), shift.to_owned());
        self.days_worked += 1;
    }

    fn validate(&self, calendar: &Calendar) -> Result<(), SchedError> {
        if self.name.trim().is_empty() {
            return Err(SchedError::EmptyName);
        }
        // Le planning démarre vide : aucun compteur hérité d'un run précédent.
        if self.days_worked != 0 || !self.assignment.is_empty() {
            return Err(SchedError::AlreadyScheduled(self.name.clone()));
        }
        for (day, shifts) in &self.preferences {
            if calendar.day_index(day).is_none() {
                return Err(SchedError::UnknownDay {
                    employee: self.name.clone(),
                    day: day.clone(),
                });
            }
            if shifts.len() > MAX_PREFERENCES {
                return Err(SchedError::TooManyPreferences {
                    employee: self.name.clone(),
                    day: day.clone(),
                    count: shifts.len(),
                });
            }
            let mut seen = HashSet::new();
            for shift in shifts {
                if calendar.shift_index(shift).is_none() {
                    return Err(SchedError::UnknownShift {
                        employee: self.name.clone(),
                        day: day.clone(),
                        shift: shift.clone(),
                    });
                }
                if !seen.insert(shift.as_str()) {
                    return Err(SchedError::DuplicatePreference {
                        employee: self.name.clone(),
                        day: day.clone(),
                        shift: shift.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Roster complet : arène d'employés (ordre d'insertion) + calendrier.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    calendar: Calendar,
    employees: Vec<Employee>,
}

impl Roster {
    pub fn new(calendar: Calendar) -> Self {
        Self {
            calendar,
            employees: Vec::new(),
        }
    }

    /// Ajoute un employé validé ; les noms en double sont refusés.
    pub fn add_employee(&mut self, employee: Employee) -> Result<EmployeeId, SchedError> {
        employee.validate(&self.calendar)?;
        if self.find_by_name(&employee.name).is_some() {
            return Err(SchedError::DuplicateEmployee(employee.name));
        }
        let id = EmployeeId(self.employees.len());
        self.employees.push(employee);
        Ok(id)
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
    pub fn len(&self) -> usize {
        self.employees.len()
    }
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(id.0)
    }
    pub fn find_by_name(&self, name: &str) -> Option<EmployeeId> {
        self.employees
            .iter()
            .position(|e| e.name == name)
            .map(EmployeeId)
    }

    /// Emprunt séparé : calendrier en lecture, employés en écriture.
    pub(crate) fn parts_mut(&mut self) -> (&Calendar, &mut [Employee]) {
        (&self.calendar, &mut self.employees)
    }
}

/// Effectif d'un shift pour un jour donné.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftStaffing {
    pub shift: String,
    pub staff: Vec<String>,
    #[serde(default)]
    pub understaffed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: String,
    pub shifts: Vec<ShiftStaffing>,
}

/// Planning final : jour → shift → noms (ordre d'affectation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub days: Vec<DaySchedule>,
}

impl Schedule {
    pub fn empty(calendar: &Calendar) -> Self {
        let days = calendar
            .days()
            .iter()
            .map(|day| DaySchedule {
                day: day.clone(),
                shifts: calendar
                    .shifts()
                    .iter()
                    .map(|shift| ShiftStaffing {
                        shift: shift.clone(),
                        staff: Vec::new(),
                        understaffed: false,
                    })
                    .collect(),
            })
            .collect();
        Self { days }
    }

    /// Noms affectés à `shift` le jour `day`, `None` si hors calendrier.
    pub fn staff(&self, day: &str, shift: &str) -> Option<&[String]> {
        self.days
            .iter()
            .find(|d| d.day == day)?
            .shifts
            .iter()
            .find(|s| s.shift == shift)
            .map(|s| s.staff.as_slice())
    }

    pub fn is_understaffed(&self, day: &str, shift: &str) -> bool {
        self.days
            .iter()
            .filter(|d| d.day == day)
            .flat_map(|d| d.shifts.iter())
            .any(|s| s.shift == shift && s.understaffed)
    }

    pub(crate) fn slot(&self, day: usize, shift: usize) -> Option<&ShiftStaffing> {
        self.days.get(day)?.shifts.get(shift)
    }

    pub(crate) fn slot_mut(&mut self, day: usize, shift: usize) -> Option<&mut ShiftStaffing> {
        self.days.get_mut(day)?.shifts.get_mut(shift)
    }
}
