use crate::model::{Calendar, Employee, Roster, Schedule};
use crate::scheduler::StaffingGap;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Import des préférences depuis CSV: header `name,day,first[,second][,third]`
pub fn import_preferences_csv<P: AsRef<Path>>(
    path: P,
    calendar: &Calendar,
) -> anyhow::Result<Roster> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("reading {}", path.display()))?;
    read_preferences(file, calendar).with_context(|| format!("parsing {}", path.display()))
}

/// Une ligne par (employé, jour). Jour vide = employé sans préférence.
pub fn read_preferences<R: Read>(reader: R, calendar: &Calendar) -> anyhow::Result<Roster> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let mut employees: Vec<Employee> = Vec::new();

    for (idx, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let row = idx + 2;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("row {row}: empty employee name");
        }
        let day = rec.get(1).map(str::trim).unwrap_or("");
        let shifts: Vec<&str> = rec
            .iter()
            .skip(2)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        let pos = match employees.iter().position(|e| e.name == name) {
            Some(pos) => pos,
            None => {
                employees.push(Employee::new(name));
                employees.len() - 1
            }
        };

        if day.is_empty() {
            if !shifts.is_empty() {
                bail!("row {row}: shifts listed without a day for {name}");
            }
            continue;
        }
        let employee = &mut employees[pos];
        if employee.preferences().contains_key(day) {
            bail!("row {row}: duplicate preference row for {name} on {day}");
        }
        employee.add_preference(day, shifts);
    }

    let mut roster = Roster::new(calendar.clone());
    for employee in employees {
        roster.add_employee(employee)?;
    }
    Ok(roster)
}

/// Export JSON du planning (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(schedule)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV du planning: header `day,shift,position,employee`
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["day", "shift", "position", "employee"])?;
    for day in &schedule.days {
        for slot in &day.shifts {
            for (pos, name) in slot.staff.iter().enumerate() {
                let position = (pos + 1).to_string();
                w.write_record([
                    day.day.as_str(),
                    slot.shift.as_str(),
                    position.as_str(),
                    name.as_str(),
                ])?;
            }
        }
    }
    w.flush()?;
    Ok(())
}

/// Export CSV des trous d'effectif: header `day,shift,assigned,required`
pub fn export_gaps_csv<P: AsRef<Path>>(path: P, gaps: &[StaffingGap]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["day", "shift", "assigned", "required"])?;
    for gap in gaps {
        let assigned = gap.assigned.to_string();
        let required = gap.required.to_string();
        w.write_record([
            gap.day.as_str(),
            gap.shift.as_str(),
            assigned.as_str(),
            required.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
