use crate::model::Schedule;

pub const REPORT_TITLE: &str = "WEEKLY EMPLOYEE SCHEDULE";
pub const EMPTY_SHIFT: &str = "No staff assigned";

/// Permet de customiser le rendu du planning (texte, markdown, etc.).
pub trait ScheduleRenderer {
    fn render(&self, schedule: &Schedule) -> String;
}

/// Rapport texte : bannière, puis un bloc par jour et une ligne par shift.
#[derive(Debug, Clone, Copy)]
pub struct TextReport {
    pub width: usize,
}

impl Default for TextReport {
    fn default() -> Self {
        Self { width: 60 }
    }
}

impl ScheduleRenderer for TextReport {
    fn render(&self, schedule: &Schedule) -> String {
        let bar = "=".repeat(self.width);
        let title = format!("{:^width$}", REPORT_TITLE, width = self.width);
        let mut out = String::new();

        out.push_str(&format!("{bar}\n{}\n{bar}\n", title.trim_end()));
        for day in &schedule.days {
            out.push_str(&format!("\n[ {} ]\n", day.day.to_uppercase()));
            for slot in &day.shifts {
                let workers = if slot.staff.is_empty() {
                    EMPTY_SHIFT.to_string()
                } else {
                    slot.staff.join(", ")
                };
                let flag = if slot.understaffed { " [understaffed]" } else { "" };
                out.push_str(&format!("  {:<10}: {workers}{flag}\n", slot.shift));
            }
        }
        out.push_str(&format!("\n{bar}\n"));
        out
    }
}
