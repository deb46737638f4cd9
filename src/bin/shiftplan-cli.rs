#![forbid(unsafe_code)]
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use shiftplan::{
    demo::{generate_demo_roster, DEMO_NAMES},
    io,
    model::{Calendar, Roster},
    report::{ScheduleRenderer, TextReport},
    scheduler::{
        AssignOptions, AssignReport, ConflictKind, Scheduler, DEFAULT_SOFT_CAP,
        MAX_DAYS_PER_WEEK, MIN_STAFF_PER_SHIFT,
    },
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de planning hebdomadaire par préférences
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Args, Debug)]
struct AssignArgs {
    /// Graine du tirage (aléatoire si absente)
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_SOFT_CAP)]
    soft_cap: usize,
    #[arg(long, default_value_t = MIN_STAFF_PER_SHIFT)]
    min_staff: usize,
    #[arg(long, default_value_t = MAX_DAYS_PER_WEEK)]
    max_days: u32,
}

impl AssignArgs {
    fn options(&self) -> AssignOptions {
        AssignOptions {
            soft_cap: self.soft_cap,
            min_staff: self.min_staff,
            max_days_per_week: self.max_days,
        }
    }

    fn rng(&self) -> StdRng {
        let seed = self.seed.unwrap_or_else(|| {
            let drawn = rand::thread_rng().next_u64();
            // rejouer le run : --seed <valeur>
            eprintln!("seed: {drawn}");
            drawn
        });
        tracing::info!(seed, "random source seeded");
        StdRng::seed_from_u64(seed)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Roster de démonstration aux préférences aléatoires
    Demo {
        /// liste "nom1,nom2,..."
        #[arg(long)]
        names: Option<String>,
        #[command(flatten)]
        assign: AssignArgs,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Importer les préférences d'un CSV et construire le planning
    Assign {
        #[arg(long)]
        csv: String,
        #[command(flatten)]
        assign: AssignArgs,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Construire le planning et signaler trous d'effectif et conflits
    Check {
        #[arg(long)]
        csv: String,
        #[command(flatten)]
        assign: AssignArgs,
        /// Export CSV des trous d'effectif (optionnel)
        #[arg(long)]
        report: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let calendar = Calendar::weekly();

    let code = match cli.cmd {
        Commands::Demo {
            names,
            assign,
            out_json,
            out_csv,
        } => {
            let mut rng = assign.rng();
            let names: Vec<String> = match names {
                Some(list) => split_names(&list),
                None => DEMO_NAMES.iter().map(|n| n.to_string()).collect(),
            };
            let roster = generate_demo_roster(&calendar, names.as_slice(), &mut rng)?;
            let (scheduler, _) = build(roster, assign.options(), &mut rng);
            export(&scheduler, out_json, out_csv)?;
            print!("{}", TextReport::default().render(scheduler.schedule()));
            0
        }
        Commands::Assign {
            csv,
            assign,
            out_json,
            out_csv,
        } => {
            let roster = io::import_preferences_csv(&csv, &calendar)?;
            let (scheduler, _) = build(roster, assign.options(), &mut assign.rng());
            export(&scheduler, out_json, out_csv)?;
            print!("{}", TextReport::default().render(scheduler.schedule()));
            0
        }
        Commands::Check {
            csv,
            assign,
            report,
        } => {
            let roster = io::import_preferences_csv(&csv, &calendar)?;
            let (scheduler, outcome) = build(roster, assign.options(), &mut assign.rng());
            let conflicts = scheduler.detect_conflicts();
            if let Some(path) = report {
                io::export_gaps_csv(path, &outcome.gaps)?;
            }
            if outcome.is_fully_staffed() && conflicts.is_empty() {
                println!("OK: every shift staffed");
                0
            } else {
                for gap in &outcome.gaps {
                    eprintln!(
                        "understaffed: {} {} ({}/{})",
                        gap.day, gap.shift, gap.assigned, gap.required
                    );
                }
                for c in &conflicts {
                    eprintln!(
                        "conflict: {} {} {}",
                        c.employee,
                        c.day.as_deref().unwrap_or("-"),
                        match c.kind {
                            ConflictKind::DoubleAssignment => "double",
                            ConflictKind::WeeklyCapExceeded => "cap",
                            ConflictKind::AssignmentMismatch => "mismatch",
                        }
                    );
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
    };

    std::process::exit(code);
}

fn build(roster: Roster, opts: AssignOptions, rng: &mut StdRng) -> (Scheduler, AssignReport) {
    let mut scheduler = Scheduler::new(roster, opts);
    let outcome = scheduler.run(rng);
    (scheduler, outcome)
}

fn export(scheduler: &Scheduler, out_json: Option<String>, out_csv: Option<String>) -> Result<()> {
    if let Some(path) = out_json {
        io::export_schedule_json(path, scheduler.schedule())?;
    }
    if let Some(path) = out_csv {
        io::export_schedule_csv(path, scheduler.schedule())?;
    }
    Ok(())
}

fn split_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
