use anyhow::{Context, Result};
use career_match::auth::{self, LoginError};
use career_match::career::{validate_scoring, ScoringTable};
use career_match::config::{self, Config};
use career_match::courses::{self, Completion, CourseProgress};
use career_match::dashboard::{self, PendingAction};
use career_match::notifications::NotificationCenter;
use career_match::output;
use career_match::profile::{self, find_area, ProfileEdit, SaveOutcome};
use career_match::quiz::{self, AnswerSet, QUESTIONS};
use career_match::routes::{self, Route};
use career_match::store::{get_store_path, KvStore};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_AUTH: i32 = 1;
const EXIT_STORAGE: i32 = 2;
const EXIT_INVALID: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum QuizCommand {
    /// Show the questions and your current answers
    Show,
    /// Answer one question
    Answer {
        /// Question id (q1..q8)
        question: String,
        /// Option key (q1_data) or its suffix (data)
        option: String,
    },
    /// Answer the questions one by one
    Take,
    /// Score the answers and store the suggested area
    Submit,
    /// Forget answers and result
    Reset,
}

#[derive(Subcommand, Debug)]
enum CoursesCommand {
    /// List microcourses for your suggested area
    List {
        /// Show the whole catalogue
        #[arg(long)]
        all: bool,
    },
    /// Mark a microcourse as completed
    Complete {
        /// Course id, as shown in the list
        id: String,
    },
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    /// Show the saved profile, or the draft being edited
    Show,
    /// Edit draft fields
    Edit {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        role: Option<String>,
        /// Comma or semicolon separated
        #[arg(long)]
        skills: Option<String>,
        /// Fraction between 0 and 1
        #[arg(long, conflicts_with = "clear_progress")]
        progress: Option<f64>,
        /// Unset progress
        #[arg(long)]
        clear_progress: bool,
    },
    /// Add an area of interest
    AreaAdd { area: String },
    /// Remove an area of interest
    AreaRemove { area: String },
    /// Validate the draft without saving
    Validate,
    /// Validate and save the draft
    Save {
        /// Save the corrected record even if critical checks fail
        #[arg(long)]
        apply: bool,
    },
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in with a demo account
    Login {
        #[arg(long)]
        email: Option<String>,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Summary of your progress (default if no subcommand)
    Dashboard,
    /// Career quiz
    #[command(subcommand)]
    Quiz(QuizCommand),
    /// Show the stored career result
    Result,
    /// Recommended microcourses for your suggested area
    Recs,
    /// Microcourse catalogue
    #[command(subcommand)]
    Courses(CoursesCommand),
    /// Progress per track
    Progress,
    /// Profile draft and validation
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// List notifications and mark them read
    Notifications {
        /// Remove all notifications
        #[arg(long)]
        clear: bool,
    },
    /// Show config and data locations
    Config,
    /// About this app
    About,
}

impl Commands {
    fn route(&self) -> Route {
        match self {
            Commands::Login { .. } => Route::Login,
            Commands::Logout | Commands::Config => Route::Splash,
            Commands::About => Route::About,
            Commands::Whoami | Commands::Dashboard | Commands::Notifications { .. } => Route::Home,
            Commands::Quiz(_) | Commands::Result => Route::Quiz,
            Commands::Recs => Route::Recommendations,
            Commands::Courses(_) => Route::MicroCourses,
            Commands::Progress => Route::Progress,
            Commands::Profile(_) => Route::Profile,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "career-match")]
#[command(about = "Career orientation quiz, profile and microcourses", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/career-match/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Failure that maps onto a specific exit code
struct Exit {
    code: i32,
    message: String,
}

impl Exit {
    fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    fn storage(err: anyhow::Error) -> Self {
        Self::new(EXIT_STORAGE, format!("Storage error: {:#}", err))
    }
}

impl From<anyhow::Error> for Exit {
    fn from(err: anyhow::Error) -> Self {
        Exit::storage(err)
    }
}

struct App {
    store: KvStore,
    notices: NotificationCenter,
    table: ScoringTable,
    use_colors: bool,
    verbose: bool,
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Dashboard);

    let config_path = cli.config.map(PathBuf::from);
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let effective_scoring = config.scoring.clone().unwrap_or_default();
    if let Err(errors) = validate_scoring(&effective_scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    let table = ScoringTable::with_overrides(&effective_scoring);

    let store_path = get_store_path(&config::get_data_dir(&config));
    if cli.verbose {
        eprintln!("Store: {}", store_path.display());
    }
    let store = match KvStore::open(&store_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Storage error: {:#}", e);
            std::process::exit(EXIT_STORAGE);
        }
    };
    if cli.verbose {
        eprintln!("Loaded {} stored keys", store.len());
        eprintln!("Scoring table has {} option keys", table.len());
    }

    let notices = NotificationCenter::load(&store);
    let mut app = App {
        store,
        notices,
        table,
        use_colors: output::should_use_colors(),
        verbose: cli.verbose,
    };

    let target = command.route();
    let resolved = routes::guard(&app.store, target.clone());
    if resolved != target {
        eprintln!("Please sign in first.");
        eprintln!("Next: {}", resolved.command_hint());
        std::process::exit(EXIT_AUTH);
    }

    let result = run(&mut app, command, &config);

    if let Err(e) = app.notices.save(&mut app.store) {
        eprintln!("Failed to save notifications: {:#}", e);
    }

    match result {
        Ok(next) => {
            if let Some(route) = next {
                println!();
                println!("Next: {}", route.command_hint());
            }
            std::process::exit(EXIT_SUCCESS);
        }
        Err(exit) => {
            eprintln!("{}", exit.message);
            std::process::exit(exit.code);
        }
    }
}

/// Run one command. Returns the route worth visiting next, if any.
fn run(app: &mut App, command: Commands, settings: &Config) -> Result<Option<Route>, Exit> {
    match command {
        Commands::Login { email } => login(app, email),
        Commands::Logout => {
            if auth::logout(&mut app.store)? {
                println!("Signed out.");
            } else {
                println!("Not signed in.");
            }
            Ok(None)
        }
        Commands::Whoami => {
            match auth::current_user(&app.store) {
                Some(user) => println!("{} <{}>", user.name, user.email),
                None => println!("Signed in (no user details stored)"),
            }
            Ok(None)
        }
        Commands::Dashboard => {
            let summary = dashboard::build_summary(&app.store, &mut app.notices);
            let unread = app.notices.unread_count();
            println!("{}", output::format_dashboard(&summary, unread, app.use_colors));
            Ok(summary.pending.first().map(|action| match action {
                PendingAction::TakeQuiz => Route::Quiz,
                PendingAction::CompleteProfile => Route::Profile,
                PendingAction::StartCourse => Route::MicroCourses,
            }))
        }
        Commands::Quiz(cmd) => run_quiz(app, cmd),
        Commands::Result => {
            match quiz::load_result(&app.store) {
                Some(category) => println!("Suggested area: {}", category),
                None => {
                    println!("No result yet.");
                    return Ok(Some(Route::Quiz));
                }
            }
            Ok(Some(Route::Recommendations))
        }
        Commands::Recs => {
            let rec = courses::recommendations(quiz::load_result(&app.store));
            println!(
                "{}",
                output::format_recommendation(rec.as_ref(), app.use_colors)
            );
            Ok(Some(if rec.is_some() {
                Route::MicroCourses
            } else {
                Route::Quiz
            }))
        }
        Commands::Courses(cmd) => run_courses(app, cmd),
        Commands::Progress => {
            let progress = CourseProgress::load(&app.store, &mut app.notices);
            println!(
                "{}",
                output::format_tracks(&courses::track_progress(&progress), &progress)
            );
            Ok(None)
        }
        Commands::Profile(cmd) => run_profile(app, cmd),
        Commands::Notifications { clear } => {
            if clear {
                app.notices.clear();
                println!("Notifications cleared.");
            } else {
                println!(
                    "{}",
                    output::format_notifications(app.notices.notices(), app.use_colors)
                );
                app.notices.mark_all_read();
            }
            Ok(None)
        }
        Commands::Config => {
            println!("Config file: {}", config::get_config_path().display());
            let data_dir = config::get_data_dir(settings);
            println!("Store:       {}", get_store_path(&data_dir).display());
            let overrides = settings
                .scoring
                .as_ref()
                .map(|s| s.overrides.len())
                .unwrap_or(0);
            println!("Scoring overrides: {}", overrides);
            Ok(None)
        }
        Commands::About => {
            println!("career-match {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Answer a short quiz to discover which tech career suits you,");
            println!("keep a validated profile and follow microcourses for your area.");
            println!();
            println!("Areas: Engenharia de Software, UX/UI Design, Data Science, Gestão de Projetos");
            Ok(None)
        }
    }
}

fn login(app: &mut App, email: Option<String>) -> Result<Option<Route>, Exit> {
    let email = match email {
        Some(e) => e,
        None => prompt("Email: ")?,
    };
    let password = rpassword::prompt_password("Password: ")
        .context("Failed to read password")
        .map_err(|e| Exit::new(EXIT_AUTH, format!("{:#}", e)))?;

    match auth::login(&mut app.store, &email, &password) {
        Ok(user) => {
            println!("Welcome, {}!", user.first_name());
            app.notices
                .info("Signed in", format!("Welcome back, {}", user.first_name()));
            if app.verbose {
                eprintln!("Session stored for {}", user.email);
            }
            Ok(Some(routes::initial_route(&app.store)))
        }
        Err(LoginError::StoreFailed(msg)) => {
            Err(Exit::new(EXIT_STORAGE, format!("Storage error: {}", msg)))
        }
        Err(e) => Err(Exit::new(EXIT_AUTH, e.to_string())),
    }
}

fn run_quiz(app: &mut App, cmd: QuizCommand) -> Result<Option<Route>, Exit> {
    let mut answers = quiz::load_answers(&app.store, &mut app.notices);

    match cmd {
        QuizCommand::Show => {
            println!(
                "{}",
                output::format_questions(QUESTIONS, &answers, app.use_colors)
            );
            let missing = answers.unanswered(QUESTIONS).len();
            println!();
            println!("{}/{} answered", QUESTIONS.len() - missing, QUESTIONS.len());
            Ok(None)
        }
        QuizCommand::Answer { question, option } => {
            let chosen = quiz::check_selection(&question, &option)
                .map_err(|e| Exit::new(EXIT_INVALID, e.to_string()))?;
            answers.select(question.trim(), chosen.key);
            quiz::save_answers(&mut app.store, &answers)?;
            println!("{}: {}", question.trim(), chosen.label);
            if answers.unanswered(QUESTIONS).is_empty() {
                println!("All questions answered.");
                println!("Next: career-match quiz submit");
            }
            Ok(None)
        }
        QuizCommand::Take => {
            take_quiz(app, &mut answers)?;
            if !answers.unanswered(QUESTIONS).is_empty() {
                println!("Progress saved. Run the quiz again to continue.");
                return Ok(None);
            }
            submit(app, &answers)
        }
        QuizCommand::Submit => {
            if answers.is_empty() {
                return Err(Exit::new(EXIT_INVALID, "Answer at least one question first"));
            }
            let missing = answers.unanswered(QUESTIONS);
            if !missing.is_empty() && app.verbose {
                eprintln!("Submitting with {} unanswered question(s)", missing.len());
            }
            submit(app, &answers)
        }
        QuizCommand::Reset => {
            quiz::reset_quiz(&mut app.store)?;
            println!("Quiz answers and result cleared.");
            Ok(None)
        }
    }
}

fn take_quiz(app: &mut App, answers: &mut AnswerSet) -> Result<(), Exit> {
    for question in QUESTIONS {
        println!();
        println!("{}. {}", question.id, question.text);
        for (i, option) in question.options.iter().enumerate() {
            let mark = if answers.get(question.id) == Some(option.key) {
                "*"
            } else {
                " "
            };
            println!(" {}{}) {}", mark, i + 1, option.label);
        }

        loop {
            let input = prompt(&format!(
                "Choice [1-{}] (enter to keep, q to stop): ",
                question.options.len()
            ))?;
            if input.is_empty() {
                break;
            }
            if input.eq_ignore_ascii_case("q") {
                return Ok(());
            }
            match input.parse::<usize>() {
                Ok(n) if (1..=question.options.len()).contains(&n) => {
                    answers.select(question.id, question.options[n - 1].key);
                    quiz::save_answers(&mut app.store, answers)?;
                    break;
                }
                _ => println!("Please enter a number between 1 and {}.", question.options.len()),
            }
        }
    }
    Ok(())
}

fn submit(app: &mut App, answers: &AnswerSet) -> Result<Option<Route>, Exit> {
    let outcome = quiz::submit_quiz(&mut app.store, answers, &app.table)?;
    println!("{}", output::format_outcome(&outcome, app.use_colors));
    app.notices
        .success("Quiz completed", format!("Suggested area: {}", outcome.result));
    Ok(Some(Route::Recommendations))
}

fn run_courses(app: &mut App, cmd: CoursesCommand) -> Result<Option<Route>, Exit> {
    let mut progress = CourseProgress::load(&app.store, &mut app.notices);

    match cmd {
        CoursesCommand::List { all } => {
            let career = if all {
                None
            } else {
                quiz::load_result(&app.store)
            };
            let list = courses::courses_for_career(career);
            if let Some(career) = career {
                println!("Microcourses for {}:", career);
            }
            println!(
                "{}",
                output::format_course_list(&list, &progress, app.use_colors)
            );
            Ok(None)
        }
        CoursesCommand::Complete { id } => {
            match progress
                .complete(&id)
                .map_err(|e| Exit::new(EXIT_INVALID, e.to_string()))?
            {
                Completion::Completed { xp } => {
                    progress.save(&mut app.store)?;
                    let title = courses::find_course(&id).map(|c| c.title).unwrap_or("");
                    println!("Completed \"{}\" (+{} XP)", title, xp);
                    app.notices.success("Microcourse completed", format!("{} (+{} XP)", title, xp));
                }
                Completion::AlreadyDone => println!("Course {} was already completed.", id.trim()),
            }
            Ok(Some(Route::Progress))
        }
    }
}

fn run_profile(app: &mut App, cmd: ProfileCommand) -> Result<Option<Route>, Exit> {
    let mut draft = profile::load_draft(&app.store, &mut app.notices);

    match cmd {
        ProfileCommand::Show => {
            match profile::load_profile(&app.store, &mut app.notices) {
                Some(p) => println!("{}", output::format_profile(&p, app.use_colors)),
                None => println!("No saved profile yet."),
            }
            if app.store.contains(career_match::store::PROFILE_DRAFT_KEY) {
                println!();
                println!("{}", output::format_draft(&draft));
            }
            Ok(None)
        }
        ProfileCommand::Edit {
            name,
            role,
            skills,
            progress,
            clear_progress,
        } => {
            draft.apply_edit(ProfileEdit {
                name,
                role,
                skills,
                progress: if clear_progress { Some(None) } else { progress.map(Some) },
            });
            profile::save_draft(&mut app.store, &draft)?;
            println!("{}", output::format_draft(&draft));
            Ok(Some(Route::ValidateProfile { draft }))
        }
        ProfileCommand::AreaAdd { area } => {
            let known = find_area(&area).ok_or_else(|| {
                Exit::new(
                    EXIT_INVALID,
                    format!(
                        "Unknown area '{}'. Choose one of: {}",
                        area.trim(),
                        profile::AREAS_OF_INTEREST.join(", ")
                    ),
                )
            })?;
            if draft.add_area(known) {
                profile::save_draft(&mut app.store, &draft)?;
                println!("Added {}", known);
            } else {
                println!("{} is already selected", known);
            }
            Ok(None)
        }
        ProfileCommand::AreaRemove { area } => {
            let name = find_area(&area).unwrap_or(area.trim());
            if draft.remove_area(name) {
                profile::save_draft(&mut app.store, &draft)?;
                println!("Removed {}", name);
            } else {
                println!("{} was not selected", name);
            }
            Ok(None)
        }
        ProfileCommand::Validate => {
            let report = profile::validate_profile(&draft);
            println!("{}", output::format_report(&report, app.use_colors));
            Ok(None)
        }
        ProfileCommand::Save { apply } => {
            let outcome = if apply {
                profile::apply_corrections(&mut app.store, &draft)?
            } else {
                profile::save_profile(&mut app.store, &draft)?
            };
            match outcome {
                SaveOutcome::Saved(saved) => {
                    println!("{}", output::format_profile(&saved, app.use_colors));
                    app.notices.success("Profile saved", "");
                    Ok(Some(Route::Home))
                }
                SaveOutcome::SavedWithWarnings { profile, critical } => {
                    println!("{}", output::format_profile(&profile, app.use_colors));
                    let body = format!(
                        "{} correction{} still needed",
                        critical,
                        if critical == 1 { "" } else { "s" }
                    );
                    println!();
                    println!("Saved with {}", body);
                    app.notices.warn("Profile saved with warnings", body);
                    Ok(Some(Route::Profile))
                }
                SaveOutcome::NeedsCorrection { report, route } => {
                    eprintln!("{}", output::format_report(&report, app.use_colors));
                    eprintln!();
                    eprintln!("Next: {}", route.command_hint());
                    eprintln!("Or keep the corrected record anyway: career-match profile save --apply");
                    Err(Exit::new(EXIT_INVALID, "Profile not saved"))
                }
            }
        }
    }
}
