use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use schoolbook::{Application, Student, StudentService, Teacher, TeacherMapper, TeacherService};
use schoolbook_core::{init_tracing, AppConfig};
use schoolbook_data_sqlx::session;
use serde::Serialize;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(name = "schoolbook", version, about = "Student and teacher records over SQLite")]
struct Cli {
    /// Configuration profile (overridden by SCHOOLBOOK_PROFILE)
    #[arg(long, default_value = "dev")]
    profile: String,

    /// Directory holding application.yaml and .env files
    #[arg(long, default_value = ".")]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Student records
    Student {
        #[command(subcommand)]
        action: StudentAction,
    },
    /// Teacher records
    Teacher {
        #[command(subcommand)]
        action: TeacherAction,
    },
}

#[derive(Subcommand)]
enum StudentAction {
    /// Look a student up by number
    Get { sno: String },
    /// Look a student up by number and name
    Find { sno: String, name: String },
    /// Insert a student
    Add { sno: String, name: String, sex: String },
    /// Rewrite name and sex of an existing student
    Update { sno: String, name: String, sex: String },
    /// Delete a student by number
    Delete { sno: String },
}

#[derive(Subcommand)]
enum TeacherAction {
    /// Look a teacher up by name and class
    Find { name: String, to_class: String },
    /// Insert a teacher
    Add { name: String, age: i32, to_class: String },
    /// Rewrite an existing teacher
    Update {
        id: i32,
        name: String,
        age: i32,
        to_class: String,
    },
    /// Delete a teacher by id
    Delete { id: i32 },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), BoxError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run_student(app: &Application, action: StudentAction) -> Result<(), BoxError> {
    let service = app.student_service()?;
    match action {
        StudentAction::Get { sno } => print_json(&service.query_student_by_sno(&sno).await?),
        StudentAction::Find { sno, name } => {
            print_json(&service.query_student_by_sno_and_name(&sno, &name).await?)
        }
        StudentAction::Add { sno, name, sex } => {
            print_json(&service.add(&Student::new(sno, name, sex)).await?)
        }
        StudentAction::Update { sno, name, sex } => {
            print_json(&service.update(&Student::new(sno, name, sex)).await?)
        }
        StudentAction::Delete { sno } => print_json(&service.delete_by_sno(&sno).await?),
    }
}

async fn run_teacher(app: &Application, action: TeacherAction) -> Result<(), BoxError> {
    let service = app.teacher_service()?;
    let mapper: TeacherMapper = app.get()?;
    match action {
        TeacherAction::Find { name, to_class } => {
            print_json(&service.query_teacher_by_name_and_to_class(&name, &to_class).await?)
        }
        TeacherAction::Add {
            name,
            age,
            to_class,
        } => {
            let mut conn = session::acquire(app.pool()).await?;
            let teacher = Teacher::new(name, age, to_class);
            print_json(&mapper.add(&mut *conn, &teacher).await?)
        }
        TeacherAction::Update {
            id,
            name,
            age,
            to_class,
        } => {
            let mut conn = session::acquire(app.pool()).await?;
            let teacher = Teacher::new(name, age, to_class).with_id(id);
            print_json(&mapper.update(&mut *conn, &teacher).await?)
        }
        TeacherAction::Delete { id } => {
            let mut conn = session::acquire(app.pool()).await?;
            print_json(&mapper.delete_by_id(&mut *conn, id).await?)
        }
    }
}

async fn run(cli: Cli) -> Result<(), BoxError> {
    let config = AppConfig::load_from(&cli.config_dir, &cli.profile)?;
    let app = Application::bootstrap(&config).await?;

    let result = match cli.command {
        Commands::Student { action } => run_student(&app, action).await,
        Commands::Teacher { action } => run_teacher(&app, action).await,
    };

    app.shutdown().await;
    result
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            ExitCode::FAILURE
        }
    }
}
