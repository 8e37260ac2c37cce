use clap::{Parser, Subcommand, ValueEnum};
use roster::model::Field;
use roster::report::ReportKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Keep student enrollment records from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Student data file, overriding the configured data-file
    #[arg(
        long,
        global = true,
        env = "ROSTER_DATA_FILE",
        value_name = "PATH",
        help_heading = "Options"
    )]
    pub data_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive numbered menu (default)
    Menu,

    /// Add a new student
    Add {
        #[arg(long)]
        name: String,

        /// Whole years, 5 to 100
        #[arg(long)]
        age: String,

        #[arg(long)]
        email: String,

        /// 10-15 digits, optional leading +
        #[arg(long)]
        phone: String,

        #[arg(long)]
        course: String,
    },

    /// List all students
    #[command(alias = "ls")]
    List,

    /// Search by ID or name (case-insensitive substring)
    Search {
        /// Search term
        term: String,
    },

    /// Update one field of a student
    Update {
        /// Student ID (e.g. STU001)
        id: String,

        field: FieldArg,

        /// New value. For grade, an empty value clears it.
        #[arg(default_value = "")]
        value: String,
    },

    /// Delete a student
    #[command(alias = "rm")]
    Delete {
        /// Student ID (e.g. STU001)
        id: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Assign a grade (A, B, C, D, F); omit it to clear
    Grade {
        /// Student ID (e.g. STU001)
        id: String,

        grade: Option<String>,
    },

    /// Print a report
    Report {
        #[arg(value_enum)]
        kind: ReportArg,
    },

    /// Export all records to a text file in the export directory
    Export {
        /// File name without extension (default: students_export_<timestamp>)
        name: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, export-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FieldArg {
    Name,
    Age,
    Email,
    Phone,
    Course,
    Grade,
}

impl From<FieldArg> for Field {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Name => Field::Name,
            FieldArg::Age => Field::Age,
            FieldArg::Email => Field::Email,
            FieldArg::Phone => Field::Phone,
            FieldArg::Course => Field::Course,
            FieldArg::Grade => Field::Grade,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportArg {
    #[value(alias = "by-course")]
    Course,
    #[value(alias = "by-grade")]
    Grade,
    Ungraded,
    #[value(alias = "statistics")]
    Stats,
}

impl From<ReportArg> for ReportKind {
    fn from(arg: ReportArg) -> Self {
        match arg {
            ReportArg::Course => ReportKind::ByCourse,
            ReportArg::Grade => ReportKind::ByGrade,
            ReportArg::Ungraded => ReportKind::Ungraded,
            ReportArg::Stats => ReportKind::Statistics,
        }
    }
}
