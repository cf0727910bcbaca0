use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "courseplan", bin_name = "courseplan", version)]
#[command(
    about = "Register training courses from a spreadsheet and manage their prerequisites",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered courses
    #[command(alias = "ls")]
    List,

    /// Import courses from an .xlsx file, replacing the current list
    #[command(alias = "i")]
    Import {
        /// Workbook to read (first sheet; column A = name, column B = hours)
        file: PathBuf,
    },

    /// Set or clear the prerequisite of a course
    #[command(alias = "pre")]
    Prereq {
        /// Course index (from `list`) or id
        course: String,

        /// Prerequisite index or id; omit to clear
        prerequisite: Option<String>,
    },

    /// Delete all courses (irreversible)
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Check the course list for broken prerequisites and fix them
    Doctor,

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, import-extensions)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the data directory
    Init,
}
