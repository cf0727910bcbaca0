use chrono::{DateTime, Utc};
use colored::Colorize;
use courseplan::api::{CmdMessage, MessageLevel};
use courseplan::config::CourseplanConfig;
use courseplan::index::DisplayCourse;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 32;
const HOURS_WIDTH: usize = 8;
const NO_PREREQUISITE: &str = "-";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_courses(courses: &[DisplayCourse], saved_at: Option<DateTime<Utc>>) {
    if courses.is_empty() {
        println!("No courses registered. Import an .xlsx file to add courses.");
        return;
    }

    let idx_width = courses.len().to_string().len() + 1;

    println!(
        "{}",
        format!(
            "{:<idx_width$} {} {} {}",
            "#",
            pad_to_width("Course", NAME_WIDTH),
            pad_to_width("Hours", HOURS_WIDTH),
            "Prerequisite",
        )
        .bold()
    );

    for dc in courses {
        let idx = format!("{:<idx_width$}", format!("{}.", dc.index));
        let name = pad_to_width(&truncate_to_width(&dc.course.name, NAME_WIDTH), NAME_WIDTH);
        let hours = pad_to_width(&format!("{} h", dc.course.hours), HOURS_WIDTH);
        let prereq = match &dc.prerequisite_name {
            Some(name) => name.normal(),
            None => NO_PREREQUISITE.dimmed(),
        };

        println!("{} {} {} {}", idx.yellow(), name, hours, prereq);
    }

    let total: u64 = courses.iter().map(|dc| u64::from(dc.course.hours)).sum();
    let mut footer = format!("{} course(s), {} hour(s) in total", courses.len(), total);
    if let Some(saved_at) = saved_at {
        footer.push_str(&format!(", saved {}", format_time_ago(saved_at)));
    }
    println!();
    println!("{}", footer.dimmed());
}

pub(super) fn print_config(config: &CourseplanConfig) {
    for key in CourseplanConfig::keys() {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

pub(super) fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

pub(super) fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
