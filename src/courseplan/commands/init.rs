use crate::commands::{CmdMessage, CmdResult, CourseplanPaths};
use crate::config::CourseplanConfig;
use crate::error::Result;
use std::fs;

pub fn run(paths: &CourseplanPaths) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    fs::create_dir_all(dir)?;

    let config = CourseplanConfig::load(dir)?;
    if !dir.join("config.json").exists() {
        config.save(dir)?;
    }

    let mut result = CmdResult::default().with_config(config);
    result.add_message(CmdMessage::success(format!(
        "Initialized courseplan store at {}",
        dir.display()
    )));
    Ok(result)
}
