pub mod control;
pub mod create;
pub mod status;

use anyhow::Result;

use crate::cli::Command;

pub fn dispatch(cmd: Option<Command>) -> Result<()> {
    match cmd.unwrap_or(Command::Console) {
        Command::Console => crate::tui::app::run(),
        Command::List { json } => status::list(json),
        Command::Create {
            name,
            kind,
            duration,
            schedule,
        } => create::run(&name, &kind, duration, schedule.as_deref()),
        Command::Run { id } => control::run(id),
        Command::Stop { id } => control::stop(id),
        Command::Delete { id } => control::delete(id),
    }
}
