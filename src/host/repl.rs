use crate::core::context::AppContext;
use crate::core::types::{DateKey, PageDirection, SlotLabel};
use crate::engine::SlotEngine;
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use crate::host::SharedSelection;
use crate::logging::LogTarget;
use crate::ui::view::{render, DefaultLabels};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
enum HostCommand {
    #[strum(serialize = "next", to_string = "next")]
    Next,
    #[strum(serialize = "prev", to_string = "prev")]
    Prev,
    #[strum(serialize = "date", to_string = "date")]
    Date,
    #[strum(serialize = "pick", to_string = "pick")]
    Pick,
    #[strum(serialize = "show", to_string = "show")]
    Show,
    #[strum(serialize = "config", to_string = "config")]
    Config,
    #[strum(serialize = "quit", serialize = "exit", to_string = "quit")]
    Quit,
}

impl HostCommand {
    fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Unknown command: '{}'. Valid commands: {}",
                s.trim(),
                valid_csv::<HostCommand>()
            ))
        })
    }
}

/// Stand-in booking screen: drives one engine instance from line commands
/// and echoes the selection the way the real host flows do.
pub struct BookingRepl {
    engine: SlotEngine,
    mirror: SharedSelection,
}

impl BookingRepl {
    pub fn new(ctx: &AppContext) -> Self {
        let mirror = SharedSelection::new();
        let engine = SlotEngine::from_context(ctx).with_observer(Box::new(mirror.clone()));
        Self { engine, mirror }
    }

    pub fn run(&mut self, ctx: &AppContext) -> Result<()> {
        let stdin = io::stdin();
        let reader = stdin.lock();
        let stdout = io::stdout();
        let writer = stdout.lock();
        self.run_with_io(ctx, reader, writer)
    }

    pub fn run_with_io<R: BufRead, W: Write>(
        &mut self,
        ctx: &AppContext,
        reader: R,
        mut out: W,
    ) -> Result<()> {
        self.render_to(&mut out)?;
        writeln!(out, "Commands: {}", valid_csv::<HostCommand>())?;

        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match self.dispatch(ctx, trimmed, &mut out) {
                Ok(true) => break,
                Ok(false) => {}
                Err(err) => {
                    ctx.logger.error(err.to_string(), LogTarget::FileOnly);
                    writeln!(out, "{err}")?;
                }
            }
        }
        Ok(())
    }

    /// Returns true when the loop should stop.
    fn dispatch<W: Write>(&mut self, ctx: &AppContext, line: &str, out: &mut W) -> Result<bool> {
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match HostCommand::try_from(head)? {
            HostCommand::Next | HostCommand::Prev => {
                let direction = PageDirection::try_from(head)?;
                self.engine.page(direction);
                ctx.logger.info(
                    format!("Paged {direction}; anchor {}", self.engine.window().anchor()),
                    LogTarget::FileOnly,
                );
                self.render_to(out)?;
            }
            HostCommand::Date => {
                let date = DateKey::try_from_str(rest)?;
                self.engine.select_date(&date)?;
                ctx.logger
                    .info(format!("Date highlighted: {date}"), LogTarget::FileOnly);
                self.render_to(out)?;
            }
            HostCommand::Pick => {
                let (date_tok, time_tok) = rest.split_once(char::is_whitespace).ok_or_else(|| {
                    Error::Parse("Usage: pick <date> <time> (e.g. pick 2024-03-02 11:30 AM)".into())
                })?;
                let date = DateKey::try_from_str(date_tok)?;
                let time = SlotLabel::try_from_str(time_tok)?;
                self.engine.select_slot(&date, &time)?;
                ctx.logger
                    .info(format!("Slot picked: {date} {time}"), LogTarget::FileOnly);
                self.render_to(out)?;
                if let Some(echo) = self.mirror.echo_line() {
                    writeln!(out, "Selected: {echo}")?;
                }
            }
            HostCommand::Show => match self.mirror.echo_line() {
                Some(echo) => writeln!(out, "Selected: {echo}")?,
                None => writeln!(out, "Nothing selected yet.")?,
            },
            HostCommand::Config => {
                for row in ctx.config.rows().iter() {
                    writeln!(out, "{:<20} {:<40} {}", row.0, row.1, row.2)?;
                }
            }
            HostCommand::Quit => return Ok(true),
        }
        Ok(false)
    }

    fn render_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let snapshot = render(&self.engine, &DefaultLabels, false, None);
        writeln!(out, "{snapshot}")?;
        Ok(())
    }
}
